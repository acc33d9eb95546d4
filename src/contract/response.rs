//! Response envelope
//!
//! The shape the invocation transport carries back: success with a byte
//! payload, or failure with a human-readable message. No structured error
//! codes; the message is the whole story.

use super::errors::ContractError;

/// Result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Operation succeeded; payload may be empty
    Success { payload: Vec<u8> },
    /// Operation failed; message only
    Failure { message: String },
}

impl Response {
    /// Success with a payload.
    pub fn success(payload: Vec<u8>) -> Self {
        Response::Success { payload }
    }

    /// Success with an empty payload.
    pub fn ok() -> Self {
        Response::Success {
            payload: Vec::new(),
        }
    }

    /// Failure from an operation error.
    pub fn failure(err: &ContractError) -> Self {
        Response::Failure {
            message: err.to_string(),
        }
    }

    /// Whether this is a success response.
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success { .. })
    }

    /// The payload bytes, if success.
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Response::Success { payload } => Some(payload),
            Response::Failure { .. } => None,
        }
    }

    /// The failure message, if failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            Response::Success { .. } => None,
            Response::Failure { message } => Some(message),
        }
    }
}
