//! Contract operation errors
//!
//! Errors from lower layers pass through unchanged: a failure response carries
//! the ledger accessor's or record decoder's own message, with nothing wrapped
//! around it. Every error is recovered at the invocation boundary; none is
//! fatal to the host.

use thiserror::Error;

use crate::ledger::LedgerError;
use crate::record::RecordError;

/// Result type for operation handlers
pub type ContractResult<T> = Result<T, ContractError>;

/// Errors an operation can surface to the transport.
#[derive(Debug, Clone, Error)]
pub enum ContractError {
    /// Wrong number of positional arguments for the operation
    #[error("Incorrect number of arguments. Expecting {expected}")]
    ArgumentCount { expected: usize },

    /// Operation name not in the active contract's table
    #[error("Invalid Smart Contract function name.")]
    UnknownOperation,

    /// Ledger accessor failure, passed through verbatim
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Stored bytes present but undecodable
    #[error(transparent)]
    Record(#[from] RecordError),
}

impl ContractError {
    /// Arity-mismatch error naming the expected count.
    pub fn argument_count(expected: usize) -> Self {
        ContractError::ArgumentCount { expected }
    }
}
