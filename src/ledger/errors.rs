//! Ledger accessor errors

use thiserror::Error;

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// An error raised by a ledger accessor.
///
/// The accessor owns the wording; this crate passes the text through to
/// failure responses verbatim and attaches nothing of its own.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct LedgerError {
    message: String,
}

impl LedgerError {
    /// Wraps an accessor's own error text.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The accessor's error text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_passed_through_verbatim() {
        let err = LedgerError::new("MVCC conflict at version 7");
        assert_eq!(err.to_string(), "MVCC conflict at version 7");
        assert_eq!(err.message(), "MVCC conflict at version 7");
    }
}
