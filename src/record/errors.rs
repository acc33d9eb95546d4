//! Record decode errors

use thiserror::Error;

/// Result type for record decoding
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors raised when stored bytes cannot be decoded as a record.
///
/// Decoding is deliberately permissive (see [`crate::record::Record::from_bytes`]),
/// so these only surface for bytes that are present but unusable.
#[derive(Debug, Clone, Error)]
pub enum RecordError {
    #[error("Malformed record: {0}")]
    Syntax(String),

    #[error("Malformed record: not a JSON object")]
    NotAnObject,

    #[error("Malformed record: field {0} is not a string")]
    FieldType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert!(RecordError::Syntax("truncated".to_string())
            .to_string()
            .contains("truncated"));
        assert!(RecordError::FieldType("Expiry".to_string())
            .to_string()
            .contains("Expiry"));
    }
}
