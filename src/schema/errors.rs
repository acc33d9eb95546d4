//! Contract definition errors

use thiserror::Error;

/// Result type for definition loading and registration
pub type DefinitionResult<T> = Result<T, DefinitionError>;

/// Contract definition errors
#[derive(Debug, Clone, Error)]
pub enum DefinitionError {
    #[error("Malformed contract definition at {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("Invalid contract definition {contract_id}: {reason}")]
    Invalid { contract_id: String, reason: String },

    #[error("Contract definition already registered: {0}")]
    Duplicate(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl DefinitionError {
    /// Malformed file content at a path
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        DefinitionError::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Structurally invalid definition
    pub fn invalid(contract_id: impl Into<String>, reason: impl Into<String>) -> Self {
        DefinitionError::Invalid {
            contract_id: contract_id.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DefinitionError::malformed("contracts/x.json", "not JSON");
        assert!(err.to_string().contains("contracts/x.json"));
        assert!(err.to_string().contains("not JSON"));

        let err = DefinitionError::Duplicate("lpn".to_string());
        assert!(err.to_string().contains("already registered"));
    }
}
