//! Domain error types

use thiserror::Error;

/// Lookup failures surfaced by the revision registry
///
/// Both variants are local, recoverable conditions. They are never
/// silently defaulted: declaring a wrong descriptor would be rejected
/// at the protocol level downstream, far away from the actual mistake.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown tool revision: {0}")]
    UnknownRevision(String),

    #[error("Unknown model: {0}")]
    UnknownModel(String),
}

impl RegistryError {
    /// The identifier that failed to resolve
    pub fn offending_id(&self) -> &str {
        match self {
            RegistryError::UnknownRevision(id) => id,
            RegistryError::UnknownModel(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_revision_display() {
        let error = RegistryError::UnknownRevision("20230101".to_string());
        assert_eq!(error.to_string(), "Unknown tool revision: 20230101");
    }

    #[test]
    fn test_unknown_model_display() {
        let error = RegistryError::UnknownModel("claude-9".to_string());
        assert_eq!(error.to_string(), "Unknown model: claude-9");
    }

    #[test]
    fn test_offending_id() {
        assert_eq!(
            RegistryError::UnknownRevision("x".to_string()).offending_id(),
            "x"
        );
        assert_eq!(
            RegistryError::UnknownModel("y".to_string()).offending_id(),
            "y"
        );
    }
}
