//! Repository error types
//!
//! # Example
//!
//! ```rust
//! use author_service::repository::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
//!
//! let error = RepositoryError::unknown_field(RepositoryOperation::FindAll, "Author", "height");
//! assert_eq!(error.kind, RepositoryErrorKind::ValidationFailed);
//! assert_eq!(error.entity_type.as_deref(), Some("Author"));
//! ```

use std::fmt;

/// Operation being performed when the repository error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Listing entities with filter and sort options
    FindAll,
    /// Reading a single entity by identifier
    FindOne,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FindAll => write!(f, "find_all"),
            Self::FindOne => write!(f, "find_one"),
        }
    }
}

/// Category of repository error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Options rejected before the query ran (unknown field, mismatched value type)
    ValidationFailed,
    /// Datastore unreachable
    ConnectionFailed,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed => write!(f, "validation_failed"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
        }
    }
}

/// Structured repository error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The type of entity involved (e.g., "Author")
    pub entity_type: Option<String>,
}

impl RepositoryError {
    /// Create a new repository error
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_type: None,
        }
    }

    /// Create a validation failed error
    pub fn validation_failed(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::ValidationFailed, message)
    }

    /// Filter or sort references a field the entity does not expose
    pub fn unknown_field(
        operation: RepositoryOperation,
        entity_type: impl Into<String>,
        field: &str,
    ) -> Self {
        let mut error =
            Self::validation_failed(operation, format!("unknown field `{field}`"));
        error.entity_type = Some(entity_type.into());
        error
    }

    /// Create a connection failed error
    pub fn connection_failed(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::ConnectionFailed, message)
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let Some(entity_type) = &self.entity_type {
            write!(f, " [{entity_type}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for RepositoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_operation_display() {
        assert_eq!(format!("{}", RepositoryOperation::FindAll), "find_all");
        assert_eq!(format!("{}", RepositoryOperation::FindOne), "find_one");
    }

    #[test]
    fn test_repository_error_kind_display() {
        assert_eq!(
            format!("{}", RepositoryErrorKind::ValidationFailed),
            "validation_failed"
        );
        assert_eq!(
            format!("{}", RepositoryErrorKind::ConnectionFailed),
            "connection_failed"
        );
    }

    #[test]
    fn test_unknown_field_display() {
        let error =
            RepositoryError::unknown_field(RepositoryOperation::FindAll, "Author", "height");
        assert_eq!(
            error.to_string(),
            "Repository validation_failed error during find_all: unknown field `height` [Author]"
        );
    }

    #[test]
    fn test_display_without_entity() {
        let error =
            RepositoryError::connection_failed(RepositoryOperation::FindOne, "connection refused");
        assert_eq!(error.entity_type, None);
        assert_eq!(
            error.to_string(),
            "Repository connection_failed error during find_one: connection refused"
        );
    }
}
