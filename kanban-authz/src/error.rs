//! Error types for authorization
//!
//! A denial is not an error: checks return a [`kanban_rbac::Decision`]. The
//! errors here are structural failures that must reach the caller unchanged,
//! plus the two boundary renderings of a denial used by `enforce`-style APIs.

use thiserror::Error;
use uuid::Uuid;

/// Failure reported by an identity or board store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store was reached but the read failed
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Result type for store reads.
pub type StoreResult<T> = Result<T, StoreError>;

/// Authorization error types.
#[derive(Debug, Error)]
pub enum AuthzError {
    /// The referenced board does not exist
    #[error("Board not found: {0}")]
    BoardNotFound(Uuid),

    /// The identity or board store could not answer
    #[error("Dependency unavailable: {0}")]
    DependencyUnavailable(#[from] StoreError),

    /// No authenticated actor
    #[error("Unauthenticated")]
    Unauthenticated,

    /// The actor lacks the required permission
    #[error("Forbidden: insufficient permissions")]
    Forbidden,
}

/// Result type for authorization operations.
pub type AuthzResult<T> = Result<T, AuthzError>;

impl AuthzError {
    /// Check if this error should be logged at error level.
    ///
    /// Denials are expected outcomes and are not server errors.
    pub fn is_server_error(&self) -> bool {
        matches!(self, AuthzError::DependencyUnavailable(_))
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthzError::BoardNotFound(_) => 404,
            AuthzError::DependencyUnavailable(_) => 503,
            AuthzError::Unauthenticated => 401,
            AuthzError::Forbidden => 403,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthzError::BoardNotFound(_) => "BOARD_NOT_FOUND",
            AuthzError::DependencyUnavailable(_) => "DEPENDENCY_UNAVAILABLE",
            AuthzError::Unauthenticated => "UNAUTHENTICATED",
            AuthzError::Forbidden => "FORBIDDEN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthzError::BoardNotFound(Uuid::nil()).status_code(), 404);
        assert_eq!(AuthzError::Unauthenticated.status_code(), 401);
        assert_eq!(AuthzError::Forbidden.status_code(), 403);
        assert_eq!(
            AuthzError::from(StoreError::Unavailable("db down".into())).status_code(),
            503
        );
    }

    #[test]
    fn test_store_error_converts() {
        let err: AuthzError = StoreError::Backend("timeout".into()).into();
        assert!(err.is_server_error());
        assert_eq!(err.error_code(), "DEPENDENCY_UNAVAILABLE");
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_forbidden_hides_reason() {
        assert_eq!(AuthzError::Forbidden.to_string(), "Forbidden: insufficient permissions");
        assert!(!AuthzError::Forbidden.is_server_error());
    }
}
