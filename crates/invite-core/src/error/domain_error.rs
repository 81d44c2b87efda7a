//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// Business outcomes such as an unknown or already used code are not errors;
/// see `RedemptionOutcome` in the service layer. Everything here is a failure.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Integrity Errors
    // =========================================================================
    #[error("Lookup for invitation code {code:?} returned {rows} rows")]
    IntegrityViolation { code: String, rows: usize },

    #[error("Invalid table name: {0}")]
    InvalidTableName(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::IntegrityViolation { .. } => "INTEGRITY_ERROR",
            Self::InvalidTableName(_) => "CONFIG_ERROR",
            Self::DatabaseError(_) => "STORE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this error came from the store or its data
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::IntegrityViolation { .. })
    }
}
