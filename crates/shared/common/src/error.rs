//! Unified application error handling.
//!
//! Domain and storage failures are funneled into [`AppError`] at the outer
//! edge (the CLI), which turns them into a message and a process exit code.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error("{0}")]
    Validation(String),

    // Business rules
    #[error("{0}")]
    Conflict(String),

    // Persistence
    #[error("Storage error: {0}")]
    Storage(String),

    // Output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get short error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Io(_) => "IO_ERROR",
        }
    }

    /// Get user-facing message (logs storage and I/O details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Conflict(msg) => msg.clone(),
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                self.to_string()
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                self.to_string()
            }
        }
    }

    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => 1,
            AppError::Storage(_) | AppError::Io(_) => 2,
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        if err.is_conflict() {
            AppError::Conflict(err.to_string())
        } else {
            AppError::Validation(err.to_string())
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::Storage(msg.into())
    }
}
