//! Page-level error type
//!
//! Pages fail in two ways: locally, before anything is sent, or at the
//! gateway. Both keep the action re-attemptable.

use postapi_client::GatewayError;
use postapi_core::PostApiError;
use thiserror::Error;

/// Error returned by page actions
#[derive(Debug, Error)]
pub enum AppError {
    /// Local validation failure; nothing reached the backend
    #[error(transparent)]
    Invalid(#[from] PostApiError),

    /// The backend call failed
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The action is not available in the current state
    #[error("{0}")]
    Unavailable(String),
}

impl AppError {
    /// Message to show the user
    ///
    /// Validation messages are shown as-is; gateway causes are hidden.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Invalid(err) => err.to_string(),
            AppError::Gateway(err) => err.user_message().to_string(),
            AppError::Unavailable(reason) => reason.clone(),
        }
    }

    /// Check if the backend reported the target as missing
    pub fn is_not_found(&self) -> bool {
        match self {
            AppError::Gateway(err) => err.is_not_found(),
            AppError::Invalid(err) => err.is_not_found(),
            AppError::Unavailable(_) => false,
        }
    }

    /// Check if this failed before reaching the backend
    pub fn is_local(&self) -> bool {
        !matches!(self, AppError::Gateway(_))
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
