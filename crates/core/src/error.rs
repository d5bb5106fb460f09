//! Error types for PostAPI Studio
//!
//! This module provides the unified error type shared by the model,
//! code generation and application crates. Gateway (network) failures have
//! their own type in `postapi_client`; everything local lives here.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for PostAPI Studio
#[derive(Debug, Error)]
pub enum PostApiError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Mock data failed the array-of-objects contract
    #[error("{0}")]
    MockData(String),

    /// Resource draft validation failed
    #[error("Resource validation failed for '{resource}': {message}")]
    ResourceValidation { resource: String, message: String },

    /// Project draft validation failed
    #[error("Project validation failed for '{project}': {message}")]
    ProjectValidation { project: String, message: String },

    /// A primary key was chosen that is not a field of the mock data
    #[error("'{key}' is not a field of the mock data (expected one of: {candidates})")]
    UnknownPrimaryKey { key: String, candidates: String },

    /// Unknown method tag
    #[error("Unknown method '{0}' (expected GET, POST, GET_BY_ID, PUT or DELETE)")]
    UnknownMethod(String),

    /// Unknown sample-data template
    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Project not found
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// Definition file not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Invalid definition file format
    #[error("Invalid definition file format: {0}")]
    InvalidFormat(String),

    /// Schema version mismatch
    #[error("Schema version mismatch: expected at most {expected}, found {found}")]
    SchemaVersionMismatch { expected: u32, found: u32 },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl PostApiError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        PostApiError::Validation(msg.into())
    }

    /// Create a resource validation error
    pub fn resource_validation(resource: impl Into<String>, msg: impl Into<String>) -> Self {
        PostApiError::ResourceValidation {
            resource: resource.into(),
            message: msg.into(),
        }
    }

    /// Create a project validation error
    pub fn project_validation(project: impl Into<String>, msg: impl Into<String>) -> Self {
        PostApiError::ProjectValidation {
            project: project.into(),
            message: msg.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        PostApiError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        PostApiError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    ///
    /// Validation errors are local and always recoverable by editing input;
    /// they are never sent to the backend.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PostApiError::Validation(_)
                | PostApiError::MockData(_)
                | PostApiError::ResourceValidation { .. }
                | PostApiError::ProjectValidation { .. }
                | PostApiError::UnknownPrimaryKey { .. }
                | PostApiError::UnknownMethod(_)
                | PostApiError::UnknownTemplate(_)
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PostApiError::ProjectNotFound(_)
                | PostApiError::ResourceNotFound(_)
                | PostApiError::FileNotFound(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, PostApiError::Io(_) | PostApiError::FileRead { .. })
    }
}

/// Result type alias using PostApiError
pub type PostApiResult<T> = Result<T, PostApiError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> PostApiResult<T>;
}

impl<T, E: Into<PostApiError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> PostApiResult<T> {
        self.map_err(|e| {
            let err: PostApiError = e.into();
            PostApiError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_error() {
        let err = PostApiError::validation("Name is required");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Validation error: Name is required");
    }

    #[test]
    fn test_resource_validation_error() {
        let err = PostApiError::resource_validation("Products", "Select at least one method");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Resource validation failed for 'Products': Select at least one method"
        );
    }

    #[test]
    fn test_mock_data_error_is_validation() {
        let err = PostApiError::MockData("JSON must be an array of objects".to_string());
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "JSON must be an array of objects");
    }

    #[test]
    fn test_unknown_primary_key() {
        let err = PostApiError::UnknownPrimaryKey {
            key: "uuid".to_string(),
            candidates: "sku, price".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'uuid' is not a field of the mock data (expected one of: sku, price)"
        );
    }

    #[test]
    fn test_not_found_errors() {
        let err = PostApiError::ProjectNotFound("shop".to_string());
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Project not found: shop");
    }

    #[test]
    fn test_error_with_context() {
        let err = PostApiError::with_context("Loading resource file", "Permission denied");
        assert_eq!(err.to_string(), "Loading resource file: Permission denied");
    }

    #[test]
    fn test_result_ext_wraps_io_error() {
        let res: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.with_context("Reading config").unwrap_err();
        assert_eq!(err.to_string(), "Reading config: IO error: denied");
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PostApiError = io_err.into();
        assert!(err.is_io());
    }
}
