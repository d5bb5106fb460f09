//! Core traits for PostAPI Studio
//!
//! This module defines the traits shared by draft types (forms that are
//! checked locally before anything is sent to the backend).

use crate::error::PostApiResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Something that can check its own state before it is submitted
///
/// Drafts implement this so callers can ask "is this ready?" without
/// knowing which rules apply.
///
/// # Example
///
/// ```rust,ignore
/// use postapi_core::{Validatable, PostApiResult, PostApiError};
///
/// struct ProjectDraft {
///     name: String,
///     slug: String,
/// }
///
/// impl Validatable for ProjectDraft {
///     fn validate(&self) -> PostApiResult<()> {
///         if self.name.trim().is_empty() {
///             return Err(PostApiError::validation("Project name is required"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Fail with the first problem found
    ///
    /// Returns `Ok(())` if valid, or a `PostApiError` describing the problem.
    fn validate(&self) -> PostApiResult<()>;

    /// Shorthand for `validate().is_ok()`
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Every problem as display text; the default reports only the first
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// Named Trait
// ============================================================================

/// Trait for types that have a human-readable name
pub trait Named {
    /// Get the name
    fn name(&self) -> &str;

    /// Case-insensitive name comparison
    fn name_matches(&self, other: &str) -> bool {
        self.name().eq_ignore_ascii_case(other)
    }
}

// ============================================================================
// Tests
// ============================================================================
