//! # PostAPI Core
//!
//! Core types, traits, and error handling for PostAPI Studio.
//!
//! This crate provides the foundational building blocks used throughout
//! the workspace, including:
//!
//! - **Types**: opaque backend identifiers and the resolved theme value
//! - **Traits**: `Validatable` for drafts checked before submission, `Named`
//! - **Errors**: unified local error handling with `PostApiError` and `PostApiResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{PostApiError, PostApiResult, ResultExt};
pub use traits::{Named, Validatable};
pub use types::{ProjectId, ResourceId, Theme, ThemePreference, UserId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
