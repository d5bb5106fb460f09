//! # PostAPI IR
//!
//! The domain model for PostAPI Studio. Everything here is local and pure:
//! no network access, no clocks except where a snapshot needs "today".
//!
//! ## Core Concepts
//!
//! - **Project**: a named group of resources published under one slug
//! - **Resource**: a mock-data collection with a slug and enabled methods
//! - **MethodTag**: one of `GET`, `POST`, `GET_BY_ID`, `PUT`, `DELETE`;
//!   routes are derived from `(slug, tag)` and never stored
//! - **MockData**: JSON that passed the array-of-objects contract
//! - **SlugField**: a slug input that follows its name until edited
//!

// Module declarations
pub mod analytics;
pub mod method;
pub mod mock_data;
pub mod project;
pub mod resource;
pub mod serialization;
pub mod slug;
pub mod timestamp;
pub mod validation;

// Re-export commonly used types at crate root
pub use analytics::{
    AnalyticsSnapshot, CacheStat, HourlyRequests, UsageLevel, UsageSnapshot, format_countdown,
    reset_countdown, time_until_reset,
};
pub use method::{ID_PLACEHOLDER, MethodTag, RouteEntry, derive_route, parse_method_list, routes_for};
pub use mock_data::{
    MockData, MockDataError, candidate_keys, format_mock_data, validate_mock_data,
    validate_mock_value,
};
pub use project::{CreateProject, DeployAvailability, Project, ProjectDraft, ProjectStatus, api_base_url};
pub use resource::{
    CreateResource, DEFAULT_MOCK_DATA, PreparedResource, Resource, ResourceDraft, total_endpoints,
};
pub use serialization::{ResourceFile, load_resource_draft, load_resource_file, SCHEMA_VERSION};
pub use slug::{SlugField, SlugMode, derive_slug, is_valid_slug};
pub use validation::{ValidationResult, ValidationRule, Validator, validate_resource_draft};

// Re-export core types that are commonly used with IR
pub use postapi_core::{PostApiError, PostApiResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        // Snapshots
        AnalyticsSnapshot,
        UsageSnapshot,
        // Drafts
        CreateProject,
        CreateResource,
        PreparedResource,
        ProjectDraft,
        ResourceDraft,
        // Errors
        PostApiError,
        PostApiResult,
        // Model
        MethodTag,
        Project,
        ProjectStatus,
        Resource,
        SlugField,
        // Operations
        derive_route,
        derive_slug,
        validate_mock_data,
    };
}

// ============================================================================
// Tests
// ============================================================================
