//! # PostAPI App
//!
//! Headless versions of the PostAPI Studio screens. Each page composes the
//! domain model, code generation and the backend gateway exactly as the
//! dashboard does, without rendering anything.
//!
//! ## Pages
//!
//! - [`DashboardPage`]: project list, create, delete, deploy
//! - [`ProjectDetailPage`]: resources, usage, analytics, deploy availability
//! - [`NewResourceForm`]: the create-resource form and its submission
//! - [`DocsPage`]: public documentation for a project slug
//!
//! Pages take any [`postapi_client::Backend`], so they run the same against
//! the HTTP gateway and against an in-memory double.

pub mod error;
pub mod pages;
pub mod session;
pub mod state;

pub use error::{AppError, AppResult};
pub use pages::{
    DashboardPage, DocsPage, NewResourceForm, ProjectDetail, ProjectDetailPage, SubmitOutcome,
};
pub use session::Session;
pub use state::{CopyFeedback, Notifications, StatusLevel, StatusMessage, COPY_RESET};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
