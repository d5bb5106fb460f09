//! # PostAPI Client
//!
//! The boundary between PostAPI Studio and its REST backend.
//!
//! - [`Backend`]: the async operations pages depend on
//! - [`Gateway`]: the reqwest implementation, one attempt per call
//! - [`GatewayError`]: failures, with a user-safe message for display
//!
//! ## Example
//!
//! ```rust,ignore
//! use postapi_client::{Backend, ClientConfig, Gateway};
//!
//! let gateway = Gateway::new(&ClientConfig::default(), "user_123")?;
//! let projects = gateway.list_projects().await?;
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod gateway;

pub use backend::Backend;
pub use config::{ClientConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{GatewayError, GatewayResult};
pub use gateway::{Gateway, USER_ID_HEADER};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
