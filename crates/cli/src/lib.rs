//! # PostAPI CLI
//!
//! Command-line dashboard for PostAPI Studio.
//!
//! ## Commands
//!
//! - `projects` - list, show, create, delete and deploy projects
//! - `resources` - list, create and delete resources of a project
//! - `usage` / `analytics` - today's request usage and traffic
//! - `docs` - Markdown documentation for a published project
//! - `validate`, `slug`, `routes`, `snippet`, `sample` - local tools that
//!   never contact the backend
//!

pub mod cli;
pub mod commands;
pub mod output;
pub mod settings;

pub use cli::{Cli, Command, GlobalArgs};
pub use commands::run;
pub use settings::Settings;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "postapi_cli");
    }
}
