//! # PostAPI Codegen
//!
//! Text generation for PostAPI Studio.
//!
//! This crate turns the domain model from `postapi_ir` into text a user can
//! paste or publish. Everything here is pure except sample data, which is
//! random by nature.
//!
//! ## Features
//!
//! - **Code samples**: cURL, browser `fetch` and Python `requests` calls
//! - **Documentation**: Markdown API docs for a project and its resources
//! - **Sample data**: realistic mock-data arrays from named templates
//!

// ============================================================================
// Modules
// ============================================================================

pub mod docs;
pub mod sample_data;
pub mod snippet;

// ============================================================================
// Re-exports
// ============================================================================

pub use docs::{DocEndpoint, DocsConfig, endpoint_snippet, project_title, render_project_docs, resource_endpoints};
pub use sample_data::{
    DEFAULT_COUNT, SampleTemplate, generate_samples, generate_samples_at, generate_samples_seeded,
};
pub use snippet::{HttpMethod, SnippetStyle, generate, generate_all};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use postapi_ir::{MethodTag, Project, Resource, validate_mock_value};

    #[test]
    fn test_generated_samples_document_cleanly() {
        let data = generate_samples(SampleTemplate::Product, 2);
        let first = validate_mock_value(data.clone()).unwrap().items()[0].clone();

        let project = Project::new("p1", "Store", "store");
        let resource =
            Resource::new("r1", "Products", "products", &[MethodTag::Post]).with_mock_data(data);
        let docs = render_project_docs(&project, &[resource], &DocsConfig::new("http://api.test"));

        let sku_line = format!("\"id\": \"{}\"", first["id"].as_str().unwrap());
        assert!(docs.contains(&sku_line));
    }
}
