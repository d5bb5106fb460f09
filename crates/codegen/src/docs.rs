//! # Documentation Renderer
//!
//! Renders a project's public API documentation as Markdown: the base URL,
//! then per resource the enabled endpoints with summaries, an example
//! response and ready-to-paste code samples.

use crate::snippet::{self, HttpMethod, SnippetStyle};
use heck::ToTitleCase;
use postapi_ir::{MethodTag, Project, Resource, api_base_url};
use serde_json::Value;

// ============================================================================
// DocsConfig
// ============================================================================

/// Configuration for documentation rendering
#[derive(Debug, Clone)]
pub struct DocsConfig {
    /// Backend base URL (e.g. `http://localhost:8080`)
    pub api_base: String,

    /// Snippet styles rendered per endpoint, in order
    pub styles: Vec<SnippetStyle>,

    /// Whether to include the example response block
    pub include_examples: bool,
}

impl DocsConfig {
    /// Create a configuration rendering cURL samples and examples
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            styles: vec![SnippetStyle::Shell],
            include_examples: true,
        }
    }

    /// Render only the given style
    pub fn with_style(mut self, style: SnippetStyle) -> Self {
        self.styles = vec![style];
        self
    }

    /// Render every style
    pub fn with_all_styles(mut self) -> Self {
        self.styles = SnippetStyle::all().to_vec();
        self
    }

    /// Skip code samples entirely
    pub fn without_snippets(mut self) -> Self {
        self.styles.clear();
        self
    }

    /// Skip example responses
    pub fn without_examples(mut self) -> Self {
        self.include_examples = false;
        self
    }
}

// ============================================================================
// DocEndpoint
// ============================================================================

/// One documented endpoint of a resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEndpoint {
    pub tag: MethodTag,
    pub method: HttpMethod,
    /// Route relative to the project base URL
    pub path: String,
    /// Absolute URL, `{id}` left in place
    pub url: String,
    pub summary: String,
}

/// Enabled endpoints of `resource` under `base_url`, in canonical order
pub fn resource_endpoints(resource: &Resource, base_url: &str) -> Vec<DocEndpoint> {
    resource
        .endpoints()
        .into_iter()
        .map(|route| DocEndpoint {
            tag: route.tag,
            method: HttpMethod::from(route.tag),
            url: format!("{}{}", base_url, route.path),
            summary: route.tag.summary(&resource.name),
            path: route.path,
        })
        .collect()
}

/// Render the code sample for one endpoint
pub fn endpoint_snippet(endpoint: &DocEndpoint, example: &Value, style: SnippetStyle) -> String {
    let body = endpoint.method.has_body().then_some(example);
    snippet::generate(style, endpoint.method, &endpoint.url, body)
}

/// Human title for a project, title-casing the slug when the name is empty
pub fn project_title(project: &Project) -> String {
    if project.name.trim().is_empty() {
        project.slug_or_placeholder().replace('-', " ").to_title_case()
    } else {
        project.name.clone()
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render Markdown documentation for a project and its resources
pub fn render_project_docs(project: &Project, resources: &[Resource], config: &DocsConfig) -> String {
    let base_url = api_base_url(&config.api_base, project.slug_or_placeholder());
    let mut content = String::with_capacity(4096);

    content.push_str(&format!("# {} API\n\n", project_title(project)));
    if let Some(description) = project.description.as_deref().filter(|d| !d.trim().is_empty()) {
        content.push_str(description.trim());
        content.push_str("\n\n");
    }

    content.push_str("## Base URL\n\n");
    content.push_str("The root for all endpoints in this project.\n\n");
    content.push_str(&format!("`{}`\n", base_url));

    if resources.is_empty() {
        content.push_str("\n_This project has no resources yet._\n");
        return content;
    }

    for resource in resources {
        content.push('\n');
        content.push_str(&render_resource(resource, &base_url, config));
    }

    content
}

fn render_resource(resource: &Resource, base_url: &str, config: &DocsConfig) -> String {
    let mut content = String::with_capacity(1024);
    let endpoints = resource_endpoints(resource, base_url);
    let example = resource.example_item();

    content.push_str(&format!("## {}\n\n", resource.name));
    if let Some(description) = resource.description.as_deref().filter(|d| !d.trim().is_empty()) {
        content.push_str(description.trim());
        content.push_str("\n\n");
    }
    content.push_str(&format!("`{}/{}`\n\n", base_url, resource.slug));

    if endpoints.is_empty() {
        content.push_str("_No methods enabled._\n");
        return content;
    }

    content.push_str("| Method | Path | Summary |\n");
    content.push_str("|--------|------|---------|\n");
    for endpoint in &endpoints {
        content.push_str(&format!(
            "| {} | `{}` | {} |\n",
            endpoint.method, endpoint.path, endpoint.summary
        ));
    }

    if config.include_examples {
        content.push_str("\n### Example Response\n\n");
        content.push_str("```json\n");
        content.push_str(&serde_json::to_string_pretty(&example).unwrap_or_else(|_| "{}".to_string()));
        content.push_str("\n```\n");
    }

    if config.styles.is_empty() {
        return content;
    }

    for endpoint in &endpoints {
        content.push_str(&format!("\n### {} {}\n", endpoint.method, endpoint.path));
        for style in &config.styles {
            content.push_str(&format!("\n**{}**\n\n", style.label()));
            content.push_str(&format!("```{}\n", style.fence_language()));
            content.push_str(&endpoint_snippet(endpoint, &example, *style));
            content.push_str("\n```\n");
        }
    }

    content
}

// ============================================================================
// Tests
// ============================================================================
