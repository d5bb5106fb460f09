//! Public documentation for a project, looked up by slug

use crate::error::AppResult;
use crate::state::CopyFeedback;
use postapi_client::Backend;
use postapi_codegen::{
    DocEndpoint, DocsConfig, SnippetStyle, endpoint_snippet, project_title, render_project_docs,
    resource_endpoints,
};
use postapi_ir::{Project, Resource, api_base_url};
use serde_json::Value;

/// Documentation screen
#[derive(Debug, Clone)]
pub struct DocsPage {
    project: Project,
    resources: Vec<Resource>,
    config: DocsConfig,
    copy: CopyFeedback,
}

impl DocsPage {
    /// Load a project by slug together with its resources
    pub async fn load<B: Backend + ?Sized>(
        backend: &B,
        project_slug: &str,
        config: DocsConfig,
    ) -> AppResult<Self> {
        let project = backend.get_project_by_slug(project_slug).await?;
        let resources = backend.list_resources(&project.id).await?;
        tracing::debug!(slug = %project_slug, resources = resources.len(), "docs loaded");

        Ok(Self::new(project, resources, config))
    }

    pub fn new(project: Project, resources: Vec<Resource>, config: DocsConfig) -> Self {
        Self {
            project,
            resources,
            config,
            copy: CopyFeedback::new(),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn title(&self) -> String {
        project_title(&self.project)
    }

    /// `{api_base}/api/{slug}`
    pub fn base_url(&self) -> String {
        api_base_url(&self.config.api_base, self.project.slug_or_placeholder())
    }

    /// Enabled endpoints of one resource
    pub fn endpoints(&self, resource: &Resource) -> Vec<DocEndpoint> {
        resource_endpoints(resource, &self.base_url())
    }

    /// Example response of one resource
    pub fn example_response(&self, resource: &Resource) -> Value {
        resource.example_item()
    }

    /// Code sample for one endpoint of `resource`
    pub fn snippet(&self, resource: &Resource, endpoint: &DocEndpoint, style: SnippetStyle) -> String {
        endpoint_snippet(endpoint, &resource.example_item(), style)
    }

    /// Render the whole page as Markdown
    pub fn render(&self) -> String {
        render_project_docs(&self.project, &self.resources, &self.config)
    }

    /// Record that a snippet or URL was copied
    pub fn mark_copied(&mut self, key: impl Into<String>) {
        self.copy.copied(key);
    }

    pub fn is_copied(&self, key: &str) -> bool {
        self.copy.is_copied(key)
    }
}

// ============================================================================
// Tests
// ============================================================================
