//! Project definitions for PostAPI Studio
//!
//! A project groups resources under one public slug. The backend owns the
//! record; this module only models it and the draft used to create one.

use crate::slug::{SlugField, is_valid_slug};
use chrono::{DateTime, Utc};
use postapi_core::{Named, PostApiError, PostApiResult, ProjectId, UserId, Validatable};
use serde::{Deserialize, Serialize};

/// Slug shown in URLs while a project's slug is still unknown
pub const SLUG_PLACEHOLDER: &str = "project-slug";

// ============================================================================
// ProjectStatus
// ============================================================================

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Deployed,
    Archived,
}

impl ProjectStatus {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "DRAFT",
            ProjectStatus::Deployed => "DEPLOYED",
            ProjectStatus::Archived => "ARCHIVED",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Project
// ============================================================================

/// A project as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Backend identifier
    pub id: ProjectId,

    /// Display name
    pub name: String,

    /// Unique, URL-safe slug
    #[serde(default)]
    pub slug: Option<String>,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Lifecycle status
    #[serde(default)]
    pub status: ProjectStatus,

    /// Public URL once deployed
    #[serde(default)]
    pub deployed_link: Option<String>,

    /// Owner
    #[serde(default)]
    pub user_id: Option<UserId>,

    #[serde(default, with = "crate::timestamp")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "crate::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Create a local draft-status project value (mostly useful in tests)
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: Some(slug.into()),
            description: None,
            status: ProjectStatus::Draft,
            deployed_link: None,
            user_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Set status
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check if the project is deployed
    pub fn is_deployed(&self) -> bool {
        self.status == ProjectStatus::Deployed
    }

    /// Slug or the placeholder used before one is known
    pub fn slug_or_placeholder(&self) -> &str {
        self.slug
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(SLUG_PLACEHOLDER)
    }

    /// Public base URL of the project's generated endpoints
    ///
    /// The backend-provided deployed link wins; otherwise the URL is built
    /// from the API base and the project slug.
    pub fn deployed_url(&self, api_base: &str) -> String {
        match self.deployed_link.as_deref().filter(|l| !l.is_empty()) {
            Some(link) => link.to_string(),
            None => api_base_url(api_base, self.slug_or_placeholder()),
        }
    }

    /// Whether the deploy action may be offered
    ///
    /// Only draft projects with at least one resource can be deployed.
    pub fn can_deploy(&self, resource_count: usize) -> bool {
        self.status == ProjectStatus::Draft && resource_count > 0
    }

    /// Decide what the deploy affordance shows
    pub fn deploy_availability(&self, resource_count: usize, api_base: &str) -> DeployAvailability {
        match self.status {
            ProjectStatus::Deployed => DeployAvailability::AlreadyDeployed {
                url: self.deployed_url(api_base),
            },
            ProjectStatus::Archived => DeployAvailability::Unavailable {
                reason: "Archived projects cannot be deployed".to_string(),
            },
            ProjectStatus::Draft if resource_count == 0 => DeployAvailability::Unavailable {
                reason: "Add at least one resource before deploying".to_string(),
            },
            ProjectStatus::Draft => DeployAvailability::Available,
        }
    }

    /// Record a successful deploy locally
    pub fn mark_deployed(&mut self) {
        self.status = ProjectStatus::Deployed;
    }
}

impl Named for Project {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Base URL under which a project's endpoints are served
pub fn api_base_url(api_base: &str, project_slug: &str) -> String {
    format!("{}/api/{}", api_base.trim_end_matches('/'), project_slug)
}

// ============================================================================
// DeployAvailability
// ============================================================================

/// What the deploy affordance offers for a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployAvailability {
    /// Deploy can be triggered
    Available,
    /// Already live; shows the public URL instead
    AlreadyDeployed { url: String },
    /// Not offered
    Unavailable { reason: String },
}

impl DeployAvailability {
    /// Check if the deploy action is enabled
    pub fn is_available(&self) -> bool {
        matches!(self, DeployAvailability::Available)
    }
}

// ============================================================================
// CreateProject / ProjectDraft
// ============================================================================

/// Wire payload for `POST /api/projects`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    pub slug: String,
}

/// Editable create-project form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub slug: SlugField,
}

impl ProjectDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the name; the slug follows unless it was edited directly
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.slug.source_changed(&self.name);
    }

    /// Edit the slug directly
    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.slug.edit(slug);
    }

    /// Set description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Build the trimmed wire payload after validation
    pub fn to_request(&self) -> PostApiResult<CreateProject> {
        self.validate()?;
        Ok(CreateProject {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            slug: self.slug.value().trim().to_string(),
        })
    }
}

impl Validatable for ProjectDraft {
    fn validate(&self) -> PostApiResult<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PostApiError::validation("Project name is required"));
        }

        let slug = self.slug.value().trim();
        if slug.is_empty() {
            return Err(PostApiError::project_validation(name, "Project slug is required"));
        }
        if !is_valid_slug(slug) {
            return Err(PostApiError::project_validation(
                name,
                format!("Slug '{}' may only contain a-z, 0-9 and '-'", slug),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
