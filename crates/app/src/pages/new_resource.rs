//! New-resource form
//!
//! Wraps a [`ResourceDraft`] with the screen's actions: sample generation,
//! formatting, the primary-key stage and a single submission.

use crate::error::{AppError, AppResult};
use crate::state::{CopyFeedback, Notifications};
use postapi_client::Backend;
use postapi_codegen::{SampleTemplate, generate_samples};
use postapi_core::PostApiError;
use postapi_ir::{
    MethodTag, PreparedResource, Project, Resource, ResourceDraft, format_mock_data,
    validate_mock_data,
};

/// Copy-feedback key of the mock-data editor
pub const JSON_COPY_KEY: &str = "json";

/// Result of a submit attempt that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The backend created the resource
    Created(Resource),
    /// Submission paused until a primary key is chosen from these keys
    NeedsPrimaryKey(Vec<String>),
}

/// Create-resource screen for one project
#[derive(Debug, Clone)]
pub struct NewResourceForm {
    project: Project,
    draft: ResourceDraft,
    primary_key_prompt: Option<Vec<String>>,
    created: Option<Resource>,
    notifications: Notifications,
    copy: CopyFeedback,
}

impl NewResourceForm {
    /// Load the owning project and open an empty form
    pub async fn load<B: Backend + ?Sized>(backend: &B, project_id: &str) -> AppResult<Self> {
        let project = backend.get_project(project_id).await?;
        Ok(Self::for_project(project))
    }

    /// Open an empty form for an already loaded project
    pub fn for_project(project: Project) -> Self {
        Self::with_draft(project, ResourceDraft::new())
    }

    /// Open the form pre-filled with `draft`
    pub fn with_draft(project: Project, draft: ResourceDraft) -> Self {
        Self {
            project,
            draft,
            primary_key_prompt: None,
            created: None,
            notifications: Notifications::new(),
            copy: CopyFeedback::new(),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn draft(&self) -> &ResourceDraft {
        &self.draft
    }

    /// Direct access to the draft for field edits
    pub fn draft_mut(&mut self) -> &mut ResourceDraft {
        &mut self.draft
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// The resource created by a successful submit
    pub fn created(&self) -> Option<&Resource> {
        self.created.as_ref()
    }

    // ------------------------------------------------------------------------
    // Field edits
    // ------------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.set_name(name);
    }

    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.draft.set_slug(slug);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.set_description(description);
    }

    pub fn toggle_method(&mut self, tag: MethodTag) -> bool {
        self.draft.toggle_method(tag)
    }

    /// Replace the mock-data text
    pub fn set_mock_text(&mut self, text: impl Into<String>) {
        self.draft.set_mock_text(text);
        self.primary_key_prompt = None;
    }

    /// Real-time validation message for the mock-data editor
    pub fn mock_error(&self) -> Option<String> {
        self.draft.mock_error().map(|e| e.to_string())
    }

    // ------------------------------------------------------------------------
    // Editor actions
    // ------------------------------------------------------------------------

    /// Replace the mock data with generated sample items
    pub fn apply_template(&mut self, template: SampleTemplate, count: usize) -> usize {
        let samples = generate_samples(template, count);
        let generated = samples.as_array().map_or(0, Vec::len);
        let text = serde_json::to_string_pretty(&samples).unwrap_or_default();
        self.set_mock_text(text);
        self.notifications
            .success(format!("Generated {} {} item(s)!", generated, template));
        generated
    }

    /// Pretty-print the mock data in place
    pub fn format(&mut self) -> AppResult<()> {
        match format_mock_data(self.draft.mock_text()) {
            Ok(formatted) => {
                self.draft.set_mock_text(formatted);
                if self.draft.mock_error().is_none() {
                    self.notifications.success("JSON formatted successfully!");
                }
                Ok(())
            }
            Err(err) => {
                self.notifications
                    .error("Invalid JSON. Please fix errors first.");
                Err(PostApiError::from(err).into())
            }
        }
    }

    /// Record that the mock data was copied
    pub fn copy_json(&mut self) -> &str {
        self.copy.copied(JSON_COPY_KEY);
        self.notifications.success("JSON copied to clipboard!");
        self.draft.mock_text()
    }

    pub fn is_json_copied(&self) -> bool {
        self.copy.is_copied(JSON_COPY_KEY)
    }

    // ------------------------------------------------------------------------
    // Primary key stage
    // ------------------------------------------------------------------------

    /// Candidate keys while submission waits for a primary key
    pub fn primary_key_prompt(&self) -> Option<&[String]> {
        self.primary_key_prompt.as_deref()
    }

    /// Choose the primary key; it must be one of the candidates
    pub fn choose_primary_key(&mut self, key: impl Into<String>) -> AppResult<()> {
        self.draft.set_primary_key(key)?;
        self.primary_key_prompt = None;
        Ok(())
    }

    /// Choose the primary key and resume submission
    pub async fn confirm_primary_key_and_submit<B: Backend + ?Sized>(
        &mut self,
        backend: &B,
        key: impl Into<String>,
    ) -> AppResult<SubmitOutcome> {
        self.choose_primary_key(key)?;
        self.submit(backend).await
    }

    // ------------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------------

    /// Validate and post the resource
    ///
    /// Invalid drafts never reach the backend. Without a primary key the
    /// submission stops at [`SubmitOutcome::NeedsPrimaryKey`]. A created
    /// resource is posted exactly once; later calls are refused.
    pub async fn submit<B: Backend + ?Sized>(&mut self, backend: &B) -> AppResult<SubmitOutcome> {
        if self.created.is_some() {
            return Err(AppError::Unavailable(
                "This resource has already been created".to_string(),
            ));
        }

        let request = match self.draft.prepare(&self.project.id) {
            Ok(PreparedResource::Ready(request)) => request,
            Ok(PreparedResource::NeedsPrimaryKey(keys)) => {
                tracing::debug!(candidates = ?keys, "waiting for primary key");
                self.primary_key_prompt = Some(keys.clone());
                return Ok(SubmitOutcome::NeedsPrimaryKey(keys));
            }
            Err(err) => {
                let message = match &err {
                    PostApiError::MockData(_) => {
                        "Please fix JSON errors before creating the resource.".to_string()
                    }
                    other => other.to_string(),
                };
                self.notifications.error(message);
                return Err(err.into());
            }
        };

        match backend.create_resource(&request).await {
            Ok(resource) => {
                self.notifications.success(format!(
                    "Resource \"{}\" created successfully with {} method(s)!",
                    request.name,
                    request.enabled_methods.len()
                ));
                self.created = Some(resource.clone());
                Ok(SubmitOutcome::Created(resource))
            }
            Err(err) => {
                self.notifications
                    .error("Failed to save the resource. Please try again.");
                Err(err.into())
            }
        }
    }
}

/// Whether `text` currently passes the mock-data contract
pub fn is_submittable_mock(text: &str) -> bool {
    validate_mock_data(text).is_ok()
}

// ============================================================================
// Tests
// ============================================================================
