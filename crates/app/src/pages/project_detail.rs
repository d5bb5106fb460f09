//! Project detail: resources, usage and analytics of one project

use crate::error::{AppError, AppResult};
use crate::pages::ensure_deployable;
use crate::state::{CopyFeedback, Notifications};
use postapi_client::Backend;
use postapi_ir::{
    AnalyticsSnapshot, DeployAvailability, Project, Resource, UsageSnapshot, api_base_url,
    reset_countdown, total_endpoints,
};

/// Where the not-found state points the user
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Everything loaded for a project that exists
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub project: Project,
    pub resources: Vec<Resource>,
    pub usage: UsageSnapshot,
    pub analytics: AnalyticsSnapshot,
}

impl ProjectDetail {
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Sum of enabled methods across resources
    pub fn endpoint_count(&self) -> usize {
        total_endpoints(&self.resources)
    }

    /// Base URL of the project's endpoints
    pub fn base_url(&self, api_base: &str) -> String {
        api_base_url(api_base, self.project.slug_or_placeholder())
    }

    pub fn deploy_availability(&self, api_base: &str) -> DeployAvailability {
        self.project
            .deploy_availability(self.resources.len(), api_base)
    }
}

/// Project detail screen
#[derive(Debug, Clone)]
pub struct ProjectDetailPage {
    api_base: String,
    detail: Option<ProjectDetail>,
    notifications: Notifications,
    copy: CopyFeedback,
}

impl ProjectDetailPage {
    /// Load a project with its resources, usage and analytics
    ///
    /// A missing project (or one whose resources cannot be listed) yields the
    /// not-found state. Usage and analytics fall back to empty snapshots.
    pub async fn load<B: Backend + ?Sized>(
        backend: &B,
        project_id: &str,
        api_base: impl Into<String>,
    ) -> Self {
        let mut page = Self {
            api_base: api_base.into(),
            detail: None,
            notifications: Notifications::new(),
            copy: CopyFeedback::new(),
        };

        let loaded = async {
            let project = backend.get_project(project_id).await?;
            let resources = backend.list_resources(project_id).await?;
            Ok::<_, AppError>((project, resources))
        }
        .await;

        let (project, resources) = match loaded {
            Ok(loaded) => loaded,
            Err(err) => {
                tracing::warn!(project_id = %project_id, error = %err, "project could not be loaded");
                page.notifications
                    .error("Could not find the specified project.");
                return page;
            }
        };

        let usage = match backend.usage(project_id).await {
            Ok(usage) => usage,
            Err(err) => {
                tracing::debug!(project_id = %project_id, error = %err, "no usage yet, using empty snapshot");
                UsageSnapshot::empty()
            }
        };

        let analytics = match backend.analytics(project_id).await {
            Ok(analytics) => analytics,
            Err(err) => {
                tracing::debug!(project_id = %project_id, error = %err, "no analytics yet, using empty snapshot");
                AnalyticsSnapshot::empty()
            }
        };

        page.detail = Some(ProjectDetail {
            project,
            resources,
            usage,
            analytics,
        });
        page
    }

    /// Loaded data, `None` in the not-found state
    pub fn detail(&self) -> Option<&ProjectDetail> {
        self.detail.as_ref()
    }

    pub fn is_not_found(&self) -> bool {
        self.detail.is_none()
    }

    /// Path back to the dashboard from the not-found state
    pub fn back_path(&self) -> &'static str {
        DASHBOARD_PATH
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Current deploy affordance
    pub fn deploy_availability(&self) -> Option<DeployAvailability> {
        self.detail
            .as_ref()
            .map(|d| d.deploy_availability(&self.api_base))
    }

    /// Time left until the daily usage counter resets
    pub fn reset_countdown(&self) -> String {
        reset_countdown()
    }

    /// Record that `key` (a URL or snippet) was copied
    pub fn mark_copied(&mut self, key: impl Into<String>) {
        self.copy.copied(key);
        self.notifications.success("Copied to clipboard");
    }

    pub fn is_copied(&self, key: &str) -> bool {
        self.copy.is_copied(key)
    }

    /// Deploy the project and flip its local status
    pub async fn deploy<B: Backend + ?Sized>(&mut self, backend: &B) -> AppResult<()> {
        let Some(detail) = self.detail.as_mut() else {
            return Err(AppError::Unavailable("Project not found".to_string()));
        };

        if let Err(err) = ensure_deployable(detail.deploy_availability(&self.api_base)) {
            self.notifications.error(err.user_message());
            return Err(err);
        }

        match backend.deploy_project(&detail.project.id).await {
            Ok(()) => {
                detail.project.mark_deployed();
                self.notifications.success("Project deployed successfully!");
                Ok(())
            }
            Err(err) => {
                self.notifications.error("Failed to deploy project.");
                Err(err.into())
            }
        }
    }

    /// Delete one resource and drop it from the list
    pub async fn delete_resource<B: Backend + ?Sized>(
        &mut self,
        backend: &B,
        resource_id: &str,
    ) -> AppResult<()> {
        match backend.delete_resource(resource_id).await {
            Ok(()) => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.resources.retain(|r| r.id != resource_id);
                }
                self.notifications.success("Resource deleted successfully!");
                Ok(())
            }
            Err(err) => {
                self.notifications
                    .error("Failed to delete the resource. Please try again.");
                Err(err.into())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
