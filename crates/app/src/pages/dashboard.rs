//! Dashboard: the signed-in user's projects

use crate::error::{AppError, AppResult};
use crate::pages::ensure_deployable;
use crate::state::Notifications;
use postapi_client::{Backend, GatewayResult};
use postapi_ir::{Project, ProjectDraft, Resource};

/// Project list plus the create-project form
#[derive(Debug, Clone)]
pub struct DashboardPage {
    api_base: String,
    projects: Vec<Project>,
    /// Create-project form
    pub draft: ProjectDraft,
    notifications: Notifications,
}

impl DashboardPage {
    /// Load the project list
    ///
    /// A failed load leaves the list empty and raises an error message.
    pub async fn load<B: Backend + ?Sized>(backend: &B, api_base: impl Into<String>) -> Self {
        let mut page = Self {
            api_base: api_base.into(),
            projects: Vec::new(),
            draft: ProjectDraft::new(),
            notifications: Notifications::new(),
        };
        page.refresh(backend).await;
        page
    }

    /// Reload the project list
    pub async fn refresh<B: Backend + ?Sized>(&mut self, backend: &B) {
        match backend.list_projects().await {
            Ok(projects) => self.projects = projects,
            Err(_) => {
                self.projects.clear();
                self.notifications.error("Failed to load projects");
            }
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Submit the create-project form
    ///
    /// The form is checked locally first; on success it is reset and the
    /// list reloaded.
    pub async fn create_project<B: Backend + ?Sized>(&mut self, backend: &B) -> AppResult<Project> {
        let request = match self.draft.to_request() {
            Ok(request) => request,
            Err(err) => {
                self.notifications.error(err.to_string());
                return Err(err.into());
            }
        };

        match backend.create_project(&request).await {
            Ok(project) => {
                self.draft = ProjectDraft::new();
                self.notifications
                    .success(format!("Project \"{}\" created successfully!", project.name));
                self.refresh(backend).await;
                Ok(project)
            }
            Err(err) => {
                self.notifications
                    .error("Failed to create project. Please try again.");
                Err(err.into())
            }
        }
    }

    /// Delete a project and drop it from the list
    pub async fn delete_project<B: Backend + ?Sized>(
        &mut self,
        backend: &B,
        project_id: &str,
    ) -> AppResult<()> {
        match backend.delete_project(project_id).await {
            Ok(()) => {
                self.projects.retain(|p| p.id != project_id);
                self.notifications.success("Project deleted successfully!");
                Ok(())
            }
            Err(err) => {
                self.notifications
                    .error("Failed to delete the project. Please try again.");
                Err(err.into())
            }
        }
    }

    /// Deploy a project
    ///
    /// The project's resources are counted first; deploy is refused for
    /// projects that are not drafts or have no resources.
    pub async fn deploy_project<B: Backend + ?Sized>(
        &mut self,
        backend: &B,
        project_id: &str,
    ) -> AppResult<()> {
        let (project, resources) = match self.deploy_target(backend, project_id).await {
            Ok(found) => found,
            Err(err) => {
                self.notifications
                    .error("Failed to deploy project. Please try again.");
                return Err(err.into());
            }
        };

        if let Err(err) = ensure_deployable(project.deploy_availability(resources.len(), &self.api_base)) {
            self.notifications.error(err.user_message());
            return Err(err);
        }

        match backend.deploy_project(project_id).await {
            Ok(()) => {
                self.notifications
                    .success(format!("Project \"{}\" deployed successfully!", project.name));
                self.refresh(backend).await;
                Ok(())
            }
            Err(err) => {
                self.notifications
                    .error("Failed to deploy project. Please try again.");
                Err(AppError::from(err))
            }
        }
    }

    /// Project plus its current resources, read fresh before a deploy
    async fn deploy_target<B: Backend + ?Sized>(
        &self,
        backend: &B,
        project_id: &str,
    ) -> GatewayResult<(Project, Vec<Resource>)> {
        let project = match self.project(project_id) {
            Some(project) => project.clone(),
            None => backend.get_project(project_id).await?,
        };
        let resources = backend.list_resources(project_id).await?;
        Ok((project, resources))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fake::FakeBackend;
    use postapi_ir::{MethodTag, ProjectStatus, Resource};
    use pretty_assertions::assert_eq;

    const API: &str = "http://localhost:8080";

    #[tokio::test]
    async fn test_load_failure_leaves_empty_list() {
        let backend = FakeBackend::new()
            .with_project(Project::new("p1", "Shop", "shop"))
            .failing("list_projects");

        let page = DashboardPage::load(&backend, API).await;
        assert!(page.projects().is_empty());
        assert_eq!(
            page.notifications().last().map(|m| m.text.as_str()),
            Some("Failed to load projects")
        );
    }

    #[tokio::test]
    async fn test_create_project_resets_form() {
        let backend = FakeBackend::new();
        let mut page = DashboardPage::load(&backend, API).await;

        page.draft.set_name("My Shop");
        assert_eq!(page.draft.slug.value(), "my-shop");

        let project = page.create_project(&backend).await.unwrap();
        assert_eq!(project.slug.as_deref(), Some("my-shop"));
        assert_eq!(page.projects().len(), 1);
        assert_eq!(page.draft.name, "");
        assert_eq!(
            page.notifications().last().map(|m| m.text.as_str()),
            Some("Project \"My Shop\" created successfully!")
        );
    }

    #[tokio::test]
    async fn test_invalid_project_never_posts() {
        let backend = FakeBackend::new();
        let mut page = DashboardPage::load(&backend, API).await;

        let err = page.create_project(&backend).await.unwrap_err();
        assert!(err.is_local());
        assert_eq!(backend.calls(), vec!["list_projects ".to_string()]);
    }

    #[tokio::test]
    async fn test_deploy_refused_without_resources() {
        let backend = FakeBackend::new().with_project(Project::new("p1", "Shop", "shop"));
        let mut page = DashboardPage::load(&backend, API).await;

        let err = page.deploy_project(&backend, "p1").await.unwrap_err();
        assert_eq!(err.user_message(), "Add at least one resource before deploying");
        assert!(!backend.calls().iter().any(|c| c.starts_with("deploy_project")));
    }

    #[tokio::test]
    async fn test_deploy_with_resource() {
        let mut resource = Resource::new("r1", "Products", "products", &[MethodTag::Get]);
        resource.project_id = Some("p1".to_string());
        let backend = FakeBackend::new()
            .with_project(Project::new("p1", "Shop", "shop"))
            .with_resource(resource);
        let mut page = DashboardPage::load(&backend, API).await;

        page.deploy_project(&backend, "p1").await.unwrap();
        assert_eq!(page.project("p1").map(|p| p.status), Some(ProjectStatus::Deployed));

        let err = page.deploy_project(&backend, "p1").await.unwrap_err();
        assert!(err.user_message().contains("http://localhost:8080/api/shop"));
    }

    #[tokio::test]
    async fn test_deploy_lookup_failure_is_reported() {
        let backend = FakeBackend::new()
            .with_project(Project::new("p1", "Shop", "shop"))
            .failing("list_resources");
        let mut page = DashboardPage::load(&backend, API).await;

        let err = page.deploy_project(&backend, "p1").await.unwrap_err();
        assert!(!err.is_local());
        assert_eq!(
            page.notifications().last().map(|m| m.text.as_str()),
            Some("Failed to deploy project. Please try again.")
        );
        assert!(!backend.calls().iter().any(|c| c.starts_with("deploy_project")));
    }

    #[tokio::test]
    async fn test_deploy_unknown_project_is_reported() {
        let backend = FakeBackend::new();
        let mut page = DashboardPage::load(&backend, API).await;

        let err = page.deploy_project(&backend, "missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(page.notifications().has_errors());
    }

    #[tokio::test]
    async fn test_delete_project() {
        let backend = FakeBackend::new()
            .with_project(Project::new("p1", "Shop", "shop"))
            .with_project(Project::new("p2", "Blog", "blog"));
        let mut page = DashboardPage::load(&backend, API).await;

        page.delete_project(&backend, "p1").await.unwrap();
        assert_eq!(page.projects().len(), 1);
        assert_eq!(page.projects()[0].id, "p2");
    }
}
