//! In-memory backend for page tests

use async_trait::async_trait;
use postapi_client::{Backend, GatewayError, GatewayResult};
use postapi_ir::{
    AnalyticsSnapshot, CreateProject, CreateResource, Project, Resource, UsageSnapshot,
};
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Default)]
struct Inner {
    projects: Vec<Project>,
    resources: Vec<Resource>,
    usage: Option<UsageSnapshot>,
    analytics: Option<AnalyticsSnapshot>,
    calls: Vec<String>,
    created_resources: Vec<CreateResource>,
    next_id: usize,
}

/// Backend double that records every call
#[derive(Default)]
pub struct FakeBackend {
    inner: Mutex<Inner>,
    failing: HashSet<&'static str>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(self, project: Project) -> Self {
        self.inner.lock().unwrap().projects.push(project);
        self
    }

    pub fn with_resource(self, resource: Resource) -> Self {
        self.inner.lock().unwrap().resources.push(resource);
        self
    }

    pub fn with_usage(self, usage: UsageSnapshot) -> Self {
        self.inner.lock().unwrap().usage = Some(usage);
        self
    }

    /// Make the named operation answer 500
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn created_resources(&self) -> Vec<CreateResource> {
        self.inner.lock().unwrap().created_resources.clone()
    }

    fn enter(&self, operation: &'static str, target: &str) -> GatewayResult<()> {
        self.inner
            .lock()
            .unwrap()
            .calls
            .push(format!("{} {}", operation, target));
        if self.failing.contains(operation) {
            return Err(GatewayError::Backend {
                url: format!("fake://{}", operation),
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(())
    }

    fn not_found(what: &str) -> GatewayError {
        GatewayError::NotFound {
            url: format!("fake://{}", what),
        }
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn get_project(&self, project_id: &str) -> GatewayResult<Project> {
        self.enter("get_project", project_id)?;
        let inner = self.inner.lock().unwrap();
        inner
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .cloned()
            .ok_or_else(|| Self::not_found(project_id))
    }

    async fn get_project_by_slug(&self, slug: &str) -> GatewayResult<Project> {
        self.enter("get_project_by_slug", slug)?;
        let inner = self.inner.lock().unwrap();
        inner
            .projects
            .iter()
            .find(|p| p.slug.as_deref() == Some(slug))
            .cloned()
            .ok_or_else(|| Self::not_found(slug))
    }

    async fn list_projects(&self) -> GatewayResult<Vec<Project>> {
        self.enter("list_projects", "")?;
        Ok(self.inner.lock().unwrap().projects.clone())
    }

    async fn create_project(&self, request: &CreateProject) -> GatewayResult<Project> {
        self.enter("create_project", &request.slug)?;
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let project = Project::new(format!("p{}", inner.next_id), &request.name, &request.slug)
            .with_description(&request.description);
        inner.projects.push(project.clone());
        Ok(project)
    }

    async fn delete_project(&self, project_id: &str) -> GatewayResult<()> {
        self.enter("delete_project", project_id)?;
        self.inner
            .lock()
            .unwrap()
            .projects
            .retain(|p| p.id != project_id);
        Ok(())
    }

    async fn deploy_project(&self, project_id: &str) -> GatewayResult<()> {
        self.enter("deploy_project", project_id)?;
        let mut inner = self.inner.lock().unwrap();
        if let Some(project) = inner.projects.iter_mut().find(|p| p.id == project_id) {
            project.mark_deployed();
        }
        Ok(())
    }

    async fn list_resources(&self, project_id: &str) -> GatewayResult<Vec<Resource>> {
        self.enter("list_resources", project_id)?;
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .resources
            .iter()
            .filter(|r| r.project_id.as_deref() == Some(project_id))
            .cloned()
            .collect())
    }

    async fn create_resource(&self, request: &CreateResource) -> GatewayResult<Resource> {
        self.enter("create_resource", &request.project_id)?;
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let mut resource = Resource::new(
            format!("r{}", inner.next_id),
            &request.name,
            &request.slug,
            &request.enabled_methods,
        )
        .with_mock_data(request.mock_data.clone());
        resource.project_id = Some(request.project_id.clone());
        resource.primary_key = Some(request.primary_key.clone());
        inner.resources.push(resource.clone());
        inner.created_resources.push(request.clone());
        Ok(resource)
    }

    async fn delete_resource(&self, resource_id: &str) -> GatewayResult<()> {
        self.enter("delete_resource", resource_id)?;
        self.inner
            .lock()
            .unwrap()
            .resources
            .retain(|r| r.id != resource_id);
        Ok(())
    }

    async fn usage(&self, project_id: &str) -> GatewayResult<UsageSnapshot> {
        self.enter("usage", project_id)?;
        self.inner
            .lock()
            .unwrap()
            .usage
            .ok_or_else(|| Self::not_found("usage"))
    }

    async fn analytics(&self, project_id: &str) -> GatewayResult<AnalyticsSnapshot> {
        self.enter("analytics", project_id)?;
        self.inner
            .lock()
            .unwrap()
            .analytics
            .clone()
            .ok_or_else(|| Self::not_found("analytics"))
    }
}
