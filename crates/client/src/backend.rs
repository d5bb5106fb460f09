//! The backend seam
//!
//! Pages talk to the backend only through [`Backend`], so tests can swap the
//! HTTP [`Gateway`](crate::Gateway) for an in-memory fake.

use crate::error::GatewayResult;
use async_trait::async_trait;
use postapi_ir::{AnalyticsSnapshot, CreateProject, CreateResource, Project, Resource, UsageSnapshot};

/// Operations offered by the PostAPI backend
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /api/projects/{id}`
    async fn get_project(&self, project_id: &str) -> GatewayResult<Project>;

    /// `GET /api/projects/slug/{slug}`
    async fn get_project_by_slug(&self, slug: &str) -> GatewayResult<Project>;

    /// `GET /api/projects`
    async fn list_projects(&self) -> GatewayResult<Vec<Project>>;

    /// `POST /api/projects`
    async fn create_project(&self, request: &CreateProject) -> GatewayResult<Project>;

    /// `DELETE /api/projects/{id}`
    async fn delete_project(&self, project_id: &str) -> GatewayResult<()>;

    /// `PUT /api/projects/{id}/deploy`
    async fn deploy_project(&self, project_id: &str) -> GatewayResult<()>;

    /// `GET /api/projects/{id}/resources`
    async fn list_resources(&self, project_id: &str) -> GatewayResult<Vec<Resource>>;

    /// `POST /api/projects/{id}/resources`
    async fn create_resource(&self, request: &CreateResource) -> GatewayResult<Resource>;

    /// `DELETE /api/resources/{id}`
    async fn delete_resource(&self, resource_id: &str) -> GatewayResult<()>;

    /// `GET /api/projects/{id}/usage`
    async fn usage(&self, project_id: &str) -> GatewayResult<UsageSnapshot>;

    /// `GET /api/projects/{id}/analytics`
    async fn analytics(&self, project_id: &str) -> GatewayResult<AnalyticsSnapshot>;
}
