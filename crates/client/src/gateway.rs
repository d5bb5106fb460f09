//! HTTP gateway over the PostAPI REST backend
//!
//! One attempt per call: no retries, no backoff. Failures are logged with
//! their cause and returned as [`GatewayError`].

use crate::backend::Backend;
use crate::config::ClientConfig;
use crate::error::{GatewayError, GatewayResult};
use async_trait::async_trait;
use postapi_core::UserId;
use postapi_ir::{AnalyticsSnapshot, CreateProject, CreateResource, Project, Resource, UsageSnapshot};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::json;

/// Header carrying the opaque session user id
pub const USER_ID_HEADER: &str = "User-Id";

/// reqwest-backed [`Backend`]
#[derive(Debug, Clone)]
pub struct Gateway {
    client: Client,
    base_url: String,
    base: Url,
    user_id: Option<UserId>,
}

impl Gateway {
    /// Create a gateway that identifies as `user_id`
    pub fn new(config: &ClientConfig, user_id: impl Into<UserId>) -> GatewayResult<Self> {
        Self::build(config, Some(user_id.into()))
    }

    /// Create a gateway without a session (public documentation)
    pub fn anonymous(config: &ClientConfig) -> GatewayResult<Self> {
        Self::build(config, None)
    }

    fn build(config: &ClientConfig, user_id: Option<UserId>) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let base = Url::parse(&base_url)
            .map_err(|e| GatewayError::Config(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(GatewayError::Config(format!("{} cannot be a base URL", base_url)));
        }

        Ok(Self {
            client,
            base_url,
            base,
            user_id,
        })
    }

    /// Backend base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Session user id, if any
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// `{base}/api/{segments...}` with every segment percent-encoded
    ///
    /// Ids and slugs come from users; one that would climb out of its path
    /// position is refused before anything is sent.
    fn url(&self, segments: &[&str]) -> GatewayResult<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(GatewayError::InvalidPathSegment(bad.to_string()));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::Config(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: &Url) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        match &self.user_id {
            Some(user_id) => builder.header(USER_ID_HEADER, user_id),
            None => builder,
        }
    }

    /// Send once and map non-success statuses
    async fn send(&self, builder: RequestBuilder, url: &Url) -> GatewayResult<reqwest::Response> {
        let response = builder.send().await.map_err(|source| {
            tracing::error!(url = %url, error = %source, "backend request failed");
            GatewayError::Transport {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(url = %url, "backend returned 404");
            return Err(GatewayError::NotFound {
                url: url.to_string(),
            });
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(url = %url, status = status.as_u16(), body = %body, "backend returned an error");
        Err(GatewayError::Backend {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> GatewayResult<T> {
        let url = self.url(segments)?;
        let response = self.send(self.request(Method::GET, &url), &url).await?;
        decode(response, &url).await
    }

    async fn send_empty(&self, method: Method, segments: &[&str]) -> GatewayResult<()> {
        let url = self.url(segments)?;
        self.send(self.request(method, &url), &url).await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response, url: &Url) -> GatewayResult<T> {
    response.json::<T>().await.map_err(|e| {
        tracing::error!(url = %url, error = %e, "could not decode backend response");
        GatewayError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        }
    })
}

#[async_trait]
impl Backend for Gateway {
    async fn get_project(&self, project_id: &str) -> GatewayResult<Project> {
        self.get_json(&["projects", project_id]).await
    }

    async fn get_project_by_slug(&self, slug: &str) -> GatewayResult<Project> {
        self.get_json(&["projects", "slug", slug]).await
    }

    async fn list_projects(&self) -> GatewayResult<Vec<Project>> {
        self.get_json(&["projects"]).await
    }

    async fn create_project(&self, request: &CreateProject) -> GatewayResult<Project> {
        let url = self.url(&["projects"])?;
        let response = self
            .send(self.request(Method::POST, &url).json(request), &url)
            .await?;
        decode(response, &url).await
    }

    async fn delete_project(&self, project_id: &str) -> GatewayResult<()> {
        self.send_empty(Method::DELETE, &["projects", project_id]).await
    }

    async fn deploy_project(&self, project_id: &str) -> GatewayResult<()> {
        let url = self.url(&["projects", project_id, "deploy"])?;
        self.send(self.request(Method::PUT, &url).json(&json!({})), &url)
            .await?;
        Ok(())
    }

    async fn list_resources(&self, project_id: &str) -> GatewayResult<Vec<Resource>> {
        self.get_json(&["projects", project_id, "resources"]).await
    }

    async fn create_resource(&self, request: &CreateResource) -> GatewayResult<Resource> {
        let url = self.url(&["projects", &request.project_id, "resources"])?;
        let response = self
            .send(self.request(Method::POST, &url).json(request), &url)
            .await?;
        decode(response, &url).await
    }

    async fn delete_resource(&self, resource_id: &str) -> GatewayResult<()> {
        self.send_empty(Method::DELETE, &["resources", resource_id]).await
    }

    async fn usage(&self, project_id: &str) -> GatewayResult<UsageSnapshot> {
        self.get_json(&["projects", project_id, "usage"]).await
    }

    async fn analytics(&self, project_id: &str) -> GatewayResult<AnalyticsSnapshot> {
        self.get_json(&["projects", project_id, "analytics"]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_urls() {
        let gateway = Gateway::new(&ClientConfig::new("http://localhost:8080/"), "user_1").unwrap();
        assert_eq!(gateway.base_url(), "http://localhost:8080");
        assert_eq!(
            gateway.url(&["projects"]).unwrap().as_str(),
            "http://localhost:8080/api/projects"
        );
        assert_eq!(gateway.user_id(), Some("user_1"));
    }

    #[test]
    fn test_segments_are_encoded() {
        let gateway = Gateway::anonymous(&ClientConfig::new("http://localhost:8080")).unwrap();
        let url = |segments: &[&str]| gateway.url(segments).unwrap();

        assert_eq!(
            url(&["projects", "slug", "../../projects"]).path(),
            "/api/projects/slug/..%2F..%2Fprojects"
        );
        let query = url(&["projects", "slug", "shop?owner=x"]);
        assert_eq!(query.path(), "/api/projects/slug/shop%3Fowner=x");
        assert_eq!(query.query(), None);
        assert_eq!(url(&["projects", "slug", "a/b"]).path(), "/api/projects/slug/a%2Fb");
    }

    #[test]
    fn test_dot_segments_are_refused() {
        let gateway = Gateway::anonymous(&ClientConfig::default()).unwrap();
        for bad in ["", ".", ".."] {
            let err = gateway.url(&["resources", bad]).unwrap_err();
            assert!(matches!(err, GatewayError::InvalidPathSegment(_)), "{bad:?}");
        }
    }

    #[test]
    fn test_base_path_is_kept() {
        let gateway = Gateway::anonymous(&ClientConfig::new("https://example.dev/mock/")).unwrap();
        assert_eq!(
            gateway.url(&["projects", "p1"]).unwrap().as_str(),
            "https://example.dev/mock/api/projects/p1"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Gateway::anonymous(&ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, GatewayError::Config(_)));
    }

    #[test]
    fn test_anonymous_gateway() {
        let gateway = Gateway::anonymous(&ClientConfig::default()).unwrap();
        assert!(gateway.user_id().is_none());
    }
}
