//! HTTP implementation of the remote contracts.
//!
//! Talks to the content API with reqwest. Every response body is an
//! [`ApiResponse`] envelope; list endpoints may nest the collection under a
//! named field of `data`.

use crate::config::ApiConfig;
use crate::error::{ConsoleError, ConsoleResult};
use crate::remote::{ProjectDirectory, RemoteCollection};
use async_trait::async_trait;
use folio_model::{
    ApiResponse, Persisted, ProjectContent, ProjectContentRequest, ProjectDetail, ProjectPage,
    ProjectRequest,
};
use folio_types::EntityId;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Shared HTTP client bound to one API base URL.
#[derive(Debug)]
pub struct ApiClient {
    config: ApiConfig,
    client: Client,
}

impl ApiClient {
    /// Builds a client. Fails on invalid configuration.
    pub fn new(config: ApiConfig) -> ConsoleResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// GETs `path` and returns the envelope payload.
    pub async fn get(&self, path: &str) -> ConsoleResult<Value> {
        debug!("GET {}", path);
        self.fetch(self.client.get(self.url(path)), path).await
    }

    /// GETs `path` with query parameters.
    pub async fn get_with<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> ConsoleResult<Value> {
        debug!("GET {}", path);
        self.fetch(self.client.get(self.url(path)).query(query), path)
            .await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ConsoleResult<Value> {
        debug!("POST {}", path);
        self.fetch(self.client.post(self.url(path)).json(body), path)
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ConsoleResult<Value> {
        debug!("PUT {}", path);
        self.fetch(self.client.put(self.url(path)).json(body), path)
            .await
    }

    /// DELETEs `path`. A 404 counts as already deleted.
    pub async fn delete(&self, path: &str) -> ConsoleResult<()> {
        debug!("DELETE {}", path);
        let response = self.client.delete(self.url(path)).send().await?;
        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ConsoleError::Status {
            path: path.to_string(),
            status: status.as_u16(),
            body,
        })
    }

    async fn fetch(&self, request: RequestBuilder, path: &str) -> ConsoleResult<Value> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ConsoleError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        let bytes = response.bytes().await?;
        let envelope: ApiResponse<Value> = serde_json::from_slice(&bytes)?;
        Ok(envelope.into_data())
    }
}

/// Where a collection lives on the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Entity name used in logs and errors.
    pub kind: &'static str,
    /// Path the collection is read from.
    pub list_path: &'static str,
    /// Field of the response payload that holds the collection, if nested.
    pub list_field: Option<&'static str>,
    /// Base path for create (POST) and, with `/{id}`, update and delete.
    pub write_path: &'static str,
}

impl Endpoint {
    pub fn skills() -> Self {
        Self {
            kind: "skill",
            list_path: "/api/skills",
            list_field: Some("skills"),
            write_path: "/api/skills",
        }
    }

    pub fn categories() -> Self {
        Self {
            kind: "category",
            list_path: "/api/skills/categories",
            list_field: None,
            write_path: "/api/skills/categories",
        }
    }

    pub fn certifications() -> Self {
        Self {
            kind: "certification",
            list_path: "/api/certifications",
            list_field: Some("certifications"),
            write_path: "/api/certifications/certifications",
        }
    }

    pub fn awards() -> Self {
        Self {
            kind: "award",
            list_path: "/api/certifications",
            list_field: Some("awards"),
            write_path: "/api/certifications/awards",
        }
    }

    pub fn businesses() -> Self {
        Self {
            kind: "business",
            list_path: "/api/careers",
            list_field: Some("businesses"),
            write_path: "/api/careers/business",
        }
    }

    pub fn career_projects() -> Self {
        Self {
            kind: "career project",
            list_path: "/api/careers",
            list_field: Some("projects"),
            write_path: "/api/careers/projects",
        }
    }

    fn item_path(&self, id: &EntityId) -> String {
        format!("{}/{}", self.write_path, urlencoding::encode(id.as_str()))
    }
}

/// Turns a 404 on an item path into [`ConsoleError::NotFound`].
fn missing(kind: &str, id: &EntityId) -> impl FnOnce(ConsoleError) -> ConsoleError {
    let kind = kind.to_string();
    let id = id.clone();
    move |err| match err {
        ConsoleError::Status { status: 404, .. } => ConsoleError::NotFound { kind, id },
        other => other,
    }
}

/// A flat collection served by the content API.
pub struct HttpCollection<T> {
    api: Arc<ApiClient>,
    endpoint: Endpoint,
    _entity: PhantomData<fn() -> T>,
}

impl<T> HttpCollection<T> {
    pub fn new(api: Arc<ApiClient>, endpoint: Endpoint) -> Self {
        Self {
            api,
            endpoint,
            _entity: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[async_trait]
impl<T> RemoteCollection<T> for HttpCollection<T>
where
    T: Persisted + DeserializeOwned,
{
    fn kind(&self) -> &str {
        self.endpoint.kind
    }

    async fn list(&self) -> ConsoleResult<Vec<T>> {
        let data = self.api.get(self.endpoint.list_path).await?;
        let items = match (self.endpoint.list_field, data) {
            (None, data) => data,
            (Some(field), Value::Object(mut payload)) => payload.remove(field).unwrap_or(Value::Null),
            (Some(_), Value::Null) => Value::Null,
            (Some(field), other) => {
                return Err(ConsoleError::Malformed {
                    path: self.endpoint.list_path.to_string(),
                    reason: format!("expected an object holding `{field}`, got {other}"),
                });
            }
        };
        if items.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(items)?)
    }

    async fn create(&self, request: &T::Request) -> ConsoleResult<T> {
        let data = self.api.post(self.endpoint.write_path, request).await?;
        Ok(serde_json::from_value(data)?)
    }

    async fn update(&self, id: &EntityId, request: &T::Request) -> ConsoleResult<T> {
        let data = self
            .api
            .put(&self.endpoint.item_path(id), request)
            .await
            .map_err(missing(self.endpoint.kind, id))?;
        Ok(serde_json::from_value(data)?)
    }

    async fn delete(&self, id: &EntityId) -> ConsoleResult<()> {
        self.api.delete(&self.endpoint.item_path(id)).await
    }
}

const PROJECTS_PATH: &str = "/api/projects";
const CONTENTS_PATH: &str = "/api/projects/contents";

/// The project endpoints of the content API.
pub struct HttpProjectDirectory {
    api: Arc<ApiClient>,
}

impl HttpProjectDirectory {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    fn project_path(id: &EntityId) -> String {
        format!("{PROJECTS_PATH}/{}", urlencoding::encode(id.as_str()))
    }

    fn content_path(id: &EntityId) -> String {
        format!("{CONTENTS_PATH}/{}", urlencoding::encode(id.as_str()))
    }
}

#[async_trait]
impl ProjectDirectory for HttpProjectDirectory {
    async fn page(&self, page: u32, size: u32) -> ConsoleResult<ProjectPage> {
        let data = self
            .api
            .get_with(PROJECTS_PATH, &[("page", page), ("size", size)])
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    async fn detail(&self, id: &EntityId) -> ConsoleResult<ProjectDetail> {
        let data = self
            .api
            .get(&Self::project_path(id))
            .await
            .map_err(missing("project", id))?;
        Ok(serde_json::from_value(data)?)
    }

    async fn create(&self, request: &ProjectRequest) -> ConsoleResult<ProjectDetail> {
        let data = self.api.post(PROJECTS_PATH, request).await?;
        Ok(serde_json::from_value(data)?)
    }

    async fn update(&self, id: &EntityId, request: &ProjectRequest) -> ConsoleResult<ProjectDetail> {
        let data = self
            .api
            .put(&Self::project_path(id), request)
            .await
            .map_err(missing("project", id))?;
        Ok(serde_json::from_value(data)?)
    }

    async fn create_content(
        &self,
        request: &ProjectContentRequest,
    ) -> ConsoleResult<ProjectContent> {
        let data = self.api.post(CONTENTS_PATH, request).await?;
        Ok(serde_json::from_value(data)?)
    }

    async fn update_content(
        &self,
        id: &EntityId,
        request: &ProjectContentRequest,
    ) -> ConsoleResult<ProjectContent> {
        let data = self
            .api
            .put(&Self::content_path(id), request)
            .await
            .map_err(missing("project content", id))?;
        Ok(serde_json::from_value(data)?)
    }

    async fn delete_content(&self, id: &EntityId) -> ConsoleResult<()> {
        self.api.delete(&Self::content_path(id)).await
    }
}
