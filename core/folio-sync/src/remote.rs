//! Remote collection contracts.
//!
//! Every content collection is persisted by a remote API with replace
//! semantics. The console never assigns ids and never trusts its local copy
//! over a fresh `list()`.

use crate::error::ConsoleResult;
use async_trait::async_trait;
use folio_model::{
    Persisted, ProjectContent, ProjectContentRequest, ProjectDetail, ProjectPage, ProjectRequest,
};
use folio_types::EntityId;
use std::sync::Arc;

/// A remotely persisted collection of ordered entities.
#[async_trait]
pub trait RemoteCollection<T: Persisted>: Send + Sync {
    /// Short name used in logs and errors (e.g. `"skill"`).
    fn kind(&self) -> &str;

    /// Returns the full current collection.
    async fn list(&self) -> ConsoleResult<Vec<T>>;

    /// Creates an entity; the remote assigns its id.
    async fn create(&self, request: &T::Request) -> ConsoleResult<T>;

    /// Replaces the entity with `id`.
    async fn update(&self, id: &EntityId, request: &T::Request) -> ConsoleResult<T>;

    /// Deletes the entity with `id`.
    async fn delete(&self, id: &EntityId) -> ConsoleResult<()>;
}

/// The project endpoints: a paged listing, detail reads carrying the content
/// tree, and the content writes.
#[async_trait]
pub trait ProjectDirectory: Send + Sync {
    /// One page of project summaries, zero-based.
    async fn page(&self, page: u32, size: u32) -> ConsoleResult<ProjectPage>;

    /// A single project with its embedded contents.
    async fn detail(&self, id: &EntityId) -> ConsoleResult<ProjectDetail>;

    async fn create(&self, request: &ProjectRequest) -> ConsoleResult<ProjectDetail>;

    async fn update(&self, id: &EntityId, request: &ProjectRequest) -> ConsoleResult<ProjectDetail>;

    async fn create_content(&self, request: &ProjectContentRequest)
    -> ConsoleResult<ProjectContent>;

    async fn update_content(
        &self,
        id: &EntityId,
        request: &ProjectContentRequest,
    ) -> ConsoleResult<ProjectContent>;

    async fn delete_content(&self, id: &EntityId) -> ConsoleResult<()>;
}

/// The content tree of one project, viewed as a remote collection.
///
/// Listing reads the project detail and stamps the project id on every node,
/// so updates built from loaded nodes always name their project.
pub struct ProjectContents {
    directory: Arc<dyn ProjectDirectory>,
    project_id: EntityId,
}

impl ProjectContents {
    pub fn new(directory: Arc<dyn ProjectDirectory>, project_id: EntityId) -> Self {
        Self {
            directory,
            project_id,
        }
    }

    pub fn project_id(&self) -> &EntityId {
        &self.project_id
    }

    /// Stamps the owning project on nodes read from a detail response.
    pub fn stamp(project_id: &EntityId, contents: Option<Vec<ProjectContent>>) -> Vec<ProjectContent> {
        let mut contents = contents.unwrap_or_default();
        for content in &mut contents {
            content.project_id = Some(project_id.clone());
        }
        contents
    }
}

#[async_trait]
impl RemoteCollection<ProjectContent> for ProjectContents {
    fn kind(&self) -> &str {
        "project content"
    }

    async fn list(&self) -> ConsoleResult<Vec<ProjectContent>> {
        let detail = self.directory.detail(&self.project_id).await?;
        Ok(Self::stamp(&self.project_id, detail.contents))
    }

    async fn create(&self, request: &ProjectContentRequest) -> ConsoleResult<ProjectContent> {
        let mut request = request.clone();
        request.project_id = Some(self.project_id.clone());
        self.directory.create_content(&request).await
    }

    async fn update(
        &self,
        id: &EntityId,
        request: &ProjectContentRequest,
    ) -> ConsoleResult<ProjectContent> {
        let mut request = request.clone();
        request.project_id = Some(self.project_id.clone());
        self.directory.update_content(id, &request).await
    }

    async fn delete(&self, id: &EntityId) -> ConsoleResult<()> {
        self.directory.delete_content(id).await
    }
}
