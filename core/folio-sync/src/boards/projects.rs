use super::note_reorder;
use crate::collection::ManagedCollection;
use crate::config::ApiConfig;
use crate::error::{ErrorBanner, Failure, FailureKind};
use crate::reconciler::ReconcileOutcome;
use crate::remote::{ProjectContents, ProjectDirectory};
use folio_model::{
    ProjectContent, ProjectContentRequest, ProjectDetail, ProjectPage, ProjectRequest,
    ProjectSummary,
};
use folio_order::{next_order, Forest};
use folio_types::EntityId;
use std::sync::Arc;
use tracing::debug;

/// Participants preset on new and edited projects that carry none.
const DEFAULT_PARTICIPANTS: u32 = 1;

/// The paged project listing.
pub struct ProjectCatalog {
    directory: Arc<dyn ProjectDirectory>,
    page_size: u32,
    page: Option<ProjectPage>,
    banner: ErrorBanner,
}

impl ProjectCatalog {
    pub fn new(directory: Arc<dyn ProjectDirectory>, config: &ApiConfig) -> Self {
        Self {
            directory,
            page_size: config.page_size,
            page: None,
            banner: ErrorBanner::default(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.banner.message()
    }

    /// Summaries of the loaded page, as the remote ordered them.
    pub fn items(&self) -> &[ProjectSummary] {
        match &self.page {
            Some(page) => &page.items,
            None => &[],
        }
    }

    /// Zero-based number of the loaded page.
    pub fn page_number(&self) -> u32 {
        self.page.as_ref().map_or(0, |page| page.number)
    }

    pub fn total_pages(&self) -> u32 {
        self.page.as_ref().map_or(0, |page| page.total_pages)
    }

    pub fn total_elements(&self) -> u32 {
        self.page.as_ref().map_or(0, |page| page.total_elements)
    }

    pub async fn load(&mut self, page: u32) -> Result<(), Failure> {
        self.banner.clear();
        let loaded = self
            .directory
            .page(page, self.page_size)
            .await
            .map_err(|err| self.banner.raise(FailureKind::Load, err))?;
        debug!(page = loaded.number, items = loaded.items.len(), "loaded project page");
        self.page = Some(loaded);
        Ok(())
    }

    /// Moves to another page. Out-of-range pages are ignored.
    pub async fn go_to(&mut self, page: u32) -> Result<bool, Failure> {
        if page >= self.total_pages() {
            return Ok(false);
        }
        self.load(page).await?;
        Ok(true)
    }

    /// Payload for a new project, placed after every existing one.
    pub fn draft(&self) -> ProjectRequest {
        ProjectRequest {
            participants: Some(DEFAULT_PARTICIPANTS),
            order: Some(self.total_elements()),
            ..Default::default()
        }
    }

    /// Creates a project and returns it, so the caller can open its board.
    pub async fn create(&mut self, request: ProjectRequest) -> Result<ProjectDetail, Failure> {
        self.directory
            .create(&request)
            .await
            .map_err(|err| self.banner.raise(FailureKind::Save, err))
    }
}

/// One project with its content tree.
pub struct ProjectBoard {
    directory: Arc<dyn ProjectDirectory>,
    project_id: EntityId,
    project: Option<ProjectDetail>,
    contents: ManagedCollection<ProjectContent>,
    banner: ErrorBanner,
}

impl ProjectBoard {
    pub fn new(directory: Arc<dyn ProjectDirectory>, project_id: EntityId, config: &ApiConfig) -> Self {
        let contents = ProjectContents::new(Arc::clone(&directory), project_id.clone());
        Self {
            directory,
            project_id,
            project: None,
            contents: ManagedCollection::new(Arc::new(contents), config.write_timeout()),
            banner: ErrorBanner::default(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.banner.message()
    }

    pub fn project_id(&self) -> &EntityId {
        &self.project_id
    }

    /// Project fields, without contents.
    pub fn project(&self) -> Option<&ProjectDetail> {
        self.project.as_ref()
    }

    /// Content nodes in storage order.
    pub fn contents(&self) -> &[ProjectContent] {
        self.contents.items()
    }

    /// The content tree, assembled from the current nodes.
    pub fn forest(&self) -> Forest<'_, ProjectContent> {
        Forest::assemble(self.contents.items())
    }

    /// Owned siblings under `parent` (roots when `None`), sorted by order.
    pub fn siblings(&self, parent: Option<&EntityId>) -> Vec<ProjectContent> {
        let forest = self.forest();
        let group = match parent {
            Some(id) => forest.children_of(id.as_str()),
            None => forest.roots(),
        };
        group.iter().map(|&node| node.clone()).collect()
    }

    /// Loads the project detail; contents come embedded in it.
    pub async fn load(&mut self) -> Result<(), Failure> {
        self.banner.clear();
        let mut detail = self
            .directory
            .detail(&self.project_id)
            .await
            .map_err(|err| self.banner.raise(FailureKind::Load, err))?;
        let contents = ProjectContents::stamp(&self.project_id, detail.contents.take());
        self.contents.replace(contents);
        self.project = Some(detail);

        let forest = self.forest();
        if !forest.orphans().is_empty() {
            debug!(
                project = %self.project_id,
                orphans = forest.orphans().len(),
                "content nodes reference missing parents"
            );
        }
        Ok(())
    }

    // ── Project ──────────────────────────────────────────────────────

    /// Edit payload for the project itself.
    pub fn edit_project(&self) -> Option<ProjectRequest> {
        self.project.as_ref().map(|project| {
            let mut request = project.to_request();
            request.participants.get_or_insert(DEFAULT_PARTICIPANTS);
            request
        })
    }

    pub async fn save_project(&mut self, request: ProjectRequest) -> Result<(), Failure> {
        self.directory
            .update(&self.project_id, &request)
            .await
            .map_err(|err| self.banner.raise(FailureKind::Save, err))?;
        // A failed reload is already on the banner.
        let _ = self.load().await;
        Ok(())
    }

    // ── Contents ─────────────────────────────────────────────────────

    /// Payload for a new node appended under `parent` (a root when `None`).
    pub fn draft_content(&self, parent: Option<&EntityId>) -> ProjectContentRequest {
        ProjectContentRequest {
            project_id: Some(self.project_id.clone()),
            parent_id: parent.cloned(),
            order: Some(next_order(&self.siblings(parent))),
            content: String::new(),
            children: None,
        }
    }

    pub fn edit_content(&self, id: &EntityId) -> Option<ProjectContentRequest> {
        self.contents.edit(id)
    }

    pub async fn save_content(
        &mut self,
        editing: Option<&EntityId>,
        request: ProjectContentRequest,
    ) -> Result<ProjectContent, Failure> {
        let saved = self
            .contents
            .save(editing, &request)
            .await
            .map_err(|err| self.banner.raise(FailureKind::Save, err))?;
        let _ = self.load().await;
        Ok(saved)
    }

    pub async fn delete_content(&mut self, id: &EntityId) -> Result<(), Failure> {
        self.contents
            .delete(id)
            .await
            .map_err(|err| self.banner.raise(FailureKind::Delete, err))?;
        let _ = self.load().await;
        Ok(())
    }

    /// Drag of node `active` onto node `over`, both children of `parent`.
    pub async fn reorder_content(
        &mut self,
        parent: Option<&EntityId>,
        active: &str,
        over: &str,
    ) -> ReconcileOutcome {
        let group = self.siblings(parent);
        let outcome = self.contents.reorder(&group, active, over).await;
        note_reorder(&mut self.banner, "project content", &outcome);
        if let ReconcileOutcome::Reloaded { .. } = outcome {
            self.refresh_project().await;
        }
        outcome
    }

    /// Re-reads the project fields after a content reload. The contents
    /// themselves were already replaced by the reload.
    async fn refresh_project(&mut self) {
        match self.directory.detail(&self.project_id).await {
            Ok(mut detail) => {
                detail.contents = None;
                self.project = Some(detail);
            }
            Err(err) => debug!(project = %self.project_id, "project header not refreshed: {}", err),
        }
    }
}
