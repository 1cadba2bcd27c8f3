//! In-process collaborators for tests and demo mode.
//!
//! Behave like the content API (server-assigned ids, replace semantics on
//! update) and let callers inject failures and latency.

use crate::error::{ConsoleError, ConsoleResult};
use crate::remote::{ProjectDirectory, RemoteCollection};
use async_trait::async_trait;
use folio_model::{
    Ordered, Persisted, ProjectContent, ProjectContentRequest, ProjectDetail, ProjectPage,
    ProjectRequest, ProjectSummary,
};
use folio_types::EntityId;
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

fn fresh_id() -> EntityId {
    EntityId::new(Uuid::new_v4().to_string())
}

#[derive(Debug, Default)]
struct Faults {
    failing_updates: HashSet<EntityId>,
    fail_next_list: bool,
    fail_next_write: bool,
    write_delay: Option<Duration>,
}

/// A remote collection held in memory.
pub struct MemoryCollection<T> {
    kind: String,
    items: Mutex<Vec<T>>,
    faults: Mutex<Faults>,
    updates: Mutex<Vec<EntityId>>,
}

impl<T: Persisted> MemoryCollection<T> {
    pub fn new(kind: impl Into<String>) -> Self {
        Self::seeded(kind, Vec::new())
    }

    /// A collection that already holds `items`, in storage order.
    pub fn seeded(kind: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            kind: kind.into(),
            items: Mutex::new(items),
            faults: Mutex::new(Faults::default()),
            updates: Mutex::new(Vec::new()),
        }
    }

    /// Current stored items.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Looks up one stored item.
    pub fn get(&self, id: &EntityId) -> Option<T> {
        self.items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Ids of every update received, in arrival order.
    pub fn updates(&self) -> Vec<EntityId> {
        self.updates.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn clear_updates(&self) {
        self.updates.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// Rejects every future update of `id`.
    pub fn fail_updates_for(&self, id: &EntityId) {
        self.faults().failing_updates.insert(id.clone());
    }

    /// Rejects the next `list()` call only.
    pub fn fail_next_list(&self) {
        self.faults().fail_next_list = true;
    }

    /// Rejects the next create, update or delete only.
    pub fn fail_next_write(&self) {
        self.faults().fail_next_write = true;
    }

    /// Delays every write by `delay` before applying it.
    pub fn delay_writes(&self, delay: Duration) {
        self.faults().write_delay = Some(delay);
    }

    /// Clears all injected faults.
    pub fn heal(&self) {
        *self.faults() = Faults::default();
    }

    /// Removes an item without going through the contract, as another
    /// operator deleting it concurrently would.
    pub fn remove_behind_the_scenes(&self, id: &EntityId) {
        self.items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .retain(|item| item.id() != id);
    }

    fn faults(&self) -> std::sync::MutexGuard<'_, Faults> {
        self.faults.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Applies write faults. Returns the delay to wait before writing.
    fn check_write(&self, op: &str) -> ConsoleResult<Option<Duration>> {
        let mut faults = self.faults();
        if std::mem::take(&mut faults.fail_next_write) {
            return Err(ConsoleError::Injected(format!("{} {op} rejected", self.kind)));
        }
        Ok(faults.write_delay)
    }
}

#[async_trait]
impl<T: Persisted> RemoteCollection<T> for MemoryCollection<T> {
    fn kind(&self) -> &str {
        &self.kind
    }

    async fn list(&self) -> ConsoleResult<Vec<T>> {
        if std::mem::take(&mut self.faults().fail_next_list) {
            return Err(ConsoleError::Injected(format!("{} list rejected", self.kind)));
        }
        Ok(self.snapshot())
    }

    async fn create(&self, request: &T::Request) -> ConsoleResult<T> {
        if let Some(delay) = self.check_write("create")? {
            tokio::time::sleep(delay).await;
        }
        let item = T::materialize(fresh_id(), request.clone());
        self.items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: &EntityId, request: &T::Request) -> ConsoleResult<T> {
        let delay = self.check_write("update")?;
        let rejected = self.faults().failing_updates.contains(id);
        if rejected {
            return Err(ConsoleError::Injected(format!("{} update of {id} rejected", self.kind)));
        }
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.updates
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(id.clone());

        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        let slot = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| ConsoleError::NotFound {
                kind: self.kind.clone(),
                id: id.clone(),
            })?;
        *slot = T::materialize(id.clone(), request.clone());
        Ok(slot.clone())
    }

    async fn delete(&self, id: &EntityId) -> ConsoleResult<()> {
        if let Some(delay) = self.check_write("delete")? {
            tokio::time::sleep(delay).await;
        }
        self.items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .retain(|item| item.id() != id);
        Ok(())
    }
}

/// Projects and their content trees held in memory.
///
/// Contents live in one shared [`MemoryCollection`] keyed by project id, so
/// content fault injection goes through [`MemoryProjectDirectory::contents`].
pub struct MemoryProjectDirectory {
    projects: Mutex<Vec<ProjectDetail>>,
    contents: MemoryCollection<ProjectContent>,
    fail_next_detail: Mutex<bool>,
}

impl Default for MemoryProjectDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProjectDirectory {
    pub fn new() -> Self {
        Self {
            projects: Mutex::new(Vec::new()),
            contents: MemoryCollection::new("project content"),
            fail_next_detail: Mutex::new(false),
        }
    }

    /// Stores a project. Embedded contents move into the content store.
    pub fn insert(&self, mut project: ProjectDetail) {
        for mut content in project.contents.take().unwrap_or_default() {
            content.project_id = Some(project.id.clone());
            self.contents
                .items
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(content);
        }
        self.projects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(project);
    }

    /// The shared content store.
    pub fn contents(&self) -> &MemoryCollection<ProjectContent> {
        &self.contents
    }

    /// Rejects the next `detail()` call only.
    pub fn fail_next_detail(&self) {
        *self.fail_next_detail.lock().unwrap_or_else(|e| e.into_inner()) = true;
    }

    fn lookup(&self, id: &EntityId) -> ConsoleResult<ProjectDetail> {
        self.projects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|project| &project.id == id)
            .cloned()
            .ok_or_else(|| ConsoleError::NotFound {
                kind: "project".into(),
                id: id.clone(),
            })
    }

    fn summary(project: &ProjectDetail) -> ProjectSummary {
        ProjectSummary {
            id: project.id.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            skills: project.skills.clone(),
            period: project.period.clone(),
            order: project.order,
        }
    }

    fn build(id: EntityId, request: &ProjectRequest) -> ProjectDetail {
        ProjectDetail {
            id,
            title: request.title.clone(),
            description: request.description.clone(),
            skills: request.skills.clone(),
            participants: request.participants,
            period: request.period.clone(),
            order: request.order,
            contents: None,
        }
    }
}

#[async_trait]
impl ProjectDirectory for MemoryProjectDirectory {
    async fn page(&self, page: u32, size: u32) -> ConsoleResult<ProjectPage> {
        if size == 0 {
            return Err(ConsoleError::Config("page size must be positive".into()));
        }
        let projects = self.projects.lock().unwrap_or_else(|e| e.into_inner());
        let total = projects.len() as u32;
        let total_pages = total.div_ceil(size);
        let items = projects
            .iter()
            .skip((page as usize).saturating_mul(size as usize))
            .take(size as usize)
            .map(Self::summary)
            .collect();
        Ok(ProjectPage {
            items,
            total_pages,
            total_elements: total,
            size,
            number: page,
            first: page == 0,
            last: page.saturating_add(1) >= total_pages,
        })
    }

    async fn detail(&self, id: &EntityId) -> ConsoleResult<ProjectDetail> {
        if std::mem::take(&mut *self.fail_next_detail.lock().unwrap_or_else(|e| e.into_inner())) {
            return Err(ConsoleError::Injected(format!("project {id} detail rejected")));
        }
        let mut project = self.lookup(id)?;
        let contents = self
            .contents
            .snapshot()
            .into_iter()
            .filter(|content| content.project_id.as_ref() == Some(id))
            .map(|mut content| {
                // The detail payload does not carry the owning project.
                content.project_id = None;
                content
            })
            .collect();
        project.contents = Some(contents);
        Ok(project)
    }

    async fn create(&self, request: &ProjectRequest) -> ConsoleResult<ProjectDetail> {
        let project = Self::build(fresh_id(), request);
        self.projects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(project.clone());
        Ok(project)
    }

    async fn update(&self, id: &EntityId, request: &ProjectRequest) -> ConsoleResult<ProjectDetail> {
        let mut projects = self.projects.lock().unwrap_or_else(|e| e.into_inner());
        let slot = projects
            .iter_mut()
            .find(|project| &project.id == id)
            .ok_or_else(|| ConsoleError::NotFound {
                kind: "project".into(),
                id: id.clone(),
            })?;
        *slot = Self::build(id.clone(), request);
        Ok(slot.clone())
    }

    async fn create_content(
        &self,
        request: &ProjectContentRequest,
    ) -> ConsoleResult<ProjectContent> {
        self.contents.create(request).await
    }

    async fn update_content(
        &self,
        id: &EntityId,
        request: &ProjectContentRequest,
    ) -> ConsoleResult<ProjectContent> {
        self.contents.update(id, request).await
    }

    async fn delete_content(&self, id: &EntityId) -> ConsoleResult<()> {
        self.contents.delete(id).await
    }
}
