use super::note_reorder;
use crate::collection::ManagedCollection;
use crate::config::ApiConfig;
use crate::error::{ErrorBanner, Failure, FailureKind};
use crate::reconciler::ReconcileOutcome;
use crate::remote::RemoteCollection;
use folio_model::{CareerEntry, CareerRequest};
use folio_types::EntityId;
use std::sync::Arc;

/// Which career list an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareerKind {
    Business,
    Project,
}

impl CareerKind {
    fn label(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Project => "career project",
        }
    }
}

/// Businesses and career projects.
pub struct CareerBoard {
    businesses: ManagedCollection<CareerEntry>,
    projects: ManagedCollection<CareerEntry>,
    banner: ErrorBanner,
}

impl CareerBoard {
    pub fn new(
        businesses: Arc<dyn RemoteCollection<CareerEntry>>,
        projects: Arc<dyn RemoteCollection<CareerEntry>>,
        config: &ApiConfig,
    ) -> Self {
        Self {
            businesses: ManagedCollection::new(businesses, config.write_timeout()),
            projects: ManagedCollection::new(projects, config.write_timeout()),
            banner: ErrorBanner::default(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.banner.message()
    }

    fn list(&self, kind: CareerKind) -> &ManagedCollection<CareerEntry> {
        match kind {
            CareerKind::Business => &self.businesses,
            CareerKind::Project => &self.projects,
        }
    }

    /// Entries of one list, sorted by order index.
    pub fn items(&self, kind: CareerKind) -> Vec<CareerEntry> {
        self.list(kind).sorted()
    }

    pub async fn load(&mut self) -> Result<(), Failure> {
        self.banner.clear();
        let (businesses, projects) = futures::join!(self.businesses.fetch(), self.projects.fetch());
        match (businesses, projects) {
            (Ok(businesses), Ok(projects)) => {
                self.businesses.replace(businesses);
                self.projects.replace(projects);
                Ok(())
            }
            (Err(err), _) | (_, Err(err)) => Err(self.banner.raise(FailureKind::Load, err)),
        }
    }

    /// Payload for a new entry appended to `kind`.
    pub fn draft(&self, kind: CareerKind) -> CareerRequest {
        CareerRequest {
            order_index: Some(self.list(kind).next_order()),
            ..Default::default()
        }
    }

    pub fn edit(&self, kind: CareerKind, id: &EntityId) -> Option<CareerRequest> {
        self.list(kind).edit(id)
    }

    pub async fn save(
        &mut self,
        kind: CareerKind,
        editing: Option<&EntityId>,
        request: CareerRequest,
    ) -> Result<CareerEntry, Failure> {
        let result = self.list(kind).save(editing, &request).await;
        let saved = match result {
            Ok(saved) => saved,
            Err(err) => return Err(self.banner.raise(FailureKind::Save, err)),
        };
        // A failed reload is already on the banner.
        let _ = self.load().await;
        Ok(saved)
    }

    pub async fn delete(&mut self, kind: CareerKind, id: &EntityId) -> Result<(), Failure> {
        let result = self.list(kind).delete(id).await;
        if let Err(err) = result {
            return Err(self.banner.raise(FailureKind::Delete, err));
        }
        let _ = self.load().await;
        Ok(())
    }

    pub async fn reorder(&mut self, kind: CareerKind, active: &str, over: &str) -> ReconcileOutcome {
        let outcome = match kind {
            CareerKind::Business => self.businesses.reorder_all(active, over).await,
            CareerKind::Project => self.projects.reorder_all(active, over).await,
        };
        note_reorder(&mut self.banner, kind.label(), &outcome);
        outcome
    }
}
