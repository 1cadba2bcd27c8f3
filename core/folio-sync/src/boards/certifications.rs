use super::note_reorder;
use crate::collection::ManagedCollection;
use crate::config::ApiConfig;
use crate::error::{ErrorBanner, Failure, FailureKind};
use crate::reconciler::ReconcileOutcome;
use crate::remote::RemoteCollection;
use folio_model::{Credential, CredentialRequest};
use folio_types::EntityId;
use std::sync::Arc;

/// Which of the two credential lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    Certification,
    Award,
}

/// Certifications and awards: two flat lists loaded together.
pub struct CertificationBoard {
    certifications: ManagedCollection<Credential>,
    awards: ManagedCollection<Credential>,
    banner: ErrorBanner,
}

impl CertificationBoard {
    pub fn new(
        certifications: Arc<dyn RemoteCollection<Credential>>,
        awards: Arc<dyn RemoteCollection<Credential>>,
        config: &ApiConfig,
    ) -> Self {
        Self {
            certifications: ManagedCollection::new(certifications, config.write_timeout()),
            awards: ManagedCollection::new(awards, config.write_timeout()),
            banner: ErrorBanner::default(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.banner.message()
    }

    fn list(&self, kind: CredentialKind) -> &ManagedCollection<Credential> {
        match kind {
            CredentialKind::Certification => &self.certifications,
            CredentialKind::Award => &self.awards,
        }
    }

    /// Entries of one list, sorted by order index.
    pub fn items(&self, kind: CredentialKind) -> Vec<Credential> {
        self.list(kind).sorted()
    }

    pub async fn load(&mut self) -> Result<(), Failure> {
        self.banner.clear();
        let (certifications, awards) =
            futures::join!(self.certifications.fetch(), self.awards.fetch());
        match (certifications, awards) {
            (Ok(certifications), Ok(awards)) => {
                self.certifications.replace(certifications);
                self.awards.replace(awards);
                Ok(())
            }
            (Err(err), _) | (_, Err(err)) => Err(self.banner.raise(FailureKind::Load, err)),
        }
    }

    /// Payload for a new entry appended to `kind`.
    pub fn draft(&self, kind: CredentialKind) -> CredentialRequest {
        CredentialRequest {
            order_index: Some(self.list(kind).next_order()),
            ..Default::default()
        }
    }

    pub fn edit(&self, kind: CredentialKind, id: &EntityId) -> Option<CredentialRequest> {
        self.list(kind).edit(id)
    }

    pub async fn save(
        &mut self,
        kind: CredentialKind,
        editing: Option<&EntityId>,
        request: CredentialRequest,
    ) -> Result<Credential, Failure> {
        let result = self.list(kind).save(editing, &request).await;
        let saved = match result {
            Ok(saved) => saved,
            Err(err) => return Err(self.banner.raise(FailureKind::Save, err)),
        };
        // A failed reload is already on the banner.
        let _ = self.load().await;
        Ok(saved)
    }

    pub async fn delete(&mut self, kind: CredentialKind, id: &EntityId) -> Result<(), Failure> {
        let result = self.list(kind).delete(id).await;
        if let Err(err) = result {
            return Err(self.banner.raise(FailureKind::Delete, err));
        }
        let _ = self.load().await;
        Ok(())
    }

    pub async fn reorder(&mut self, kind: CredentialKind, active: &str, over: &str) -> ReconcileOutcome {
        let (outcome, label) = match kind {
            CredentialKind::Certification => {
                (self.certifications.reorder_all(active, over).await, "certification")
            }
            CredentialKind::Award => (self.awards.reorder_all(active, over).await, "award"),
        };
        note_reorder(&mut self.banner, label, &outcome);
        outcome
    }
}
