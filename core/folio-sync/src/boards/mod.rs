//! Page state for each content collection.
//!
//! A board owns the collections a console page shows, the user-facing error
//! slot, and the operations the page offers. Every mutating operation takes
//! `&mut self`, so at most one mutation per board is in flight. Remote
//! failures never escape as panics: they become a [`Failure`] that is also
//! recorded on the board's banner.
//!
//! [`Failure`]: crate::error::Failure

mod careers;
mod certifications;
mod projects;
mod skills;

pub use careers::{CareerBoard, CareerKind};
pub use certifications::{CertificationBoard, CredentialKind};
pub use projects::{ProjectBoard, ProjectCatalog};
pub use skills::SkillBoard;

use crate::error::{ErrorBanner, FailureKind};
use crate::reconciler::ReconcileOutcome;
use tracing::warn;

/// Shows the reorder failure message when a reconciliation did not save.
fn note_reorder(banner: &mut ErrorBanner, kind: &str, outcome: &ReconcileOutcome) {
    if outcome.is_failure() {
        warn!(
            kind,
            failed = outcome.failed().len(),
            restored = matches!(outcome, ReconcileOutcome::Restored { .. }),
            "reorder not saved"
        );
        banner.show(FailureKind::Reorder.message());
    }
}
