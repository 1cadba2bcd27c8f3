//! Content model for the Folio admin console.
//!
//! Defines the wire types of the four content collections and the traits
//! the ordering core works against:
//! - [`Ordered`]: an entity with an id, an optional parent/group key and an order index
//! - [`Persisted`]: an [`Ordered`] entity with a full replace payload
//! - [`ApiResponse`]: the envelope every API response is wrapped in
//!
//! Skills are grouped by category, project contents nest by parent id, and
//! the remaining collections are flat sibling lists.

mod careers;
mod certifications;
mod envelope;
mod ordered;
mod projects;
mod skills;

pub use careers::{Business, CareerEntry, CareerProject, CareerRequest};
pub use certifications::{Award, Certification, Credential, CredentialRequest};
pub use envelope::ApiResponse;
pub use ordered::{Ordered, Persisted};
pub use projects::{
    ProjectContent, ProjectContentRequest, ProjectDetail, ProjectPage, ProjectRequest,
    ProjectSummary,
};
pub use skills::{Category, CategoryRequest, Skill, SkillRequest};
