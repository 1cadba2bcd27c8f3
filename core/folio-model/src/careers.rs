use crate::ordered::{Ordered, Persisted};
use folio_types::EntityId;
use serde::{Deserialize, Serialize};

/// A career entry. Businesses and career projects share this shape; only
/// businesses carry `details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerEntry {
    pub id: EntityId,
    /// `YYYY-MM-DD`.
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<u32>,
}

pub type Business = CareerEntry;
pub type CareerProject = CareerEntry;

/// Create/update payload for a [`CareerEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRequest {
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl Ordered for CareerEntry {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn stored_order(&self) -> Option<u32> {
        self.order_index
    }

    fn set_order(&mut self, order: u32) {
        self.order_index = Some(order);
    }
}

impl Persisted for CareerEntry {
    type Request = CareerRequest;

    fn to_request(&self) -> CareerRequest {
        CareerRequest {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            company: self.company.clone(),
            department: self.department.clone(),
            position: self.position.clone(),
            skills: self.skills.clone(),
            order_index: self.order_index,
            details: self.details.clone(),
        }
    }

    fn materialize(id: EntityId, request: CareerRequest) -> Self {
        Self {
            id,
            start_date: request.start_date,
            end_date: request.end_date,
            company: request.company,
            department: request.department,
            position: request.position,
            skills: request.skills,
            details: request.details,
            order_index: request.order_index,
        }
    }
}
