use crate::ordered::{Ordered, Persisted};
use folio_types::EntityId;
use serde::{Deserialize, Serialize};

/// A certification or an award. Both collections share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub id: EntityId,
    pub name: String,
    /// `YY.MM.`
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<u32>,
}

pub type Certification = Credential;
pub type Award = Credential;

/// Create/update payload for a [`Credential`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRequest {
    pub name: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<u32>,
}

impl Ordered for Credential {
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

impl Persisted for Credential {
    type Request = CredentialRequest;

    fn to_request(&self) -> CredentialRequest {
        CredentialRequest {
            name: self.name.clone(),
            date: self.date.clone(),
            organization: self.organization.clone(),
            tier: self.tier.clone(),
            order_index: self.order_index,
        }
    }

    fn materialize(id: EntityId, request: CredentialRequest) -> Self {
        Self {
            id,
            name: request.name,
            date: request.date,
            organization: request.organization,
            tier: request.tier,
            order_index: request.order_index,
        }
    }
}
