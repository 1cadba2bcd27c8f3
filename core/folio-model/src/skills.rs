use crate::ordered::{non_empty, Ordered, Persisted};
use folio_types::EntityId;
use serde::{Deserialize, Serialize};

/// A skill category. Categories form a single ungrouped sibling group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Create/update payload for a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// A skill, grouped under an optional category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Create/update payload for a [`Skill`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl Ordered for Category {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn stored_order(&self) -> Option<u32> {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = Some(order);
    }
}

impl Persisted for Category {
    type Request = CategoryRequest;

    fn to_request(&self) -> CategoryRequest {
        CategoryRequest {
            name: self.name.clone(),
            order: self.order,
        }
    }

    fn materialize(id: EntityId, request: CategoryRequest) -> Self {
        Self {
            id,
            name: request.name,
            order: request.order,
        }
    }
}

impl Ordered for Skill {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn parent_key(&self) -> Option<&EntityId> {
        non_empty(&self.category_id)
    }

    fn stored_order(&self) -> Option<u32> {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = Some(order);
    }
}

impl Persisted for Skill {
    type Request = SkillRequest;

    fn to_request(&self) -> SkillRequest {
        SkillRequest {
            name: self.name.clone(),
            category_id: self.category_id.clone(),
            order: self.order,
        }
    }

    fn materialize(id: EntityId, request: SkillRequest) -> Self {
        Self {
            id,
            name: request.name,
            category_id: request.category_id,
            order: request.order,
        }
    }
}
