use crate::ordered::{non_empty, Ordered, Persisted};
use folio_types::EntityId;
use serde::{Deserialize, Serialize};

/// A content block of a project. Blocks nest arbitrarily via `parent_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContent {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
    /// Owning project. Not part of the detail payload; stamped on load so
    /// that write requests can carry it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<EntityId>,
}

/// Create/update payload for a [`ProjectContent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
}

/// Full project with its content blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub id: EntityId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<ProjectContent>>,
}

/// One row of the paged project listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: EntityId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Create/update payload for a project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl ProjectRequest {
    /// Adds a skill tag after trimming. Blank and duplicate tags are ignored.
    /// Returns true if the tag was added.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let trimmed = skill.trim();
        if trimmed.is_empty() {
            return false;
        }
        let skills = self.skills.get_or_insert_with(Vec::new);
        if skills.iter().any(|s| s == trimmed) {
            return false;
        }
        skills.push(trimmed.to_string());
        true
    }

    /// Removes every occurrence of a skill tag.
    pub fn remove_skill(&mut self, skill: &str) {
        if let Some(skills) = self.skills.as_mut() {
            skills.retain(|s| s != skill);
        }
    }
}

/// One page of the project listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
    #[serde(default)]
    pub items: Vec<ProjectSummary>,
    pub total_pages: u32,
    pub total_elements: u32,
    pub size: u32,
    pub number: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

impl ProjectDetail {
    /// Builds the edit form payload, keeping every stored field.
    pub fn to_request(&self) -> ProjectRequest {
        ProjectRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            skills: self.skills.clone(),
            participants: self.participants,
            period: self.period.clone(),
            order: self.order,
        }
    }
}

impl Ordered for ProjectContent {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn parent_key(&self) -> Option<&EntityId> {
        non_empty(&self.parent_id)
    }

    fn stored_order(&self) -> Option<u32> {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = Some(order);
    }
}

impl Persisted for ProjectContent {
    type Request = ProjectContentRequest;

    fn to_request(&self) -> ProjectContentRequest {
        ProjectContentRequest {
            project_id: self.project_id.clone(),
            parent_id: self.parent_id.clone(),
            order: self.order,
            content: self.content.clone(),
            children: self.children.clone(),
        }
    }

    fn materialize(id: EntityId, request: ProjectContentRequest) -> Self {
        Self {
            id,
            parent_id: request.parent_id,
            order: request.order,
            content: request.content,
            children: request.children,
            project_id: request.project_id,
        }
    }
}

impl Ordered for ProjectSummary {
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
