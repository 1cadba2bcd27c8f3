//! Shared fixtures for folio-sync tests.

#![allow(dead_code)]

use folio_model::{Category, CareerEntry, Credential, ProjectContent, ProjectDetail, Skill};
use folio_sync::{ApiConfig, MemoryCollection};
use folio_types::EntityId;
use std::sync::Arc;

pub fn config() -> ApiConfig {
    ApiConfig {
        write_timeout_ms: 50,
        ..Default::default()
    }
}

pub fn skill(id: &str, category: Option<&str>, order: u32) -> Skill {
    Skill {
        id: EntityId::new(id),
        name: format!("skill {id}"),
        category_id: category.map(EntityId::new),
        order: Some(order),
    }
}

pub fn category(id: &str, order: u32) -> Category {
    Category {
        id: EntityId::new(id),
        name: format!("category {id}"),
        order: Some(order),
    }
}

pub fn credential(id: &str, order: u32) -> Credential {
    Credential {
        id: EntityId::new(id),
        name: format!("credential {id}"),
        date: "24.01.".into(),
        organization: None,
        tier: None,
        order_index: Some(order),
    }
}

pub fn career(id: &str, order: u32) -> CareerEntry {
    CareerEntry {
        id: EntityId::new(id),
        start_date: "2020.01".into(),
        end_date: None,
        company: format!("company {id}"),
        department: None,
        position: None,
        skills: None,
        details: None,
        order_index: Some(order),
    }
}

pub fn content(id: &str, parent: Option<&str>, order: u32) -> ProjectContent {
    ProjectContent {
        id: EntityId::new(id),
        parent_id: parent.map(EntityId::new),
        order: Some(order),
        content: format!("block {id}"),
        children: None,
        project_id: None,
    }
}

pub fn project(id: &str, contents: Vec<ProjectContent>) -> ProjectDetail {
    ProjectDetail {
        id: EntityId::new(id),
        title: format!("project {id}"),
        description: None,
        skills: None,
        participants: None,
        period: None,
        order: Some(0),
        contents: Some(contents),
    }
}

/// Four skills A..D in category `backend`, orders 0..3.
pub fn abcd_skills() -> Arc<MemoryCollection<Skill>> {
    Arc::new(MemoryCollection::seeded(
        "skill",
        vec![
            skill("A", Some("backend"), 0),
            skill("B", Some("backend"), 1),
            skill("C", Some("backend"), 2),
            skill("D", Some("backend"), 3),
        ],
    ))
}

pub fn backend_categories() -> Arc<MemoryCollection<Category>> {
    Arc::new(MemoryCollection::seeded(
        "category",
        vec![category("backend", 0), category("infra", 1)],
    ))
}

pub fn id(raw: &str) -> EntityId {
    EntityId::new(raw)
}

/// `(id, order)` pairs, sorted by id, for order assertions.
pub fn orders<T: folio_model::Ordered>(items: &[T]) -> Vec<(String, Option<u32>)> {
    let mut pairs: Vec<(String, Option<u32>)> = items
        .iter()
        .map(|item| (item.id().to_string(), item.stored_order()))
        .collect();
    pairs.sort();
    pairs
}
