mod common;

use common::{
    abcd_skills, backend_categories, career, category, config, content, credential, id, project,
    skill,
};
use folio_model::{CareerEntry, CareerRequest, Credential, ProjectRequest, Skill};
use folio_order::next_order;
use folio_sync::{
    CareerBoard, CareerKind, CertificationBoard, CredentialKind, FailureKind, MemoryCollection,
    MemoryProjectDirectory, ProjectBoard, ProjectCatalog, ProjectDirectory, ReconcileOutcome,
    RemoteCollection, SkillBoard,
};
use folio_types::GroupKey;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn names(skills: &[Skill]) -> Vec<String> {
    skills.iter().map(|s| s.id.to_string()).collect()
}

// ── Skills ───────────────────────────────────────────────────────

#[tokio::test]
async fn skill_board_groups_by_category() {
    let skills = Arc::new(MemoryCollection::seeded(
        "skill",
        vec![
            skill("rust", Some("backend"), 1),
            skill("go", Some("backend"), 0),
            skill("k8s", Some("infra"), 0),
            skill("stray", Some("deleted"), 0),
            skill("loose", None, 1),
        ],
    ));
    let mut board = SkillBoard::new(skills, backend_categories(), &config());
    board.load().await.unwrap();

    let backend = GroupKey::keyed("backend");
    assert_eq!(names(&board.group_members(&backend)), vec!["go", "rust"]);
    assert_eq!(
        names(&board.group_members(&GroupKey::Uncategorized)),
        vec!["stray", "loose"]
    );
    assert_eq!(board.groups().len(), 3);
    assert_eq!(board.group_label(&backend), "category backend");
    assert_eq!(board.group_label(&GroupKey::Uncategorized), "Uncategorized");
}

#[tokio::test]
async fn skill_reorder_persists_within_group() {
    let skills = abcd_skills();
    let mut board = SkillBoard::new(skills.clone(), backend_categories(), &config());
    board.load().await.unwrap();

    let key = GroupKey::keyed("backend");
    let outcome = board.reorder_skill(&key, "A", "C").await;

    assert!(matches!(outcome, ReconcileOutcome::Saved { updated: 3 }));
    assert_eq!(names(&board.group_members(&key)), vec!["B", "C", "A", "D"]);
    assert!(board.error().is_none());
}

#[tokio::test]
async fn skill_reorder_failure_sets_error_and_reloads() {
    let skills = abcd_skills();
    let mut board = SkillBoard::new(skills.clone(), backend_categories(), &config());
    board.load().await.unwrap();
    skills.fail_updates_for(&id("B"));

    let outcome = board.reorder_skill(&GroupKey::keyed("backend"), "A", "C").await;

    assert!(outcome.is_failure());
    assert_eq!(board.error(), Some(FailureKind::Reorder.message()));
    assert_eq!(board.skills(), skills.list().await.unwrap().as_slice());
}

#[tokio::test]
async fn category_reorder_uses_all_categories() {
    let categories = Arc::new(MemoryCollection::seeded(
        "category",
        vec![category("a", 0), category("b", 1), category("c", 2)],
    ));
    let mut board = SkillBoard::new(abcd_skills(), categories.clone(), &config());
    board.load().await.unwrap();

    board.reorder_category("c", "a").await;

    let order: Vec<String> = board.categories().iter().map(|c| c.id.to_string()).collect();
    assert_eq!(order, vec!["c", "a", "b"]);
    assert_eq!(categories.updates().len(), 3);
}

#[tokio::test]
async fn skill_draft_order_is_bucket_length() {
    let mut board = SkillBoard::new(abcd_skills(), backend_categories(), &config());
    board.load().await.unwrap();

    let draft = board.draft_skill(&GroupKey::keyed("backend"));
    assert_eq!(draft.order, Some(4));
    assert_eq!(draft.category_id, Some(id("backend")));

    let empty = board.draft_skill(&GroupKey::keyed("infra"));
    assert_eq!(empty.order, Some(0));

    let loose = board.draft_skill(&GroupKey::Uncategorized);
    assert_eq!(loose.category_id, None);
}

#[tokio::test]
async fn skill_edit_keeps_stored_order() {
    let mut board = SkillBoard::new(abcd_skills(), backend_categories(), &config());
    board.load().await.unwrap();

    let edit = board.edit_skill(&id("C")).unwrap();
    assert_eq!(edit.order, Some(2));
    assert!(board.edit_skill(&id("ghost")).is_none());
}

#[tokio::test]
async fn saving_a_skill_reloads() {
    let skills = abcd_skills();
    let mut board = SkillBoard::new(skills.clone(), backend_categories(), &config());
    board.load().await.unwrap();

    let mut draft = board.draft_skill(&GroupKey::keyed("infra"));
    draft.name = "terraform".into();
    let saved = board.save_skill(None, draft).await.unwrap();

    assert_eq!(board.skills().len(), 5);
    assert_eq!(
        names(&board.group_members(&GroupKey::keyed("infra"))),
        vec![saved.id.to_string()]
    );
}

#[tokio::test]
async fn failed_save_keeps_state_and_sets_error() {
    let skills = abcd_skills();
    let mut board = SkillBoard::new(skills.clone(), backend_categories(), &config());
    board.load().await.unwrap();
    skills.fail_next_write();

    let draft = board.draft_skill(&GroupKey::Uncategorized);
    let err = board.save_skill(None, draft).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Save);
    assert_eq!(board.error(), Some("Failed to save."));
    assert_eq!(board.skills().len(), 4);
}

#[tokio::test]
async fn failed_load_keeps_previous_data() {
    let skills = abcd_skills();
    let categories = backend_categories();
    let mut board = SkillBoard::new(skills.clone(), categories.clone(), &config());
    board.load().await.unwrap();
    categories.fail_next_list();

    let err = board.load().await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Load);
    assert_eq!(board.skills().len(), 4);
    assert_eq!(board.categories().len(), 2);
}

#[tokio::test]
async fn deleting_a_category_moves_members_to_uncategorized() {
    let skills = abcd_skills();
    let categories = backend_categories();
    let mut board = SkillBoard::new(skills.clone(), categories.clone(), &config());
    board.load().await.unwrap();
    board.toggle(GroupKey::keyed("backend"));

    // The remote detaches member skills; this collaborator leaves them
    // pointing at the deleted id, which groups the same way.
    board.delete_category(&id("backend")).await.unwrap();

    assert_eq!(board.categories().len(), 1);
    assert_eq!(board.group_members(&GroupKey::Uncategorized).len(), 4);
    assert!(!board.is_expanded(&GroupKey::keyed("backend")));
}

#[tokio::test]
async fn accordion_toggles_and_expands_all() {
    let mut board = SkillBoard::new(abcd_skills(), backend_categories(), &config());
    board.load().await.unwrap();

    board.toggle(GroupKey::keyed("infra"));
    assert!(board.is_expanded(&GroupKey::keyed("infra")));
    board.toggle(GroupKey::keyed("infra"));
    assert!(!board.is_expanded(&GroupKey::keyed("infra")));

    board.expand_all();
    assert!(board.is_expanded(&GroupKey::keyed("backend")));
    assert!(board.is_expanded(&GroupKey::Uncategorized));
    board.collapse_all();
    assert!(!board.is_expanded(&GroupKey::Uncategorized));
}

// ── Projects ─────────────────────────────────────────────────────

fn directory() -> Arc<MemoryProjectDirectory> {
    let directory = MemoryProjectDirectory::new();
    directory.insert(project(
        "p1",
        vec![
            content("intro", None, 0),
            content("body", None, 1),
            content("b2", Some("body"), 1),
            content("b1", Some("body"), 0),
            content("lost", Some("deleted"), 0),
        ],
    ));
    Arc::new(directory)
}

#[tokio::test]
async fn project_board_assembles_content_tree() {
    let mut board = ProjectBoard::new(directory(), id("p1"), &config());
    board.load().await.unwrap();

    let forest = board.forest();
    let roots: Vec<&str> = forest.roots().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(roots, vec!["intro", "body"]);
    let children: Vec<&str> = forest.children_of("body").iter().map(|c| c.id.as_str()).collect();
    assert_eq!(children, vec!["b1", "b2"]);
    assert_eq!(forest.orphans().len(), 1);
    assert!(
        board
            .contents()
            .iter()
            .all(|c| c.project_id == Some(id("p1")))
    );
}

#[tokio::test]
async fn content_draft_order_counts_siblings() {
    let mut board = ProjectBoard::new(directory(), id("p1"), &config());
    board.load().await.unwrap();

    assert_eq!(board.draft_content(None).order, Some(2));
    let nested = board.draft_content(Some(&id("body")));
    assert_eq!(nested.order, Some(2));
    assert_eq!(nested.parent_id, Some(id("body")));
    assert_eq!(nested.project_id, Some(id("p1")));
    assert_eq!(board.draft_content(Some(&id("intro"))).order, Some(0));
}

#[tokio::test]
async fn content_reorder_touches_only_siblings() {
    let directory = directory();
    let mut board = ProjectBoard::new(directory.clone(), id("p1"), &config());
    board.load().await.unwrap();

    let outcome = board.reorder_content(Some(&id("body")), "b2", "b1").await;

    assert!(matches!(outcome, ReconcileOutcome::Saved { updated: 2 }));
    let mut written = directory.contents().updates();
    written.sort();
    assert_eq!(written, vec![id("b1"), id("b2")]);
    let children: Vec<String> = board
        .siblings(Some(&id("body")))
        .iter()
        .map(|c| c.id.to_string())
        .collect();
    assert_eq!(children, vec!["b2", "b1"]);
    // Writes keep the owning project.
    assert_eq!(
        directory.contents().get(&id("b2")).unwrap().project_id,
        Some(id("p1"))
    );
}

#[tokio::test]
async fn content_reorder_failure_reloads_detail() {
    let directory = directory();
    let mut board = ProjectBoard::new(directory.clone(), id("p1"), &config());
    board.load().await.unwrap();
    directory.contents().fail_updates_for(&id("intro"));

    let outcome = board.reorder_content(None, "body", "intro").await;

    assert!(outcome.is_failure());
    assert_eq!(board.error(), Some(FailureKind::Reorder.message()));
    let roots: Vec<String> = board.siblings(None).iter().map(|c| c.id.to_string()).collect();
    // `body` moved to 0; `intro` kept 0; the stable sort keeps storage order.
    assert_eq!(roots, vec!["intro", "body"]);
}

#[tokio::test]
async fn content_reorder_failure_refreshes_project_fields() {
    let directory = directory();
    let mut board = ProjectBoard::new(directory.clone(), id("p1"), &config());
    board.load().await.unwrap();
    let renamed = ProjectRequest {
        title: "renamed elsewhere".into(),
        order: Some(0),
        ..Default::default()
    };
    directory.update(&id("p1"), &renamed).await.unwrap();
    directory.contents().fail_updates_for(&id("intro"));

    let outcome = board.reorder_content(None, "body", "intro").await;

    assert!(matches!(outcome, ReconcileOutcome::Reloaded { .. }));
    let project = board.project().unwrap();
    assert_eq!(project.title, "renamed elsewhere");
    assert!(project.contents.is_none());
    assert_eq!(board.contents().len(), 5);
}

#[tokio::test]
async fn content_draft_order_matches_sibling_count_after_reorder() {
    let mut board = ProjectBoard::new(directory(), id("p1"), &config());
    board.load().await.unwrap();
    board.reorder_content(Some(&id("body")), "b2", "b1").await;

    let siblings = board.siblings(Some(&id("body")));
    assert_eq!(board.draft_content(Some(&id("body"))).order, Some(next_order(&siblings)));
}

#[tokio::test]
async fn saving_content_reloads_tree() {
    let directory = directory();
    let mut board = ProjectBoard::new(directory.clone(), id("p1"), &config());
    board.load().await.unwrap();

    let mut draft = board.draft_content(Some(&id("intro")));
    draft.content = "first point".into();
    board.save_content(None, draft).await.unwrap();

    assert_eq!(board.forest().children_of("intro").len(), 1);
}

#[tokio::test]
async fn deleting_content_reloads_tree() {
    let directory = directory();
    let mut board = ProjectBoard::new(directory.clone(), id("p1"), &config());
    board.load().await.unwrap();

    board.delete_content(&id("intro")).await.unwrap();

    assert!(board.contents().iter().all(|c| c.id != id("intro")));
}

#[tokio::test]
async fn failed_project_load_sets_error() {
    let directory = directory();
    let mut board = ProjectBoard::new(directory.clone(), id("p1"), &config());
    board.load().await.unwrap();
    directory.fail_next_detail();

    assert!(board.load().await.is_err());
    assert_eq!(board.error(), Some("Failed to load data."));
    assert_eq!(board.contents().len(), 5);
}

#[tokio::test]
async fn project_edit_defaults_participants() {
    let mut board = ProjectBoard::new(directory(), id("p1"), &config());
    board.load().await.unwrap();

    let mut edit = board.edit_project().unwrap();
    assert_eq!(edit.participants, Some(1));
    edit.add_skill("rust");
    board.save_project(edit).await.unwrap();

    assert_eq!(
        board.project().unwrap().skills,
        Some(vec!["rust".to_string()])
    );
}

#[tokio::test]
async fn catalog_pages_and_drafts_at_the_end() {
    let directory = directory();
    for n in 2..=12 {
        directory.insert(project(&format!("p{n}"), Vec::new()));
    }
    let mut catalog = ProjectCatalog::new(directory, &config());
    catalog.load(0).await.unwrap();

    assert_eq!(catalog.items().len(), 10);
    assert_eq!(catalog.total_pages(), 2);
    assert_eq!(catalog.draft().order, Some(12));
    assert_eq!(catalog.draft().participants, Some(1));

    assert!(catalog.go_to(1).await.unwrap());
    assert_eq!(catalog.items().len(), 2);
    assert_eq!(catalog.page_number(), 1);
    assert!(!catalog.go_to(2).await.unwrap());
}

#[tokio::test]
async fn catalog_create_returns_new_project() {
    let directory = directory();
    let mut catalog = ProjectCatalog::new(directory.clone(), &config());
    catalog.load(0).await.unwrap();

    let mut draft = catalog.draft();
    draft.title = "new".into();
    let created = catalog.create(draft).await.unwrap();

    let mut board = ProjectBoard::new(directory, created.id.clone(), &config());
    board.load().await.unwrap();
    assert_eq!(board.project().unwrap().title, "new");
    assert!(board.contents().is_empty());
}

#[tokio::test]
async fn catalog_page_far_past_the_end_is_empty() {
    let directory = directory();
    let page = directory.page(500_000_000, 10).await.unwrap();
    assert!(page.items.is_empty());
    assert!(page.last);

    let page = directory.page(u32::MAX, u32::MAX).await.unwrap();
    assert!(page.items.is_empty());
    assert!(page.last);

    let mut catalog = ProjectCatalog::new(directory, &config());
    catalog.load(500_000_000).await.unwrap();
    assert!(catalog.items().is_empty());
    assert_eq!(catalog.total_elements(), 1);
    assert!(catalog.error().is_none());
}

// ── Certifications & careers ─────────────────────────────────────

#[tokio::test]
async fn certification_lists_reorder_independently() {
    let certifications = Arc::new(MemoryCollection::seeded(
        "certification",
        vec![credential("c1", 0), credential("c2", 1)],
    ));
    let awards = Arc::new(MemoryCollection::seeded("award", vec![credential("a1", 0)]));
    let mut board = CertificationBoard::new(certifications.clone(), awards.clone(), &config());
    board.load().await.unwrap();

    board.reorder(CredentialKind::Certification, "c2", "c1").await;

    let order: Vec<String> = board
        .items(CredentialKind::Certification)
        .iter()
        .map(|c| c.id.to_string())
        .collect();
    assert_eq!(order, vec!["c2", "c1"]);
    assert!(awards.updates().is_empty());
    assert_eq!(board.draft(CredentialKind::Award).order_index, Some(1));
}

#[tokio::test]
async fn certification_delete_failure_sets_error() {
    let certifications = Arc::new(MemoryCollection::seeded(
        "certification",
        vec![credential("c1", 0)],
    ));
    let awards = Arc::new(MemoryCollection::<Credential>::new("award"));
    let mut board = CertificationBoard::new(certifications.clone(), awards, &config());
    board.load().await.unwrap();
    certifications.fail_next_write();

    let err = board
        .delete(CredentialKind::Certification, &id("c1"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Delete);
    assert_eq!(board.items(CredentialKind::Certification).len(), 1);
}

#[tokio::test]
async fn career_board_saves_into_the_right_list() {
    let businesses = Arc::new(MemoryCollection::seeded("business", vec![career("b1", 0)]));
    let projects = Arc::new(MemoryCollection::<CareerEntry>::new("career project"));
    let mut board = CareerBoard::new(businesses.clone(), projects.clone(), &config());
    board.load().await.unwrap();

    let request = CareerRequest {
        company: "acme".into(),
        start_date: "2024.03".into(),
        ..board.draft(CareerKind::Project)
    };
    board.save(CareerKind::Project, None, request).await.unwrap();

    assert_eq!(board.items(CareerKind::Project).len(), 1);
    assert_eq!(board.items(CareerKind::Project)[0].order_index, Some(0));
    assert_eq!(board.items(CareerKind::Business).len(), 1);
    assert_eq!(board.edit(CareerKind::Business, &id("b1")).unwrap().order_index, Some(0));
}
