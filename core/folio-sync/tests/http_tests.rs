use folio_model::{Category, Credential, Skill, SkillRequest};
use folio_order::sorted;
use folio_sync::{
    ApiClient, ApiConfig, CollectionState, ConsoleError, Endpoint, HttpCollection,
    HttpProjectDirectory, OrderReconciler, ProjectContents, ProjectDirectory, ReconcileOutcome,
    RemoteCollection,
};
use folio_types::EntityId;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(ApiConfig::with_base_url(server.uri())).unwrap())
}

fn envelope(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": data, "status": "OK" }))
}

// ── Client construction ─────────────────────────────────────────

#[test]
fn client_rejects_invalid_config() {
    let err = ApiClient::new(ApiConfig::with_base_url("")).unwrap_err();
    assert!(matches!(err, ConsoleError::Config(_)));

    let err = ApiClient::new(ApiConfig::with_base_url("ftp://example.com")).unwrap_err();
    assert!(matches!(err, ConsoleError::Config(_)));
}

#[test]
fn endpoints_point_at_the_content_api() {
    assert_eq!(Endpoint::skills().list_field, Some("skills"));
    assert_eq!(Endpoint::categories().list_field, None);
    assert_eq!(Endpoint::awards().list_path, Endpoint::certifications().list_path);
    assert_eq!(Endpoint::businesses().write_path, "/api/careers/business");
    assert_eq!(Endpoint::career_projects().list_field, Some("projects"));
}

// ── Listing ─────────────────────────────────────────────────────

#[tokio::test]
async fn lists_nested_collection_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/skills"))
        .respond_with(envelope(json!({
            "skills": [
                { "id": "s1", "name": "Rust", "categoryId": "backend", "order": 0 },
                { "id": "s2", "name": "Go" }
            ]
        })))
        .mount(&server)
        .await;

    let skills: HttpCollection<Skill> = HttpCollection::new(api(&server), Endpoint::skills());
    let listed = skills.list().await.unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].category_id, Some(EntityId::new("backend")));
    assert_eq!(listed[1].order, None);
}

#[tokio::test]
async fn lists_bare_array_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/skills/categories"))
        .respond_with(envelope(json!([{ "id": "c1", "name": "Backend", "order": 1 }])))
        .mount(&server)
        .await;

    let categories: HttpCollection<Category> =
        HttpCollection::new(api(&server), Endpoint::categories());
    let listed = categories.list().await.unwrap();

    assert_eq!(listed[0].order, Some(1));
}

#[tokio::test]
async fn missing_list_field_reads_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/certifications"))
        .respond_with(envelope(json!({ "certifications": [] })))
        .mount(&server)
        .await;

    let awards: HttpCollection<Credential> = HttpCollection::new(api(&server), Endpoint::awards());
    assert!(awards.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn server_error_is_a_retryable_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/skills"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let skills: HttpCollection<Skill> = HttpCollection::new(api(&server), Endpoint::skills());
    let err = skills.list().await.unwrap_err();

    assert!(matches!(err, ConsoleError::Status { status: 503, .. }));
    assert!(err.is_retryable());
}

// ── Writes ──────────────────────────────────────────────────────

#[tokio::test]
async fn update_puts_full_payload() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/skills/s1"))
        .and(body_json(json!({ "name": "Rust", "categoryId": "backend", "order": 3 })))
        .respond_with(envelope(json!({
            "id": "s1", "name": "Rust", "categoryId": "backend", "order": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let skills: HttpCollection<Skill> = HttpCollection::new(api(&server), Endpoint::skills());
    let request = SkillRequest {
        name: "Rust".into(),
        category_id: Some(EntityId::new("backend")),
        order: Some(3),
    };
    let updated = skills.update(&EntityId::new("s1"), &request).await.unwrap();

    assert_eq!(updated.order, Some(3));
}

#[tokio::test]
async fn update_of_missing_entity_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/skills/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let skills: HttpCollection<Skill> = HttpCollection::new(api(&server), Endpoint::skills());
    let request = SkillRequest {
        name: "x".into(),
        category_id: None,
        order: Some(0),
    };
    let err = skills.update(&EntityId::new("gone"), &request).await.unwrap_err();

    assert!(matches!(err, ConsoleError::NotFound { .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn delete_treats_not_found_as_done() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/certifications/awards/a1"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let awards: HttpCollection<Credential> = HttpCollection::new(api(&server), Endpoint::awards());
    awards.delete(&EntityId::new("a1")).await.unwrap();
}

// ── Projects ────────────────────────────────────────────────────

#[tokio::test]
async fn project_page_sends_page_and_size() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .and(query_param("page", "1"))
        .and(query_param("size", "10"))
        .respond_with(envelope(json!({
            "items": [{ "id": "p11", "title": "Eleventh" }],
            "totalPages": 2,
            "totalElements": 11,
            "size": 10,
            "number": 1,
            "first": false,
            "last": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let directory = HttpProjectDirectory::new(api(&server));
    let page = directory.page(1, 10).await.unwrap();

    assert_eq!(page.total_elements, 11);
    assert!(page.last);
}

#[tokio::test]
async fn project_contents_are_stamped_with_their_project() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects/p1"))
        .respond_with(envelope(json!({
            "id": "p1",
            "title": "Folio",
            "contents": [
                { "id": "c1", "content": "intro", "order": 0 },
                { "id": "c2", "content": "detail", "parentId": "c1", "order": 0 }
            ]
        })))
        .mount(&server)
        .await;

    let directory = Arc::new(HttpProjectDirectory::new(api(&server)));
    let contents = ProjectContents::new(directory, EntityId::new("p1"));
    let listed = contents.list().await.unwrap();

    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|c| c.project_id == Some(EntityId::new("p1"))));
}

#[tokio::test]
async fn content_update_carries_project_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/projects/contents/c2"))
        .and(body_json(json!({
            "projectId": "p1", "parentId": "c1", "order": 1, "content": "detail"
        })))
        .respond_with(envelope(json!({
            "id": "c2", "content": "detail", "parentId": "c1", "order": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let directory = Arc::new(HttpProjectDirectory::new(api(&server)));
    let contents = ProjectContents::new(directory, EntityId::new("p1"));
    let request = folio_model::ProjectContentRequest {
        project_id: None,
        parent_id: Some(EntityId::new("c1")),
        order: Some(1),
        content: "detail".into(),
        children: None,
    };
    contents.update(&EntityId::new("c2"), &request).await.unwrap();
}

// ── Reconciliation over HTTP ────────────────────────────────────

#[tokio::test]
async fn rejected_order_write_triggers_reload() {
    let server = MockServer::start().await;
    let initial = json!([
        { "id": "a", "name": "A", "order": 0 },
        { "id": "b", "name": "B", "order": 1 }
    ]);
    Mock::given(method("GET"))
        .and(path("/api/skills/categories"))
        .respond_with(envelope(initial))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/skills/categories/a"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/skills/categories/b"))
        .respond_with(envelope(json!({ "id": "b", "name": "B", "order": 0 })))
        .expect(1)
        .mount(&server)
        .await;

    let remote: Arc<dyn RemoteCollection<Category>> =
        Arc::new(HttpCollection::<Category>::new(api(&server), Endpoint::categories()));
    let reconciler = OrderReconciler::new(remote, Duration::from_secs(5));
    let mut state = CollectionState::new();
    reconciler.load(&mut state).await.unwrap();
    let group = sorted(state.items());

    let outcome = reconciler.reorder(&mut state, &group, "b", "a").await;

    assert!(matches!(outcome, ReconcileOutcome::Reloaded { .. }));
    assert_eq!(outcome.failed()[0].id, EntityId::new("a"));
    assert!(!state.is_optimistic());
    assert_eq!(state.get(&EntityId::new("a")).unwrap().order, Some(0));
}
