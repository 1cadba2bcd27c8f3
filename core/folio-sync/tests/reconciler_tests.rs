mod common;

use common::{abcd_skills, id, orders, skill};
use folio_model::Skill;
use folio_order::sorted;
use folio_sync::{
    CollectionState, ConsoleError, MemoryCollection, OrderReconciler, ReconcileOutcome,
    RemoteCollection,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

async fn loaded(
    remote: &Arc<MemoryCollection<Skill>>,
    write_timeout: Duration,
) -> (OrderReconciler<Skill>, CollectionState<Skill>) {
    let reconciler = OrderReconciler::new(remote.clone(), write_timeout);
    let mut state = CollectionState::new();
    reconciler.load(&mut state).await.unwrap();
    (reconciler, state)
}

fn ordered_ids(state: &CollectionState<Skill>) -> Vec<String> {
    sorted(state.items()).iter().map(|s| s.id.to_string()).collect()
}

// ── Success ──────────────────────────────────────────────────────

#[tokio::test]
async fn saved_reorder_writes_only_changed_entities() {
    let remote = abcd_skills();
    let (reconciler, mut state) = loaded(&remote, Duration::from_secs(5)).await;
    let group = sorted(state.items());

    let outcome = reconciler.reorder(&mut state, &group, "A", "C").await;

    assert!(matches!(outcome, ReconcileOutcome::Saved { updated: 3 }));
    let mut written = remote.updates();
    written.sort();
    assert_eq!(written, vec![id("A"), id("B"), id("C")]);
    assert_eq!(ordered_ids(&state), vec!["B", "C", "A", "D"]);
    assert!(!state.is_optimistic());
}

#[tokio::test]
async fn saved_reorder_matches_remote() {
    let remote = abcd_skills();
    let (reconciler, mut state) = loaded(&remote, Duration::from_secs(5)).await;
    let group = sorted(state.items());

    reconciler.reorder(&mut state, &group, "D", "A").await;

    assert_eq!(orders(state.items()), orders(&remote.snapshot()));
    assert_eq!(state.authoritative(), state.items());
}

#[tokio::test]
async fn updates_carry_the_full_entity() {
    let remote = abcd_skills();
    let (reconciler, mut state) = loaded(&remote, Duration::from_secs(5)).await;
    let group = sorted(state.items());

    reconciler.reorder(&mut state, &group, "A", "B").await;

    let stored = remote.get(&id("A")).unwrap();
    assert_eq!(stored.name, "skill A");
    assert_eq!(stored.category_id, Some(id("backend")));
    assert_eq!(stored.order, Some(1));
}

// ── No-ops ───────────────────────────────────────────────────────

#[tokio::test]
async fn dropping_on_itself_issues_no_writes() {
    let remote = abcd_skills();
    let (reconciler, mut state) = loaded(&remote, Duration::from_secs(5)).await;
    let version = state.version();
    let group = sorted(state.items());

    let outcome = reconciler.reorder(&mut state, &group, "B", "B").await;

    assert!(matches!(outcome, ReconcileOutcome::Unchanged));
    assert!(remote.updates().is_empty());
    assert_eq!(state.version(), version);
}

#[tokio::test]
async fn vanished_entity_is_a_noop() {
    let remote = abcd_skills();
    let (reconciler, mut state) = loaded(&remote, Duration::from_secs(5)).await;
    let group = sorted(state.items());

    let outcome = reconciler.reorder(&mut state, &group, "gone", "A").await;

    assert!(matches!(outcome, ReconcileOutcome::Unchanged));
    assert!(remote.updates().is_empty());
}

// ── Failure handling ─────────────────────────────────────────────

#[tokio::test]
async fn failed_write_reloads_authoritative_state() {
    let remote = abcd_skills();
    let (reconciler, mut state) = loaded(&remote, Duration::from_secs(5)).await;
    remote.fail_updates_for(&id("C"));
    let group = sorted(state.items());

    let outcome = reconciler.reorder(&mut state, &group, "A", "C").await;

    let failed: Vec<_> = outcome.failed().iter().map(|f| f.id.clone()).collect();
    assert!(matches!(outcome, ReconcileOutcome::Reloaded { .. }));
    assert_eq!(failed, vec![id("C")]);
    // The other writes landed; the state shows exactly what the remote holds.
    assert_eq!(state.items(), remote.list().await.unwrap().as_slice());
    assert_eq!(
        orders(state.items()),
        vec![
            ("A".to_string(), Some(2)),
            ("B".to_string(), Some(0)),
            ("C".to_string(), Some(2)),
            ("D".to_string(), Some(3)),
        ]
    );
    assert!(!state.is_optimistic());
}

#[tokio::test]
async fn failed_reload_restores_last_snapshot() {
    let remote = abcd_skills();
    let (reconciler, mut state) = loaded(&remote, Duration::from_secs(5)).await;
    let before = state.items().to_vec();
    remote.fail_updates_for(&id("B"));
    remote.fail_next_list();
    let group = sorted(state.items());

    let outcome = reconciler.reorder(&mut state, &group, "A", "C").await;

    match outcome {
        ReconcileOutcome::Restored {
            failed,
            reload_error,
        } => {
            assert_eq!(failed.len(), 1);
            assert!(matches!(reload_error, ConsoleError::Injected(_)));
        }
        other => panic!("expected Restored, got {other:?}"),
    }
    assert_eq!(state.items(), before.as_slice());
    assert!(!state.is_optimistic());
}

#[tokio::test]
async fn entity_deleted_elsewhere_triggers_reload() {
    let remote = abcd_skills();
    let (reconciler, mut state) = loaded(&remote, Duration::from_secs(5)).await;
    remote.remove_behind_the_scenes(&id("B"));
    let group = sorted(state.items());

    let outcome = reconciler.reorder(&mut state, &group, "A", "C").await;

    assert!(outcome.is_failure());
    assert!(
        outcome
            .failed()
            .iter()
            .any(|f| matches!(f.error, ConsoleError::NotFound { .. }))
    );
    assert!(state.get(&id("B")).is_none());
    assert_eq!(state.items().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn slow_writes_time_out_and_reload() {
    let remote = abcd_skills();
    let (reconciler, mut state) = loaded(&remote, Duration::from_millis(20)).await;
    remote.delay_writes(Duration::from_secs(30));
    let group = sorted(state.items());

    let outcome = reconciler.reorder(&mut state, &group, "A", "C").await;

    assert_eq!(outcome.failed().len(), 3);
    assert!(
        outcome
            .failed()
            .iter()
            .all(|f| matches!(f.error, ConsoleError::Timeout))
    );
    // Timed-out writes never applied, so the reload shows the original orders.
    assert_eq!(ordered_ids(&state), vec!["A", "B", "C", "D"]);
}

// ── Gaps and missing orders ──────────────────────────────────────

#[tokio::test]
async fn gapped_orders_become_contiguous() {
    let remote = Arc::new(MemoryCollection::seeded(
        "skill",
        vec![
            skill("A", None, 0),
            skill("B", None, 10),
            skill("C", None, 20),
        ],
    ));
    let (reconciler, mut state) = loaded(&remote, Duration::from_secs(5)).await;
    let group = sorted(state.items());

    reconciler.reorder(&mut state, &group, "C", "A").await;

    assert_eq!(
        orders(&remote.snapshot()),
        vec![
            ("A".to_string(), Some(1)),
            ("B".to_string(), Some(2)),
            ("C".to_string(), Some(0)),
        ]
    );
}

#[tokio::test]
async fn never_ordered_entities_are_written() {
    let mut unordered = skill("B", None, 0);
    unordered.order = None;
    let remote = Arc::new(MemoryCollection::seeded(
        "skill",
        vec![skill("A", None, 0), unordered, skill("C", None, 2)],
    ));
    let (reconciler, mut state) = loaded(&remote, Duration::from_secs(5)).await;
    let group = sorted(state.items());

    // Stable sort puts B (order 0 by default) after A; move C to the front.
    reconciler.reorder(&mut state, &group, "C", "A").await;

    assert_eq!(remote.get(&id("B")).unwrap().order, Some(2));
}
