//! Plain-text views of the boards.

use folio_model::{CareerEntry, Credential, ProjectContent};
use folio_order::Forest;
use folio_sync::{
    CareerBoard, CareerKind, CertificationBoard, CredentialKind, ProjectBoard, ProjectCatalog,
    ReconcileOutcome, SkillBoard,
};

fn order_label(order: Option<u32>) -> String {
    match order {
        Some(order) => order.to_string(),
        None => "-".to_string(),
    }
}

fn with_banner(mut lines: Vec<String>, banner: Option<&str>) -> String {
    if let Some(message) = banner {
        lines.insert(0, format!("! {message}"));
    }
    lines.join("\n")
}

/// Categories in order, each followed by its skills; uncategorized last.
pub fn skills(board: &SkillBoard) -> String {
    let mut lines = Vec::new();
    for group in board.groups().iter() {
        lines.push(format!(
            "{} [{}] ({})",
            board.group_label(&group.key),
            group.key,
            group.len()
        ));
        for skill in &group.members {
            lines.push(format!("  {:>3}  {}  ({})", order_label(skill.order), skill.name, skill.id));
        }
    }
    with_banner(lines, board.error())
}

/// One page of the project listing.
pub fn catalog(catalog: &ProjectCatalog) -> String {
    let mut lines = vec![format!(
        "Projects: page {} of {} ({} total)",
        catalog.page_number().saturating_add(1),
        catalog.total_pages().max(1),
        catalog.total_elements()
    )];
    for project in catalog.items() {
        lines.push(format!(
            "  {:>3}  {}  ({})",
            order_label(project.order),
            project.title,
            project.id
        ));
    }
    with_banner(lines, catalog.error())
}

/// Project header followed by its content tree, one indent per level.
pub fn project(board: &ProjectBoard) -> anyhow::Result<String> {
    let mut lines = Vec::new();
    if let Some(project) = board.project() {
        lines.push(format!("{} ({})", project.title, project.id));
        if let Some(period) = &project.period {
            lines.push(format!("  period: {period}"));
        }
    }

    let forest = board.forest();
    for visit in forest.preorder()? {
        lines.push(content_line(visit.node, visit.depth + 1));
    }
    lines.extend(orphan_lines(&forest));
    Ok(with_banner(lines, board.error()))
}

fn content_line(node: &ProjectContent, depth: usize) -> String {
    format!(
        "{}{}. {}  ({})",
        "  ".repeat(depth),
        order_label(node.order),
        node.content,
        node.id
    )
}

fn orphan_lines(forest: &Forest<'_, ProjectContent>) -> Vec<String> {
    forest
        .orphans()
        .iter()
        .map(|node| format!("  ? {} (missing parent)", node.id))
        .collect()
}

/// Certifications then awards.
pub fn certifications(board: &CertificationBoard) -> String {
    let mut lines = vec!["Certifications".to_string()];
    lines.extend(board.items(CredentialKind::Certification).iter().map(credential_line));
    lines.push("Awards".to_string());
    lines.extend(board.items(CredentialKind::Award).iter().map(credential_line));
    with_banner(lines, board.error())
}

fn credential_line(credential: &Credential) -> String {
    let issuer = credential.organization.as_deref().unwrap_or("-");
    format!(
        "  {:>3}  {}  {}  {}  ({})",
        order_label(credential.order_index),
        credential.date,
        credential.name,
        issuer,
        credential.id
    )
}

/// Businesses then career projects.
pub fn careers(board: &CareerBoard) -> String {
    let mut lines = vec!["Businesses".to_string()];
    lines.extend(board.items(CareerKind::Business).iter().map(career_line));
    lines.push("Projects".to_string());
    lines.extend(board.items(CareerKind::Project).iter().map(career_line));
    with_banner(lines, board.error())
}

fn career_line(entry: &CareerEntry) -> String {
    let end = entry.end_date.as_deref().unwrap_or("present");
    format!(
        "  {:>3}  {} - {}  {}  ({})",
        order_label(entry.order_index),
        entry.start_date,
        end,
        entry.company,
        entry.id
    )
}

/// One-line summary of a reorder.
pub fn outcome(outcome: &ReconcileOutcome) -> String {
    match outcome {
        ReconcileOutcome::Unchanged => "No change.".to_string(),
        ReconcileOutcome::Saved { updated } => format!("Saved {updated} order update(s)."),
        ReconcileOutcome::Reloaded { failed } => {
            format!("{} write(s) failed; reloaded from the server.", failed.len())
        }
        ReconcileOutcome::Restored {
            failed,
            reload_error,
        } => format!(
            "{} write(s) failed and the reload failed ({reload_error}); showing the last loaded data.",
            failed.len()
        ),
    }
}
