use crate::backend::Backend;
use crate::cli::Command;
use crate::render;
use anyhow::{Context, Result};
use folio_sync::{ApiConfig, CareerKind, CredentialKind, ReconcileOutcome};
use folio_types::{EntityId, GroupKey};
use tracing::debug;

/// Runs one command against `backend` and returns the text to print.
///
/// Reorders print the outcome followed by the refreshed view.
pub async fn execute(command: &Command, backend: &Backend, config: &ApiConfig) -> Result<String> {
    debug!("Executing {:?}", command);
    match command {
        Command::Skills => {
            let mut board = backend.skill_board(config);
            board.load().await?;
            Ok(render::skills(&board))
        }
        Command::ReorderSkill { group, active, over } => {
            let key: GroupKey = group
                .parse()
                .with_context(|| format!("Invalid group key {group:?}"))?;
            let mut board = backend.skill_board(config);
            board.load().await?;
            let outcome = board.reorder_skill(&key, active, over).await;
            Ok(report(&outcome, render::skills(&board)))
        }
        Command::ReorderCategory { active, over } => {
            let mut board = backend.skill_board(config);
            board.load().await?;
            let outcome = board.reorder_category(active, over).await;
            Ok(report(&outcome, render::skills(&board)))
        }
        Command::Projects { page } => {
            let mut catalog = backend.project_catalog(config);
            catalog.load(*page).await?;
            Ok(render::catalog(&catalog))
        }
        Command::Project { id } => {
            let mut board = backend.project_board(parse_id(id)?, config);
            board.load().await?;
            render::project(&board)
        }
        Command::ReorderContent {
            project,
            parent,
            active,
            over,
        } => {
            let parent = parent.as_deref().map(parse_id).transpose()?;
            let mut board = backend.project_board(parse_id(project)?, config);
            board.load().await?;
            let outcome = board.reorder_content(parent.as_ref(), active, over).await;
            Ok(report(&outcome, render::project(&board)?))
        }
        Command::Certifications => {
            let mut board = backend.certification_board(config);
            board.load().await?;
            Ok(render::certifications(&board))
        }
        Command::ReorderCertification { awards, active, over } => {
            let kind = if *awards {
                CredentialKind::Award
            } else {
                CredentialKind::Certification
            };
            let mut board = backend.certification_board(config);
            board.load().await?;
            let outcome = board.reorder(kind, active, over).await;
            Ok(report(&outcome, render::certifications(&board)))
        }
        Command::Careers => {
            let mut board = backend.career_board(config);
            board.load().await?;
            Ok(render::careers(&board))
        }
        Command::ReorderCareer {
            projects,
            active,
            over,
        } => {
            let kind = if *projects {
                CareerKind::Project
            } else {
                CareerKind::Business
            };
            let mut board = backend.career_board(config);
            board.load().await?;
            let outcome = board.reorder(kind, active, over).await;
            Ok(report(&outcome, render::careers(&board)))
        }
    }
}

fn parse_id(raw: &str) -> Result<EntityId> {
    EntityId::parse(raw).with_context(|| format!("Invalid id {raw:?}"))
}

fn report(outcome: &ReconcileOutcome, view: String) -> String {
    format!("{}\n{}", render::outcome(outcome), view)
}
