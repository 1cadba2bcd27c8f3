//! Folio admin console
//!
//! Lists and reorders skills, project contents, certifications and careers
//! held by the content API.
//!
//! Usage:
//!   folio-console --base-url http://localhost:8080 skills
//!   folio-console --demo reorder-skill --group backend postgres rust

use anyhow::Result;
use clap::Parser;
use folio_console::{execute, load_config, Args, Backend, Overrides};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(args.config.as_deref(), &Overrides::from(&args))?;
    let backend = if args.demo {
        info!("Using seeded in-memory data");
        Backend::demo()
    } else {
        info!("Using content API at {}", config.base_url);
        Backend::http(&config)?
    };

    let output = execute(&args.command, &backend, &config).await?;
    println!("{output}");
    Ok(())
}
