use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio-console")]
#[command(about = "Admin console for Folio skills, projects, certifications and careers")]
pub struct Args {
    /// Base URL of the content API (overrides the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Per-write timeout for order updates, in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Project listing page size
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Run against seeded in-memory data instead of the API
    #[arg(long)]
    pub demo: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show skills grouped by category
    Skills,

    /// Move a skill onto another skill's position within one category
    ReorderSkill {
        /// Category id, or `uncategorized`
        #[arg(long, default_value = "uncategorized")]
        group: String,
        active: String,
        over: String,
    },

    /// Move a category onto another category's position
    ReorderCategory { active: String, over: String },

    /// Show one page of the project listing
    Projects {
        /// Zero-based page number
        #[arg(long, default_value_t = 0)]
        page: u32,
    },

    /// Show a project and its content tree
    Project { id: String },

    /// Move a content block among its siblings
    ReorderContent {
        project: String,
        /// Parent block id; omit for top-level blocks
        #[arg(long)]
        parent: Option<String>,
        active: String,
        over: String,
    },

    /// Show certifications and awards
    Certifications,

    /// Move a certification (or, with --awards, an award)
    ReorderCertification {
        #[arg(long)]
        awards: bool,
        active: String,
        over: String,
    },

    /// Show businesses and career projects
    Careers,

    /// Move a business (or, with --projects, a career project)
    ReorderCareer {
        #[arg(long)]
        projects: bool,
        active: String,
        over: String,
    },
}
