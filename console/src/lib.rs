//! Folio admin console.
//!
//! Wires the boards from `folio-sync` to either the content API or a seeded
//! in-memory backend, and renders them as text.

pub mod backend;
pub mod cli;
pub mod commands;
pub mod render;
pub mod settings;

pub use backend::Backend;
pub use cli::{Args, Command};
pub use commands::execute;
pub use settings::{load_config, Overrides};
