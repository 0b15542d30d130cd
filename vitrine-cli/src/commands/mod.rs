//! Subcommand implementations for the vitrine CLI.

use clap::ValueEnum;

mod check;
mod info;
mod list;
mod render;
mod search;
mod zones;

pub use check::run_check;
pub use info::{run_info, InfoArgs};
pub use list::{run_list, ListArgs};
pub use render::{run_render, RenderArgs};
pub use search::{run_search, SearchArgs};
pub use zones::{run_zones, ZonesArgs};

/// Output format shared by the read-only subcommands.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}
