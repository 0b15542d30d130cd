//! vitrine CLI - catalog inspection for the widget gallery
//!
//! This is the scriptable side of vitrine: search the catalog, list
//! entries and zones, inspect one entry, verify catalog integrity, and
//! render a single exhibit frame to stdout. The interactive gallery
//! lives in the `vitrine-tui` binary.

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use vitrine_core::Registry;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "vitrine",
    author,
    version,
    about = "Searchable catalog of terminal widget exhibits",
    long_about = "Query the vitrine exhibit catalog: free-text search with ranked, \
                  zone-grouped results, entry inspection, integrity checking, and \
                  one-shot isolated rendering of any exhibit by id."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search the catalog (literal substring, ranked name > tag > description)
    Search(commands::SearchArgs),
    /// List catalog entries, optionally limited to one zone
    List(commands::ListArgs),
    /// List the gallery's zones
    Zones(commands::ZonesArgs),
    /// Show one entry in full, including related exhibits
    Info(commands::InfoArgs),
    /// Verify catalog integrity (every violation is reported, not just the first)
    Check,
    /// Render one exhibit frame to stdout, inside the isolation boundary
    Render(commands::RenderArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(clap::Args, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

fn init_tracing() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn build_registry() -> Result<Registry> {
    let (data, factories) = vitrine_widgets::catalog();
    let registry =
        Registry::build(data, factories).context("builtin catalog failed its integrity check")?;
    tracing::debug!("catalog ready: {} entries", registry.count());
    Ok(registry)
}

fn main() -> Result<()> {
    init_tracing().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => commands::run_search(&build_registry()?, args)?,
        Commands::List(args) => commands::run_list(&build_registry()?, args)?,
        Commands::Zones(args) => commands::run_zones(&build_registry()?, args)?,
        Commands::Info(args) => commands::run_info(&build_registry()?, args)?,
        Commands::Check => commands::run_check()?,
        Commands::Render(args) => commands::run_render(&build_registry()?, args)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "vitrine", &mut std::io::stdout());
    Ok(())
}
