//! `vitrine list` - catalog entries in registration order.

use anyhow::{bail, Result};
use clap::Args;
use vitrine_core::{Entry, Registry};

use super::OutputFormat;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list entries in this zone id
    #[arg(long)]
    pub zone: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run_list(registry: &Registry, args: ListArgs) -> Result<()> {
    let entries: Vec<&Entry> = match &args.zone {
        Some(zone_id) => {
            if registry.zone(zone_id).is_none() {
                bail!("unknown zone '{zone_id}'");
            }
            registry.list_by_zone(zone_id).collect()
        }
        None => registry.entries().iter().collect(),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            for entry in &entries {
                let interactive = if entry.is_interactive { " (interactive)" } else { "" };
                println!("{:<16} {:<24} {}{}", entry.id, entry.name, entry.zone, interactive);
            }
            println!("{} entries", entries.len());
        }
    }
    Ok(())
}
