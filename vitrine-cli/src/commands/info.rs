//! `vitrine info` - one entry in full.

use anyhow::{bail, Result};
use clap::Args;
use serde_json::json;
use vitrine_core::Registry;

use super::OutputFormat;

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Entry id to inspect
    pub id: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run_info(registry: &Registry, args: InfoArgs) -> Result<()> {
    let Some(entry) = registry.get(&args.id) else {
        bail!("no entry '{}' in the catalog", args.id);
    };
    let related = registry.related(&args.id, 5);

    match args.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "entry": entry,
                    "related": related,
                }))?
            );
        }
        OutputFormat::Text => {
            println!("{}  ({})", entry.name, entry.id);
            if !entry.description.is_empty() {
                println!("  {}", entry.description);
            }
            let zone_name = registry
                .zone(&entry.zone)
                .map(|z| z.name.as_str())
                .unwrap_or(entry.zone.as_str());
            println!("  zone:        {zone_name}");
            if !entry.categories.is_empty() {
                let categories: Vec<&str> = entry.categories.iter().map(String::as_str).collect();
                println!("  categories:  {}", categories.join(", "));
            }
            if !entry.tags.is_empty() {
                println!("  tags:        {}", entry.tags.join(", "));
            }
            println!("  preview:     {:?}", entry.preview_size);
            println!("  interactive: {}", entry.is_interactive);
            if let (Some(project), Some(file)) = (&entry.source_project, &entry.source_file) {
                println!("  source:      {project} ({file})");
            }
            if !related.is_empty() {
                println!("  related:     {}", related.join(", "));
            }
        }
    }
    Ok(())
}
