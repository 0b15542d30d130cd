//! `vitrine zones` - the gallery's themed zones.

use anyhow::Result;
use clap::Args;
use vitrine_core::Registry;

use super::OutputFormat;

#[derive(Args, Debug)]
pub struct ZonesArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run_zones(registry: &Registry, args: ZonesArgs) -> Result<()> {
    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(registry.zones())?)
        }
        OutputFormat::Text => {
            for zone in registry.zones() {
                let count = registry.list_by_zone(&zone.id).count();
                println!("{:<10} {:<18} {:>2} exhibits  {}", zone.id, zone.name, count, zone.description);
            }
        }
    }
    Ok(())
}
