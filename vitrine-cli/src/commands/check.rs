//! `vitrine check` - run the registry's integrity sweep and report.

use anyhow::{bail, Result};
use vitrine_core::Registry;

pub fn run_check() -> Result<()> {
    let (data, factories) = vitrine_widgets::catalog();
    let zones = data.zones.len();

    match Registry::build(data, factories) {
        Ok(registry) => {
            println!(
                "catalog OK: {} entries, {} zones, {} categories",
                registry.count(),
                zones,
                registry.categories().len()
            );
            Ok(())
        }
        // The error already lists every violation, one per line.
        Err(err) => bail!("{err}"),
    }
}
