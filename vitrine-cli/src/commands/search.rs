//! `vitrine search` - ranked, zone-grouped catalog search.

use anyhow::Result;
use clap::Args;
use vitrine_core::{MatchField, Registry, SearchHit};

use super::OutputFormat;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Query text, matched as a literal substring of names, tags, and descriptions
    pub query: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run_search(registry: &Registry, args: SearchArgs) -> Result<()> {
    let results = registry.search(&args.query);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Text => {
            if results.is_empty() {
                println!("no exhibits match '{}'", args.query.trim());
                return Ok(());
            }
            println!("{} exhibit(s) match '{}'", results.len(), results.needle);
            for group in &results.groups {
                let zone_name = registry
                    .zone(&group.zone)
                    .map(|z| z.name.as_str())
                    .unwrap_or(group.zone.as_str());
                println!("\n{zone_name}");
                for hit in &group.hits {
                    println!("  {}", describe_hit(registry, hit));
                }
            }
        }
    }
    Ok(())
}

/// One line per hit, with every matched span bracketed in place.
fn describe_hit(registry: &Registry, hit: &SearchHit) -> String {
    let entry = match registry.get(&hit.id) {
        Some(entry) => entry,
        None => return hit.id.clone(),
    };

    let shown = match hit.best_field {
        MatchField::Name => bracket_spans(&entry.name, &hit.name_spans),
        MatchField::Tag => {
            let (tag_index, spans) = &hit.tag_spans[0];
            format!(
                "{} [tag: {}]",
                entry.name,
                bracket_spans(&entry.tags[*tag_index], spans)
            )
        }
        MatchField::Description => format!(
            "{}: {}",
            entry.name,
            bracket_spans(&entry.description, &hit.description_spans)
        ),
    };
    format!("{shown}  ({})", hit.id)
}

/// Wrap each matched byte range of `text` in square brackets. Spans are
/// ascending and non-overlapping, so inserting back-to-front keeps the
/// earlier offsets valid.
fn bracket_spans(text: &str, spans: &[std::ops::Range<usize>]) -> String {
    let mut out = text.to_owned();
    for span in spans.iter().rev() {
        out.insert(span.end, ']');
        out.insert(span.start, '[');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_spans_marks_every_occurrence() {
        assert_eq!(bracket_spans("Button or BUTTON", &[0..6, 10..16]), "[Button] or [BUTTON]");
        assert_eq!(bracket_spans("untouched", &[]), "untouched");
    }
}
