//! vitrine-widgets: the builtin exhibit collection.
//!
//! This crate is the "aggregation point" collaborator the core expects:
//! it owns the decorative exhibits and hands the core one consistent
//! package of zones, categories, entries, and factories via [`catalog`].
//! The core neither knows nor cares that these particular exhibits are
//! builtin; a host could just as well supply its own set.

use vitrine_core::{CatalogData, Category, Exhibit, ExhibitFactory, FactoryMap, Zone};

mod aurora;
mod mono;
mod neon;
mod retro;

/// Wrap a concrete exhibit constructor as a boxed factory.
fn exhibit<E, F>(construct: F) -> ExhibitFactory
where
    E: Exhibit + 'static,
    F: Fn() -> E + Send + Sync + 'static,
{
    Box::new(move || Box::new(construct()))
}

fn zones() -> Vec<Zone> {
    use ratatui::style::Color;

    vec![
        Zone::new("neon", "Neon")
            .describe("Saturated glow, movement, and excess")
            .palette(Color::Magenta, Color::Black, Color::LightMagenta),
        Zone::new("retro", "Retro Terminal")
            .describe("Green phosphor and machine-room nostalgia")
            .palette(Color::Green, Color::Black, Color::LightGreen),
        Zone::new("mono", "Monochrome")
            .describe("Ink on paper, nothing moving unless it must")
            .palette(Color::White, Color::Black, Color::Gray),
        Zone::new("aurora", "Aurora")
            .describe("Slow gradients and drifting light")
            .palette(Color::Cyan, Color::Black, Color::LightCyan),
    ]
}

fn categories() -> Vec<Category> {
    vec![
        Category::new("charts", "Charts & Data"),
        Category::new("text", "Text & Type"),
        Category::new("chrome", "Decoration & Chrome"),
        Category::new("time", "Time & Motion"),
    ]
}

/// Everything the builtin collection contributes, ready for
/// `Registry::build`. Entry ids and factory keys are kept in lockstep
/// here; the registry's integrity sweep will say so loudly if a module
/// ever breaks that.
pub fn catalog() -> (CatalogData, FactoryMap) {
    let mut data = CatalogData {
        zones: zones(),
        categories: categories(),
        entries: Vec::new(),
    };
    let mut factories = FactoryMap::new();

    neon::install(&mut data, &mut factories);
    retro::install(&mut data, &mut factories);
    mono::install(&mut data, &mut factories);
    aurora::install(&mut data, &mut factories);

    (data, factories)
}

#[cfg(test)]
mod tests {
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use vitrine_core::{Registry, RenderSession, SessionState};

    use super::*;

    fn registry() -> Registry {
        let (data, factories) = catalog();
        Registry::build(data, factories).expect("builtin catalog must be internally consistent")
    }

    #[test]
    fn test_builtin_catalog_passes_integrity_check() {
        let registry = registry();
        assert!(registry.count() >= 12);
        assert_eq!(registry.zones().len(), 4);
    }

    #[test]
    fn test_every_builtin_exhibit_mounts_and_renders() {
        let registry = registry();
        let area = Rect::new(0, 0, 40, 12);

        for entry in registry.entries() {
            let mut session = RenderSession::open(&registry, &entry.id);
            assert_eq!(session.state(), SessionState::Mounted, "mount {}", entry.id);

            let mut buf = Buffer::empty(area);
            for _ in 0..3 {
                session.tick();
                session.render(area, &mut buf);
            }
            assert_eq!(session.state(), SessionState::Mounted, "render {}", entry.id);
        }
    }

    #[test]
    fn test_every_entry_carries_provenance() {
        let registry = registry();
        for entry in registry.entries() {
            assert_eq!(entry.source_project.as_deref(), Some("vitrine-widgets"));
            assert!(entry.source_file.is_some(), "no source file on {}", entry.id);
            assert!(!entry.tags.is_empty(), "no tags on {}", entry.id);
        }
    }

    #[test]
    fn test_search_finds_exhibits_across_zones() {
        let registry = registry();
        let results = registry.search("glow");
        assert!(!results.is_empty());
    }
}
