//! The registry: one immutable snapshot of the whole catalog.
//!
//! Built exactly once from `CatalogData` plus a factory map, validated as
//! a whole, then only ever read. There is no global instance; hosts
//! construct a `Registry` and pass it by reference, which keeps tests
//! free to build tiny synthetic catalogs side by side.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::boundary::ExhibitFactory;
use crate::catalog::{CatalogData, Category, Entry, Zone};
use crate::error::{IntegrityError, IntegrityViolation, Result};
use crate::search::{GroupedResults, SearchIndex};

/// Entry id → exhibit constructor. Supplied alongside `CatalogData` by
/// the widget collaborator crate.
pub type FactoryMap = BTreeMap<String, ExhibitFactory>;

/// Immutable catalog snapshot plus its derived search index.
pub struct Registry {
    zones: Vec<Zone>,
    categories: Vec<Category>,
    entries: Vec<Entry>,
    entry_ids: HashMap<String, usize>,
    zone_ids: HashMap<String, usize>,
    category_ids: HashMap<String, usize>,
    by_zone: HashMap<String, Vec<usize>>,
    factories: FactoryMap,
    index: SearchIndex,
}

impl Registry {
    /// Cross-check the catalog and, if it is fully consistent, freeze it.
    ///
    /// The sweep never stops at the first problem: every duplicate id,
    /// dangling zone/category reference, entry without a factory, and
    /// factory without an entry is collected, and one `IntegrityError`
    /// reports them all. Any violation rejects the whole catalog — there
    /// is no partial registry.
    pub fn build(data: CatalogData, factories: FactoryMap) -> Result<Self> {
        let mut violations = Vec::new();

        let mut zone_ids = HashMap::new();
        for (i, zone) in data.zones.iter().enumerate() {
            if zone_ids.insert(zone.id.clone(), i).is_some() {
                violations.push(IntegrityViolation::DuplicateZoneId {
                    id: zone.id.clone(),
                });
            }
        }

        let mut category_ids = HashMap::new();
        for (i, category) in data.categories.iter().enumerate() {
            if category_ids.insert(category.id.clone(), i).is_some() {
                violations.push(IntegrityViolation::DuplicateCategoryId {
                    id: category.id.clone(),
                });
            }
        }

        let mut entry_ids = HashMap::new();
        for (i, entry) in data.entries.iter().enumerate() {
            if entry_ids.insert(entry.id.clone(), i).is_some() {
                violations.push(IntegrityViolation::DuplicateEntryId {
                    id: entry.id.clone(),
                });
            }
            if !zone_ids.contains_key(&entry.zone) {
                violations.push(IntegrityViolation::unknown_zone(&entry.id, &entry.zone));
            }
            for category in &entry.categories {
                if !category_ids.contains_key(category) {
                    violations.push(IntegrityViolation::unknown_category(&entry.id, category));
                }
            }
            if !factories.contains_key(&entry.id) {
                violations.push(IntegrityViolation::MissingFactory {
                    entry_id: entry.id.clone(),
                });
            }
        }

        let known: HashSet<&str> = data.entries.iter().map(|e| e.id.as_str()).collect();
        for factory_id in factories.keys() {
            if !known.contains(factory_id.as_str()) {
                violations.push(IntegrityViolation::OrphanFactory {
                    factory_id: factory_id.clone(),
                });
            }
        }

        if !violations.is_empty() {
            return Err(IntegrityError::new(violations));
        }

        let mut by_zone: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, entry) in data.entries.iter().enumerate() {
            by_zone.entry(entry.zone.clone()).or_default().push(i);
        }

        let index = SearchIndex::build(&data.entries);
        tracing::debug!(
            "registry built: {} entries across {} zones",
            data.entries.len(),
            data.zones.len()
        );

        Ok(Self {
            zones: data.zones,
            categories: data.categories,
            entries: data.entries,
            entry_ids,
            zone_ids,
            category_ids,
            by_zone,
            factories,
            index,
        })
    }

    /// Descriptor lookup, O(1).
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entry_ids.get(id).map(|&i| &self.entries[i])
    }

    /// Factory lookup, O(1). Separate from [`get`](Self::get) because a
    /// descriptor and its implementation are distinct facts; build-time
    /// validation guarantees they coexist for every id.
    pub fn resolve_factory(&self, id: &str) -> Option<&ExhibitFactory> {
        self.factories.get(id)
    }

    /// Entries in `zone_id`, in registration order.
    pub fn list_by_zone(&self, zone_id: &str) -> impl Iterator<Item = &Entry> {
        self.by_zone
            .get(zone_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&i| &self.entries[i])
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// All entries, in registration order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// All zones, in declaration order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// All categories, in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zone_ids.get(id).map(|&i| &self.zones[i])
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.category_ids.get(id).map(|&i| &self.categories[i])
    }

    /// Free-text search over the owned index. Pure: same registry and
    /// query always produce the same results.
    pub fn search(&self, query: &str) -> GroupedResults {
        self.index.query(query)
    }

    /// Entries sharing tags/vocabulary with `id`, best overlap first.
    pub fn related(&self, id: &str, limit: usize) -> Vec<&str> {
        self.index.related(id, limit)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("zones", &self.zones.len())
            .field("categories", &self.categories.len())
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    use super::*;
    use crate::boundary::Exhibit;
    use crate::error::IntegrityViolation;

    struct Blank;

    impl Exhibit for Blank {
        fn render(&mut self, _area: Rect, _buf: &mut Buffer) {}
    }

    fn blank_factory() -> ExhibitFactory {
        Box::new(|| Box::new(Blank) as Box<dyn Exhibit>)
    }

    fn factories_for(ids: &[&str]) -> FactoryMap {
        ids.iter()
            .map(|id| (id.to_string(), blank_factory()))
            .collect()
    }

    fn small_catalog() -> CatalogData {
        CatalogData {
            zones: vec![Zone::new("neon", "Neon"), Zone::new("retro", "Retro")],
            categories: vec![Category::new("inputs", "Inputs")],
            entries: vec![
                Entry::new("gold-button", "Gold Button", "neon")
                    .tag("luxury")
                    .category("inputs"),
                Entry::new("ice-card", "Ice Card", "retro").tag("frost").tag("button"),
                Entry::new("boot-log", "Boot Log", "retro"),
            ],
        }
    }

    #[test]
    fn test_build_and_round_trip_lookup() {
        let registry = Registry::build(
            small_catalog(),
            factories_for(&["gold-button", "ice-card", "boot-log"]),
        )
        .unwrap();

        assert_eq!(registry.count(), 3);
        let entry = registry.get("ice-card").unwrap();
        assert_eq!(entry.name, "Ice Card");
        assert_eq!(entry.tags, vec!["frost", "button"]);
        assert!(registry.resolve_factory("ice-card").is_some());
        assert!(registry.get("missing").is_none());
        assert!(registry.resolve_factory("missing").is_none());
    }

    #[test]
    fn test_list_by_zone_keeps_registration_order() {
        let registry = Registry::build(
            small_catalog(),
            factories_for(&["gold-button", "ice-card", "boot-log"]),
        )
        .unwrap();

        let retro: Vec<&str> = registry
            .list_by_zone("retro")
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(retro, vec!["ice-card", "boot-log"]);
        assert_eq!(registry.list_by_zone("vapor").count(), 0);
    }

    #[test]
    fn test_zone_and_category_lookup() {
        let registry = Registry::build(
            small_catalog(),
            factories_for(&["gold-button", "ice-card", "boot-log"]),
        )
        .unwrap();

        assert_eq!(registry.zone("neon").unwrap().name, "Neon");
        assert_eq!(registry.category("inputs").unwrap().name, "Inputs");
        assert!(registry.zone("vapor").is_none());
        assert_eq!(registry.zones().len(), 2);
    }

    #[test]
    fn test_search_delegates_to_index() {
        let registry = Registry::build(
            small_catalog(),
            factories_for(&["gold-button", "ice-card", "boot-log"]),
        )
        .unwrap();

        let results = registry.search("button");
        let ids: Vec<&str> = results.flattened().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["gold-button", "ice-card"]);
    }

    #[test]
    fn test_build_enumerates_every_violation() {
        let data = CatalogData {
            zones: vec![Zone::new("neon", "Neon"), Zone::new("neon", "Neon Again")],
            categories: vec![],
            entries: vec![
                Entry::new("a", "A", "neon").category("ghost-category"),
                Entry::new("a", "A Again", "neon"),
                Entry::new("b", "B", "vapor"),
            ],
        };
        let factories = factories_for(&["a", "b", "x"]);

        let err = Registry::build(data, factories).unwrap_err();
        let violations = err.violations();

        assert!(violations.contains(&IntegrityViolation::DuplicateZoneId { id: "neon".into() }));
        assert!(violations.contains(&IntegrityViolation::DuplicateEntryId { id: "a".into() }));
        assert!(violations
            .contains(&IntegrityViolation::unknown_category("a", "ghost-category")));
        assert!(violations.contains(&IntegrityViolation::unknown_zone("b", "vapor")));
        assert!(violations.contains(&IntegrityViolation::OrphanFactory {
            factory_id: "x".into()
        }));
        assert_eq!(violations.len(), 5);
    }

    #[test]
    fn test_orphan_factory_rejects_whole_build() {
        let mut factories = factories_for(&["gold-button", "ice-card", "boot-log"]);
        factories.insert("x".into(), blank_factory());

        let err = Registry::build(small_catalog(), factories).unwrap_err();
        assert_eq!(
            err.violations(),
            &[IntegrityViolation::OrphanFactory {
                factory_id: "x".into()
            }]
        );
        assert!(err.to_string().contains("factory 'x' matches no catalog entry"));
    }

    #[test]
    fn test_missing_factory_is_a_violation() {
        let err = Registry::build(small_catalog(), factories_for(&["gold-button", "ice-card"]))
            .unwrap_err();
        assert_eq!(
            err.violations(),
            &[IntegrityViolation::MissingFactory {
                entry_id: "boot-log".into()
            }]
        );
    }
}
