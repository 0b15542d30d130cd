//! Catalog data: plain descriptors for zones, categories, and entries.
//!
//! Everything here is passive data. Cross-referential rules (unique ids,
//! known zones, factory coverage) are enforced by `Registry::build`, not
//! by these types.

use std::collections::BTreeSet;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// How much room an entry wants when previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewSize {
    Small,
    #[default]
    Medium,
    Large,
    Fullscreen,
}

/// A themed area of the gallery. Entries belong to exactly one zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub accent: Color,
    pub background: Color,
    pub text: Color,
}

impl Zone {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            accent: Color::White,
            background: Color::Black,
            text: Color::Gray,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn palette(mut self, accent: Color, background: Color, text: Color) -> Self {
        self.accent = accent;
        self.background = background;
        self.text = text;
        self
    }
}

/// A cross-cutting grouping, orthogonal to zones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Descriptor for one exhibit: everything the gallery knows about it
/// except how to construct it (that lives in the factory map).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub zone: String,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub preview_size: PreviewSize,
    #[serde(default)]
    pub is_interactive: bool,
    pub source_project: Option<String>,
    pub source_file: Option<String>,
}

impl Entry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            zone: zone.into(),
            categories: BTreeSet::new(),
            tags: Vec::new(),
            preview_size: PreviewSize::default(),
            is_interactive: false,
            source_project: None,
            source_file: None,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn preview(mut self, size: PreviewSize) -> Self {
        self.preview_size = size;
        self
    }

    pub fn interactive(mut self) -> Self {
        self.is_interactive = true;
        self
    }

    pub fn source(mut self, project: impl Into<String>, file: impl Into<String>) -> Self {
        self.source_project = Some(project.into());
        self.source_file = Some(file.into());
        self
    }
}

/// The declarative half of a catalog: what exists, before any integrity
/// checking. Pair with a `FactoryMap` and feed to `Registry::build`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    pub zones: Vec<Zone>,
    pub categories: Vec<Category>,
    pub entries: Vec<Entry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_builder() {
        let entry = Entry::new("gold-button", "Gold Button", "neon")
            .describe("A shimmering call to action")
            .tag("button")
            .tag("gold")
            .category("inputs")
            .preview(PreviewSize::Small)
            .interactive()
            .source("storefront", "src/buttons/gold.rs");

        assert_eq!(entry.id, "gold-button");
        assert_eq!(entry.tags, vec!["button", "gold"]);
        assert!(entry.categories.contains("inputs"));
        assert_eq!(entry.preview_size, PreviewSize::Small);
        assert!(entry.is_interactive);
        assert_eq!(entry.source_project.as_deref(), Some("storefront"));
    }

    #[test]
    fn test_entry_deserialize_defaults() {
        let entry: Entry = serde_json::from_str(
            r#"{"id": "bare", "name": "Bare", "zone": "mono"}"#,
        )
        .unwrap();

        assert_eq!(entry.preview_size, PreviewSize::Medium);
        assert!(!entry.is_interactive);
        assert!(entry.tags.is_empty());
        assert!(entry.source_project.is_none());
    }
}
