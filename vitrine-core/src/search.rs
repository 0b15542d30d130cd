//! Free-text search over the catalog.
//!
//! The index is derived from the registry's entries once, at build time,
//! and never mutated afterward. Matching is literal substring matching —
//! there is no query syntax, no regex engine, and therefore nothing a
//! hostile query string can break. Highlight spans index the
//! original-case strings so hosts can style exactly what the user typed
//! over exactly what they see.

use std::collections::BTreeSet;
use std::ops::Range;

use serde::Serialize;

use crate::catalog::Entry;

/// Which field a needle matched, in ranking order: a name match outranks
/// a tag match, which outranks a description-only match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    Name,
    Tag,
    Description,
}

/// One matching entry, with every occurrence of the needle located in
/// the original-case display strings.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    /// Id of the matching entry.
    pub id: String,
    /// The highest-priority field the needle was found in.
    pub best_field: MatchField,
    /// Occurrences in `Entry::name`, as byte ranges into the original string.
    pub name_spans: Vec<Range<usize>>,
    /// Occurrences per tag: `(tag index, byte ranges into that tag)`.
    /// Tags with no match are omitted.
    pub tag_spans: Vec<(usize, Vec<Range<usize>>)>,
    /// Occurrences in `Entry::description`.
    pub description_spans: Vec<Range<usize>>,
}

/// Hits for one zone, in rank order.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneGroup {
    pub zone: String,
    pub hits: Vec<SearchHit>,
}

/// The full answer to one query: ranked hits partitioned by zone, zones
/// ordered by where they first appear in the ranked list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupedResults {
    /// The needle actually matched against (trimmed, lowercased).
    pub needle: String,
    pub groups: Vec<ZoneGroup>,
}

impl GroupedResults {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total hit count across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.hits.len()).sum()
    }

    /// All hits in overall rank order, ignoring zone partitions.
    pub fn flattened(&self) -> impl Iterator<Item = &SearchHit> {
        self.groups.iter().flat_map(|g| g.hits.iter())
    }
}

/// A display string folded to lowercase, with a per-byte map back into
/// the original. Unicode lowercasing can change byte lengths (and even
/// produce more characters than it consumed), so highlight spans found
/// in the folded copy are widened to the originating characters'
/// boundaries in the original.
#[derive(Debug, Clone)]
struct Folded {
    lower: String,
    /// Per byte of `lower`: start of the originating char in the original.
    starts: Vec<usize>,
    /// Per byte of `lower`: end of the originating char in the original.
    ends: Vec<usize>,
}

impl Folded {
    fn new(original: &str) -> Self {
        let mut lower = String::with_capacity(original.len());
        let mut starts = Vec::with_capacity(original.len());
        let mut ends = Vec::with_capacity(original.len());
        for (offset, ch) in original.char_indices() {
            let char_end = offset + ch.len_utf8();
            for low in ch.to_lowercase() {
                let before = lower.len();
                lower.push(low);
                for _ in before..lower.len() {
                    starts.push(offset);
                    ends.push(char_end);
                }
            }
        }
        Self {
            lower,
            starts,
            ends,
        }
    }

    fn contains(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }

    /// Every non-overlapping occurrence of `needle` (already lowercase,
    /// non-empty), as byte ranges into the ORIGINAL string.
    fn spans(&self, needle: &str) -> Vec<Range<usize>> {
        let mut spans = Vec::new();
        let mut from = 0;
        while let Some(pos) = self.lower[from..].find(needle) {
            let hit = from + pos;
            spans.push(self.starts[hit]..self.ends[hit + needle.len() - 1]);
            from = hit + needle.len();
        }
        spans
    }
}

/// Lowercase `text` and split it into its alphanumeric runs.
pub(crate) fn tokenize(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Everything the index precomputes for one entry.
#[derive(Debug)]
struct IndexedEntry {
    id: String,
    zone: String,
    name: Folded,
    tags: Vec<Folded>,
    description: Folded,
    name_tokens: BTreeSet<String>,
    tag_tokens: BTreeSet<String>,
    description_tokens: BTreeSet<String>,
}

/// The derived search structure. Holds ids and folded strings, never the
/// entries themselves; rebuildable from the registry at any time.
#[derive(Debug, Default)]
pub struct SearchIndex {
    entries: Vec<IndexedEntry>,
}

impl SearchIndex {
    /// Index `entries` in the order given; that order is the rank
    /// tiebreaker for every query.
    pub fn build(entries: &[Entry]) -> Self {
        let indexed = entries
            .iter()
            .map(|entry| IndexedEntry {
                id: entry.id.clone(),
                zone: entry.zone.clone(),
                name: Folded::new(&entry.name),
                tags: entry.tags.iter().map(|t| Folded::new(t)).collect(),
                description: Folded::new(&entry.description),
                name_tokens: tokenize(&entry.name),
                tag_tokens: entry.tags.iter().flat_map(|t| tokenize(t)).collect(),
                description_tokens: tokenize(&entry.description),
            })
            .collect();
        Self { entries: indexed }
    }

    /// Answer a raw query string. Trimmed-empty queries yield an empty
    /// result set; suggesting a default listing is the caller's job.
    pub fn query(&self, raw: &str) -> GroupedResults {
        let needle = raw.trim().to_lowercase();
        if needle.is_empty() {
            return GroupedResults::default();
        }

        let mut hits: Vec<(&str, SearchHit)> = Vec::new();
        for entry in &self.entries {
            let name_spans = if entry.name.contains(&needle) {
                entry.name.spans(&needle)
            } else {
                Vec::new()
            };
            let tag_spans: Vec<(usize, Vec<Range<usize>>)> = entry
                .tags
                .iter()
                .enumerate()
                .filter(|(_, tag)| tag.contains(&needle))
                .map(|(i, tag)| (i, tag.spans(&needle)))
                .collect();
            let description_spans = if entry.description.contains(&needle) {
                entry.description.spans(&needle)
            } else {
                Vec::new()
            };

            let best_field = if !name_spans.is_empty() {
                MatchField::Name
            } else if !tag_spans.is_empty() {
                MatchField::Tag
            } else if !description_spans.is_empty() {
                MatchField::Description
            } else {
                continue;
            };

            hits.push((
                entry.zone.as_str(),
                SearchHit {
                    id: entry.id.clone(),
                    best_field,
                    name_spans,
                    tag_spans,
                    description_spans,
                },
            ));
        }

        // Stable by construction: ties keep registration order.
        hits.sort_by_key(|(_, hit)| hit.best_field);

        let mut groups: Vec<ZoneGroup> = Vec::new();
        for (zone, hit) in hits {
            match groups.iter_mut().find(|g| g.zone == zone) {
                Some(group) => group.hits.push(hit),
                None => groups.push(ZoneGroup {
                    zone: zone.to_owned(),
                    hits: vec![hit],
                }),
            }
        }

        GroupedResults { needle, groups }
    }

    /// Entries sharing indexed tokens with `id`, best overlap first.
    ///
    /// Shared tags count triple and shared name tokens double, since a
    /// curator choosing the same tag is a stronger signal of kinship
    /// than incidental description vocabulary. Ties keep registration
    /// order; entries with no overlap are left out entirely.
    pub fn related(&self, id: &str, limit: usize) -> Vec<&str> {
        let Some(anchor) = self.entries.iter().find(|e| e.id == id) else {
            return Vec::new();
        };

        let mut scored: Vec<(usize, &str)> = self
            .entries
            .iter()
            .filter(|other| other.id != anchor.id)
            .filter_map(|other| {
                let score = 3 * anchor.tag_tokens.intersection(&other.tag_tokens).count()
                    + 2 * anchor.name_tokens.intersection(&other.name_tokens).count()
                    + anchor
                        .description_tokens
                        .intersection(&other.description_tokens)
                        .count();
                (score > 0).then_some((score, other.id.as_str()))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(limit);
        scored.into_iter().map(|(_, id)| id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Entry;

    fn fixture() -> SearchIndex {
        SearchIndex::build(&[
            Entry::new("a", "Gold Button", "neon").tag("luxury"),
            Entry::new("b", "Ice Card", "retro")
                .tag("frost")
                .tag("button"),
            Entry::new("c", "Plain Panel", "neon").describe("A button-shaped region of calm"),
        ])
    }

    fn flat_ids(results: &GroupedResults) -> Vec<&str> {
        results.flattened().map(|hit| hit.id.as_str()).collect()
    }

    #[test]
    fn test_name_match_outranks_tag_match() {
        let results = fixture().query("button");
        assert_eq!(flat_ids(&results), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let index = fixture();
        let upper = index.query("BUTTON");
        let lower = index.query("button");
        assert_eq!(flat_ids(&upper), flat_ids(&lower));
        assert_eq!(upper.needle, "button");
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let index = fixture();
        assert!(index.query("").is_empty());
        assert!(index.query("   ").is_empty());
        assert_eq!(index.query("\t\n").len(), 0);
    }

    #[test]
    fn test_partial_word_matches() {
        let results = fixture().query("but");
        assert_eq!(flat_ids(&results), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let index = SearchIndex::build(&[
            Entry::new("weird", "Spin[ner] (beta)", "mono").tag("a+b"),
            Entry::new("plain", "Spinner", "mono"),
        ]);

        // ".*" matches nothing despite matching everything as a regex.
        assert!(index.query(".*").is_empty());
        // Bracketed text matches itself.
        let results = index.query("[ner]");
        assert_eq!(flat_ids(&results), vec!["weird"]);
        let results = index.query("a+b");
        assert_eq!(flat_ids(&results), vec!["weird"]);
    }

    #[test]
    fn test_grouping_follows_rank_order() {
        // "button": a (neon, name), b (retro, tag), c (neon, description).
        // Zones in first-appearance order: neon then retro; c folds into
        // the neon group but ranks after b overall.
        let results = fixture().query("button");
        let zones: Vec<&str> = results.groups.iter().map(|g| g.zone.as_str()).collect();
        assert_eq!(zones, vec!["neon", "retro"]);

        let neon_ids: Vec<&str> = results.groups[0].hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(neon_ids, vec!["a", "c"]);
    }

    #[test]
    fn test_highlight_spans_index_original_case() {
        let index = SearchIndex::build(&[Entry::new("a", "Button or BUTTON", "neon")]);
        let results = index.query("button");
        let hit = results.flattened().next().unwrap();

        assert_eq!(hit.best_field, MatchField::Name);
        assert_eq!(hit.name_spans, vec![0..6, 10..16]);
        assert_eq!(&"Button or BUTTON"[10..16], "BUTTON");
    }

    #[test]
    fn test_tag_spans_carry_tag_index() {
        let results = fixture().query("button");
        let b = results
            .flattened()
            .find(|hit| hit.id == "b")
            .unwrap();
        assert_eq!(b.best_field, MatchField::Tag);
        assert!(b.name_spans.is_empty());
        assert_eq!(b.tag_spans, vec![(1, vec![0..6])]);
    }

    #[test]
    fn test_spans_survive_multibyte_case_folding() {
        // 'İ' lowercases to two chars ("i" + combining dot); a span that
        // lands inside the expansion must widen to the original char.
        let index = SearchIndex::build(&[Entry::new("tr", "İstanbul Skyline", "mono")]);
        let results = index.query("i\u{307}stanbul");
        let hit = results.flattened().next().unwrap();

        assert_eq!(hit.name_spans.len(), 1);
        let span = hit.name_spans[0].clone();
        let name = "İstanbul Skyline";
        assert!(name.is_char_boundary(span.start));
        assert!(name.is_char_boundary(span.end));
        assert_eq!(&name[span.clone()], "İstanbul");
    }

    #[test]
    fn test_empty_fields_never_match_never_error() {
        let index = SearchIndex::build(&[Entry::new("bare", "Bare", "mono")]);
        assert!(index.query("frost").is_empty());
        assert_eq!(index.query("bare").len(), 1);
    }

    #[test]
    fn test_tokenize_drops_empties_and_case() {
        let tokens = tokenize("Gold--Button  (v2)");
        let expected: BTreeSet<String> = ["gold", "button", "v2"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_related_prefers_shared_tags() {
        let index = SearchIndex::build(&[
            Entry::new("anchor", "Pulse Grid", "neon")
                .tag("animated")
                .describe("A grid that breathes"),
            Entry::new("tagged", "Drift Field", "aurora")
                .tag("animated")
                .describe("Slow particles"),
            Entry::new("worded", "Calm Grid", "mono").describe("A grid that rests"),
            Entry::new("stranger", "Boot Log", "retro").tag("text"),
        ]);

        assert_eq!(index.related("anchor", 5), vec!["tagged", "worded"]);
        assert_eq!(index.related("anchor", 1), vec!["tagged"]);
        assert!(index.related("missing", 5).is_empty());
    }
}
