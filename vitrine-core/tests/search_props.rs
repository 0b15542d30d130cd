use std::ops::Range;

use proptest::prelude::*;
use vitrine_core::{Entry, SearchIndex};

// Strategy: a small catalog of entries with ASCII names, tags, and
// descriptions. Ids never enter the index, so they may contain digits.
fn arb_entries() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(
        (
            "[A-Za-z]{1,12}",
            prop::collection::vec("[a-z]{1,8}", 0..4),
            "[A-Za-z ]{0,30}",
        ),
        1..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, tags, description))| {
                let mut entry =
                    Entry::new(format!("e{i}"), name, "zone").describe(description);
                for tag in tags {
                    entry = entry.tag(tag);
                }
                entry
            })
            .collect()
    })
}

// A catalog plus a needle cut from one entry's lowercased name.
fn entries_with_name_needle() -> impl Strategy<Value = (Vec<Entry>, usize, String)> {
    (arb_entries(), 0usize..16, 1usize..12).prop_map(|(entries, seed, len)| {
        let pick = seed % entries.len();
        let name = entries[pick].name.to_lowercase();
        let start = seed.min(name.len() - 1);
        let end = (start + len).min(name.len());
        let needle = name[start..end].to_string();
        (entries, pick, needle)
    })
}

fn spans_ok(original: &str, spans: &[Range<usize>], needle: &str) -> bool {
    let mut previous_end = 0;
    for span in spans {
        if span.start < previous_end || span.end > original.len() {
            return false;
        }
        if !original.is_char_boundary(span.start) || !original.is_char_boundary(span.end) {
            return false;
        }
        if original[span.clone()].to_lowercase() != needle {
            return false;
        }
        previous_end = span.end;
    }
    true
}

proptest! {
    /// Property: a needle cut from an entry's name always finds that entry.
    #[test]
    fn prop_name_substring_is_always_found((entries, pick, needle) in entries_with_name_needle()) {
        let index = SearchIndex::build(&entries);
        let results = index.query(&needle);

        prop_assert!(results.flattened().any(|hit| hit.id == entries[pick].id));
    }

    /// Property: a needle absent from every field matches nothing. Names,
    /// tags, and descriptions are letters and spaces only, so digit
    /// needles cannot occur in any of them.
    #[test]
    fn prop_absent_needle_yields_empty_results(
        entries in arb_entries(),
        needle in "[0-9]{1,4}",
    ) {
        let index = SearchIndex::build(&entries);
        let results = index.query(&needle);

        prop_assert!(results.is_empty());
        prop_assert_eq!(results.len(), 0);
    }

    /// Property: a name match ranks strictly before a description-only
    /// match, regardless of registration order.
    #[test]
    fn prop_name_match_outranks_description_only(
        needle in "[a-z]{3,6}",
        other_name in "[A-Za-z]{1,10}",
        name_entry_first in any::<bool>(),
    ) {
        prop_assume!(!other_name.to_lowercase().contains(&needle));

        let by_name = Entry::new("by-name", format!("Gilt {needle} Frame"), "zone");
        let by_description = Entry::new("by-description", other_name, "zone")
            .describe(format!("hides a {needle} inside"));
        let entries = if name_entry_first {
            vec![by_name, by_description]
        } else {
            vec![by_description, by_name]
        };

        let index = SearchIndex::build(&entries);
        let ids: Vec<String> = index
            .query(&needle)
            .flattened()
            .map(|hit| hit.id.clone())
            .collect();

        prop_assert_eq!(ids, vec!["by-name".to_string(), "by-description".to_string()]);
    }

    /// Property: uppercasing the query never changes which entries match.
    #[test]
    fn prop_query_case_is_irrelevant(entries in arb_entries(), raw in "[A-Za-z]{1,6}") {
        let index = SearchIndex::build(&entries);
        let upper: Vec<String> = index
            .query(&raw.to_uppercase())
            .flattened()
            .map(|hit| hit.id.clone())
            .collect();
        let lower: Vec<String> = index
            .query(&raw.to_lowercase())
            .flattened()
            .map(|hit| hit.id.clone())
            .collect();

        prop_assert_eq!(upper, lower);
    }

    /// Property: every highlight span is in bounds, on char boundaries,
    /// non-overlapping in ascending order, and covers text that folds to
    /// the needle.
    #[test]
    fn prop_highlight_spans_locate_the_needle((entries, _, needle) in entries_with_name_needle()) {
        let index = SearchIndex::build(&entries);

        for hit in index.query(&needle).flattened() {
            let entry = entries.iter().find(|e| e.id == hit.id).unwrap();
            prop_assert!(spans_ok(&entry.name, &hit.name_spans, &needle));
            for (tag_index, spans) in &hit.tag_spans {
                prop_assert!(spans_ok(&entry.tags[*tag_index], spans, &needle));
            }
            prop_assert!(spans_ok(&entry.description, &hit.description_spans, &needle));
        }
    }

    /// Property: whitespace-only queries return nothing for any catalog.
    #[test]
    fn prop_blank_query_is_empty(entries in arb_entries(), blanks in "[ \t]{0,6}") {
        let index = SearchIndex::build(&entries);
        prop_assert!(index.query(&blanks).is_empty());
    }
}
