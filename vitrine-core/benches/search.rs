use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vitrine_core::{Entry, SearchIndex};

const ADJECTIVES: &[&str] = &[
    "Gold", "Ice", "Neon", "Mono", "Aurora", "Retro", "Velvet", "Chrome", "Dusk", "Static",
];
const NOUNS: &[&str] = &[
    "Button", "Card", "Gauge", "Marquee", "Clock", "Table", "Wave", "Starfield", "Panel", "Log",
];
const TAGS: &[&str] = &[
    "animated", "interactive", "chart", "text", "chrome", "luxury", "frost", "grid",
];

/// A catalog shaped like the real one, only bigger: every
/// adjective/noun pairing, cycled through four zones.
fn synthetic_entries(count: usize) -> Vec<Entry> {
    let zones = ["neon", "retro", "mono", "aurora"];
    (0..count)
        .map(|i| {
            let adjective = ADJECTIVES[i % ADJECTIVES.len()];
            let noun = NOUNS[(i / ADJECTIVES.len()) % NOUNS.len()];
            Entry::new(
                format!("entry-{i}"),
                format!("{adjective} {noun}"),
                zones[i % zones.len()],
            )
            .describe(format!("A {} {} for the gallery floor", adjective.to_lowercase(), noun.to_lowercase()))
            .tag(TAGS[i % TAGS.len()])
            .tag(TAGS[(i + 3) % TAGS.len()])
        })
        .collect()
}

fn bench_index_build(c: &mut Criterion) {
    let entries = synthetic_entries(200);

    c.bench_function("SearchIndex::build_200_entries", |b| {
        b.iter(|| black_box(SearchIndex::build(black_box(&entries))));
    });
}

fn bench_query(c: &mut Criterion) {
    let entries = synthetic_entries(200);
    let index = SearchIndex::build(&entries);

    // Partial word hitting many names.
    c.bench_function("SearchIndex::query_common_needle", |b| {
        b.iter(|| black_box(index.query(black_box("but"))));
    });

    // Tag-only hit with mid-priority ranking work.
    c.bench_function("SearchIndex::query_tag_needle", |b| {
        b.iter(|| black_box(index.query(black_box("frost"))));
    });

    // Miss: full scan, no allocation of hits.
    c.bench_function("SearchIndex::query_absent_needle", |b| {
        b.iter(|| black_box(index.query(black_box("zzzz"))));
    });
}

fn bench_related(c: &mut Criterion) {
    let entries = synthetic_entries(200);
    let index = SearchIndex::build(&entries);

    c.bench_function("SearchIndex::related_top5", |b| {
        b.iter(|| black_box(index.related(black_box("entry-0"), 5)));
    });
}

criterion_group!(benches, bench_index_build, bench_query, bench_related);
criterion_main!(benches);
