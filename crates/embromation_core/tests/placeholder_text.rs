use embromation_core::placeholder::fragments::FragmentTable;
use embromation_core::placeholder::generator::PARAGRAPH_BREAK;
use embromation_core::placeholder::template::{Piece, FALLBACK_TEMPLATE, TEMPLATES};
use embromation_core::{CoreConfig, PlaceholderGenerator};
use std::sync::Arc;
use std::thread;

fn paragraphs(text: &str) -> Vec<&str> {
    text.strip_suffix(PARAGRAPH_BREAK)
        .expect("output must end with a paragraph break")
        .split(PARAGRAPH_BREAK)
        .collect()
}

/// Entries a generator may draw from `table`.
fn reachable(table: FragmentTable, full_range: bool) -> &'static [&'static str] {
    let entries = table.entries();
    if full_range {
        entries
    } else {
        &entries[..entries.len() - 1]
    }
}

/// Whether `text` is exactly `pieces` rendered with reachable fragments.
fn matches_pieces(text: &str, pieces: &[Piece], full_range: bool) -> bool {
    let Some((first, rest)) = pieces.split_first() else {
        return text.is_empty();
    };
    match *first {
        Piece::Text(literal) => text
            .strip_prefix(literal)
            .is_some_and(|tail| matches_pieces(tail, rest, full_range)),
        Piece::Fragment(table) => reachable(table, full_range).iter().any(|entry| {
            text.strip_prefix(entry)
                .is_some_and(|tail| matches_pieces(tail, rest, full_range))
        }),
    }
}

fn is_well_formed(paragraph: &str, full_range: bool) -> bool {
    TEMPLATES
        .iter()
        .map(|template| template.pieces)
        .chain([FALLBACK_TEMPLATE.pieces])
        .any(|pieces| matches_pieces(paragraph, pieces, full_range))
}

#[test]
fn output_has_eight_well_formed_paragraphs() {
    let generator = PlaceholderGenerator::with_seed(11);
    for _ in 0..200 {
        let text = generator.generate();
        let parts = paragraphs(&text);
        assert_eq!(parts.len(), 8);
        for part in parts {
            assert!(is_well_formed(part, false), "foreign text in: {part}");
        }
    }
}

#[test]
fn last_fragment_of_each_table_never_appears() {
    let generator = PlaceholderGenerator::with_seed(7);
    let last_entries: Vec<&str> = FragmentTable::ALL
        .iter()
        .filter_map(|table| table.entries().last().copied())
        .collect();

    for _ in 0..10_000 {
        let text = generator.generate();
        for entry in &last_entries {
            assert!(!text.contains(entry), "unreachable fragment drawn: {entry}");
        }
    }
}

#[test]
fn full_range_config_reaches_last_fragments() {
    let config = CoreConfig {
        full_fragment_range: true,
        seed: Some(5),
        ..CoreConfig::default()
    };
    let generator = PlaceholderGenerator::from_config(&config);
    let last_closing = *FragmentTable::Closing.entries().last().unwrap();

    let mut seen = false;
    for _ in 0..2_000 {
        let text = generator.generate();
        for part in paragraphs(&text) {
            assert!(is_well_formed(part, true), "foreign text in: {part}");
        }
        seen |= text.contains(last_closing);
    }
    assert!(seen, "last closing fragment should be reachable with full range");
}

#[test]
fn every_reachable_template_shows_up() {
    let generator = PlaceholderGenerator::with_seed(99);
    let mut hits = vec![false; TEMPLATES.len()];

    for _ in 0..200 {
        let text = generator.generate();
        for part in paragraphs(&text) {
            for (index, template) in TEMPLATES.iter().enumerate() {
                if matches_pieces(part, template.pieces, false) {
                    hits[index] = true;
                }
            }
        }
    }
    assert!(hits.iter().all(|hit| *hit), "template hits: {hits:?}");
}

#[test]
fn concurrent_generation_stays_well_formed() {
    let generator = Arc::new(PlaceholderGenerator::with_seed(31));
    let workers: Vec<_> = (0..8)
        .map(|_| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                (0..100)
                    .map(|_| generator.generate())
                    .collect::<Vec<String>>()
            })
        })
        .collect();

    for worker in workers {
        let outputs = worker.join().expect("worker should not panic");
        assert_eq!(outputs.len(), 100);
        for text in outputs {
            let parts = paragraphs(&text);
            assert_eq!(parts.len(), 8);
            for part in parts {
                assert!(is_well_formed(part, false), "torn paragraph: {part}");
            }
        }
    }
}
