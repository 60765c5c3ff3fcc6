//! Randomized placeholder prose generator.
//!
//! # Responsibility
//! - Assemble multi-paragraph nonsense text from the fragment tables.
//! - Serialize access to one shared RNG.
//!
//! # Invariants
//! - The RNG lock is taken once per paragraph: the selector draw and every
//!   fragment draw of a paragraph happen under one guard. Concurrent calls
//!   may interleave between paragraphs, never inside one.
//! - Unless `full_fragment_range` is set, draws use `[0, len - 1)`, so the
//!   last entry of each table never appears.
//! - Each paragraph is terminated by `PARAGRAPH_BREAK`.

use crate::config::CoreConfig;
use crate::model::item::ContentSource;
use crate::placeholder::fragments::FragmentTable;
use crate::placeholder::template::{template_for, Piece, SELECTOR_END, SELECTOR_MIN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Paragraphs per generated block.
pub const DEFAULT_PARAGRAPH_COUNT: usize = 8;
/// Separator appended after every paragraph.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Thread-safe placeholder text generator.
#[derive(Debug)]
pub struct PlaceholderGenerator {
    rng: Mutex<StdRng>,
    paragraph_count: usize,
    full_fragment_range: bool,
}

impl Default for PlaceholderGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderGenerator {
    /// Entropy-seeded generator with default settings.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy(), DEFAULT_PARAGRAPH_COUNT, false)
    }

    /// Deterministic generator with default settings.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), DEFAULT_PARAGRAPH_COUNT, false)
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng, config.paragraph_count, config.full_fragment_range)
    }

    fn with_rng(rng: StdRng, paragraph_count: usize, full_fragment_range: bool) -> Self {
        Self {
            rng: Mutex::new(rng),
            paragraph_count,
            full_fragment_range,
        }
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraph_count
    }

    pub fn full_fragment_range(&self) -> bool {
        self.full_fragment_range
    }

    /// Builds one block of `paragraph_count` paragraphs.
    pub fn generate(&self) -> String {
        let mut text = String::new();
        for _ in 0..self.paragraph_count {
            let mut rng = self.lock_rng();
            let selector = rng.gen_range(SELECTOR_MIN..SELECTOR_END);
            for piece in template_for(selector) {
                match *piece {
                    Piece::Text(literal) => text.push_str(literal),
                    Piece::Fragment(table) => text.push_str(self.draw(&mut *rng, table)),
                }
            }
            drop(rng);
            text.push_str(PARAGRAPH_BREAK);
        }
        text
    }

    fn draw<R: Rng>(&self, rng: &mut R, table: FragmentTable) -> &'static str {
        let entries = table.entries();
        let upper = if self.full_fragment_range {
            entries.len()
        } else {
            entries.len().saturating_sub(1).max(1)
        };
        entries[rng.gen_range(0..upper)]
    }

    fn lock_rng(&self) -> MutexGuard<'_, StdRng> {
        // A panic while holding the guard cannot leave StdRng half-updated.
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ContentSource for PlaceholderGenerator {
    fn generate(&self) -> String {
        PlaceholderGenerator::generate(self)
    }
}
