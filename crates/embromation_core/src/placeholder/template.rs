//! Paragraph templates.
//!
//! A template is a fixed sequence of fragment draws and literal joiners.
//! Selectors 1 to 5 pick a template; anything else falls back to the short
//! template, which the generator never reaches with its `1..6` draw.

use crate::placeholder::fragments::FragmentTable;
use FragmentTable::{Closing, Opening, Predicate, Subject};
use Piece::{Fragment, Text};

/// One step of a paragraph template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Fragment(FragmentTable),
    Text(&'static str),
}

/// Selector-to-template binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub selectors: &'static [u32],
    pub pieces: &'static [Piece],
}

/// Lowest selector drawn per paragraph (inclusive).
pub const SELECTOR_MIN: u32 = 1;
/// Upper selector bound (exclusive).
pub const SELECTOR_END: u32 = 6;

const CHAINED: &[Piece] = &[
    Fragment(Opening),
    Text(" "),
    Fragment(Subject),
    Text(" "),
    Fragment(Predicate),
    Text(", "),
    Fragment(Predicate),
    Text(" assim como "),
    Fragment(Subject),
    Text(" "),
    Fragment(Closing),
];

const DOUBLE_SUBJECT: &[Piece] = &[
    Fragment(Opening),
    Text(" "),
    Fragment(Subject),
    Text(" "),
    Fragment(Predicate),
    Text(" e "),
    Fragment(Subject),
    Text(", "),
    Fragment(Predicate),
    Text(" "),
    Fragment(Predicate),
    Text(" e "),
    Fragment(Predicate),
    Text(" assim como "),
    Fragment(Subject),
    Text(" "),
    Fragment(Predicate),
    Text(" "),
    Fragment(Closing),
];

const PREDICATE_RUN: &[Piece] = &[
    Fragment(Opening),
    Text(" "),
    Fragment(Subject),
    Text(" "),
    Fragment(Predicate),
    Text(", "),
    Fragment(Predicate),
    Text(" e "),
    Fragment(Predicate),
    Text(" "),
    Fragment(Predicate),
    Text(" assim como "),
    Fragment(Subject),
    Text(" "),
    Fragment(Closing),
];

const SHORT: &[Piece] = &[
    Fragment(Opening),
    Text(" "),
    Fragment(Subject),
    Text("  "),
    Fragment(Predicate),
    Text(" "),
    Fragment(Closing),
];

pub const TEMPLATES: &[Template] = &[
    Template {
        selectors: &[1, 2, 4],
        pieces: CHAINED,
    },
    Template {
        selectors: &[3],
        pieces: DOUBLE_SUBJECT,
    },
    Template {
        selectors: &[5],
        pieces: PREDICATE_RUN,
    },
];

/// Template used for selectors outside every binding.
pub const FALLBACK_TEMPLATE: Template = Template {
    selectors: &[],
    pieces: SHORT,
};

/// Returns the pieces bound to `selector`.
pub fn template_for(selector: u32) -> &'static [Piece] {
    TEMPLATES
        .iter()
        .find(|template| template.selectors.contains(&selector))
        .map_or(FALLBACK_TEMPLATE.pieces, |template| template.pieces)
}
