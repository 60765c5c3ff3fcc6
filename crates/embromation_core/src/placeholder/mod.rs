//! Placeholder ("lero-lero") prose generation.
//!
//! # Responsibility
//! - Hold the four phrase-fragment tables and the paragraph templates.
//! - Produce display-only nonsense text for item content.
//!
//! # Invariants
//! - Output is composed exclusively of table fragments and template joiners.

pub mod fragments;
pub mod generator;
pub mod template;
