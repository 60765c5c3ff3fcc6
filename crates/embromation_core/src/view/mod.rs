//! Derived views over observable sequences.
//!
//! # Responsibility
//! - Maintain bounded projections (top-N) incrementally from change events.
//! - Stay independent of any UI framework so views can be unit tested on
//!   plain vectors.

pub mod top_items;
