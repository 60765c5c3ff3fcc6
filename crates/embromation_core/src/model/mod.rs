//! Catalog domain model.
//!
//! # Responsibility
//! - Define groups, items and the fields they share.
//! - Compose change notification into entities instead of inheriting it.
//!
//! # Invariants
//! - Every entity is identified by a string `unique_id`.
//! - Items are owned by exactly one group and never hold a strong
//!   reference back to it.

pub mod entry;
pub mod group;
pub mod image;
pub mod item;
