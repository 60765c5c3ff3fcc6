//! Flutter bridge crate for Embromation.
//!
//! Dart bindings are generated from `api`; this crate holds no domain logic.

pub mod api;
