//! Change-notification primitives shared by catalog entities.
//!
//! # Responsibility
//! - Provide an ordered list that reports every mutation to subscribers.
//! - Provide a notify-on-set capability for individual entity fields.
//!
//! # Invariants
//! - Handlers run synchronously, in subscription order, after the mutation
//!   has been applied.
//! - Subscription ids are never reused within one list or observer set.

pub mod list;
pub mod property;

/// Handle returned by `subscribe` calls; pass it back to unsubscribe.
pub type SubscriptionId = u64;
