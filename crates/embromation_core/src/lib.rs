//! Core data model for Embromation.
//! This crate owns the catalog invariants; UI layers only bind to it.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod observable;
pub mod placeholder;
pub mod view;

pub use catalog::{Catalog, CatalogError, ALL_GROUPS_SCOPE};
pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{Entry, EntryMeta};
pub use model::group::{Group, ItemRef};
pub use model::image::{ImageHandle, ImageResolver, ImageSlot, UriImageResolver};
pub use model::item::{ContentSource, FixedContent, Item};
pub use observable::list::{ChangeEvent, ListChange, ListIndexError, ObservableList};
pub use observable::property::{NotifyPropertyChanged, PropertyObservers};
pub use observable::SubscriptionId;
pub use placeholder::generator::PlaceholderGenerator;
pub use view::top_items::DEFAULT_TOP_ITEMS_LIMIT;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
