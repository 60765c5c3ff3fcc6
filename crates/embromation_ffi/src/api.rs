//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose catalog browsing and placeholder content to Dart via FRB.
//! - Own the single catalog context of the process.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The catalog is built once; later configuration attempts with a
//!   different config are rejected.
//! - Item content is regenerated on every `catalog_item` call.

use embromation_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Catalog, CoreConfig, Entry, Group, Item,
};
use log::{info, warn};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static CATALOG: OnceLock<Mutex<Catalog>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Builds the process catalog from a JSON config before first use.
///
/// # FFI contract
/// - `config_json` may be empty to use defaults.
/// - Idempotent for an identical config; returns an error message when the
///   catalog already runs with a different one.
/// - Returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_catalog(config_json: String) -> String {
    let config = match parse_config(config_json.as_str()) {
        Ok(config) => config,
        Err(err) => return format!("configure_catalog failed: {err}"),
    };
    if let Some(existing) = CATALOG.get() {
        let active = lock(existing).config().clone();
        if active == config {
            return String::new();
        }
        return "configure_catalog failed: catalog already initialized with a different config"
            .to_string();
    }
    match install_catalog(config.clone()) {
        Ok(catalog) if *lock(catalog).config() == config => String::new(),
        Ok(_) => "configure_catalog failed: catalog already initialized with a different config"
            .to_string(),
        Err(err) => format!("configure_catalog failed: {err}"),
    }
}

/// Short item projection used inside group views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    pub item_id: String,
    pub title: String,
    pub subtitle: String,
    /// Resolved image URI, when the item has an image.
    pub image_uri: Option<String>,
}

/// Group projection with its bounded top items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    pub group_id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_uri: Option<String>,
    /// Size of the full item list.
    pub item_count: u32,
    /// Head of the item list, bounded by the configured top-items limit.
    pub top_items: Vec<ItemSummary>,
}

/// Full item projection, content included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub item_id: String,
    pub group_id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_uri: Option<String>,
    /// Freshly generated placeholder text.
    pub content: String,
}

/// Response envelope for group listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupListResponse {
    pub ok: bool,
    pub groups: Vec<GroupView>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Lists groups of the requested collection scope.
///
/// # FFI contract
/// - Only `AllGroups` is a supported scope; anything else yields
///   `ok = false` with the error in `message`.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_groups(scope: String) -> GroupListResponse {
    let result = with_catalog(|catalog| {
        catalog
            .get_groups(scope.trim())
            .map(|groups| {
                groups
                    .iter()
                    .map(|group| to_group_view(catalog, group))
                    .collect::<Vec<_>>()
            })
            .map_err(|err| err.to_string())
    });

    match result.and_then(|inner| inner) {
        Ok(groups) => GroupListResponse {
            ok: true,
            message: format!("Found {} group(s).", groups.len()),
            groups,
        },
        Err(err) => {
            warn!("event=catalog_groups module=ffi status=error");
            GroupListResponse {
                ok: false,
                groups: Vec::new(),
                message: format!("catalog_groups failed: {err}"),
            }
        }
    }
}

/// Looks up one group; `None` when absent or ambiguous.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_group(group_id: String) -> Option<GroupView> {
    with_catalog(|catalog| {
        catalog
            .get_group(group_id.trim())
            .map(|group| to_group_view(catalog, group))
    })
    .ok()
    .flatten()
}

/// Looks up one item across all groups; `None` when absent or ambiguous.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_item(item_id: String) -> Option<ItemView> {
    with_catalog(|catalog| {
        catalog.get_item(item_id.trim()).map(|item| ItemView {
            item_id: item.unique_id().to_string(),
            group_id: item.group_id().to_string(),
            title: item.title().to_string(),
            subtitle: item.subtitle().to_string(),
            description: item.description().to_string(),
            image_uri: image_uri(catalog, item.as_ref()),
            content: item.content(),
        })
    })
    .ok()
    .flatten()
}

/// Generates one placeholder block without touching any item.
#[flutter_rust_bridge::frb(sync)]
pub fn generate_placeholder() -> String {
    with_catalog(|catalog| catalog.generator().generate()).unwrap_or_default()
}

fn to_group_view(catalog: &Catalog, group: &Group) -> GroupView {
    GroupView {
        group_id: group.unique_id().to_string(),
        title: group.title().to_string(),
        subtitle: group.subtitle().to_string(),
        description: group.description().to_string(),
        image_uri: image_uri(catalog, group),
        item_count: u32::try_from(group.items().len()).unwrap_or(u32::MAX),
        top_items: group
            .top_items()
            .iter()
            .map(|item| to_item_summary(catalog, item))
            .collect(),
    }
}

fn to_item_summary(catalog: &Catalog, item: &Item) -> ItemSummary {
    ItemSummary {
        item_id: item.unique_id().to_string(),
        title: item.title().to_string(),
        subtitle: item.subtitle().to_string(),
        image_uri: image_uri(catalog, item),
    }
}

fn image_uri(catalog: &Catalog, entry: &dyn Entry) -> Option<String> {
    catalog
        .resolve_image(entry)
        .map(|handle| handle.uri().to_string())
}

fn parse_config(config_json: &str) -> Result<CoreConfig, String> {
    let trimmed = config_json.trim();
    if trimmed.is_empty() {
        return Ok(CoreConfig::default());
    }
    CoreConfig::from_json_str(trimmed).map_err(|err| err.to_string())
}

fn install_catalog(config: CoreConfig) -> Result<&'static Mutex<Catalog>, String> {
    if let Some(existing) = CATALOG.get() {
        return Ok(existing);
    }
    let catalog = Catalog::with_sample_data(config).map_err(|err| err.to_string())?;
    if CATALOG.set(Mutex::new(catalog)).is_err() {
        info!("event=catalog_install module=ffi status=raced");
    }
    CATALOG
        .get()
        .ok_or_else(|| "catalog is unavailable after initialization".to_string())
}

fn with_catalog<T>(f: impl FnOnce(&Catalog) -> T) -> Result<T, String> {
    let catalog = install_catalog(CoreConfig::default())?;
    let guard = lock(catalog);
    Ok(f(&guard))
}

fn lock(catalog: &Mutex<Catalog>) -> MutexGuard<'_, Catalog> {
    catalog.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::{
        catalog_group, catalog_groups, catalog_item, configure_catalog, generate_placeholder,
        parse_config, ping,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn parse_config_defaults_on_blank_input() {
        let config = parse_config("  ").expect("blank config should default");
        assert_eq!(config.top_items_limit, 12);
        assert!(parse_config("{\"top_items_limit\": 0}").is_err());
    }

    #[test]
    fn catalog_calls_expose_sample_data() {
        assert_eq!(configure_catalog(String::new()), "");

        let response = catalog_groups("AllGroups".to_string());
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.groups.len(), 2);
        assert_eq!(response.groups[0].top_items.len(), 4);
        assert_eq!(response.groups[0].item_count, 4);

        let rejected = catalog_groups("Other".to_string());
        assert!(!rejected.ok);
        assert!(rejected.message.contains("AllGroups"));

        let group = catalog_group("Group-1".to_string()).expect("Group-1 should exist");
        assert_eq!(
            group.image_uri.as_deref(),
            Some("ms-appx:///Assets/Dilma.png")
        );
        assert!(catalog_group("missing".to_string()).is_none());

        let first = catalog_item("Group-1-Item-1".to_string()).expect("item should exist");
        let second = catalog_item("Group-1-Item-1".to_string()).expect("item should exist");
        assert_eq!(first.group_id, "Group-1");
        assert_ne!(first.content, second.content);

        assert!(!generate_placeholder().is_empty());
        assert!(configure_catalog("{\"top_items_limit\": 3}".to_string()).contains("different"));
    }
}
