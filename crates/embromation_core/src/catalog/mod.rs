//! Catalog context: the process-wide set of groups and their items.
//!
//! # Responsibility
//! - Own the ordered group list and the shared content/image collaborators.
//! - Provide identifier lookups for groups and items.
//!
//! # Invariants
//! - Lookups succeed only on exactly one match; zero or several matches
//!   are reported as absent.
//! - Only `ALL_GROUPS_SCOPE` is accepted as a group-collection scope.
//! - The catalog is constructed explicitly and handed to consumers; the
//!   core keeps no global instance.

pub mod sample;

use crate::config::{ConfigError, CoreConfig};
use crate::model::entry::{Entry, EntryMeta};
use crate::model::group::{Group, ItemRef};
use crate::model::image::{ImageHandle, ImageResolver, UriImageResolver};
use crate::model::item::{ContentSource, Item};
use crate::observable::list::{ChangeEvent, ObservableList};
use crate::observable::SubscriptionId;
use crate::placeholder::generator::PlaceholderGenerator;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// The only supported scope for `Catalog::get_groups`.
pub const ALL_GROUPS_SCOPE: &str = "AllGroups";

/// Catalog-level errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    UnsupportedGroupScope(String),
    Config(ConfigError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedGroupScope(scope) => write!(
                f,
                "only `{ALL_GROUPS_SCOPE}` is supported as a collection of groups, got `{scope}`"
            ),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnsupportedGroupScope(_) => None,
            Self::Config(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CatalogError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// Ordered groups plus the collaborators their entries depend on.
pub struct Catalog {
    config: CoreConfig,
    groups: ObservableList<Group>,
    generator: Arc<PlaceholderGenerator>,
    image_resolver: Arc<dyn ImageResolver>,
}

impl Debug for Catalog {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("config", &self.config)
            .field("groups", &self.groups)
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Builds an empty catalog from a validated config.
    pub fn new(config: CoreConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        let resolver = UriImageResolver::new(config.asset_base_uri.trim())
            .map_err(|err| ConfigError::InvalidAssetBase(err.to_string()))?;
        let generator = Arc::new(PlaceholderGenerator::from_config(&config));
        info!(
            "event=catalog_init module=catalog status=ok top_items_limit={} paragraph_count={} seeded={}",
            config.top_items_limit,
            config.paragraph_count,
            config.seed.is_some()
        );
        Ok(Self {
            config,
            groups: ObservableList::new(),
            generator,
            image_resolver: Arc::new(resolver),
        })
    }

    /// Swaps the image resolver, e.g. for a host-specific bitmap loader.
    pub fn with_image_resolver(mut self, resolver: Arc<dyn ImageResolver>) -> Self {
        self.image_resolver = resolver;
        self
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn generator(&self) -> &PlaceholderGenerator {
        &self.generator
    }

    /// Content source handed to every item created through this catalog.
    pub fn content_source(&self) -> Arc<dyn ContentSource> {
        self.generator.clone()
    }

    pub fn image_resolver(&self) -> &dyn ImageResolver {
        self.image_resolver.as_ref()
    }

    /// Creates a group that uses the configured top-items bound.
    pub fn create_group(&self, meta: EntryMeta) -> Group {
        Group::with_top_items_limit(meta, self.config.top_items_limit)
    }

    /// Creates an item wired to the catalog's content source.
    pub fn create_item(&self, meta: EntryMeta, group_id: impl Into<String>) -> Item {
        Item::new(meta, group_id, self.content_source())
    }

    /// Appends a group. Duplicate ids are accepted but make lookups absent.
    pub fn add_group(&mut self, group: Group) {
        if self
            .groups
            .iter()
            .any(|existing| existing.unique_id() == group.unique_id())
        {
            warn!(
                "event=group_add module=catalog status=duplicate group_id={}",
                group.unique_id()
            );
        }
        self.groups.push(group);
    }

    pub fn all_groups(&self) -> &ObservableList<Group> {
        &self.groups
    }

    pub fn subscribe_groups<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent<'_, Group>) + Send + 'static,
    {
        self.groups.subscribe(handler)
    }

    pub fn unsubscribe_groups(&mut self, id: SubscriptionId) -> bool {
        self.groups.unsubscribe(id)
    }

    /// Returns the group collection named by `scope`.
    ///
    /// # Errors
    /// - `CatalogError::UnsupportedGroupScope` for any scope other than
    ///   `ALL_GROUPS_SCOPE`.
    pub fn get_groups(&self, scope: &str) -> Result<&ObservableList<Group>, CatalogError> {
        if scope != ALL_GROUPS_SCOPE {
            return Err(CatalogError::UnsupportedGroupScope(scope.to_string()));
        }
        Ok(&self.groups)
    }

    pub fn get_group(&self, group_id: &str) -> Option<&Group> {
        single_match(
            self.groups
                .iter()
                .filter(|group| group.unique_id() == group_id),
            "group",
            group_id,
        )
    }

    /// Mutable access for item edits; same exactly-one-match rule.
    pub fn get_group_mut(&mut self, group_id: &str) -> Option<&mut Group> {
        let mut matches = self
            .groups
            .iter_mut()
            .filter(|group| group.unique_id() == group_id);
        let first = matches.next()?;
        if matches.next().is_some() {
            warn!("event=lookup module=catalog status=ambiguous kind=group id={group_id}");
            return None;
        }
        Some(first)
    }

    /// Finds one item across all groups.
    pub fn get_item(&self, item_id: &str) -> Option<ItemRef> {
        single_match(
            self.groups
                .iter()
                .flat_map(|group| group.items().iter())
                .filter(|item| item.unique_id() == item_id),
            "item",
            item_id,
        )
        .cloned()
    }

    /// Resolves (and caches) the image of any entry in this catalog.
    pub fn resolve_image(&self, entry: &dyn Entry) -> Option<ImageHandle> {
        entry.meta().image(self.image_resolver.as_ref()).cloned()
    }
}

fn single_match<I>(mut matches: I, kind: &str, id: &str) -> Option<I::Item>
where
    I: Iterator,
{
    let first = matches.next()?;
    if matches.next().is_some() {
        warn!("event=lookup module=catalog status=ambiguous kind={kind} id={id}");
        return None;
    }
    Some(first)
}
