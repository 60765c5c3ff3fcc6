//! Catalog item model.
//!
//! # Responsibility
//! - Represent one content entry that belongs to exactly one group.
//! - Serve freshly generated content on every read.
//!
//! # Invariants
//! - `content()` never returns the stored value; it always asks the
//!   content source. The stored value only exists for change notification.
//! - `group_id` is a non-owning back-reference to the owning group.

use crate::model::entry::{Entry, EntryMeta};
use crate::observable::property::{set_property, NotifyPropertyChanged, PropertyObservers};
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

pub const PROPERTY_CONTENT: &str = "content";
pub const PROPERTY_GROUP: &str = "group";

/// Source of item body text.
pub trait ContentSource: Send + Sync {
    fn generate(&self) -> String;
}

/// Content source that always returns the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedContent(pub String);

impl ContentSource for FixedContent {
    fn generate(&self) -> String {
        self.0.clone()
    }
}

/// One content entry of a group.
#[derive(Clone)]
pub struct Item {
    meta: EntryMeta,
    stored_content: String,
    group_id: String,
    content_source: Arc<dyn ContentSource>,
}

impl Item {
    pub fn new(
        meta: EntryMeta,
        group_id: impl Into<String>,
        content_source: Arc<dyn ContentSource>,
    ) -> Self {
        Self {
            meta,
            stored_content: String::new(),
            group_id: group_id.into(),
            content_source,
        }
    }

    pub fn with_stored_content(mut self, content: impl Into<String>) -> Self {
        self.stored_content = content.into();
        self
    }

    /// Body text, regenerated on every call.
    pub fn content(&self) -> String {
        self.content_source.generate()
    }

    /// Last value assigned through `set_content`.
    pub fn stored_content(&self) -> &str {
        &self.stored_content
    }

    pub fn set_content(&mut self, value: impl Into<String>) -> bool {
        set_property(
            &mut self.stored_content,
            value.into(),
            PROPERTY_CONTENT,
            self.meta.property_observers(),
        )
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn set_group_id(&mut self, value: impl Into<String>) -> bool {
        set_property(
            &mut self.group_id,
            value.into(),
            PROPERTY_GROUP,
            self.meta.property_observers(),
        )
    }
}

impl Entry for Item {
    fn meta(&self) -> &EntryMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntryMeta {
        &mut self.meta
    }
}

impl NotifyPropertyChanged for Item {
    fn property_observers(&self) -> &PropertyObservers {
        self.meta.property_observers()
    }

    fn property_observers_mut(&mut self) -> &mut PropertyObservers {
        self.meta.property_observers_mut()
    }
}

impl Debug for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item")
            .field("meta", &self.meta)
            .field("group_id", &self.group_id)
            .finish_non_exhaustive()
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.meta, f)
    }
}
