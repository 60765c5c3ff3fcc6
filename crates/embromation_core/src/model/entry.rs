//! Fields shared by groups and items.
//!
//! # Responsibility
//! - Hold identity, display texts and the image slot of one catalog entry.
//! - Report every effective field change through `PropertyObservers`.
//!
//! # Invariants
//! - `unique_id` is expected to be unique within its scope; uniqueness is
//!   enforced by lookups treating duplicates as absent, not here.

use crate::model::image::{ImageHandle, ImageResolver, ImageSlot};
use crate::observable::property::{set_property, NotifyPropertyChanged, PropertyObservers};
use std::fmt::{Display, Formatter};

pub const PROPERTY_UNIQUE_ID: &str = "unique_id";
pub const PROPERTY_TITLE: &str = "title";
pub const PROPERTY_SUBTITLE: &str = "subtitle";
pub const PROPERTY_DESCRIPTION: &str = "description";
pub const PROPERTY_IMAGE: &str = "image";

/// Identity and display fields of a catalog entry.
#[derive(Debug, Clone)]
pub struct EntryMeta {
    unique_id: String,
    title: String,
    subtitle: String,
    description: String,
    image: ImageSlot,
    observers: PropertyObservers,
}

impl EntryMeta {
    pub fn new(
        unique_id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            unique_id: unique_id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            description: description.into(),
            image: ImageSlot::empty(),
            observers: PropertyObservers::new(),
        }
    }

    /// Builder-style relative image path, resolved on first access.
    pub fn with_image_path(mut self, path: impl Into<String>) -> Self {
        self.image = ImageSlot::from_path(path);
        self
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_slot(&self) -> &ImageSlot {
        &self.image
    }

    pub fn set_unique_id(&mut self, value: impl Into<String>) -> bool {
        set_property(
            &mut self.unique_id,
            value.into(),
            PROPERTY_UNIQUE_ID,
            &self.observers,
        )
    }

    pub fn set_title(&mut self, value: impl Into<String>) -> bool {
        set_property(&mut self.title, value.into(), PROPERTY_TITLE, &self.observers)
    }

    pub fn set_subtitle(&mut self, value: impl Into<String>) -> bool {
        set_property(
            &mut self.subtitle,
            value.into(),
            PROPERTY_SUBTITLE,
            &self.observers,
        )
    }

    pub fn set_description(&mut self, value: impl Into<String>) -> bool {
        set_property(
            &mut self.description,
            value.into(),
            PROPERTY_DESCRIPTION,
            &self.observers,
        )
    }

    /// Image handle, resolved from the pending path on first access.
    pub fn image(&self, resolver: &dyn ImageResolver) -> Option<&ImageHandle> {
        self.image.resolve(resolver)
    }

    /// Replaces the image with a ready handle; notifies only on change.
    pub fn set_image(&mut self, handle: Option<ImageHandle>) -> bool {
        let changed = self.image.set_image(handle);
        if changed {
            self.observers.notify(PROPERTY_IMAGE);
        }
        changed
    }

    /// Points the image at a new relative path. Always notifies.
    pub fn set_image_path(&mut self, path: impl Into<String>) {
        self.image.set_path(path);
        self.observers.notify(PROPERTY_IMAGE);
    }
}

impl NotifyPropertyChanged for EntryMeta {
    fn property_observers(&self) -> &PropertyObservers {
        &self.observers
    }

    fn property_observers_mut(&mut self) -> &mut PropertyObservers {
        &mut self.observers
    }
}

impl Display for EntryMeta {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}

/// Read access to the shared fields of groups and items.
pub trait Entry {
    fn meta(&self) -> &EntryMeta;
    fn meta_mut(&mut self) -> &mut EntryMeta;

    fn unique_id(&self) -> &str {
        self.meta().unique_id()
    }

    fn title(&self) -> &str {
        self.meta().title()
    }

    fn subtitle(&self) -> &str {
        self.meta().subtitle()
    }

    fn description(&self) -> &str {
        self.meta().description()
    }
}
