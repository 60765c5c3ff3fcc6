//! Lazily resolved image references.
//!
//! # Responsibility
//! - Keep the relative asset path an entity was created with.
//! - Resolve that path into a renderable handle on first access only.
//!
//! # Invariants
//! - The slot is in exactly one of three states: empty, pending path, or
//!   resolved handle (optionally remembering the path it came from).
//! - Setting a new path or image always discards the cached handle.

use log::warn;
use once_cell::sync::OnceCell;
use url::Url;

/// Base location of packaged application assets.
pub const DEFAULT_ASSET_BASE_URI: &str = "ms-appx:///";

/// Renderable image handle handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    uri: Url,
}

impl ImageHandle {
    pub fn new(uri: Url) -> Self {
        Self { uri }
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }
}

/// Turns a relative asset path into an image handle.
pub trait ImageResolver: Send + Sync {
    fn resolve(&self, path: &str) -> Option<ImageHandle>;
}

/// Resolver that joins relative paths onto a fixed base URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriImageResolver {
    base: Url,
}

impl UriImageResolver {
    pub fn new(base: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base: Url::parse(base)?,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}

impl ImageResolver for UriImageResolver {
    fn resolve(&self, path: &str) -> Option<ImageHandle> {
        match self.base.join(path) {
            Ok(uri) => Some(ImageHandle::new(uri)),
            Err(err) => {
                warn!("event=image_resolve module=model status=error error={err}");
                None
            }
        }
    }
}

/// `{pending path, cached handle}` state behind an entity's image.
#[derive(Debug, Clone, Default)]
pub struct ImageSlot {
    pending_path: Option<String>,
    cached: OnceCell<ImageHandle>,
}

impl ImageSlot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            pending_path: Some(path.into()),
            cached: OnceCell::new(),
        }
    }

    pub fn pending_path(&self) -> Option<&str> {
        self.pending_path.as_deref()
    }

    pub fn is_resolved(&self) -> bool {
        self.cached.get().is_some()
    }

    /// Returns the cached handle, resolving the pending path on first use.
    pub fn resolve(&self, resolver: &dyn ImageResolver) -> Option<&ImageHandle> {
        if let Some(handle) = self.cached.get() {
            return Some(handle);
        }
        let path = self.pending_path.as_deref()?;
        let handle = resolver.resolve(path)?;
        Some(self.cached.get_or_init(|| handle))
    }

    /// Points the slot at a new path and drops any cached handle.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.cached = OnceCell::new();
        self.pending_path = Some(path.into());
    }

    /// Stores a ready handle (or none) and forgets the pending path.
    ///
    /// Returns whether the visible image changed.
    pub fn set_image(&mut self, handle: Option<ImageHandle>) -> bool {
        let had_path = self.pending_path.take().is_some();
        let changed = self.cached.get() != handle.as_ref() || (had_path && handle.is_none());
        self.cached = match handle {
            Some(handle) => OnceCell::with_value(handle),
            None => OnceCell::new(),
        };
        changed
    }
}
