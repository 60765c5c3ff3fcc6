//! Runtime configuration for the catalog context.
//!
//! # Responsibility
//! - Carry the tunables of the top-items view, the placeholder generator
//!   and image resolution.
//! - Parse overrides from JSON and reject values that would break
//!   catalog invariants.
//!
//! # Invariants
//! - Missing fields fall back to the documented defaults.
//! - A validated config always yields a non-empty top-items window and at
//!   least one generated paragraph.

use crate::model::image::DEFAULT_ASSET_BASE_URI;
use crate::placeholder::generator::DEFAULT_PARAGRAPH_COUNT;
use crate::view::top_items::DEFAULT_TOP_ITEMS_LIMIT;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use url::Url;

/// Catalog context configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// Maximum number of items mirrored into each group's top-items view.
    pub top_items_limit: usize,
    /// Paragraphs per generated content block.
    pub paragraph_count: usize,
    /// Draw from the whole fragment table instead of `[0, len - 1)`.
    pub full_fragment_range: bool,
    /// Base URI that relative image paths are joined onto.
    pub asset_base_uri: String,
    /// Fixed RNG seed for reproducible content; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            top_items_limit: DEFAULT_TOP_ITEMS_LIMIT,
            paragraph_count: DEFAULT_PARAGRAPH_COUNT,
            full_fragment_range: false,
            asset_base_uri: DEFAULT_ASSET_BASE_URI.to_string(),
            seed: None,
        }
    }
}

/// Configuration parse and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    InvalidTopItemsLimit,
    InvalidParagraphCount,
    InvalidAssetBase(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid config json: {message}"),
            Self::InvalidTopItemsLimit => write!(f, "top_items_limit must be greater than 0"),
            Self::InvalidParagraphCount => write!(f, "paragraph_count must be greater than 0"),
            Self::InvalidAssetBase(message) => write!(f, "asset_base_uri is invalid: {message}"),
        }
    }
}

impl Error for ConfigError {}

impl CoreConfig {
    /// Parses and validates a JSON object; absent fields keep defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_items_limit == 0 {
            return Err(ConfigError::InvalidTopItemsLimit);
        }
        if self.paragraph_count == 0 {
            return Err(ConfigError::InvalidParagraphCount);
        }
        let base = Url::parse(self.asset_base_uri.trim())
            .map_err(|err| ConfigError::InvalidAssetBase(err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::InvalidAssetBase(format!(
                "`{}` cannot be used as a base",
                self.asset_base_uri
            )));
        }
        Ok(())
    }
}
