//! Resolver configuration.
//!
//! Controls where particle images live and how an effect name is cut out
//! of an item description line. The defaults match Steam's TF2 item
//! descriptions and Backpack.tf's image host.

use serde::{Deserialize, Serialize};

use crate::text;

/// Default host path for particle images.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://backpack.tf/images/440/particles";

/// Pixel sizes of the three square particle renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSizes {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
}

impl Default for ImageSizes {
    fn default() -> Self {
        Self {
            small: 94,
            medium: 188,
            large: 380,
        }
    }
}

/// How the effect name is taken out of a description line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameExtraction {
    /// Everything after the marker, minus a leading `:` and surrounding
    /// whitespace.
    #[default]
    AfterMarker,
    /// Drop a fixed number of leading characters.
    ///
    /// `FixedOffset(18)` strips `"★ Unusual Effect: "`.
    FixedOffset(usize),
}

/// Resolver configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Base URL the image file names are appended to. Trailing slashes are
    /// ignored.
    pub image_base_url: String,

    /// Render sizes for the small/medium/large images.
    pub image_sizes: ImageSizes,

    /// Substring that marks a description line as carrying an effect.
    pub effect_marker: String,

    /// Token in an item's name that the effect name replaces.
    pub unusual_token: String,

    /// Name extraction strategy.
    pub name_extraction: NameExtraction,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            image_sizes: ImageSizes::default(),
            effect_marker: text::EFFECT_MARKER.to_string(),
            unusual_token: text::UNUSUAL_TOKEN.to_string(),
            name_extraction: NameExtraction::AfterMarker,
        }
    }
}

impl ResolverConfig {
    /// Use a different image host.
    #[must_use]
    pub fn with_image_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.image_base_url = url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_image_sizes(mut self, sizes: ImageSizes) -> Self {
        self.image_sizes = sizes;
        self
    }

    #[must_use]
    pub fn with_effect_marker(mut self, marker: impl Into<String>) -> Self {
        self.effect_marker = marker.into();
        self
    }

    #[must_use]
    pub fn with_unusual_token(mut self, token: impl Into<String>) -> Self {
        self.unusual_token = token.into();
        self
    }

    /// Set the name extraction strategy.
    #[must_use]
    pub fn with_name_extraction(mut self, extraction: NameExtraction) -> Self {
        self.name_extraction = extraction;
        self
    }
}
