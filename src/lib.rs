//! # unusual-effects
//!
//! Lookup and enrichment for Team Fortress 2 Unusual effects.
//!
//! ## Design Principles
//!
//! 1. **Immutable Catalog**: `EffectCatalog` is built once and only read
//!    afterwards. The bundled catalog lives for the whole process; tests
//!    and callers can build their own from JSON.
//!
//! 2. **Absence Is Not an Error**: Unknown ids and names come back as
//!    `None`. Only malformed input (wrong type, incomplete item record)
//!    produces a [`LookupError`].
//!
//! 3. **Explicit Variants**: Names shared by team-colored effects resolve
//!    to [`EffectIds::Variants`], never to a bare list that callers might
//!    format into a URL.
//!
//! ## Modules
//!
//! - `effects`: Effect ids, definitions, and the catalog
//! - `value`: JSON value kinds and dynamic lookups
//! - `text`: Description-line and item-name helpers
//! - `images`: Particle image URLs
//! - `item`: Economy item records
//! - `resolver`: Image sets and effect extraction from items
//! - `config`: Resolver configuration
//!
//! ## Quick Start
//!
//! ```
//! use unusual_effects::{find_effect_by_id, find_effect_by_name, EffectId};
//!
//! assert_eq!(find_effect_by_id(14u32), Some("Scorching Flames"));
//! assert_eq!(find_effect_by_name("Sunbeams").map(|ids| ids.first()), Some(EffectId::new(17)));
//! assert!(find_effect_by_name("Banana Storm").is_none());
//! ```

pub mod config;
pub mod effects;
pub mod error;
pub mod images;
pub mod item;
pub mod resolver;
pub mod text;
pub mod value;

#[cfg(feature = "python")]
pub mod python;

use serde_json::Value;

pub use crate::config::{ImageSizes, NameExtraction, ResolverConfig};
pub use crate::effects::{
    CatalogBuilder, EffectCatalog, EffectDefinition, EffectId, EffectIds, EffectKey,
    EffectMetadata, EffectType, VariantIds,
};
pub use crate::error::{CatalogError, LookupError};
pub use crate::images::{EffectImages, ImageSet};
pub use crate::item::{EconItem, ItemDescription};
pub use crate::resolver::{EffectResolver, ResolvedEffect};
pub use crate::value::{is_record_value, is_text_value, ValueKind};

// Shortcuts over the bundled catalog.

fn catalog() -> &'static EffectCatalog {
    EffectCatalog::bundled()
}

/// Whether an id or name is a known effect.
pub fn is_unusual(effect: impl Into<EffectKey>) -> bool {
    catalog().is_unusual(effect)
}

/// Ids for an effect name. `None` if no effect has that name.
#[must_use]
pub fn find_effect_by_name(name: &str) -> Option<&'static EffectIds> {
    catalog().find_effect_by_name(name)
}

/// Name for an effect id. `None` if no effect has that id.
pub fn find_effect_by_id(id: impl Into<EffectId>) -> Option<&'static str> {
    catalog().find_effect_by_id(id.into())
}

pub fn get_effect_by_id(id: impl Into<EffectId>) -> Option<&'static EffectDefinition> {
    catalog().get_effect_by_id(id.into())
}

/// Definition for a name; the first declared one for variant names.
#[must_use]
pub fn get_effect_by_name(name: &str) -> Option<&'static EffectDefinition> {
    catalog().get_effect_by_name(name)
}

/// Every bundled effect, in catalog order.
#[must_use]
pub fn get_all_effects() -> &'static [EffectDefinition] {
    catalog().all_effects()
}

#[must_use]
pub fn get_effects_by_type(effect_type: EffectType) -> Vec<&'static EffectDefinition> {
    catalog().effects_by_type(effect_type).collect()
}

#[must_use]
pub fn get_effects_by_series(series: &str) -> Vec<&'static EffectDefinition> {
    catalog().effects_by_series(series).collect()
}

/// Image URLs for an id or name, using the default image host.
pub fn get_effect_images(effect: impl Into<EffectKey>) -> Option<EffectImages> {
    EffectResolver::new(catalog()).build_image_set(effect)
}

/// Effect on an economy item given as JSON.
pub fn get_effect_from_object(item: &Value) -> Result<Option<ResolvedEffect>, LookupError> {
    EffectResolver::new(catalog()).extract_effect_from_value(item)
}
