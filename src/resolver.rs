//! Effect resolution - turning ids, names, and items into display data.
//!
//! The `EffectResolver` pairs a catalog with a [`ResolverConfig`] and
//! builds image sets and standardized names from it. Nothing is cached;
//! every call builds fresh values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ResolverConfig;
use crate::effects::{EffectCatalog, EffectDefinition, EffectId, EffectKey, EffectType};
use crate::error::LookupError;
use crate::images::{EffectImages, ImageSet};
use crate::item::{self, EconItem};
use crate::text;

/// Effect found on an item, with the item's standardized name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEffect {
    pub id: EffectId,
    pub name: String,
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    pub series: String,
    pub images: ImageSet,
    /// Item name with "Unusual" replaced by the effect name.
    pub standardized_name: String,
}

/// Builds display data from a catalog.
///
/// ## Example
///
/// ```
/// use unusual_effects::{EffectCatalog, EffectResolver};
///
/// let resolver = EffectResolver::new(EffectCatalog::bundled());
/// let bonzo = resolver.build_image_set("Bonzo The All-Gnawing").unwrap();
///
/// assert_eq!(bonzo.id.raw(), 81);
/// assert!(bonzo.images.small.ends_with("81_94x94.png"));
/// ```
#[derive(Clone, Debug)]
pub struct EffectResolver<'c> {
    catalog: &'c EffectCatalog,
    config: ResolverConfig,
}

impl<'c> EffectResolver<'c> {
    /// Create a resolver with the default configuration.
    #[must_use]
    pub fn new(catalog: &'c EffectCatalog) -> Self {
        Self::with_config(catalog, ResolverConfig::default())
    }

    #[must_use]
    pub fn with_config(catalog: &'c EffectCatalog, config: ResolverConfig) -> Self {
        Self { catalog, config }
    }

    #[must_use]
    pub fn catalog(&self) -> &'c EffectCatalog {
        self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Image URLs for an effect given by id or name.
    ///
    /// A variant name uses its first declared id, so the URL always names
    /// exactly one particle.
    pub fn build_image_set(&self, effect: impl Into<EffectKey>) -> Option<EffectImages> {
        let definition = self.catalog.resolve(&effect.into())?;
        tracing::trace!(id = definition.id.raw(), name = %definition.name, "building image set");
        Some(self.images_for(definition))
    }

    fn images_for(&self, definition: &EffectDefinition) -> EffectImages {
        EffectImages {
            id: definition.id,
            name: definition.name.clone(),
            images: ImageSet::for_effect(definition.id, &self.config),
        }
    }

    /// Find the Unusual effect on an item.
    ///
    /// Scans descriptions in order and returns the first line that names a
    /// known effect. Lines with the marker but an unknown name are skipped.
    /// Returns `None` for items that are not Unusual.
    #[must_use]
    pub fn extract_effect(&self, item: &EconItem) -> Option<ResolvedEffect> {
        if !text::has_token(&item.market_hash_name, &self.config.unusual_token) {
            return None;
        }
        item.descriptions
            .iter()
            .find_map(|line| self.resolve_line(&line.value, &item.market_hash_name))
    }

    /// [`extract_effect`](Self::extract_effect) over raw JSON.
    ///
    /// An empty description list yields `Ok(None)` before the name is
    /// checked; see [`EconItem::from_value`] for the errors.
    pub fn extract_effect_from_value(
        &self,
        value: &Value,
    ) -> Result<Option<ResolvedEffect>, LookupError> {
        let fields = item::item_fields(value)?;
        if item::description_list(fields)?.is_empty() {
            return Ok(None);
        }
        let item = EconItem::from_value(value)?;
        Ok(self.extract_effect(&item))
    }

    fn resolve_line(&self, line: &str, item_name: &str) -> Option<ResolvedEffect> {
        let marker = self.config.effect_marker.as_str();
        if !text::contains_marker(line, marker) {
            return None;
        }
        let name = text::extract_effect_name(line, marker, self.config.name_extraction)?;
        let Some(definition) = self.catalog.get_effect_by_name(name) else {
            tracing::debug!(line, name, "description names an unknown effect");
            return None;
        };

        let EffectImages { id, name, images } = self.images_for(definition);
        let standardized_name =
            text::standardized_name(item_name, &self.config.unusual_token, &name);
        Some(ResolvedEffect {
            id,
            name,
            effect_type: definition.effect_type,
            series: definition.series.clone(),
            images,
            standardized_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::NameExtraction;
    use crate::item::ItemDescription;

    fn captain(lines: &[&str]) -> EconItem {
        lines.iter().fold(EconItem::new("Unusual Team Captain"), |item, line| {
            item.with_description(ItemDescription::new(*line))
        })
    }

    #[test]
    fn test_build_image_set_by_name_and_id() {
        let resolver = EffectResolver::new(EffectCatalog::bundled());

        let by_name = resolver.build_image_set("Sunbeams").unwrap();
        let by_id = resolver.build_image_set(17u32).unwrap();
        assert_eq!(by_name, by_id);
        assert_eq!(by_name.name, "Sunbeams");

        assert!(resolver.build_image_set("Banana Storm").is_none());
        assert!(resolver.build_image_set(99999u32).is_none());
    }

    #[test]
    fn test_build_image_set_variant_uses_first_id() {
        let resolver = EffectResolver::new(EffectCatalog::bundled());
        let set = resolver.build_image_set("Showstopper").unwrap();

        assert_eq!(set.id, EffectId::new(3001));
        assert!(set.images.medium.ends_with("/3001_188x188.png"));
    }

    #[test]
    fn test_extract_effect() {
        let resolver = EffectResolver::new(EffectCatalog::bundled());
        let item = captain(&["Paint Color: Team Spirit", "★ Unusual Effect: Sunbeams"]);

        let effect = resolver.extract_effect(&item).unwrap();
        assert_eq!(effect.id, EffectId::new(17));
        assert_eq!(effect.standardized_name, "Sunbeams Team Captain");
        assert_eq!(effect.effect_type, EffectType::Cosmetic);
    }

    #[test]
    fn test_extract_skips_unknown_effect_lines() {
        let resolver = EffectResolver::new(EffectCatalog::bundled());
        let item = captain(&["★ Unusual Effect: Banana Storm", "★ Unusual Effect: Hellfire"]);

        let effect = resolver.extract_effect(&item).unwrap();
        assert_eq!(effect.name, "Hellfire");
    }

    #[test]
    fn test_extract_requires_unusual_name() {
        let resolver = EffectResolver::new(EffectCatalog::bundled());
        let item = EconItem::new("Strange Team Captain")
            .with_description(ItemDescription::new("★ Unusual Effect: Sunbeams"));

        assert!(resolver.extract_effect(&item).is_none());
    }

    #[test]
    fn test_extract_with_fixed_offset() {
        let config =
            ResolverConfig::default().with_name_extraction(NameExtraction::FixedOffset(18));
        let resolver = EffectResolver::with_config(EffectCatalog::bundled(), config);

        let item = captain(&["★ Unusual Effect: Nebula"]);
        assert_eq!(resolver.extract_effect(&item).unwrap().id, EffectId::new(99));
    }

    /// A configured marker and token replace the defaults everywhere.
    #[test]
    fn test_extract_with_custom_marker_and_token() {
        let config = ResolverConfig::default()
            .with_effect_marker("Effet inhabituel")
            .with_unusual_token("Inhabituel");
        let resolver = EffectResolver::with_config(EffectCatalog::bundled(), config);

        let localized = EconItem::new("Inhabituel Team Captain")
            .with_description(ItemDescription::new("★ Effet inhabituel : Sunbeams"));
        let effect = resolver.extract_effect(&localized).unwrap();
        assert_eq!(effect.id, EffectId::new(17));
        assert_eq!(effect.standardized_name, "Sunbeams Team Captain");

        // The default marker and token no longer match.
        assert!(resolver.extract_effect(&captain(&["★ Unusual Effect: Sunbeams"])).is_none());
    }

    #[test]
    fn test_extract_from_value_empty_descriptions() {
        let resolver = EffectResolver::new(EffectCatalog::bundled());
        let result = resolver.extract_effect_from_value(&json!({"descriptions": []}));
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_extract_from_value_errors() {
        let resolver = EffectResolver::new(EffectCatalog::bundled());

        assert!(matches!(
            resolver.extract_effect_from_value(&json!([])),
            Err(LookupError::InvalidArgument { .. })
        ));
        assert!(matches!(
            resolver.extract_effect_from_value(&json!({"market_hash_name": "Unusual Hat"})),
            Err(LookupError::MalformedInput(_))
        ));
        assert!(matches!(
            resolver.extract_effect_from_value(&json!({"descriptions": [{"value": "x"}]})),
            Err(LookupError::MalformedInput(_))
        ));
    }
}
