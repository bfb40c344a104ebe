//! Effect catalog for id and name lookup.
//!
//! `CatalogBuilder` collects definitions and checks them; `build` turns it
//! into an `EffectCatalog`, which has no mutating methods. Every id maps to
//! exactly one name. A name maps to one id, or to several ids in
//! declaration order for team-colored variants.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::CatalogError;

use super::definition::{EffectDefinition, EffectId, EffectType};
use super::ids::{EffectIds, EffectKey};

/// Collects effect definitions before freezing them into a catalog.
///
/// ## Example
///
/// ```
/// use unusual_effects::effects::{CatalogBuilder, EffectDefinition, EffectId, EffectType};
///
/// let mut builder = CatalogBuilder::new();
/// builder
///     .register(EffectDefinition::new(EffectId::new(17), "Sunbeams", EffectType::Cosmetic))
///     .unwrap();
///
/// let catalog = builder.build();
/// assert_eq!(catalog.find_effect_by_id(EffectId::new(17)), Some("Sunbeams"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    effects: Vec<EffectDefinition>,
    by_id: FxHashMap<EffectId, usize>,
}

impl CatalogBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an effect definition.
    ///
    /// Fails on id 0, an empty name, or an id that is already registered.
    pub fn register(&mut self, effect: EffectDefinition) -> Result<&mut Self, CatalogError> {
        if effect.id.raw() == 0 {
            return Err(CatalogError::ZeroId);
        }
        if effect.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(effect.id));
        }
        if self.by_id.contains_key(&effect.id) {
            return Err(CatalogError::DuplicateId(effect.id));
        }
        self.by_id.insert(effect.id, self.effects.len());
        self.effects.push(effect);
        Ok(self)
    }

    /// Register several definitions, stopping at the first bad one.
    pub fn extend(
        &mut self,
        effects: impl IntoIterator<Item = EffectDefinition>,
    ) -> Result<&mut Self, CatalogError> {
        for effect in effects {
            self.register(effect)?;
        }
        Ok(self)
    }

    /// Freeze the definitions into a catalog.
    #[must_use]
    pub fn build(self) -> EffectCatalog {
        let mut by_name: FxHashMap<String, EffectIds> = FxHashMap::default();
        for effect in &self.effects {
            by_name
                .entry(effect.name.clone())
                .and_modify(|ids| ids.push(effect.id))
                .or_insert(EffectIds::Single(effect.id));
        }

        let variant_names = by_name.values().filter(|ids| ids.is_variant()).count();
        tracing::debug!(
            effects = self.effects.len(),
            names = by_name.len(),
            variant_names,
            "built effect catalog"
        );

        EffectCatalog {
            effects: self.effects,
            by_id: self.by_id,
            by_name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    last_modified: Option<String>,
    effects: Vec<EffectDefinition>,
}

/// Immutable catalog of Unusual effects.
///
/// Lookups never allocate on the catalog and never change it, so a
/// catalog can be shared freely across threads.
#[derive(Clone, Debug)]
pub struct EffectCatalog {
    effects: Vec<EffectDefinition>,
    by_id: FxHashMap<EffectId, usize>,
    by_name: FxHashMap<String, EffectIds>,
}

impl EffectCatalog {
    /// Parse a catalog from its JSON form.
    ///
    /// The document is `{"last_modified": ..., "effects": [...]}`. Records
    /// without their own `last_modified` inherit the file-level value.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut builder = CatalogBuilder::new();
        for mut effect in file.effects {
            if effect.metadata.last_modified.is_none() {
                effect.metadata.last_modified.clone_from(&file.last_modified);
            }
            builder.register(effect)?;
        }
        Ok(builder.build())
    }

    /// Number of effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Whether `key` names a known effect, by id or by exact name.
    pub fn is_unusual(&self, key: impl Into<EffectKey>) -> bool {
        match key.into() {
            EffectKey::Id(id) => self.by_id.contains_key(&id),
            EffectKey::Name(name) => self.by_name.contains_key(&name),
        }
    }

    /// Ids for an exact, case-sensitive effect name.
    #[must_use]
    pub fn find_effect_by_name(&self, name: &str) -> Option<&EffectIds> {
        self.by_name.get(name)
    }

    /// Name of the effect with the given id.
    #[must_use]
    pub fn find_effect_by_id(&self, id: EffectId) -> Option<&str> {
        self.get_effect_by_id(id).map(|e| e.name.as_str())
    }

    /// Full definition of the effect with the given id.
    #[must_use]
    pub fn get_effect_by_id(&self, id: EffectId) -> Option<&EffectDefinition> {
        self.by_id.get(&id).map(|&idx| &self.effects[idx])
    }

    /// Definition for a name. For variant names this is the first
    /// declared variant; see [`get_effects_by_name`](Self::get_effects_by_name).
    #[must_use]
    pub fn get_effect_by_name(&self, name: &str) -> Option<&EffectDefinition> {
        self.find_effect_by_name(name)
            .and_then(|ids| self.get_effect_by_id(ids.first()))
    }

    /// Every definition sharing a name, in declaration order.
    #[must_use]
    pub fn get_effects_by_name(&self, name: &str) -> Vec<&EffectDefinition> {
        self.find_effect_by_name(name)
            .map(|ids| {
                ids.as_slice()
                    .iter()
                    .filter_map(|&id| self.get_effect_by_id(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Resolve an id or name to a single definition.
    ///
    /// Variant names resolve to their first declared id.
    #[must_use]
    pub fn resolve(&self, key: &EffectKey) -> Option<&EffectDefinition> {
        match key {
            EffectKey::Id(id) => self.get_effect_by_id(*id),
            EffectKey::Name(name) => self.get_effect_by_name(name),
        }
    }

    /// All effects in declaration order. Each id appears once.
    #[must_use]
    pub fn all_effects(&self) -> &[EffectDefinition] {
        &self.effects
    }

    /// Iterate over all effects in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &EffectDefinition> {
        self.effects.iter()
    }

    /// Effects that appear on the given kind of item.
    pub fn effects_by_type(
        &self,
        effect_type: EffectType,
    ) -> impl Iterator<Item = &EffectDefinition> {
        self.effects.iter().filter(move |e| e.effect_type == effect_type)
    }

    /// Effects released in the given batch. Exact match.
    ///
    /// The yielded definitions borrow the catalog, not `series`.
    pub fn effects_by_series<'a, 's>(
        &'a self,
        series: &'s str,
    ) -> impl Iterator<Item = &'a EffectDefinition> + 's
    where
        'a: 's,
    {
        self.effects.iter().filter(move |e| e.series == series)
    }

    /// Find effects matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &EffectDefinition>
    where
        F: Fn(&EffectDefinition) -> bool,
    {
        self.effects.iter().filter(move |e| predicate(e))
    }
}
