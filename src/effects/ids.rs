//! Lookup keys and name-lookup results.
//!
//! A handful of effect names are shared by two team-colored variants, so
//! a name lookup yields either one id or an ordered list of ids.

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use super::definition::EffectId;

/// Ids matching a single effect name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EffectIds {
    /// The usual case: one name, one id.
    Single(EffectId),
    /// Variant name: every id in catalog declaration order.
    Variants(VariantIds),
}

impl EffectIds {
    /// The representative id: the only one, or the first declared variant.
    #[must_use]
    pub fn first(&self) -> EffectId {
        match self {
            EffectIds::Single(id) => *id,
            EffectIds::Variants(ids) => ids.first(),
        }
    }

    /// All ids as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[EffectId] {
        match self {
            EffectIds::Single(id) => std::slice::from_ref(id),
            EffectIds::Variants(ids) => ids.as_slice(),
        }
    }

    #[must_use]
    pub fn is_variant(&self) -> bool {
        matches!(self, EffectIds::Variants(_))
    }

    #[must_use]
    pub fn contains(&self, id: EffectId) -> bool {
        self.as_slice().contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add another id for the same name.
    pub(crate) fn push(&mut self, id: EffectId) {
        match self {
            EffectIds::Single(existing) => {
                *self = EffectIds::Variants(VariantIds::new(*existing, id));
            }
            EffectIds::Variants(ids) => ids.ids.push(id),
        }
    }
}

/// Two or more ids sharing one name, in declaration order.
///
/// Never holds fewer than two ids: it is built from a pair and only grows,
/// and deserializing a shorter list fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariantIds {
    ids: SmallVec<[EffectId; 2]>,
}

impl VariantIds {
    #[must_use]
    pub fn new(first: EffectId, second: EffectId) -> Self {
        let mut ids = SmallVec::new();
        ids.push(first);
        ids.push(second);
        Self { ids }
    }

    /// The first declared variant.
    #[must_use]
    pub fn first(&self) -> EffectId {
        self.ids[0]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[EffectId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = EffectId> + '_ {
        self.ids.iter().copied()
    }
}

impl<'de> Deserialize<'de> for VariantIds {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = SmallVec::<[EffectId; 2]>::deserialize(deserializer)?;
        if ids.len() < 2 {
            return Err(<D::Error as serde::de::Error>::invalid_length(
                ids.len(),
                &"at least two effect ids",
            ));
        }
        Ok(Self { ids })
    }
}

/// Key for checking whether something is a known effect.
///
/// Text that parses as a number is treated as an id, matching how ids
/// arrive from web APIs as strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EffectKey {
    Id(EffectId),
    Name(String),
}

impl From<EffectId> for EffectKey {
    fn from(id: EffectId) -> Self {
        EffectKey::Id(id)
    }
}

impl From<u32> for EffectKey {
    fn from(id: u32) -> Self {
        EffectKey::Id(EffectId::new(id))
    }
}

impl From<&str> for EffectKey {
    fn from(s: &str) -> Self {
        match s.parse::<EffectId>() {
            Ok(id) => EffectKey::Id(id),
            Err(_) => EffectKey::Name(s.to_string()),
        }
    }
}

impl From<String> for EffectKey {
    fn from(s: String) -> Self {
        match s.parse::<EffectId>() {
            Ok(id) => EffectKey::Id(id),
            Err(_) => EffectKey::Name(s),
        }
    }
}

impl From<&String> for EffectKey {
    fn from(s: &String) -> Self {
        EffectKey::from(s.as_str())
    }
}
