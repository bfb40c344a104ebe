//! Effect definitions - static catalog data.
//!
//! `EffectDefinition` holds the immutable properties of one Unusual
//! effect: its id, display name, the kind of item it appears on, and the
//! release batch it shipped with. Release metadata is carried through
//! untouched.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Unique identifier for an Unusual effect.
///
/// These are the particle ids used by the game and by Backpack.tf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectId(pub u32);

impl EffectId {
    /// Create a new effect ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Interpret a number as an id.
    ///
    /// Integral values in `u32` range are ids, so `17.0` is `Effect(17)`.
    /// Anything else (negative, fractional, too large, not finite) is a
    /// number that can never name an effect and yields `None`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_number(n: f64) -> Option<Self> {
        if n.is_finite() && n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n) {
            // Range and integrality are checked above.
            Some(Self(n as u32))
        } else {
            None
        }
    }

    /// Interpret text as an id.
    ///
    /// Numeric text that cannot be an id (`"-3"`, `"1.5"`, `"5000000000"`)
    /// yields `Ok(None)`. Text that is not a number at all is
    /// `InvalidArgument`.
    pub fn from_text(s: &str) -> Result<Option<Self>, LookupError> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u32>() {
            return Ok(Some(Self(id)));
        }
        match trimmed.parse::<f64>() {
            Ok(n) if !n.is_nan() => Ok(Self::from_number(n)),
            _ => Err(LookupError::invalid("a number", format!("{s:?}"))),
        }
    }
}

impl std::fmt::Display for EffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect({})", self.0)
    }
}

impl From<u32> for EffectId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for EffectId {
    type Err = LookupError;

    /// Parse a numeric id, ignoring surrounding whitespace.
    ///
    /// Numbers that cannot be ids are rejected; use [`EffectId::from_text`]
    /// to tell those apart from non-numeric text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)?.ok_or_else(|| LookupError::invalid("an effect id", format!("{s:?}")))
    }
}

/// Kind of item an effect can appear on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectType {
    /// Hats and other cosmetics.
    Cosmetic,
    /// Weapons (Australium-era "Unusual" weapons).
    Weapon,
    /// Taunts.
    Taunt,
}

impl EffectType {
    pub const ALL: [EffectType; 3] = [EffectType::Cosmetic, EffectType::Weapon, EffectType::Taunt];

    /// The tag used in catalog data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EffectType::Cosmetic => "cosmetic",
            EffectType::Weapon => "weapon",
            EffectType::Taunt => "taunt",
        }
    }
}

impl std::fmt::Display for EffectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectType {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EffectType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LookupError::invalid("an effect type", format!("{s:?}")))
    }
}

/// Release bookkeeping. Opaque to lookups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectMetadata {
    /// Release date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released: Option<String>,

    /// Name of the game update that introduced the effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,

    /// When the record was last touched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

/// Static effect definition.
///
/// ## Example
///
/// ```
/// use unusual_effects::effects::{EffectDefinition, EffectId, EffectType};
///
/// let sunbeams = EffectDefinition::new(EffectId::new(17), "Sunbeams", EffectType::Cosmetic)
///     .with_series("Series 1");
///
/// assert_eq!(sunbeams.series, "Series 1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectDefinition {
    /// Unique particle id.
    pub id: EffectId,

    /// Display name, exactly as it appears in item descriptions.
    pub name: String,

    /// Kind of item the effect appears on.
    #[serde(rename = "type")]
    pub effect_type: EffectType,

    /// Release batch label.
    #[serde(default)]
    pub series: String,

    #[serde(flatten)]
    pub metadata: EffectMetadata,
}

impl EffectDefinition {
    /// Create a new effect definition.
    #[must_use]
    pub fn new(id: EffectId, name: impl Into<String>, effect_type: EffectType) -> Self {
        Self {
            id,
            name: name.into(),
            effect_type,
            series: String::new(),
            metadata: EffectMetadata::default(),
        }
    }

    /// Set the release batch (builder pattern).
    #[must_use]
    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series = series.into();
        self
    }

    /// Set the release metadata (builder pattern).
    #[must_use]
    pub fn with_metadata(mut self, metadata: EffectMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}
