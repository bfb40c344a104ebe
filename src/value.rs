//! Loosely typed input.
//!
//! Item records and lookup keys often arrive as JSON. `ValueKind` gives
//! every `serde_json::Value` exactly one kind, so a record is never
//! mistaken for a list.
//!
//! ## ValueKind
//!
//! - `Record`: JSON object
//! - `Sequence`: JSON array
//! - `Text`, `Number`, `Bool`, `Null`: scalars

use serde_json::Value;

use crate::effects::{EffectCatalog, EffectId, EffectIds};
use crate::error::LookupError;

/// Discriminant of a JSON value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Record,
    Sequence,
    Text,
    Number,
    Bool,
    Null,
}

impl ValueKind {
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => ValueKind::Record,
            Value::Array(_) => ValueKind::Sequence,
            Value::String(_) => ValueKind::Text,
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Bool,
            Value::Null => ValueKind::Null,
        }
    }

    /// Name used in error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            ValueKind::Record => "record",
            ValueKind::Sequence => "sequence",
            ValueKind::Text => "text",
            ValueKind::Number => "number",
            ValueKind::Bool => "bool",
            ValueKind::Null => "null",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

/// True iff `value` is a JSON string.
#[must_use]
pub fn is_text_value(value: &Value) -> bool {
    ValueKind::of(value) == ValueKind::Text
}

/// True iff `value` is a JSON object. Arrays are not records.
#[must_use]
pub fn is_record_value(value: &Value) -> bool {
    ValueKind::of(value) == ValueKind::Record
}

/// Read an effect id from a JSON number or numeric string.
///
/// Numbers that can never be ids (negative, fractional, beyond `u32`)
/// are `Ok(None)`. Non-numeric text and other kinds are `InvalidArgument`.
pub fn effect_id_from_value(value: &Value) -> Result<Option<EffectId>, LookupError> {
    match value {
        Value::Number(n) => Ok(n.as_f64().and_then(EffectId::from_number)),
        Value::String(s) => EffectId::from_text(s),
        other => Err(LookupError::invalid("a number", ValueKind::of(other).describe())),
    }
}

impl EffectCatalog {
    /// [`is_unusual`](Self::is_unusual) over JSON. Values that are neither
    /// numbers nor strings are never effects.
    #[must_use]
    pub fn is_unusual_value(&self, value: &Value) -> bool {
        match value {
            Value::String(s) => self.is_unusual(s.as_str()),
            Value::Number(_) => {
                matches!(effect_id_from_value(value), Ok(Some(id)) if self.is_unusual(id))
            }
            _ => false,
        }
    }

    /// [`find_effect_by_name`](Self::find_effect_by_name) over JSON.
    ///
    /// Fails with `InvalidArgument` unless `value` is a string.
    pub fn find_effect_by_name_value(
        &self,
        value: &Value,
    ) -> Result<Option<&EffectIds>, LookupError> {
        match value {
            Value::String(name) => Ok(self.find_effect_by_name(name)),
            other => Err(LookupError::invalid("text", ValueKind::of(other).describe())),
        }
    }

    /// [`find_effect_by_id`](Self::find_effect_by_id) over JSON.
    ///
    /// Accepts a number or numeric text; anything else is `InvalidArgument`.
    pub fn find_effect_by_id_value(&self, value: &Value) -> Result<Option<&str>, LookupError> {
        Ok(effect_id_from_value(value)?.and_then(|id| self.find_effect_by_id(id)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_value_kind_separates_records_and_lists() {
        assert_eq!(ValueKind::of(&json!({})), ValueKind::Record);
        assert_eq!(ValueKind::of(&json!([])), ValueKind::Sequence);
        assert!(is_record_value(&json!({"a": 1})));
        assert!(!is_record_value(&json!([1, 2])));
        assert!(!is_record_value(&Value::Null));
    }

    #[test]
    fn test_is_text_value() {
        assert!(is_text_value(&json!("Sunbeams")));
        assert!(!is_text_value(&json!(17)));
        assert!(!is_text_value(&json!(["Sunbeams"])));
    }

    #[test]
    fn test_effect_id_from_value() {
        assert_eq!(effect_id_from_value(&json!(14)), Ok(Some(EffectId::new(14))));
        assert_eq!(effect_id_from_value(&json!("14")), Ok(Some(EffectId::new(14))));
        assert_eq!(effect_id_from_value(&json!(14.0)), Ok(Some(EffectId::new(14))));
        assert!(effect_id_from_value(&json!("Sunbeams")).is_err());
        assert!(matches!(
            effect_id_from_value(&json!(true)),
            Err(LookupError::InvalidArgument { found, .. }) if found == "bool"
        ));
    }

    #[test]
    fn test_dynamic_lookups() {
        let catalog = EffectCatalog::bundled();

        assert!(catalog.is_unusual_value(&json!(17)));
        assert!(catalog.is_unusual_value(&json!("Sunbeams")));
        assert!(!catalog.is_unusual_value(&json!({"id": 17})));

        assert_eq!(
            catalog.find_effect_by_id_value(&json!("14")).unwrap(),
            Some("Scorching Flames")
        );
        assert_eq!(catalog.find_effect_by_id_value(&json!(99999)).unwrap(), None);
        assert!(catalog.find_effect_by_name_value(&json!(17)).is_err());
        assert_eq!(catalog.find_effect_by_name_value(&json!("Banana Storm")).unwrap(), None);
    }

    /// Numbers that can never be ids are absent rather than errors.
    #[test]
    fn test_out_of_range_ids_are_absent() {
        let catalog = EffectCatalog::bundled();

        assert!(catalog.is_unusual_value(&json!(17.0)));
        assert_eq!(catalog.find_effect_by_id_value(&json!(17.0)), Ok(Some("Sunbeams")));

        for value in [json!(-1), json!(1.5), json!(5_000_000_000u64), json!("-3"), json!("1.5")] {
            assert_eq!(effect_id_from_value(&value), Ok(None), "{value}");
            assert_eq!(catalog.find_effect_by_id_value(&value), Ok(None), "{value}");
            assert!(!catalog.is_unusual_value(&value), "{value}");
        }

        assert!(matches!(
            catalog.find_effect_by_id_value(&json!("Sunbeams")),
            Err(LookupError::InvalidArgument { .. })
        ));
    }
}
