//! Economy item records supplied by callers.
//!
//! Items come from Steam inventory or trade-offer APIs, which this crate
//! never calls. Only the two fields needed for effect extraction are read;
//! everything else on the record is ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LookupError;
use crate::value::ValueKind;

/// One line of an item's description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescription {
    /// Text of the line.
    #[serde(default)]
    pub value: String,

    /// Hex color Steam renders the line in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ItemDescription {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    fn from_value(index: usize, value: &Value) -> Result<Self, LookupError> {
        let Value::Object(fields) = value else {
            return Err(LookupError::malformed(format!(
                "description {index} is a {}, not a record",
                ValueKind::of(value)
            )));
        };
        Ok(Self {
            value: text_field(fields, "value").unwrap_or_default().to_string(),
            color: text_field(fields, "color").map(str::to_string),
        })
    }
}

/// The parts of an economy item used for effect extraction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconItem {
    /// Market hash name, e.g. `"Unusual Team Captain"`.
    pub market_hash_name: String,

    /// Description lines in display order.
    #[serde(default)]
    pub descriptions: Vec<ItemDescription>,
}

impl EconItem {
    pub fn new(market_hash_name: impl Into<String>) -> Self {
        Self {
            market_hash_name: market_hash_name.into(),
            descriptions: Vec::new(),
        }
    }

    /// Append a description line (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: ItemDescription) -> Self {
        self.descriptions.push(description);
        self
    }

    /// Read an item from arbitrary JSON.
    ///
    /// - not a record: `InvalidArgument`
    /// - `descriptions` missing or not a list: `MalformedInput`
    /// - `market_hash_name` missing or not text: `MalformedInput`
    /// - a description entry that is not a record: `MalformedInput`
    pub fn from_value(value: &Value) -> Result<Self, LookupError> {
        let fields = item_fields(value)?;
        let descriptions = description_list(fields)?;
        let market_hash_name = text_field(fields, "market_hash_name")
            .ok_or_else(|| LookupError::malformed("item is missing its market_hash_name"))?;

        let descriptions = descriptions
            .iter()
            .enumerate()
            .map(|(i, d)| ItemDescription::from_value(i, d))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            market_hash_name: market_hash_name.to_string(),
            descriptions,
        })
    }
}

pub(crate) fn item_fields(value: &Value) -> Result<&Map<String, Value>, LookupError> {
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(LookupError::invalid("an item record", ValueKind::of(other).describe())),
    }
}

pub(crate) fn description_list(fields: &Map<String, Value>) -> Result<&[Value], LookupError> {
    match fields.get("descriptions") {
        Some(Value::Array(lines)) => Ok(lines.as_slice()),
        Some(other) => Err(LookupError::malformed(format!(
            "item descriptions is a {}, not a sequence",
            ValueKind::of(other)
        ))),
        None => Err(LookupError::malformed("item is missing its descriptions")),
    }
}

fn text_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}
