//! Error types.
//!
//! Only malformed input is an error. A well-formed key that matches no
//! effect is reported as `None` by the lookup functions.

use thiserror::Error;

use crate::effects::EffectId;

/// Error raised by a lookup or extraction call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    /// A value of the wrong primitive type was supplied.
    #[error("expected {expected} but received {found}")]
    InvalidArgument {
        /// What the operation needed ("text", "a number", ...).
        expected: &'static str,
        /// What it got instead.
        found: String,
    },
    /// An item record has the right shape but is missing required fields.
    #[error("malformed item record: {0}")]
    MalformedInput(String),
}

impl LookupError {
    pub(crate) fn invalid(expected: &'static str, found: impl Into<String>) -> Self {
        LookupError::InvalidArgument {
            expected,
            found: found.into(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        LookupError::MalformedInput(reason.into())
    }
}

/// Error raised while building an [`EffectCatalog`](crate::effects::EffectCatalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse effect catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("effect id 0 is reserved")]
    ZeroId,
    #[error("{0} is already registered")]
    DuplicateId(EffectId),
    #[error("{0} has an empty name")]
    EmptyName(EffectId),
}
