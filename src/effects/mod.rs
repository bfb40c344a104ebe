//! Effect catalog: definitions, lookup keys, and the catalog itself.
//!
//! ## Key Types
//!
//! - `EffectId`: Particle id of an effect
//! - `EffectType`: Kind of item the effect appears on
//! - `EffectDefinition`: Static effect data
//! - `EffectIds`: Result of a name lookup (one id or team variants)
//! - `EffectKey`: An id or a name
//! - `EffectCatalog`: Immutable id/name lookup
//!
//! ## Variants
//!
//! A few names (`Showstopper`, for one) belong to a RED and a BLU
//! effect. Name lookups return [`EffectIds::Variants`] for them; id
//! lookups always return one name.

mod bundled;
pub mod definition;
pub mod ids;
pub mod registry;

pub use definition::{EffectDefinition, EffectId, EffectMetadata, EffectType};
pub use ids::{EffectIds, EffectKey, VariantIds};
pub use registry::{CatalogBuilder, EffectCatalog};
