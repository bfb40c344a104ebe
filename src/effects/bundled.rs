//! The effect catalog shipped with the crate.

use std::sync::OnceLock;

use super::registry::EffectCatalog;

const BUNDLED_EFFECTS: &str = include_str!("../../data/effects.json");

static BUNDLED: OnceLock<EffectCatalog> = OnceLock::new();

impl EffectCatalog {
    /// The bundled catalog, parsed on first use and kept for the life of
    /// the process.
    ///
    /// Panics if the bundled data is invalid, which the test suite rules out.
    pub fn bundled() -> &'static EffectCatalog {
        BUNDLED.get_or_init(|| {
            EffectCatalog::from_json(BUNDLED_EFFECTS).expect("bundled effect catalog is invalid")
        })
    }
}
