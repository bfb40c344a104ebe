//! Particle image URLs.
//!
//! Images are addressed purely by effect id and size; nothing here
//! touches the network.

use serde::{Deserialize, Serialize};

use crate::config::ResolverConfig;
use crate::effects::EffectId;

/// URLs for the three particle renders of one effect.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSet {
    pub small: String,
    pub medium: String,
    pub large: String,
}

impl ImageSet {
    /// Build the URLs for `id` under the configured host and sizes.
    ///
    /// Trailing slashes on the host are ignored, however the config was
    /// built.
    #[must_use]
    pub fn for_effect(id: EffectId, config: &ResolverConfig) -> Self {
        let base = config.image_base_url.trim_end_matches('/');
        let sizes = config.image_sizes;
        Self {
            small: particle_url(base, id, sizes.small),
            medium: particle_url(base, id, sizes.medium),
            large: particle_url(base, id, sizes.large),
        }
    }

    /// Iterate small, medium, large.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [self.small.as_str(), self.medium.as_str(), self.large.as_str()].into_iter()
    }
}

fn particle_url(base: &str, id: EffectId, size: u32) -> String {
    format!("{base}/{}_{size}x{size}.png", id.raw())
}

/// An effect's id and name together with its image URLs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectImages {
    pub id: EffectId,
    pub name: String,
    pub images: ImageSet,
}
