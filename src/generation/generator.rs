use geo::Coord;
use log::debug;
use rand::Rng;

use crate::domain::EntityKind;
use crate::generation::region::Region;

/// One synthesizer per entity kind.
///
/// Implementations are stateless and infallible: the output depends only on
/// the origin, the region and whatever `rng` yields.
pub trait EntityGenerator {
    type Entity;

    const KIND: EntityKind;

    /// Builds a single entity jittered around `origin`.
    fn generate_one<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        origin: Coord,
        region: Region,
    ) -> Self::Entity;

    /// Builds exactly `count` entities.
    fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        origin: Coord,
        region: Region,
        count: usize,
    ) -> Vec<Self::Entity> {
        debug!(
            "Generating {} {} entities around ({}, {}) in the {} region",
            count,
            Self::KIND.as_str(),
            origin.y,
            origin.x,
            region
        );
        (0..count)
            .map(|_| self.generate_one(rng, origin, region))
            .collect()
    }
}
