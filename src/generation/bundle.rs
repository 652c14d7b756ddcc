use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::GeneratorConfig;
use crate::domain::LocationBundle;
use crate::generation::address::generate_address;
use crate::generation::generator::EntityGenerator;
use crate::generation::hotels::HotelGenerator;
use crate::generation::places::PlaceGenerator;
use crate::generation::region::Region;
use crate::generation::restaurants::RestaurantGenerator;
use crate::generation::transport::TransportGenerator;
use crate::utils::geometry::lat_lng;

pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Assembles full bundles with the configured batch sizes.
#[derive(Debug, Clone, Default)]
pub struct NearbyGenerator {
    config: GeneratorConfig,
}

impl NearbyGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a bundle around `(latitude, longitude)`.
    ///
    /// The coordinate must already have passed
    /// [`validate_coordinates`](crate::utils::geometry::validate_coordinates);
    /// this function has no failure path of its own.
    ///
    /// `radius` is accepted for interface compatibility only. Jitter uses
    /// fixed per-kind widths and ignores it.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        latitude: f64,
        longitude: f64,
        radius: f64,
    ) -> LocationBundle {
        let region = Region::from_coordinates(latitude, longitude);
        let origin = lat_lng(latitude, longitude);
        debug!(
            "Building bundle for ({}, {}) in the {} region, radius {} km not applied",
            latitude, longitude, region, radius
        );

        let location = generate_address(rng, region).into_header(latitude, longitude, region);
        let places = PlaceGenerator.generate(rng, origin, region, self.config.places);
        let hotels = HotelGenerator.generate(rng, origin, region, self.config.hotels);
        let restaurants =
            RestaurantGenerator.generate(rng, origin, region, self.config.restaurants);
        let transportation =
            TransportGenerator.generate(rng, origin, region, self.config.transportation);

        let bundle = LocationBundle {
            location,
            places,
            hotels,
            restaurants,
            transportation,
        };
        info!(
            "Generated {} entities near {}, {}",
            bundle.total_results().sum(),
            bundle.location.city,
            bundle.location.state
        );
        bundle
    }

    /// Same as [`NearbyGenerator::generate`] with a fresh `StdRng` seeded from `seed`.
    pub fn generate_seeded(
        &self,
        latitude: f64,
        longitude: f64,
        radius: f64,
        seed: u64,
    ) -> LocationBundle {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng, latitude, longitude, radius)
    }
}

/// Default-sized bundle (8 places, 6 hotels, 10 restaurants, 5 transport
/// options) using the thread-local random source.
pub fn generate_nearby_location_data(latitude: f64, longitude: f64, radius: f64) -> LocationBundle {
    NearbyGenerator::default().generate(&mut rand::thread_rng(), latitude, longitude, radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntityKind, Located};
    use crate::utils::geometry::validate_coordinates;

    fn assert_within(entity: &impl Located, kind: EntityKind, latitude: f64, longitude: f64) {
        let c = entity.coordinate().unwrap();
        let limit = kind.max_offset() + 1e-9;
        assert!((c.y - latitude).abs() <= limit, "{:?} lat {}", kind, c.y);
        assert!((c.x - longitude).abs() <= limit, "{:?} lng {}", kind, c.x);
    }

    #[test]
    fn test_srinagar_bundle() {
        let (lat, lng) = (34.0837, 74.7973);
        assert!(validate_coordinates(lat, lng));
        assert_eq!(Region::from_coordinates(lat, lng), Region::North);

        let bundle = NearbyGenerator::default().generate_seeded(lat, lng, DEFAULT_RADIUS_KM, 2024);
        assert_eq!(bundle.places.len(), 8);
        assert_eq!(bundle.total_results().places, 8);
        for place in &bundle.places {
            assert_within(place, EntityKind::Place, lat, lng);
        }
        assert_eq!(bundle.location.region, Some(Region::North));
        assert_eq!(bundle.location.latitude, lat);
        assert_eq!(bundle.location.longitude, lng);
    }

    #[test]
    fn test_default_counts_regardless_of_coordinate() {
        let generator = NearbyGenerator::default();
        let coordinates = [
            (34.0837, 74.7973),
            (12.9716, 77.5946),
            (19.076, 72.8777),
            (22.5726, 88.3639),
            (6.4, 68.7),
            (37.6, 97.25),
        ];
        for (i, (lat, lng)) in coordinates.into_iter().enumerate() {
            let bundle = generator.generate_seeded(lat, lng, DEFAULT_RADIUS_KM, i as u64);
            assert_eq!(bundle.places.len(), 8);
            assert_eq!(bundle.hotels.len(), 6);
            assert_eq!(bundle.restaurants.len(), 10);
            assert_eq!(bundle.transportation.len(), 5);

            let totals = bundle.total_results();
            assert_eq!(totals.places, bundle.places.len());
            assert_eq!(totals.hotels, bundle.hotels.len());
            assert_eq!(totals.restaurants, bundle.restaurants.len());
            assert_eq!(totals.transportation, bundle.transportation.len());
            assert_eq!(totals.sum(), 29);
        }
    }

    #[test]
    fn test_every_entity_within_kind_offset() {
        let (lat, lng) = (22.5726, 88.3639);
        let bundle = NearbyGenerator::default().generate_seeded(lat, lng, DEFAULT_RADIUS_KM, 77);
        bundle.places.iter().for_each(|e| assert_within(e, EntityKind::Place, lat, lng));
        bundle.hotels.iter().for_each(|e| assert_within(e, EntityKind::Hotel, lat, lng));
        bundle
            .restaurants
            .iter()
            .for_each(|e| assert_within(e, EntityKind::Restaurant, lat, lng));
        bundle
            .transportation
            .iter()
            .for_each(|e| assert_within(e, EntityKind::Transport, lat, lng));
    }

    #[test]
    fn test_ratings_in_range() {
        let bundle = NearbyGenerator::default().generate_seeded(19.076, 72.8777, 5.0, 5);
        for entity in bundle.entities() {
            if let Some(rating) = entity.rating() {
                assert!((30..=50).contains(&rating));
            }
        }
    }

    #[test]
    fn test_same_seed_same_bundle() {
        let generator = NearbyGenerator::default();
        let a = generator.generate_seeded(12.9716, 77.5946, 5.0, 314);
        let b = generator.generate_seeded(12.9716, 77.5946, 5.0, 314);
        assert_eq!(a, b);
        let c = generator.generate_seeded(12.9716, 77.5946, 5.0, 315);
        assert_ne!(a, c);
    }

    #[test]
    fn test_radius_does_not_change_output() {
        let generator = NearbyGenerator::default();
        let near = generator.generate_seeded(12.9716, 77.5946, 0.5, 1);
        let far = generator.generate_seeded(12.9716, 77.5946, 20.0, 1);
        assert_eq!(near, far);
    }

    #[test]
    fn test_configured_counts() {
        let generator = NearbyGenerator::new(GeneratorConfig {
            places: 2,
            hotels: 0,
            restaurants: 1,
            transportation: 3,
        });
        let bundle = generator.generate_seeded(20.0, 80.0, 5.0, 0);
        let totals = bundle.total_results();
        assert_eq!(
            (totals.places, totals.hotels, totals.restaurants, totals.transportation),
            (2, 0, 1, 3)
        );
    }

    #[test]
    fn test_unseeded_calls_are_unrelated() {
        let a = generate_nearby_location_data(28.6139, 77.209, 5.0);
        let b = generate_nearby_location_data(28.6139, 77.209, 5.0);
        assert_eq!(a.total_results(), b.total_results());
        assert_ne!(a.places[0].id, b.places[0].id);
    }
}
