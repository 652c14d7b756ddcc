use geo::Coord;
use rand::Rng;
use rand::distributions::{Distribution, Standard};

use crate::domain::{EntityKind, TransportCategory, TransportOption};
use crate::generation::generator::EntityGenerator;
use crate::generation::names;
use crate::generation::region::Region;
use crate::utils::geometry::jitter;

impl Distribution<TransportCategory> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TransportCategory {
        TransportCategory::ALL[rng.gen_range(0..TransportCategory::ALL.len())]
    }
}

impl TransportCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            TransportCategory::AutoRickshaw => "Local Auto Stand",
            TransportCategory::Taxi => "City Taxi Service",
            TransportCategory::Bus => "Regional Bus Stop",
            TransportCategory::LocalTransport => "Local Transport Hub",
            TransportCategory::BikeRental => "Bike Rental Center",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TransportCategory::AutoRickshaw => {
                "Convenient three-wheeler service for short to medium distance travel within the city."
            }
            TransportCategory::Taxi => {
                "Comfortable car service for city tours and longer distances with experienced drivers."
            }
            TransportCategory::Bus => {
                "Public transportation connecting to various parts of the city and nearby areas."
            }
            TransportCategory::LocalTransport => {
                "Local transportation hub offering various options for getting around the area."
            }
            TransportCategory::BikeRental => {
                "Self-drive bike rental service for exploring the area at your own pace."
            }
        }
    }

    pub fn price_range(self) -> &'static str {
        match self {
            TransportCategory::AutoRickshaw => "₹10-15 per km",
            TransportCategory::Taxi => "₹500-800 for city tour",
            TransportCategory::Bus => "₹5-20 per trip",
            TransportCategory::LocalTransport => "₹10-50 per trip",
            TransportCategory::BikeRental => "₹300-500 per day",
        }
    }

    pub fn availability(self) -> &'static str {
        match self {
            TransportCategory::AutoRickshaw => "6:00 AM - 11:00 PM",
            TransportCategory::Taxi => "24/7",
            TransportCategory::Bus => "5:00 AM - 10:00 PM",
            TransportCategory::LocalTransport => "6:00 AM - 9:00 PM",
            TransportCategory::BikeRental => "8:00 AM - 8:00 PM",
        }
    }

    pub fn routes(self) -> &'static [&'static str] {
        match self {
            TransportCategory::AutoRickshaw => {
                &["City Center", "Railway Station", "Bus Stand", "Market Area"]
            }
            TransportCategory::Taxi => &["Airport", "Railway Station", "Tourist Places", "Hotels"],
            TransportCategory::Bus => &["City Center", "Outskirts", "Nearby Towns", "Transport Hub"],
            TransportCategory::LocalTransport => {
                &["Local Areas", "Nearby Villages", "Market", "Schools"]
            }
            TransportCategory::BikeRental => &["City Tour", "Nearby Attractions", "Scenic Routes"],
        }
    }

    pub fn tips(self) -> &'static [&'static str] {
        match self {
            TransportCategory::AutoRickshaw => &[
                "Always ask for meter rate",
                "Negotiate fare beforehand",
                "Keep exact change",
            ],
            TransportCategory::Taxi => &[
                "Book through reliable operators",
                "Confirm rate before starting",
                "Ask for local driver recommendations",
            ],
            TransportCategory::Bus => &[
                "Check schedule in advance",
                "Keep exact change",
                "Validate ticket",
            ],
            TransportCategory::LocalTransport => &[
                "Ask locals for best routes",
                "Be prepared for delays",
                "Keep small denominations",
            ],
            TransportCategory::BikeRental => &[
                "Check bike condition",
                "Carry license",
                "Follow traffic rules",
                "Wear helmet",
            ],
        }
    }

    pub fn booking_required(self) -> bool {
        matches!(self, TransportCategory::Taxi | TransportCategory::BikeRental)
    }

    /// Buses publish no contact number.
    pub fn has_contact(self) -> bool {
        !matches!(self, TransportCategory::Bus)
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Transport points, spread up to 0.004 degrees from the origin.
///
/// Names come from a fixed per-category template, so the region is unused.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransportGenerator;

impl EntityGenerator for TransportGenerator {
    type Entity = TransportOption;

    const KIND: EntityKind = EntityKind::Transport;

    fn generate_one<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        origin: Coord,
        _region: Region,
    ) -> TransportOption {
        let position = jitter(rng, origin, Self::KIND.jitter_width());
        let category: TransportCategory = rng.r#gen();
        let (latitude, longitude) = names::coordinate_strings(position);

        TransportOption {
            id: names::entity_id(rng),
            category,
            latitude,
            longitude,
            name: category.display_name().to_string(),
            description: category.description().to_string(),
            price_range: category.price_range().to_string(),
            availability: category.availability().to_string(),
            contact_info: category.has_contact().then(|| names::phone_number(rng)),
            routes: Some(owned(category.routes())),
            tips: Some(owned(category.tips())),
            booking_required: category.booking_required(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Located;
    use crate::utils::geometry::lat_lng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_transport_stays_within_jitter() {
        let mut rng = StdRng::seed_from_u64(55);
        let origin = lat_lng(28.6139, 77.209);
        let options = TransportGenerator.generate(&mut rng, origin, Region::North, 200);
        assert_eq!(options.len(), 200);
        for option in &options {
            let c = option.coordinate().unwrap();
            assert!((c.y - origin.y).abs() <= 0.004 + 1e-9);
            assert!((c.x - origin.x).abs() <= 0.004 + 1e-9);
        }
    }

    #[test]
    fn test_category_rules() {
        let mut rng = StdRng::seed_from_u64(3);
        let origin = lat_lng(28.6139, 77.209);
        for option in TransportGenerator.generate(&mut rng, origin, Region::North, 200) {
            match option.category {
                TransportCategory::Bus => assert!(option.contact_info.is_none()),
                _ => assert!(option.contact_info.is_some()),
            }
            assert_eq!(
                option.booking_required,
                matches!(
                    option.category,
                    TransportCategory::Taxi | TransportCategory::BikeRental
                )
            );
            assert_eq!(option.name, option.category.display_name());
            assert!(!option.routes.as_ref().unwrap().is_empty());
            assert!(!option.tips.as_ref().unwrap().is_empty());
        }
    }

    #[test]
    fn test_bike_rental_tips() {
        assert_eq!(TransportCategory::BikeRental.tips().len(), 4);
        assert_eq!(TransportCategory::Bus.price_range(), "₹5-20 per trip");
    }
}
