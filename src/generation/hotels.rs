use geo::Coord;
use rand::Rng;
use rand::distributions::{Distribution, Standard};

use crate::domain::{EntityKind, Hotel, HotelCategory};
use crate::generation::generator::EntityGenerator;
use crate::generation::names;
use crate::generation::region::Region;
use crate::generation::vocabulary::{pick, pick_settlement};
use crate::utils::geometry::jitter;

const BASE_AMENITIES: [&str; 3] = ["Free Wi-Fi", "24/7 Front Desk", "Room Service"];

impl Distribution<HotelCategory> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> HotelCategory {
        HotelCategory::ALL[rng.gen_range(0..HotelCategory::ALL.len())]
    }
}

impl HotelCategory {
    /// Nightly price floor; the generated price lies in `[base, 2 * base)`.
    pub fn base_price(self) -> u32 {
        match self {
            HotelCategory::Resort => 3000,
            HotelCategory::Hotel => 1500,
            HotelCategory::Homestay => 800,
            HotelCategory::Guesthouse | HotelCategory::Lodge => 1200,
        }
    }

    /// Appended to the generated name, if any.
    pub fn name_suffix(self) -> &'static str {
        match self {
            HotelCategory::Homestay => " Homestay",
            HotelCategory::Resort => " Resort",
            _ => "",
        }
    }

    pub fn description(self, name: &str) -> String {
        match self {
            HotelCategory::Hotel => format!(
                "Comfortable {} offers modern amenities and excellent service in the heart of the city. Popular among both business and leisure travelers.",
                name
            ),
            HotelCategory::Guesthouse => format!(
                "Cozy {} provides a homely atmosphere with personalized service and local hospitality. Perfect for budget-conscious travelers.",
                name
            ),
            HotelCategory::Resort => format!(
                "Luxurious {} features world-class facilities, spa services, and recreational activities in a stunning natural setting.",
                name
            ),
            HotelCategory::Homestay => format!(
                "Authentic {} offers an intimate experience of local culture and traditional hospitality with home-cooked meals.",
                name
            ),
            HotelCategory::Lodge => format!(
                "Simple yet comfortable {} provides basic amenities and clean accommodations for travelers seeking budget-friendly options.",
                name
            ),
        }
    }

    fn specific_amenities(self) -> &'static [&'static str] {
        match self {
            HotelCategory::Resort => &["Swimming Pool", "Spa", "Restaurant", "Gym", "Conference Hall"],
            HotelCategory::Hotel => &["Restaurant", "Business Center", "Parking", "Laundry"],
            HotelCategory::Homestay => &["Home-cooked Meals", "Local Tours", "Cultural Activities"],
            HotelCategory::Guesthouse => &["Common Kitchen", "Travel Assistance", "Luggage Storage"],
            HotelCategory::Lodge => &["Basic Amenities", "Shared Facilities", "Budget Friendly"],
        }
    }

    /// Base amenities every property offers, then the category extras.
    pub fn amenities(self) -> Vec<String> {
        BASE_AMENITIES
            .iter()
            .chain(self.specific_amenities())
            .map(|a| a.to_string())
            .collect()
    }

    pub fn room_types(self) -> &'static [&'static str] {
        match self {
            HotelCategory::Resort => &["Deluxe Room", "Suite", "Villa", "Premium Room"],
            HotelCategory::Hotel => &["Standard Room", "Deluxe Room", "Executive Room"],
            HotelCategory::Homestay => &["Private Room", "Shared Room", "Family Room"],
            HotelCategory::Guesthouse => &["Single Room", "Double Room", "Dormitory"],
            HotelCategory::Lodge => &["Basic Room", "Shared Room"],
        }
    }
}

/// Accommodation, spread up to 0.0075 degrees from the origin.
#[derive(Debug, Default, Clone, Copy)]
pub struct HotelGenerator;

impl EntityGenerator for HotelGenerator {
    type Entity = Hotel;

    const KIND: EntityKind = EntityKind::Hotel;

    fn generate_one<R: Rng + ?Sized>(&self, rng: &mut R, origin: Coord, region: Region) -> Hotel {
        let vocabulary = region.vocabulary();
        let position = jitter(rng, origin, Self::KIND.jitter_width());
        let category: HotelCategory = rng.r#gen();
        let prefix = pick(rng, vocabulary.hotel_prefixes);
        let stem = names::tail(pick_settlement(rng), 3);
        let name = format!("{} {}{}", prefix, stem, category.name_suffix());

        let base = category.base_price();
        let price_per_night = base + rng.gen_range(0..base);
        let (latitude, longitude) = names::coordinate_strings(position);

        Hotel {
            id: names::entity_id(rng),
            description: category.description(&name),
            image_url: names::image_url(rng),
            price_per_night,
            rating: names::rating(rng),
            review_count: rng.gen_range(25..325),
            amenities: category.amenities(),
            room_types: category.room_types().iter().map(|r| r.to_string()).collect(),
            max_guests: rng.gen_range(2..=5),
            check_in_time: "14:00".to_string(),
            check_out_time: "11:00".to_string(),
            contact_number: Some(names::phone_number(rng)),
            available: rng.gen_bool(0.9),
            distance_from_center: rng.gen_range(0.5..3.5f64).to_string(),
            name,
            category,
            latitude,
            longitude,
        }
    }
}
