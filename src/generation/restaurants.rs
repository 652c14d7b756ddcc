use geo::Coord;
use rand::Rng;
use rand::distributions::{Distribution, Standard};

use crate::domain::{EntityKind, Restaurant, RestaurantCategory};
use crate::generation::generator::EntityGenerator;
use crate::generation::names;
use crate::generation::region::Region;
use crate::generation::vocabulary::{first_n, pick, pick_settlement};
use crate::utils::geometry::jitter;

impl Distribution<RestaurantCategory> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> RestaurantCategory {
        RestaurantCategory::ALL[rng.gen_range(0..RestaurantCategory::ALL.len())]
    }
}

impl RestaurantCategory {
    /// Floor for the cost for two; the generated cost lies in `[base, 2 * base)`.
    pub fn base_cost(self) -> u32 {
        match self {
            RestaurantCategory::StreetFood => 200,
            RestaurantCategory::Dhaba => 400,
            RestaurantCategory::Cafe => 600,
            RestaurantCategory::Restaurant
            | RestaurantCategory::SweetShop
            | RestaurantCategory::LocalEatery => 800,
        }
    }

    pub fn opening_hours(self) -> &'static str {
        match self {
            RestaurantCategory::StreetFood => "6:00 PM - 11:00 PM",
            RestaurantCategory::Dhaba => "24 Hours",
            RestaurantCategory::Cafe => "8:00 AM - 10:00 PM",
            RestaurantCategory::SweetShop => "9:00 AM - 9:00 PM",
            RestaurantCategory::Restaurant => "11:00 AM - 11:00 PM",
            RestaurantCategory::LocalEatery => "7:00 AM - 10:00 PM",
        }
    }

    pub fn description(self, name: &str) -> String {
        match self {
            RestaurantCategory::Restaurant => format!(
                "Popular {} serves authentic regional cuisine in a comfortable setting with excellent service and traditional recipes.",
                name
            ),
            RestaurantCategory::Dhaba => format!(
                "Traditional {} offers hearty, home-style cooking popular with locals and truckers. Known for generous portions and authentic flavors.",
                name
            ),
            RestaurantCategory::StreetFood => format!(
                "Famous {} stall serves delicious street food favorites that locals have been enjoying for generations.",
                name
            ),
            RestaurantCategory::Cafe => format!(
                "Trendy {} provides a relaxed atmosphere perfect for coffee, light meals, and socializing with friends.",
                name
            ),
            RestaurantCategory::SweetShop => format!(
                "Renowned {} specializes in traditional sweets and snacks, using time-honored recipes and quality ingredients.",
                name
            ),
            RestaurantCategory::LocalEatery => format!(
                "Beloved {} is a neighborhood favorite known for fresh ingredients, reasonable prices, and friendly service.",
                name
            ),
        }
    }
}

/// Eateries, spread up to 0.005 degrees from the origin.
#[derive(Debug, Default, Clone, Copy)]
pub struct RestaurantGenerator;

impl EntityGenerator for RestaurantGenerator {
    type Entity = Restaurant;

    const KIND: EntityKind = EntityKind::Restaurant;

    fn generate_one<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        origin: Coord,
        region: Region,
    ) -> Restaurant {
        let vocabulary = region.vocabulary();
        let position = jitter(rng, origin, Self::KIND.jitter_width());
        let category: RestaurantCategory = rng.r#gen();
        let kind_word = pick(rng, vocabulary.restaurant_types);
        let stem = names::head(pick_settlement(rng), 4);
        let name = format!("{} {}", stem, kind_word);

        let base = category.base_cost();
        let average_cost_for_two = base + rng.gen_range(0..base);
        let (latitude, longitude) = names::coordinate_strings(position);

        Restaurant {
            id: names::entity_id(rng),
            description: category.description(&name),
            image_url: names::image_url(rng),
            cuisine: vec![pick(rng, vocabulary.cuisines).to_string()],
            specialties: first_n(vocabulary.local_dishes, 3),
            average_cost_for_two,
            rating: names::rating(rng),
            review_count: rng.gen_range(15..215),
            opening_hours: category.opening_hours().to_string(),
            vegan_friendly: rng.gen_bool(0.4),
            local_favorite: rng.gen_bool(0.3),
            must_try_dishes: first_n(vocabulary.local_dishes, 2),
            contact_number: Some(names::phone_number(rng)),
            name,
            category,
            latitude,
            longitude,
        }
    }
}
