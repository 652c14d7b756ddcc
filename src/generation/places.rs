use geo::Coord;
use rand::Rng;
use rand::distributions::{Distribution, Standard};

use crate::domain::{EntityKind, Place, PlaceCategory};
use crate::generation::generator::EntityGenerator;
use crate::generation::names;
use crate::generation::region::Region;
use crate::utils::geometry::jitter;

impl Distribution<PlaceCategory> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PlaceCategory {
        PlaceCategory::ALL[rng.gen_range(0..PlaceCategory::ALL.len())]
    }
}

impl PlaceCategory {
    pub fn description(self, name: &str) -> String {
        match self {
            PlaceCategory::Temple => format!(
                "Ancient {} is a revered spiritual site known for its stunning architecture and peaceful atmosphere. Daily prayers and festivals attract devotees from across the region.",
                name
            ),
            PlaceCategory::Monument => format!(
                "Historic {} stands as a testament to India's rich heritage, featuring intricate carvings and remarkable craftsmanship from centuries past.",
                name
            ),
            PlaceCategory::Park => format!(
                "Beautiful {} offers a serene escape with lush greenery, walking trails, and scenic spots perfect for families and nature lovers.",
                name
            ),
            PlaceCategory::Market => format!(
                "Bustling {} is the heart of local commerce, offering everything from traditional handicrafts to fresh produce and local delicacies.",
                name
            ),
            PlaceCategory::Viewpoint => format!(
                "Scenic {} provides breathtaking panoramic views of the surrounding landscape, especially during sunrise and sunset.",
                name
            ),
            PlaceCategory::Museum => format!(
                "Fascinating {} showcases regional history, art, and culture through carefully curated exhibits and artifacts.",
                name
            ),
            PlaceCategory::Fort => format!(
                "Majestic {} is a well-preserved fortress that offers insights into India's military history and architectural brilliance.",
                name
            ),
            PlaceCategory::Palace => format!(
                "Grand {} exemplifies royal architecture with ornate decorations, sprawling courtyards, and historical significance.",
                name
            ),
        }
    }

    pub fn opening_hours(self) -> &'static str {
        match self {
            PlaceCategory::Temple => "5:00 AM - 8:00 PM",
            PlaceCategory::Monument => "9:00 AM - 6:00 PM",
            PlaceCategory::Park => "6:00 AM - 7:00 PM",
            PlaceCategory::Market => "8:00 AM - 10:00 PM",
            PlaceCategory::Viewpoint => "24 Hours",
            PlaceCategory::Museum => "10:00 AM - 5:00 PM",
            PlaceCategory::Fort => "9:00 AM - 6:00 PM",
            PlaceCategory::Palace => "9:00 AM - 5:00 PM",
        }
    }

    pub fn special_features(self) -> &'static [&'static str] {
        match self {
            PlaceCategory::Temple => &[
                "Ancient Architecture",
                "Daily Prayers",
                "Festival Celebrations",
                "Peaceful Environment",
            ],
            PlaceCategory::Monument => &[
                "Historical Significance",
                "Architectural Marvel",
                "Photo Opportunities",
                "Guided Tours",
            ],
            PlaceCategory::Park => &[
                "Nature Trails",
                "Family Friendly",
                "Picnic Areas",
                "Bird Watching",
            ],
            PlaceCategory::Market => &[
                "Local Products",
                "Bargaining",
                "Street Food",
                "Cultural Experience",
            ],
            PlaceCategory::Viewpoint => &[
                "Panoramic Views",
                "Sunset Point",
                "Photography",
                "Peaceful Atmosphere",
            ],
            PlaceCategory::Museum => &[
                "Historical Artifacts",
                "Educational",
                "Guided Tours",
                "Cultural Learning",
            ],
            PlaceCategory::Fort => &[
                "Historical Tours",
                "Architecture",
                "Panoramic Views",
                "Cultural Heritage",
            ],
            PlaceCategory::Palace => &[
                "Royal Architecture",
                "Historical Tours",
                "Art Collections",
                "Cultural Heritage",
            ],
        }
    }

    pub fn best_time_to_visit(self) -> &'static str {
        match self {
            PlaceCategory::Viewpoint => "Early morning or evening for best views",
            PlaceCategory::Temple => "Early morning for peaceful prayers",
            PlaceCategory::Market => "Evening hours when most active",
            _ => "Anytime during operating hours",
        }
    }

    pub fn cultural_significance(self) -> &'static str {
        match self {
            PlaceCategory::Temple => {
                "This sacred site holds deep spiritual significance for the local community and has been a center of worship for centuries."
            }
            PlaceCategory::Monument => {
                "A testament to the architectural and cultural achievements of ancient Indian civilizations."
            }
            PlaceCategory::Fort => {
                "Represents the military heritage and strategic importance of the region throughout history."
            }
            PlaceCategory::Palace => {
                "Showcases the royal lifestyle and artistic patronage of former rulers."
            }
            PlaceCategory::Market => {
                "Traditional trading center that has preserved local commerce and cultural practices."
            }
            _ => {
                "An important cultural landmark that reflects the heritage and traditions of the region."
            }
        }
    }

    /// Temples are free; everything else charges 50..=249.
    pub fn entry_fee<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        match self {
            PlaceCategory::Temple => 0,
            _ => rng.gen_range(50..250),
        }
    }
}

/// Attractions, spread up to 0.01 degrees from the origin.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceGenerator;

impl EntityGenerator for PlaceGenerator {
    type Entity = Place;

    const KIND: EntityKind = EntityKind::Place;

    fn generate_one<R: Rng + ?Sized>(&self, rng: &mut R, origin: Coord, region: Region) -> Place {
        let vocabulary = region.vocabulary();
        let position = jitter(rng, origin, Self::KIND.jitter_width());
        let category: PlaceCategory = rng.r#gen();
        let name = names::place_name(rng, vocabulary);
        let (latitude, longitude) = names::coordinate_strings(position);

        Place {
            id: names::entity_id(rng),
            description: category.description(&name),
            image_url: names::image_url(rng),
            rating: names::rating(rng),
            review_count: rng.gen_range(50..550),
            entry_fee: Some(category.entry_fee(rng)),
            opening_hours: category.opening_hours().to_string(),
            special_features: category
                .special_features()
                .iter()
                .map(|f| f.to_string())
                .collect(),
            best_time_to_visit: category.best_time_to_visit().to_string(),
            local_name: Some(names::local_name(rng, &name, vocabulary)),
            cultural_significance: Some(category.cultural_significance().to_string()),
            name,
            category,
            latitude,
            longitude,
        }
    }
}
