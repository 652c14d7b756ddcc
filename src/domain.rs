use geo::Coord;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::generation::region::Region;

// --- Entity categories ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Temple,
    Monument,
    Park,
    Market,
    Viewpoint,
    Museum,
    Fort,
    Palace,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 8] = [
        PlaceCategory::Temple,
        PlaceCategory::Monument,
        PlaceCategory::Park,
        PlaceCategory::Market,
        PlaceCategory::Viewpoint,
        PlaceCategory::Museum,
        PlaceCategory::Fort,
        PlaceCategory::Palace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlaceCategory::Temple => "temple",
            PlaceCategory::Monument => "monument",
            PlaceCategory::Park => "park",
            PlaceCategory::Market => "market",
            PlaceCategory::Viewpoint => "viewpoint",
            PlaceCategory::Museum => "museum",
            PlaceCategory::Fort => "fort",
            PlaceCategory::Palace => "palace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotelCategory {
    Hotel,
    Guesthouse,
    Resort,
    Homestay,
    Lodge,
}

impl HotelCategory {
    pub const ALL: [HotelCategory; 5] = [
        HotelCategory::Hotel,
        HotelCategory::Guesthouse,
        HotelCategory::Resort,
        HotelCategory::Homestay,
        HotelCategory::Lodge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HotelCategory::Hotel => "hotel",
            HotelCategory::Guesthouse => "guesthouse",
            HotelCategory::Resort => "resort",
            HotelCategory::Homestay => "homestay",
            HotelCategory::Lodge => "lodge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestaurantCategory {
    Restaurant,
    Dhaba,
    StreetFood,
    Cafe,
    SweetShop,
    LocalEatery,
}

impl RestaurantCategory {
    pub const ALL: [RestaurantCategory; 6] = [
        RestaurantCategory::Restaurant,
        RestaurantCategory::Dhaba,
        RestaurantCategory::StreetFood,
        RestaurantCategory::Cafe,
        RestaurantCategory::SweetShop,
        RestaurantCategory::LocalEatery,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RestaurantCategory::Restaurant => "restaurant",
            RestaurantCategory::Dhaba => "dhaba",
            RestaurantCategory::StreetFood => "street_food",
            RestaurantCategory::Cafe => "cafe",
            RestaurantCategory::SweetShop => "sweet_shop",
            RestaurantCategory::LocalEatery => "local_eatery",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportCategory {
    AutoRickshaw,
    Taxi,
    Bus,
    LocalTransport,
    BikeRental,
}

impl TransportCategory {
    pub const ALL: [TransportCategory; 5] = [
        TransportCategory::AutoRickshaw,
        TransportCategory::Taxi,
        TransportCategory::Bus,
        TransportCategory::LocalTransport,
        TransportCategory::BikeRental,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransportCategory::AutoRickshaw => "auto_rickshaw",
            TransportCategory::Taxi => "taxi",
            TransportCategory::Bus => "bus",
            TransportCategory::LocalTransport => "local_transport",
            TransportCategory::BikeRental => "bike_rental",
        }
    }
}

/// The four kinds of synthesized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Place,
    Hotel,
    Restaurant,
    Transport,
}

impl EntityKind {
    /// Full width of the uniform jitter window in degrees. Entities land within
    /// half of this on each axis.
    pub fn jitter_width(self) -> f64 {
        match self {
            EntityKind::Place => 0.02,
            EntityKind::Hotel => 0.015,
            EntityKind::Restaurant => 0.01,
            EntityKind::Transport => 0.008,
        }
    }

    pub fn max_offset(self) -> f64 {
        self.jitter_width() / 2.0
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Place => "place",
            EntityKind::Hotel => "hotel",
            EntityKind::Restaurant => "restaurant",
            EntityKind::Transport => "transport",
        }
    }
}

// --- Entities ---

/// Anything carrying a generated coordinate as decimal strings.
pub trait Located {
    fn latitude(&self) -> &str;
    fn longitude(&self) -> &str;

    /// Parses the stored strings back into a geo coordinate (x = longitude).
    fn coordinate(&self) -> Option<Coord> {
        let lat = self.latitude().parse::<f64>().ok()?;
        let lng = self.longitude().parse::<f64>().ok()?;
        Some(Coord { x: lng, y: lat })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub category: PlaceCategory,
    pub latitude: String,
    pub longitude: String,
    pub description: String,
    pub image_url: String,
    /// 30..=50, tenths of a star
    pub rating: u8,
    pub review_count: u32,
    /// `Some(0)` means free entry
    pub entry_fee: Option<u32>,
    pub opening_hours: String,
    pub special_features: Vec<String>,
    pub best_time_to_visit: String,
    pub local_name: Option<String>,
    pub cultural_significance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub category: HotelCategory,
    pub latitude: String,
    pub longitude: String,
    pub description: String,
    pub image_url: String,
    pub price_per_night: u32,
    pub rating: u8,
    pub review_count: u32,
    pub amenities: Vec<String>,
    pub room_types: Vec<String>,
    pub max_guests: u8,
    pub check_in_time: String,
    pub check_out_time: String,
    pub contact_number: Option<String>,
    pub available: bool,
    /// Kilometres, as a decimal string
    pub distance_from_center: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub category: RestaurantCategory,
    pub latitude: String,
    pub longitude: String,
    pub description: String,
    pub image_url: String,
    pub cuisine: Vec<String>,
    pub specialties: Vec<String>,
    pub average_cost_for_two: u32,
    pub rating: u8,
    pub review_count: u32,
    pub opening_hours: String,
    pub vegan_friendly: bool,
    pub local_favorite: bool,
    pub must_try_dishes: Vec<String>,
    pub contact_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOption {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub category: TransportCategory,
    pub latitude: String,
    pub longitude: String,
    pub name: String,
    pub description: String,
    pub price_range: String,
    pub availability: String,
    pub contact_info: Option<String>,
    pub routes: Option<Vec<String>>,
    pub tips: Option<Vec<String>>,
    pub booking_required: bool,
}

macro_rules! impl_located {
    ($($ty:ty),*) => {
        $(
            impl Located for $ty {
                fn latitude(&self) -> &str {
                    &self.latitude
                }
                fn longitude(&self) -> &str {
                    &self.longitude
                }
            }
        )*
    };
}

impl_located!(Place, Hotel, Restaurant, TransportOption);

// --- Domain Entity Enum ---
#[derive(Debug, Clone, PartialEq)]
pub enum NearbyEntity {
    Place(Place),
    Hotel(Hotel),
    Restaurant(Restaurant),
    Transport(TransportOption),
}

impl NearbyEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            NearbyEntity::Place(_) => EntityKind::Place,
            NearbyEntity::Hotel(_) => EntityKind::Hotel,
            NearbyEntity::Restaurant(_) => EntityKind::Restaurant,
            NearbyEntity::Transport(_) => EntityKind::Transport,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            NearbyEntity::Place(p) => p.id,
            NearbyEntity::Hotel(h) => h.id,
            NearbyEntity::Restaurant(r) => r.id,
            NearbyEntity::Transport(t) => t.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            NearbyEntity::Place(p) => &p.name,
            NearbyEntity::Hotel(h) => &h.name,
            NearbyEntity::Restaurant(r) => &r.name,
            NearbyEntity::Transport(t) => &t.name,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            NearbyEntity::Place(p) => p.category.as_str(),
            NearbyEntity::Hotel(h) => h.category.as_str(),
            NearbyEntity::Restaurant(r) => r.category.as_str(),
            NearbyEntity::Transport(t) => t.category.as_str(),
        }
    }

    /// Rating in tenths of a star; transport options carry none.
    pub fn rating(&self) -> Option<u8> {
        match self {
            NearbyEntity::Place(p) => Some(p.rating),
            NearbyEntity::Hotel(h) => Some(h.rating),
            NearbyEntity::Restaurant(r) => Some(r.rating),
            NearbyEntity::Transport(_) => None,
        }
    }

    pub fn is_place(&self) -> bool {
        matches!(self, NearbyEntity::Place(_))
    }
    pub fn is_hotel(&self) -> bool {
        matches!(self, NearbyEntity::Hotel(_))
    }
    pub fn is_restaurant(&self) -> bool {
        matches!(self, NearbyEntity::Restaurant(_))
    }
    pub fn is_transport(&self) -> bool {
        matches!(self, NearbyEntity::Transport(_))
    }
}

impl Located for NearbyEntity {
    fn latitude(&self) -> &str {
        match self {
            NearbyEntity::Place(p) => p.latitude(),
            NearbyEntity::Hotel(h) => h.latitude(),
            NearbyEntity::Restaurant(r) => r.latitude(),
            NearbyEntity::Transport(t) => t.latitude(),
        }
    }

    fn longitude(&self) -> &str {
        match self {
            NearbyEntity::Place(p) => p.longitude(),
            NearbyEntity::Hotel(h) => h.longitude(),
            NearbyEntity::Restaurant(r) => r.longitude(),
            NearbyEntity::Transport(t) => t.longitude(),
        }
    }
}

// --- Bundle ---

/// Header of a bundle: the queried point and its synthesized address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationHeader {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(skip)]
    pub region: Option<Region>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalResults {
    pub places: usize,
    pub hotels: usize,
    pub restaurants: usize,
    pub transportation: usize,
}

impl TotalResults {
    pub fn sum(&self) -> usize {
        self.places + self.hotels + self.restaurants + self.transportation
    }
}

/// Everything generated for one coordinate query.
///
/// The summary counts are never stored: [`LocationBundle::total_results`]
/// reads the list lengths, and serialization emits `totalResults` from it.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationBundle {
    pub location: LocationHeader,
    pub places: Vec<Place>,
    pub hotels: Vec<Hotel>,
    pub restaurants: Vec<Restaurant>,
    pub transportation: Vec<TransportOption>,
}

impl LocationBundle {
    pub fn total_results(&self) -> TotalResults {
        TotalResults {
            places: self.places.len(),
            hotels: self.hotels.len(),
            restaurants: self.restaurants.len(),
            transportation: self.transportation.len(),
        }
    }

    /// Flattens the four lists into tagged entities, places first.
    pub fn entities(&self) -> Vec<NearbyEntity> {
        let mut entities = Vec::with_capacity(self.total_results().sum());
        entities.extend(self.places.iter().cloned().map(NearbyEntity::Place));
        entities.extend(self.hotels.iter().cloned().map(NearbyEntity::Hotel));
        entities.extend(self.restaurants.iter().cloned().map(NearbyEntity::Restaurant));
        entities.extend(self.transportation.iter().cloned().map(NearbyEntity::Transport));
        entities
    }
}

impl Serialize for LocationBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LocationBundle", 6)?;
        state.serialize_field("location", &self.location)?;
        state.serialize_field("places", &self.places)?;
        state.serialize_field("hotels", &self.hotels)?;
        state.serialize_field("restaurants", &self.restaurants)?;
        state.serialize_field("transportation", &self.transportation)?;
        state.serialize_field("totalResults", &self.total_results())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(lat: &str, lng: &str) -> TransportOption {
        TransportOption {
            id: Uuid::nil(),
            category: TransportCategory::Bus,
            latitude: lat.to_string(),
            longitude: lng.to_string(),
            name: "Regional Bus Stop".to_string(),
            description: String::new(),
            price_range: String::new(),
            availability: String::new(),
            contact_info: None,
            routes: None,
            tips: None,
            booking_required: false,
        }
    }

    fn empty_bundle() -> LocationBundle {
        LocationBundle {
            location: LocationHeader {
                latitude: 12.97,
                longitude: 77.59,
                address: "1, Shanti Road, Near Shanti Temple".to_string(),
                city: "Shantinagar".to_string(),
                state: "Karnataka".to_string(),
                region: Some(Region::South),
            },
            places: vec![],
            hotels: vec![],
            restaurants: vec![],
            transportation: vec![],
        }
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&RestaurantCategory::StreetFood).unwrap();
        assert_eq!(json, "\"street_food\"");
        let json = serde_json::to_string(&TransportCategory::AutoRickshaw).unwrap();
        assert_eq!(json, "\"auto_rickshaw\"");
    }

    #[test]
    fn test_category_as_str_matches_serde() {
        for category in PlaceCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        for category in HotelCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        for category in RestaurantCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        for category in TransportCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_jitter_widths_tighten_by_kind() {
        assert!(EntityKind::Place.max_offset() > EntityKind::Hotel.max_offset());
        assert!(EntityKind::Hotel.max_offset() > EntityKind::Restaurant.max_offset());
        assert!(EntityKind::Restaurant.max_offset() > EntityKind::Transport.max_offset());
        assert_eq!(EntityKind::Hotel.max_offset(), 0.0075);
    }

    #[test]
    fn test_located_parses_coordinate() {
        let option = transport("12.5", "77.25");
        let coord = option.coordinate().unwrap();
        assert_eq!(coord.x, 77.25);
        assert_eq!(coord.y, 12.5);

        let broken = transport("north", "77.25");
        assert!(broken.coordinate().is_none());
    }

    #[test]
    fn test_total_results_follow_list_lengths() {
        let mut bundle = empty_bundle();
        assert_eq!(bundle.total_results().sum(), 0);

        bundle.transportation.push(transport("12.97", "77.59"));
        bundle.transportation.push(transport("12.98", "77.60"));
        let totals = bundle.total_results();
        assert_eq!(totals.transportation, 2);
        assert_eq!(totals.sum(), 2);
    }

    #[test]
    fn test_bundle_serializes_total_results() {
        let mut bundle = empty_bundle();
        bundle.transportation.push(transport("12.97", "77.59"));

        let value = serde_json::to_value(&bundle).unwrap();
        assert_eq!(value["totalResults"]["transportation"], 1);
        assert_eq!(value["totalResults"]["places"], 0);
        assert_eq!(value["location"]["city"], "Shantinagar");
        assert!(value["location"].get("region").is_none());
        assert_eq!(value["transportation"][0]["type"], "bus");
        assert_eq!(value["transportation"][0]["bookingRequired"], false);
    }

    #[test]
    fn test_entities_are_tagged_in_order() {
        let mut bundle = empty_bundle();
        bundle.transportation.push(transport("12.97", "77.59"));
        let entities = bundle.entities();
        assert_eq!(entities.len(), 1);
        assert!(entities[0].is_transport());
        assert_eq!(entities[0].kind(), EntityKind::Transport);
        assert_eq!(entities[0].rating(), None);
        assert_eq!(entities[0].category(), "bus");
    }
}
