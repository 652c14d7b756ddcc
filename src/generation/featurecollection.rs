use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use log::warn;
use serde_json::Value as JsonValue;

use crate::domain::{Located, LocationBundle, NearbyEntity};

fn point(latitude: f64, longitude: f64) -> Option<Geometry> {
    // GeoJSON orders positions as [longitude, latitude]
    Some(Geometry::new(Value::Point(vec![longitude, latitude])))
}

fn entity_to_feature(entity: &NearbyEntity) -> Option<Feature> {
    let coord = match entity.coordinate() {
        Some(coord) => coord,
        None => {
            warn!(
                "Skipping {} {} with unparseable coordinate ({}, {})",
                entity.kind().as_str(),
                entity.id(),
                entity.latitude(),
                entity.longitude()
            );
            return None;
        }
    };

    let mut properties = JsonObject::new();
    properties.insert("kind".to_string(), JsonValue::from(entity.kind().as_str()));
    properties.insert("name".to_string(), JsonValue::from(entity.name()));
    properties.insert("category".to_string(), JsonValue::from(entity.category()));
    if let Some(rating) = entity.rating() {
        properties.insert("rating".to_string(), JsonValue::from(rating));
    }

    Some(Feature {
        bbox: None,
        geometry: point(coord.y, coord.x),
        id: Some(geojson::feature::Id::String(entity.id().to_string())),
        properties: Some(properties),
        foreign_members: None,
    })
}

/// Converts a bundle into Point features for map display.
///
/// The first feature is the queried location (kind `origin`, carrying the
/// synthesized address); every entity follows, places first.
pub fn bundle_to_feature_collection(bundle: &LocationBundle) -> FeatureCollection {
    let entities = bundle.entities();
    let mut features: Vec<Feature> = Vec::with_capacity(entities.len() + 1);

    let header = &bundle.location;
    let mut origin_props = JsonObject::new();
    origin_props.insert("kind".to_string(), JsonValue::from("origin"));
    origin_props.insert("address".to_string(), JsonValue::from(header.address.as_str()));
    origin_props.insert("city".to_string(), JsonValue::from(header.city.as_str()));
    origin_props.insert("state".to_string(), JsonValue::from(header.state.as_str()));
    features.push(Feature {
        bbox: None,
        geometry: point(header.latitude, header.longitude),
        id: Some(geojson::feature::Id::String("origin".to_string())),
        properties: Some(origin_props),
        foreign_members: None,
    });

    features.extend(entities.iter().filter_map(entity_to_feature));

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
