use geo::{Coord, Point, Rect};
use rand::Rng;

pub const INDIA_BBOX: [f64; 4] = [
    68.7,  // Min longitude
    6.4,   // Min latitude
    97.25, // Max longitude
    37.6,  // Max latitude
];

/// Mean earth radius used for distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Trait for checking if a geographic coordinate is within a specific bounding box.
pub trait InBoundingBox {
    /// Checks if the coordinate is within the specified bounding box.
    /// Edges count as inside.
    ///
    /// # Arguments
    /// * `bbox`: `[min_lng, min_lat, max_lng, max_lat]`
    ///
    /// # Returns
    /// * `true` if the coordinate is within the bounding box, `false` otherwise
    fn in_bounding_box(&self, bbox: &[f64; 4]) -> bool;
}

impl InBoundingBox for Coord {
    fn in_bounding_box(&self, bbox: &[f64; 4]) -> bool {
        let rect = bbox_to_rect(bbox);
        // geo's Contains excludes the boundary, the corners must pass
        self.x >= rect.min().x
            && self.x <= rect.max().x
            && self.y >= rect.min().y
            && self.y <= rect.max().y
    }
}

impl InBoundingBox for Point {
    fn in_bounding_box(&self, bbox: &[f64; 4]) -> bool {
        self.0.in_bounding_box(bbox)
    }
}

fn bbox_to_rect(bbox: &[f64; 4]) -> Rect {
    Rect::new(
        Coord { x: bbox[0], y: bbox[1] },
        Coord { x: bbox[2], y: bbox[3] },
    )
}

/// Builds a geo coordinate from latitude/longitude (x = longitude, y = latitude).
pub fn lat_lng(latitude: f64, longitude: f64) -> Coord {
    Coord {
        x: longitude,
        y: latitude,
    }
}

/// Checks whether a coordinate lies inside India's approximate bounding box.
///
/// # Arguments
/// * `latitude` - latitude in degrees
/// * `longitude` - longitude in degrees
///
/// # Returns
/// `true` if the coordinate is within the bounding box, `false` otherwise.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> bool {
    lat_lng(latitude, longitude).in_bounding_box(&INDIA_BBOX)
}

/// Checks that a coordinate is finite and within the world ranges.
pub fn is_world_coordinate(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}

/// Offsets `origin` on both axes by `(u - 0.5) * width` with `u` uniform in `[0, 1)`,
/// so each axis moves by at most `width / 2` degrees.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, origin: Coord, width: f64) -> Coord {
    let lat = origin.y + (rng.r#gen::<f64>() - 0.5) * width;
    let lng = origin.x + (rng.r#gen::<f64>() - 0.5) * width;
    Coord { x: lng, y: lat }
}

/// Great-circle distance between two coordinates in kilometres (haversine).
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_validate_coordinates_corners_and_center() {
        assert!(validate_coordinates(6.4, 68.7));
        assert!(validate_coordinates(6.4, 97.25));
        assert!(validate_coordinates(37.6, 68.7));
        assert!(validate_coordinates(37.6, 97.25));
        assert!(validate_coordinates(22.0, 82.975));
    }

    #[test]
    fn test_validate_coordinates_rejects_outside() {
        assert!(!validate_coordinates(50.0, 74.0));
        assert!(!validate_coordinates(6.39, 80.0));
        assert!(!validate_coordinates(20.0, 97.26));
        assert!(!validate_coordinates(20.0, 68.69));
        assert!(!validate_coordinates(f64::NAN, 80.0));
    }

    #[test]
    fn test_is_world_coordinate() {
        assert!(is_world_coordinate(-90.0, 180.0));
        assert!(!is_world_coordinate(90.5, 0.0));
        assert!(!is_world_coordinate(0.0, f64::INFINITY));
    }

    #[test]
    fn test_point_in_bounding_box() {
        let srinagar = Point::new(74.7973, 34.0837);
        assert!(srinagar.in_bounding_box(&INDIA_BBOX));
    }

    #[test]
    fn test_jitter_stays_within_half_width() {
        let mut rng = StdRng::seed_from_u64(7);
        let origin = lat_lng(34.0837, 74.7973);
        for _ in 0..1_000 {
            let c = jitter(&mut rng, origin, 0.02);
            assert!((c.y - origin.y).abs() <= 0.01 + 1e-9);
            assert!((c.x - origin.x).abs() <= 0.01 + 1e-9);
        }
    }

    #[test]
    fn test_calculate_distance() {
        assert_eq!(calculate_distance(12.0, 77.0, 12.0, 77.0), 0.0);
        // Delhi to Mumbai is roughly 1150 km
        let d = calculate_distance(28.6139, 77.2090, 19.0760, 72.8777);
        assert!((1100.0..1200.0).contains(&d), "got {}", d);
    }
}
