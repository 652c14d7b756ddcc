//! Synthetic nearby-location data for coordinates inside India.
//!
//! A query coordinate is classified into a coarse region, and four
//! independent generators fabricate places, hotels, restaurants and
//! transport options jittered around it. Every generator takes an explicit
//! `rand::Rng`, so seeded runs are reproducible.

pub mod config;
pub mod domain;
pub mod generation;
pub mod query;
pub mod utils;

pub use config::GeneratorConfig;
pub use domain::LocationBundle;
pub use generation::bundle::{NearbyGenerator, generate_nearby_location_data};
pub use utils::error::Error;
pub use utils::geometry::validate_coordinates;
