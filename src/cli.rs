use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::error;
use nearby_synth::config::GeneratorConfig;
use nearby_synth::generation::batch::generate_batch;
use nearby_synth::generation::bundle::{DEFAULT_RADIUS_KM, NearbyGenerator};
use nearby_synth::generation::featurecollection::bundle_to_feature_collection;
use nearby_synth::generation::generate::{OutputFormat, render, write_output};
use nearby_synth::query::{ErrorResponse, LocationQuery, NearbyResponse, handle_nearby_query};
use nearby_synth::utils::error::Error;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Synthesize nearby places, hotels, restaurants and transport options
/// around a coordinate in India.
#[derive(Debug, Parser)]
#[command(name = "nearby-synth", version)]
pub struct Cli {
    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true, required_unless_present = "queries")]
    pub lat: Option<f64>,

    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true, required_unless_present = "queries")]
    pub lng: Option<f64>,

    /// Search radius in km (0.5 to 20); echoed only, does not affect placement
    #[arg(long, default_value_t = DEFAULT_RADIUS_KM)]
    pub radius: f64,

    /// JSON file holding an array of {latitude, longitude, radius?} queries
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    pub queries: Option<PathBuf>,

    /// Seed for reproducible output; unseeded runs differ every time
    #[arg(long, env = "NEARBY_SYNTH_SEED")]
    pub seed: Option<u64>,

    /// TOML file with per-kind counts
    #[arg(long, env = "NEARBY_SYNTH_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(cli: Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    let generator = NearbyGenerator::new(config);

    let rendered = match &cli.queries {
        Some(path) => run_batch(&generator, &cli, fs::read_to_string(path)?)?,
        None => run_single(&generator, &cli)?,
    };
    write_output(&rendered, cli.output.as_deref())
}

fn run_single(generator: &NearbyGenerator, cli: &Cli) -> Result<String, Error> {
    let (Some(lat), Some(lng)) = (cli.lat, cli.lng) else {
        return Err(Error::InvalidCoordinates {
            latitude: cli.lat.unwrap_or(f64::NAN),
            longitude: cli.lng.unwrap_or(f64::NAN),
        });
    };
    let query = LocationQuery::new(lat, lng).with_radius(cli.radius);

    let result = match cli.seed {
        Some(seed) => handle_nearby_query(generator, &mut StdRng::seed_from_u64(seed), &query),
        None => handle_nearby_query(generator, &mut rand::thread_rng(), &query),
    };
    let response: NearbyResponse = result.inspect_err(|err| {
        error!("{}", serde_json::to_string(&ErrorResponse::from(err)).unwrap_or_default());
    })?;
    render(&response, cli.format, cli.pretty)
}

fn run_batch(generator: &NearbyGenerator, cli: &Cli, contents: String) -> Result<String, Error> {
    let queries: Vec<LocationQuery> = serde_json::from_str(&contents)?;
    let results = generate_batch(generator, &queries, cli.seed.unwrap_or_default());

    let mut values = Vec::with_capacity(results.len());
    for result in &results {
        let value = match (result, cli.format) {
            (Ok(response), OutputFormat::Json) => serde_json::to_value(response)?,
            (Ok(response), OutputFormat::Geojson) => {
                serde_json::to_value(bundle_to_feature_collection(&response.data))?
            }
            (Err(err), _) => serde_json::to_value(ErrorResponse::from(err))?,
        };
        values.push(value);
    }

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&values)?
    } else {
        serde_json::to_string(&values)?
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_query() {
        let cli = Cli::try_parse_from([
            "nearby-synth",
            "--lat",
            "34.0837",
            "--lng",
            "74.7973",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(cli.lat, Some(34.0837));
        assert_eq!(cli.radius, 5.0);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_coordinates_required_without_queries() {
        assert!(Cli::try_parse_from(["nearby-synth", "--lat", "20.0"]).is_err());
        assert!(Cli::try_parse_from(["nearby-synth", "--queries", "q.json"]).is_ok());
    }

    #[test]
    fn test_run_single_rejects_outside_india() {
        let cli = Cli::try_parse_from(["nearby-synth", "--lat", "50.0", "--lng", "74.0"]).unwrap();
        let err = run_single(&NearbyGenerator::default(), &cli).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }));
    }

    #[test]
    fn test_run_single_seeded_is_stable() {
        let cli = Cli::try_parse_from([
            "nearby-synth",
            "--lat",
            "12.9716",
            "--lng",
            "77.5946",
            "--seed",
            "3",
            "--format",
            "geojson",
        ])
        .unwrap();
        let generator = NearbyGenerator::default();
        let a = run_single(&generator, &cli).unwrap();
        let b = run_single(&generator, &cli).unwrap();
        assert_eq!(a, b);
        assert!(a.contains("FeatureCollection"));
    }

    #[test]
    fn test_run_batch_mixes_results_and_rejections() {
        let cli = Cli::try_parse_from(["nearby-synth", "--queries", "q.json", "--seed", "1"]).unwrap();
        let contents = r#"[
            {"latitude": 34.0837, "longitude": 74.7973},
            {"latitude": 50.0, "longitude": 74.0, "radius": 3}
        ]"#;
        let rendered = run_batch(&NearbyGenerator::default(), &cli, contents.to_string()).unwrap();
        let values: Vec<serde_json::Value> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["success"], true);
        assert_eq!(
            values[1]["message"],
            "Coordinates must be within India's geographical bounds"
        );
    }
}
