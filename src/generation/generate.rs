use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use log::info;

use crate::generation::featurecollection::bundle_to_feature_collection;
use crate::query::NearbyResponse;
use crate::utils::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The full response envelope as JSON
    #[default]
    Json,
    /// Only the bundle, as a GeoJSON FeatureCollection
    Geojson,
}

/// Serializes a response in the requested format.
pub fn render(response: &NearbyResponse, format: OutputFormat, pretty: bool) -> Result<String, Error> {
    let rendered = match (format, pretty) {
        (OutputFormat::Json, true) => serde_json::to_string_pretty(response)?,
        (OutputFormat::Json, false) => serde_json::to_string(response)?,
        (OutputFormat::Geojson, true) => {
            serde_json::to_string_pretty(&bundle_to_feature_collection(&response.data))?
        }
        (OutputFormat::Geojson, false) => {
            serde_json::to_string(&bundle_to_feature_collection(&response.data))?
        }
    };
    Ok(rendered)
}

/// Writes `contents` to `path`, or to stdout when no path is given.
pub fn write_output(contents: &str, path: Option<&Path>) -> Result<(), Error> {
    match path {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(contents.as_bytes())?;
            info!("Data saved to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
