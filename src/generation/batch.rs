use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::generation::bundle::NearbyGenerator;
use crate::query::{LocationQuery, NearbyResponse, handle_nearby_query};
use crate::utils::error::Error;

/// Handles many independent queries in parallel.
///
/// Query `i` draws from its own `StdRng` seeded with `seed + i`, so the
/// output does not depend on how rayon schedules the work. Results keep
/// the input order; rejected queries yield their error in place.
pub fn generate_batch(
    generator: &NearbyGenerator,
    queries: &[LocationQuery],
    seed: u64,
) -> Vec<Result<NearbyResponse, Error>> {
    let results: Vec<Result<NearbyResponse, Error>> = queries
        .par_iter()
        .enumerate()
        .map(|(i, query)| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            handle_nearby_query(generator, &mut rng, query)
        })
        .collect();

    let accepted = results.iter().filter(|r| r.is_ok()).count();
    info!(
        "Batch of {} queries: {} generated, {} rejected",
        queries.len(),
        accepted,
        queries.len() - accepted
    );
    results
}
