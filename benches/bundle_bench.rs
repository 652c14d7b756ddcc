use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nearby_synth::generation::batch::generate_batch;
use nearby_synth::generation::bundle::NearbyGenerator;
use nearby_synth::query::LocationQuery;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_single_bundle(c: &mut Criterion) {
    let generator = NearbyGenerator::default();
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("generate_bundle_srinagar", |b| {
        b.iter(|| {
            let bundle = generator.generate(&mut rng, 34.0837, 74.7973, 5.0);
            black_box(bundle);
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let generator = NearbyGenerator::default();
    // grid of points across the bounding box
    let queries: Vec<LocationQuery> = (0..1_000)
        .map(|i| {
            let lat = 6.4 + (i % 40) as f64 * 0.78;
            let lng = 68.7 + (i / 40) as f64 * 1.14;
            LocationQuery::new(lat, lng)
        })
        .collect();

    c.bench_function("generate_batch_1k_queries", |b| {
        b.iter(|| {
            let results = generate_batch(&generator, &queries, 12345);
            black_box(results);
        })
    });
}

criterion_group!(benches, bench_single_bundle, bench_batch);
criterion_main!(benches);
