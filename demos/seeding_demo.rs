//! Seeds clusters with each strategy and runs a few interaction checks.
//!
//! Run with `RUST_LOG=debug cargo run --example seeding_demo`.

use seriate::model::{PropertyFilter, Symbol, WeightedObject};
use seriate::{
    interact, Cluster, ClusterSeeder, DistanceMatrix, Instance, Interval, SeedStrategy,
    SeedingConfig,
};
use tracing_subscriber::EnvFilter;

/// Builds one instance per episode from raw `(name, start, end)` triples.
fn episode(label: &str, id: u32, raw: &[(&str, i64, i64)], filter: &PropertyFilter) -> Instance {
    let intervals: Vec<Interval> = raw
        .iter()
        .map(|&(name, start, end)| Interval::new(name, start, end).with_origin(id, "demo"))
        .collect();
    let intervals = filter.apply(&intervals);
    let sequence = intervals
        .into_iter()
        .map(|interval| WeightedObject::new(Symbol::new(vec![interval]), 1.0))
        .collect();
    Instance::new(label, id, sequence)
}

/// Symmetric difference of interval-name sets.
fn prop_distance(a: &Instance, b: &Instance) -> f64 {
    let pa = a.props();
    let pb = b.props();
    pa.symmetric_difference(&pb).count() as f64
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let filter = PropertyFilter::new().exclude_suffix("-noise");
    let instances = vec![
        episode("approach", 1, &[("near", 0, 8), ("moving", 0, 10)], &filter),
        episode("approach", 2, &[("near", 2, 9), ("moving", 1, 9), ("x-noise", 0, 1)], &filter),
        episode("approach", 3, &[("near", 1, 7), ("moving", 0, 7)], &filter),
        episode("retreat", 4, &[("far", 0, 6), ("moving", 0, 6), ("turn", 6, 7)], &filter),
        episode("retreat", 5, &[("far", 1, 5), ("moving", 0, 4), ("turn", 5, 8)], &filter),
        episode("retreat", 6, &[("far", 0, 9), ("turn", 9, 10)], &filter),
    ];

    let distances = match DistanceMatrix::compute(&instances, &prop_distance) {
        Ok(m) => m,
        Err(err) => {
            eprintln!("distance computation failed: {}", err);
            return;
        }
    };

    for strategy in SeedStrategy::ALL {
        let config = SeedingConfig::new(strategy, 2).with_rng_seed(7);
        let seeder = ClusterSeeder::new(config).with_distances(&distances);
        let mut clusters = Cluster::empty_set(2);
        match seeder.seed(&mut clusters, &instances) {
            Ok(()) => {
                println!("{}:", strategy);
                for cluster in &clusters {
                    println!("  {}", cluster);
                }
            }
            Err(err) => println!("{}: {}", strategy, err),
        }
    }

    let a = [Interval::new("A", 0, 5)];
    let b = [Interval::new("B", 4, 9)];
    let c = [Interval::new("C", 100, 105)];
    println!("A~B (window 0): {}", interact(&a, &b, 0));
    println!("A~C (window 0): {}", interact(&a, &c, 0));
    println!("A~C (window 50): {}", interact(&a, &c, 50));
}
