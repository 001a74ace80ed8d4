use pivot_bench::rng::{process_rng, process_seed};
use pivot_bench::{Partitioning, PivotPolicy, SortConfig, DEFAULT_MAX_DEPTH};
use rand::Rng;

#[test]
fn defaults() {
    let config = SortConfig::default();

    assert_eq!(config.pivot, PivotPolicy::First);
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(config.max_depth, 1000);
    assert_eq!(config.partitioning, Partitioning::Legacy);
}

#[test]
fn builders() {
    let config = SortConfig::new(PivotPolicy::Random)
        .with_max_depth(12)
        .with_partitioning(Partitioning::ThreeWay);

    assert_eq!(config.pivot, PivotPolicy::Random);
    assert_eq!(config.max_depth, 12);
    assert_eq!(config.partitioning, Partitioning::ThreeWay);
    assert_eq!(config.with_pivot(PivotPolicy::Last).pivot, PivotPolicy::Last);
}

#[test]
fn parse_tags() {
    assert_eq!("Random".parse::<PivotPolicy>().unwrap(), PivotPolicy::Random);
    assert_eq!("three-way".parse::<Partitioning>().unwrap(), Partitioning::ThreeWay);
    assert_eq!("three_way".parse::<Partitioning>().unwrap(), Partitioning::ThreeWay);
    assert_eq!(Partitioning::ThreeWay.to_string(), "three-way");

    assert!("middle".parse::<PivotPolicy>().unwrap_err().is_invalid_argument());
    assert!("inplace".parse::<Partitioning>().unwrap_err().is_invalid_argument());
}

#[test]
fn process_seed_is_stable() {
    assert_eq!(process_seed(), process_seed());

    let a: u64 = process_rng().gen();
    let b: u64 = process_rng().gen();
    assert_eq!(a, b);
}
