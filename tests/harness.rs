use std::time::Duration;

use pivot_bench::harness::{benchmark, benchmark_tagged, sweep, time_sort};
use pivot_bench::rng::seeded;
use pivot_bench::{CaseType, Partitioning, PivotPolicy, SortConfig};

#[test]
fn one_sample_per_size() {
    let sizes = [10, 0, 200, 50];
    let result = benchmark(
        PivotPolicy::Random,
        CaseType::Average,
        &sizes,
        &SortConfig::default(),
        &mut seeded(1),
    );

    assert_eq!(result.pivot, PivotPolicy::Random);
    assert_eq!(result.case, CaseType::Average);
    assert_eq!(result.sizes(), sizes.to_vec());
    assert_eq!(result.durations().len(), sizes.len());
    assert!(result.durations().iter().all(|&d| d >= Duration::ZERO));
}

#[test]
fn no_sizes() {
    let result = benchmark(
        PivotPolicy::First,
        CaseType::Best,
        &[],
        &SortConfig::default(),
        &mut seeded(1),
    );
    assert!(result.samples.is_empty());
}

#[test]
fn pivot_argument_overrides_config() {
    let config = SortConfig::new(PivotPolicy::Last);
    let result = benchmark(PivotPolicy::First, CaseType::Best, &[100], &config, &mut seeded(1));

    // First pivot on ascending input keeps only the first element.
    let stats = result.samples[0].stats;
    assert_eq!(stats.short_circuits, 1);
    assert_eq!(stats.dropped, 99);
}

#[test]
fn time_sort_records_stats() {
    let config = SortConfig::new(PivotPolicy::Random).with_partitioning(Partitioning::ThreeWay);
    let sample = time_sort(CaseType::Worst, 500, &config, &mut seeded(3));

    assert_eq!(sample.size, 500);
    assert!(sample.stats.is_complete());
}

#[test]
fn invalid_tags() {
    let config = SortConfig::default();

    let err = benchmark_tagged("middle", "best", &[10], &config, &mut seeded(1)).unwrap_err();
    assert!(err.is_invalid_argument());

    let err = benchmark_tagged("first", "medium", &[10], &config, &mut seeded(1)).unwrap_err();
    assert!(err.is_invalid_argument());

    // Tags are checked even when there is nothing to time.
    let err = benchmark_tagged("middle", "best", &[], &config, &mut seeded(1)).unwrap_err();
    assert!(err.is_invalid_argument());

    let result = benchmark_tagged("last", "worst", &[10, 20], &config, &mut seeded(1)).unwrap();
    assert_eq!(result.samples.len(), 2);
}

#[test]
fn sweep_covers_all_combinations() {
    let sizes = [16, 64];
    let report = sweep(&sizes, &SortConfig::default(), &mut seeded(5));

    assert_eq!(report.sizes, sizes.to_vec());
    assert_eq!(report.results.len(), 9);

    let order = report
        .results
        .iter()
        .map(|r| (r.pivot, r.case))
        .collect::<Vec<_>>();
    let expected = PivotPolicy::ALL
        .iter()
        .flat_map(|&p| CaseType::ALL.iter().map(move |&c| (p, c)))
        .collect::<Vec<_>>();
    assert_eq!(order, expected);

    for result in &report.results {
        assert_eq!(result.sizes(), sizes.to_vec());
    }

    let worst_last = report.get(PivotPolicy::Last, CaseType::Worst).unwrap();
    assert_eq!(worst_last.label(), "worst (last pivot)");
}

#[test]
fn sweep_report_json() {
    let config = SortConfig::default().with_max_depth(50);
    let report = sweep(&[8], &config, &mut seeded(5));

    let json: serde_json::Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

    assert_eq!(json["max_depth"], 50);
    assert_eq!(json["partitioning"], "legacy");
    assert_eq!(json["results"].as_array().unwrap().len(), 9);
    assert_eq!(json["results"][0]["pivot"], "first");
    assert_eq!(json["results"][0]["case"], "best");

    let sample = &json["results"][0]["samples"][0];
    assert_eq!(sample["size"], 8);
    assert!(sample["elapsed_secs"].as_f64().unwrap() >= 0.0);
    assert_eq!(sample["stats"]["dropped"], 7);
}

#[test]
fn report_text() {
    let report = sweep(&[32], &SortConfig::default(), &mut seeded(5));
    let text = report.to_string();

    assert!(text.contains("partitioning: legacy"));
    assert!(text.contains("average (random pivot)"));
    assert!(text.contains("dropped: 31"));
}
