use std::env;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use regex::Regex;

use pivot_bench::harness::DEFAULT_SIZES;
use pivot_bench::rng::seeded;
use pivot_bench::{sort_with, CaseType, Partitioning, PivotPolicy, SortConfig};

// Only benchmarks whose `<partitioning>-<pivot>-<case>` name matches this are registered,
// eg. BENCH_REGEX="three-way-random-.*".
fn bench_filter() -> Option<Regex> {
    env::var("BENCH_REGEX")
        .ok()
        .map(|pattern| Regex::new(&pattern).unwrap())
}

fn pin_thread_to_core() {
    use std::cell::Cell;
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    AFFINITY_ALREADY_SET.with(|affinity_already_set| {
        if !affinity_already_set.get() {
            if let Some(core_id_2) = core_affinity::get_core_ids()
                .and_then(|ids| ids.into_iter().find(|id| id.id == pin_core_id))
            {
                core_affinity::set_for_current(core_id_2);
            }

            affinity_already_set.set(true);
        }
    });
}

fn bench_pivot_policies(c: &mut Criterion) {
    pin_thread_to_core();

    let filter = bench_filter();

    for partitioning in [Partitioning::Legacy, Partitioning::ThreeWay] {
        for pivot in PivotPolicy::ALL {
            for case in CaseType::ALL {
                let group_name = format!("{partitioning}-{pivot}-{case}");
                if let Some(filter) = &filter {
                    if !filter.is_match(&group_name) {
                        continue;
                    }
                }

                let config = SortConfig::new(pivot).with_partitioning(partitioning);
                let mut group = c.benchmark_group(group_name);

                for size in DEFAULT_SIZES {
                    let mut rng = seeded(size as u64);
                    let input = case.generate(size, &mut rng);

                    group.throughput(Throughput::Elements(size as u64));
                    group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
                        b.iter(|| sort_with(black_box(input.as_slice()), &config, &mut rng))
                    });
                }

                group.finish();
            }
        }
    }
}

criterion_group!(benches, bench_pivot_policies);
criterion_main!(benches);
