use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use othello_core::perft::perft_root;

const BENCH_DEPTHS: [u32; 2] = [6, 7];
const REFERENCE_COUNTS: &[(u32, u64)] = &[(6, 8_200), (7, 55_092)];

fn perft_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_root");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(5));

    for &depth in &BENCH_DEPTHS {
        let expected = REFERENCE_COUNTS
            .iter()
            .find_map(|&(d, nodes)| (d == depth).then_some(nodes))
            .unwrap_or_else(|| panic!("no reference node count for perft depth {depth}"));
        assert_eq!(perft_root(depth), expected, "node count mismatch at depth {depth}");

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(perft_root(black_box(depth))));
        });
    }

    group.finish();
}

criterion_group!(benches, perft_benchmark);
criterion_main!(benches);
