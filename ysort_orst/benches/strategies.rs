use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ysort_orst::orst::{Order, Strategy};
use ysort_orst::points::reversed;

fn benchmark_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("reversed_points");

    for n in [100, 1_000, 10_000] {
        let points = reversed(n);

        for strategy in Strategy::ALL {
            if strategy.is_quadratic() && n > 1_000 {
                continue;
            }

            group.bench_with_input(BenchmarkId::new(strategy.name(), n), &points, |b, points| {
                b.iter_batched(
                    || points.clone(),
                    |mut points| {
                        strategy.sort(&mut points, Order::Ascending);
                        black_box(points)
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_strategies);
criterion_main!(benches);
