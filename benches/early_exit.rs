use std::{hint::black_box, ops::ControlFlow::Continue, time::Duration};

use criterion::{Criterion, criterion_group, criterion_main};
use generic_reduce::{Signal, from_iter, generic_reduce, repeat};
use rand::{RngExt, SeedableRng, rngs::StdRng};

fn early_exit(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    macro_rules! bench_fn {
        ($group:ident.$fn_name:ident($nums:expr)) => {
            $group.bench_function(stringify!($fn_name), |bencher| {
                bencher.iter(|| $fn_name(black_box($nums)));
            });
        };
    }

    let mut nums: Box<_> = std::iter::repeat_with(|| rng.random_range(1..=i32::MAX))
        .take(500_000)
        .collect();
    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &nums[..10]);
    nums[400_000] = 0;

    let mut group = criterion.benchmark_group("find_zero_late");
    bench_fn!(group.iter_position_0(&nums));
    bench_fn!(group.reducible_position_0(&nums));
    group.finish();

    let mut group = criterion.benchmark_group("unbounded_until_signal");
    bench_fn!(group.repeat_until(400_000_u64));
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(5))
        .measurement_time(Duration::from_secs(15))
        .sample_size(300);
    targets = early_exit
}
criterion_main!(benches);

fn iter_position_0(nums: &[i32]) -> Option<usize> {
    nums.iter().position(|&num| num == 0)
}

fn reducible_position_0(nums: &[i32]) -> Option<usize> {
    let index = generic_reduce(
        from_iter(nums),
        |index, &num| {
            if num == 0 {
                Signal::stop(index)
            } else {
                Continue(index + 1)
            }
        },
        0,
    );

    (index < nums.len()).then_some(index)
}

fn repeat_until(limit: u64) -> u64 {
    generic_reduce(
        repeat(1_u64),
        |acc, x| if acc >= limit { Signal::stop(acc) } else { Continue(acc + x) },
        0,
    )
}
