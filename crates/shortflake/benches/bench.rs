use core::hint::black_box;
use std::time::Instant;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use shortflake::{
    AtomicShortIdGenerator, Base56Ext, BasicShortIdGenerator, DEFAULT_EPOCH, LockShortIdGenerator,
    MonotonicClock, ShortId, ShortIdGenerator, ShortKeyId, TimeSource,
};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration.
const TOTAL_IDS: usize = 4096;

/// Benchmarks a hot-path generator where every poll is `Ready`.
///
/// A fresh generator with a fixed mock clock has exactly `max_sequence + 1`
/// allocations available in its tick, which is what `TOTAL_IDS` consumes.
fn bench_generator<G>(c: &mut Criterion, group_name: &str, generator_factory: impl Fn() -> G)
where
    G: ShortIdGenerator<ShortKeyId, FixedMockTime>,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    let id = generator.next_id().expect("mock clock cannot regress");
                    black_box(id);
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks allocation against the real monotonic clock, including the
/// forward wait when a tick's sequence space runs dry.
fn bench_generator_wallclock<G>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> G,
) where
    G: ShortIdGenerator<ShortKeyId, MonotonicClock>,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let generator = generator_factory();
            let start = Instant::now();

            for _ in 0..iters {
                for _ in 0..TOTAL_IDS {
                    let id = generator.next_id().expect("monotonic clock cannot regress");
                    black_box(id);
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("base56/encode");
    group.throughput(Throughput::Elements(1));

    let id = <ShortKeyId as ShortId>::from_components(1_234_567_890, 1, 42);
    group.bench_function("encode", |b| {
        b.iter(|| black_box(black_box(&id).encode()));
    });

    group.finish();
}

fn benches(c: &mut Criterion) {
    bench_generator(c, "seq/basic", || {
        BasicShortIdGenerator::<ShortKeyId, _>::new(0, FixedMockTime { millis: 1 })
            .expect("node id 0 fits the layout")
    });
    bench_generator(c, "seq/lock", || {
        LockShortIdGenerator::<ShortKeyId, _>::new(0, FixedMockTime { millis: 1 })
            .expect("node id 0 fits the layout")
    });
    bench_generator(c, "seq/atomic", || {
        AtomicShortIdGenerator::<ShortKeyId, _>::new(0, FixedMockTime { millis: 1 })
            .expect("node id 0 fits the layout")
    });

    bench_generator_wallclock(c, "wallclock/lock", || {
        let clock = MonotonicClock::with_epoch(DEFAULT_EPOCH).expect("epoch is in the past");
        LockShortIdGenerator::<ShortKeyId, _>::new(0, clock).expect("node id 0 fits the layout")
    });
    bench_generator_wallclock(c, "wallclock/atomic", || {
        let clock = MonotonicClock::with_epoch(DEFAULT_EPOCH).expect("epoch is in the past");
        AtomicShortIdGenerator::<ShortKeyId, _>::new(0, clock).expect("node id 0 fits the layout")
    });

    bench_encode(c);
}

criterion_group!(benchmarks, benches);
criterion_main!(benchmarks);
