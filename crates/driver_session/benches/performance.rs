//! Performance benchmarks for driver_session using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use driver_session::clock::{SessionClock, TimerKind};
use driver_session::session::RideRequestSession;

fn bench_request_cycles(c: &mut Criterion) {
    let cycles = [10usize, 100, 1000];

    let mut group = c.benchmark_group("request_cycles");
    for n in cycles {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut session = RideRequestSession::builder().with_seed(42).build();
                session.go_online();
                for _ in 0..n {
                    // Idle delay + search window bring the next offer in,
                    // then decline it to restart the loop.
                    session.advance(3000 + 4500);
                    session.decline();
                }
                black_box(session.telemetry());
            });
        });
    }
    group.finish();
}

fn bench_clock_churn(c: &mut Criterion) {
    c.bench_function("clock_arm_disarm_10k", |b| {
        b.iter(|| {
            let mut clock = SessionClock::default();
            for _ in 0..10_000 {
                clock.arm(TimerKind::IdleDelay, 10);
                clock.disarm(TimerKind::IdleDelay);
            }
            black_box(clock.pending_timers());
        });
    });
}

criterion_group!(benches, bench_request_cycles, bench_clock_churn);
criterion_main!(benches);
