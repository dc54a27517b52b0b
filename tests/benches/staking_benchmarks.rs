//! # Liquid Staking Benchmarks
//!
//! Hot paths of the wired protocol.
//!
//! ## Usage
//!
//! ```bash
//! cargo bench --package ls-tests --bench staking_benchmarks
//! cargo bench --package ls-tests --bench staking_benchmarks -- ls-04
//! ```
//!
//! | Subsystem | Path | Expectation |
//! |-----------|------|-------------|
//! | ls-02 | submit report to quorum | O(1) per report |
//! | ls-03 | value to shares | constant, no allocation |
//! | ls-04 | request info | O(1) lookup |
//! | ls-05 | stake | mint plus ledger credit |

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ls_02_quorum::QuorumApi;
use ls_03_exchange_rate::{ExchangeRateApi, LocalBalances};
use ls_04_redemption_queue::RedemptionQueueApi;
use ls_05_staking::StakingConfig;
use ls_tests::harness::{ProtocolConfig, ProtocolHarness, ALLOCATOR, REPORTERS};
use rand::Rng;
use shared_types::{Address, OracleRecord, ONE_ETHER};
use std::time::Duration;

const STAKER: Address = [0x5A; 20];

fn roomy_harness() -> ProtocolHarness {
    let mut config = ProtocolConfig::default();
    config.staking = StakingConfig {
        maximum_share_supply: u64::MAX as u128 * ONE_ETHER,
        ..StakingConfig::default()
    };
    ProtocolHarness::with_config(config).expect("harness wiring")
}

fn bench_ls_02_quorum(c: &mut Criterion) {
    let mut group = c.benchmark_group("ls-02/quorum");

    group.bench_function("submit_first_report", |b| {
        b.iter_batched(
            || {
                let h = roomy_harness();
                h.finalize_through(250);
                h
            },
            |h| {
                let record = OracleRecord {
                    update_start_block: 101,
                    update_end_block: 250,
                    ..OracleRecord::default()
                };
                black_box(h.quorum.submit_report(&REPORTERS[0], record).unwrap())
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("record_hash_count", |b| {
        let h = roomy_harness();
        let record = OracleRecord {
            update_start_block: 101,
            update_end_block: 250,
            ..OracleRecord::default()
        };
        h.quorum.submit_report(&REPORTERS[0], record).unwrap();
        let hash = record.content_hash();
        b.iter(|| black_box(h.quorum.quorum().record_hash_count(250, &hash)))
    });

    group.finish();
}

fn bench_ls_03_rate(c: &mut Criterion) {
    let mut group = c.benchmark_group("ls-03/rate");
    let h = roomy_harness();
    h.staking.stake(&STAKER, 1_000 * ONE_ETHER, 0).unwrap();
    let local = LocalBalances {
        unallocated: 1_000 * ONE_ETHER,
        ..LocalBalances::default()
    };
    let supply = 1_000 * ONE_ETHER;
    let mut rng = rand::thread_rng();

    group.bench_function("value_to_shares", |b| {
        b.iter(|| {
            let amount = rng.gen_range(ONE_ETHER / 10..100 * ONE_ETHER);
            black_box(h.engine.value_to_shares(amount, supply, &local).unwrap())
        })
    });
    group.bench_function("controlled_value_breakdown", |b| {
        b.iter(|| black_box(h.engine.controlled_value_breakdown(&local)))
    });

    group.finish();
}

fn bench_ls_04_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("ls-04/queue");

    for requests in [100u64, 10_000] {
        let h = roomy_harness();
        h.staking
            .stake(&STAKER, u128::from(requests) * ONE_ETHER, 0)
            .unwrap();
        for _ in 0..requests {
            h.staking.unstake_request(&STAKER, ONE_ETHER, 0).unwrap();
        }
        h.staking
            .allocate(&ALLOCATOR, u128::from(requests) * ONE_ETHER / 2, 0)
            .unwrap();
        let queue = h.queue.queue();

        group.bench_with_input(
            BenchmarkId::new("request_info", requests),
            &requests,
            |b, &count| {
                let mut rng = rand::thread_rng();
                b.iter(|| black_box(queue.request_info(rng.gen_range(0..count)).unwrap()))
            },
        );
    }

    group.finish();
}

fn bench_ls_05_staking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ls-05/staking");
    let h = roomy_harness();

    group.bench_function("stake", |b| {
        b.iter(|| black_box(h.staking.stake(&STAKER, ONE_ETHER, 0).unwrap()))
    });
    group.bench_function("unstake_request", |b| {
        b.iter_batched(
            || h.staking.stake(&STAKER, ONE_ETHER, 0).unwrap(),
            |shares| black_box(h.staking.unstake_request(&STAKER, shares, 0).unwrap()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    name = staking_benches;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5));
    targets =
        bench_ls_02_quorum,
        bench_ls_03_rate,
        bench_ls_04_queue,
        bench_ls_05_staking,
);

criterion_main!(staking_benches);
