//! # PoA Governance Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | Quorum check | < 1μs |
//! | Application ballot, full registry vote | < 1ms |
//! | Epoch reconciliation, max registry | < 1ms |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use poa_governance::{
    ConsensusPubKey, Description, GenesisState, GovernanceApi, GovernanceService,
    InMemoryEventSink, InMemoryKVStore, OperatorAddress, Params, Validator, Vote,
};
use rand::Rng;
use std::sync::Arc;

fn validator(seed: u8) -> Validator {
    let mut pubkey = [seed; 32];
    pubkey[0] = 0xed;
    Validator::new(
        OperatorAddress::new([seed; 20]),
        ConsensusPubKey::new(pubkey),
        Description::with_moniker(format!("bench-{seed}")),
    )
}

fn seeded_service(
    params: Params,
    seated: u8,
) -> GovernanceService<InMemoryKVStore, InMemoryEventSink> {
    let mut service = GovernanceService::new(
        InMemoryKVStore::new(),
        Arc::new(InMemoryEventSink::new()),
    );
    let genesis = GenesisState::new(params, (1..=seated).map(validator).collect());
    service.init_genesis(&genesis).unwrap();
    service
}

fn bench_quorum_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("quorum_check");
    let mut rng = rand::thread_rng();

    for pool in [3u64, 15, 100] {
        let mut vote = Vote::new(validator(200));
        for i in 0..pool / 2 {
            vote.add_vote(OperatorAddress::new([i as u8; 20]), rng.gen_bool(0.5));
        }

        group.bench_with_input(BenchmarkId::from_parameter(pool), &pool, |b, &pool| {
            b.iter(|| black_box(vote.check_quorum(black_box(pool), 66)))
        });
    }

    group.finish();
}

fn bench_application_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("application_round");

    for seated in [4u8, 14] {
        group.bench_with_input(BenchmarkId::from_parameter(seated), &seated, |b, &seated| {
            b.iter_batched(
                || seeded_service(Params::new(15, 100), seated),
                |mut service| {
                    service.submit_application(validator(100)).unwrap();
                    for voter in 1..=seated {
                        let voter = OperatorAddress::new([voter; 20]);
                        service
                            .vote_application(voter, OperatorAddress::new([100; 20]), true)
                            .unwrap();
                    }
                    service
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_end_epoch(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_epoch");

    group.bench_function("joining_15", |b| {
        b.iter_batched(
            || {
                let mut service = seeded_service(Params::new(15, 0), 1);
                for seed in 2..=15 {
                    service.submit_application(validator(seed)).unwrap();
                }
                service
            },
            |mut service| black_box(service.end_epoch().unwrap()),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_quorum_check,
    bench_application_round,
    bench_end_epoch
);
criterion_main!(benches);
