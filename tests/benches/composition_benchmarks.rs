//! # Composition Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | cc-01 Signed Authorization | personal-sign signer recovery |
//! | cc-03 Composition | table lookup, mint plan, full mint through the ledger |

use cc_01_signed_authorization::test_helpers::{generate_keypair, sign_digest};
use cc_01_signed_authorization::{recover_signer, single_asset_digest, EcdsaSignature};
use cc_02_ledger::Ledger;
use cc_03_composition::{
    mint_plan, CompositionApi, CompositionTable, BASE_ENERGY_MINT_ATOM, END_ATOMS_IDS,
    START_ATOMS_IDS,
};
use cc_tests::fixtures::{World, OWNER};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shared_types::{AssetAmount, U256};

fn bench_signer_recovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("cc-01-signed-authorization");

    let (key, _) = generate_keypair();
    let digest = single_asset_digest(
        &[0xE1; 20],
        &[0x1E; 20],
        &[0x05; 20],
        U256::zero(),
        U256::from(1),
        U256::MAX,
        U256::one(),
    );
    let signature = EcdsaSignature::from_bytes(&sign_digest(&digest, &key)).unwrap();

    group.bench_function("recover_signer", |b| {
        b.iter(|| black_box(recover_signer(&digest, &signature).is_ok()))
    });

    group.finish();
}

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("cc-03-table");
    let table = CompositionTable::new();
    let base = U256::from(BASE_ENERGY_MINT_ATOM);

    group.bench_function("decode", |b| b.iter(|| black_box(CompositionTable::new())));

    group.throughput(Throughput::Elements(END_ATOMS_IDS - START_ATOMS_IDS));
    group.bench_function("energy_cost_all_atoms", |b| {
        b.iter(|| {
            for id in START_ATOMS_IDS..END_ATOMS_IDS {
                black_box(table.energy_cost(base, &U256::from(id)).is_ok());
            }
        })
    });

    for size in [1usize, 16, 118] {
        let entries: Vec<_> = (0..size)
            .map(|i| AssetAmount::new(START_ATOMS_IDS + i as u64, 3u64))
            .collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("mint_plan", size), &entries, |b, entries| {
            b.iter(|| black_box(mint_plan(&table, base, [1; 20], [2; 20], entries).is_ok()))
        });
    }

    group.finish();
}

fn bench_mint_atoms(c: &mut Criterion) {
    let mut group = c.benchmark_group("cc-03-engine");
    let world = World::new();
    let user = [0x05; 20];
    let hydrogen = U256::from(START_ATOMS_IDS);

    world
        .issuer
        .mint_energy(OWNER, user, U256::MAX / U256::from(2u8))
        .unwrap();
    world
        .engine
        .mint_batch_mats(
            OWNER,
            user,
            &[U256::from(1), U256::from(2)],
            &[U256::MAX / U256::from(2u8), U256::MAX / U256::from(2u8)],
        )
        .unwrap();

    group.bench_function("mint_hydrogen", |b| {
        b.iter(|| {
            world
                .engine
                .mint_atoms(user, user, hydrogen, U256::one())
                .unwrap()
        })
    });

    black_box(world.ledger.asset_balance_of(&user, &hydrogen));
    group.finish();
}

criterion_group!(benches, bench_signer_recovery, bench_table, bench_mint_atoms);
criterion_main!(benches);
