//! # Concurrency
//!
//! Many threads racing on one ledger and one cancellation set.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use cc_01_signed_authorization::test_helpers::sign_digest;
    use cc_02_ledger::Ledger;
    use cc_03_composition::{CompositionApi, NEUTRON, START_ATOMS_IDS};
    use shared_types::{Address, U256};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    const THREADS: usize = 16;

    #[test]
    fn test_signed_mint_succeeds_exactly_once() {
        let world = Arc::new(World::new());
        let to: Address = [0x77; 20];
        let digest = world
            .engine
            .mat_digest(to, U256::from(NEUTRON), U256::from(5), expiry(), U256::one());
        let signature = Arc::new(sign_digest(&digest, &world.signer));
        let successes = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let world = Arc::clone(&world);
                let signature = Arc::clone(&signature);
                let successes = Arc::clone(&successes);
                thread::spawn(move || {
                    let result = world.engine.sign_mint_mats(
                        to,
                        U256::from(NEUTRON),
                        U256::from(5),
                        expiry(),
                        U256::one(),
                        &signature,
                        NOW,
                    );
                    if result.is_ok() {
                        successes.fetch_add(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(successes.load(Ordering::SeqCst), 1);
        assert_eq!(
            world.ledger.asset_balance_of(&to, &U256::from(NEUTRON)),
            U256::from(5)
        );
    }

    #[test]
    fn test_competing_mints_never_overdraw() {
        let world = Arc::new(World::new());
        let user: Address = [0x05; 20];
        let hydrogen = U256::from(START_ATOMS_IDS);

        // Enough for exactly five hydrogen atoms
        world
            .issuer
            .mint_energy(OWNER, user, U256::from(500))
            .unwrap();
        world
            .engine
            .mint_batch_mats(
                OWNER,
                user,
                &[U256::from(0), U256::from(1), U256::from(2)],
                &[U256::zero(), U256::from(5), U256::from(5)],
            )
            .unwrap();

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let world = Arc::clone(&world);
                thread::spawn(move || world.engine.mint_atoms(user, user, hydrogen, U256::one()).is_ok())
            })
            .collect();

        let minted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(minted, 5);
        assert_eq!(world.ledger.balance_of(&user), U256::zero());
        assert_eq!(world.ledger.asset_balance_of(&user, &hydrogen), U256::from(5));
        assert_eq!(world.ledger.asset_supply(&hydrogen), U256::from(5));
    }
}
