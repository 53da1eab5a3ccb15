//! # End-to-End Flows
//!
//! Energy issuance, material issuance, composition and decomposition
//! against one shared ledger.
//!
//! ## Flow Tested:
//!
//! 1. **EnergyIssuer → Ledger**: signed energy mint credits the user
//! 2. **CompositionEngine → Ledger**: signed batch material mint
//! 3. **CompositionEngine → Ledger**: atoms minted from energy + materials
//! 4. **CompositionEngine → Ledger**: atoms burned back into materials

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use cc_01_signed_authorization::test_helpers::sign_digest;
    use cc_01_signed_authorization::AuthorizationError;
    use cc_02_ledger::{Ledger, LedgerError};
    use cc_03_composition::{
        CompositionApi, CompositionError, BASE_ENERGY_BURN_ATOM, BASE_ENERGY_MINT_ATOM, ELECTRON,
        END_ATOMS_IDS, NEUTRON, PROTON, START_ATOMS_IDS,
    };
    use shared_types::{Address, U256};

    const USER: Address = [0x05; 20];
    const BENEFICIARY: Address = [0xBE; 20];

    fn u(value: u64) -> U256 {
        U256::from(value)
    }

    fn mats() -> [U256; 3] {
        [u(NEUTRON), u(PROTON), u(ELECTRON)]
    }

    /// Fund `account` entirely through signed authorizations.
    fn fund_by_signature(world: &World, account: Address, energy: U256, materials: [U256; 3]) {
        let salt = random_salt();
        let digest = world.issuer.energy_digest(account, energy, expiry(), salt);
        let signature = sign_digest(&digest, &world.signer);
        world
            .issuer
            .sign_mint_energy(account, energy, expiry(), salt, &signature, NOW)
            .unwrap();

        let salt = random_salt();
        let digest = world
            .engine
            .batch_mat_digest(account, &mats(), &materials, expiry(), salt);
        let signature = sign_digest(&digest, &world.signer);
        world
            .engine
            .sign_mint_batch_mats(account, mats(), materials, expiry(), salt, &signature, NOW)
            .unwrap();
    }

    // =============================================================================
    // FULL LIFECYCLE
    // =============================================================================

    #[test]
    fn test_every_atom_can_be_composed_and_decomposed() {
        let world = World::new();
        let amount = 2u64;

        for atom_id in START_ATOMS_IDS..END_ATOMS_IDS {
            let id = u(atom_id);
            let z = atom_id - START_ATOMS_IDS + 1;
            let mint = world
                .engine
                .energy_neutron(u(BASE_ENERGY_MINT_ATOM), id)
                .unwrap();
            let burn = world
                .engine
                .energy_neutron(u(BASE_ENERGY_BURN_ATOM), id)
                .unwrap();
            // Mint and burn agree on the neutron count
            assert_eq!(mint.neutron, burn.neutron);

            let burn_fee = (burn.energy / u(2)) * u(amount);
            fund_by_signature(
                &world,
                USER,
                mint.energy * u(amount) + burn_fee,
                [u(mint.neutron * amount), u(z * amount), u(z * amount)],
            );

            world.engine.mint_atoms(USER, USER, id, u(amount)).unwrap();
            world
                .engine
                .burn_atoms(USER, USER, BENEFICIARY, id, u(amount))
                .unwrap();

            assert_eq!(world.ledger.balance_of(&USER), U256::zero());
            assert_eq!(world.ledger.asset_balance_of(&USER, &id), U256::zero());
        }

        // Materials are conserved: everything consumed went to the beneficiary
        for material in mats() {
            assert_eq!(world.ledger.asset_balance_of(&USER, &material), U256::zero());
            assert_eq!(
                world.ledger.asset_supply(&material),
                world.ledger.asset_balance_of(&BENEFICIARY, &material)
            );
        }
        assert_eq!(world.ledger.total_supply(), U256::zero());
    }

    #[test]
    fn test_round_trip_restores_materials_not_energy() {
        let world = World::new();
        let carbon = u(START_ATOMS_IDS + 5);
        let cost = world
            .engine
            .energy_neutron(u(BASE_ENERGY_MINT_ATOM), carbon)
            .unwrap();
        assert_eq!(cost.neutron, 6);

        let materials = [u(6 * 4), u(6 * 4), u(6 * 4)];
        let energy = cost.energy * u(4) + u(10_000);
        fund_by_signature(&world, USER, energy, materials);

        world.engine.mint_atoms(USER, USER, carbon, u(4)).unwrap();
        world.engine.burn_atoms(USER, USER, USER, carbon, u(4)).unwrap();

        for (material, before) in mats().iter().zip(materials) {
            assert_eq!(world.ledger.asset_balance_of(&USER, material), before);
        }
        assert!(world.ledger.balance_of(&USER) < energy);
    }

    // =============================================================================
    // AUTHORIZATION SEPARATION
    // =============================================================================

    #[test]
    fn test_issuer_and_engine_keep_separate_cancellation_sets() {
        let world = World::new();
        let digest = world
            .issuer
            .energy_digest(USER, u(10), expiry(), u(1));

        world.engine.cancel_sign_hash(OWNER, digest).unwrap();
        assert!(world.engine.is_cancelled(&digest));
        assert!(!world.issuer.is_cancelled(&digest));

        let signature = sign_digest(&digest, &world.signer);
        world
            .issuer
            .sign_mint_energy(USER, u(10), expiry(), u(1), &signature, NOW)
            .unwrap();
        assert_eq!(world.ledger.balance_of(&USER), u(10));
    }

    #[test]
    fn test_energy_signature_not_usable_for_materials() {
        let world = World::new();
        let salt = u(7);
        let digest = world.issuer.energy_digest(USER, u(5), expiry(), salt);
        let signature = sign_digest(&digest, &world.signer);

        let err = world
            .engine
            .sign_mint_mats(USER, u(NEUTRON), u(5), expiry(), salt, &signature, NOW)
            .unwrap_err();
        assert!(matches!(
            err,
            CompositionError::Authorization(AuthorizationError::InvalidSignature(_))
        ));
        assert_eq!(world.ledger.asset_supply(&u(NEUTRON)), U256::zero());
    }

    #[test]
    fn test_replay_fails_from_any_submitter() {
        let world = World::new();
        let salt = u(99);
        let digest = world.issuer.energy_digest(USER, u(50), expiry(), salt);
        let signature = sign_digest(&digest, &world.signer);

        world
            .issuer
            .sign_mint_energy(USER, u(50), expiry(), salt, &signature, NOW)
            .unwrap();

        // Same authorization, later in time
        let replay =
            world
                .issuer
                .sign_mint_energy(USER, u(50), expiry(), salt, &signature, NOW + 10);
        assert_eq!(
            replay,
            Err(LedgerError::Authorization(AuthorizationError::Cancelled {
                digest
            }))
        );
        assert_eq!(world.ledger.total_supply(), u(50));
    }

    #[test]
    fn test_expiry_is_strict() {
        let world = World::new();
        let digest = world.issuer.energy_digest(USER, u(1), u(NOW), u(1));
        let signature = sign_digest(&digest, &world.signer);

        let err = world
            .issuer
            .sign_mint_energy(USER, u(1), u(NOW), u(1), &signature, NOW)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Authorization(AuthorizationError::Expired { .. })
        ));

        world
            .issuer
            .sign_mint_energy(USER, u(1), u(NOW), u(1), &signature, NOW - 1)
            .unwrap();
    }

    // =============================================================================
    // TELEMETRY
    // =============================================================================

    #[test]
    fn test_operations_are_counted() {
        let world = World::new();
        let before = cc_telemetry::COMPOSITION_OPERATIONS
            .with_label_values(&["mint_atoms", "failure"])
            .get();

        let _ = world.engine.mint_atoms(USER, USER, u(START_ATOMS_IDS), u(1));

        let after = cc_telemetry::COMPOSITION_OPERATIONS
            .with_label_values(&["mint_atoms", "failure"])
            .get();
        assert!(after >= before + 1.0);
    }
}
