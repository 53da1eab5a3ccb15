//! # Atomic Composition Test Suite
//!
//! Unified test crate for flows that span more than one crate.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks
//! └── src/integration/  # Cross-crate flows
//!     ├── flows.rs        # issuer → engine → ledger end to end
//!     └── concurrency.rs  # single-use digests and balances under contention
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p cc-tests
//! cargo test -p cc-tests integration::concurrency
//! cargo bench -p cc-tests
//! ```

#![allow(dead_code)]

pub mod integration;

/// Fixture shared by the integration flows.
pub mod fixtures {
    use cc_01_signed_authorization::test_helpers::{generate_keypair, signer_address, SigningKey};
    use cc_02_ledger::{EnergyIssuer, InMemoryLedger, LedgerConfig};
    use cc_03_composition::{CompositionEngine, EngineConfig};
    use shared_types::{Address, U256};
    use std::sync::Arc;

    pub const ENGINE: Address = [0xE1; 20];
    pub const LEDGER: Address = [0x1E; 20];
    pub const OWNER: Address = [0x0A; 20];
    pub const NOW: u64 = 1_700_000_000;

    /// One ledger shared by an energy issuer and a composition engine,
    /// both trusting the same signer.
    pub struct World {
        pub ledger: Arc<InMemoryLedger>,
        pub issuer: EnergyIssuer<InMemoryLedger>,
        pub engine: CompositionEngine<InMemoryLedger>,
        pub signer: SigningKey,
    }

    impl World {
        pub fn new() -> Self {
            let (signer, _) = generate_keypair();
            let signer_addr = signer_address(&signer);
            let ledger = Arc::new(InMemoryLedger::new(LEDGER));

            let issuer = EnergyIssuer::new(
                LedgerConfig::new(LEDGER, OWNER).with_signer(signer_addr),
                Arc::clone(&ledger),
            )
            .expect("issuer config");
            let engine = CompositionEngine::new(
                EngineConfig::new(ENGINE, OWNER).with_signer(signer_addr),
                Arc::clone(&ledger),
            )
            .expect("engine config");

            Self {
                ledger,
                issuer,
                engine,
                signer,
            }
        }
    }

    impl Default for World {
        fn default() -> Self {
            Self::new()
        }
    }

    pub fn expiry() -> U256 {
        U256::from(NOW + 86_400)
    }

    pub fn random_salt() -> U256 {
        U256::from(rand::random::<u64>())
    }
}
