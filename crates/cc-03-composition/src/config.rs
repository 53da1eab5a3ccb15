//! Engine configuration.

use crate::domain::assets::{BASE_ENERGY_BURN_ATOM, BASE_ENERGY_MINT_ATOM};
use crate::domain::errors::CompositionError;
use serde::{Deserialize, Serialize};
use shared_types::{is_zero_address, Address, U256};

/// Configuration for a [`crate::CompositionEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Identity bound into material authorization digests
    pub engine_id: Address,
    /// May mint materials directly and cancel digests
    pub owner: Address,
    /// Must have signed every material authorization
    pub signer: Address,
    /// Base energy charged per minted atom
    pub base_energy_mint: U256,
    /// Base energy used to price a burn
    pub base_energy_burn: U256,
}

impl EngineConfig {
    /// Configuration with the standard energy bases, where the owner is
    /// also the signer.
    pub fn new(engine_id: Address, owner: Address) -> Self {
        Self {
            engine_id,
            owner,
            signer: owner,
            base_energy_mint: U256::from(BASE_ENERGY_MINT_ATOM),
            base_energy_burn: U256::from(BASE_ENERGY_BURN_ATOM),
        }
    }

    pub fn with_signer(mut self, signer: Address) -> Self {
        self.signer = signer;
        self
    }

    pub fn with_base_energy(mut self, mint: impl Into<U256>, burn: impl Into<U256>) -> Self {
        self.base_energy_mint = mint.into();
        self.base_energy_burn = burn.into();
        self
    }

    /// Reject zero addresses.
    pub fn validate(&self) -> Result<(), CompositionError> {
        for (field, address) in [
            ("engine_id", &self.engine_id),
            ("owner", &self.owner),
            ("signer", &self.signer),
        ] {
            if is_zero_address(address) {
                return Err(CompositionError::InvalidConfig(format!(
                    "{field} is the zero address"
                )));
            }
        }
        Ok(())
    }
}
