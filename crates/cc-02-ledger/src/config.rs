//! Ledger configuration.

use crate::domain::errors::LedgerError;
use serde::{Deserialize, Serialize};
use shared_types::{is_zero_address, Address};

/// Configuration for a ledger and its energy issuer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Identity bound into energy authorization digests
    pub identity: Address,
    /// May mint energy directly and cancel digests
    pub owner: Address,
    /// Must have signed every energy authorization
    pub signer: Address,
}

impl LedgerConfig {
    /// Configuration where the owner is also the signer.
    pub fn new(identity: Address, owner: Address) -> Self {
        Self {
            identity,
            owner,
            signer: owner,
        }
    }

    /// Use a separate signing key.
    pub fn with_signer(mut self, signer: Address) -> Self {
        self.signer = signer;
        self
    }

    /// Reject zero addresses.
    pub fn validate(&self) -> Result<(), LedgerError> {
        for (field, address) in [
            ("identity", &self.identity),
            ("owner", &self.owner),
            ("signer", &self.signer),
        ] {
            if is_zero_address(address) {
                return Err(LedgerError::InvalidConfig(format!("{field} is the zero address")));
            }
        }
        Ok(())
    }
}
