//! # Energy Issuer
//!
//! The ledger's authenticated surface: the owner mints energy directly,
//! anyone else needs a single-use authorization signed by the configured
//! signer.

use crate::config::LedgerConfig;
use crate::domain::entities::Account;
use crate::domain::errors::LedgerError;
use crate::ports::ledger::Ledger;
use cc_01_signed_authorization::{
    energy_digest, AuthorizationRequest, SignedAuthorization, SignedAuthorizationApi,
};
use cc_telemetry::log_event;
use shared_types::{fmt_address, Address, Hash, U256};
use std::sync::Arc;

const COMPONENT: &str = "energy";

/// Issues fungible energy on a [`Ledger`].
pub struct EnergyIssuer<L: Ledger> {
    config: LedgerConfig,
    ledger: Arc<L>,
    authorization: SignedAuthorization,
}

impl<L: Ledger> EnergyIssuer<L> {
    /// Create an issuer for `ledger`.
    ///
    /// Fails `InvalidConfig` if the configuration holds a zero address or
    /// names a different ledger identity.
    pub fn new(config: LedgerConfig, ledger: Arc<L>) -> Result<Self, LedgerError> {
        config.validate()?;
        if config.identity != ledger.identity() {
            return Err(LedgerError::InvalidConfig(format!(
                "configured identity {} does not match ledger {}",
                fmt_address(&config.identity),
                fmt_address(&ledger.identity())
            )));
        }

        let authorization = SignedAuthorization::new(config.owner, config.signer);
        Ok(Self {
            config,
            ledger,
            authorization,
        })
    }

    pub fn ledger(&self) -> &Arc<L> {
        &self.ledger
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Owner-only direct mint.
    pub fn mint_energy(
        &self,
        caller: Address,
        to: Account,
        amount: U256,
    ) -> Result<(), LedgerError> {
        if caller != self.config.owner {
            return Err(LedgerError::Unauthorized { caller });
        }

        self.ledger.credit_fungible(to, amount)?;
        log_event!(
            info,
            COMPONENT,
            "Energy minted",
            to = %fmt_address(&to),
            amount = %amount
        );
        Ok(())
    }

    /// Mint against an authorization signed by the configured signer.
    ///
    /// The digest is consumed only when the credit succeeds.
    pub fn sign_mint_energy(
        &self,
        to: Account,
        amount: U256,
        expiry: U256,
        salt: U256,
        signature: &[u8],
        now: u64,
    ) -> Result<(), LedgerError> {
        let digest = self.energy_digest(to, amount, expiry, salt);
        let request = AuthorizationRequest::new(digest, signature, expiry);

        self.authorization
            .authorize(&request, now, || self.ledger.credit_fungible(to, amount))?;

        log_event!(
            info,
            COMPONENT,
            "Energy minted by signature",
            to = %fmt_address(&to),
            amount = %amount,
            salt = %salt
        );
        Ok(())
    }

    /// Owner-only, idempotent.
    pub fn cancel_sign_hash(&self, caller: Address, digest: Hash) -> Result<(), LedgerError> {
        Ok(self.authorization.cancel(caller, digest)?)
    }

    pub fn is_cancelled(&self, digest: &Hash) -> bool {
        self.authorization.is_cancelled(digest)
    }

    /// Digest the signer must sign for [`Self::sign_mint_energy`].
    pub fn energy_digest(&self, to: Account, amount: U256, expiry: U256, salt: U256) -> Hash {
        energy_digest(&self.config.identity, &to, amount, expiry, salt)
    }
}
