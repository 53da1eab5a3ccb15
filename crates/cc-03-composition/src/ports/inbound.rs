//! # Inbound Ports (Driving Ports / API)
//!
//! Operations exposed by the composition engine. Every operation takes the
//! caller explicitly and either applies in full or changes nothing.

use crate::domain::errors::CompositionError;
use crate::domain::table::EnergyNeutron;
use cc_01_signed_authorization::BATCH_DIGEST_WIDTH;
use shared_types::{Address, Hash, U256};

/// Composition engine API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait CompositionApi: Send + Sync {
    /// Owner-only material mint.
    ///
    /// # Errors
    /// * `Unauthorized` - caller is not the owner
    /// * `InvalidAsset` - `mat_id` is not 0, 1 or 2
    fn mint_mats(
        &self,
        caller: Address,
        to: Address,
        mat_id: U256,
        amount: U256,
    ) -> Result<(), CompositionError>;

    /// Owner-only batch material mint. Every id is checked before any credit.
    fn mint_batch_mats(
        &self,
        caller: Address,
        to: Address,
        ids: &[U256],
        amounts: &[U256],
    ) -> Result<(), CompositionError>;

    /// Material mint against a signed single-asset digest.
    #[allow(clippy::too_many_arguments)]
    fn sign_mint_mats(
        &self,
        to: Address,
        mat_id: U256,
        amount: U256,
        expiry: U256,
        salt: U256,
        signature: &[u8],
        now: u64,
    ) -> Result<(), CompositionError>;

    /// Material mint against a signed fixed-width batch digest.
    #[allow(clippy::too_many_arguments)]
    fn sign_mint_batch_mats(
        &self,
        to: Address,
        ids: [U256; BATCH_DIGEST_WIDTH],
        amounts: [U256; BATCH_DIGEST_WIDTH],
        expiry: U256,
        salt: U256,
        signature: &[u8],
        now: u64,
    ) -> Result<(), CompositionError>;

    /// Compose `amount` atoms of `atom_id` from the caller's energy and
    /// materials, credited to `to`.
    ///
    /// # Errors
    /// * `NotAnAtom` - id outside the atom range
    /// * `InsufficientEnergy` / `InsufficientMaterial` - caller is short
    fn mint_atoms(
        &self,
        caller: Address,
        to: Address,
        atom_id: U256,
        amount: U256,
    ) -> Result<(), CompositionError>;

    fn mint_batch_atoms(
        &self,
        caller: Address,
        to: Address,
        atom_ids: &[U256],
        amounts: &[U256],
    ) -> Result<(), CompositionError>;

    /// Decompose `from`'s atoms back into materials credited to `to`.
    ///
    /// # Errors
    /// * `Unauthorized` - `from` is not the caller
    /// * `InsufficientEnergy` / `InsufficientBalance`
    fn burn_atoms(
        &self,
        caller: Address,
        from: Address,
        to: Address,
        atom_id: U256,
        amount: U256,
    ) -> Result<(), CompositionError>;

    fn burn_batch_atoms(
        &self,
        caller: Address,
        to: Address,
        atom_ids: &[U256],
        amounts: &[U256],
    ) -> Result<(), CompositionError>;

    /// Destroy the caller's own balance of any id, without refund.
    fn burn(&self, caller: Address, id: U256, amount: U256) -> Result<(), CompositionError>;

    fn burn_batch(
        &self,
        caller: Address,
        ids: &[U256],
        amounts: &[U256],
    ) -> Result<(), CompositionError>;

    /// Owner-only, idempotent.
    fn cancel_sign_hash(&self, caller: Address, digest: Hash) -> Result<(), CompositionError>;

    fn is_cancelled(&self, digest: &Hash) -> bool;

    fn energy_neutron(&self, base: U256, atom_id: U256) -> Result<EnergyNeutron, CompositionError>;
}
