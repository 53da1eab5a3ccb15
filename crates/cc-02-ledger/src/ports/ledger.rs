//! # Ledger Port
//!
//! The balance service the composition engine calls into. Every method is
//! atomic: it either applies in full or returns an error and changes
//! nothing.

use crate::domain::entities::{Account, AssetId, LedgerTransaction};
use crate::domain::errors::LedgerError;
use shared_types::{Address, AssetAmount, U256};

/// Fungible and semi-fungible balance store.
pub trait Ledger: Send + Sync {
    /// Identity bound into authorization digests.
    fn identity(&self) -> Address;

    /// Fungible energy balance of `account`.
    fn balance_of(&self, account: &Account) -> U256;

    /// Balance of asset `id` held by `account`.
    fn asset_balance_of(&self, account: &Account, id: &AssetId) -> U256;

    /// Total fungible energy in existence.
    fn total_supply(&self) -> U256;

    /// Total supply of asset `id`.
    fn asset_supply(&self, id: &AssetId) -> U256;

    /// Apply every delta of `tx` or none of them.
    fn apply(&self, tx: &LedgerTransaction) -> Result<(), LedgerError>;

    fn credit_fungible(&self, account: Account, amount: U256) -> Result<(), LedgerError> {
        let mut tx = LedgerTransaction::new();
        tx.credit_fungible(account, amount);
        self.apply(&tx)
    }

    fn debit_fungible(&self, account: Account, amount: U256) -> Result<(), LedgerError> {
        let mut tx = LedgerTransaction::new();
        tx.debit_fungible(account, amount);
        self.apply(&tx)
    }

    fn credit_asset(&self, account: Account, id: AssetId, amount: U256) -> Result<(), LedgerError> {
        let mut tx = LedgerTransaction::new();
        tx.credit_asset(account, id, amount);
        self.apply(&tx)
    }

    fn debit_asset(&self, account: Account, id: AssetId, amount: U256) -> Result<(), LedgerError> {
        let mut tx = LedgerTransaction::new();
        tx.debit_asset(account, id, amount);
        self.apply(&tx)
    }

    fn credit_assets_batch(
        &self,
        account: Account,
        entries: &[AssetAmount],
    ) -> Result<(), LedgerError> {
        let mut tx = LedgerTransaction::new();
        tx.credit_assets(account, entries);
        self.apply(&tx)
    }

    fn debit_assets_batch(
        &self,
        account: Account,
        entries: &[AssetAmount],
    ) -> Result<(), LedgerError> {
        let mut tx = LedgerTransaction::new();
        tx.debit_assets(account, entries);
        self.apply(&tx)
    }

    fn transfer_fungible(
        &self,
        from: Account,
        to: Account,
        amount: U256,
    ) -> Result<(), LedgerError> {
        let mut tx = LedgerTransaction::new();
        tx.debit_fungible(from, amount).credit_fungible(to, amount);
        self.apply(&tx)
    }

    fn transfer_asset(
        &self,
        from: Account,
        to: Account,
        id: AssetId,
        amount: U256,
    ) -> Result<(), LedgerError> {
        let mut tx = LedgerTransaction::new();
        tx.debit_asset(from, id, amount).credit_asset(to, id, amount);
        self.apply(&tx)
    }
}
