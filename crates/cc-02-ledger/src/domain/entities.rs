//! # Ledger Entities
//!
//! Balance keys and multi-entry transactions.

use serde::{Deserialize, Serialize};
use shared_types::{Address, AssetAmount, U256};

/// An account identity.
pub type Account = Address;

/// A semi-fungible asset identifier.
pub type AssetId = U256;

/// Which balance a delta touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalanceKey {
    /// The account's fungible energy balance
    Fungible(Account),
    /// The account's balance of one asset id
    Asset(Account, AssetId),
}

impl BalanceKey {
    /// The account owning this balance.
    pub fn account(&self) -> Account {
        match self {
            Self::Fungible(account) | Self::Asset(account, _) => *account,
        }
    }
}

/// Credit or debit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Credit,
    Debit,
}

/// One balance movement inside a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceDelta {
    pub key: BalanceKey,
    pub direction: Direction,
    pub amount: U256,
}

/// An ordered list of balance movements applied all-or-nothing.
///
/// Deltas are evaluated in order, so a debit may spend a credit made
/// earlier in the same transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTransaction {
    deltas: Vec<BalanceDelta>,
}

impl LedgerTransaction {
    /// Create an empty transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit fungible energy.
    pub fn credit_fungible(&mut self, account: Account, amount: U256) -> &mut Self {
        self.push(BalanceKey::Fungible(account), Direction::Credit, amount)
    }

    /// Debit fungible energy.
    pub fn debit_fungible(&mut self, account: Account, amount: U256) -> &mut Self {
        self.push(BalanceKey::Fungible(account), Direction::Debit, amount)
    }

    /// Credit an asset balance.
    pub fn credit_asset(&mut self, account: Account, id: AssetId, amount: U256) -> &mut Self {
        self.push(BalanceKey::Asset(account, id), Direction::Credit, amount)
    }

    /// Debit an asset balance.
    pub fn debit_asset(&mut self, account: Account, id: AssetId, amount: U256) -> &mut Self {
        self.push(BalanceKey::Asset(account, id), Direction::Debit, amount)
    }

    /// Credit several assets to one account.
    pub fn credit_assets(&mut self, account: Account, entries: &[AssetAmount]) -> &mut Self {
        for entry in entries {
            self.credit_asset(account, entry.id, entry.amount);
        }
        self
    }

    /// Debit several assets from one account.
    pub fn debit_assets(&mut self, account: Account, entries: &[AssetAmount]) -> &mut Self {
        for entry in entries {
            self.debit_asset(account, entry.id, entry.amount);
        }
        self
    }

    /// The deltas in application order.
    pub fn deltas(&self) -> &[BalanceDelta] {
        &self.deltas
    }

    /// Number of deltas.
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// True if the transaction moves nothing.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    fn push(&mut self, key: BalanceKey, direction: Direction, amount: U256) -> &mut Self {
        self.deltas.push(BalanceDelta {
            key,
            direction,
            amount,
        });
        self
    }
}
