//! # Transaction Staging
//!
//! Two-phase apply: every delta is evaluated against a scratch overlay of
//! the touched balances, and the overlay is returned only if all deltas
//! succeed. Committing the overlay is a plain overwrite, so no partial
//! state is ever visible.

use super::entities::{Account, AssetId, BalanceKey, Direction, LedgerTransaction};
use super::errors::LedgerError;
use shared_types::U256;
use std::collections::HashMap;

/// Read access to committed balances.
pub trait BalanceSource {
    fn fungible_balance(&self, account: &Account) -> U256;
    fn asset_balance(&self, account: &Account, id: &AssetId) -> U256;
    fn fungible_supply(&self) -> U256;
    fn asset_supply(&self, id: &AssetId) -> U256;
}

/// Final values of every balance and supply a transaction touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedTransaction {
    pub balances: HashMap<BalanceKey, U256>,
    pub fungible_supply: Option<U256>,
    pub asset_supplies: HashMap<AssetId, U256>,
}

impl StagedTransaction {
    fn balance<S: BalanceSource>(&self, source: &S, key: &BalanceKey) -> U256 {
        if let Some(value) = self.balances.get(key) {
            return *value;
        }
        match key {
            BalanceKey::Fungible(account) => source.fungible_balance(account),
            BalanceKey::Asset(account, id) => source.asset_balance(account, id),
        }
    }

    fn supply<S: BalanceSource>(&self, source: &S, key: &BalanceKey) -> U256 {
        match key {
            BalanceKey::Fungible(_) => self
                .fungible_supply
                .unwrap_or_else(|| source.fungible_supply()),
            BalanceKey::Asset(_, id) => self
                .asset_supplies
                .get(id)
                .copied()
                .unwrap_or_else(|| source.asset_supply(id)),
        }
    }

    fn set_supply(&mut self, key: &BalanceKey, value: U256) {
        match key {
            BalanceKey::Fungible(_) => self.fungible_supply = Some(value),
            BalanceKey::Asset(_, id) => {
                self.asset_supplies.insert(*id, value);
            }
        }
    }
}

/// Evaluate `tx` against `source` without mutating anything.
///
/// # Errors
/// * `InsufficientFungible` / `InsufficientAsset` - a debit exceeds the
///   balance at that point of the transaction
/// * `Overflow` - a credit would exceed `U256::MAX`
pub fn stage<S: BalanceSource>(
    source: &S,
    tx: &LedgerTransaction,
) -> Result<StagedTransaction, LedgerError> {
    let mut staged = StagedTransaction::default();

    for delta in tx.deltas() {
        let balance = staged.balance(source, &delta.key);
        let supply = staged.supply(source, &delta.key);

        let (new_balance, new_supply) = match delta.direction {
            Direction::Credit => (
                balance
                    .checked_add(delta.amount)
                    .ok_or(LedgerError::Overflow("balance credit"))?,
                supply
                    .checked_add(delta.amount)
                    .ok_or(LedgerError::Overflow("supply credit"))?,
            ),
            Direction::Debit => {
                let Some(new_balance) = balance.checked_sub(delta.amount) else {
                    return Err(insufficient(&delta.key, delta.amount, balance));
                };
                // Supply is at least any single balance
                let new_supply = supply
                    .checked_sub(delta.amount)
                    .ok_or(LedgerError::Overflow("supply debit"))?;
                (new_balance, new_supply)
            }
        };

        staged.balances.insert(delta.key, new_balance);
        staged.set_supply(&delta.key, new_supply);
    }

    Ok(staged)
}

fn insufficient(key: &BalanceKey, required: U256, available: U256) -> LedgerError {
    match key {
        BalanceKey::Fungible(account) => LedgerError::InsufficientFungible {
            account: *account,
            required,
            available,
        },
        BalanceKey::Asset(account, id) => LedgerError::InsufficientAsset {
            account: *account,
            id: *id,
            required,
            available,
        },
    }
}
