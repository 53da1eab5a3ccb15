//! In-memory ledger adapter.

use crate::domain::entities::{Account, AssetId, BalanceKey, LedgerTransaction};
use crate::domain::errors::LedgerError;
use crate::domain::staging::{stage, BalanceSource, StagedTransaction};
use crate::ports::ledger::Ledger;
use cc_telemetry::log_event;
use parking_lot::RwLock;
use shared_types::{fmt_address, Address, U256};
use std::collections::HashMap;

const COMPONENT: &str = "ledger";

#[derive(Debug, Default)]
struct LedgerState {
    fungible: HashMap<Account, U256>,
    assets: HashMap<(Account, AssetId), U256>,
    fungible_supply: U256,
    asset_supplies: HashMap<AssetId, U256>,
}

impl BalanceSource for LedgerState {
    fn fungible_balance(&self, account: &Account) -> U256 {
        self.fungible.get(account).copied().unwrap_or_default()
    }

    fn asset_balance(&self, account: &Account, id: &AssetId) -> U256 {
        self.assets.get(&(*account, *id)).copied().unwrap_or_default()
    }

    fn fungible_supply(&self) -> U256 {
        self.fungible_supply
    }

    fn asset_supply(&self, id: &AssetId) -> U256 {
        self.asset_supplies.get(id).copied().unwrap_or_default()
    }
}

impl LedgerState {
    fn commit(&mut self, staged: StagedTransaction) {
        for (key, value) in staged.balances {
            match key {
                BalanceKey::Fungible(account) => {
                    self.fungible.insert(account, value);
                }
                BalanceKey::Asset(account, id) => {
                    self.assets.insert((account, id), value);
                }
            }
        }
        if let Some(supply) = staged.fungible_supply {
            self.fungible_supply = supply;
        }
        self.asset_supplies.extend(staged.asset_supplies);
    }
}

/// In-memory implementation of [`Ledger`].
///
/// Staging and commit happen under one write lock, so concurrent
/// transactions are serialized and readers never see a half-applied one.
#[derive(Debug)]
pub struct InMemoryLedger {
    identity: Address,
    state: RwLock<LedgerState>,
}

impl InMemoryLedger {
    pub fn new(identity: Address) -> Self {
        Self {
            identity,
            state: RwLock::new(LedgerState::default()),
        }
    }
}

impl Ledger for InMemoryLedger {
    fn identity(&self) -> Address {
        self.identity
    }

    fn balance_of(&self, account: &Account) -> U256 {
        self.state.read().fungible_balance(account)
    }

    fn asset_balance_of(&self, account: &Account, id: &AssetId) -> U256 {
        self.state.read().asset_balance(account, id)
    }

    fn total_supply(&self) -> U256 {
        self.state.read().fungible_supply
    }

    fn asset_supply(&self, id: &AssetId) -> U256 {
        self.state.read().asset_supply(id)
    }

    fn apply(&self, tx: &LedgerTransaction) -> Result<(), LedgerError> {
        let mut state = self.state.write();

        match stage(&*state, tx) {
            Ok(staged) => {
                state.commit(staged);
                cc_telemetry::record_ledger_transaction(true);
                log_event!(
                    debug,
                    COMPONENT,
                    "Transaction committed",
                    ledger = %fmt_address(&self.identity),
                    deltas = tx.len()
                );
                Ok(())
            }
            Err(e) => {
                cc_telemetry::record_ledger_transaction(false);
                log_event!(
                    debug,
                    COMPONENT,
                    "Transaction rejected",
                    ledger = %fmt_address(&self.identity),
                    error = %e
                );
                Err(e)
            }
        }
    }
}
