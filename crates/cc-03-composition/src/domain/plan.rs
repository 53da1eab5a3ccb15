//! # Cost Plans
//!
//! Turns a list of `(atom id, amount)` entries into one ledger
//! transaction. All ids are validated and all totals computed with checked
//! arithmetic before anything is handed to the ledger.
//!
//! Minting debits, in order: payer energy, payer neutrons, payer protons,
//! payer electrons; then credits each atom to the recipient.
//!
//! Burning debits payer energy at half the per-unit burn cost, debits the
//! holder's atoms, then credits the recipient's materials.

use super::assets::Material;
use super::errors::CompositionError;
use super::table::CompositionTable;
use cc_02_ledger::{Account, LedgerTransaction};
use shared_types::{AssetAmount, U256};

/// Aggregate inputs consumed by a mint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MintTotals {
    pub energy: U256,
    pub neutrons: U256,
    /// Also the electron total
    pub protons: U256,
}

/// Aggregate energy charged and materials returned by a burn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BurnTotals {
    pub energy: U256,
    pub neutrons: U256,
    /// Also the electron total
    pub protons: U256,
}

fn mul(a: U256, b: U256, what: &'static str) -> Result<U256, CompositionError> {
    a.checked_mul(b).ok_or(CompositionError::Overflow(what))
}

fn add(a: U256, b: U256, what: &'static str) -> Result<U256, CompositionError> {
    a.checked_add(b).ok_or(CompositionError::Overflow(what))
}

/// Plan a mint of `entries` paid by `payer` and credited to `to`.
pub fn mint_plan(
    table: &CompositionTable,
    base_energy: U256,
    payer: Account,
    to: Account,
    entries: &[AssetAmount],
) -> Result<(LedgerTransaction, MintTotals), CompositionError> {
    let mut totals = MintTotals::default();

    for entry in entries {
        let atomic_number = U256::from(table.atomic_number(&entry.id)?);
        let cost = table.energy_cost(base_energy, &entry.id)?;

        totals.energy = add(
            totals.energy,
            mul(cost.energy, entry.amount, "energy total")?,
            "energy total",
        )?;
        totals.neutrons = add(
            totals.neutrons,
            mul(U256::from(cost.neutron), entry.amount, "neutron total")?,
            "neutron total",
        )?;
        totals.protons = add(
            totals.protons,
            mul(atomic_number, entry.amount, "proton total")?,
            "proton total",
        )?;
    }

    let mut tx = LedgerTransaction::new();
    tx.debit_fungible(payer, totals.energy)
        .debit_asset(payer, Material::Neutron.id(), totals.neutrons)
        .debit_asset(payer, Material::Proton.id(), totals.protons)
        .debit_asset(payer, Material::Electron.id(), totals.protons)
        .credit_assets(to, entries);

    Ok((tx, totals))
}

/// Plan a burn of `holder`'s atoms, charged to `payer`, refunding
/// materials to `to`.
pub fn burn_plan(
    table: &CompositionTable,
    base_energy: U256,
    payer: Account,
    holder: Account,
    to: Account,
    entries: &[AssetAmount],
) -> Result<(LedgerTransaction, BurnTotals), CompositionError> {
    let mut totals = BurnTotals::default();

    for entry in entries {
        let atomic_number = U256::from(table.atomic_number(&entry.id)?);
        let cost = table.energy_cost(base_energy, &entry.id)?;

        // Halved per unit, then multiplied
        let per_unit = cost.energy / U256::from(2u8);
        totals.energy = add(
            totals.energy,
            mul(per_unit, entry.amount, "energy total")?,
            "energy total",
        )?;
        totals.neutrons = add(
            totals.neutrons,
            mul(U256::from(cost.neutron), entry.amount, "neutron total")?,
            "neutron total",
        )?;
        totals.protons = add(
            totals.protons,
            mul(atomic_number, entry.amount, "proton total")?,
            "proton total",
        )?;
    }

    let mut tx = LedgerTransaction::new();
    tx.debit_fungible(payer, totals.energy)
        .debit_assets(holder, entries)
        .credit_asset(to, Material::Neutron.id(), totals.neutrons)
        .credit_asset(to, Material::Proton.id(), totals.protons)
        .credit_asset(to, Material::Electron.id(), totals.protons);

    Ok((tx, totals))
}
