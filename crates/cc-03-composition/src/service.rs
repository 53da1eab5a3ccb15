//! # Composition Engine
//!
//! Application service implementing [`CompositionApi`] on top of a
//! [`Ledger`].
//!
//! The engine holds no balances. It prices each request with the
//! [`CompositionTable`], turns it into a single [`LedgerTransaction`] and
//! hands that to the ledger, which applies it all-or-nothing. Signed
//! material mints run inside [`SignedAuthorization::authorize`], so the
//! digest is spent only when the credit lands.
//!
//! [`LedgerTransaction`]: cc_02_ledger::LedgerTransaction

use crate::config::EngineConfig;
use crate::domain::assets::{is_mat, VERSION_NAME};
use crate::domain::errors::CompositionError;
use crate::domain::plan::{burn_plan, mint_plan, BurnTotals, MintTotals};
use crate::domain::table::{CompositionTable, EnergyNeutron};
use crate::ports::inbound::CompositionApi;
use cc_01_signed_authorization::{
    batch_asset_digest, single_asset_digest, AuthorizationRequest, SignedAuthorization,
    SignedAuthorizationApi, BATCH_DIGEST_WIDTH,
};
use cc_02_ledger::Ledger;
use cc_telemetry::log_event;
use shared_types::{fmt_address, fmt_hash, zip_asset_amounts, Address, AssetAmount, Hash, U256};
use std::sync::Arc;

const COMPONENT: &str = "composition";

/// Atom composition engine.
pub struct CompositionEngine<L: Ledger> {
    config: EngineConfig,
    table: CompositionTable,
    ledger: Arc<L>,
    authorization: SignedAuthorization,
}

impl<L: Ledger> CompositionEngine<L> {
    /// Create an engine over `ledger`.
    pub fn new(config: EngineConfig, ledger: Arc<L>) -> Result<Self, CompositionError> {
        config.validate()?;

        let authorization = SignedAuthorization::new(config.owner, config.signer);
        log_event!(
            info,
            COMPONENT,
            "Composition engine created",
            engine = %fmt_address(&config.engine_id),
            ledger = %fmt_address(&ledger.identity()),
            signer = %fmt_address(&config.signer)
        );

        Ok(Self {
            config,
            table: CompositionTable::new(),
            ledger,
            authorization,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Arc<L> {
        &self.ledger
    }

    pub fn table(&self) -> &CompositionTable {
        &self.table
    }

    pub fn version_name(&self) -> &'static str {
        VERSION_NAME
    }

    /// Digest the signer must sign for [`CompositionApi::sign_mint_mats`].
    pub fn mat_digest(
        &self,
        to: Address,
        mat_id: U256,
        amount: U256,
        expiry: U256,
        salt: U256,
    ) -> Hash {
        single_asset_digest(
            &self.config.engine_id,
            &self.ledger.identity(),
            &to,
            mat_id,
            amount,
            expiry,
            salt,
        )
    }

    /// Digest the signer must sign for [`CompositionApi::sign_mint_batch_mats`].
    pub fn batch_mat_digest(
        &self,
        to: Address,
        ids: &[U256; BATCH_DIGEST_WIDTH],
        amounts: &[U256; BATCH_DIGEST_WIDTH],
        expiry: U256,
        salt: U256,
    ) -> Hash {
        batch_asset_digest(
            &self.config.engine_id,
            &self.ledger.identity(),
            &to,
            ids,
            amounts,
            expiry,
            salt,
        )
    }

    fn ensure_owner(&self, caller: Address) -> Result<(), CompositionError> {
        if caller != self.config.owner {
            return Err(CompositionError::Unauthorized { caller });
        }
        Ok(())
    }

    fn observe<T>(
        &self,
        operation: &'static str,
        op: impl FnOnce() -> Result<T, CompositionError>,
    ) -> Result<T, CompositionError> {
        let result = op();
        cc_telemetry::record_operation(operation, result.is_ok());
        if let Err(e) = &result {
            log_event!(
                warn,
                COMPONENT,
                "Operation rejected",
                operation = operation,
                kind = e.kind(),
                error = %e
            );
        }
        result
    }

    fn compose(
        &self,
        payer: Address,
        to: Address,
        entries: &[AssetAmount],
    ) -> Result<MintTotals, CompositionError> {
        let (tx, totals) = mint_plan(
            &self.table,
            self.config.base_energy_mint,
            payer,
            to,
            entries,
        )?;

        log_event!(
            debug,
            COMPONENT,
            "Mint plan",
            payer = %fmt_address(&payer),
            energy = %totals.energy,
            neutrons = %totals.neutrons,
            protons = %totals.protons
        );

        self.ledger
            .apply(&tx)
            .map_err(|e| CompositionError::from(e).into_material_shortfall())?;
        Ok(totals)
    }

    fn decompose(
        &self,
        caller: Address,
        from: Address,
        to: Address,
        entries: &[AssetAmount],
    ) -> Result<BurnTotals, CompositionError> {
        let (tx, totals) = burn_plan(
            &self.table,
            self.config.base_energy_burn,
            caller,
            from,
            to,
            entries,
        )?;

        if from != caller {
            return Err(CompositionError::Unauthorized { caller });
        }

        log_event!(
            debug,
            COMPONENT,
            "Burn plan",
            holder = %fmt_address(&from),
            energy = %totals.energy,
            neutrons = %totals.neutrons,
            protons = %totals.protons
        );

        self.ledger.apply(&tx)?;
        Ok(totals)
    }
}

fn entries(ids: &[U256], amounts: &[U256]) -> Result<Vec<AssetAmount>, CompositionError> {
    zip_asset_amounts(ids, amounts).ok_or(CompositionError::LengthMismatch {
        ids: ids.len(),
        amounts: amounts.len(),
    })
}

fn ensure_mats(entries: &[AssetAmount]) -> Result<(), CompositionError> {
    match entries.iter().find(|e| !is_mat(&e.id)) {
        Some(bad) => Err(CompositionError::InvalidAsset { id: bad.id }),
        None => Ok(()),
    }
}

impl<L: Ledger> CompositionApi for CompositionEngine<L> {
    fn mint_mats(
        &self,
        caller: Address,
        to: Address,
        mat_id: U256,
        amount: U256,
    ) -> Result<(), CompositionError> {
        self.observe("mint_mats", || {
            self.ensure_owner(caller)?;
            ensure_mats(&[AssetAmount { id: mat_id, amount }])?;

            self.ledger.credit_asset(to, mat_id, amount)?;
            log_event!(
                info,
                COMPONENT,
                "Materials minted",
                to = %fmt_address(&to),
                mat_id = %mat_id,
                amount = %amount
            );
            Ok(())
        })
    }

    fn mint_batch_mats(
        &self,
        caller: Address,
        to: Address,
        ids: &[U256],
        amounts: &[U256],
    ) -> Result<(), CompositionError> {
        self.observe("mint_batch_mats", || {
            self.ensure_owner(caller)?;
            let entries = entries(ids, amounts)?;
            ensure_mats(&entries)?;

            self.ledger.credit_assets_batch(to, &entries)?;
            log_event!(
                info,
                COMPONENT,
                "Materials minted",
                to = %fmt_address(&to),
                entries = entries.len()
            );
            Ok(())
        })
    }

    fn sign_mint_mats(
        &self,
        to: Address,
        mat_id: U256,
        amount: U256,
        expiry: U256,
        salt: U256,
        signature: &[u8],
        now: u64,
    ) -> Result<(), CompositionError> {
        self.observe("sign_mint_mats", || {
            ensure_mats(&[AssetAmount { id: mat_id, amount }])?;

            let digest = self.mat_digest(to, mat_id, amount, expiry, salt);
            let request = AuthorizationRequest::new(digest, signature, expiry);
            self.authorization.authorize(&request, now, || {
                self.ledger
                    .credit_asset(to, mat_id, amount)
                    .map_err(CompositionError::from)
            })?;

            log_event!(
                info,
                COMPONENT,
                "Materials minted by signature",
                to = %fmt_address(&to),
                mat_id = %mat_id,
                amount = %amount,
                digest = %fmt_hash(&digest)
            );
            Ok(())
        })
    }

    fn sign_mint_batch_mats(
        &self,
        to: Address,
        ids: [U256; BATCH_DIGEST_WIDTH],
        amounts: [U256; BATCH_DIGEST_WIDTH],
        expiry: U256,
        salt: U256,
        signature: &[u8],
        now: u64,
    ) -> Result<(), CompositionError> {
        self.observe("sign_mint_batch_mats", || {
            let entries = entries(&ids, &amounts)?;
            ensure_mats(&entries)?;

            let digest = self.batch_mat_digest(to, &ids, &amounts, expiry, salt);
            let request = AuthorizationRequest::new(digest, signature, expiry);
            self.authorization.authorize(&request, now, || {
                self.ledger
                    .credit_assets_batch(to, &entries)
                    .map_err(CompositionError::from)
            })?;

            log_event!(
                info,
                COMPONENT,
                "Materials minted by signature",
                to = %fmt_address(&to),
                entries = entries.len(),
                digest = %fmt_hash(&digest)
            );
            Ok(())
        })
    }

    fn mint_atoms(
        &self,
        caller: Address,
        to: Address,
        atom_id: U256,
        amount: U256,
    ) -> Result<(), CompositionError> {
        self.observe("mint_atoms", || {
            let totals = self.compose(caller, to, &[AssetAmount { id: atom_id, amount }])?;
            log_event!(
                info,
                COMPONENT,
                "Atoms minted",
                caller = %fmt_address(&caller),
                to = %fmt_address(&to),
                atom_id = %atom_id,
                amount = %amount,
                energy = %totals.energy
            );
            Ok(())
        })
    }

    fn mint_batch_atoms(
        &self,
        caller: Address,
        to: Address,
        atom_ids: &[U256],
        amounts: &[U256],
    ) -> Result<(), CompositionError> {
        self.observe("mint_batch_atoms", || {
            let entries = entries(atom_ids, amounts)?;
            let totals = self.compose(caller, to, &entries)?;
            log_event!(
                info,
                COMPONENT,
                "Atoms minted",
                caller = %fmt_address(&caller),
                to = %fmt_address(&to),
                entries = entries.len(),
                energy = %totals.energy
            );
            Ok(())
        })
    }

    fn burn_atoms(
        &self,
        caller: Address,
        from: Address,
        to: Address,
        atom_id: U256,
        amount: U256,
    ) -> Result<(), CompositionError> {
        self.observe("burn_atoms", || {
            let totals =
                self.decompose(caller, from, to, &[AssetAmount { id: atom_id, amount }])?;
            log_event!(
                info,
                COMPONENT,
                "Atoms burned",
                from = %fmt_address(&from),
                to = %fmt_address(&to),
                atom_id = %atom_id,
                amount = %amount,
                energy = %totals.energy
            );
            Ok(())
        })
    }

    fn burn_batch_atoms(
        &self,
        caller: Address,
        to: Address,
        atom_ids: &[U256],
        amounts: &[U256],
    ) -> Result<(), CompositionError> {
        self.observe("burn_batch_atoms", || {
            let entries = entries(atom_ids, amounts)?;
            let totals = self.decompose(caller, caller, to, &entries)?;
            log_event!(
                info,
                COMPONENT,
                "Atoms burned",
                from = %fmt_address(&caller),
                to = %fmt_address(&to),
                entries = entries.len(),
                energy = %totals.energy
            );
            Ok(())
        })
    }

    fn burn(&self, caller: Address, id: U256, amount: U256) -> Result<(), CompositionError> {
        self.observe("burn", || {
            self.ledger.debit_asset(caller, id, amount)?;
            log_event!(
                info,
                COMPONENT,
                "Assets burned",
                from = %fmt_address(&caller),
                id = %id,
                amount = %amount
            );
            Ok(())
        })
    }

    fn burn_batch(
        &self,
        caller: Address,
        ids: &[U256],
        amounts: &[U256],
    ) -> Result<(), CompositionError> {
        self.observe("burn_batch", || {
            let entries = entries(ids, amounts)?;
            self.ledger.debit_assets_batch(caller, &entries)?;
            log_event!(
                info,
                COMPONENT,
                "Assets burned",
                from = %fmt_address(&caller),
                entries = entries.len()
            );
            Ok(())
        })
    }

    fn cancel_sign_hash(&self, caller: Address, digest: Hash) -> Result<(), CompositionError> {
        self.observe("cancel_sign_hash", || {
            self.ensure_owner(caller)?;
            self.authorization.cancel(caller, digest)?;
            Ok(())
        })
    }

    fn is_cancelled(&self, digest: &Hash) -> bool {
        self.authorization.is_cancelled(digest)
    }

    fn energy_neutron(&self, base: U256, atom_id: U256) -> Result<EnergyNeutron, CompositionError> {
        self.table.energy_cost(base, &atom_id)
    }
}
