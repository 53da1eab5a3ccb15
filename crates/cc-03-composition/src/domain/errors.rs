//! # Composition Errors

use super::assets::Material;
use cc_01_signed_authorization::AuthorizationError;
use cc_02_ledger::LedgerError;
use shared_types::{fmt_address, Address, U256};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompositionError {
    #[error("Asset {id} is not an atom")]
    NotAnAtom { id: U256 },

    #[error("Atomic number {atomic_number} outside 1..=118")]
    OutOfRange { atomic_number: u64 },

    #[error("Asset {id} is not a material")]
    InvalidAsset { id: U256 },

    #[error("Insufficient energy for {}: required {required}, available {available}", fmt_address(.account))]
    InsufficientEnergy {
        account: Address,
        required: U256,
        available: U256,
    },

    #[error("Insufficient {material} for {}: required {required}, available {available}", fmt_address(.account))]
    InsufficientMaterial {
        account: Address,
        material: Material,
        required: U256,
        available: U256,
    },

    #[error("Insufficient balance of asset {id} for {}: required {required}, available {available}", fmt_address(.account))]
    InsufficientBalance {
        account: Address,
        id: U256,
        required: U256,
        available: U256,
    },

    #[error("Length mismatch: {ids} ids, {amounts} amounts")]
    LengthMismatch { ids: usize, amounts: usize },

    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),

    #[error("Caller {} is not authorized", fmt_address(.caller))]
    Unauthorized { caller: Address },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    #[error(transparent)]
    Ledger(LedgerError),
}

impl CompositionError {
    /// Reinterpret a material shortfall reported as a plain balance error.
    ///
    /// Used on the atom-minting paths, where ids 0..3 are spent as inputs.
    pub fn into_material_shortfall(self) -> Self {
        match self {
            Self::InsufficientBalance {
                account,
                id,
                required,
                available,
            } => match Material::from_id(&id) {
                Some(material) => Self::InsufficientMaterial {
                    account,
                    material,
                    required,
                    available,
                },
                None => Self::InsufficientBalance {
                    account,
                    id,
                    required,
                    available,
                },
            },
            other => other,
        }
    }

    /// Short label used as a metric/log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotAnAtom { .. } => "not_an_atom",
            Self::OutOfRange { .. } => "out_of_range",
            Self::InvalidAsset { .. } => "invalid_asset",
            Self::InsufficientEnergy { .. } => "insufficient_energy",
            Self::InsufficientMaterial { .. } => "insufficient_material",
            Self::InsufficientBalance { .. } => "insufficient_balance",
            Self::LengthMismatch { .. } => "length_mismatch",
            Self::Overflow(_) => "overflow",
            Self::Unauthorized { .. } => "unauthorized",
            Self::InvalidConfig(_) => "invalid_config",
            Self::Authorization(e) => e.reason(),
            Self::Ledger(_) => "ledger",
        }
    }
}

impl From<LedgerError> for CompositionError {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::InsufficientFungible {
                account,
                required,
                available,
            } => Self::InsufficientEnergy {
                account,
                required,
                available,
            },
            LedgerError::InsufficientAsset {
                account,
                id,
                required,
                available,
            } => Self::InsufficientBalance {
                account,
                id,
                required,
                available,
            },
            LedgerError::Overflow(what) => Self::Overflow(what),
            LedgerError::LengthMismatch { ids, amounts } => Self::LengthMismatch { ids, amounts },
            LedgerError::Authorization(e) => Self::Authorization(e),
            other => Self::Ledger(other),
        }
    }
}
