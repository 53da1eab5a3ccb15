//! # Ledger Errors

use cc_01_signed_authorization::AuthorizationError;
use shared_types::{fmt_address, Address, U256};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient energy for {}: required {required}, available {available}", fmt_address(.account))]
    InsufficientFungible {
        account: Address,
        required: U256,
        available: U256,
    },

    #[error("Insufficient balance of asset {id} for {}: required {required}, available {available}", fmt_address(.account))]
    InsufficientAsset {
        account: Address,
        id: U256,
        required: U256,
        available: U256,
    },

    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),

    #[error("Length mismatch: {ids} ids, {amounts} amounts")]
    LengthMismatch { ids: usize, amounts: usize },

    #[error("Caller {} is not the owner", fmt_address(.caller))]
    Unauthorized { caller: Address },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Authorization(#[from] AuthorizationError),
}
