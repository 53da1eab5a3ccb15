//! # Domain Layer
//!
//! Balance keys, transactions, staging and errors.

pub mod entities;
pub mod errors;
pub mod staging;

pub use entities::*;
pub use errors::LedgerError;
pub use staging::{stage, BalanceSource, StagedTransaction};
