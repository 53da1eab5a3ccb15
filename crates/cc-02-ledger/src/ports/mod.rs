//! # Ports Layer

pub mod ledger;
