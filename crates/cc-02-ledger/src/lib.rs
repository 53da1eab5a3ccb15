//! # Ledger Subsystem (CC-02)
//!
//! Holds one fungible "energy" balance and many semi-fungible asset
//! balances per account.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: the composition engine never keeps
//!   balances of its own; every movement goes through a [`Ledger`]
//! - **Atomic Transactions**: a [`LedgerTransaction`] is staged against a
//!   scratch overlay, validated as a whole and only then committed
//! - **Energy Issuance**: [`EnergyIssuer`] mints energy for the owner or
//!   against a signed authorization
//!
//! ## Supply Invariants
//!
//! - fungible supply = Σ credits − Σ debits, never negative
//! - per-id asset supply = Σ credits − Σ debits for that id

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::memory::InMemoryLedger;
pub use config::LedgerConfig;
pub use domain::*;
pub use ports::ledger::Ledger;
pub use service::EnergyIssuer;
