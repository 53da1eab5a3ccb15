//! # Domain Layer
//!
//! Asset id ranges, the neutron table, cost plans and errors. Pure; no
//! ledger access.

pub mod assets;
pub mod errors;
pub mod plan;
pub mod table;

pub use assets::*;
pub use errors::CompositionError;
pub use plan::{burn_plan, mint_plan, BurnTotals, MintTotals};
pub use table::{CompositionTable, EnergyNeutron};
