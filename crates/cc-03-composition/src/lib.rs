//! # Composition Subsystem (CC-03)
//!
//! Turns energy and raw materials (neutrons, protons, electrons) into
//! atoms, and atoms back into materials.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): asset id ranges, the packed neutron
//!   table, cost plans. Pure.
//! - **Ports Layer** (`ports/`): the inbound [`CompositionApi`]
//! - **Service Layer** (`service.rs`): [`CompositionEngine`], which prices
//!   requests and applies them through a [`cc_02_ledger::Ledger`]
//!
//! ## Costs
//!
//! Minting `n` atoms of atomic number `Z` with `N` neutrons costs
//! `n * (base_mint + Z * 2 * N)` energy, `n * N` neutrons and `n * Z`
//! protons and electrons. Burning charges `n * ((base_burn + Z * 2 * N) / 2)`
//! energy and returns the same materials.

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use config::EngineConfig;
pub use domain::*;
pub use ports::inbound::CompositionApi;
pub use service::CompositionEngine;
