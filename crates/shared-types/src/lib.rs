//! # Shared Types Crate
//!
//! Primitives used by every crate in the workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: account identities, hashes and the 256-bit
//!   integer type are defined once here.
//! - **Opaque Identities**: an [`Address`] carries no lifecycle; an account
//!   exists as soon as it is referenced.

pub mod entities;

pub use entities::*;
