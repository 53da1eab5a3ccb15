//! # Domain Layer
//!
//! Pure authorization logic with no I/O dependencies.

pub mod digest;
pub mod ecdsa;
pub mod entities;
pub mod errors;
pub mod registry;
