//! # Ports Layer
//!
//! Trait definitions for the authorization API.

pub mod inbound;
