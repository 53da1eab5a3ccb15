//! # Core Entities
//!
//! Account identities, digests and amounts.

use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

/// A 32-byte hash (keccak256 digest).
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// The reserved all-zero address. Never valid as a configured identity.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// Returns true if `address` is the reserved zero address.
pub fn is_zero_address(address: &Address) -> bool {
    address == &ZERO_ADDRESS
}

/// Display wrapper that renders bytes as `0x`-prefixed hex.
///
/// Used in log fields and error messages so addresses and digests read the
/// way they are written in signing tools.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HexDisplay<'a>(pub &'a [u8]);

impl fmt::Display for HexDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for HexDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Render an address as `0x`-prefixed hex.
pub fn fmt_address(address: &Address) -> String {
    HexDisplay(address).to_string()
}

/// Render a hash as `0x`-prefixed hex.
pub fn fmt_hash(hash: &Hash) -> String {
    HexDisplay(hash).to_string()
}

/// A (asset id, amount) pair as carried by batch operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAmount {
    /// Semi-fungible asset identifier.
    pub id: U256,
    /// Quantity of the asset.
    pub amount: U256,
}

impl AssetAmount {
    /// Create a new pair.
    pub fn new(id: impl Into<U256>, amount: impl Into<U256>) -> Self {
        Self {
            id: id.into(),
            amount: amount.into(),
        }
    }
}

/// Zip parallel id/amount slices into pairs.
///
/// Returns `None` when the slices have different lengths.
pub fn zip_asset_amounts(ids: &[U256], amounts: &[U256]) -> Option<Vec<AssetAmount>> {
    if ids.len() != amounts.len() {
        return None;
    }
    Some(
        ids.iter()
            .zip(amounts)
            .map(|(id, amount)| AssetAmount {
                id: *id,
                amount: *amount,
            })
            .collect(),
    )
}
