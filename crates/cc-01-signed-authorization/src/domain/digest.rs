//! # Authorization Digests
//!
//! Tightly packed encodings hashed with keccak256. Addresses take 20 bytes,
//! integers take 32 big-endian bytes, and a fixed array is its elements'
//! words back to back with no length prefix.
//!
//! Three schemas exist and are not interchangeable:
//!
//! | Schema | Fields |
//! |---|---|
//! | single asset | engine, ledger, to, id, amount, expiry, salt |
//! | fixed batch | engine, ledger, to, ids[3], amounts[3], expiry, salt |
//! | energy | ledger, to, amount, expiry, salt |

use super::ecdsa::keccak256;
use super::entities::BATCH_DIGEST_WIDTH;
use shared_types::{Address, Hash, U256};

/// Incremental packed encoder.
#[derive(Debug, Default, Clone)]
pub struct PackedEncoder {
    buf: Vec<u8>,
}

impl PackedEncoder {
    /// Create an empty encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a 20-byte address.
    pub fn address(mut self, address: &Address) -> Self {
        self.buf.extend_from_slice(address);
        self
    }

    /// Append a 32-byte big-endian word.
    pub fn uint(mut self, value: U256) -> Self {
        let mut word = [0u8; 32];
        value.to_big_endian(&mut word);
        self.buf.extend_from_slice(&word);
        self
    }

    /// Append a fixed-size array of words.
    pub fn uint_array(self, values: &[U256]) -> Self {
        values.iter().fold(self, |enc, value| enc.uint(*value))
    }

    /// Encoded bytes so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Hash the encoding.
    pub fn finish(self) -> Hash {
        keccak256(&self.buf)
    }
}

/// Digest for a single (id, amount) issuance by the composition engine.
pub fn single_asset_digest(
    engine: &Address,
    ledger: &Address,
    to: &Address,
    id: U256,
    amount: U256,
    expiry: U256,
    salt: U256,
) -> Hash {
    PackedEncoder::new()
        .address(engine)
        .address(ledger)
        .address(to)
        .uint(id)
        .uint(amount)
        .uint(expiry)
        .uint(salt)
        .finish()
}

/// Digest for a fixed-width batch issuance by the composition engine.
pub fn batch_asset_digest(
    engine: &Address,
    ledger: &Address,
    to: &Address,
    ids: &[U256; BATCH_DIGEST_WIDTH],
    amounts: &[U256; BATCH_DIGEST_WIDTH],
    expiry: U256,
    salt: U256,
) -> Hash {
    PackedEncoder::new()
        .address(engine)
        .address(ledger)
        .address(to)
        .uint_array(ids)
        .uint_array(amounts)
        .uint(expiry)
        .uint(salt)
        .finish()
}

/// Digest for a fungible energy issuance by the ledger.
pub fn energy_digest(
    ledger: &Address,
    to: &Address,
    amount: U256,
    expiry: U256,
    salt: U256,
) -> Hash {
    PackedEncoder::new()
        .address(ledger)
        .address(to)
        .uint(amount)
        .uint(expiry)
        .uint(salt)
        .finish()
}
