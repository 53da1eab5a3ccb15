//! # Domain Entities
//!
//! Signatures and authorization requests.

use super::errors::SignatureError;
use serde::{Deserialize, Serialize};
use shared_types::{Hash, U256};

/// Number of (id, amount) pairs bound by a fixed-size batch digest.
pub const BATCH_DIGEST_WIDTH: usize = 3;

/// Length of a serialized `r || s || v` signature.
pub const SIGNATURE_LENGTH: usize = 65;

/// ECDSA signature on the secp256k1 curve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

impl EcdsaSignature {
    /// Parse a 65-byte `r || s || v` signature.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(SignatureError::InvalidLength {
                expected: SIGNATURE_LENGTH,
                actual: bytes.len(),
            });
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);

        Ok(Self { r, s, v: bytes[64] })
    }

    /// Serialize as `r || s || v`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }
}

/// A signed authorization as submitted by a caller.
///
/// The signature stays raw until verification so that an expired request
/// is rejected without parsing it.
#[derive(Clone, Copy, Debug)]
pub struct AuthorizationRequest<'a> {
    /// Digest the signer approved
    pub digest: Hash,
    /// Raw `r || s || v` signature bytes
    pub signature: &'a [u8],
    /// Timestamp after which the authorization is void
    pub expiry: U256,
}

impl<'a> AuthorizationRequest<'a> {
    /// Create a new request.
    pub fn new(digest: Hash, signature: &'a [u8], expiry: U256) -> Self {
        Self {
            digest,
            signature,
            expiry,
        }
    }

    /// True once `now` has reached the expiry.
    pub fn is_expired(&self, now: u64) -> bool {
        self.expiry <= U256::from(now)
    }
}
