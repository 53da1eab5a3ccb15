//! # Authorization Errors
//!
//! Error types for signature parsing and authorization checks.

use shared_types::{fmt_address, fmt_hash, Address, Hash, U256};
use thiserror::Error;

/// Errors that can occur while parsing a signature or recovering its signer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The signature has the wrong number of bytes
    #[error("Invalid signature length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The signature format is invalid (R or S out of range)
    #[error("Invalid signature format")]
    InvalidFormat,

    /// Signature has high S value (EIP-2 malleability protection)
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover public key from signature
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// Recovered signer does not match expected signer
    #[error("Signer mismatch: expected {}, got {}", fmt_address(.expected), fmt_address(.actual))]
    SignerMismatch { expected: Address, actual: Address },
}

/// Errors returned by the authorization service.
///
/// Every variant is terminal for the call: the caller must obtain a new
/// signature or fix its inputs and resubmit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthorizationError {
    /// `expiry <= now`
    #[error("The signature has expired: expiry {expiry}, now {now}")]
    Expired { expiry: U256, now: u64 },

    /// Digest already consumed or cancelled
    #[error("The signature was cancelled: digest {}", fmt_hash(.digest))]
    Cancelled { digest: Hash },

    /// Signature unparsable or not from the expected signer
    #[error("Invalid authority signature: {0}")]
    InvalidSignature(#[from] SignatureError),

    /// Caller lacks the administrative role
    #[error("Caller {} is not the authority", fmt_address(.caller))]
    Unauthorized { caller: Address },
}

impl AuthorizationError {
    /// Short label used for metrics and log fields.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Expired { .. } => "expired",
            Self::Cancelled { .. } => "cancelled",
            Self::InvalidSignature(_) => "invalid_signature",
            Self::Unauthorized { .. } => "unauthorized",
        }
    }
}
