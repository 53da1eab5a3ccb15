//! # Signed Authorization Subsystem (CC-01)
//!
//! Off-chain authorization for minting: a designated signer approves an
//! issuance by signing a digest, and this crate decides whether a submitted
//! `(digest, signature, expiry)` may be used right now.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): digest construction, ECDSA recovery, the
//!   cancelled-digest set. No I/O.
//! - **Ports Layer** (`ports/`): the inbound API trait
//! - **Service Layer** (`service.rs`): verification order, single-use
//!   consumption, authority-gated cancellation
//!
//! ## Verification Order
//!
//! 1. `expiry <= now` → `Expired` (before the signature is even parsed)
//! 2. digest already consumed or cancelled → `Cancelled`
//! 3. recovered signer of the personal-sign hash ≠ expected → `InvalidSignature`
//! 4. digest inserted into the cancelled set
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: Signatures with high S values are rejected
//! - **Domain Separation**: digests bind the engine and ledger identities
//! - **Single Use**: check-and-insert happens under one lock

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::digest::{batch_asset_digest, energy_digest, single_asset_digest, PackedEncoder};
pub use domain::ecdsa::{
    address_from_pubkey, eth_signed_message_hash, keccak256, recover_signer, verify_signer,
};
pub use domain::entities::{AuthorizationRequest, EcdsaSignature, BATCH_DIGEST_WIDTH};
pub use domain::errors::{AuthorizationError, SignatureError};
pub use domain::registry::CancelledDigestSet;
pub use ports::inbound::SignedAuthorizationApi;
pub use service::SignedAuthorization;

#[cfg(any(test, feature = "test-helpers"))]
pub use domain::ecdsa::test_helpers;
