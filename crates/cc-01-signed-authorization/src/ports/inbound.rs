//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::errors::AuthorizationError;
use shared_types::{Address, Hash, U256};

/// Signed authorization API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait SignedAuthorizationApi: Send + Sync {
    /// Verify and consume a signed digest.
    ///
    /// # Errors
    /// * `Expired` - `expiry <= now`, checked before the signature is parsed
    /// * `Cancelled` - digest already consumed or cancelled
    /// * `InvalidSignature` - unparsable, malleable, or signed by someone else
    fn verify(
        &self,
        digest: Hash,
        signature: &[u8],
        expected_signer: Address,
        expiry: U256,
        now: u64,
    ) -> Result<Address, AuthorizationError>;

    /// Permanently cancel a digest. Authority only; idempotent.
    fn cancel(&self, caller: Address, digest: Hash) -> Result<(), AuthorizationError>;

    /// True if the digest was consumed or cancelled.
    fn is_cancelled(&self, digest: &Hash) -> bool;
}
