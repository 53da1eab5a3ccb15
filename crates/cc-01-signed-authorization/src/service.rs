//! # Signed Authorization Service
//!
//! Application service that implements `SignedAuthorizationApi`.
//!
//! Holds the administrative authority (may cancel digests), the designated
//! signer (must have signed every digest) and the cancelled-digest set.

use crate::domain::ecdsa;
use crate::domain::entities::{AuthorizationRequest, EcdsaSignature};
use crate::domain::errors::AuthorizationError;
use crate::domain::registry::CancelledDigestSet;
use crate::ports::inbound::SignedAuthorizationApi;
use cc_telemetry::log_event;
use shared_types::{fmt_address, fmt_hash, Address, Hash, U256};

const COMPONENT: &str = "authorization";

/// Signed Authorization Service.
#[derive(Debug)]
pub struct SignedAuthorization {
    authority: Address,
    signer: Address,
    cancelled: CancelledDigestSet,
}

impl SignedAuthorization {
    /// Create a new service.
    ///
    /// # Arguments
    /// * `authority` - the only caller allowed to cancel digests
    /// * `signer` - the address every authorization must be signed by
    pub fn new(authority: Address, signer: Address) -> Self {
        Self {
            authority,
            signer,
            cancelled: CancelledDigestSet::new(),
        }
    }

    /// The administrative authority.
    pub fn authority(&self) -> Address {
        self.authority
    }

    /// The designated signer.
    pub fn signer(&self) -> Address {
        self.signer
    }

    /// Fails `Unauthorized` unless `caller` is the authority.
    pub fn ensure_authority(&self, caller: Address) -> Result<(), AuthorizationError> {
        if caller != self.authority {
            return Err(self.note(AuthorizationError::Unauthorized { caller }));
        }
        Ok(())
    }

    /// Verify a request against the designated signer and run `apply`.
    ///
    /// The digest is consumed only if `apply` succeeds, so a signed
    /// operation whose effect fails can be resubmitted with the same
    /// signature.
    pub fn authorize<T, E>(
        &self,
        request: &AuthorizationRequest<'_>,
        now: u64,
        apply: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<AuthorizationError>,
    {
        self.authorize_as(self.signer, request, now, |_| apply())
    }

    /// Number of consumed or cancelled digests.
    pub fn spent_count(&self) -> usize {
        self.cancelled.len()
    }

    fn authorize_as<T, E>(
        &self,
        expected_signer: Address,
        request: &AuthorizationRequest<'_>,
        now: u64,
        apply: impl FnOnce(Address) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<AuthorizationError>,
    {
        if request.is_expired(now) {
            return Err(E::from(self.note(AuthorizationError::Expired {
                expiry: request.expiry,
                now,
            })));
        }

        let digest = request.digest;
        let result = self.cancelled.consume_with(
            digest,
            || E::from(self.note(AuthorizationError::Cancelled { digest })),
            || {
                let signer = EcdsaSignature::from_bytes(request.signature)
                    .and_then(|sig| ecdsa::verify_signer(&digest, &sig, expected_signer))
                    .map_err(|e| E::from(self.note(AuthorizationError::InvalidSignature(e))))?;
                apply(signer)
            },
        );

        if result.is_ok() {
            cc_telemetry::record_digest_consumed();
            log_event!(
                debug,
                COMPONENT,
                "Digest consumed",
                digest = %fmt_hash(&digest)
            );
        }

        result
    }

    fn note(&self, error: AuthorizationError) -> AuthorizationError {
        cc_telemetry::record_authorization_failure(error.reason());
        log_event!(
            warn,
            COMPONENT,
            "Authorization rejected",
            reason = error.reason(),
            error = %error
        );
        error
    }
}

impl SignedAuthorizationApi for SignedAuthorization {
    fn verify(
        &self,
        digest: Hash,
        signature: &[u8],
        expected_signer: Address,
        expiry: U256,
        now: u64,
    ) -> Result<Address, AuthorizationError> {
        let request = AuthorizationRequest::new(digest, signature, expiry);
        self.authorize_as(expected_signer, &request, now, Ok)
    }

    fn cancel(&self, caller: Address, digest: Hash) -> Result<(), AuthorizationError> {
        self.ensure_authority(caller)?;

        let newly_cancelled = self.cancelled.insert(digest);
        if newly_cancelled {
            cc_telemetry::record_digest_cancelled();
        }

        log_event!(
            info,
            COMPONENT,
            "Digest cancelled",
            digest = %fmt_hash(&digest),
            authority = %fmt_address(&caller),
            already_spent = !newly_cancelled
        );

        Ok(())
    }

    fn is_cancelled(&self, digest: &Hash) -> bool {
        self.cancelled.contains(digest)
    }
}
