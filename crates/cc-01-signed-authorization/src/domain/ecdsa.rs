//! # ECDSA Signer Recovery (secp256k1)
//!
//! Recovers the address that signed an authorization digest.
//!
//! Authorizations are produced with the personal-sign convention: the
//! signer signs `keccak256("\x19Ethereum Signed Message:\n32" || digest)`,
//! not the digest itself.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: an S above half the curve order is rejected
//! - **Constant-Time Operations**: the high-S test is a `subtle::Choice`
//! - Uses k256 crate for cryptographic operations

use super::entities::EcdsaSignature;
use super::errors::SignatureError;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::elliptic_curve::scalar::IsHigh;
use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash};
use subtle::Choice;

/// Prefix prepended to a 32-byte digest before personal signing.
const PERSONAL_SIGN_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

// =============================================================================
// SIGNER RECOVERY
// =============================================================================

/// Recover the signer of an authorization digest.
///
/// The digest is wrapped in the personal-sign prefix before recovery.
pub fn recover_signer(digest: &Hash, signature: &EcdsaSignature) -> Result<Address, SignatureError> {
    recover_prehash(&eth_signed_message_hash(digest), signature)
}

/// Recover the signer of `digest` and check it against `expected`.
pub fn verify_signer(
    digest: &Hash,
    signature: &EcdsaSignature,
    expected: Address,
) -> Result<Address, SignatureError> {
    match recover_signer(digest, signature)? {
        actual if actual == expected => Ok(actual),
        actual => Err(SignatureError::SignerMismatch { expected, actual }),
    }
}

/// Recover the address whose key signed `prehash` directly.
fn recover_prehash(prehash: &Hash, signature: &EcdsaSignature) -> Result<Address, SignatureError> {
    let (sig, recovery_id) = decode_signature(signature)?;

    VerifyingKey::recover_from_prehash(prehash, &sig, recovery_id)
        .map(|key| address_from_pubkey(&key))
        .map_err(|_| SignatureError::RecoveryFailed)
}

/// Split `r || s || v` into a k256 signature and recovery id.
///
/// Order of rejection: recovery byte, then scalar range, then high S.
fn decode_signature(signature: &EcdsaSignature) -> Result<(Signature, RecoveryId), SignatureError> {
    let y_parity = match signature.v {
        0 | 1 => signature.v,
        27 | 28 => signature.v - 27,
        v => return Err(SignatureError::InvalidRecoveryId(v)),
    };

    let bytes = signature.to_bytes();
    let sig = Signature::from_slice(&bytes[..64]).map_err(|_| SignatureError::InvalidFormat)?;

    let high_s: Choice = sig.s().is_high();
    if bool::from(high_s) {
        return Err(SignatureError::MalleableSignature);
    }

    Ok((sig, RecoveryId::new(y_parity == 1, false)))
}

// =============================================================================
// HASHING
// =============================================================================

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

/// Hash a 32-byte digest under the personal-sign prefix.
pub fn eth_signed_message_hash(digest: &Hash) -> Hash {
    Keccak256::new()
        .chain_update(PERSONAL_SIGN_PREFIX)
        .chain_update(digest)
        .finalize()
        .into()
}

/// Address of a public key: the low 20 bytes of the keccak of its uncompressed point.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let point = public_key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use super::*;
    pub use k256::ecdsa::SigningKey;

    /// Generate a new ECDSA keypair.
    pub fn generate_keypair() -> (SigningKey, VerifyingKey) {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        let verifying_key = *signing_key.verifying_key();
        (signing_key, verifying_key)
    }

    /// Address controlled by a signing key.
    pub fn signer_address(key: &SigningKey) -> Address {
        address_from_pubkey(key.verifying_key())
    }

    /// Sign `prehash` as is, with `v` in the 27/28 form.
    ///
    /// k256 already emits low-S signatures with a matching recovery id.
    pub fn sign_prehash(prehash: &Hash, private_key: &SigningKey) -> EcdsaSignature {
        let (sig, recovery_id) = private_key
            .sign_prehash_recoverable(prehash)
            .expect("signing failed");

        let (r, s) = sig.split_bytes();
        EcdsaSignature {
            r: r.into(),
            s: s.into(),
            v: 27 + recovery_id.to_byte(),
        }
    }

    /// Personal-sign an authorization digest, returning the 65 raw bytes.
    pub fn sign_digest(digest: &Hash, private_key: &SigningKey) -> Vec<u8> {
        sign_prehash(&eth_signed_message_hash(digest), private_key)
            .to_bytes()
            .to_vec()
    }

    /// The high-S twin of a signature: `s' = n - s` with the parity flipped.
    ///
    /// Recovers the same key mathematically, so only the EIP-2 rule rejects it.
    pub fn malleate(signature: &EcdsaSignature) -> EcdsaSignature {
        let sig = Signature::from_slice(&signature.to_bytes()[..64]).expect("valid signature");
        let twin = Signature::from_scalars(sig.r(), -sig.s()).expect("negated scalar in range");

        let (_, s) = twin.split_bytes();
        EcdsaSignature {
            r: signature.r,
            s: s.into(),
            v: match signature.v {
                0 => 1,
                1 => 0,
                27 => 28,
                _ => 27,
            },
        }
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;

    /// floor(n / 2) for the secp256k1 group order.
    const HALF_ORDER: [u8; 32] = [
        0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B,
        0x20, 0xA0,
    ];

    fn signed(message: &[u8]) -> (SigningKey, Hash, EcdsaSignature) {
        let (private_key, _) = generate_keypair();
        let digest = keccak256(message);
        let signature = EcdsaSignature::from_bytes(&sign_digest(&digest, &private_key)).unwrap();
        (private_key, digest, signature)
    }

    #[test]
    fn test_keccak256_empty_input() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_eth_signed_message_hash_uses_prefix() {
        let digest = keccak256(b"authorization");
        let mut prefixed = PERSONAL_SIGN_PREFIX.to_vec();
        prefixed.extend_from_slice(&digest);

        assert_eq!(eth_signed_message_hash(&digest), keccak256(&prefixed));
        assert_ne!(eth_signed_message_hash(&digest), digest);
    }

    #[test]
    fn test_recover_signer_roundtrip() {
        let (private_key, digest, signature) = signed(b"mint 100 protons");
        assert_eq!(
            recover_signer(&digest, &signature),
            Ok(signer_address(&private_key))
        );
    }

    #[test]
    fn test_recovery_accepts_both_v_forms() {
        let (private_key, digest, signature) = signed(b"v forms");
        let compact = EcdsaSignature {
            v: signature.v - 27,
            ..signature.clone()
        };

        assert_eq!(recover_signer(&digest, &compact), Ok(signer_address(&private_key)));
    }

    #[test]
    fn test_unprefixed_signature_is_signer_mismatch() {
        let (private_key, _) = generate_keypair();
        let signer = signer_address(&private_key);
        let digest = keccak256(b"unprefixed");
        let signature = sign_prehash(&digest, &private_key);

        // Valid over the raw digest, so recovery itself succeeds
        assert_eq!(recover_prehash(&digest, &signature), Ok(signer));

        match verify_signer(&digest, &signature, signer) {
            Err(SignatureError::SignerMismatch { expected, actual }) => {
                assert_eq!(expected, signer);
                assert_ne!(actual, signer);
            }
            other => panic!("expected SignerMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_verify_signer_mismatch() {
        let (_, digest, signature) = signed(b"mint");
        let (_, other_public) = generate_keypair();

        let expected = address_from_pubkey(&other_public);
        let err = verify_signer(&digest, &signature, expected).unwrap_err();
        assert!(matches!(err, SignatureError::SignerMismatch { expected: e, .. } if e == expected));
    }

    #[test]
    fn test_malleable_twin_rejected() {
        let (_, digest, signature) = signed(b"test");
        let twin = malleate(&signature);

        assert_ne!(twin.s, signature.s);
        assert_eq!(
            recover_signer(&digest, &twin),
            Err(SignatureError::MalleableSignature)
        );
    }

    #[test]
    fn test_zero_signature_rejected() {
        let digest = keccak256(b"test");
        let signature = EcdsaSignature {
            r: [0u8; 32],
            s: [0u8; 32],
            v: 27,
        };

        assert_eq!(
            recover_signer(&digest, &signature),
            Err(SignatureError::InvalidFormat)
        );
    }

    #[test]
    fn test_high_s_boundary() {
        let (_, _, signature) = signed(b"boundary");

        let at_half = EcdsaSignature {
            s: HALF_ORDER,
            ..signature.clone()
        };
        assert!(decode_signature(&at_half).is_ok());

        let mut above = HALF_ORDER;
        above[31] += 1;
        let above_half = EcdsaSignature {
            s: above,
            ..signature
        };
        assert_eq!(
            decode_signature(&above_half).unwrap_err(),
            SignatureError::MalleableSignature
        );
    }

    #[test]
    fn test_recovery_byte_values() {
        let (_, _, signature) = signed(b"recovery");

        for v in [0u8, 1, 27, 28] {
            let candidate = EcdsaSignature {
                v,
                ..signature.clone()
            };
            let (_, recovery_id) = decode_signature(&candidate).unwrap();
            assert_eq!(recovery_id.is_y_odd(), matches!(v, 1 | 28));
        }

        for v in [2u8, 26, 29, 30] {
            let candidate = EcdsaSignature {
                v,
                ..signature.clone()
            };
            assert_eq!(
                decode_signature(&candidate).unwrap_err(),
                SignatureError::InvalidRecoveryId(v)
            );
        }
    }
}
