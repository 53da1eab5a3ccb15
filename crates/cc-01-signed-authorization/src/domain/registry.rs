//! # Cancelled Digest Set
//!
//! Digests that may never authorize anything again: consumed by a
//! successful signed operation or cancelled by the authority. Membership is
//! permanent.
//!
//! One set serves every digest schema of its owner; the schema lives in how
//! the digest was built, not here.

use parking_lot::Mutex;
use shared_types::Hash;
use std::collections::HashSet;

/// Thread-safe set of spent digests.
#[derive(Debug, Default)]
pub struct CancelledDigestSet {
    digests: Mutex<HashSet<Hash>>,
}

impl CancelledDigestSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the digest was consumed or cancelled.
    pub fn contains(&self, digest: &Hash) -> bool {
        self.digests.lock().contains(digest)
    }

    /// Marks a digest as spent. Returns `false` if it already was.
    pub fn insert(&self, digest: Hash) -> bool {
        self.digests.lock().insert(digest)
    }

    /// Runs `apply` with exclusive access to the set and spends `digest`
    /// only if `apply` succeeds.
    ///
    /// Returns `on_spent()` without running `apply` if the digest is
    /// already in the set. Two callers racing on one digest are serialized
    /// here, so at most one of them can succeed.
    pub fn consume_with<T, E>(
        &self,
        digest: Hash,
        on_spent: impl FnOnce() -> E,
        apply: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        let mut digests = self.digests.lock();

        if digests.contains(&digest) {
            return Err(on_spent());
        }

        let value = apply()?;
        digests.insert(digest);
        Ok(value)
    }

    /// Number of spent digests.
    pub fn len(&self) -> usize {
        self.digests.lock().len()
    }

    /// Returns true if nothing has been spent.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
