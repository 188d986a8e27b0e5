//! Session key generation.
//!
//! A session key is 32 bytes of OS randomness that lives only in process
//! memory. It is never derived from user input, never written anywhere,
//! and never serialized; when the process exits, everything encoded under
//! it becomes permanently unrecoverable. That is the privacy model, not a
//! limitation.

use zeroize::ZeroizeOnDrop;

use crate::error::{Result, VeilError};

/// Length of a session key in bytes (32 bytes = 256 bits for AES-256-GCM).
const KEY_LENGTH: usize = 32;

/// A random, process-lifetime encryption key.
///
/// Key bytes are wiped from memory on drop, so the window where they can
/// leak ends with the value, not with the allocator.
#[derive(Clone, ZeroizeOnDrop)]
pub struct SessionKey {
    /// The raw key bytes (zeroized on drop)
    key: [u8; KEY_LENGTH],
}

impl SessionKey {
    /// Generate a fresh session key from the operating system's CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`VeilError::Crypto`] if the OS entropy source fails; no
    /// fallback generator is ever used.
    ///
    /// # Examples
    ///
    /// ```
    /// use veil_core::crypto::SessionKey;
    ///
    /// let key = SessionKey::generate().unwrap();
    /// // Use key for encoding; it dies with the process.
    /// ```
    pub fn generate() -> Result<Self> {
        let mut bytes = [0u8; KEY_LENGTH];
        getrandom::getrandom(&mut bytes)
            .map_err(|e| VeilError::Crypto(format!("Failed to gather key entropy: {}", e)))?;
        Ok(Self { key: bytes })
    }

    /// Builds a key from caller-supplied bytes.
    ///
    /// Crate-internal so tests can pin a key; real sessions always go
    /// through [`SessionKey::generate`].
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// The raw key bytes, for handing to the cipher.
    ///
    /// # Security
    ///
    /// Never log or store the returned slice; use it for the immediate
    /// seal or open call and let it go.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
