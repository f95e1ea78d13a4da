use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::defaults::Defaults;
use crate::error::{KeyError, KeyKind};

/// Private key material. Zeroized on drop; `Debug` never shows the contents.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(String);

impl PrivateKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Raw secret. Every call site is a place the key can escape.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// Public key material, safe to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey(String);

impl PublicKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug)]
pub struct KeyPair {
    pub private: PrivateKey,
    pub public: PublicKey,
}

impl KeyPair {
    pub fn new(private: impl Into<String>, public: impl Into<String>) -> Self {
        Self {
            private: PrivateKey::new(private),
            public: PublicKey::new(public),
        }
    }
}

impl Default for KeyPair {
    fn default() -> Self {
        Self::new(Defaults::SECRET_KEY, Defaults::PUBLIC_KEY)
    }
}

/// Fails if the private or public key is empty.
///
/// Defined apart from its call site in `commands::demo` so jump-to-definition has somewhere to go.
pub fn initialize(keys: &KeyPair) -> Result<(), KeyError> {
    if keys.private.is_empty() {
        return Err(KeyError::Empty { which: KeyKind::Private });
    }
    if keys.public.is_empty() {
        return Err(KeyError::Empty { which: KeyKind::Public });
    }
    log::debug!("key pair initialized");
    Ok(())
}
