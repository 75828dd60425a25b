//! Key sizes and validated key material.

use crate::error::{Error, Result};

/// Supported AES key lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// All supported sizes, smallest first.
    pub const ALL: [KeySize; 3] = [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256];

    /// Key length in bits.
    pub const fn bits(self) -> u32 {
        match self {
            KeySize::Aes128 => 128,
            KeySize::Aes192 => 192,
            KeySize::Aes256 => 256,
        }
    }

    /// Key length in 32-bit words (`Nk`).
    pub const fn nk(self) -> usize {
        self.bits() as usize / 32
    }

    /// Number of rounds (`Nr`).
    pub const fn nr(self) -> usize {
        self.nk() + 6
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        self.nk() * 4
    }
}

impl TryFrom<u32> for KeySize {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            128 => Ok(KeySize::Aes128),
            192 => Ok(KeySize::Aes192),
            256 => Ok(KeySize::Aes256),
            other => Err(Error::InvalidKeySize(other)),
        }
    }
}

impl From<KeySize> for u32 {
    fn from(size: KeySize) -> Self {
        size.bits()
    }
}

impl std::fmt::Display for KeySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}

/// Key bytes whose length has been checked against a [`KeySize`].
#[derive(Clone, PartialEq, Eq)]
pub struct CipherKey {
    bytes: Vec<u8>,
    size: KeySize,
}

impl CipherKey {
    /// Validates `bytes` as a key of the given size.
    pub fn new(bytes: &[u8], size: KeySize) -> Result<Self> {
        if bytes.len() != size.key_len() {
            return Err(Error::Length {
                what: "key",
                expected: size.key_len(),
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes: bytes.to_vec(),
            size,
        })
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size this key was validated against.
    pub fn size(&self) -> KeySize {
        self.size
    }
}

// Keys stay out of debug output.
impl std::fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherKey")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl From<[u8; 16]> for CipherKey {
    fn from(value: [u8; 16]) -> Self {
        Self {
            bytes: value.to_vec(),
            size: KeySize::Aes128,
        }
    }
}

impl From<[u8; 24]> for CipherKey {
    fn from(value: [u8; 24]) -> Self {
        Self {
            bytes: value.to_vec(),
            size: KeySize::Aes192,
        }
    }
}

impl From<[u8; 32]> for CipherKey {
    fn from(value: [u8; 32]) -> Self {
        Self {
            bytes: value.to_vec(),
            size: KeySize::Aes256,
        }
    }
}
