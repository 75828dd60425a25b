//! Error type shared by every fallible operation in the crate.

/// Input-validation failures. All of them are raised before any cipher
/// transformation runs.
#[derive(Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input was not a well-formed hex string.
    #[error("invalid hex: {reason}")]
    Decode {
        /// The cleaned string that failed to decode.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A decoded plaintext or key had the wrong number of bytes.
    #[error("{what} must be exactly {expected} bytes ({} hex characters), got {actual}", .expected * 2)]
    Length {
        /// Which input was rejected.
        what: &'static str,
        /// Required byte length.
        expected: usize,
        /// Byte length actually supplied.
        actual: usize,
    },

    /// The requested key size is not one of 128, 192 or 256 bits.
    #[error("unsupported key size {0}, expected 128, 192 or 256")]
    InvalidKeySize(u32),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
