//! Traced AES block encryption.
//!
//! This crate implements FIPS-197 AES for 128, 192 and 256-bit keys on a
//! single block and records the 4×4 state after every SubBytes, ShiftRows,
//! MixColumns and AddRoundKey so front ends can replay the cipher step by
//! step. It provides:
//! - Hex and state-matrix conversions.
//! - GF(2^8) arithmetic and the key schedule.
//! - The round pipeline, with an observer hook for tracing.
//! - [`encrypt`], which turns hex inputs into an [`EncryptionTrace`].
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened. There is no
//! decryption and no mode of operation.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod codec;
mod cipher;
mod encryptor;
mod error;
pub mod galois;
mod key;
pub mod round;
mod sbox;
mod schedule;
mod state;
mod trace;

pub use crate::cipher::{encrypt_block, run_rounds, StepObserver};
pub use crate::encryptor::{encrypt, Encryptor};
pub use crate::error::{Error, Result};
pub use crate::key::{CipherKey, KeySize};
pub use crate::sbox::sbox;
pub use crate::schedule::{expand, expand_key, ExpandedKeySchedule, Word};
pub use crate::state::{Block, State};
pub use crate::trace::{EncryptionTrace, Operation, RoundKeyRecord, StepRecord, Tracer};
