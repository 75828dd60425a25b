//! Hex-in, trace-out entry point.

use log::debug;

use crate::cipher::run_rounds;
use crate::codec::{bytes_to_state, hex_to_bytes};
use crate::error::{Error, Result};
use crate::key::KeySize;
use crate::schedule::expand;
use crate::trace::{EncryptionTrace, Tracer};

/// Traced encryption of single blocks under a fixed key size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encryptor {
    size: KeySize,
}

impl Encryptor {
    /// Creates an encryptor for `size`.
    pub fn new(size: KeySize) -> Self {
        Self { size }
    }

    /// Key size in use.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Encrypts one hex-encoded block under a hex-encoded key.
    ///
    /// Both inputs are decoded and length-checked before any round runs, so
    /// an error never comes with a partial trace.
    pub fn encrypt(&self, plaintext_hex: &str, key_hex: &str) -> Result<EncryptionTrace> {
        let plaintext = hex_to_bytes(plaintext_hex)?;
        if plaintext.len() != 16 {
            return Err(Error::Length {
                what: "plaintext",
                expected: 16,
                actual: plaintext.len(),
            });
        }
        let key = hex_to_bytes(key_hex)?;
        let schedule = expand(&key, self.size)?;

        let mut state = bytes_to_state(&plaintext)?;
        debug!(
            "encrypting with {} (Nk={}, Nr={})",
            self.size,
            self.size.nk(),
            self.size.nr()
        );

        let mut tracer = Tracer::with_rounds(&state, self.size.nr());
        tracer.record_key_schedule(&schedule);
        run_rounds(&mut state, &schedule, &mut tracer);
        Ok(tracer.finish(&state.to_block()))
    }
}

/// Encrypts `plaintext_hex` under `key_hex` with a `key_size`-bit key and
/// returns the full trace.
pub fn encrypt(plaintext_hex: &str, key_hex: &str, key_size: u32) -> Result<EncryptionTrace> {
    let size = KeySize::try_from(key_size)?;
    Encryptor::new(size).encrypt(plaintext_hex, key_hex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Operation;

    const PLAIN: &str = "00112233445566778899aabbccddeeff";
    const KEY_128: &str = "000102030405060708090a0b0c0d0e0f";

    #[test]
    fn aes128_known_answer() {
        let trace = encrypt(PLAIN, KEY_128, 128).unwrap();
        assert_eq!(trace.final_ciphertext, "69C4E0D86A7B0430D8CDB78070B4C55A");
        assert_eq!(trace.round_count(), 10);
        assert_eq!(trace.expanded_key.len(), 11);
        assert_eq!(trace.rounds.len(), 40);
        assert_eq!(trace.initial_state[0], ["00", "44", "88", "CC"]);
    }

    #[test]
    fn appendix_b_intermediate_states() {
        let trace = encrypt(
            "32 43 f6 a8 88 5a 30 8d 31 31 98 a2 e0 37 07 34",
            "0x2b7e151628aed2a6abf7158809cf4f3c",
            128,
        )
        .unwrap();
        let first = &trace.rounds[0];
        assert_eq!(first.operation, Operation::InitialAddRoundKey);
        assert_eq!(first.state[0], ["19", "A0", "9A", "E9"]);
        assert_eq!(first.state[3], ["BE", "2B", "2A", "08"]);

        let round1: Vec<_> = trace.steps_in_round(1).collect();
        assert_eq!(round1[0].state[1], ["27", "BF", "B4", "41"]);
        assert_eq!(round1[1].state[1], ["BF", "B4", "41", "27"]);
        assert_eq!(round1[2].state[0], ["04", "E0", "48", "28"]);
        assert_eq!(round1[3].state[0], ["A4", "68", "6B", "02"]);

        let last = trace.rounds.last().unwrap();
        assert_eq!(last.round, 10);
        assert_eq!(last.operation, Operation::FinalAddRoundKey);
        assert_eq!(last.state[0], ["39", "02", "DC", "19"]);
        assert_eq!(trace.final_ciphertext, "3925841D02DC09FBDC118597196A0B32");
    }

    #[test]
    fn rejects_unsupported_key_size_first() {
        assert_eq!(
            encrypt("zz", "zz", 100).unwrap_err(),
            Error::InvalidKeySize(100)
        );
    }

    #[test]
    fn rejects_short_plaintext() {
        let err = encrypt(&"00".repeat(15), KEY_128, 128).unwrap_err();
        assert_eq!(
            err,
            Error::Length {
                what: "plaintext",
                expected: 16,
                actual: 15,
            }
        );
    }

    #[test]
    fn rejects_key_of_wrong_length() {
        let err = encrypt(PLAIN, &"00".repeat(10), 128).unwrap_err();
        assert!(matches!(err, Error::Length { what: "key", expected: 16, actual: 10 }));
        // a valid AES-256 key is still the wrong length for AES-128
        let err = encrypt(PLAIN, &"00".repeat(32), 128).unwrap_err();
        assert!(matches!(err, Error::Length { what: "key", .. }));
    }

    #[test]
    fn rejects_non_hex_key() {
        let err = encrypt(PLAIN, "000102030405060708090a0b0c0d0e0g", 128).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn encryptor_reports_its_size() {
        let enc = Encryptor::new(KeySize::Aes192);
        assert_eq!(enc.key_size(), KeySize::Aes192);
        let trace = enc
            .encrypt(PLAIN, "000102030405060708090a0b0c0d0e0f1011121314151617")
            .unwrap();
        assert_eq!(trace.final_ciphertext, "DDA97CA4864CDFE06EAF70A0EC0D7191");
    }
}
