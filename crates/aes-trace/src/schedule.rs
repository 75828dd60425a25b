//! Key expansion (FIPS-197 §5.2).

use log::debug;

use crate::error::{Error, Result};
use crate::key::{CipherKey, KeySize};
use crate::sbox::{sbox, RCON};
use crate::state::State;

/// A four-byte key-schedule word.
pub type Word = [u8; 4];

/// The `4 * (Nr + 1)` words derived from one key.
#[derive(Clone, PartialEq, Eq)]
pub struct ExpandedKeySchedule {
    size: KeySize,
    words: Vec<Word>,
}

impl ExpandedKeySchedule {
    /// Key size the schedule was expanded for.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// All schedule words in derivation order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of round keys (`Nr + 1`).
    pub fn rounds(&self) -> usize {
        self.words.len() / 4
    }

    /// Round key `round` as a state-shaped matrix.
    ///
    /// Word `j` of the round becomes column `j`, so the matrix lines up with
    /// the state it is XORed into. Panics if `round > Nr`.
    pub fn round_key(&self, round: usize) -> State {
        let mut key = State::default();
        for (col, word) in self.words[4 * round..4 * round + 4].iter().enumerate() {
            key.set_column(col, *word);
        }
        key
    }

    /// Iterates over every round key from round 0 to `Nr`.
    pub fn round_keys(&self) -> impl Iterator<Item = State> + '_ {
        (0..self.rounds()).map(move |round| self.round_key(round))
    }
}

impl std::fmt::Debug for ExpandedKeySchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpandedKeySchedule")
            .field("size", &self.size)
            .field("words", &self.words.len())
            .finish()
    }
}

fn rot_word(word: Word) -> Word {
    let [b0, b1, b2, b3] = word;
    [b1, b2, b3, b0]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

fn xor_words(lhs: Word, rhs: Word) -> Word {
    [lhs[0] ^ rhs[0], lhs[1] ^ rhs[1], lhs[2] ^ rhs[2], lhs[3] ^ rhs[3]]
}

/// Expands raw key bytes for the given key size.
///
/// Fails with [`Error::Length`] unless `key_bytes` holds exactly `4 * Nk` bytes.
pub fn expand(key_bytes: &[u8], size: KeySize) -> Result<ExpandedKeySchedule> {
    if key_bytes.len() != 4 * size.nk() {
        return Err(Error::Length {
            what: "key",
            expected: 4 * size.nk(),
            actual: key_bytes.len(),
        });
    }
    Ok(derive(key_bytes, size))
}

/// Expands a key whose length was checked when it was constructed.
pub fn expand_key(key: &CipherKey) -> ExpandedKeySchedule {
    derive(key.as_bytes(), key.size())
}

fn derive(key_bytes: &[u8], size: KeySize) -> ExpandedKeySchedule {
    let nk = size.nk();
    let total = 4 * (size.nr() + 1);

    let mut words: Vec<Word> = Vec::with_capacity(total);
    for chunk in key_bytes.chunks_exact(4) {
        words.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..total {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / nk - 1];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        words.push(xor_words(words[i - nk], temp));
    }

    debug!("expanded {size} key into {} words", words.len());
    ExpandedKeySchedule { size, words }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::hex_to_bytes;

    fn word(hex: &str) -> Word {
        let bytes = hex_to_bytes(hex).unwrap();
        [bytes[0], bytes[1], bytes[2], bytes[3]]
    }

    #[test]
    fn rot_and_sub_word() {
        assert_eq!(rot_word([0x09, 0xcf, 0x4f, 0x3c]), [0xcf, 0x4f, 0x3c, 0x09]);
        assert_eq!(sub_word([0xcf, 0x4f, 0x3c, 0x09]), [0x8a, 0x84, 0xeb, 0x01]);
    }

    #[test]
    fn aes128_schedule_matches_fips197_appendix_a1() {
        let key = hex_to_bytes("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
        let schedule = expand(&key, KeySize::Aes128).unwrap();
        let w = schedule.words();
        assert_eq!(w.len(), 44);
        assert_eq!(schedule.rounds(), 11);
        assert_eq!(w[4], word("a0fafe17"));
        assert_eq!(w[5], word("88542cb1"));
        assert_eq!(w[6], word("23a33939"));
        assert_eq!(w[7], word("2a6c7605"));
        assert_eq!(w[40], word("d014f9a8"));
        assert_eq!(w[43], word("b6630ca6"));
    }

    #[test]
    fn aes192_schedule_matches_fips197_appendix_a2() {
        let key = hex_to_bytes("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b").unwrap();
        let schedule = expand(&key, KeySize::Aes192).unwrap();
        let w = schedule.words();
        assert_eq!(w.len(), 52);
        assert_eq!(w[6], word("fe0c91f7"));
        assert_eq!(w[51], word("01002202"));
    }

    #[test]
    fn aes256_schedule_matches_fips197_appendix_a3() {
        let key = hex_to_bytes(
            "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        )
        .unwrap();
        let schedule = expand(&key, KeySize::Aes256).unwrap();
        let w = schedule.words();
        assert_eq!(w.len(), 60);
        assert_eq!(w[8], word("9ba35411"));
        // i mod Nk == 4 takes the SubWord-only branch
        assert_eq!(w[12], word("a8b09c1a"));
        assert_eq!(w[59], word("706c631e"));
    }

    #[test]
    fn round_key_places_words_in_columns() {
        let key = hex_to_bytes("000102030405060708090a0b0c0d0e0f").unwrap();
        let schedule = expand(&key, KeySize::Aes128).unwrap();
        let round0 = schedule.round_key(0);
        assert_eq!(round0.column(0), [0x00, 0x01, 0x02, 0x03]);
        assert_eq!(round0.rows()[0], [0x00, 0x04, 0x08, 0x0c]);
        assert_eq!(round0.to_block().to_vec(), key);

        let last = schedule.round_key(10);
        assert_eq!(
            last.to_block().to_vec(),
            hex_to_bytes("13111d7fe3944a17f307a78b4d2b30c5").unwrap()
        );
        assert_eq!(schedule.round_keys().count(), 11);
    }

    #[test]
    fn expand_rejects_wrong_length() {
        let err = expand(&[0u8; 16], KeySize::Aes192).unwrap_err();
        assert_eq!(
            err,
            Error::Length {
                what: "key",
                expected: 24,
                actual: 16,
            }
        );
    }

    #[test]
    fn expand_key_agrees_with_expand() {
        let bytes: Vec<u8> = (0u8..32).collect();
        let key = CipherKey::new(&bytes, KeySize::Aes256).unwrap();
        assert_eq!(expand_key(&key), expand(&bytes, KeySize::Aes256).unwrap());
    }
}
