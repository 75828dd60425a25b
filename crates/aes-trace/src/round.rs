//! AES round transformations on the 4×4 state.

use crate::galois::{multiply, xtime};
use crate::sbox::sbox;
use crate::state::State;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for row in state.rows_mut().iter_mut() {
        for byte in row.iter_mut() {
            *byte = sbox(*byte);
        }
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut State) {
    for (r, row) in state.rows_mut().iter_mut().enumerate() {
        row.rotate_left(r);
    }
}

fn mix_single_column(col: [u8; 4]) -> [u8; 4] {
    let [s0, s1, s2, s3] = col;
    [
        xtime(s0) ^ multiply(0x03, s1) ^ s2 ^ s3,
        s0 ^ xtime(s1) ^ multiply(0x03, s2) ^ s3,
        s0 ^ s1 ^ xtime(s2) ^ multiply(0x03, s3),
        multiply(0x03, s0) ^ s1 ^ s2 ^ xtime(s3),
    ]
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let mixed = mix_single_column(state.column(col));
        state.set_column(col, mixed);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &State) {
    state.xor_in_place(round_key);
}
