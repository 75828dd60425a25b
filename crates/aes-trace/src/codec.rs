//! Conversions between hex text, raw bytes and the state matrix.

use crate::error::{Error, Result};
use crate::state::{Block, State};

/// A 4×4 matrix of two-digit uppercase hex strings, used for reporting.
pub type HexMatrix = [[String; 4]; 4];

/// Decodes a hex string into bytes.
///
/// Whitespace anywhere in `text` is ignored, and each whitespace-separated
/// group may carry a `0x`/`0X` prefix, so `"0x00 0x11"`, `"00 11"` and
/// `"0011"` all decode to the same two bytes.
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>> {
    let cleaned: String = text
        .split_whitespace()
        .map(|group| {
            group
                .strip_prefix("0x")
                .or_else(|| group.strip_prefix("0X"))
                .unwrap_or(group)
        })
        .collect();
    hex::decode(&cleaned).map_err(|err| Error::Decode {
        input: cleaned,
        reason: err.to_string(),
    })
}

/// Renders bytes as uppercase hex with no separators.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Builds a state from exactly 16 bytes.
pub fn bytes_to_state(bytes: &[u8]) -> Result<State> {
    let block: Block = bytes.try_into().map_err(|_| Error::Length {
        what: "block",
        expected: 16,
        actual: bytes.len(),
    })?;
    Ok(State::from_block(&block))
}

/// Flattens a state back to its 16-byte block.
pub fn state_to_bytes(state: &State) -> Block {
    state.to_block()
}

/// Renders every cell of `state` as two uppercase hex digits.
pub fn state_to_hex_matrix(state: &State) -> HexMatrix {
    let rows = *state.rows();
    rows.map(|row| row.map(|byte| format!("{byte:02X}")))
}
