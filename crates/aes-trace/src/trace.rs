//! Step-by-step record of one block encryption.
//!
//! The serialized field names and operation labels are consumed by
//! visualization front ends and must stay stable.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::cipher::StepObserver;
use crate::codec::{bytes_to_hex, state_to_hex_matrix, HexMatrix};
use crate::schedule::ExpandedKeySchedule;
use crate::state::{Block, State};

/// Transformation that produced a recorded state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// The lone AddRoundKey of round 0.
    #[serde(rename = "Initial AddRoundKey")]
    InitialAddRoundKey,
    /// S-box substitution of every byte.
    SubBytes,
    /// Cyclic row rotation.
    ShiftRows,
    /// Column mixing over GF(2^8); absent from the final round.
    MixColumns,
    /// Round-key XOR in rounds `1..Nr`.
    AddRoundKey,
    /// Round-key XOR closing round `Nr`.
    #[serde(rename = "Final AddRoundKey")]
    FinalAddRoundKey,
}

impl Operation {
    /// Label used in serialized traces.
    pub const fn label(self) -> &'static str {
        match self {
            Operation::InitialAddRoundKey => "Initial AddRoundKey",
            Operation::SubBytes => "SubBytes",
            Operation::ShiftRows => "ShiftRows",
            Operation::MixColumns => "MixColumns",
            Operation::AddRoundKey => "AddRoundKey",
            Operation::FinalAddRoundKey => "Final AddRoundKey",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// State snapshot taken right after one transformation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Round the step belongs to, `0..=Nr`.
    pub round: usize,
    /// Transformation just applied.
    pub operation: Operation,
    /// State after the transformation.
    pub state: HexMatrix,
}

/// One round key rendered for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundKeyRecord {
    /// Round the key is applied in.
    pub round: usize,
    /// The round's four schedule words, one word per row.
    pub key: HexMatrix,
}

/// Complete trace of one block encryption.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionTrace {
    /// Plaintext laid out as a state, before any key is added.
    pub initial_state: HexMatrix,
    /// Every sub-step in execution order.
    pub rounds: Vec<StepRecord>,
    /// Round keys 0 through `Nr`.
    pub expanded_key: Vec<RoundKeyRecord>,
    /// Ciphertext as 32 uppercase hex digits.
    pub final_ciphertext: String,
}

impl EncryptionTrace {
    /// Number of cipher rounds after the initial key addition (`Nr`).
    pub fn round_count(&self) -> usize {
        self.rounds.last().map_or(0, |step| step.round)
    }

    /// Steps recorded for `round`, in order.
    pub fn steps_in_round(&self, round: usize) -> impl Iterator<Item = &StepRecord> + '_ {
        self.rounds.iter().filter(move |step| step.round == round)
    }
}

/// Collects step records while the round pipeline runs.
///
/// Records are only ever appended; [`Tracer::finish`] hands them over
/// untouched.
#[derive(Debug)]
pub struct Tracer {
    initial_state: HexMatrix,
    steps: Vec<StepRecord>,
    expanded_key: Vec<RoundKeyRecord>,
}

impl Tracer {
    /// Starts a trace for the given plaintext state.
    pub fn new(initial: &State) -> Self {
        Self {
            initial_state: state_to_hex_matrix(initial),
            steps: Vec::new(),
            expanded_key: Vec::new(),
        }
    }

    /// Starts a trace with room for every step of an `nr`-round encryption.
    pub fn with_rounds(initial: &State, nr: usize) -> Self {
        let mut tracer = Self::new(initial);
        // 1 initial step, 4 per main round, 3 in the final round
        tracer.steps.reserve(4 * nr);
        tracer.expanded_key.reserve(nr + 1);
        tracer
    }

    /// Records every round key of `schedule`.
    pub fn record_key_schedule(&mut self, schedule: &ExpandedKeySchedule) {
        for (round, words) in schedule.words().chunks_exact(4).enumerate() {
            let rows = [words[0], words[1], words[2], words[3]];
            self.expanded_key.push(RoundKeyRecord {
                round,
                key: state_to_hex_matrix(&State::from_rows(rows)),
            });
        }
    }

    /// Steps recorded so far.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Seals the trace with the resulting ciphertext.
    pub fn finish(self, ciphertext: &Block) -> EncryptionTrace {
        EncryptionTrace {
            initial_state: self.initial_state,
            rounds: self.steps,
            expanded_key: self.expanded_key,
            final_ciphertext: bytes_to_hex(ciphertext),
        }
    }
}

impl StepObserver for Tracer {
    fn step(&mut self, round: usize, operation: Operation, state: &State) {
        trace!("round {round:>2} {operation}: {}", bytes_to_hex(&state.to_block()));
        self.steps.push(StepRecord {
            round,
            operation,
            state: state_to_hex_matrix(state),
        });
    }
}
