//! Round sequencing for single-block encryption.

use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::schedule::ExpandedKeySchedule;
use crate::state::{Block, State};
use crate::trace::Operation;

/// Receives the state after every transformation of the pipeline.
pub trait StepObserver {
    /// Called once per sub-step, in execution order.
    fn step(&mut self, round: usize, operation: Operation, state: &State);
}

/// Observer that records nothing.
impl StepObserver for () {
    #[inline]
    fn step(&mut self, _round: usize, _operation: Operation, _state: &State) {}
}

/// Runs all `Nr + 1` rounds over `state`, reporting each sub-step.
///
/// Round 0 is a single AddRoundKey, rounds `1..Nr` apply all four
/// transformations, and round `Nr` omits MixColumns.
pub fn run_rounds<O>(state: &mut State, schedule: &ExpandedKeySchedule, observer: &mut O)
where
    O: StepObserver + ?Sized,
{
    let nr = schedule.key_size().nr();

    add_round_key(state, &schedule.round_key(0));
    observer.step(0, Operation::InitialAddRoundKey, state);

    for round in 1..nr {
        sub_bytes(state);
        observer.step(round, Operation::SubBytes, state);
        shift_rows(state);
        observer.step(round, Operation::ShiftRows, state);
        mix_columns(state);
        observer.step(round, Operation::MixColumns, state);
        add_round_key(state, &schedule.round_key(round));
        observer.step(round, Operation::AddRoundKey, state);
    }

    sub_bytes(state);
    observer.step(nr, Operation::SubBytes, state);
    shift_rows(state);
    observer.step(nr, Operation::ShiftRows, state);
    add_round_key(state, &schedule.round_key(nr));
    observer.step(nr, Operation::FinalAddRoundKey, state);
}

/// Encrypts a single 16-byte block with a pre-expanded key schedule.
pub fn encrypt_block(block: &Block, schedule: &ExpandedKeySchedule) -> Block {
    let mut state = State::from_block(block);
    run_rounds(&mut state, schedule, &mut ());
    state.to_block()
}
