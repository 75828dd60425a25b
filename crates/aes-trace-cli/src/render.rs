//! Plain-text rendering of a trace.

use std::fmt::Write;

use aes_trace::codec::HexMatrix;
use aes_trace::EncryptionTrace;

const BORDER: &str = "+-------------+";

fn push_matrix(out: &mut String, title: &str, matrix: &HexMatrix) {
    // writing into a String cannot fail
    let _ = writeln!(out, "{title}:");
    let _ = writeln!(out, "{BORDER}");
    for row in matrix {
        let _ = writeln!(out, "| {} |", row.join(" "));
    }
    let _ = writeln!(out, "{BORDER}");
}

/// Renders every state and round key as a framed grid.
pub fn trace_text(trace: &EncryptionTrace) -> String {
    let mut out = String::new();
    push_matrix(&mut out, "Initial State", &trace.initial_state);
    for step in &trace.rounds {
        out.push('\n');
        push_matrix(
            &mut out,
            &format!("Round {} - {}", step.round, step.operation),
            &step.state,
        );
    }
    out.push_str("\nExpanded Key (one word per row)\n");
    for key in &trace.expanded_key {
        out.push('\n');
        push_matrix(&mut out, &format!("Round Key {}", key.round), &key.key);
    }
    let _ = writeln!(out, "\nCiphertext: {}", trace.final_ciphertext);
    out
}
