//! Test helpers shared by the compiler's unit tests.

use rega_core::{Colors, dump};

use crate::compile;

/// Compile a pattern that must be valid and dump the automaton.
pub fn expect_compiled(pattern: &str) -> String {
    match compile(pattern) {
        Ok(automaton) => dump(&automaton, Colors::OFF),
        Err(err) => panic!("expected {pattern:?} to compile, got: {err}"),
    }
}

/// Compile a pattern that must be invalid and render the error.
pub fn expect_rejected(pattern: &str) -> String {
    match compile(pattern) {
        Ok(automaton) => panic!(
            "expected {pattern:?} to be rejected, got:\n{}",
            dump(&automaton, Colors::OFF)
        ),
        Err(err) => err.render(pattern, false),
    }
}
