//! Debug-only verification of compiled automata.
//!
//! Zero-cost in release builds. Set `REGA_DEBUG_AUTOMATON` to print every
//! compiled automaton to stderr.

use rega_core::Automaton;
#[cfg(debug_assertions)]
use rega_core::{Colors, dump};

#[cfg(debug_assertions)]
pub fn debug_verify_automaton(automaton: &Automaton, pattern: &str) {
    if let Err(violation) = automaton.validate() {
        panic!(
            "BUG: malformed automaton for {pattern:?}: {violation}\n{}",
            dump(automaton, Colors::OFF)
        );
    }

    if std::env::var("REGA_DEBUG_AUTOMATON").is_ok() {
        eprintln!("=== Automaton for {pattern:?} ===");
        eprint!("{}", dump(automaton, Colors::OFF));
        eprintln!("=== End automaton ===\n");
    }
}

#[cfg(not(debug_assertions))]
#[inline(always)]
pub fn debug_verify_automaton(_automaton: &Automaton, _pattern: &str) {}
