//! Matching engine.
//!
//! The VM tries candidate start offsets left to right. From each start it
//! runs a depth-first search over the automaton with an explicit checkpoint
//! stack; the first accepting path wins.

mod checkpoint;
mod error;
mod matched;
mod trace;
mod vm;

#[cfg(test)]
mod trace_tests;

pub use error::RuntimeError;
pub use matched::Match;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use vm::{VM, VMBuilder};
