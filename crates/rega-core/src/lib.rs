#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for Rega.
//!
//! Two layers:
//! - **Scanning layer** (`scan`, `meta`): escape-aware substring search over
//!   pattern text, depth-aware so nested groups can be skipped.
//! - **Automaton layer** (`automaton`, `graph`): the mutable arena the
//!   compiler builds into, and the sealed automaton the matcher runs.

pub mod automaton;
pub mod colors;
pub mod dump;
pub mod graph;
pub mod meta;
pub mod scan;

mod invariants;

#[cfg(test)]
mod dump_tests;

pub use automaton::{Anchors, Automaton, Edge, InvariantViolation, State, StateId};
pub use colors::Colors;
pub use dump::dump;
pub use graph::Graph;
pub use scan::ScanError;
