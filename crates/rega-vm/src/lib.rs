//! Backtracking matcher for compiled Rega automata.
//!
//! This crate walks an [`Automaton`](rega_core::Automaton) over an input
//! string, depth first, trying outgoing edges in creation order.

pub mod engine;

pub use engine::{Match, NoopTracer, PrintTracer, RuntimeError, Tracer, VM, VMBuilder, Verbosity};
