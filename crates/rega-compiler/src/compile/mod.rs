//! Single-pass construction of the automaton.
//!
//! The pattern body is scanned left to right. Literal runs accumulate until a
//! structural character forces them into an edge; groups, alternation and
//! `*` are handled with a handful of stacks, one entry per open group.
//!
//! - `compiler`: scan loop and the per-character rules
//! - `verify`: debug-only structural check and dump

mod compiler;
mod verify;


pub use compiler::Compiler;

use rega_core::Automaton;

use crate::{CaptureGroups, Pattern, PatternError};

/// Compile a pattern into an automaton.
pub fn compile(source: &str) -> Result<Automaton, PatternError> {
    let pattern = Pattern::parse(source)?;
    let groups = CaptureGroups::index(pattern.body());

    let mut compiler = Compiler::new(pattern.body(), &groups);
    compiler.scan();
    let automaton = compiler.finish(pattern.anchors());

    verify::debug_verify_automaton(&automaton, source);
    Ok(automaton)
}
