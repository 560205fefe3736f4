//! Compiled pattern handle.

use std::fmt;
use std::str::FromStr;

use rega_core::{Automaton, Colors};
use rega_vm::{Match, PrintTracer, VM, Verbosity};

use crate::Result;

/// Compile a pattern into an automaton.
pub fn compile(pattern: &str) -> Result<Automaton> {
    Ok(rega_compiler::compile(pattern)?)
}

/// Leftmost match of `automaton` in `input`.
pub fn find<'h>(automaton: &Automaton, input: &'h str) -> Option<Match<'h>> {
    VM::new(automaton, input).execute()
}

pub fn is_match(automaton: &Automaton, input: &str) -> bool {
    find(automaton, input).is_some()
}

/// A compiled pattern.
///
/// The automaton is immutable after construction; one `Regex` can serve any
/// number of searches, from any number of threads.
#[derive(Clone, Debug)]
pub struct Regex {
    pattern: String,
    automaton: Automaton,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: pattern.to_owned(),
            automaton: compile(pattern)?,
        })
    }

    /// The pattern this regex was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Leftmost match in `input`.
    pub fn find<'h>(&self, input: &'h str) -> Option<Match<'h>> {
        find(&self.automaton, input)
    }

    /// Leftmost match starting at or after byte offset `offset`.
    pub fn find_at<'h>(&self, input: &'h str, offset: usize) -> Result<Option<Match<'h>>> {
        let vm = VM::builder(&self.automaton, input)
            .start_offset(offset)
            .build()?;
        Ok(vm.execute())
    }

    pub fn is_match(&self, input: &str) -> bool {
        is_match(&self.automaton, input)
    }

    /// Text listing of the automaton's states and edges.
    pub fn dump(&self, colors: Colors) -> String {
        rega_core::dump(&self.automaton, colors)
    }

    /// Search `input` and return the match together with the execution trace.
    pub fn trace<'h>(
        &self,
        input: &'h str,
        verbosity: Verbosity,
        colors: Colors,
    ) -> (Option<Match<'h>>, String) {
        let mut tracer = PrintTracer::new(&self.automaton, verbosity, colors);
        let found = VM::new(&self.automaton, input).execute_with(&mut tracer);
        (found, tracer.finish())
    }
}

impl FromStr for Regex {
    type Err = crate::Error;

    fn from_str(pattern: &str) -> Result<Self> {
        Self::new(pattern)
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
