//! Tracing infrastructure for debugging VM execution.
//!
//! # Design: Zero-Cost Abstraction
//!
//! With `NoopTracer` every trait method is an `#[inline(always)]` empty
//! function, so the calls and their arguments compile away. No tracing state
//! lives in the VM or its checkpoints; `PrintTracer` keeps whatever it needs
//! for display on its own side.

use rega_core::dump::{edge_label, width_for_count};
use rega_core::{Automaton, Colors, Edge, StateId};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Candidate starts, taken edges, backtracking and the accepting state.
    #[default]
    Default,
    /// Also rejected edges, revisited states and dead ends.
    Verbose,
}

/// Tracer trait for VM execution instrumentation.
///
/// Positions are byte offsets into the input.
pub trait Tracer {
    /// A new candidate start offset is being tried.
    fn trace_start(&mut self, offset: usize);

    /// `edge` was taken; `pos` is the offset after consuming its text.
    fn trace_edge(&mut self, edge: &Edge, pos: usize);

    /// `edge`'s text does not occur at `pos`.
    fn trace_reject(&mut self, edge: &Edge, pos: usize);

    /// `state` was already explored at `pos` from this start.
    fn trace_revisit(&mut self, state: StateId, pos: usize);

    /// All edges of `state` failed and it cannot accept at `pos`.
    fn trace_dead_end(&mut self, state: StateId, pos: usize);

    /// Exploration resumed at `state`, reached earlier at `pos`.
    fn trace_backtrack(&mut self, state: StateId, pos: usize);

    /// The match ends in `state` at `pos`.
    fn trace_accept(&mut self, state: StateId, pos: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_start(&mut self, _offset: usize) {}

    #[inline(always)]
    fn trace_edge(&mut self, _edge: &Edge, _pos: usize) {}

    #[inline(always)]
    fn trace_reject(&mut self, _edge: &Edge, _pos: usize) {}

    #[inline(always)]
    fn trace_revisit(&mut self, _state: StateId, _pos: usize) {}

    #[inline(always)]
    fn trace_dead_end(&mut self, _state: StateId, _pos: usize) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _state: StateId, _pos: usize) {}

    #[inline(always)]
    fn trace_accept(&mut self, _state: StateId, _pos: usize) {}
}

/// Tracer that collects an execution trace for debugging.
pub struct PrintTracer {
    verbosity: Verbosity,
    lines: Vec<String>,
    /// Width of the widest state id.
    state_width: usize,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(automaton: &Automaton, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            lines: Vec::new(),
            state_width: width_for_count(automaton.states().len()),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    /// All trace lines joined into one string.
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }

    fn verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    fn add_edge_line(&mut self, edge: &Edge, arrow: &str, pos: usize) {
        let w = self.state_width;
        let line = format!(
            "  {:>w$} {arrow} {:>w$}  {}  @{pos}",
            edge.origin().index(),
            edge.destination().index(),
            edge_label(edge, self.colors),
        );
        self.lines.push(line);
    }

    fn add_state_line(&mut self, state: StateId, what: &str, pos: usize) {
        let w = self.state_width;
        self.lines
            .push(format!("  {:>w$} {what} @{pos}", state.index()));
    }
}

impl Tracer for PrintTracer {
    fn trace_start(&mut self, offset: usize) {
        let c = self.colors;
        self.lines
            .push(format!("{}start{} @{offset}", c.blue, c.reset));
    }

    fn trace_edge(&mut self, edge: &Edge, pos: usize) {
        self.add_edge_line(edge, "->", pos);
    }

    fn trace_reject(&mut self, edge: &Edge, pos: usize) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        let arrow = format!("{}-x{}", c.red, c.reset);
        self.add_edge_line(edge, &arrow, pos);
    }

    fn trace_revisit(&mut self, state: StateId, pos: usize) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        let what = format!("{}seen{}", c.dim, c.reset);
        self.add_state_line(state, &what, pos);
    }

    fn trace_dead_end(&mut self, state: StateId, pos: usize) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        let what = format!("{}dead end{}", c.dim, c.reset);
        self.add_state_line(state, &what, pos);
    }

    fn trace_backtrack(&mut self, state: StateId, pos: usize) {
        let c = self.colors;
        let what = format!("{}backtrack{}", c.dim, c.reset);
        self.add_state_line(state, &what, pos);
    }

    fn trace_accept(&mut self, state: StateId, pos: usize) {
        let c = self.colors;
        let what = format!("{}accept{}", c.green, c.reset);
        self.add_state_line(state, &what, pos);
    }
}
