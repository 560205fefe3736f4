//! Human-readable automaton dump for debugging.
//!
//! ```text
//! [automaton]
//! anchors ^$
//! groups  1
//!
//! [states]
//! 0 [start]
//! 1
//! 2 [end]
//!
//! [edges]
//! 0 -> 1  "a"
//! 1 -> 2  "b"  [0]
//! ```

use std::fmt::Write as _;

use crate::automaton::{Automaton, Edge};
use crate::colors::Colors;

/// Render the automaton as text, one state or edge per line.
pub fn dump(automaton: &Automaton, colors: Colors) -> String {
    let mut out = String::new();
    let w = width_for_count(automaton.states().len());

    dump_header(&mut out, automaton, colors);
    out.push('\n');
    dump_states(&mut out, automaton, colors, w);
    out.push('\n');
    dump_edges(&mut out, automaton, colors, w);

    out
}

/// Digits needed to print the largest index below `count`.
pub fn width_for_count(count: usize) -> usize {
    count.saturating_sub(1).max(1).ilog10() as usize + 1
}

fn dump_header(out: &mut String, automaton: &Automaton, c: Colors) {
    let anchors = match (automaton.fixed_start(), automaton.fixed_end()) {
        (true, true) => "^$",
        (true, false) => "^",
        (false, true) => "$",
        (false, false) => "none",
    };

    writeln!(out, "{}[automaton]{}", c.blue, c.reset).unwrap();
    writeln!(out, "anchors {anchors}").unwrap();
    writeln!(out, "groups  {}", automaton.group_count()).unwrap();
}

fn dump_states(out: &mut String, automaton: &Automaton, c: Colors, w: usize) {
    writeln!(out, "{}[states]{}", c.blue, c.reset).unwrap();
    for state in automaton.states() {
        write!(out, "{:>w$}", state.id().index()).unwrap();
        if state.id() == automaton.start() {
            write!(out, " {}[start]{}", c.blue, c.reset).unwrap();
        }
        if state.is_terminal() {
            write!(out, " {}[end]{}", c.blue, c.reset).unwrap();
        }
        out.push('\n');
    }
}

fn dump_edges(out: &mut String, automaton: &Automaton, c: Colors, w: usize) {
    writeln!(out, "{}[edges]{}", c.blue, c.reset).unwrap();
    for edge in automaton.edges() {
        writeln!(
            out,
            "{:>w$} -> {:>w$}  {}",
            edge.origin().index(),
            edge.destination().index(),
            edge_label(edge, c)
        )
        .unwrap();
    }
}

/// Quoted literal (or `ε`) followed by the capture set, if any.
pub fn edge_label(edge: &Edge, c: Colors) -> String {
    let mut label = if edge.is_epsilon() {
        format!("{}ε{}", c.dim, c.reset)
    } else {
        format!("{}{:?}{}", c.green, edge.text(), c.reset)
    };
    if !edge.groups().is_empty() {
        write!(label, "  {}{:?}{}", c.dim, edge.groups(), c.reset).unwrap();
    }
    label
}
