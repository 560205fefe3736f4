//! Virtual machine for running compiled automata.

use std::collections::HashSet;

use rega_core::{Automaton, StateId};

use super::checkpoint::{Checkpoint, CheckpointStack};
use super::error::RuntimeError;
use super::matched::Match;
use super::trace::{NoopTracer, Tracer};

/// Matcher state for one automaton over one input.
pub struct VM<'a, 'h> {
    automaton: &'a Automaton,
    input: &'h str,
    start_offset: usize,
    checkpoints: CheckpointStack,
    /// `(state, pos)` pairs already explored from the current start.
    ///
    /// Whether a pair can reach acceptance depends only on the pair itself,
    /// so a second visit can never succeed where the first did not. Pairs on
    /// the current path are in here too, which cuts epsilon cycles.
    visited: HashSet<(StateId, usize)>,
}

/// Builder for VM instances.
pub struct VMBuilder<'a, 'h> {
    automaton: &'a Automaton,
    input: &'h str,
    start_offset: usize,
}

impl<'a, 'h> VMBuilder<'a, 'h> {
    pub fn new(automaton: &'a Automaton, input: &'h str) -> Self {
        Self {
            automaton,
            input,
            start_offset: 0,
        }
    }

    /// Skip candidate starts below `offset`.
    pub fn start_offset(mut self, offset: usize) -> Self {
        self.start_offset = offset;
        self
    }

    pub fn build(self) -> Result<VM<'a, 'h>, RuntimeError> {
        let len = self.input.len();
        if self.start_offset > len {
            return Err(RuntimeError::OffsetOutOfRange {
                offset: self.start_offset,
                len,
            });
        }
        if !self.input.is_char_boundary(self.start_offset) {
            return Err(RuntimeError::NotCharBoundary {
                offset: self.start_offset,
            });
        }

        Ok(VM {
            automaton: self.automaton,
            input: self.input,
            start_offset: self.start_offset,
            checkpoints: CheckpointStack::new(),
            visited: HashSet::new(),
        })
    }
}

impl<'a, 'h> VM<'a, 'h> {
    /// A VM searching the whole input.
    pub fn new(automaton: &'a Automaton, input: &'h str) -> Self {
        Self {
            automaton,
            input,
            start_offset: 0,
            checkpoints: CheckpointStack::new(),
            visited: HashSet::new(),
        }
    }

    pub fn builder(automaton: &'a Automaton, input: &'h str) -> VMBuilder<'a, 'h> {
        VMBuilder::new(automaton, input)
    }

    /// Find the leftmost match.
    pub fn execute(self) -> Option<Match<'h>> {
        self.execute_with(&mut NoopTracer)
    }

    /// Find the leftmost match, reporting every step to `tracer`.
    pub fn execute_with<T: Tracer>(mut self, tracer: &mut T) -> Option<Match<'h>> {
        let input = self.input;
        let last = if self.automaton.fixed_start() {
            0
        } else {
            input.len()
        };

        for start in (self.start_offset..=last).filter(|&i| input.is_char_boundary(i)) {
            if let Some(found) = self.search_from(start, tracer) {
                return Some(found);
            }
        }
        None
    }

    /// Depth-first search from one candidate start.
    ///
    /// Outgoing edges are tried in creation order. A state is checked for
    /// acceptance only after all of its edges have failed, so longer paths
    /// through a terminal state are preferred over stopping there.
    fn search_from<T: Tracer>(&mut self, start: usize, tracer: &mut T) -> Option<Match<'h>> {
        let automaton = self.automaton;
        let input = self.input;

        tracer.trace_start(start);
        self.visited.clear();
        self.checkpoints.clear();
        self.visited.insert((automaton.start(), start));
        self.checkpoints
            .push(Checkpoint::new(automaton.start(), start, None));

        while let Some(&Checkpoint {
            state,
            pos,
            next_edge,
            ..
        }) = self.checkpoints.top()
        {
            if let Some(&edge_id) = automaton.outgoing_ids(state).get(next_edge) {
                self.checkpoints.advance();
                let edge = automaton.edge(edge_id);

                if !input[pos..].starts_with(edge.text()) {
                    tracer.trace_reject(edge, pos);
                    continue;
                }

                let next = pos + edge.text().len();
                if !self.visited.insert((edge.destination(), next)) {
                    tracer.trace_revisit(edge.destination(), next);
                    continue;
                }

                tracer.trace_edge(edge, next);
                self.checkpoints
                    .push(Checkpoint::new(edge.destination(), next, Some(edge_id)));
                continue;
            }

            if self.accepts(state, pos) {
                tracer.trace_accept(state, pos);
                return Some(self.materialize(start, pos));
            }

            tracer.trace_dead_end(state, pos);
            self.checkpoints.pop();
            if let Some(parent) = self.checkpoints.top() {
                tracer.trace_backtrack(parent.state, parent.pos);
            }
        }

        None
    }

    fn accepts(&self, state: StateId, pos: usize) -> bool {
        self.automaton.state(state).is_terminal()
            && (!self.automaton.fixed_end() || pos == self.input.len())
    }

    /// Build the match from the edges on the checkpoint stack.
    fn materialize(&self, start: usize, end: usize) -> Match<'h> {
        let mut groups = vec![String::new(); self.automaton.group_count()];
        for edge_id in self.checkpoints.path() {
            let edge = self.automaton.edge(edge_id);
            for &group in edge.groups() {
                if let Some(slot) = groups.get_mut(group) {
                    slot.push_str(edge.text());
                }
            }
        }
        Match::new(start, &self.input[start..end], groups)
    }
}
