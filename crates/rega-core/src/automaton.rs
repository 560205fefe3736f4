//! The compiled automaton.
//!
//! States are addressed by dense indices (`states[i].id() == i`). Edges carry
//! the literal text they consume (empty for epsilon edges) and the capture
//! groups that were open when they were created. Outgoing edges of a state
//! keep their creation order, which is the matcher's branch precedence.

use std::fmt;

use serde::Serialize;

/// Index of a state in its automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StateId(pub usize);

impl StateId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    /// The id this state takes after `removed` is deleted from the arena.
    #[inline]
    pub fn renumbered(self, removed: StateId) -> StateId {
        if self > removed {
            StateId(self.0 - 1)
        } else {
            self
        }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct State {
    pub(crate) id: StateId,
    pub(crate) terminal: bool,
}

impl State {
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Whether a match may end in this state.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub(crate) origin: StateId,
    pub(crate) destination: StateId,
    pub(crate) text: String,
    pub(crate) groups: Vec<usize>,
}

impl Edge {
    pub fn origin(&self) -> StateId {
        self.origin
    }

    pub fn destination(&self) -> StateId {
        self.destination
    }

    /// Literal text consumed when the edge is taken.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Capture groups the consumed text belongs to, outermost first.
    pub fn groups(&self) -> &[usize] {
        &self.groups
    }

    pub fn is_epsilon(&self) -> bool {
        self.text.is_empty()
    }
}

/// Input boundaries a match must touch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Anchors {
    /// Matches may only start at offset 0 (`^`).
    pub fixed_start: bool,
    /// Matches must end at the end of the input (`$`).
    pub fixed_end: bool,
}

/// Structural defects a finished automaton must never have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("state at position {position} carries id {id}")]
    SparseId { position: usize, id: StateId },

    #[error("edge {edge} references missing state {state}")]
    DanglingEdge { edge: usize, state: StateId },

    #[error("start state {0} does not exist")]
    MissingStart(StateId),

    #[error("no state is terminal")]
    NoTerminal,
}

/// A compiled pattern: states, edges, start state and anchoring.
///
/// Read-only once built; share it freely between matchers.
#[derive(Clone, Debug, Serialize)]
pub struct Automaton {
    states: Vec<State>,
    edges: Vec<Edge>,
    start: StateId,
    anchors: Anchors,
    group_count: usize,
    /// Edge indices per state, in creation order.
    #[serde(skip)]
    outgoing: Vec<Vec<usize>>,
}

impl Automaton {
    pub(crate) fn new(
        states: Vec<State>,
        edges: Vec<Edge>,
        start: StateId,
        anchors: Anchors,
        group_count: usize,
    ) -> Self {
        let mut outgoing = vec![Vec::new(); states.len()];
        for (i, edge) in edges.iter().enumerate() {
            if let Some(list) = outgoing.get_mut(edge.origin.index()) {
                list.push(i);
            }
        }

        Self {
            states,
            edges,
            start,
            anchors,
            group_count,
            outgoing,
        }
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn state(&self, id: StateId) -> &State {
        self.ensure_state(id)
    }

    pub fn anchors(&self) -> Anchors {
        self.anchors
    }

    pub fn fixed_start(&self) -> bool {
        self.anchors.fixed_start
    }

    pub fn fixed_end(&self) -> bool {
        self.anchors.fixed_end
    }

    /// Number of capturing groups, i.e. capture slots per match.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Edges leaving `id`, in creation order.
    pub fn outgoing(&self, id: StateId) -> impl Iterator<Item = &Edge> + '_ {
        self.outgoing
            .get(id.index())
            .into_iter()
            .flatten()
            .map(|&i| &self.edges[i])
    }

    /// Indices into [`Automaton::edges`] of the edges leaving `id`.
    pub fn outgoing_ids(&self, id: StateId) -> &[usize] {
        self.outgoing.get(id.index()).map_or(&[], Vec::as_slice)
    }

    pub fn edge(&self, index: usize) -> &Edge {
        &self.edges[index]
    }

    pub fn terminal_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().filter(|s| s.terminal).map(|s| s.id)
    }

    /// Check the structural invariants of a finished automaton.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        for (position, state) in self.states.iter().enumerate() {
            if state.id.index() != position {
                return Err(InvariantViolation::SparseId {
                    position,
                    id: state.id,
                });
            }
        }

        for (i, edge) in self.edges.iter().enumerate() {
            for state in [edge.origin, edge.destination] {
                if state.index() >= self.states.len() {
                    return Err(InvariantViolation::DanglingEdge { edge: i, state });
                }
            }
        }

        if self.start.index() >= self.states.len() {
            return Err(InvariantViolation::MissingStart(self.start));
        }

        if !self.states.iter().any(|s| s.terminal) {
            return Err(InvariantViolation::NoTerminal);
        }

        Ok(())
    }

    /// Serialize the state/edge graph for external tooling.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
