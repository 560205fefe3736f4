//! Mutable state/edge arena used while compiling a pattern.
//!
//! States and edges live in dense vectors and refer to each other by index.
//! Retargeting an edge is a field write; removing a state compacts the arena
//! and renumbers every later state so that `states[i].id() == i` still holds.

use crate::automaton::{Anchors, Automaton, Edge, State, StateId};

#[derive(Clone, Debug, Default)]
pub struct Graph {
    states: Vec<State>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_state(&mut self) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(State {
            id,
            terminal: false,
        });
        id
    }

    /// Id of the most recently created state.
    pub fn last_state(&self) -> Option<StateId> {
        self.states.last().map(|s| s.id)
    }

    pub fn add_edge(
        &mut self,
        origin: StateId,
        destination: StateId,
        text: impl Into<String>,
        groups: &[usize],
    ) {
        self.ensure_live(origin);
        self.ensure_live(destination);
        self.edges.push(Edge {
            origin,
            destination,
            text: text.into(),
            groups: groups.to_vec(),
        });
    }

    pub fn has_outgoing(&self, id: StateId) -> bool {
        self.edges.iter().any(|e| e.origin == id)
    }

    /// Point every edge entering `from` at `to` instead. Returns how many
    /// edges moved.
    pub fn retarget_incoming(&mut self, from: StateId, to: StateId) -> usize {
        self.ensure_live(to);
        let mut moved = 0;
        for edge in self.edges.iter_mut().filter(|e| e.destination == from) {
            edge.destination = to;
            moved += 1;
        }
        moved
    }

    /// Delete a state no edge refers to, shifting later states down by one.
    ///
    /// Ids held outside the graph must be passed through
    /// [`StateId::renumbered`] afterwards.
    pub fn remove_state(&mut self, id: StateId) {
        self.ensure_unreferenced(id);

        self.states.remove(id.index());
        for state in &mut self.states[id.index()..] {
            state.id = state.id.renumbered(id);
        }
        for edge in &mut self.edges {
            edge.origin = edge.origin.renumbered(id);
            edge.destination = edge.destination.renumbered(id);
        }

        self.ensure_dense();
    }

    pub fn mark_terminal(&mut self, id: StateId) {
        self.ensure_live(id);
        self.states[id.index()].terminal = true;
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Seal the arena into an immutable automaton.
    pub fn finish(self, start: StateId, anchors: Anchors, group_count: usize) -> Automaton {
        self.ensure_live(start);
        Automaton::new(self.states, self.edges, start, anchors, group_count)
    }
}
