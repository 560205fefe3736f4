//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{Automaton, Graph, State, StateId};

impl Graph {
    pub(crate) fn ensure_live(&self, id: StateId) {
        assert!(
            id.index() < self.states().len(),
            "Graph: state {id} does not exist ({} states)",
            self.states().len()
        );
    }

    pub(crate) fn ensure_unreferenced(&self, id: StateId) {
        self.ensure_live(id);
        if let Some(i) = self
            .edges()
            .iter()
            .position(|e| e.origin() == id || e.destination() == id)
        {
            panic!("Graph: cannot remove state {id}, edge {i} still refers to it");
        }
    }

    pub(crate) fn ensure_dense(&self) {
        debug_assert!(
            self.states()
                .iter()
                .enumerate()
                .all(|(i, s)| s.id().index() == i),
            "Graph: state ids are no longer dense after renumbering"
        );
    }
}

impl Automaton {
    pub(crate) fn ensure_state(&self, id: StateId) -> &State {
        self.states().get(id.index()).unwrap_or_else(|| {
            panic!(
                "Automaton: state {id} not found ({} states)",
                self.states().len()
            )
        })
    }
}
