//! Compiler state and the per-character construction rules.

use rega_core::{Anchors, Automaton, Graph, StateId, meta, scan};

use crate::CaptureGroups;

/// Builds the automaton for one pattern body.
///
/// The four stacks move together: opening a group pushes one entry onto
/// `decision_states` and `branches_per_group` and one branch onto
/// `branch_ends`; closing it pops exactly what it pushed. The bottom entries
/// stand for the implicit top-level group and are never popped.
pub struct Compiler<'p> {
    pattern: &'p str,
    groups: &'p CaptureGroups,
    graph: Graph,
    start: StateId,
    /// State each open group's branches fan out from.
    decision_states: Vec<StateId>,
    /// Current end state of every branch of every open group.
    branch_ends: Vec<StateId>,
    /// How many of `branch_ends` belong to each open group.
    branches_per_group: Vec<usize>,
    /// Capture indices of the enclosing capturing groups, outermost first.
    active_captures: Vec<usize>,
    /// Literal text not yet emitted as an edge.
    sequence: String,
}

impl<'p> Compiler<'p> {
    pub fn new(pattern: &'p str, groups: &'p CaptureGroups) -> Self {
        let mut graph = Graph::new();
        let start = graph.add_state();
        Self {
            pattern,
            groups,
            graph,
            start,
            decision_states: vec![start],
            branch_ends: vec![start],
            branches_per_group: vec![1],
            active_captures: Vec::new(),
            sequence: String::new(),
        }
    }

    /// Run the construction rules over the whole pattern body.
    pub fn scan(&mut self) {
        let mut i = 0;
        while let Some(c) = self.pattern[i..].chars().next() {
            i += self.step(i, c);
        }
        self.flush();
    }

    /// Mark the surviving branch ends terminal and seal the automaton.
    pub fn finish(mut self, anchors: Anchors) -> Automaton {
        for &end in &self.branch_ends {
            self.graph.mark_terminal(end);
        }
        self.graph.finish(self.start, anchors, self.groups.len())
    }

    /// Apply the rule for the character at `i`; returns how far to advance.
    fn step(&mut self, i: usize, c: char) -> usize {
        let p = self.pattern;
        if scan::contains_at_unescaped(p, i, meta::OR) {
            self.open_branch();
            meta::OR.len()
        } else if scan::contains_at_unescaped(p, i, meta::GROUP_START) {
            self.open_group(i)
        } else if scan::contains_at_unescaped(p, i, meta::GROUP_END) {
            self.close_group(i)
        } else if scan::contains_at_unescaped(p, i, meta::ESCAPE) {
            meta::ESCAPE.len()
        } else if self.is_repeated(i + c.len_utf8()) {
            self.repeat_char(c);
            c.len_utf8() + meta::ZERO_OR_MORE.len()
        } else {
            self.sequence.push(c);
            c.len_utf8()
        }
    }

    fn open_branch(&mut self) {
        self.flush();
        let decision = self.decision();
        self.branch_ends.push(decision);
        *self.branch_count() += 1;
    }

    fn open_group(&mut self, open: usize) -> usize {
        self.flush();

        let repeated = scan::find_group_end(self.pattern, open)
            .is_some_and(|close| self.is_repeated(close + meta::GROUP_END.len()));
        let decision = if repeated {
            self.loop_entry()
        } else {
            self.branch_end()
        };

        self.decision_states.push(decision);
        self.branch_ends.push(decision);
        self.branches_per_group.push(1);
        if let Some(index) = self.groups.index_of(open) {
            self.active_captures.push(index);
        }

        let after = open + meta::GROUP_START.len();
        if scan::contains_at(self.pattern, after, meta::NON_CAPTURE) {
            meta::GROUP_START.len() + meta::NON_CAPTURE.len()
        } else {
            meta::GROUP_START.len()
        }
    }

    fn close_group(&mut self, close: usize) -> usize {
        self.flush();

        let repeated = self.is_repeated(close + meta::GROUP_END.len());
        let count = self
            .branches_per_group
            .pop()
            .expect("closing parenthesis without an open group");
        let ends = self.branch_ends.split_off(self.branch_ends.len() - count);

        let end = if repeated {
            self.close_loop(ends)
        } else {
            self.join(ends)
        };

        self.decision_states.pop();
        self.set_branch_end(end);
        debug_assert_eq!(self.decision_states.len(), self.branches_per_group.len());

        if let Some(&index) = self.active_captures.last()
            && self.groups.closes(index, close)
        {
            self.active_captures.pop();
        }

        if repeated {
            meta::GROUP_END.len() + meta::ZERO_OR_MORE.len()
        } else {
            meta::GROUP_END.len()
        }
    }

    /// Route every branch of a starred group back to its decision state.
    ///
    /// A branch end with no outgoing edges is merged into the decision state;
    /// one that already leads somewhere gets an epsilon edge back instead.
    /// Returns the decision state, which is where the group now ends.
    fn close_loop(&mut self, mut ends: Vec<StateId>) -> StateId {
        let mut decision = self.decision();
        ends.dedup();

        let mut k = 0;
        while k < ends.len() {
            let end = ends[k];
            k += 1;
            if end == decision {
                continue;
            }

            if self.graph.has_outgoing(end) {
                self.graph
                    .add_edge(end, decision, "", &self.active_captures);
                continue;
            }

            self.graph.retarget_incoming(end, decision);
            self.graph.remove_state(end);
            self.renumber(end);
            decision = decision.renumbered(end);
            for pending in &mut ends[k..] {
                *pending = pending.renumbered(end);
            }
        }

        decision
    }

    /// Merge the branches of a plain group into one end state.
    fn join(&mut self, ends: Vec<StateId>) -> StateId {
        if let [only] = ends.as_slice() {
            return *only;
        }

        let join = self.graph.add_state();
        for end in ends {
            self.graph.add_edge(end, join, "", &self.active_captures);
        }
        join
    }

    /// Emit `c*` as a self-loop on the current branch end.
    fn repeat_char(&mut self, c: char) {
        self.flush();
        let state = self.loop_entry();
        self.graph
            .add_edge(state, state, c.to_string(), &self.active_captures);
    }

    /// State a loop may hang off without leaking into sibling branches.
    ///
    /// Decision states are shared by every branch of their group, so a loop
    /// there would be reachable from all of them. In that case the branch
    /// first steps through an epsilon edge into a fresh state.
    fn loop_entry(&mut self) -> StateId {
        let end = self.branch_end();
        if !self.decision_states.contains(&end) {
            return end;
        }

        let entry = self.graph.add_state();
        self.graph.add_edge(end, entry, "", &self.active_captures);
        self.set_branch_end(entry);
        entry
    }

    /// Emit the pending literal run as one edge ending in a new state.
    fn flush(&mut self) {
        if self.sequence.is_empty() {
            return;
        }

        let origin = self.branch_end();
        let destination = self.graph.add_state();
        let text = std::mem::take(&mut self.sequence);
        self.graph
            .add_edge(origin, destination, text, &self.active_captures);
        self.set_branch_end(destination);
    }

    fn renumber(&mut self, removed: StateId) {
        self.start = self.start.renumbered(removed);
        for id in self
            .decision_states
            .iter_mut()
            .chain(self.branch_ends.iter_mut())
        {
            *id = id.renumbered(removed);
        }
    }

    fn is_repeated(&self, index: usize) -> bool {
        scan::contains_at_unescaped(self.pattern, index, meta::ZERO_OR_MORE)
    }

    fn decision(&self) -> StateId {
        *self
            .decision_states
            .last()
            .expect("top-level decision state is never popped")
    }

    fn branch_end(&self) -> StateId {
        *self
            .branch_ends
            .last()
            .expect("top-level branch end is never popped")
    }

    fn set_branch_end(&mut self, id: StateId) {
        let top = self
            .branch_ends
            .last_mut()
            .expect("top-level branch end is never popped");
        *top = id;
    }

    fn branch_count(&mut self) -> &mut usize {
        self.branches_per_group
            .last_mut()
            .expect("top-level branch count is never popped")
    }

    #[cfg(test)]
    pub(super) fn depth(&self) -> (usize, usize, usize, usize) {
        (
            self.decision_states.len(),
            self.branch_ends.len(),
            self.branches_per_group.len(),
            self.active_captures.len(),
        )
    }
}
