//! Checkpoints for backtracking.
//!
//! The stack holds the path currently being explored, one checkpoint per
//! state visited. On failure the top checkpoint is popped and its parent
//! resumes with its next untried edge.

use rega_core::StateId;

/// One step of the path under exploration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    pub state: StateId,
    /// Input offset on arrival.
    pub pos: usize,
    /// Position in the state's outgoing list of the next edge to try.
    pub next_edge: usize,
    /// Edge taken to get here; `None` for the candidate start.
    pub via: Option<usize>,
}

impl Checkpoint {
    pub fn new(state: StateId, pos: usize, via: Option<usize>) -> Self {
        Self {
            state,
            pos,
            next_edge: 0,
            via,
        }
    }
}

#[derive(Debug, Default)]
pub struct CheckpointStack {
    stack: Vec<Checkpoint>,
}

impl CheckpointStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, checkpoint: Checkpoint) {
        self.stack.push(checkpoint);
    }

    pub fn pop(&mut self) -> Option<Checkpoint> {
        self.stack.pop()
    }

    #[inline]
    pub fn top(&self) -> Option<&Checkpoint> {
        self.stack.last()
    }

    /// Move the top checkpoint past the edge it is about to try.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(top) = self.stack.last_mut() {
            top.next_edge += 1;
        }
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Edges taken along the current path, first to last.
    pub fn path(&self) -> impl Iterator<Item = usize> + '_ {
        self.stack.iter().filter_map(|c| c.via)
    }

    #[inline]
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[inline]
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_skips_root() {
        let mut stack = CheckpointStack::new();
        stack.push(Checkpoint::new(StateId(0), 0, None));
        stack.push(Checkpoint::new(StateId(1), 1, Some(0)));
        stack.push(Checkpoint::new(StateId(2), 1, Some(3)));
        assert_eq!(stack.path().collect::<Vec<_>>(), vec![0, 3]);

        stack.pop();
        assert_eq!(stack.path().collect::<Vec<_>>(), vec![0]);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn advance_moves_top_only() {
        let mut stack = CheckpointStack::new();
        stack.push(Checkpoint::new(StateId(0), 0, None));
        stack.push(Checkpoint::new(StateId(1), 2, Some(0)));
        stack.advance();
        stack.advance();
        assert_eq!(stack.top().map(|c| c.next_edge), Some(2));

        stack.pop();
        assert_eq!(stack.top().map(|c| c.next_edge), Some(0));

        stack.clear();
        assert!(stack.is_empty());
        stack.advance();
        assert!(stack.top().is_none());
    }
}
