//! Capture-group boundary table.

use indexmap::IndexMap;
use rega_core::{meta, scan};

/// Opening offset to closing offset for every capturing group.
///
/// Insertion order is the order of the opening parentheses, so a group's
/// position in the map is its capture index. Groups opened with `(?:` are
/// left out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureGroups {
    bounds: IndexMap<usize, usize>,
}

impl CaptureGroups {
    /// Index the capturing groups of a pattern whose parentheses balance.
    ///
    /// An opening parenthesis without a partner is skipped.
    pub fn index(pattern: &str) -> Self {
        let bounds = scan::find_unescaped(pattern, meta::GROUP_START, false)
            .into_iter()
            .filter(|&open| {
                !scan::contains_at(pattern, open + meta::GROUP_START.len(), meta::NON_CAPTURE)
            })
            .filter_map(|open| scan::find_group_end(pattern, open).map(|close| (open, close)))
            .collect();
        Self { bounds }
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Capture index of the group opened at `open`, if it captures.
    pub fn index_of(&self, open: usize) -> Option<usize> {
        self.bounds.get_index_of(&open)
    }

    /// Whether capture `index` is closed by the parenthesis at `close`.
    pub fn closes(&self, index: usize, close: usize) -> bool {
        self.bounds
            .get_index(index)
            .is_some_and(|(_, &end)| end == close)
    }

    /// `(open, close)` offsets in capture-index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.bounds.iter().map(|(&open, &close)| (open, close))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_in_opening_order() {
        let groups = CaptureGroups::index("a(b(c)d)(e)");
        assert_eq!(groups.iter().collect::<Vec<_>>(), vec![(1, 7), (3, 5), (8, 10)]);
        assert_eq!(groups.index_of(1), Some(0));
        assert_eq!(groups.index_of(3), Some(1));
        assert_eq!(groups.index_of(8), Some(2));
        assert_eq!(groups.index_of(0), None);
    }

    #[test]
    fn non_capturing_groups_are_skipped() {
        let groups = CaptureGroups::index("(?:a(b))(c)");
        assert_eq!(groups.iter().collect::<Vec<_>>(), vec![(4, 6), (8, 10)]);
        assert_eq!(groups.index_of(0), None);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn escaped_parens_are_skipped() {
        let groups = CaptureGroups::index(r"\((a)\)");
        assert_eq!(groups.iter().collect::<Vec<_>>(), vec![(2, 4)]);
    }

    #[test]
    fn closes_matches_only_own_end() {
        let groups = CaptureGroups::index("(a(b))");
        assert!(groups.closes(0, 5));
        assert!(!groups.closes(0, 4));
        assert!(groups.closes(1, 4));
        assert!(!groups.closes(2, 4));
    }

    #[test]
    fn no_groups() {
        let groups = CaptureGroups::index("abc");
        assert!(groups.is_empty());
        assert_eq!(groups.len(), 0);
    }
}
