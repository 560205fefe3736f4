//! Match results.

use std::ops::Range;

use serde::Serialize;

/// A successful match: where it starts, what it covers and what each
/// capture group collected.
///
/// A group that was never traversed holds the empty string. A group inside a
/// loop holds the text of every iteration, concatenated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Match<'h> {
    start: usize,
    text: &'h str,
    groups: Vec<String>,
}

impl<'h> Match<'h> {
    pub(crate) fn new(start: usize, text: &'h str, groups: Vec<String>) -> Self {
        Self {
            start,
            text,
            groups,
        }
    }

    /// Byte offset of the first matched character.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the match.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &'h str {
        self.text
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Text collected by capture group `index`, 0-based.
    pub fn group(&self, index: usize) -> Option<&str> {
        self.groups.get(index).map(String::as_str)
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let input = "xxabcx";
        let m = Match::new(2, &input[2..5], vec!["b".into(), String::new()]);

        assert_eq!(m.start(), 2);
        assert_eq!(m.end(), 5);
        assert_eq!(m.len(), 3);
        assert!(!m.is_empty());
        assert_eq!(m.as_str(), "abc");
        assert_eq!(m.range(), 2..5);
        assert_eq!(&input[m.range()], "abc");
        assert_eq!(m.group(0), Some("b"));
        assert_eq!(m.group(1), Some(""));
        assert_eq!(m.group(2), None);
        assert_eq!(m.groups().len(), 2);
    }

    #[test]
    fn empty_match() {
        let m = Match::new(4, "", Vec::new());
        assert!(m.is_empty());
        assert_eq!(m.range(), 4..4);
    }

    #[test]
    fn serializes_fields() {
        let m = Match::new(1, "ab", vec!["a".into()]);
        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["start"], 1);
        assert_eq!(value["text"], "ab");
        assert_eq!(value["groups"][0], "a");
    }
}
