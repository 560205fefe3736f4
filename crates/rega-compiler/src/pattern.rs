//! Anchor handling.
//!
//! `^` is an anchor only as the very first character and `$` only as the very
//! last unescaped one. Everywhere else an unescaped `^` or `$` is an error;
//! escaped ones are literals.

use rega_core::{Anchors, meta, scan};

use crate::PatternError;
use crate::validate::validate_groups;

/// A validated pattern split into its anchors and the body between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern<'p> {
    source: &'p str,
    body_start: usize,
    body_end: usize,
    anchors: Anchors,
}

impl<'p> Pattern<'p> {
    pub fn parse(source: &'p str) -> Result<Self, PatternError> {
        validate_groups(source)?;

        let fixed_start = source.starts_with(meta::STRING_START);
        let body_start = if fixed_start {
            meta::STRING_START.len()
        } else {
            0
        };

        let end_at = source.len().saturating_sub(meta::STRING_END.len());
        let fixed_end = end_at >= body_start
            && source.ends_with(meta::STRING_END)
            && !scan::is_escaped(source, end_at);
        let body_end = if fixed_end { end_at } else { source.len() };

        let pattern = Self {
            source,
            body_start,
            body_end,
            anchors: Anchors {
                fixed_start,
                fixed_end,
            },
        };
        pattern.check_inner_anchors()?;
        Ok(pattern)
    }

    fn check_inner_anchors(&self) -> Result<(), PatternError> {
        let body = self.body();
        let anchors = [meta::STRING_START, meta::STRING_END];

        let Some((at, anchor)) = body
            .char_indices()
            .find(|&(i, _)| scan::contains_at_unescaped_any(body, i, &anchors))
        else {
            return Ok(());
        };

        Err(PatternError::MisplacedAnchor {
            anchor,
            offset: self.body_start + at,
        })
    }

    /// The full pattern, anchors included.
    pub fn source(&self) -> &'p str {
        self.source
    }

    /// The pattern with its anchors stripped.
    pub fn body(&self) -> &'p str {
        &self.source[self.body_start..self.body_end]
    }

    pub fn anchors(&self) -> Anchors {
        self.anchors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(source: &str) -> (&str, bool, bool) {
        let pattern = Pattern::parse(source).unwrap();
        let anchors = pattern.anchors();
        (pattern.body(), anchors.fixed_start, anchors.fixed_end)
    }

    #[test]
    fn strips_anchors() {
        assert_eq!(parts("abc"), ("abc", false, false));
        assert_eq!(parts("^abc"), ("abc", true, false));
        assert_eq!(parts("abc$"), ("abc", false, true));
        assert_eq!(parts("^abc$"), ("abc", true, true));
    }

    #[test]
    fn bare_anchors() {
        assert_eq!(parts(""), ("", false, false));
        assert_eq!(parts("^"), ("", true, false));
        assert_eq!(parts("$"), ("", false, true));
        assert_eq!(parts("^$"), ("", true, true));
    }

    #[test]
    fn escaped_dollar_is_literal() {
        assert_eq!(parts(r"a\$"), (r"a\$", false, false));
        assert_eq!(parts(r"a\\$"), (r"a\\", false, true));
        assert_eq!(parts(r"a\$b"), (r"a\$b", false, false));
    }

    #[test]
    fn escaped_caret_inside_is_literal() {
        assert_eq!(parts(r"^\^a"), (r"\^a", true, false));
    }

    #[test]
    fn misplaced_anchors() {
        assert_eq!(
            Pattern::parse("a^b"),
            Err(PatternError::MisplacedAnchor {
                anchor: '^',
                offset: 1
            })
        );
        assert_eq!(
            Pattern::parse("^a$b$"),
            Err(PatternError::MisplacedAnchor {
                anchor: '$',
                offset: 2
            })
        );
        assert_eq!(
            Pattern::parse("^^a"),
            Err(PatternError::MisplacedAnchor {
                anchor: '^',
                offset: 1
            })
        );
        assert_eq!(
            Pattern::parse(r"a$\$"),
            Err(PatternError::MisplacedAnchor {
                anchor: '$',
                offset: 1
            })
        );
    }

    #[test]
    fn groups_are_checked_first() {
        assert_eq!(
            Pattern::parse("a^(b"),
            Err(PatternError::UnclosedGroup { offset: 2 })
        );
    }
}
