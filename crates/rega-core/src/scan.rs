//! Escape-aware scanning over pattern text.
//!
//! All offsets are byte offsets into the scanned string. An offset is
//! *escaped* when it is preceded by an odd run of escape characters, so `\\(`
//! is a literal backslash followed by a group opening while `\(` is a literal
//! parenthesis.
//!
//! The depth-aware searches count unescaped group openings and closings as
//! they walk, which lets callers restrict matches to the top nesting level.

use indexmap::IndexMap;

use crate::meta;

/// Errors from splitting a string on precomputed offsets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("split index {index} is out of range for a string of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("split index {index} is not on a character boundary")]
    NotCharBoundary { index: usize },

    #[error("split index {index} precedes the previous split point")]
    Unordered { index: usize },
}

/// Whether `index` addresses a byte of a string of length `len`.
#[inline]
pub fn index_in_range(len: usize, index: usize) -> bool {
    index < len
}

/// Whether `value` occurs verbatim at `index`.
///
/// The empty value occurs at every offset in `0..=s.len()`.
pub fn contains_at(s: &str, index: usize, value: &str) -> bool {
    s.get(index..).is_some_and(|rest| rest.starts_with(value))
}

/// Whether any of `values` occurs verbatim at `index`.
pub fn contains_at_any(s: &str, index: usize, values: &[&str]) -> bool {
    values.iter().any(|value| contains_at(s, index, value))
}

/// Whether the character at `index` is escaped.
pub fn is_escaped(s: &str, index: usize) -> bool {
    let Some(before) = s.as_bytes().get(..index) else {
        return false;
    };
    let run = before
        .iter()
        .rev()
        .take_while(|&&b| b == meta::ESCAPE.as_bytes()[0])
        .count();
    run % 2 == 1
}

pub fn contains_at_unescaped(s: &str, index: usize, value: &str) -> bool {
    !is_escaped(s, index) && contains_at(s, index, value)
}

pub fn contains_at_unescaped_any(s: &str, index: usize, values: &[&str]) -> bool {
    !is_escaped(s, index) && contains_at_any(s, index, values)
}

/// Whether `value` occurs anywhere in `s` at an unescaped offset.
pub fn contains_unescaped(s: &str, value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    s.char_indices()
        .any(|(i, _)| contains_at(s, i, value) && !is_escaped(s, i))
}

pub fn contains_unescaped_any(s: &str, values: &[&str]) -> bool {
    values.iter().any(|value| contains_unescaped(s, value))
}

pub fn contains_unescaped_all(s: &str, values: &[&str]) -> bool {
    values.iter().all(|value| contains_unescaped(s, value))
}

/// Find every unescaped occurrence of `value`.
///
/// With `zero_depth_only`, occurrences inside a group are skipped. A group
/// delimiter searched for itself is reported at the depth of the group it
/// opens or closes, so `(` and `)` of a top-level group count as depth zero.
/// The empty value matches nothing.
pub fn find_unescaped(s: &str, value: &str, zero_depth_only: bool) -> Vec<usize> {
    let mut indices = Vec::new();
    if value.is_empty() {
        return indices;
    }

    let mut depth: isize = 0;
    for (i, _) in s.char_indices() {
        if is_escaped(s, i) {
            continue;
        }

        let opens = contains_at(s, i, meta::GROUP_START);
        let closes = contains_at(s, i, meta::GROUP_END);
        if closes {
            depth -= 1;
        }
        if (!zero_depth_only || depth == 0) && contains_at(s, i, value) {
            indices.push(i);
        }
        if opens {
            depth += 1;
        }
    }

    indices
}

/// Find unescaped occurrences of several values at once.
///
/// Duplicate values are reported once, in first-seen order.
pub fn find_unescaped_many<'v>(
    s: &str,
    values: &[&'v str],
    zero_depth_only: bool,
) -> IndexMap<&'v str, Vec<usize>> {
    let mut found = IndexMap::new();
    for &value in values {
        found
            .entry(value)
            .or_insert_with(|| find_unescaped(s, value, zero_depth_only));
    }
    found
}

/// Offset of the `)` closing the unescaped `(` at `open`.
///
/// Returns `None` when `open` is not an unescaped group opening or the group
/// never closes.
pub fn find_group_end(s: &str, open: usize) -> Option<usize> {
    if !contains_at_unescaped(s, open, meta::GROUP_START) {
        return None;
    }

    let mut depth = 0usize;
    for (offset, _) in s[open..].char_indices() {
        let i = open + offset;
        if is_escaped(s, i) {
            continue;
        }
        if contains_at(s, i, meta::GROUP_START) {
            depth += 1;
        } else if contains_at(s, i, meta::GROUP_END) {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }

    None
}

/// Split `s` at each index, dropping the character found there.
///
/// Every index must address a character of `s`, in ascending order.
pub fn split_on_indices<'s>(s: &'s str, indices: &[usize]) -> Result<Vec<&'s str>, ScanError> {
    split_with(s, indices, |i| s[i..].chars().next().map_or(1, char::len_utf8))
}

/// Split `s` on every unescaped occurrence of `delimiter`.
pub fn split_on_unescaped<'s>(s: &'s str, delimiter: &str, zero_depth_only: bool) -> Vec<&'s str> {
    let indices = find_unescaped(s, delimiter, zero_depth_only);
    let mut parts = Vec::with_capacity(indices.len() + 1);
    let mut start = 0;
    for i in indices {
        // Overlapping occurrences of a repetitive delimiter are skipped.
        if i < start {
            continue;
        }
        parts.push(&s[start..i]);
        start = i + delimiter.len();
    }
    parts.push(&s[start..]);
    parts
}

/// Substring from `start` to `end`, both inclusive.
pub fn substring_between(s: &str, start: usize, end: usize) -> Option<&str> {
    s.get(start..=end)
}

fn split_with<'s>(
    s: &'s str,
    indices: &[usize],
    width: impl Fn(usize) -> usize,
) -> Result<Vec<&'s str>, ScanError> {
    for &index in indices {
        if !index_in_range(s.len(), index) {
            return Err(ScanError::IndexOutOfRange {
                index,
                len: s.len(),
            });
        }
        if !s.is_char_boundary(index) {
            return Err(ScanError::NotCharBoundary { index });
        }
    }

    let mut parts = Vec::with_capacity(indices.len() + 1);
    let mut start = 0;
    for &index in indices {
        if index < start {
            return Err(ScanError::Unordered { index });
        }
        parts.push(&s[start..index]);
        start = index + width(index);
    }
    parts.push(&s[start..]);

    Ok(parts)
}
