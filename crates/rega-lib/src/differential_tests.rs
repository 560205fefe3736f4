//! Cross-check `is_match` against `regex-automata` on patterns whose meaning
//! is the same in both syntaxes.
//!
//! Rega has no `.`, `+`, `?`, classes or counted repetition, and alternation
//! does not bind tighter than anchors, so patterns here stick to literals,
//! groups, `*` and anchors around a single top-level branch.

use regex_automata::meta;

use crate::Regex;

const PATTERNS: &[&str] = &[
    "abc",
    "a*b",
    "^abc$",
    "(ab|cd)*e",
    "x(a|bc)*y",
    "^(a|b)*abb$",
    "^(?:hello|bye) world$",
    "^hello( |_)*world$",
    "^x (a*b|(cd|ef)*|hello) y$",
    "(?:ab)*c",
    "é*x",
    r"a\*b",
    r"\(x\)",
    "^$",
];

const INPUTS: &[&str] = &[
    "",
    "a",
    "b",
    "ab",
    "abc",
    "aab",
    "abab",
    "cde",
    "abcde",
    "xy",
    "xay",
    "xbcy",
    "xabcy",
    "xbay",
    "hello world",
    "bye world",
    "hello_ world",
    "hello __world",
    "helloworld",
    "x b y",
    "x aaaab y",
    "x  y",
    "x cd y",
    "x cdefcdef y",
    "x hello y",
    "x cdab y",
    "abb",
    "babb",
    "ababb",
    "ééx",
    "x",
    "a*b",
    "(x)",
    "abcdab",
];

#[test]
fn is_match_agrees_with_regex_automata() {
    for pattern in PATTERNS {
        let ours = Regex::new(pattern).unwrap();
        let theirs = meta::Regex::new(pattern).unwrap();
        for input in INPUTS {
            assert_eq!(
                ours.is_match(input),
                theirs.is_match(*input),
                "pattern {pattern:?} on {input:?}"
            );
        }
    }
}

#[test]
fn leftmost_start_agrees_with_regex_automata() {
    for pattern in ["b", "cd", "(ab)*c", "x(a|bc)*y"] {
        let ours = Regex::new(pattern).unwrap();
        let theirs = meta::Regex::new(pattern).unwrap();
        for input in INPUTS {
            assert_eq!(
                ours.find(input).map(|m| m.start()),
                theirs.find(*input).map(|m| m.start()),
                "pattern {pattern:?} on {input:?}"
            );
        }
    }
}
