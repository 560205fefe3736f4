//! Rega: regular expressions compiled to explicit automata.
//!
//! A pattern is compiled once into a state/edge graph; matching walks that
//! graph with a backtracking search. The syntax is small: literals, `|`,
//! groups `(...)` and `(?:...)`, `*` after a character or group, `^`/`$` at
//! the very ends of the pattern, and `\` to escape any of these.
//!
//! # Example
//!
//! ```
//! use rega_lib::Regex;
//!
//! let regex = Regex::new("^hello( |_)*world$").expect("valid pattern");
//! let found = regex.find("hello _ world").expect("matches");
//! assert_eq!(found.as_str(), "hello _ world");
//! assert_eq!(found.group(0), Some(" _ "));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod regex;

#[cfg(test)]
mod differential_tests;

pub use regex::{Regex, compile, find, is_match};

pub use rega_compiler::PatternError;
pub use rega_core::{Anchors, Automaton, Colors, Edge, State, StateId};
pub use rega_vm::{Match, RuntimeError, Verbosity};

/// Errors produced by the public API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidPattern(#[from] PatternError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Render the error, annotated against `pattern` when it concerns it.
    pub fn render(&self, pattern: &str, colored: bool) -> String {
        match self {
            Self::InvalidPattern(err) => err.render(pattern, colored),
            Self::Runtime(err) => err.to_string(),
        }
    }
}

/// Result type for Rega operations.
pub type Result<T> = std::result::Result<T, Error>;
