//! Rega compiler: pattern analysis and automaton construction.
//!
//! This crate turns a pattern string into an [`Automaton`]:
//! - `pattern` - anchor stripping and placement checks
//! - `validate` - balanced-parenthesis check
//! - `groups` - capture-group boundary table
//! - `compile` - single left-to-right pass emitting states and edges
//! - `error` - the invalid-pattern error and its rendering

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod error;
pub mod groups;
pub mod pattern;
pub mod validate;

#[cfg(test)]
pub mod test_utils;

pub use compile::{Compiler, compile};
pub use error::PatternError;
pub use groups::CaptureGroups;
pub use pattern::Pattern;

pub use rega_core::Automaton;
