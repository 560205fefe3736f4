use rega_compiler::compile;
use rega_core::Colors;

use super::{PrintTracer, VM, Verbosity};

fn trace(pattern: &str, input: &str, verbosity: Verbosity) -> String {
    let automaton = compile(pattern).unwrap();
    let mut tracer = PrintTracer::new(&automaton, verbosity, Colors::OFF);
    VM::new(&automaton, input).execute_with(&mut tracer);
    tracer.finish()
}

#[test]
fn default_trace_shows_backtracking() {
    insta::assert_snapshot!(trace("^(a|ab)c$", "abc", Verbosity::Default), @r#"
    start @0
      0 -> 1  "a"  [0]  @1
      1 -> 3  ε  [0]  @1
      1 backtrack @1
      0 backtrack @0
      0 -> 2  "ab"  [0]  @2
      2 -> 3  ε  [0]  @2
      3 -> 4  "c"  @3
      4 accept @3
    "#);
}

#[test]
fn verbose_trace_shows_rejections() {
    insta::assert_snapshot!(trace("^ab|ac$", "ac", Verbosity::Verbose), @r#"
    start @0
      0 -x 1  "ab"  @0
      0 -> 2  "ac"  @2
      2 accept @2
    "#);
}

#[test]
fn verbose_trace_shows_revisits() {
    let out = trace("(a*)*", "aa", Verbosity::Verbose);
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines.contains(&"  2 seen @2"), "{out}");
    assert_eq!(lines.last(), Some(&"  1 accept @2"));
}

#[test]
fn each_candidate_start_is_announced() {
    let out = trace("b", "aab", Verbosity::Default);
    let starts: Vec<&str> = out.lines().filter(|l| l.starts_with("start")).collect();
    assert_eq!(starts, ["start @0", "start @1", "start @2"]);
}

#[test]
fn verbose_trace_shows_dead_ends() {
    let out = trace("^a$", "b", Verbosity::Verbose);
    assert!(out.lines().any(|l| l == "  0 dead end @0"), "{out}");
}

#[test]
fn colored_trace() {
    let automaton = compile("^ab|ac$").unwrap();
    let mut tracer = PrintTracer::new(&automaton, Verbosity::Verbose, Colors::ON);
    VM::new(&automaton, "ac").execute_with(&mut tracer);
    assert_eq!(tracer.lines()[0], "\x1b[34mstart\x1b[0m @0");
    assert!(tracer.lines()[1].contains("\x1b[31m-x\x1b[0m"));
}
