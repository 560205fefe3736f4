use crate::dump::width_for_count;
use crate::{Anchors, Colors, Graph, dump};

#[test]
fn dump_lists_flags_states_and_edges() {
    let mut g = Graph::new();
    let s0 = g.add_state();
    let s1 = g.add_state();
    let s2 = g.add_state();
    g.add_edge(s0, s1, "a", &[]);
    g.add_edge(s1, s2, "b", &[0]);
    g.add_edge(s1, s1, "", &[0]);
    g.mark_terminal(s2);
    let automaton = g.finish(
        s0,
        Anchors {
            fixed_start: true,
            fixed_end: true,
        },
        1,
    );

    insta::assert_snapshot!(dump(&automaton, Colors::OFF), @r#"
    [automaton]
    anchors ^$
    groups  1

    [states]
    0 [start]
    1
    2 [end]

    [edges]
    0 -> 1  "a"
    1 -> 2  "b"  [0]
    1 -> 1  ε  [0]
    "#);
}

#[test]
fn dump_marks_terminal_start_state() {
    let mut g = Graph::new();
    let s0 = g.add_state();
    g.mark_terminal(s0);
    let automaton = g.finish(s0, Anchors::default(), 0);

    insta::assert_snapshot!(dump(&automaton, Colors::OFF), @r"
    [automaton]
    anchors none
    groups  0

    [states]
    0 [start] [end]

    [edges]
    ");
}

#[test]
fn dump_colors_literals() {
    let mut g = Graph::new();
    let s0 = g.add_state();
    let s1 = g.add_state();
    g.add_edge(s0, s1, "q", &[]);
    g.mark_terminal(s1);
    let automaton = g.finish(s0, Anchors::default(), 0);

    let out = dump(&automaton, Colors::ON);
    assert!(out.contains("\x1b[32m\"q\"\x1b[0m"));
    assert!(out.contains("\x1b[34m[states]\x1b[0m"));
}

#[test]
fn width_grows_with_state_count() {
    assert_eq!(width_for_count(0), 1);
    assert_eq!(width_for_count(10), 1);
    assert_eq!(width_for_count(11), 2);
    assert_eq!(width_for_count(101), 3);
}
