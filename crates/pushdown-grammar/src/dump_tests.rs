use crate::test_utils::{pair_grammar, sum_builder, sum_grammar};
use crate::{Colors, dump};

#[test]
fn shifts_and_accept() {
    let res = dump(&sum_grammar(), Colors::OFF);

    insta::assert_snapshot!(res, @r"
    labels
      0 EMPTY
      1 NUMBER
      2 PLUS
    dfa 256 sum (initial 0 start, first: NUMBER)
      state 0
        NUMBER -> 1
        accel [1, 2)
          NUMBER: shift 1
      state 1 accept
        PLUS -> 2
        EMPTY -> 1
        accel [2, 3)
          PLUS: shift 2
      state 2
        NUMBER -> 1
        accel [1, 2)
          NUMBER: shift 1
    ");
}

#[test]
fn pushes() {
    let res = dump(&pair_grammar(), Colors::OFF);

    insta::assert_snapshot!(res, @r"
    labels
      0 EMPTY
      1 <atom>
      2 NUMBER
    dfa 256 pair (initial 0 start, first: NUMBER)
      state 0
        <atom> -> 1
        accel [2, 3)
          NUMBER: push atom then 1
      state 1
        <atom> -> 2
        accel [2, 3)
          NUMBER: push atom then 2
      state 2 accept-only
        EMPTY -> 2
        accel none
    dfa 257 atom (initial 0, first: NUMBER)
      state 0
        NUMBER -> 1
        accel [2, 3)
          NUMBER: shift 1
      state 1 accept-only
        EMPTY -> 1
        accel none
    ");
}

#[test]
fn unaccelerated_shows_raw_arcs_only() {
    let g = sum_builder().build_unaccelerated().unwrap();

    let res = dump(&g, Colors::OFF);

    insta::assert_snapshot!(res, @r"
    labels
      0 EMPTY
      1 NUMBER
      2 PLUS
    dfa 256 sum (initial 0 start)
      state 0
        NUMBER -> 1
      state 1
        PLUS -> 2
        EMPTY -> 1
      state 2
        NUMBER -> 1
    ");
}

#[test]
fn colored() {
    let res = dump(&pair_grammar(), Colors::ON);

    assert!(res.contains("\x1b[34mpair\x1b[0m"));
    assert!(res.contains("<\x1b[34matom\x1b[0m>"));
    assert!(res.contains("\x1b[2mNUMBER\x1b[0m"));
}
