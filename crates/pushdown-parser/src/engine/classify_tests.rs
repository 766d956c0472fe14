use indoc::indoc;
use pushdown_core::TokenKind;

use super::classify;
use super::test_utils::{CALC, SUM, grammar, tok};

#[test]
fn token_kind_maps_to_its_label() {
    let g = grammar(CALC);

    assert_eq!(classify(&g, &tok(TokenKind::Number, "7")), Some(7));
    assert_eq!(classify(&g, &tok(TokenKind::Plus, "+")), Some(6));
    assert_eq!(classify(&g, &tok(TokenKind::Newline, "\n")), Some(2));
}

#[test]
fn keyword_beats_generic_name() {
    let g = grammar(CALC);

    assert_eq!(classify(&g, &tok(TokenKind::Name, "pass")), Some(4));
    assert_eq!(classify(&g, &tok(TokenKind::Name, "passes")), Some(8));
    assert_eq!(classify(&g, &tok(TokenKind::Name, "Pass")), Some(8));
}

#[test]
fn keyword_after_fallback_in_table() {
    let g = grammar(indoc! {r#"
        {
          "labels": ["EMPTY", "NAME", {"kind": "NAME", "literal": "if"}],
          "dfas": {"a": {"states": [[[1, 1], [2, 1]], [[0, 1]]]}}
        }
    "#});

    assert_eq!(classify(&g, &tok(TokenKind::Name, "if")), Some(2));
    assert_eq!(classify(&g, &tok(TokenKind::Name, "x")), Some(1));
}

#[test]
fn name_without_fallback_is_unclassified() {
    let g = grammar(indoc! {r#"
        {
          "labels": ["EMPTY", {"kind": "NAME", "literal": "if"}],
          "dfas": {"a": {"states": [[[1, 1]], [[0, 1]]]}}
        }
    "#});

    assert_eq!(classify(&g, &tok(TokenKind::Name, "if")), Some(1));
    assert_eq!(classify(&g, &tok(TokenKind::Name, "x")), None);
}

#[test]
fn literal_ignored_for_other_kinds() {
    let g = grammar(indoc! {r#"
        {
          "labels": ["EMPTY", {"kind": "OP", "literal": "+"}, {"kind": "OP", "literal": "-"}],
          "dfas": {"a": {"states": [[[1, 1], [2, 1]], [[0, 1]]]}}
        }
    "#});

    assert_eq!(classify(&g, &tok(TokenKind::Op, "+")), Some(1));
    assert_eq!(classify(&g, &tok(TokenKind::Op, "-")), Some(1));
}

#[test]
fn unknown_kind() {
    let g = grammar(SUM);

    assert_eq!(classify(&g, &tok(TokenKind::Name, "x")), None);
    assert_eq!(classify(&g, &tok(TokenKind::Star, "*")), None);
}
