//! Grammars and token helpers shared by the engine tests.

use indoc::indoc;
use pushdown_core::{Token, TokenKind};
use pushdown_grammar::Grammar;

/// `sum: NUMBER (PLUS NUMBER)*`
pub(crate) const SUM: &str = indoc! {r#"
    {
      "labels": ["EMPTY", "NUMBER", "PLUS"],
      "dfas": {
        "sum": {"states": [[[1, 1]], [[2, 2], [0, 1]], [[1, 1]]]}
      }
    }
"#};

/// `atom: NUMBER`
pub(crate) const ATOM: &str = indoc! {r#"
    {
      "labels": ["EMPTY", "NUMBER"],
      "dfas": {
        "atom": {"states": [[[1, 1]], [[0, 1]]]}
      }
    }
"#};

/// `pair: atom atom`, `atom: NUMBER`
pub(crate) const PAIR: &str = indoc! {r#"
    {
      "labels": ["EMPTY", {"nonterminal": "atom"}, "NUMBER"],
      "dfas": {
        "pair": {"states": [[[1, 1]], [[1, 2]], [[0, 2]]]},
        "atom": {"states": [[[2, 1]], [[0, 1]]]}
      }
    }
"#};

/// ```text
/// file: (stmt | NEWLINE)*
/// stmt: (expr | 'pass') NEWLINE
/// expr: term (PLUS term)*
/// term: NUMBER | NAME | LPAR expr RPAR
/// ```
pub(crate) const CALC: &str = indoc! {r#"
    {
      "start": "file",
      "labels": [
        "EMPTY",
        {"nonterminal": "stmt"},
        "NEWLINE",
        {"nonterminal": "expr"},
        {"kind": "NAME", "literal": "pass"},
        {"nonterminal": "term"},
        "PLUS",
        "NUMBER",
        "NAME",
        "LPAR",
        "RPAR"
      ],
      "dfas": {
        "file": {"states": [[[1, 0], [2, 0], [0, 0]]]},
        "stmt": {"states": [[[3, 1], [4, 1]], [[2, 2]], [[0, 2]]]},
        "expr": {"states": [[[5, 1]], [[6, 0], [0, 1]]]},
        "term": {"states": [[[7, 1], [8, 1], [9, 2]], [[0, 1]], [[3, 3]], [[10, 1]]]}
      }
    }
"#};

pub(crate) fn grammar(json: &str) -> Grammar {
    Grammar::from_json(json).unwrap()
}

pub(crate) fn tok(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text, 1)
}

/// Tokenize a tiny calculator language: numbers, names, `+`, parens,
/// and `;` standing for NEWLINE. Lines count from 1; an ENDMARKER closes
/// the stream.
pub(crate) fn lex(src: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut line = 1;
    for word in src.split_whitespace() {
        let kind = match word {
            "+" => TokenKind::Plus,
            "(" => TokenKind::LPar,
            ")" => TokenKind::RPar,
            ";" => TokenKind::Newline,
            w if w.chars().all(|c| c.is_ascii_digit()) => TokenKind::Number,
            _ => TokenKind::Name,
        };
        let text = if kind == TokenKind::Newline { "\n" } else { word };
        tokens.push(Token::new(kind, text, line));
        if kind == TokenKind::Newline {
            line += 1;
        }
    }
    tokens.push(Token::new(TokenKind::EndMarker, "", line));
    tokens
}
