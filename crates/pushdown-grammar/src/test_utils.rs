//! Grammar fixtures shared by the unit tests.

use crate::{EMPTY, Grammar, GrammarBuilder, TokenKind};

/// `sum: NUMBER (PLUS NUMBER)*`
pub(crate) fn sum_builder() -> GrammarBuilder {
    let mut b = GrammarBuilder::new();
    let sum = b.nonterminal("sum");
    let number = b.token(TokenKind::Number);
    let plus = b.token(TokenKind::Plus);
    b.dfa(
        sum,
        vec![
            vec![(number, 1)],
            vec![(plus, 2), (EMPTY, 1)],
            vec![(number, 1)],
        ],
    );
    b
}

pub(crate) fn sum_grammar() -> Grammar {
    sum_builder().build().unwrap()
}

/// `pair: atom atom`, `atom: NUMBER`
pub(crate) fn pair_grammar() -> Grammar {
    let mut b = GrammarBuilder::new();
    let pair = b.nonterminal("pair");
    let atom = b.nonterminal("atom");
    let atom_l = b.nonterminal_label(atom);
    let number = b.token(TokenKind::Number);
    b.dfa(
        pair,
        vec![vec![(atom_l, 1)], vec![(atom_l, 2)], vec![(EMPTY, 2)]],
    );
    b.dfa(atom, vec![vec![(number, 1)], vec![(EMPTY, 1)]]);
    b.build().unwrap()
}

/// ```text
/// file: (stmt | NEWLINE)* ENDMARKER
/// stmt: (expr | 'pass') NEWLINE
/// expr: term (PLUS term)*
/// term: NUMBER | NAME | LPAR expr RPAR
/// ```
pub(crate) fn calc_grammar() -> Grammar {
    let mut b = GrammarBuilder::new();
    let file = b.nonterminal("file");
    let stmt = b.nonterminal("stmt");
    let expr = b.nonterminal("expr");
    let term = b.nonterminal("term");

    let stmt_l = b.nonterminal_label(stmt);
    let newline = b.token(TokenKind::Newline);
    let endmarker = b.token(TokenKind::EndMarker);
    let expr_l = b.nonterminal_label(expr);
    let pass = b.keyword("pass");
    let term_l = b.nonterminal_label(term);
    let plus = b.token(TokenKind::Plus);
    let number = b.token(TokenKind::Number);
    let name = b.token(TokenKind::Name);
    let lpar = b.token(TokenKind::LPar);
    let rpar = b.token(TokenKind::RPar);

    b.dfa(
        file,
        vec![
            vec![(stmt_l, 0), (newline, 0), (endmarker, 1)],
            vec![(EMPTY, 1)],
        ],
    );
    b.dfa(
        stmt,
        vec![
            vec![(expr_l, 1), (pass, 1)],
            vec![(newline, 2)],
            vec![(EMPTY, 2)],
        ],
    );
    b.dfa(expr, vec![vec![(term_l, 1)], vec![(plus, 0), (EMPTY, 1)]]);
    b.dfa(
        term,
        vec![
            vec![(number, 1), (name, 1), (lpar, 2)],
            vec![(EMPTY, 1)],
            vec![(expr_l, 3)],
            vec![(rpar, 1)],
        ],
    );
    b.build().unwrap()
}
