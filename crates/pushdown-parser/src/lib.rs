#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Table-driven pushdown parser.
//!
//! The parser walks a [`Grammar`] (one DFA per nonterminal) one token at a
//! time, keeping an explicit stack of open nonterminals instead of
//! recursing, and appends every shifted token and entered nonterminal to a
//! concrete syntax tree.
//!
//! ```
//! use pushdown_grammar::{EMPTY, GrammarBuilder, TokenKind};
//! use pushdown_parser::{Parser, Token};
//!
//! let mut b = GrammarBuilder::new();
//! let atom = b.nonterminal("atom");
//! let number = b.token(TokenKind::Number);
//! b.dfa(atom, vec![vec![(number, 1)], vec![(EMPTY, 1)]]);
//! let grammar = b.build().unwrap();
//!
//! let mut parser = Parser::new(&grammar).unwrap();
//! parser.feed(&Token::new(TokenKind::Number, "42", 1), 0).unwrap();
//! assert!(parser.is_done());
//! assert_eq!(parser.tree().unwrap().root().leaf_text(), "42");
//! ```

pub mod engine;

pub use engine::{
    IllegalReason, NoopTracer, ParseError, Parser, ParserBuilder, PopReason, PrintTracer, Tracer,
    Verbosity, classify, dump_tree, parse, parse_with,
};

pub use pushdown_core::{Colors, Cst, NodeId, NodeKind, NodeRef, Token, TokenKind};
pub use pushdown_grammar::Grammar;
