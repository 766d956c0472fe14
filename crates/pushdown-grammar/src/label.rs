//! Label table entries: the alphabet of every DFA.

use std::fmt;

use pushdown_core::{NonterminalId, TokenKind};
use serde::{Deserialize, Serialize};

/// Position of a label in the grammar's label table.
pub type LabelId = u16;

/// Label id of the accept marker. Every grammar starts its table with it.
pub const EMPTY: LabelId = 0;

/// What a label matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelKind {
    /// Accept marker. An arc on it marks its source state as accepting.
    Empty,
    /// A token of the given lexical kind.
    Token(TokenKind),
    /// A complete nonterminal.
    Nonterminal(NonterminalId),
}

/// One label: a kind, optionally pinned to a literal text.
///
/// Only `NAME` labels use the literal for classification (keywords);
/// for every other kind the literal is informational.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub kind: LabelKind,
    pub literal: Option<String>,
}

impl Label {
    pub fn empty() -> Self {
        Self {
            kind: LabelKind::Empty,
            literal: None,
        }
    }

    /// Generic label for a token kind.
    pub fn token(kind: TokenKind) -> Self {
        Self {
            kind: LabelKind::Token(kind),
            literal: None,
        }
    }

    /// Token label pinned to a literal text.
    pub fn literal(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind: LabelKind::Token(kind),
            literal: Some(literal.into()),
        }
    }

    /// `NAME` label for a keyword.
    pub fn keyword(literal: impl Into<String>) -> Self {
        Self::literal(TokenKind::Name, literal)
    }

    pub fn nonterminal(id: NonterminalId) -> Self {
        Self {
            kind: LabelKind::Nonterminal(id),
            literal: None,
        }
    }

    /// Token kind for terminal labels.
    pub fn token_kind(&self) -> Option<TokenKind> {
        match self.kind {
            LabelKind::Token(kind) => Some(kind),
            LabelKind::Empty | LabelKind::Nonterminal(_) => None,
        }
    }

    /// `NAME` label carrying a literal.
    pub fn is_keyword(&self) -> bool {
        self.kind == LabelKind::Token(TokenKind::Name) && self.literal.is_some()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.literal) {
            (LabelKind::Empty, _) => f.write_str("EMPTY"),
            (LabelKind::Token(kind), None) => write!(f, "{kind}"),
            (LabelKind::Token(kind), Some(lit)) => write!(f, "{kind} {lit:?}"),
            (LabelKind::Nonterminal(id), _) => write!(f, "<{id}>"),
        }
    }
}
