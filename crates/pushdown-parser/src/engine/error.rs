//! Errors that can occur while parsing.

use std::fmt;

use pushdown_core::{NonterminalId, Token};

/// Why a token was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalReason {
    /// The label table has no label for the token's kind.
    Unclassified,
    /// The token has a label, but no open nonterminal accepts it here.
    Rejected,
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalReason::Unclassified => f.write_str("no label for this token"),
            IllegalReason::Rejected => f.write_str("not expected here"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Syntax error in the input.
    #[error("illegal token {token}, column {col}: {reason}")]
    IllegalToken {
        token: Token,
        col: u32,
        reason: IllegalReason,
    },

    /// Every frame was popped while a token was still pending.
    #[error("internal error: frame stack exhausted with {token}, column {col} pending")]
    StackUnderflow { token: Token, col: u32 },

    /// A transition named a nonterminal the grammar does not define.
    #[error("internal error: nonterminal {0} is not defined")]
    UnknownNonterminal(NonterminalId),

    #[error("nesting depth limit of {0} exceeded")]
    DepthLimitExceeded(usize),

    /// Input ended inside `open`, in a state that cannot end it.
    #[error("unexpected end of input inside `{open}`")]
    UnexpectedEndOfInput { open: String },

    #[error("parse is already complete")]
    AlreadyComplete,

    #[error("parser was stopped by an earlier error")]
    Poisoned,

    #[error("grammar is not accelerated")]
    GrammarNotAccelerated,

    #[error("start symbol `{0}` is not defined")]
    UnknownStart(String),
}

impl ParseError {
    /// Whether the error points at broken grammar tables rather than
    /// broken input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ParseError::StackUnderflow { .. } | ParseError::UnknownNonterminal(_)
        )
    }
}
