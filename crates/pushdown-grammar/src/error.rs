//! Errors raised while loading, validating or accelerating a grammar.

use pushdown_core::TokenKind;

use crate::label::LabelId;
use crate::state::StateId;

#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary decode error: {0}")]
    Binary(#[from] postcard::Error),

    #[error("grammar defines no nonterminals")]
    Empty,

    #[error("too many nonterminals: {0}")]
    TooManyNonterminals(usize),

    #[error("too many labels: {0}")]
    TooManyLabels(usize),

    #[error("start symbol `{0}` is not defined")]
    UnknownStart(String),

    #[error("unknown token kind `{0}`")]
    UnknownTokenKind(String),

    #[error("reference to undefined nonterminal `{0}`")]
    UnknownNonterminal(String),

    #[error("nonterminal `{0}` is declared but has no DFA")]
    UndefinedNonterminal(String),

    #[error("DFA `{dfa}` is numbered {found}, expected {expected}")]
    MisnumberedDfa {
        dfa: String,
        found: u16,
        expected: u16,
    },

    #[error("DFA `{0}` has no states")]
    NoStates(String),

    #[error("DFA `{dfa}`: initial state {initial} out of range ({states} states)")]
    InvalidInitialState {
        dfa: String,
        initial: StateId,
        states: usize,
    },

    #[error("DFA `{dfa}` state {state}: arc target {target} out of range")]
    ArcTargetOutOfRange {
        dfa: String,
        state: StateId,
        target: StateId,
    },

    #[error("DFA `{dfa}` state {state}: unknown label {label}")]
    UnknownLabel {
        dfa: String,
        state: StateId,
        label: LabelId,
    },

    #[error("label {label} names nonterminal {raw}, which is not defined")]
    DanglingNonterminalLabel { label: LabelId, raw: u16 },

    #[error("token kind {kind} has more than one fallback label ({first} and {second})")]
    DuplicateFallback {
        kind: TokenKind,
        first: LabelId,
        second: LabelId,
    },

    #[error("keyword {literal:?} is defined twice (labels {first} and {second})")]
    DuplicateKeyword {
        literal: String,
        first: LabelId,
        second: LabelId,
    },

    #[error("left recursion through `{0}`")]
    LeftRecursion(String),

    #[error("DFA `{dfa}` state {state}: ambiguous transitions on label {label}")]
    Ambiguous {
        dfa: String,
        state: StateId,
        label: LabelId,
    },
}
