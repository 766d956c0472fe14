//! JSON grammar tables.
//!
//! Format:
//!
//! ```json
//! {
//!   "start": "sum",
//!   "labels": ["EMPTY", "NUMBER", {"kind": "NAME", "literal": "if"}, {"nonterminal": "term"}],
//!   "dfas": {
//!     "sum": { "initial": 0, "states": [[[1, 1]], [[0, 1]]] }
//!   }
//! }
//! ```
//!
//! `dfas` is order-preserving: the first entry is nonterminal `NT_OFFSET`,
//! the next `NT_OFFSET + 1`, and so on. Each state is a list of
//! `[label, target]` arcs. `start` defaults to the first DFA.

use indexmap::IndexMap;
use pushdown_core::{NonterminalId, TokenKind};
use serde::Deserialize;

use crate::dfa::Dfa;
use crate::error::GrammarError;
use crate::grammar::Grammar;
use crate::label::{Label, LabelKind};
use crate::state::{Arc, State, StateId};

impl Grammar {
    /// Parse, validate and accelerate a grammar from JSON.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let raw: RawGrammar = serde_json::from_str(json)?;
        let mut grammar = raw.resolve()?;
        grammar.accelerate()?;
        Ok(grammar)
    }
}

/// Raw grammar structure matching the JSON format.
#[derive(Debug, Deserialize)]
struct RawGrammar {
    #[serde(default)]
    start: Option<String>,
    labels: Vec<RawLabel>,
    dfas: IndexMap<String, RawDfa>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLabel {
    /// `"EMPTY"` or a bare token kind name.
    Kind(String),
    Token {
        kind: String,
        #[serde(default)]
        literal: Option<String>,
    },
    Nonterminal {
        nonterminal: String,
    },
}

#[derive(Debug, Deserialize)]
struct RawDfa {
    #[serde(default)]
    initial: StateId,
    states: Vec<Vec<(u16, StateId)>>,
}

impl RawGrammar {
    fn resolve(self) -> Result<Grammar, GrammarError> {
        let lookup = |name: &str| {
            self.dfas
                .get_index_of(name)
                .map(NonterminalId::from_index)
                .ok_or_else(|| GrammarError::UnknownNonterminal(name.to_string()))
        };
        let token_kind = |name: &str| {
            TokenKind::from_name(name).ok_or_else(|| GrammarError::UnknownTokenKind(name.to_string()))
        };

        let labels = self
            .labels
            .iter()
            .map(|raw| -> Result<Label, GrammarError> {
                Ok(match raw {
                    RawLabel::Kind(name) if name == "EMPTY" => Label::empty(),
                    RawLabel::Kind(name) => Label::token(token_kind(name.as_str())?),
                    RawLabel::Token { kind, literal } => Label {
                        kind: LabelKind::Token(token_kind(kind.as_str())?),
                        literal: literal.clone(),
                    },
                    RawLabel::Nonterminal { nonterminal } => Label::nonterminal(lookup(nonterminal.as_str())?),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let start = match &self.start {
            Some(name) => self
                .dfas
                .get_index_of(name.as_str())
                .map(NonterminalId::from_index)
                .ok_or_else(|| GrammarError::UnknownStart(name.clone()))?,
            None => NonterminalId::from_index(0),
        };

        let dfas = self
            .dfas
            .iter()
            .enumerate()
            .map(|(index, (name, raw))| {
                let states = raw
                    .states
                    .iter()
                    .map(|arcs| State::new(arcs.iter().map(|&(l, t)| Arc::new(l, t)).collect()))
                    .collect();
                Dfa::new(NonterminalId::from_index(index), name.clone(), raw.initial, states)
            })
            .collect();

        Grammar::new_unaccelerated(dfas, labels, start)
    }
}
