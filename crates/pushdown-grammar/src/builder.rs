//! Programmatic grammar construction.

use pushdown_core::{NonterminalId, TokenKind};

use crate::dfa::Dfa;
use crate::error::GrammarError;
use crate::grammar::Grammar;
use crate::label::{Label, LabelId};
use crate::state::{Arc, State, StateId};

/// Builder for grammars assembled in code.
///
/// Labels are deduplicated; nonterminals are numbered in declaration
/// order. Each DFA is given as a list of states, each state a list of
/// `(label, target)` arcs; state 0 is the initial state.
///
/// ```
/// use pushdown_grammar::{EMPTY, GrammarBuilder, TokenKind};
///
/// let mut b = GrammarBuilder::new();
/// let atom = b.nonterminal("atom");
/// let number = b.token(TokenKind::Number);
/// b.dfa(atom, vec![vec![(number, 1)], vec![(EMPTY, 1)]]);
/// let grammar = b.build().unwrap();
/// assert!(grammar.is_accelerated());
/// ```
#[derive(Debug)]
pub struct GrammarBuilder {
    labels: Vec<Label>,
    names: Vec<String>,
    dfas: Vec<Option<Vec<State>>>,
    start: Option<NonterminalId>,
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self {
            labels: vec![Label::empty()],
            names: Vec::new(),
            dfas: Vec::new(),
            start: None,
        }
    }

    /// Label for a token kind (any text).
    pub fn token(&mut self, kind: TokenKind) -> LabelId {
        self.label(Label::token(kind))
    }

    /// `NAME` label for a keyword.
    pub fn keyword(&mut self, literal: &str) -> LabelId {
        self.label(Label::keyword(literal))
    }

    /// Token label pinned to a literal text.
    pub fn literal(&mut self, kind: TokenKind, literal: &str) -> LabelId {
        self.label(Label::literal(kind, literal))
    }

    /// Label for a whole nonterminal.
    pub fn nonterminal_label(&mut self, id: NonterminalId) -> LabelId {
        self.label(Label::nonterminal(id))
    }

    /// Add a label, reusing an identical one.
    pub fn label(&mut self, label: Label) -> LabelId {
        if let Some(pos) = self.labels.iter().position(|l| *l == label) {
            return pos as LabelId;
        }
        self.labels.push(label);
        (self.labels.len() - 1) as LabelId
    }

    /// Declare a nonterminal, or return the id of an existing one.
    pub fn nonterminal(&mut self, name: &str) -> NonterminalId {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            return NonterminalId::from_index(pos);
        }
        self.names.push(name.to_string());
        self.dfas.push(None);
        NonterminalId::from_index(self.names.len() - 1)
    }

    /// Define the DFA of a declared nonterminal. Replaces an earlier definition.
    pub fn dfa(&mut self, id: NonterminalId, states: Vec<Vec<(LabelId, StateId)>>) -> &mut Self {
        let states = states
            .into_iter()
            .map(|arcs| State::new(arcs.into_iter().map(|(l, t)| Arc::new(l, t)).collect()))
            .collect();
        if let Some(slot) = self.dfas.get_mut(id.index()) {
            *slot = Some(states);
        }
        self
    }

    /// Override the start symbol (defaults to the first declared nonterminal).
    pub fn start(&mut self, id: NonterminalId) -> &mut Self {
        self.start = Some(id);
        self
    }

    /// Validate and accelerate.
    pub fn build(self) -> Result<Grammar, GrammarError> {
        let mut grammar = self.build_unaccelerated()?;
        grammar.accelerate()?;
        Ok(grammar)
    }

    /// Validate only.
    pub fn build_unaccelerated(self) -> Result<Grammar, GrammarError> {
        let mut dfas = Vec::with_capacity(self.dfas.len());
        for (index, (name, states)) in self.names.into_iter().zip(self.dfas).enumerate() {
            let states = states.ok_or_else(|| GrammarError::UndefinedNonterminal(name.clone()))?;
            dfas.push(Dfa::new(NonterminalId::from_index(index), name, 0, states));
        }
        let start = self
            .start
            .unwrap_or_else(|| NonterminalId::from_index(0));
        Grammar::new_unaccelerated(dfas, self.labels, start)
    }
}
