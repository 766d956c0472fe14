//! The complete grammar table.

use std::collections::HashMap;

use pushdown_core::{NT_OFFSET, NonterminalId, TokenKind};
use serde::{Deserialize, Serialize};

use crate::dfa::Dfa;
use crate::error::GrammarError;
use crate::label::{Label, LabelId, LabelKind};

/// All DFAs of a grammar, its label table and its start symbol.
///
/// Constructors validate and accelerate, so a `Grammar` obtained from
/// [`Grammar::new`], the loaders or [`GrammarBuilder::build`] is read-only
/// from then on and can be shared across threads by reference.
///
/// [`GrammarBuilder::build`]: crate::GrammarBuilder::build
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    pub(crate) dfas: Vec<Dfa>,
    pub(crate) labels: Vec<Label>,
    pub(crate) start: NonterminalId,
    #[serde(skip)]
    pub(crate) accelerated: bool,
}

impl Grammar {
    /// Validate and accelerate a grammar.
    ///
    /// `dfas[i]` must carry id `NT_OFFSET + i`.
    pub fn new(
        dfas: Vec<Dfa>,
        labels: Vec<Label>,
        start: NonterminalId,
    ) -> Result<Self, GrammarError> {
        let mut grammar = Self::new_unaccelerated(dfas, labels, start)?;
        grammar.accelerate()?;
        Ok(grammar)
    }

    /// Validate a grammar but leave acceleration to the caller.
    pub fn new_unaccelerated(
        dfas: Vec<Dfa>,
        labels: Vec<Label>,
        start: NonterminalId,
    ) -> Result<Self, GrammarError> {
        let grammar = Self {
            dfas,
            labels,
            start,
            accelerated: false,
        };
        grammar.validate()?;
        Ok(grammar)
    }

    #[inline]
    pub fn is_accelerated(&self) -> bool {
        self.accelerated
    }

    #[inline]
    pub fn start(&self) -> NonterminalId {
        self.start
    }

    #[inline]
    pub fn dfas(&self) -> &[Dfa] {
        &self.dfas
    }

    /// DFA for a nonterminal, `None` if the id is not defined.
    #[inline]
    pub fn dfa(&self, id: NonterminalId) -> Option<&Dfa> {
        self.dfas.get(id.index())
    }

    pub fn dfa_by_name(&self, name: &str) -> Option<&Dfa> {
        self.dfas.iter().find(|d| d.name == name)
    }

    /// Name of a nonterminal, `"?"` if undefined.
    pub fn name_of(&self, id: NonterminalId) -> &str {
        self.dfa(id).map_or("?", |d| d.name())
    }

    #[inline]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    #[inline]
    pub fn label(&self, id: LabelId) -> Option<&Label> {
        self.labels.get(id as usize)
    }

    /// Check every structural invariant the driver relies on.
    pub fn validate(&self) -> Result<(), GrammarError> {
        if self.dfas.is_empty() {
            return Err(GrammarError::Empty);
        }
        if self.dfas.len() > (u16::MAX - NT_OFFSET) as usize {
            return Err(GrammarError::TooManyNonterminals(self.dfas.len()));
        }
        if self.labels.len() > LabelId::MAX as usize {
            return Err(GrammarError::TooManyLabels(self.labels.len()));
        }
        if self.dfa(self.start).is_none() {
            return Err(GrammarError::UnknownStart(self.start.to_string()));
        }

        self.validate_labels()?;

        for (index, dfa) in self.dfas.iter().enumerate() {
            let expected = NonterminalId::from_index(index);
            if dfa.id != expected {
                return Err(GrammarError::MisnumberedDfa {
                    dfa: dfa.name.clone(),
                    found: dfa.id.as_u16(),
                    expected: expected.as_u16(),
                });
            }
            if dfa.states.is_empty() {
                return Err(GrammarError::NoStates(dfa.name.clone()));
            }
            if dfa.initial as usize >= dfa.states.len() {
                return Err(GrammarError::InvalidInitialState {
                    dfa: dfa.name.clone(),
                    initial: dfa.initial,
                    states: dfa.states.len(),
                });
            }
            for (state_index, state) in dfa.states.iter().enumerate() {
                for arc in state.arcs() {
                    if arc.label as usize >= self.labels.len() {
                        return Err(GrammarError::UnknownLabel {
                            dfa: dfa.name.clone(),
                            state: state_index as u16,
                            label: arc.label,
                        });
                    }
                    if arc.target as usize >= dfa.states.len() {
                        return Err(GrammarError::ArcTargetOutOfRange {
                            dfa: dfa.name.clone(),
                            state: state_index as u16,
                            target: arc.target,
                        });
                    }
                }
            }
        }

        Ok(())
    }

    fn validate_labels(&self) -> Result<(), GrammarError> {
        let mut fallbacks: HashMap<TokenKind, LabelId> = HashMap::new();
        let mut keywords: HashMap<&str, LabelId> = HashMap::new();

        for (index, label) in self.labels.iter().enumerate() {
            let index = index as LabelId;
            match (label.kind, label.literal.as_deref()) {
                (LabelKind::Nonterminal(id), _) => {
                    if self.dfa(id).is_none() {
                        return Err(GrammarError::DanglingNonterminalLabel {
                            label: index,
                            raw: id.as_u16(),
                        });
                    }
                }
                (LabelKind::Token(kind), None) => {
                    if let Some(&first) = fallbacks.get(&kind) {
                        return Err(GrammarError::DuplicateFallback {
                            kind,
                            first,
                            second: index,
                        });
                    }
                    fallbacks.insert(kind, index);
                }
                (LabelKind::Token(TokenKind::Name), Some(literal)) => {
                    if let Some(&first) = keywords.get(literal) {
                        return Err(GrammarError::DuplicateKeyword {
                            literal: literal.to_string(),
                            first,
                            second: index,
                        });
                    }
                    keywords.insert(literal, index);
                }
                (LabelKind::Token(_), Some(_)) | (LabelKind::Empty, _) => {}
            }
        }

        Ok(())
    }
}
