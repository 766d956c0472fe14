//! One compiled nonterminal.

use pushdown_core::NonterminalId;
use serde::{Deserialize, Serialize};

use crate::label::LabelId;
use crate::state::{State, StateId};

/// Bitset over label ids: the terminal labels a nonterminal can start with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FirstSet {
    words: Vec<u64>,
}

impl FirstSet {
    pub fn with_capacity(nlabels: usize) -> Self {
        Self {
            words: vec![0; nlabels.div_ceil(64)],
        }
    }

    pub fn insert(&mut self, label: LabelId) {
        let (word, bit) = (label as usize / 64, label as usize % 64);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1 << bit;
    }

    pub fn contains(&self, label: LabelId) -> bool {
        let (word, bit) = (label as usize / 64, label as usize % 64);
        self.words.get(word).is_some_and(|w| w & (1 << bit) != 0)
    }

    pub fn union_with(&mut self, other: &FirstSet) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a |= *b;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Member label ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = LabelId> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &w)| {
            (0..64usize)
                .filter(move |bit| w & (1 << bit) != 0)
                .map(move |bit| (i * 64 + bit) as LabelId)
        })
    }
}

/// Automaton for one nonterminal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dfa {
    pub(crate) id: NonterminalId,
    pub(crate) name: String,
    pub(crate) initial: StateId,
    pub(crate) states: Vec<State>,
    #[serde(skip)]
    pub(crate) first: FirstSet,
}

impl Dfa {
    pub fn new(id: NonterminalId, name: impl Into<String>, initial: StateId, states: Vec<State>) -> Self {
        Self {
            id,
            name: name.into(),
            initial,
            states,
            first: FirstSet::default(),
        }
    }

    #[inline]
    pub fn id(&self) -> NonterminalId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn initial(&self) -> StateId {
        self.initial
    }

    #[inline]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Look up a state.
    ///
    /// # Panics
    /// Panics if `id` is out of range; grammar validation guarantees every
    /// state id reachable through the tables is in range.
    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        self.ensure_state(id)
    }

    /// FIRST set, populated by acceleration.
    #[inline]
    pub fn first(&self) -> &FirstSet {
        &self.first
    }
}
