//! DFA states: raw arcs plus the dense table built by acceleration.

use pushdown_core::NonterminalId;
use serde::{Deserialize, Serialize};

use crate::label::LabelId;

/// Index of a state within its DFA.
pub type StateId = u16;

/// Raw transition as written in the grammar: on `label`, go to `target`.
///
/// A nonterminal label means "match that whole nonterminal, then continue
/// at `target`".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arc {
    pub label: LabelId,
    pub target: StateId,
}

impl Arc {
    pub fn new(label: LabelId, target: StateId) -> Self {
        Self { label, target }
    }
}

/// Accelerated transition for a terminal label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Consume the token and move to a state of the same DFA.
    Shift(StateId),
    /// Descend into `dfa` without consuming the token. The enclosing DFA
    /// continues at `next` once the nonterminal is complete.
    Push { dfa: NonterminalId, next: StateId },
}

/// Dense lookup table over label ids `lower..upper`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Accel {
    pub(crate) accept: bool,
    pub(crate) lower: LabelId,
    pub(crate) upper: LabelId,
    pub(crate) table: Box<[Option<Transition>]>,
}

/// One DFA state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    arcs: Vec<Arc>,
    #[serde(skip)]
    pub(crate) accel: Accel,
}

impl State {
    pub fn new(arcs: Vec<Arc>) -> Self {
        Self {
            arcs,
            accel: Accel::default(),
        }
    }

    /// Raw arcs in definition order.
    #[inline]
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Number of raw arcs, the accept marker arc included.
    #[inline]
    pub fn narcs(&self) -> usize {
        self.arcs.len()
    }

    /// Whether the nonterminal may end in this state.
    ///
    /// Only meaningful once the owning grammar is accelerated.
    #[inline]
    pub fn accept(&self) -> bool {
        self.accel.accept
    }

    /// Accepting with nothing else to do: the only arc is the accept marker.
    #[inline]
    pub fn is_accept_only(&self) -> bool {
        self.accel.accept && self.narcs() == 1
    }

    /// First label id covered by the dense table.
    #[inline]
    pub fn lower(&self) -> LabelId {
        self.accel.lower
    }

    /// One past the last label id covered by the dense table.
    #[inline]
    pub fn upper(&self) -> LabelId {
        self.accel.upper
    }

    /// O(1) transition lookup for a terminal label.
    ///
    /// Labels outside `lower..upper` have no transition.
    #[inline]
    pub fn transition(&self, label: LabelId) -> Option<Transition> {
        if label < self.accel.lower || label >= self.accel.upper {
            return None;
        }
        self.accel.table[(label - self.accel.lower) as usize]
    }

    /// Populated entries of the dense table, in label order.
    pub fn transitions(&self) -> impl Iterator<Item = (LabelId, Transition)> + '_ {
        self.accel
            .table
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.map(|t| (self.accel.lower + i as LabelId, t)))
    }
}
