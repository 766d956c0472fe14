//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::dfa::Dfa;
use crate::state::{State, StateId};

impl Dfa {
    pub(crate) fn ensure_state(&self, id: StateId) -> &State {
        self.states.get(id as usize).unwrap_or_else(|| {
            panic!(
                "Dfa `{}`: state {id} not found ({} states; \
                 Grammar::validate must reject out-of-range targets)",
                self.name,
                self.states.len()
            )
        })
    }
}
