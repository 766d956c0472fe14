//! Acceleration: turn raw arc lists into dense per-state lookup tables.
//!
//! Runs once, at load time. Two passes:
//! 1. FIRST sets for every DFA (terminal labels a nonterminal can begin with)
//! 2. For every state, a table indexed by `label - lower`: terminal arcs
//!    become shifts, a nonterminal arc becomes a push on every label of that
//!    nonterminal's FIRST set, and the `EMPTY` arc marks the state accepting.

use pushdown_core::NonterminalId;

use crate::dfa::{Dfa, FirstSet};
use crate::error::GrammarError;
use crate::grammar::Grammar;
use crate::label::{LabelId, LabelKind};
use crate::state::{Accel, Transition};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Pending,
    InProgress,
    Done,
}

impl Grammar {
    /// Build the dense transition tables. Idempotent.
    ///
    /// Validates first, so tables that bypassed the constructors (a direct
    /// deserialization, say) fail with an error instead of a panic. On error
    /// the grammar is left unaccelerated and unchanged.
    pub fn accelerate(&mut self) -> Result<(), GrammarError> {
        if self.accelerated {
            return Ok(());
        }
        self.validate()?;

        let firsts = self.first_sets()?;
        let mut accels = Vec::with_capacity(self.dfas.len());
        for dfa in &self.dfas {
            let per_state = dfa
                .states
                .iter()
                .enumerate()
                .map(|(index, _)| self.accelerate_state(dfa, index as u16, &firsts))
                .collect::<Result<Vec<_>, _>>()?;
            accels.push(per_state);
        }

        for ((dfa, first), per_state) in self.dfas.iter_mut().zip(firsts).zip(accels) {
            dfa.first = first;
            for (state, accel) in dfa.states.iter_mut().zip(per_state) {
                state.accel = accel;
            }
        }
        self.accelerated = true;
        Ok(())
    }

    fn accelerate_state(
        &self,
        dfa: &Dfa,
        state_id: u16,
        firsts: &[FirstSet],
    ) -> Result<Accel, GrammarError> {
        let state = &dfa.states[state_id as usize];
        let mut table: Vec<Option<Transition>> = vec![None; self.labels.len()];
        let mut accept = false;

        let mut set = |label: LabelId, transition: Transition| {
            if let Some(existing) = table[label as usize]
                && existing != transition
            {
                return Err(GrammarError::Ambiguous {
                    dfa: dfa.name.clone(),
                    state: state_id,
                    label,
                });
            }
            table[label as usize] = Some(transition);
            Ok(())
        };

        for arc in state.arcs() {
            match self.labels[arc.label as usize].kind {
                LabelKind::Empty => accept = true,
                LabelKind::Token(_) => set(arc.label, Transition::Shift(arc.target))?,
                LabelKind::Nonterminal(nt) => {
                    let push = Transition::Push {
                        dfa: nt,
                        next: arc.target,
                    };
                    for label in firsts[nt.index()].iter() {
                        set(label, push)?;
                    }
                }
            }
        }

        let lower = table.iter().position(Option::is_some);
        let upper = table.iter().rposition(Option::is_some).map(|i| i + 1);
        let (lower, upper) = match (lower, upper) {
            (Some(lower), Some(upper)) => (lower, upper),
            _ => (0, 0),
        };

        Ok(Accel {
            accept,
            lower: lower as LabelId,
            upper: upper as LabelId,
            table: table[lower..upper].into(),
        })
    }

    fn first_sets(&self) -> Result<Vec<FirstSet>, GrammarError> {
        let mut firsts = vec![FirstSet::with_capacity(self.labels.len()); self.dfas.len()];
        let mut visits = vec![Visit::Pending; self.dfas.len()];
        for index in 0..self.dfas.len() {
            self.compute_first(NonterminalId::from_index(index), &mut firsts, &mut visits)?;
        }
        Ok(firsts)
    }

    /// FIRST of one DFA: the terminal labels on its initial state's arcs,
    /// plus the FIRST sets of nonterminals on those arcs.
    fn compute_first(
        &self,
        id: NonterminalId,
        firsts: &mut [FirstSet],
        visits: &mut [Visit],
    ) -> Result<(), GrammarError> {
        let index = id.index();
        match visits[index] {
            Visit::Done => return Ok(()),
            Visit::InProgress => {
                return Err(GrammarError::LeftRecursion(self.dfas[index].name.clone()));
            }
            Visit::Pending => visits[index] = Visit::InProgress,
        }

        let dfa = &self.dfas[index];
        let mut first = FirstSet::with_capacity(self.labels.len());
        for arc in dfa.states[dfa.initial as usize].arcs() {
            match self.labels[arc.label as usize].kind {
                LabelKind::Empty => {}
                LabelKind::Token(_) => first.insert(arc.label),
                LabelKind::Nonterminal(nt) => {
                    self.compute_first(nt, firsts, visits)?;
                    first.union_with(&firsts[nt.index()]);
                }
            }
        }

        firsts[index] = first;
        visits[index] = Visit::Done;
        Ok(())
    }
}
