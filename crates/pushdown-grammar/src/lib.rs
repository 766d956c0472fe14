#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Grammar tables for the pushdown parser.
//!
//! A grammar is one DFA per nonterminal plus a shared label table. This
//! crate contains:
//! - Table types (`Label`, `State`, `Dfa`, `Grammar`)
//! - Acceleration: FIRST sets and dense per-state transition tables
//! - Loading from JSON and postcard, and programmatic `GrammarBuilder`
//! - A human-readable `dump` for debugging

mod accel;
mod binary;
mod builder;
mod dfa;
mod dump;
mod error;
mod grammar;
mod invariants;
mod json;
mod label;
mod state;

#[cfg(test)]
mod binary_tests;
#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod test_utils;

pub use builder::GrammarBuilder;
pub use dfa::{Dfa, FirstSet};
pub use dump::dump;
pub use error::GrammarError;
pub use grammar::Grammar;
pub use label::{EMPTY, Label, LabelId, LabelKind};
pub use state::{Arc, State, StateId, Transition};

// Re-exported so table users need only one import.
pub use pushdown_core::{Colors, NT_OFFSET, NonterminalId, TokenKind};
