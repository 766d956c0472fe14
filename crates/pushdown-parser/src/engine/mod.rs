//! Parser driver.
//!
//! Tokens are classified against the grammar's label table, then walked
//! through the frame stack: shift into the current nonterminal, push into
//! a child nonterminal, or pop a finished one and retry one level up.

mod classify;
mod dump;
mod error;
mod frame;
mod parser;
mod trace;

#[cfg(test)]
mod classify_tests;
#[cfg(test)]
mod test_utils;

pub use classify::classify;
pub use dump::dump_tree;
pub use error::{IllegalReason, ParseError};
pub use parser::{Parser, ParserBuilder, parse, parse_with};
pub use trace::{NoopTracer, PopReason, PrintTracer, Tracer, Verbosity};
