#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the grammar tables and the parser driver.
//!
//! - **Tokens**: the lexical vocabulary consumed from an external tokenizer
//! - **CST**: the append-only concrete syntax tree produced by a parse
//! - **Colors**: ANSI palette for dumps and traces

mod colors;
mod cst;
mod invariants;
mod token;


pub use colors::Colors;
pub use cst::{Children, Cst, NodeId, NodeKind, NodeRef};
pub use token::{NT_OFFSET, NonterminalId, Token, TokenKind};
