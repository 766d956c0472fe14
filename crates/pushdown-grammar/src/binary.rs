//! Binary serialization for grammars using postcard.
//!
//! Only the raw tables are stored; acceleration is recomputed on load.

use crate::error::GrammarError;
use crate::grammar::Grammar;

impl Grammar {
    /// Deserialize, validate and accelerate a grammar from binary format.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, GrammarError> {
        let mut grammar: Grammar = postcard::from_bytes(bytes)?;
        grammar.accelerated = false;
        grammar.validate()?;
        grammar.accelerate()?;
        Ok(grammar)
    }

    /// Serialize the raw tables to binary format.
    pub fn to_binary(&self) -> Vec<u8> {
        postcard::to_allocvec(self).expect("serialization should not fail")
    }
}
