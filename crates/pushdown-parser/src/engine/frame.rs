//! Stack of open nonterminals.
//!
//! Each frame is one nonterminal still being matched: which DFA, which
//! state it is in, and the tree node its children are appended to.
//! Frames are created on push, advanced on shift and dropped on pop.

use pushdown_core::{NodeId, NonterminalId};
use pushdown_grammar::StateId;

/// One open nonterminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub dfa: NonterminalId,
    pub state: StateId,
    /// Interior node receiving this nonterminal's children.
    pub node: NodeId,
}

/// Explicit replacement for the call stack of a recursive-descent parser.
///
/// Nesting depth is bounded only by memory (or by the parser's configured
/// limit), never by native stack size.
#[derive(Debug, Default)]
pub struct FrameStack {
    frames: Vec<Frame>,
}

impl FrameStack {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Copy of the innermost frame.
    #[inline]
    pub fn top(&self) -> Option<Frame> {
        self.frames.last().copied()
    }

    /// Move the innermost frame to `state`. No-op on an empty stack.
    #[inline]
    pub fn set_state(&mut self, state: StateId) {
        if let Some(top) = self.frames.last_mut() {
            top.state = state;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
