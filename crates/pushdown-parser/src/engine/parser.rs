//! The frame-stack driver.

use pushdown_core::{Cst, NonterminalId, Token, TokenKind};
use pushdown_grammar::{Dfa, Grammar, Transition};

use super::classify::classify;
use super::error::{IllegalReason, ParseError};
use super::frame::{Frame, FrameStack};
use super::trace::{NoopTracer, PopReason, Tracer};

#[derive(Clone, Debug)]
enum StartSymbol {
    Id(NonterminalId),
    Name(String),
}

/// Builder for [`Parser`] instances.
pub struct ParserBuilder<'g> {
    grammar: &'g Grammar,
    start: Option<StartSymbol>,
    max_depth: Option<usize>,
}

impl<'g> ParserBuilder<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            start: None,
            max_depth: None,
        }
    }

    /// Parse a different nonterminal than the grammar's start symbol.
    pub fn start(mut self, id: NonterminalId) -> Self {
        self.start = Some(StartSymbol::Id(id));
        self
    }

    /// Like [`start`](Self::start), by nonterminal name.
    pub fn start_name(mut self, name: impl Into<String>) -> Self {
        self.start = Some(StartSymbol::Name(name.into()));
        self
    }

    /// Limit the number of simultaneously open nonterminals (default: unbounded).
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn build(self) -> Result<Parser<'g>, ParseError> {
        let grammar = self.grammar;
        if !grammar.is_accelerated() {
            return Err(ParseError::GrammarNotAccelerated);
        }

        let dfa = match &self.start {
            None => grammar.dfa(grammar.start()),
            Some(StartSymbol::Id(id)) => grammar.dfa(*id),
            Some(StartSymbol::Name(name)) => grammar.dfa_by_name(name),
        };
        let dfa = dfa.ok_or_else(|| {
            ParseError::UnknownStart(match self.start {
                Some(StartSymbol::Name(name)) => name,
                Some(StartSymbol::Id(id)) => id.to_string(),
                None => grammar.start().to_string(),
            })
        })?;

        // The root carries no source position: no token has been seen yet.
        let tree = Cst::new(dfa.id(), 0, 0);
        let mut frames = FrameStack::new();
        frames.push(Frame {
            dfa: dfa.id(),
            state: dfa.initial(),
            node: tree.root_id(),
        });

        Ok(Parser {
            grammar,
            frames,
            tree,
            max_depth: self.max_depth,
            poisoned: false,
        })
    }
}

/// Incremental parser for one input.
///
/// Holds its own frame stack and tree; the grammar is only borrowed, so
/// any number of parsers can run against one grammar, on any threads.
#[derive(Debug)]
pub struct Parser<'g> {
    grammar: &'g Grammar,
    frames: FrameStack,
    tree: Cst,
    max_depth: Option<usize>,
    /// Set by the first error; the parser refuses all work afterwards.
    poisoned: bool,
}

impl<'g> Parser<'g> {
    pub fn builder(grammar: &'g Grammar) -> ParserBuilder<'g> {
        ParserBuilder::new(grammar)
    }

    /// Parser for the grammar's start symbol.
    pub fn new(grammar: &'g Grammar) -> Result<Self, ParseError> {
        ParserBuilder::new(grammar).build()
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// True once the start symbol is complete.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.frames.is_empty() && !self.poisoned
    }

    #[inline]
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Number of open nonterminals.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The finished tree, `None` while input is still expected or after an error.
    pub fn tree(&self) -> Option<&Cst> {
        self.is_done().then_some(&self.tree)
    }

    /// Take the finished tree.
    pub fn into_tree(self) -> Result<Cst, ParseError> {
        if self.poisoned {
            return Err(ParseError::Poisoned);
        }
        if let Some(top) = self.frames.top() {
            return Err(ParseError::UnexpectedEndOfInput {
                open: self.grammar.name_of(top.dfa).to_string(),
            });
        }
        Ok(self.tree)
    }

    /// Feed one token, `col` being its column in the source.
    ///
    /// Uses `NoopTracer`, which compiles away entirely.
    pub fn feed(&mut self, token: &Token, col: u32) -> Result<(), ParseError> {
        self.feed_with(token, col, &mut NoopTracer)
    }

    /// Feed one token with a tracer.
    ///
    /// Returns once the token is consumed. On error the parser is poisoned.
    pub fn feed_with<T: Tracer>(
        &mut self,
        token: &Token,
        col: u32,
        tracer: &mut T,
    ) -> Result<(), ParseError> {
        self.ensure_running()?;
        let result = self.step(token, col, tracer);
        if let Err(error) = &result {
            self.poisoned = true;
            tracer.trace_error(error);
        }
        result
    }

    /// Signal end of input and take the tree.
    ///
    /// Open nonterminals whose current state accepts are closed; if one
    /// does not, the input ended too early.
    pub fn finish(self) -> Result<Cst, ParseError> {
        self.finish_with(&mut NoopTracer)
    }

    pub fn finish_with<T: Tracer>(mut self, tracer: &mut T) -> Result<Cst, ParseError> {
        if self.poisoned {
            return Err(ParseError::Poisoned);
        }
        if self.frames.is_empty() {
            return Ok(self.tree);
        }

        while let Some(top) = self.frames.top() {
            let dfa = self.dfa(top.dfa)?;
            if !dfa.state(top.state).accept() {
                let error = ParseError::UnexpectedEndOfInput {
                    open: dfa.name().to_string(),
                };
                tracer.trace_error(&error);
                return Err(error);
            }
            tracer.trace_pop(top.dfa, PopReason::EndOfInput, self.frames.len());
            self.frames.pop();
        }

        tracer.trace_accept();
        Ok(self.tree)
    }

    fn ensure_running(&self) -> Result<(), ParseError> {
        if self.poisoned {
            return Err(ParseError::Poisoned);
        }
        if self.frames.is_empty() {
            return Err(ParseError::AlreadyComplete);
        }
        Ok(())
    }

    fn dfa(&self, id: NonterminalId) -> Result<&'g Dfa, ParseError> {
        self.grammar
            .dfa(id)
            .ok_or(ParseError::UnknownNonterminal(id))
    }

    fn step<T: Tracer>(&mut self, token: &Token, col: u32, tracer: &mut T) -> Result<(), ParseError> {
        let illegal = |reason| ParseError::IllegalToken {
            token: token.clone(),
            col,
            reason,
        };

        let label = classify(self.grammar, token).ok_or_else(|| illegal(IllegalReason::Unclassified))?;
        tracer.trace_classify(token, label);

        loop {
            let Some(top) = self.frames.top() else {
                return Err(ParseError::StackUnderflow {
                    token: token.clone(),
                    col,
                });
            };
            let state = self.dfa(top.dfa)?.state(top.state);

            match state.transition(label) {
                Some(Transition::Push { dfa, next }) => {
                    let child = self.dfa(dfa)?;
                    if let Some(max) = self.max_depth
                        && self.frames.len() >= max
                    {
                        return Err(ParseError::DepthLimitExceeded(max));
                    }
                    let node = self.tree.push_interior(top.node, dfa, token.line, col);
                    self.frames.set_state(next);
                    self.frames.push(Frame {
                        dfa,
                        state: child.initial(),
                        node,
                    });
                    tracer.trace_push(dfa, next, self.frames.len() - 1);
                    // Same label, new frame.
                }
                Some(Transition::Shift(target)) => {
                    self.tree
                        .push_leaf(top.node, token.kind, token.text.as_str(), token.line, col);
                    self.frames.set_state(target);
                    tracer.trace_shift(token, target, self.frames.len());
                    return self.collapse(tracer);
                }
                None if state.accept() => {
                    tracer.trace_pop(top.dfa, PopReason::Retry, self.frames.len());
                    self.frames.pop();
                    if self.frames.is_empty() {
                        return Err(ParseError::StackUnderflow {
                            token: token.clone(),
                            col,
                        });
                    }
                }
                None => return Err(illegal(IllegalReason::Rejected)),
            }
        }
    }

    /// Close every finished nonterminal on top of the stack.
    fn collapse<T: Tracer>(&mut self, tracer: &mut T) -> Result<(), ParseError> {
        while let Some(top) = self.frames.top() {
            if !self.dfa(top.dfa)?.state(top.state).is_accept_only() {
                return Ok(());
            }
            tracer.trace_pop(top.dfa, PopReason::Collapse, self.frames.len());
            self.frames.pop();
        }
        tracer.trace_accept();
        Ok(())
    }
}

/// Parse a whole token stream against the grammar's start symbol.
///
/// Stops at the first `ENDMARKER` (which is not fed), then finishes.
/// Columns are the token's position within its line, counting from 0 and
/// restarting after every `NEWLINE`.
pub fn parse<I>(grammar: &Grammar, tokens: I) -> Result<Cst, ParseError>
where
    I: IntoIterator<Item = Token>,
{
    parse_with(grammar, tokens, &mut NoopTracer)
}

pub fn parse_with<I, T>(grammar: &Grammar, tokens: I, tracer: &mut T) -> Result<Cst, ParseError>
where
    I: IntoIterator<Item = Token>,
    T: Tracer,
{
    let mut parser = Parser::new(grammar)?;
    let mut col = 0;
    for token in tokens {
        if token.kind.is_end_marker() {
            break;
        }
        parser.feed_with(&token, col, tracer)?;
        col = if token.kind == TokenKind::Newline { 0 } else { col + 1 };
    }
    parser.finish_with(tracer)
}
