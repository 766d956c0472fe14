//! Tracing infrastructure for debugging the parser.
//!
//! `NoopTracer` methods are `#[inline(always)]` empty functions, so a
//! parser driven through [`Parser::feed`](super::Parser::feed) carries no
//! tracing cost. `PrintTracer` collects one formatted line per event.
//!
//! Hooks receive the raw ids the parser already has; name resolution and
//! formatting happen in the tracer.

use pushdown_core::{Colors, NonterminalId, Token};
use pushdown_grammar::{Grammar, LabelId, StateId};

use super::error::ParseError;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Default: shift, push, pop, accept. Token kinds only, no text.
    #[default]
    Default,
    /// Verbose (-v): adds classification lines and token text.
    Verbose,
    /// Very verbose (-vv): adds target states on shift and push.
    VeryVerbose,
}

/// Why a frame was popped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopReason {
    /// After a shift, the state had no continuation but to end.
    Collapse,
    /// No arc matched the pending token and the state accepts; the token
    /// is retried one level up.
    Retry,
    /// Input ended and the state accepts.
    EndOfInput,
}

impl PopReason {
    fn as_str(self) -> &'static str {
        match self {
            PopReason::Collapse => "collapse",
            PopReason::Retry => "retry",
            PopReason::EndOfInput => "end",
        }
    }
}

/// Parser instrumentation.
///
/// `depth` is the number of open frames when the event happens; for a push
/// that is the parent's depth, for a pop the depth of the frame being
/// removed.
pub trait Tracer {
    /// Called once per fed token, after it was given a label.
    fn trace_classify(&mut self, token: &Token, label: LabelId);

    /// Called after `token` was appended to the top frame, which moved to `target`.
    fn trace_shift(&mut self, token: &Token, target: StateId, depth: usize);

    /// Called after a frame for `dfa` was opened; the parent continues at `next`.
    fn trace_push(&mut self, dfa: NonterminalId, next: StateId, depth: usize);

    /// Called after the frame for `dfa` was closed.
    fn trace_pop(&mut self, dfa: NonterminalId, reason: PopReason, depth: usize);

    /// Called when the start symbol is complete.
    fn trace_accept(&mut self);

    /// Called when a feed or finish fails.
    fn trace_error(&mut self, error: &ParseError);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_classify(&mut self, _token: &Token, _label: LabelId) {}

    #[inline(always)]
    fn trace_shift(&mut self, _token: &Token, _target: StateId, _depth: usize) {}

    #[inline(always)]
    fn trace_push(&mut self, _dfa: NonterminalId, _next: StateId, _depth: usize) {}

    #[inline(always)]
    fn trace_pop(&mut self, _dfa: NonterminalId, _reason: PopReason, _depth: usize) {}

    #[inline(always)]
    fn trace_accept(&mut self) {}

    #[inline(always)]
    fn trace_error(&mut self, _error: &ParseError) {}
}

/// Tracer that collects an indented, human-readable event log.
pub struct PrintTracer<'g> {
    grammar: &'g Grammar,
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl<'g> PrintTracer<'g> {
    pub fn new(grammar: &'g Grammar, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            grammar,
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    /// Collected lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined, each terminated by a newline.
    pub fn output(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn push_line(&mut self, depth: usize, content: String) {
        let indent = "  ".repeat(depth.saturating_sub(1));
        self.lines.push(format!("{indent}{content}"));
    }

    fn format_token(&self, token: &Token) -> String {
        let c = &self.colors;
        if self.verbosity == Verbosity::Default {
            return c.meta(token.kind.name());
        }
        format!("{} {}", c.meta(token.kind.name()), c.text(&token.text))
    }

    fn symbol(&self, dfa: NonterminalId) -> String {
        self.colors.symbol(self.grammar.name_of(dfa))
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_classify(&mut self, token: &Token, label: LabelId) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        let content = format!(
            "classify {} -> {}",
            self.format_token(token),
            self.colors.meta(&format!("label {label}"))
        );
        self.lines.push(content);
    }

    fn trace_shift(&mut self, token: &Token, target: StateId, depth: usize) {
        let mut content = format!("shift {}", self.format_token(token));
        if self.verbosity == Verbosity::VeryVerbose {
            content.push_str(&format!(" -> {target}"));
        }
        self.push_line(depth, content);
    }

    fn trace_push(&mut self, dfa: NonterminalId, next: StateId, depth: usize) {
        let mut content = format!("push {}", self.symbol(dfa));
        if self.verbosity == Verbosity::VeryVerbose {
            content.push_str(&format!(" (then {next})"));
        }
        self.push_line(depth, content);
    }

    fn trace_pop(&mut self, dfa: NonterminalId, reason: PopReason, depth: usize) {
        let content = format!(
            "pop {} {}",
            self.symbol(dfa),
            self.colors.meta(&format!("({})", reason.as_str()))
        );
        self.push_line(depth, content);
    }

    fn trace_accept(&mut self) {
        self.lines.push("accept".to_string());
    }

    fn trace_error(&mut self, error: &ParseError) {
        self.lines.push(format!("error: {error}"));
    }
}
