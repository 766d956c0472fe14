//! ANSI color codes for terminal output.
//!
//! Four semantic colors with orthogonal dim modifier:
//! - Blue: nonterminal names
//! - Green: token text
//! - Dim: token kinds, state numbers, arcs
//! - Reset: Return to default

/// ANSI color palette for tree dumps, grammar dumps and parser traces.
///
/// Uses only standard 16-color ANSI codes (no RGB).
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }

    /// Wrap a nonterminal name.
    pub fn symbol(&self, name: &str) -> String {
        format!("{}{}{}", self.blue, name, self.reset)
    }

    /// Wrap quoted token text.
    pub fn text(&self, text: &str) -> String {
        format!("{}{:?}{}", self.green, text, self.reset)
    }

    /// Wrap structural metadata (kinds, state numbers).
    pub fn meta(&self, meta: &str) -> String {
        format!("{}{}{}", self.dim, meta, self.reset)
    }
}
