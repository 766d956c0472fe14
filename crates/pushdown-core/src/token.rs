//! Lexical vocabulary consumed from the tokenizer.
//!
//! Token kinds occupy the numbers `0..NT_OFFSET`; nonterminal symbols are
//! numbered from `NT_OFFSET` upwards so both can share one symbol space.

use std::fmt;

use serde::{Deserialize, Serialize};

/// First nonterminal symbol number.
pub const NT_OFFSET: u16 = 256;

macro_rules! token_kinds {
    ($($variant:ident => $name:literal,)*) => {
        /// Lexical kind of a token.
        ///
        /// The discriminant is the classic tokenizer number; the upper-case
        /// name is what grammar files use to refer to the kind.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum TokenKind {
            $($variant,)*
        }

        impl TokenKind {
            /// All kinds in discriminant order.
            pub const ALL: &'static [TokenKind] = &[$(TokenKind::$variant,)*];

            /// Canonical upper-case name (`NAME`, `NEWLINE`, `ENDMARKER`, ...).
            pub fn name(self) -> &'static str {
                match self {
                    $(TokenKind::$variant => $name,)*
                }
            }

            /// Look a kind up by its canonical name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(TokenKind::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

token_kinds! {
    EndMarker => "ENDMARKER",
    Name => "NAME",
    Number => "NUMBER",
    String => "STRING",
    Newline => "NEWLINE",
    Indent => "INDENT",
    Dedent => "DEDENT",
    LPar => "LPAR",
    RPar => "RPAR",
    LSqb => "LSQB",
    RSqb => "RSQB",
    Colon => "COLON",
    Comma => "COMMA",
    Semi => "SEMI",
    Plus => "PLUS",
    Minus => "MINUS",
    Star => "STAR",
    Slash => "SLASH",
    VBar => "VBAR",
    Amper => "AMPER",
    Less => "LESS",
    Greater => "GREATER",
    Equal => "EQUAL",
    Dot => "DOT",
    Percent => "PERCENT",
    LBrace => "LBRACE",
    RBrace => "RBRACE",
    EqEqual => "EQEQUAL",
    NotEqual => "NOTEQUAL",
    LessEqual => "LESSEQUAL",
    GreaterEqual => "GREATEREQUAL",
    Tilde => "TILDE",
    Circumflex => "CIRCUMFLEX",
    LeftShift => "LEFTSHIFT",
    RightShift => "RIGHTSHIFT",
    DoubleStar => "DOUBLESTAR",
    PlusEqual => "PLUSEQUAL",
    MinEqual => "MINEQUAL",
    StarEqual => "STAREQUAL",
    SlashEqual => "SLASHEQUAL",
    PercentEqual => "PERCENTEQUAL",
    AmperEqual => "AMPEREQUAL",
    VBarEqual => "VBAREQUAL",
    CircumflexEqual => "CIRCUMFLEXEQUAL",
    LeftShiftEqual => "LEFTSHIFTEQUAL",
    RightShiftEqual => "RIGHTSHIFTEQUAL",
    DoubleStarEqual => "DOUBLESTAREQUAL",
    DoubleSlash => "DOUBLESLASH",
    DoubleSlashEqual => "DOUBLESLASHEQUAL",
    At => "AT",
    AtEqual => "ATEQUAL",
    RArrow => "RARROW",
    Ellipsis => "ELLIPSIS",
    Op => "OP",
    ErrorToken => "ERRORTOKEN",
}

impl TokenKind {
    /// Tokenizer number of this kind.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// The end-of-input sentinel. Callers stop feeding when they see it.
    #[inline]
    pub fn is_end_marker(self) -> bool {
        self == TokenKind::EndMarker
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token as delivered by the tokenizer.
///
/// The column is not part of the token; the caller passes it alongside
/// when feeding the parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at line {}", self.kind, self.text, self.line)
    }
}

/// Nonterminal symbol number (`>= NT_OFFSET`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NonterminalId(u16);

impl NonterminalId {
    /// Create from a raw symbol number.
    ///
    /// Returns `None` for numbers in the token range.
    pub fn new(raw: u16) -> Option<Self> {
        (raw >= NT_OFFSET).then_some(Self(raw))
    }

    /// Id of the nonterminal at `index` in a grammar's DFA list.
    pub fn from_index(index: usize) -> Self {
        Self(NT_OFFSET + index as u16)
    }

    /// Position in a grammar's DFA list.
    ///
    /// Ids below `NT_OFFSET` (only reachable through deserialization) map
    /// past every valid position.
    #[inline]
    pub fn index(self) -> usize {
        self.0.wrapping_sub(NT_OFFSET) as usize
    }

    #[inline]
    pub fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for NonterminalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
