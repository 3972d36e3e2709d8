//! Token types for expression text
//!
//! Five token kinds with no source positions attached. Symbols and constants
//! are closed vocabularies; everything else carries its decoded payload.

use crate::literal::quote_literal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed symbol vocabulary: keywords, operators, brackets and punctuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    // Keywords
    Lambda,
    If,
    Else,
    Or,
    And,
    Not,
    In,
    Is,

    // Compound keywords
    NotIn,
    IsNot,

    // Comparison
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    LessGreater,
    NotEqual,
    EqualEqual,

    // Bitwise and arithmetic
    Pipe,
    Caret,
    Ampersand,
    ShiftLeft,
    ShiftRight,
    Plus,
    Minus,
    Star,
    Slash,
    SlashSlash,
    Percent,
    Tilde,
    StarStar,

    // Brackets and punctuation
    Dot,
    LeftBracket,
    RightBracket,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Colon,
    Assign,
}

impl Symbol {
    pub const ALL: [Symbol; 40] = [
        Self::Lambda,
        Self::If,
        Self::Else,
        Self::Or,
        Self::And,
        Self::Not,
        Self::In,
        Self::Is,
        Self::NotIn,
        Self::IsNot,
        Self::Less,
        Self::LessEqual,
        Self::Greater,
        Self::GreaterEqual,
        Self::LessGreater,
        Self::NotEqual,
        Self::EqualEqual,
        Self::Pipe,
        Self::Caret,
        Self::Ampersand,
        Self::ShiftLeft,
        Self::ShiftRight,
        Self::Plus,
        Self::Minus,
        Self::Star,
        Self::Slash,
        Self::SlashSlash,
        Self::Percent,
        Self::Tilde,
        Self::StarStar,
        Self::Dot,
        Self::LeftBracket,
        Self::RightBracket,
        Self::LeftParen,
        Self::RightParen,
        Self::LeftBrace,
        Self::RightBrace,
        Self::Comma,
        Self::Colon,
        Self::Assign,
    ];

    /// Source spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lambda => "lambda",
            Self::If => "if",
            Self::Else => "else",
            Self::Or => "or",
            Self::And => "and",
            Self::Not => "not",
            Self::In => "in",
            Self::Is => "is",
            Self::NotIn => "not in",
            Self::IsNot => "is not",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::LessGreater => "<>",
            Self::NotEqual => "!=",
            Self::EqualEqual => "==",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Ampersand => "&",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::SlashSlash => "//",
            Self::Percent => "%",
            Self::Tilde => "~",
            Self::StarStar => "**",
            Self::Dot => ".",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Assign => "=",
        }
    }

    /// Look up a single-lexeme symbol by its spelling
    ///
    /// Compound symbols are never returned; they only arise from merging
    /// two adjacent keyword tokens.
    pub fn from_lexeme(text: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|symbol| !symbol.is_compound())
            .find(|symbol| symbol.as_str() == text)
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Self::Lambda
                | Self::If
                | Self::Else
                | Self::Or
                | Self::And
                | Self::Not
                | Self::In
                | Self::Is
                | Self::NotIn
                | Self::IsNot
        )
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Self::NotIn | Self::IsNot)
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Less
                | Self::LessEqual
                | Self::Greater
                | Self::GreaterEqual
                | Self::LessGreater
                | Self::NotEqual
                | Self::EqualEqual
                | Self::In
                | Self::NotIn
                | Self::Is
                | Self::IsNot
        )
    }

    pub fn is_bracket(&self) -> bool {
        matches!(
            self,
            Self::LeftBracket
                | Self::RightBracket
                | Self::LeftParen
                | Self::RightParen
                | Self::LeftBrace
                | Self::RightBrace
        )
    }

    /// Combine a held-back keyword with the one that follows it
    pub fn merge(first: Symbol, second: Symbol) -> Option<Symbol> {
        match (first, second) {
            (Self::Not, Self::In) => Some(Self::NotIn),
            (Self::Is, Self::Not) => Some(Self::IsNot),
            _ => None,
        }
    }

    /// Whether this symbol may be the first half of a compound
    pub fn starts_compound(&self) -> bool {
        matches!(self, Self::Not | Self::Is)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved literal names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Constant {
    None,
    True,
    False,
}

impl Constant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::True => "True",
            Self::False => "False",
        }
    }

    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "None" => Some(Self::None),
            "True" => Some(Self::True),
            "False" => Some(Self::False),
            _ => None,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexical unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    Number(f64),
    /// Decoded string content
    String(String),
    Symbol(Symbol),
    Name(String),
    Constant(Constant),
}

impl Token {
    /// Classify an identifier-shaped word
    pub fn from_word(word: &str) -> Self {
        if let Some(symbol) = Symbol::from_lexeme(word) {
            Self::Symbol(symbol)
        } else if let Some(constant) = Constant::from_word(word) {
            Self::Constant(constant)
        } else {
            Self::Name(word.to_string())
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Name(_) => "name",
            Self::Constant(_) => "constant",
        }
    }

    pub fn as_symbol(&self) -> Option<Symbol> {
        match self {
            Self::Symbol(symbol) => Some(*symbol),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        matches!(self, Self::Symbol(s) if *s == symbol)
    }

    /// Literal tokens carry a value directly: numbers, strings, constants
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Number(_) | Self::String(_) | Self::Constant(_))
    }

    /// Canonical source text; tokenizing it yields this token back
    pub fn to_source(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::String(text) => quote_literal(text),
            Self::Symbol(symbol) => symbol.as_str().to_string(),
            Self::Name(name) => name.clone(),
            Self::Constant(constant) => constant.as_str().to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_source())
    }
}

impl From<Symbol> for Token {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<Constant> for Token {
    fn from(constant: Constant) -> Self {
        Self::Constant(constant)
    }
}
