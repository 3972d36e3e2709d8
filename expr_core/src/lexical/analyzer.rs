//! Core lexical analyzer
//!
//! Drives the ordered sub-matchers over the input, enforces the compile-time
//! resource limits, merges the compound keywords `not in` / `is not` through
//! a one-token pending buffer, and reports failures with the byte offset
//! reached and the tokens recognized before it.

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::{default_lexical_preferences, LexicalPreferences};
use crate::lexical::matchers;
use crate::literal::LiteralDecodeError;
use crate::logging::codes;
use crate::tokens::{Symbol, Token, TokenStream};
use crate::{log_debug, log_error, log_success, log_warning};
use std::collections::HashMap;

/// Why tokenizing stopped
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexerErrorKind {
    #[error("No token matches character {character:?}")]
    NoMatch { character: char },

    #[error("Unterminated string literal")]
    UnterminatedString,

    #[error("Unknown symbol '{text}'")]
    UnknownSymbol { text: String },

    #[error("Invalid number '{text}'")]
    InvalidNumber { text: String },

    #[error("Invalid string literal: {0}")]
    InvalidLiteral(#[source] LiteralDecodeError),

    #[error("Lexer made no progress")]
    NoProgress,

    #[error("Expression too long: {length} bytes (max {MAX_EXPRESSION_LENGTH})")]
    ExpressionTooLong { length: usize },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize },

    #[error("Identifier too long: {length} characters (max {MAX_IDENTIFIER_LENGTH})")]
    IdentifierTooLong { length: usize },

    #[error("String too large: {size} bytes (max {MAX_STRING_SIZE})")]
    StringTooLarge { size: usize },
}

impl LexerErrorKind {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            Self::NoMatch { .. } => codes::lexical::NO_MATCH,
            Self::UnterminatedString => codes::lexical::UNTERMINATED_STRING,
            Self::UnknownSymbol { .. } => codes::lexical::UNKNOWN_SYMBOL,
            Self::InvalidNumber { .. } => codes::lexical::INVALID_NUMBER,
            Self::InvalidLiteral(inner) => inner.error_code(),
            Self::NoProgress => codes::lexical::NO_PROGRESS,
            Self::ExpressionTooLong { .. } => codes::lexical::EXPRESSION_TOO_LONG,
            Self::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
            Self::IdentifierTooLong { .. } => codes::lexical::IDENTIFIER_TOO_LONG,
            Self::StringTooLarge { .. } => codes::lexical::STRING_TOO_LARGE,
        }
    }
}

/// Tokenizing failure: where it stopped and what had been recognized
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Failed to tokenize at offset {offset}: {kind}")]
pub struct TokenizeError {
    /// Byte offset of the lexeme that could not be tokenized
    pub offset: usize,
    /// Tokens recognized before the failure, for diagnostics only
    pub parsed: Vec<Token>,
    pub kind: LexerErrorKind,
}

impl TokenizeError {
    pub fn error_code(&self) -> crate::logging::Code {
        self.kind.error_code()
    }
}

/// Per-run token statistics
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub number_tokens: usize,
    pub string_tokens: usize,
    pub symbol_tokens: usize,
    pub name_tokens: usize,
    pub constant_tokens: usize,
    pub compound_symbols: usize,
    pub max_string_length: usize,

    // Runtime preference-controlled metrics
    pub symbol_usage_patterns: HashMap<String, usize>,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        match token {
            Token::Number(_) => self.number_tokens += 1,
            Token::String(text) => {
                self.string_tokens += 1;
                self.record_string_length(text.len(), preferences);
            }
            Token::Symbol(symbol) => {
                self.symbol_tokens += 1;
                if symbol.is_compound() {
                    self.compound_symbols += 1;
                }

                if preferences.track_symbol_patterns {
                    *self
                        .symbol_usage_patterns
                        .entry(symbol.as_str().to_string())
                        .or_insert(0) += 1;
                }
            }
            Token::Name(_) => self.name_tokens += 1,
            Token::Constant(_) => self.constant_tokens += 1,
        }
    }

    fn record_string_length(&mut self, length: usize, preferences: &LexicalPreferences) {
        self.max_string_length = self.max_string_length.max(length);

        if preferences.log_string_statistics {
            log_debug!("String literal processed",
                "length" => length,
                "max_so_far" => self.max_string_length
            );
        }
    }
}

/// Expression lexer; reusable across inputs, each run resets its state
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
    tokens: Vec<Token>,
    /// Held-back `not`/`is` that may start a compound symbol
    pending: Option<Token>,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::with_preferences(default_lexical_preferences().clone())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
            tokens: Vec::new(),
            pending: None,
        }
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Tokenize a whole expression
    pub fn tokenize(&mut self, text: &str) -> Result<TokenStream, TokenizeError> {
        self.metrics = LexicalMetrics::default();
        self.tokens = Vec::new();
        self.pending = None;

        log_debug!("Starting lexical analysis",
            "length" => text.len(),
            "max_tokens_allowed" => MAX_TOKEN_COUNT
        );

        if text.len() > MAX_EXPRESSION_LENGTH {
            return Err(self.fail(
                text,
                0,
                LexerErrorKind::ExpressionTooLong { length: text.len() },
            ));
        }

        let mut offset = 0;
        loop {
            let rest = &text[offset..];
            let trimmed = rest.trim_start();
            offset += rest.len() - trimmed.len();

            let Some(first) = trimmed.chars().next() else {
                break;
            };

            let Some((len, result)) = matchers::match_next(trimmed) else {
                return Err(self.fail(text, offset, LexerErrorKind::NoMatch { character: first }));
            };

            let token = match result.and_then(|token| self.validate(token)) {
                Ok(token) => token,
                Err(kind) => return Err(self.fail(text, offset, kind)),
            };

            // Every accepted lexeme must consume input or the loop never ends
            if len == 0 {
                return Err(self.fail(text, offset, LexerErrorKind::NoProgress));
            }

            if let Err(kind) = self.push(token) {
                return Err(self.fail(text, offset, kind));
            }
            offset += len;
        }

        if let Some(pending) = self.pending.take() {
            if let Err(kind) = self.commit(pending) {
                return Err(self.fail(text, offset, kind));
            }
        }

        let tokens = std::mem::take(&mut self.tokens);
        self.log_completion(text, &tokens);

        Ok(TokenStream::new(tokens))
    }

    /// Enforce the per-token size limits
    fn validate(&self, token: Token) -> Result<Token, LexerErrorKind> {
        match &token {
            Token::Name(name) if name.len() > MAX_IDENTIFIER_LENGTH => {
                Err(LexerErrorKind::IdentifierTooLong { length: name.len() })
            }
            Token::String(content) if content.len() > MAX_STRING_SIZE => {
                Err(LexerErrorKind::StringTooLarge {
                    size: content.len(),
                })
            }
            _ => Ok(token),
        }
    }

    /// Route a token through the pending buffer
    fn push(&mut self, token: Token) -> Result<(), LexerErrorKind> {
        if let Some(pending) = self.pending.take() {
            let compound = match (pending.as_symbol(), token.as_symbol()) {
                (Some(first), Some(second)) => Symbol::merge(first, second),
                _ => None,
            };

            if let Some(compound) = compound {
                return self.commit(Token::Symbol(compound));
            }
            self.commit(pending)?;
        }

        if token.as_symbol().is_some_and(|symbol| symbol.starts_compound()) {
            self.pending = Some(token);
            Ok(())
        } else {
            self.commit(token)
        }
    }

    fn commit(&mut self, token: Token) -> Result<(), LexerErrorKind> {
        if self.tokens.len() >= MAX_TOKEN_COUNT {
            return Err(LexerErrorKind::TooManyTokens {
                count: self.tokens.len() + 1,
            });
        }

        self.metrics.record_token(&token, &self.preferences);
        self.tokens.push(token);
        Ok(())
    }

    /// Build the error, handing over everything recognized so far
    fn fail(&mut self, text: &str, offset: usize, kind: LexerErrorKind) -> TokenizeError {
        let mut parsed = std::mem::take(&mut self.tokens);
        parsed.extend(self.pending.take());

        let code = kind.error_code();
        let message = kind.to_string();
        let lexeme: String = text[offset..].chars().take(16).collect();

        if self.preferences.include_position_in_errors {
            log_error!(code, &message, offset = offset,
                "lexeme" => lexeme.as_str(),
                "tokens_parsed" => parsed.len()
            );
        } else {
            log_error!(code, &message,
                "lexeme" => lexeme.as_str(),
                "tokens_parsed" => parsed.len()
            );
        }

        TokenizeError {
            offset,
            parsed,
            kind,
        }
    }

    fn log_completion(&self, text: &str, tokens: &[Token]) {
        if near_limit(tokens.len(), MAX_TOKEN_COUNT) || near_limit(text.len(), MAX_EXPRESSION_LENGTH) {
            log_warning!("Expression is close to the lexical limits",
                "length" => text.len(),
                "max_length" => MAX_EXPRESSION_LENGTH,
                "total_tokens" => tokens.len(),
                "max_tokens" => MAX_TOKEN_COUNT
            );
        }

        if self.preferences.collect_detailed_metrics {
            log_success!(
                codes::success::TOKENIZATION_COMPLETE,
                "Tokenization completed",
                "length" => text.len(),
                "total_tokens" => tokens.len(),
                "numbers" => self.metrics.number_tokens,
                "strings" => self.metrics.string_tokens,
                "symbols" => self.metrics.symbol_tokens,
                "names" => self.metrics.name_tokens,
                "constants" => self.metrics.constant_tokens,
                "compound_symbols" => self.metrics.compound_symbols,
                "max_string_length" => self.metrics.max_string_length
            );
        } else {
            log_success!(
                codes::success::TOKENIZATION_COMPLETE,
                "Tokenization completed",
                "total_tokens" => tokens.len()
            );
        }
    }
}

/// At or past `LIMIT_WARNING_PERCENT` of `limit`
fn near_limit(used: usize, limit: usize) -> bool {
    used.saturating_mul(100) >= limit.saturating_mul(LIMIT_WARNING_PERCENT)
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
