//! Lexical analysis for expression text
//!
//! [`tokenize`] is the single entry point used by the expression parser. The
//! grammar is an explicit priority list of sub-matchers (see [`matchers`]);
//! the [`LexicalAnalyzer`] applies them, merges compound keywords and keeps
//! per-run metrics.

pub mod analyzer;
pub mod matchers;

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::tokens::{Token, TokenStream};

pub use analyzer::{LexerErrorKind, LexicalAnalyzer, LexicalMetrics, TokenizeError};

// ============================================================================
// MODULE API
// ============================================================================

/// Tokenize an expression with default preferences
pub fn tokenize(text: &str) -> Result<TokenStream, TokenizeError> {
    LexicalAnalyzer::new().tokenize(text)
}

/// Tokenize with custom runtime preferences (limits remain compile-time)
pub fn tokenize_with_preferences(
    text: &str,
    preferences: LexicalPreferences,
) -> Result<TokenStream, TokenizeError> {
    LexicalAnalyzer::with_preferences(preferences).tokenize(text)
}

/// Create a new lexical analyzer with default preferences
pub fn create_analyzer() -> LexicalAnalyzer {
    LexicalAnalyzer::new()
}

/// Create analyzer with custom runtime preferences
pub fn create_analyzer_with_preferences(preferences: LexicalPreferences) -> LexicalAnalyzer {
    LexicalAnalyzer::with_preferences(preferences)
}

// ============================================================================
// LIMITS
// ============================================================================

/// Compile-time resource limits applied while tokenizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalLimits {
    pub max_expression_length: usize,
    pub max_token_count: usize,
    pub max_string_size: usize,
    pub max_identifier_length: usize,
}

pub fn get_lexical_limits() -> LexicalLimits {
    LexicalLimits {
        max_expression_length: MAX_EXPRESSION_LENGTH,
        max_token_count: MAX_TOKEN_COUNT,
        max_string_size: MAX_STRING_SIZE,
        max_identifier_length: MAX_IDENTIFIER_LENGTH,
    }
}

/// Check that every lexical error code is registered and the limits are usable
pub fn validate_tokenization() -> Result<(), String> {
    let lexical_codes = [
        crate::logging::codes::lexical::NO_MATCH,
        crate::logging::codes::lexical::UNTERMINATED_STRING,
        crate::logging::codes::lexical::INVALID_NUMBER,
        crate::logging::codes::lexical::IDENTIFIER_TOO_LONG,
        crate::logging::codes::lexical::STRING_TOO_LARGE,
        crate::logging::codes::lexical::UNKNOWN_SYMBOL,
        crate::logging::codes::lexical::NO_PROGRESS,
        crate::logging::codes::lexical::TOO_MANY_TOKENS,
        crate::logging::codes::lexical::EXPRESSION_TOO_LONG,
    ];

    for code in &lexical_codes {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    let limits = get_lexical_limits();
    if limits.max_token_count == 0 || limits.max_identifier_length == 0 {
        return Err("Lexical limits cannot be zero".to_string());
    }
    if limits.max_string_size > limits.max_expression_length {
        return Err("MAX_STRING_SIZE exceeds MAX_EXPRESSION_LENGTH".to_string());
    }

    Ok(())
}

// ============================================================================
// ANALYSIS HELPERS
// ============================================================================

/// Token distribution by kind
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenCounts {
    pub total: usize,
    pub numbers: usize,
    pub strings: usize,
    pub symbols: usize,
    pub names: usize,
    pub constants: usize,
}

impl TokenCounts {
    /// Tokens that carry a value directly
    pub fn literals(&self) -> usize {
        self.numbers + self.strings + self.constants
    }
}

pub fn get_token_counts(token_stream: &TokenStream) -> TokenCounts {
    let mut counts = TokenCounts::default();

    for token in token_stream {
        counts.total += 1;
        match token {
            Token::Number(_) => counts.numbers += 1,
            Token::String(_) => counts.strings += 1,
            Token::Symbol(_) => counts.symbols += 1,
            Token::Name(_) => counts.names += 1,
            Token::Constant(_) => counts.constants += 1,
        }
    }

    counts
}
