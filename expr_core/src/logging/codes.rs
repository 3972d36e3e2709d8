//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and classification functions.
//! This module combines code constants with their behavioral metadata in one place.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const NO_MATCH: Code = Code::new("E020");
    pub const UNTERMINATED_STRING: Code = Code::new("E021");
    pub const INVALID_NUMBER: Code = Code::new("E022");
    pub const IDENTIFIER_TOO_LONG: Code = Code::new("E023");
    pub const STRING_TOO_LARGE: Code = Code::new("E024");
    pub const UNKNOWN_SYMBOL: Code = Code::new("E025");
    pub const NO_PROGRESS: Code = Code::new("E026");
    pub const TOO_MANY_TOKENS: Code = Code::new("E027");
    pub const EXPRESSION_TOO_LONG: Code = Code::new("E028");
}

/// String literal decoding error codes
pub mod literal {
    use super::Code;

    pub const TRUNCATED_ESCAPE: Code = Code::new("E030");
    pub const INVALID_ESCAPE: Code = Code::new("E031");
    pub const INVALID_CODE_POINT: Code = Code::new("E032");
    pub const UNSUPPORTED_ESCAPE: Code = Code::new("E033");
}

/// Constructor argument binding error codes
pub mod arguments {
    use super::Code;

    pub const TOO_MANY_POSITIONAL: Code = Code::new("E040");
    pub const UNEXPECTED_ARGUMENT: Code = Code::new("E041");
    pub const INVALID_ARGUMENT_TYPE: Code = Code::new("E042");
}

/// Temporal value error codes
pub mod temporal {
    use super::Code;

    pub const INVALID_DATE: Code = Code::new("E050");
    pub const INVALID_TIME: Code = Code::new("E051");
    pub const OUT_OF_RANGE: Code = Code::new("E052");
    pub const UNKNOWN_DIRECTIVE: Code = Code::new("E053");
    pub const UNSUPPORTED_ARGUMENT: Code = Code::new("E054");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

/// Initialize and get the error registry
fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            // System errors
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                "Critical internal error",
                "File a bug report with the failing expression",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                "Logging or configuration initialization failure",
                "Check EXPR_* environment variables and configuration files",
            ),
            // Lexical errors
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::High,
                false,
                "No lexical rule matches the input at this position",
                "Remove or quote the unexpected character",
            ),
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::High,
                false,
                "String literal is not terminated on the same line",
                "Add the closing quote or escape the newline",
            ),
            ErrorMetadata::new(
                "E022",
                "Lexical",
                Severity::High,
                false,
                "Number literal does not denote a finite value",
                "Use a smaller numeric literal",
            ),
            ErrorMetadata::new(
                "E023",
                "Lexical",
                Severity::Medium,
                false,
                "Identifier exceeds the maximum length",
                "Shorten the identifier",
            ),
            ErrorMetadata::new(
                "E024",
                "Lexical",
                Severity::Medium,
                false,
                "Decoded string literal exceeds the maximum size",
                "Split the literal or move the data out of the expression",
            ),
            ErrorMetadata::new(
                "E025",
                "Lexical",
                Severity::High,
                false,
                "Operator is not part of the expression language",
                "Replace the operator with a supported one",
            ),
            ErrorMetadata::new(
                "E026",
                "Lexical",
                Severity::Critical,
                false,
                "Lexer matched an empty token and could not advance",
                "File a bug report with the failing expression",
            ),
            ErrorMetadata::new(
                "E027",
                "Lexical",
                Severity::Medium,
                false,
                "Expression produces too many tokens",
                "Simplify the expression",
            ),
            ErrorMetadata::new(
                "E028",
                "Lexical",
                Severity::Medium,
                false,
                "Expression text exceeds the maximum length",
                "Simplify the expression",
            ),
            // Literal errors
            ErrorMetadata::new(
                "E030",
                "Literal",
                Severity::High,
                false,
                "Escape sequence has too few hexadecimal digits",
                "Write exactly two (\\x) or four (\\u) hex digits",
            ),
            ErrorMetadata::new(
                "E031",
                "Literal",
                Severity::High,
                false,
                "Invalid \\x escape in a byte string literal",
                "Write exactly two hex digits after \\x",
            ),
            ErrorMetadata::new(
                "E032",
                "Literal",
                Severity::High,
                false,
                "Escape sequence names a surrogate code point",
                "Use a code point outside U+D800..U+DFFF",
            ),
            ErrorMetadata::new(
                "E033",
                "Literal",
                Severity::High,
                false,
                "Escape sequence is not supported (\\U, \\N{...})",
                "Write the character directly or use \\u",
            ),
            // Argument errors
            ErrorMetadata::new(
                "E040",
                "Arguments",
                Severity::High,
                false,
                "More positional arguments than the constructor accepts",
                "Remove the extra arguments",
            ),
            ErrorMetadata::new(
                "E041",
                "Arguments",
                Severity::High,
                false,
                "Named argument is not accepted by the constructor",
                "Check the argument name",
            ),
            ErrorMetadata::new(
                "E042",
                "Arguments",
                Severity::High,
                false,
                "Argument has the wrong type",
                "Pass an integer value",
            ),
            // Temporal errors
            ErrorMetadata::new(
                "E050",
                "Temporal",
                Severity::High,
                false,
                "Year, month and day do not form a calendar date",
                "Check the month length and leap year",
            ),
            ErrorMetadata::new(
                "E051",
                "Temporal",
                Severity::High,
                false,
                "Hour, minute and second do not form a time of day",
                "Use hour 0-23, minute 0-59, second 0-59",
            ),
            ErrorMetadata::new(
                "E052",
                "Temporal",
                Severity::High,
                false,
                "Temporal value or offset is outside the supported range",
                "Keep years between 0 and 9999",
            ),
            ErrorMetadata::new(
                "E053",
                "Temporal",
                Severity::Medium,
                false,
                "Format directive has no known conversion",
                "Use %Y, %m, %d and, for date-times and times, %H, %M, %S",
            ),
            ErrorMetadata::new(
                "E054",
                "Temporal",
                Severity::High,
                false,
                "Argument is recognized but not implemented",
                "Remove the argument (relativedelta weekday is not implemented)",
            ),
        ];

        entries.into_iter().map(|meta| (meta.code, meta)).collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific error code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get error severity from error code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for error code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for error code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get error category from error code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_code_is_registered() {
        let codes = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            lexical::NO_MATCH,
            lexical::UNTERMINATED_STRING,
            lexical::INVALID_NUMBER,
            lexical::IDENTIFIER_TOO_LONG,
            lexical::STRING_TOO_LARGE,
            lexical::UNKNOWN_SYMBOL,
            lexical::NO_PROGRESS,
            lexical::TOO_MANY_TOKENS,
            lexical::EXPRESSION_TOO_LONG,
            literal::TRUNCATED_ESCAPE,
            literal::INVALID_ESCAPE,
            literal::INVALID_CODE_POINT,
            literal::UNSUPPORTED_ESCAPE,
            arguments::TOO_MANY_POSITIONAL,
            arguments::UNEXPECTED_ARGUMENT,
            arguments::INVALID_ARGUMENT_TYPE,
            temporal::INVALID_DATE,
            temporal::INVALID_TIME,
            temporal::OUT_OF_RANGE,
            temporal::UNKNOWN_DIRECTIVE,
            temporal::UNSUPPORTED_ARGUMENT,
        ];

        for code in codes {
            assert!(
                get_error_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
        }
    }

    #[test]
    fn test_unknown_code_fallbacks() {
        assert_eq!(get_description("Z999"), "Unknown error");
        assert_eq!(get_category("Z999"), "Unknown");
        assert_eq!(get_severity("Z999"), Severity::Medium);
        assert!(is_recoverable("Z999"));
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(get_category("E033"), "Literal");
        assert_eq!(get_category("E053"), "Temporal");
        assert_eq!(get_severity("E026"), Severity::Critical);
    }
}
