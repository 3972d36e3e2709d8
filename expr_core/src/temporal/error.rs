//! Temporal value errors

use crate::args::ArgumentError;
use crate::logging::codes;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TemporalError {
    #[error("Invalid date: year {year}, month {month}, day {day}")]
    InvalidDate { year: i64, month: i64, day: i64 },

    #[error("Invalid time: {hour}:{minute}:{second}")]
    InvalidTime { hour: i64, minute: i64, second: i64 },

    #[error("{field} is out of range")]
    OutOfRange { field: &'static str },

    #[error("No known conversion for %{directive}")]
    FormatDirective { directive: char },

    #[error("Argument '{name}' is not supported")]
    UnsupportedArgument { name: String },

    #[error("Unexpected argument '{name}'")]
    UnexpectedArgument { name: String },

    #[error("Argument '{name}' must be {expected}, not {found}")]
    InvalidArgumentType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Argument '{name}' must be an integer")]
    NotIntegral { name: String },

    #[error(transparent)]
    Binding(#[from] ArgumentError),
}

impl TemporalError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            Self::InvalidDate { .. } => codes::temporal::INVALID_DATE,
            Self::InvalidTime { .. } => codes::temporal::INVALID_TIME,
            Self::OutOfRange { .. } => codes::temporal::OUT_OF_RANGE,
            Self::FormatDirective { .. } => codes::temporal::UNKNOWN_DIRECTIVE,
            Self::UnsupportedArgument { .. } => codes::temporal::UNSUPPORTED_ARGUMENT,
            Self::UnexpectedArgument { .. } => codes::arguments::UNEXPECTED_ARGUMENT,
            Self::InvalidArgumentType { .. } | Self::NotIntegral { .. } => {
                codes::arguments::INVALID_ARGUMENT_TYPE
            }
            Self::Binding(inner) => inner.error_code(),
        }
    }
}
