//! Runtime values handed to built-in constructors by the evaluator

use crate::literal::quote_literal;
use crate::temporal::{Date, DateTime, RelativeDelta, Time};
use crate::tokens::{Constant, Token};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    None,
    Bool(bool),
    Number(f64),
    Str(String),
    Date(Date),
    DateTime(DateTime),
    Time(Time),
    RelativeDelta(RelativeDelta),
}

impl Value {
    /// Type name as the expression language spells it
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "NoneType",
            Self::Bool(_) => "bool",
            Self::Number(_) => "float",
            Self::Str(_) => "str",
            Self::Date(_) => "date",
            Self::DateTime(_) => "datetime",
            Self::Time(_) => "time",
            Self::RelativeDelta(_) => "relativedelta",
        }
    }

    /// Value of a literal token; `None` for symbols and names
    pub fn from_literal(token: &Token) -> Option<Self> {
        match token {
            Token::Number(value) => Some(Self::Number(*value)),
            Token::String(text) => Some(Self::Str(text.clone())),
            Token::Constant(constant) => Some(Self::from(*constant)),
            Token::Symbol(_) | Token::Name(_) => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Number(value) => write!(f, "{}", value),
            Self::Str(text) => f.write_str(&quote_literal(text)),
            Self::Date(date) => write!(f, "{}", date),
            Self::DateTime(datetime) => write!(f, "{}", datetime),
            Self::Time(time) => write!(f, "{}", time),
            Self::RelativeDelta(delta) => write!(f, "{}", delta),
        }
    }
}

impl From<Constant> for Value {
    fn from(constant: Constant) -> Self {
        match constant {
            Constant::None => Self::None,
            Constant::True => Self::Bool(true),
            Constant::False => Self::Bool(false),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Date> for Value {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime> for Value {
    fn from(value: DateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<Time> for Value {
    fn from(value: Time) -> Self {
        Self::Time(value)
    }
}

impl From<RelativeDelta> for Value {
    fn from(value: RelativeDelta) -> Self {
        Self::RelativeDelta(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Symbol;

    #[test]
    fn test_from_literal() {
        assert_eq!(Value::from_literal(&Token::Number(2.0)), Some(Value::Number(2.0)));
        assert_eq!(
            Value::from_literal(&Token::String("x".into())),
            Some(Value::Str("x".into()))
        );
        assert_eq!(
            Value::from_literal(&Token::Constant(Constant::True)),
            Some(Value::Bool(true))
        );
        assert!(Value::from_literal(&Token::Constant(Constant::None))
            .unwrap()
            .is_none());
        assert_eq!(Value::from_literal(&Token::Symbol(Symbol::Plus)), None);
        assert_eq!(Value::from_literal(&Token::Name("x".into())), None);
    }

    #[test]
    fn test_type_names_and_display() {
        assert_eq!(Value::from(1).type_name(), "float");
        assert_eq!(Value::from("a").type_name(), "str");
        assert_eq!(Value::from(false).to_string(), "False");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from("it's").to_string(), "'it\\'s'");

        let date = Date::new(2024, 1, 31).unwrap();
        assert_eq!(Value::from(date).type_name(), "date");
        assert_eq!(Value::from(date).to_string(), "2024-01-31");
    }

    #[test]
    fn test_serialize() {
        let date = Date::new(2024, 2, 29).unwrap();
        let json = serde_json::to_string(&Value::from(date)).unwrap();
        assert_eq!(json, r#"{"Date":"2024-02-29"}"#);
        assert_eq!(serde_json::to_string(&Value::None).unwrap(), r#""None""#);
    }
}
