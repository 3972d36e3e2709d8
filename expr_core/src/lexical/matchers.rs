//! Ordered sub-matchers for the expression grammar
//!
//! Each matcher looks at the start of the remaining input (whitespace already
//! skipped) and either declines or reports how many bytes it recognized along
//! with the token those bytes produce. A matcher that recognized the shape of
//! its lexeme but could not turn it into a token reports the error instead, so
//! later matchers never see that input.

use crate::lexical::analyzer::LexerErrorKind;
use crate::literal::{decode_literal, LiteralMode};
use crate::tokens::{Symbol, Token};

/// Matched byte length and the resulting token
pub type SubMatch = Option<(usize, Result<Token, LexerErrorKind>)>;

pub type Matcher = fn(&str) -> SubMatch;

/// Priority order: a number is tried before a name so `1abc` splits as
/// `1` `abc`, and a string before a name so `u'x'` is a text literal
pub const MATCHERS: [Matcher; 4] = [match_number, match_symbol, match_string, match_name];

/// Run the matchers in priority order and return the first that accepts
pub fn match_next(input: &str) -> SubMatch {
    MATCHERS.iter().find_map(|matcher| matcher(input))
}

const MULTI_CHAR_OPERATORS: [&str; 10] =
    ["**=", "**", ">>=", ">>", "<<=", "<<", "<>", "!=", "//=", "//"];

/// Operators that may be followed by `=`
const AUGMENTABLE_OPERATORS: &str = "+-*/%&|^=<>";

const SINGLE_CHAR_SYMBOLS: &str = "~[](){}:;.,`@";

fn digit_run(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}

/// `\d+\.\d*` | `\.\d+` | `\d+[lL]?`
pub fn match_number(input: &str) -> SubMatch {
    let bytes = input.as_bytes();
    let integer_len = digit_run(bytes, 0);

    let len = if integer_len > 0 {
        match bytes.get(integer_len) {
            Some(b'.') => integer_len + 1 + digit_run(bytes, integer_len + 1),
            Some(b'l' | b'L') => integer_len + 1,
            _ => integer_len,
        }
    } else if bytes.first() == Some(&b'.') {
        let fraction_len = digit_run(bytes, 1);
        if fraction_len == 0 {
            return None;
        }
        1 + fraction_len
    } else {
        return None;
    };

    let text = &input[..len];
    let digits = text.trim_end_matches(['l', 'L']);
    let result = match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Token::Number(value)),
        _ => Err(LexerErrorKind::InvalidNumber {
            text: text.to_string(),
        }),
    };

    Some((len, result))
}

/// Operators, brackets and punctuation; operator-shaped text outside the
/// symbol vocabulary is reported rather than skipped
pub fn match_symbol(input: &str) -> SubMatch {
    let len = if let Some(operator) = MULTI_CHAR_OPERATORS
        .iter()
        .find(|operator| input.starts_with(**operator))
    {
        operator.len()
    } else {
        let first = input.chars().next()?;
        if AUGMENTABLE_OPERATORS.contains(first) {
            if input[1..].starts_with('=') {
                2
            } else {
                1
            }
        } else if SINGLE_CHAR_SYMBOLS.contains(first) {
            1
        } else {
            return None;
        }
    };

    let text = &input[..len];
    let result = Symbol::from_lexeme(text)
        .map(Token::Symbol)
        .ok_or_else(|| LexerErrorKind::UnknownSymbol {
            text: text.to_string(),
        });

    Some((len, result))
}

/// Optional `u`/`U` prefix, then a single- or double-quoted body on one line
pub fn match_string(input: &str) -> SubMatch {
    let bytes = input.as_bytes();
    let (mode, prefix_len) = match bytes.first()? {
        b'u' | b'U' => (LiteralMode::Text, 1),
        _ => (LiteralMode::Raw, 0),
    };

    let quote = match bytes.get(prefix_len)? {
        b'\'' => '\'',
        b'"' => '"',
        _ => return None,
    };

    let body_start = prefix_len + 1;
    let mut chars = input[body_start..].char_indices();

    while let Some((index, ch)) = chars.next() {
        match ch {
            '\\' => {
                if chars.next().is_none() {
                    break;
                }
            }
            '\n' => break,
            ch if ch == quote => {
                let body = &input[body_start..body_start + index];
                let result = decode_literal(body, mode)
                    .map(Token::String)
                    .map_err(LexerErrorKind::InvalidLiteral);
                return Some((body_start + index + 1, result));
            }
            _ => {}
        }
    }

    Some((body_start, Err(LexerErrorKind::UnterminatedString)))
}

/// `[A-Za-z_][A-Za-z0-9_]*`, classified as symbol, constant or name
pub fn match_name(input: &str) -> SubMatch {
    let bytes = input.as_bytes();
    let first = *bytes.first()?;
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return None;
    }

    let len = bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count();

    Some((len, Ok(Token::from_word(&input[..len]))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::LiteralDecodeError;
    use crate::tokens::Constant;
    use assert_matches::assert_matches;

    fn accepted(matched: SubMatch) -> (usize, Token) {
        let (len, result) = matched.expect("matcher declined");
        (len, result.expect("matcher failed"))
    }

    #[test]
    fn test_number_shapes() {
        assert_eq!(accepted(match_number("42 + x")), (2, Token::Number(42.0)));
        assert_eq!(accepted(match_number("3.25)")), (4, Token::Number(3.25)));
        assert_eq!(accepted(match_number("1.e5")), (2, Token::Number(1.0)));
        assert_eq!(accepted(match_number(".5")), (2, Token::Number(0.5)));
        assert_eq!(accepted(match_number("7L")), (2, Token::Number(7.0)));
        assert_eq!(accepted(match_number("7la")), (2, Token::Number(7.0)));
        assert_eq!(accepted(match_number("12abc")), (2, Token::Number(12.0)));
        assert!(match_number(".x").is_none());
        assert!(match_number("x1").is_none());
    }

    #[test]
    fn test_overflowing_number_is_invalid() {
        let huge = "9".repeat(400);
        assert_matches!(
            match_number(&huge),
            Some((400, Err(LexerErrorKind::InvalidNumber { .. })))
        );
    }

    #[test]
    fn test_symbol_priority() {
        assert_eq!(accepted(match_symbol("**2")), (2, Token::Symbol(Symbol::StarStar)));
        assert_eq!(accepted(match_symbol("//")), (2, Token::Symbol(Symbol::SlashSlash)));
        assert_eq!(accepted(match_symbol("<>")), (2, Token::Symbol(Symbol::LessGreater)));
        assert_eq!(accepted(match_symbol("<=")), (2, Token::Symbol(Symbol::LessEqual)));
        assert_eq!(accepted(match_symbol("==")), (2, Token::Symbol(Symbol::EqualEqual)));
        assert_eq!(accepted(match_symbol("= 1")), (1, Token::Symbol(Symbol::Assign)));
        assert_eq!(accepted(match_symbol("<<1")), (2, Token::Symbol(Symbol::ShiftLeft)));
        assert_eq!(accepted(match_symbol("~x")), (1, Token::Symbol(Symbol::Tilde)));
        assert_eq!(accepted(match_symbol("}")), (1, Token::Symbol(Symbol::RightBrace)));
        assert!(match_symbol("$").is_none());
        assert!(match_symbol("abc").is_none());
    }

    #[test]
    fn test_unknown_symbols() {
        for (text, len) in [("+=", 2), ("**=", 3), ("//=", 3), (">>=", 3), (";", 1), ("@", 1), ("`", 1)] {
            let (matched_len, result) = match_symbol(text).unwrap();
            assert_eq!(matched_len, len, "{}", text);
            assert_matches!(result, Err(LexerErrorKind::UnknownSymbol { .. }));
        }
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(accepted(match_string("'ab' + x")), (4, Token::String("ab".into())));
        assert_eq!(accepted(match_string("\"a'b\"")), (5, Token::String("a'b".into())));
        assert_eq!(accepted(match_string("'a\\'b'")), (6, Token::String("a'b".into())));
        assert_eq!(accepted(match_string("u'\\u00e9'")), (9, Token::String("é".into())));
        assert_eq!(accepted(match_string("'\\u00e9'")), (8, Token::String("\\u00e9".into())));
        assert_eq!(accepted(match_string("''")), (2, Token::String(String::new())));
        assert!(match_string("user").is_none());
        assert!(match_string("abc").is_none());
    }

    #[test]
    fn test_unterminated_strings() {
        for text in ["'abc", "\"abc'", "'ab\ncd'", "u'x", "'trailing\\"] {
            assert_matches!(
                match_string(text),
                Some((_, Err(LexerErrorKind::UnterminatedString))),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_string_decode_failure() {
        assert_matches!(
            match_string("u'\\x4'"),
            Some((_, Err(LexerErrorKind::InvalidLiteral(LiteralDecodeError::TruncatedEscape { .. }))))
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(accepted(match_name("foo_1.bar")), (5, Token::Name("foo_1".into())));
        assert_eq!(accepted(match_name("_x")), (2, Token::Name("_x".into())));
        assert_eq!(accepted(match_name("not in")), (3, Token::Symbol(Symbol::Not)));
        assert_eq!(accepted(match_name("True")), (4, Token::Constant(Constant::True)));
        assert!(match_name("1x").is_none());
        assert!(match_name("é").is_none());
    }

    #[test]
    fn test_match_next_order() {
        assert_eq!(accepted(match_next("1abc")), (1, Token::Number(1.0)));
        assert_eq!(accepted(match_next(".5")), (2, Token::Number(0.5)));
        assert_eq!(accepted(match_next(".x")), (1, Token::Symbol(Symbol::Dot)));
        assert_eq!(accepted(match_next("u'x'")), (4, Token::String("x".into())));
        assert_eq!(accepted(match_next("u")), (1, Token::Name("u".into())));
        assert!(match_next("$").is_none());
    }
}
