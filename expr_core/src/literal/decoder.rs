//! Escape-sequence decoder for string literal bodies

use crate::logging::codes;

/// Decoding mode selected by the literal's prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralMode {
    /// `u'...'` literal: `\u` escapes are decoded, `\U` and `\N` are rejected
    Text,
    /// Unprefixed literal: `\u`, `\U` and `\N` are ordinary characters
    Raw,
}

impl LiteralMode {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }
}

/// Escape decoding failures; offsets are byte offsets into the literal body
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralDecodeError {
    #[error("truncated \\{escape} escape at offset {offset}: expected {expected_digits} hex digits")]
    TruncatedEscape {
        escape: char,
        expected_digits: usize,
        offset: usize,
    },

    #[error("invalid \\x escape at offset {offset}")]
    InvalidEscape { offset: usize },

    #[error("\\u{code:04X} at offset {offset} is not a valid character")]
    InvalidCodePoint { code: u32, offset: usize },

    #[error("\\{escape} escapes are not supported (offset {offset})")]
    UnsupportedEscape { escape: char, offset: usize },
}

impl LiteralDecodeError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            Self::TruncatedEscape { .. } => codes::literal::TRUNCATED_ESCAPE,
            Self::InvalidEscape { .. } => codes::literal::INVALID_ESCAPE,
            Self::InvalidCodePoint { .. } => codes::literal::INVALID_CODE_POINT,
            Self::UnsupportedEscape { .. } => codes::literal::UNSUPPORTED_ESCAPE,
        }
    }

    /// Escape is recognized but written incorrectly
    pub fn is_malformed(&self) -> bool {
        !self.is_unsupported()
    }

    /// Escape is recognized but deliberately not implemented
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedEscape { .. })
    }

    /// Byte offset of the offending backslash within the literal body
    pub fn offset(&self) -> usize {
        match self {
            Self::TruncatedEscape { offset, .. }
            | Self::InvalidEscape { offset }
            | Self::InvalidCodePoint { offset, .. }
            | Self::UnsupportedEscape { offset, .. } => *offset,
        }
    }
}

fn simple_escape(ch: char) -> Option<char> {
    match ch {
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        'a' => Some('\x07'),
        'b' => Some('\x08'),
        'f' => Some('\x0c'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\x0b'),
        _ => None,
    }
}

/// Read exactly `count` hex digits starting at `start`
fn hex_digits(chars: &[(usize, char)], start: usize, count: usize) -> Option<u32> {
    let digits = chars.get(start..start + count)?;
    digits
        .iter()
        .try_fold(0u32, |acc, &(_, ch)| Some(acc * 16 + ch.to_digit(16)?))
}

/// Decode the escapes of a literal body
pub fn decode_literal(body: &str, mode: LiteralMode) -> Result<String, LiteralDecodeError> {
    let chars: Vec<(usize, char)> = body.char_indices().collect();
    let mut out = String::with_capacity(body.len());
    let mut i = 0;

    while i < chars.len() {
        let (offset, ch) = chars[i];
        if ch != '\\' {
            out.push(ch);
            i += 1;
            continue;
        }

        let Some(&(_, escape)) = chars.get(i + 1) else {
            out.push('\\');
            i += 1;
            continue;
        };

        if let Some(decoded) = simple_escape(escape) {
            out.push(decoded);
            i += 2;
            continue;
        }

        match escape {
            // Line continuation
            '\n' => i += 2,

            'x' => match hex_digits(&chars, i + 2, 2) {
                Some(code) => {
                    // Two hex digits always name a Latin-1 scalar
                    out.push(char::from(code as u8));
                    i += 4;
                }
                None if mode.is_text() => {
                    return Err(LiteralDecodeError::TruncatedEscape {
                        escape: 'x',
                        expected_digits: 2,
                        offset,
                    })
                }
                None => return Err(LiteralDecodeError::InvalidEscape { offset }),
            },

            'u' if mode.is_text() => {
                let code = hex_digits(&chars, i + 2, 4).ok_or(
                    LiteralDecodeError::TruncatedEscape {
                        escape: 'u',
                        expected_digits: 4,
                        offset,
                    },
                )?;
                let decoded = char::from_u32(code)
                    .ok_or(LiteralDecodeError::InvalidCodePoint { code, offset })?;
                out.push(decoded);
                i += 6;
            }

            'U' | 'N' if mode.is_text() => {
                return Err(LiteralDecodeError::UnsupportedEscape { escape, offset });
            }

            '0'..='7' => {
                let run = chars[i + 1..]
                    .iter()
                    .take(3)
                    .take_while(|(_, c)| c.is_digit(8))
                    .count();
                let code = chars[i + 1..i + 1 + run]
                    .iter()
                    .fold(0u32, |acc, &(_, c)| acc * 8 + c.to_digit(8).unwrap_or(0));
                // At most \777, always a valid scalar
                out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                i += 1 + run;
            }

            // Unknown escape: keep the backslash, reprocess the next character
            _ => {
                out.push('\\');
                i += 1;
            }
        }
    }

    Ok(out)
}

/// Render text as a single-quoted literal that decodes back to the same text
/// in either mode
pub fn quote_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn raw(body: &str) -> Result<String, LiteralDecodeError> {
        decode_literal(body, LiteralMode::Raw)
    }

    fn text(body: &str) -> Result<String, LiteralDecodeError> {
        decode_literal(body, LiteralMode::Text)
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(raw("hello world").unwrap(), "hello world");
        assert_eq!(text("héllo").unwrap(), "héllo");
        assert_eq!(raw("").unwrap(), "");
    }

    #[test]
    fn test_single_character_escapes() {
        assert_eq!(raw("a\\tb").unwrap(), "a\tb");
        assert_eq!(
            raw("\\\\\\'\\\"\\a\\b\\f\\n\\r\\v").unwrap(),
            "\\'\"\x07\x08\x0c\n\r\x0b"
        );
    }

    #[test]
    fn test_line_continuation_emits_nothing() {
        assert_eq!(raw("ab\\\ncd").unwrap(), "abcd");
    }

    #[test]
    fn test_hex_escape() {
        assert_eq!(raw("\\x41").unwrap(), "A");
        assert_eq!(text("\\x41\\x42c").unwrap(), "ABc");
        assert_eq!(raw("\\xe9").unwrap(), "é");
    }

    #[test]
    fn test_short_hex_escape_is_malformed() {
        let err = text("\\x4").unwrap_err();
        assert_matches!(
            err,
            LiteralDecodeError::TruncatedEscape {
                escape: 'x',
                expected_digits: 2,
                offset: 0
            }
        );
        assert!(err.is_malformed());

        let err = raw("ab\\x4").unwrap_err();
        assert_matches!(err, LiteralDecodeError::InvalidEscape { offset: 2 });
        assert!(err.is_malformed());
    }

    #[test]
    fn test_non_hex_digits_are_rejected() {
        assert_matches!(raw("\\x4g"), Err(LiteralDecodeError::InvalidEscape { .. }));
        assert_matches!(
            text("\\xzz"),
            Err(LiteralDecodeError::TruncatedEscape { .. })
        );
    }

    #[test]
    fn test_unicode_escape_in_text_mode() {
        assert_eq!(text("\\u00e9t\\u00E9").unwrap(), "été");
        assert_matches!(
            text("\\u12"),
            Err(LiteralDecodeError::TruncatedEscape {
                escape: 'u',
                expected_digits: 4,
                ..
            })
        );
        assert_matches!(
            text("\\ud800"),
            Err(LiteralDecodeError::InvalidCodePoint { code: 0xD800, .. })
        );
    }

    #[test]
    fn test_unicode_escape_is_literal_in_raw_mode() {
        assert_eq!(raw("\\u00e9").unwrap(), "\\u00e9");
        assert_eq!(raw("\\U0001F600").unwrap(), "\\U0001F600");
        assert_eq!(raw("\\N{DASH}").unwrap(), "\\N{DASH}");
    }

    #[test]
    fn test_long_unicode_and_named_escapes_are_unsupported() {
        let err = text("\\U0001F600").unwrap_err();
        assert!(err.is_unsupported());
        assert_matches!(err, LiteralDecodeError::UnsupportedEscape { escape: 'U', .. });

        let err = text("x\\N{EM DASH}").unwrap_err();
        assert_matches!(
            err,
            LiteralDecodeError::UnsupportedEscape {
                escape: 'N',
                offset: 1
            }
        );
    }

    #[test]
    fn test_octal_escapes_take_one_to_three_digits() {
        assert_eq!(raw("\\101").unwrap(), "A");
        assert_eq!(raw("\\0").unwrap(), "\0");
        assert_eq!(raw("\\7x").unwrap(), "\x07x");
        assert_eq!(raw("\\1014").unwrap(), "A4");
        assert_eq!(raw("\\18").unwrap(), "\x018");
        assert_eq!(raw("\\777").unwrap(), "\u{1ff}");
    }

    #[test]
    fn test_unknown_escape_keeps_backslash() {
        assert_eq!(raw("\\p").unwrap(), "\\p");
        assert_eq!(raw("\\q\\n").unwrap(), "\\q\n");
        assert_eq!(raw("end\\").unwrap(), "end\\");
    }

    #[test]
    fn test_error_codes() {
        let err = text("\\N{X}").unwrap_err();
        assert_eq!(err.error_code(), codes::literal::UNSUPPORTED_ESCAPE);
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_quote_literal_round_trips() {
        for sample in ["plain", "it's", "back\\slash", "two\nlines", "tab\there", ""] {
            let quoted = quote_literal(sample);
            let body = &quoted[1..quoted.len() - 1];
            assert_eq!(raw(body).unwrap(), sample);
            assert_eq!(text(body).unwrap(), sample);
        }
    }
}
