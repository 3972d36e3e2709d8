//! `%`-directive rendering for point-in-time values

use crate::log_error;
use crate::temporal::error::TemporalError;
use crate::temporal::moment::Moment;
use chrono::{Datelike, Timelike};
use std::fmt::Write;

/// Directives understood by date-only values
pub const DATE_DIRECTIVES: &[char] = &['Y', 'm', 'd'];

/// Directives understood by date-time and time values
pub const DATETIME_DIRECTIVES: &[char] = &['Y', 'm', 'd', 'H', 'M', 'S'];

/// Render `format`, replacing each supported `%X` directive with the
/// zero-padded field; a `%` not followed by an ASCII letter is copied
pub(crate) fn strftime(
    moment: &Moment,
    format: &str,
    supported: &[char],
) -> Result<String, TemporalError> {
    let mut out = String::with_capacity(format.len() + 8);
    let mut chars = format.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        let directive = match chars.peek() {
            Some(&next) if next.is_ascii_alphabetic() => next,
            _ => {
                out.push('%');
                continue;
            }
        };
        chars.next();

        if !supported.contains(&directive) {
            let err = TemporalError::FormatDirective { directive };
            log_error!(err.error_code(), &err.to_string(), "format" => format);
            return Err(err);
        }

        // Writing to a String cannot fail
        let _ = match directive {
            'Y' => write!(out, "{:04}", moment.year()),
            'm' => write!(out, "{:02}", moment.month()),
            'd' => write!(out, "{:02}", moment.day()),
            'H' => write!(out, "{:02}", moment.hour()),
            'M' => write!(out, "{:02}", moment.minute()),
            _ => write!(out, "{:02}", moment.second()),
        };
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    fn moment() -> Moment {
        NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(7, 5, 9)
            .unwrap()
    }

    #[test]
    fn test_all_directives() {
        assert_eq!(
            strftime(&moment(), "%Y-%m-%d %H:%M:%S", DATETIME_DIRECTIVES).unwrap(),
            "2024-01-31 07:05:09"
        );
        assert_eq!(strftime(&moment(), "%d/%m/%Y", DATE_DIRECTIVES).unwrap(), "31/01/2024");
    }

    #[test]
    fn test_plain_text_and_stray_percent() {
        assert_eq!(strftime(&moment(), "", DATE_DIRECTIVES).unwrap(), "");
        assert_eq!(strftime(&moment(), "year %Y!", DATE_DIRECTIVES).unwrap(), "year 2024!");
        assert_eq!(strftime(&moment(), "100%", DATE_DIRECTIVES).unwrap(), "100%");
        assert_eq!(strftime(&moment(), "% %1", DATE_DIRECTIVES).unwrap(), "% %1");
        assert_eq!(strftime(&moment(), "é%d", DATE_DIRECTIVES).unwrap(), "é31");
    }

    #[test]
    fn test_unsupported_directive() {
        assert_matches!(
            strftime(&moment(), "%Y %H", DATE_DIRECTIVES),
            Err(TemporalError::FormatDirective { directive: 'H' })
        );
        assert_matches!(
            strftime(&moment(), "%a", DATETIME_DIRECTIVES),
            Err(TemporalError::FormatDirective { directive: 'a' })
        );
    }

    #[test]
    fn test_small_years_are_padded() {
        let early = NaiveDate::from_ymd_opt(5, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(strftime(&early, "%Y", DATE_DIRECTIVES).unwrap(), "0005");
    }
}
