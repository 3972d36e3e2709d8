pub mod compile_time {
    pub mod lexical {
        /// Maximum length of a single expression in bytes (64KB)
        /// SECURITY: Expressions come from configuration strings, not source files
        pub const MAX_EXPRESSION_LENGTH: usize = 65_536;

        /// Maximum decoded string literal size (16KB)
        /// SECURITY: Prevents memory blow-up through escape-heavy literals
        pub const MAX_STRING_SIZE: usize = 16_384;

        /// Maximum identifier length (255 characters)
        /// SECURITY: Prevents parser complexity attacks
        pub const MAX_IDENTIFIER_LENGTH: usize = 255;

        /// Maximum number of tokens in a single expression
        /// SECURITY: Prevents DoS via token explosion
        pub const MAX_TOKEN_COUNT: usize = 10_000;

        /// Share of a limit (percent) past which a successful run logs a warning
        pub const LIMIT_WARNING_PERCENT: usize = 90;
    }

    pub mod temporal {
        /// Smallest year a point-in-time value may carry
        pub const MIN_YEAR: i32 = 0;

        /// Largest year a point-in-time value may carry (keeps `%Y` at four digits)
        pub const MAX_YEAR: i32 = 9999;

        /// Year, month and day of the implicit date carried by time-only values
        pub const IMPLICIT_DATE: (i32, u32, u32) = (1900, 1, 1);
    }

    pub mod logging {
        /// Size of the in-memory event buffer used by the memory logger
        /// RESOURCE: Bounds test and diagnostic memory usage
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Longest message accepted by a log event; longer messages are truncated
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 4_096;

        /// Lowest level security-relevant events are ever suppressed to (1 = warning)
        pub const SECURITY_MIN_LOG_LEVEL: u8 = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time::*;

    #[test]
    fn test_lexical_limits_are_consistent() {
        assert!(lexical::MAX_STRING_SIZE <= lexical::MAX_EXPRESSION_LENGTH);
        assert!(lexical::MAX_IDENTIFIER_LENGTH > 0);
        assert!(lexical::MAX_TOKEN_COUNT > 0);
        assert!(lexical::LIMIT_WARNING_PERCENT > 0 && lexical::LIMIT_WARNING_PERCENT < 100);
    }

    #[test]
    fn test_year_range_fits_four_digits() {
        assert!(temporal::MIN_YEAR >= 0);
        assert!(temporal::MAX_YEAR <= 9999);
        assert!(temporal::IMPLICIT_DATE.0 >= temporal::MIN_YEAR);
    }
}
