//! Configuration module for the expression core
//!
//! Resource limits are compile-time constants; user-facing behaviour is
//! controlled through runtime preferences read from the environment or a
//! TOML file.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{
    default_lexical_preferences, ConfigError, LexicalPreferences, LoggingPreferences, RuntimeConfig,
};

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the crate version this core was built from
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!(
            "expr_core {} (limits: compile-time, preferences: EXPR_* environment or TOML)",
            version()
        )
    }
}
