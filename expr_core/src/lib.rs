//! Expression tokenizer and temporal value model
//!
//! [`tokenize`] turns expression source into a [`TokenStream`] for the
//! parser; the [`temporal`] and [`args`] modules back the date/time
//! constructors an evaluator exposes.

// Internal modules
#[macro_use]
pub mod logging;
pub mod args;
pub mod config;
pub mod lexical;
pub mod literal;
pub mod temporal;
pub mod tokens;
pub mod value;

// Re-export key types for library consumers
pub use args::{ArgumentError, CallArgs};
pub use lexical::{tokenize, TokenizeError};
pub use literal::{decode_literal, LiteralMode};
pub use temporal::{Date, DateTime, RelativeDelta, TemporalError, Time};
pub use tokens::{Constant, Symbol, Token, TokenStream};
pub use value::Value;
