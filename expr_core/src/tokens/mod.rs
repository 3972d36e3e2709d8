//! Token system for expression text
//!
//! - **[`Token`]** - the five token kinds consumed by the expression parser
//! - **[`Symbol`]** - closed vocabulary of keywords, operators and punctuation,
//!   including the compounds `not in` and `is not`
//! - **[`Constant`]** - the reserved names `None`, `True` and `False`
//! - **[`TokenStream`]** - ordered tokens with lookahead and backtracking
//!
//! Tokens carry no source positions. Any new token kind is a breaking change
//! for parsers that match on [`Token`].

pub mod token;
pub mod token_stream;

pub use token::{Constant, Symbol, Token};
pub use token_stream::TokenStream;
