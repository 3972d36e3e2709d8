//! String literal decoding
//!
//! Turns the body of a quoted literal (quotes already stripped) into its
//! logical character content. Two modes exist: text literals (`u'...'`)
//! additionally understand `\uXXXX`, raw byte literals (`'...'`) do not.

pub mod decoder;

pub use decoder::{decode_literal, quote_literal, LiteralDecodeError, LiteralMode};
