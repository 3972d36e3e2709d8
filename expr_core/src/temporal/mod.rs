//! Date, time and relative-offset values for expression evaluation
//!
//! All kinds are timezone-naive and second-precision. Each wraps a single
//! moment so that [`RelativeDelta`] arithmetic can run on any of them through
//! [`PointInTime`].

pub mod date;
pub mod datetime;
pub mod delta;
pub mod error;
pub(crate) mod fields;
pub mod format;
pub(crate) mod moment;
pub mod time;

use chrono::NaiveDateTime;

pub use date::Date;
pub use datetime::DateTime;
pub use delta::RelativeDelta;
pub use error::TemporalError;
pub use format::{DATE_DIRECTIVES, DATETIME_DIRECTIVES};
pub use time::Time;

/// A value that can be moved along the calendar
pub trait PointInTime: Sized {
    fn to_naive(&self) -> NaiveDateTime;

    /// Rebuild from a shifted moment, dropping fields the kind does not carry
    fn from_naive(moment: NaiveDateTime) -> Result<Self, TemporalError>;
}
