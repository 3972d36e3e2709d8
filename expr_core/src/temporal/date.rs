//! Date-only values

use crate::args::CallArgs;
use crate::temporal::error::TemporalError;
use crate::temporal::fields::{bind_fields, int_field, report};
use crate::temporal::format::{strftime, DATE_DIRECTIVES};
use crate::temporal::moment::{self, Moment};
use crate::temporal::{PointInTime, RelativeDelta};
use crate::value::Value;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};
use std::fmt;

/// Calendar date; its moment always sits at midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    moment: Moment,
}

impl Date {
    pub const PARAMS: [&'static str; 3] = ["year", "month", "day"];

    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TemporalError> {
        let date = moment::date_from_fields(year.into(), month.into(), day.into())?;
        Ok(Self::from_naive_date(date))
    }

    /// `date(year=0, month=1, day=1)`
    pub fn from_args(args: CallArgs<Value>) -> Result<Self, TemporalError> {
        Self::build(args).map_err(|e| report("date", e))
    }

    fn build(args: CallArgs<Value>) -> Result<Self, TemporalError> {
        let bound = bind_fields(args, &Self::PARAMS)?;
        let date = moment::date_from_fields(
            int_field(&bound, "year", 0)?,
            int_field(&bound, "month", 1)?,
            int_field(&bound, "day", 1)?,
        )?;
        Ok(Self::from_naive_date(date))
    }

    pub fn today() -> Self {
        Self::from_naive_date(moment::current().date())
    }

    pub(crate) fn from_naive_date(date: NaiveDate) -> Self {
        Self {
            moment: date.and_time(NaiveTime::MIN),
        }
    }

    pub(crate) fn naive_date(&self) -> NaiveDate {
        self.moment.date()
    }

    pub fn year(&self) -> i32 {
        self.moment.year()
    }

    pub fn month(&self) -> u32 {
        self.moment.month()
    }

    pub fn day(&self) -> u32 {
        self.moment.day()
    }

    pub fn strftime(&self, format: &str) -> Result<String, TemporalError> {
        strftime(&self.moment, format, DATE_DIRECTIVES)
    }

    pub fn apply(&self, delta: &RelativeDelta) -> Result<Self, TemporalError> {
        delta.apply(self)
    }
}

impl PointInTime for Date {
    fn to_naive(&self) -> NaiveDateTime {
        self.moment
    }

    fn from_naive(moment: NaiveDateTime) -> Result<Self, TemporalError> {
        let moment = moment::check_year(moment)?;
        Ok(Self::from_naive_date(moment.date()))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
