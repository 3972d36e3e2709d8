//! Time-of-day values

use crate::args::CallArgs;
use crate::temporal::error::TemporalError;
use crate::temporal::fields::{bind_fields, int_field, report};
use crate::temporal::format::{strftime, DATETIME_DIRECTIVES};
use crate::temporal::moment::{self, Moment};
use crate::temporal::{PointInTime, RelativeDelta};
use crate::value::Value;
use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;

/// Time of day; its moment always carries the implicit date 1900-01-01
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    moment: Moment,
}

impl Time {
    pub const PARAMS: [&'static str; 3] = ["hour", "minute", "second"];

    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, TemporalError> {
        let time = moment::time_from_fields(hour.into(), minute.into(), second.into())?;
        Ok(Self::from_naive_time(time))
    }

    /// `time(hour=0, minute=0, second=0)`
    pub fn from_args(args: CallArgs<Value>) -> Result<Self, TemporalError> {
        Self::build(args).map_err(|e| report("time", e))
    }

    fn build(args: CallArgs<Value>) -> Result<Self, TemporalError> {
        let bound = bind_fields(args, &Self::PARAMS)?;
        let time = moment::time_from_fields(
            int_field(&bound, "hour", 0)?,
            int_field(&bound, "minute", 0)?,
            int_field(&bound, "second", 0)?,
        )?;
        Ok(Self::from_naive_time(time))
    }

    pub fn now() -> Self {
        Self::from_naive_time(moment::current().time())
    }

    pub(crate) fn from_naive_time(time: NaiveTime) -> Self {
        // Sub-second precision is not part of the value
        let time = time.with_nanosecond(0).unwrap_or(time);
        Self {
            moment: moment::implicit_date().and_time(time),
        }
    }

    pub(crate) fn naive_time(&self) -> NaiveTime {
        self.moment.time()
    }

    pub fn hour(&self) -> u32 {
        self.moment.hour()
    }

    pub fn minute(&self) -> u32 {
        self.moment.minute()
    }

    pub fn second(&self) -> u32 {
        self.moment.second()
    }

    /// Date directives render the implicit date
    pub fn strftime(&self, format: &str) -> Result<String, TemporalError> {
        strftime(&self.moment, format, DATETIME_DIRECTIVES)
    }

    pub fn apply(&self, delta: &RelativeDelta) -> Result<Self, TemporalError> {
        delta.apply(self)
    }
}

impl PointInTime for Time {
    fn to_naive(&self) -> NaiveDateTime {
        self.moment
    }

    /// Only the time of day survives; the date is reset
    fn from_naive(moment: NaiveDateTime) -> Result<Self, TemporalError> {
        Ok(Self::from_naive_time(moment.time()))
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_construct_and_access() {
        let time = Time::from_args(CallArgs::from_positional(vec![
            Value::from(9),
            Value::from(5),
            Value::from(30),
        ]))
        .unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (9, 5, 30));
        assert_eq!(time.to_string(), "09:05:30");
    }

    #[test]
    fn test_defaults() {
        let time = Time::from_args(CallArgs::<Value>::new().with_named("minute", 45)).unwrap();
        assert_eq!(time, Time::new(0, 45, 0).unwrap());
        assert_eq!(Time::from_args(CallArgs::new()).unwrap().to_string(), "00:00:00");
    }

    #[test]
    fn test_invalid_time() {
        assert_matches!(
            Time::from_args(CallArgs::<Value>::new().with_named("hour", 24)),
            Err(TemporalError::InvalidTime { hour: 24, .. })
        );
        assert_matches!(
            Time::from_args(CallArgs::<Value>::new().with_named("day", 1)),
            Err(TemporalError::UnexpectedArgument { .. })
        );
    }

    #[test]
    fn test_format_uses_implicit_date() {
        let time = Time::new(13, 7, 0).unwrap();
        assert_eq!(time.strftime("%H:%M:%S").unwrap(), "13:07:00");
        assert_eq!(time.strftime("%Y-%m-%d").unwrap(), "1900-01-01");
        assert_matches!(
            time.strftime("%p"),
            Err(TemporalError::FormatDirective { directive: 'p' })
        );
    }

    #[test]
    fn test_from_naive_resets_date() {
        let moment = chrono::NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let time = Time::from_naive(moment).unwrap();
        assert_eq!(time, Time::new(8, 0, 0).unwrap());
        assert_eq!(time.to_naive().date(), moment::implicit_date());
    }

    #[test]
    fn test_now_has_implicit_date() {
        assert_eq!(Time::now().to_naive().date(), moment::implicit_date());
    }
}
