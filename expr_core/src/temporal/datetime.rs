//! Date-with-time values

use crate::args::CallArgs;
use crate::temporal::error::TemporalError;
use crate::temporal::fields::{bind_fields, int_field, report};
use crate::temporal::format::{strftime, DATETIME_DIRECTIVES};
use crate::temporal::moment::{self, Moment};
use crate::temporal::{Date, PointInTime, RelativeDelta, Time};
use crate::value::Value;
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    moment: Moment,
}

impl DateTime {
    pub const PARAMS: [&'static str; 6] = ["year", "month", "day", "hour", "minute", "second"];
    pub const COMBINE_PARAMS: [&'static str; 2] = ["date", "time"];

    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TemporalError> {
        let date = moment::date_from_fields(year.into(), month.into(), day.into())?;
        let time = moment::time_from_fields(hour.into(), minute.into(), second.into())?;
        Ok(Self {
            moment: date.and_time(time),
        })
    }

    /// `datetime(year=0, month=1, day=1, hour=0, minute=0, second=0)`
    pub fn from_args(args: CallArgs<Value>) -> Result<Self, TemporalError> {
        Self::build(args).map_err(|e| report("datetime", e))
    }

    fn build(args: CallArgs<Value>) -> Result<Self, TemporalError> {
        let bound = bind_fields(args, &Self::PARAMS)?;
        let date = moment::date_from_fields(
            int_field(&bound, "year", 0)?,
            int_field(&bound, "month", 1)?,
            int_field(&bound, "day", 1)?,
        )?;
        let time = moment::time_from_fields(
            int_field(&bound, "hour", 0)?,
            int_field(&bound, "minute", 0)?,
            int_field(&bound, "second", 0)?,
        )?;
        Ok(Self {
            moment: date.and_time(time),
        })
    }

    pub fn now() -> Self {
        let now = moment::current();
        Self {
            moment: now.with_nanosecond(0).unwrap_or(now),
        }
    }

    /// Date fields from `date`, time fields from `time`
    pub fn combine(date: &Date, time: &Time) -> Self {
        Self {
            moment: date.naive_date().and_time(time.naive_time()),
        }
    }

    /// `combine(date, time)`; a date-time is accepted where a date is expected
    pub fn combine_args(args: CallArgs<Value>) -> Result<Self, TemporalError> {
        Self::build_combined(args).map_err(|e| report("combine", e))
    }

    fn build_combined(args: CallArgs<Value>) -> Result<Self, TemporalError> {
        let bound = bind_fields(args, &Self::COMBINE_PARAMS)?;

        let date = match bound.get("date") {
            Some(Value::Date(date)) => *date,
            Some(Value::DateTime(datetime)) => datetime.date(),
            other => return Err(wrong_type("date", "date", other)),
        };
        let time = match bound.get("time") {
            Some(Value::Time(time)) => *time,
            other => return Err(wrong_type("time", "time", other)),
        };

        Ok(Self::combine(&date, &time))
    }

    pub fn date(&self) -> Date {
        Date::from_naive_date(self.moment.date())
    }

    pub fn time(&self) -> Time {
        Time::from_naive_time(self.moment.time())
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

    pub fn hour(&self) -> u32 {
        self.moment.hour()
    }

    pub fn minute(&self) -> u32 {
        self.moment.minute()
    }

    pub fn second(&self) -> u32 {
        self.moment.second()
    }

    pub fn strftime(&self, format: &str) -> Result<String, TemporalError> {
        strftime(&self.moment, format, DATETIME_DIRECTIVES)
    }

    pub fn apply(&self, delta: &RelativeDelta) -> Result<Self, TemporalError> {
        delta.apply(self)
    }
}

fn wrong_type(name: &str, expected: &'static str, found: Option<&Value>) -> TemporalError {
    TemporalError::InvalidArgumentType {
        name: name.to_string(),
        expected,
        found: found.map(Value::type_name).unwrap_or("nothing"),
    }
}

impl PointInTime for DateTime {
    fn to_naive(&self) -> NaiveDateTime {
        self.moment
    }

    fn from_naive(moment: NaiveDateTime) -> Result<Self, TemporalError> {
        Ok(Self {
            moment: moment::check_year(moment)?,
        })
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_construct_positional_and_named() {
        let args = CallArgs::from_positional(vec![Value::from(2024), Value::from(3), Value::from(10)])
            .with_named("hour", 14)
            .with_named("second", 5);
        let datetime = DateTime::from_args(args).unwrap();
        assert_eq!(datetime, DateTime::new(2024, 3, 10, 14, 0, 5).unwrap());
        assert_eq!(datetime.to_string(), "2024-03-10 14:00:05");
        assert_eq!(
            datetime.strftime("%d.%m.%Y %H:%M:%S").unwrap(),
            "10.03.2024 14:00:05"
        );
    }

    #[test]
    fn test_defaults() {
        let datetime = DateTime::from_args(CallArgs::new()).unwrap();
        assert_eq!(datetime.to_string(), "0000-01-01 00:00:00");
    }

    #[test]
    fn test_invalid_fields() {
        assert_matches!(
            DateTime::new(2024, 4, 31, 0, 0, 0),
            Err(TemporalError::InvalidDate { .. })
        );
        assert_matches!(
            DateTime::new(2024, 4, 30, 0, 60, 0),
            Err(TemporalError::InvalidTime { minute: 60, .. })
        );
        let seven = CallArgs::from_positional(vec![Value::from(1); 7]);
        assert_matches!(DateTime::from_args(seven), Err(TemporalError::Binding(_)));
    }

    #[test]
    fn test_combine() {
        let date = Date::new(2024, 1, 31).unwrap();
        let time = Time::new(23, 59, 58).unwrap();
        let datetime = DateTime::combine(&date, &time);
        assert_eq!(datetime.to_string(), "2024-01-31 23:59:58");
        assert_eq!(datetime.date(), date);
        assert_eq!(datetime.time(), time);

        let args = CallArgs::from_positional(vec![Value::from(datetime)])
            .with_named("time", Time::new(1, 2, 3).unwrap());
        assert_eq!(
            DateTime::combine_args(args).unwrap().to_string(),
            "2024-01-31 01:02:03"
        );
    }

    #[test]
    fn test_combine_type_errors() {
        let time = Value::from(Time::new(1, 0, 0).unwrap());
        let args = CallArgs::from_positional(vec![Value::from("2024-01-01"), time.clone()]);
        assert_matches!(
            DateTime::combine_args(args),
            Err(TemporalError::InvalidArgumentType { found: "str", .. })
        );

        let args = CallArgs::<Value>::new().with_named("time", time);
        assert_matches!(
            DateTime::combine_args(args),
            Err(TemporalError::InvalidArgumentType { found: "nothing", .. })
        );
    }

    #[test]
    fn test_now_has_whole_seconds() {
        assert_eq!(DateTime::now().to_naive().nanosecond(), 0);
    }
}
