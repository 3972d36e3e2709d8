//! Calendar-aware relative offsets
//!
//! Years and months move along the calendar and clamp the day to the length
//! of the target month; days and smaller units are fixed-length steps that
//! carry into the larger fields.

use crate::args::CallArgs;
use crate::temporal::error::TemporalError;
use crate::temporal::fields::{bind_fields, int_field, report, summed_field};
use crate::temporal::moment;
use crate::temporal::PointInTime;
use crate::value::Value;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// Parameter accepted by the constructor but never implemented
const WEEKDAY: &str = "weekday";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelativeDelta {
    years: i64,
    months: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl RelativeDelta {
    pub const PARAMS: [&'static str; 14] = [
        "years", "months", "days", "weeks", "hours", "minutes", "seconds", "year", "month", "day",
        "hour", "minute", "second", WEEKDAY,
    ];

    pub fn new(years: i64, months: i64, days: i64, hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// `relativedelta(...)`; singular and plural spellings of a field add up
    /// and `weeks` counts as seven days each
    pub fn from_args(args: CallArgs<Value>) -> Result<Self, TemporalError> {
        let weekday_position = Self::PARAMS.len() - 1;
        if args.named.contains_key(WEEKDAY) || args.positional.len() > weekday_position {
            let err = TemporalError::UnsupportedArgument {
                name: WEEKDAY.to_string(),
            };
            return Err(report("relativedelta", err));
        }

        Self::build(args).map_err(|e| report("relativedelta", e))
    }

    fn build(args: CallArgs<Value>) -> Result<Self, TemporalError> {
        let bound = bind_fields(args, &Self::PARAMS)?;

        let weeks = int_field(&bound, "weeks", 0)?;
        let week_days = weeks
            .checked_mul(7)
            .ok_or(TemporalError::OutOfRange { field: "weeks" })?;
        let days = summed_field(&bound, &["days", "day"], "days")?
            .checked_add(week_days)
            .ok_or(TemporalError::OutOfRange { field: "days" })?;

        Ok(Self {
            years: summed_field(&bound, &["years", "year"], "years")?,
            months: summed_field(&bound, &["months", "month"], "months")?,
            days,
            hours: summed_field(&bound, &["hours", "hour"], "hours")?,
            minutes: summed_field(&bound, &["minutes", "minute"], "minutes")?,
            seconds: summed_field(&bound, &["seconds", "second"], "seconds")?,
        })
    }

    pub fn years(&self) -> i64 {
        self.years
    }

    pub fn months(&self) -> i64 {
        self.months
    }

    pub fn days(&self) -> i64 {
        self.days
    }

    pub fn hours(&self) -> i64 {
        self.hours
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Shift a value by this offset: years, months, days, hours, minutes,
    /// then seconds, each step on the previous result
    pub fn apply<T: PointInTime>(&self, point: &T) -> Result<T, TemporalError> {
        let months_from_years = self
            .years
            .checked_mul(12)
            .ok_or(TemporalError::OutOfRange { field: "years" })?;

        let mut moment = point.to_naive();
        moment = moment::add_months(moment, months_from_years)?;
        moment = moment::add_months(moment, self.months)?;
        moment = moment::add_delta(moment, self.days, TimeDelta::try_days, "days")?;
        moment = moment::add_delta(moment, self.hours, TimeDelta::try_hours, "hours")?;
        moment = moment::add_delta(moment, self.minutes, TimeDelta::try_minutes, "minutes")?;
        moment = moment::add_delta(moment, self.seconds, TimeDelta::try_seconds, "seconds")?;

        T::from_naive(moment)
    }

    fn fields(&self) -> [(&'static str, i64); 6] {
        [
            ("years", self.years),
            ("months", self.months),
            ("days", self.days),
            ("hours", self.hours),
            ("minutes", self.minutes),
            ("seconds", self.seconds),
        ]
    }
}

impl Neg for RelativeDelta {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            years: self.years.saturating_neg(),
            months: self.months.saturating_neg(),
            days: self.days.saturating_neg(),
            hours: self.hours.saturating_neg(),
            minutes: self.minutes.saturating_neg(),
            seconds: self.seconds.saturating_neg(),
        }
    }
}

impl fmt::Display for RelativeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields()
            .iter()
            .filter(|(_, amount)| *amount != 0)
            .map(|(name, amount)| format!("{}={:+}", name, amount))
            .collect();
        write!(f, "relativedelta({})", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::{Date, DateTime, Time};
    use assert_matches::assert_matches;

    fn named(pairs: &[(&str, i32)]) -> CallArgs<Value> {
        pairs
            .iter()
            .fold(CallArgs::new(), |args, (name, value)| args.with_named(*name, *value))
    }

    #[test]
    fn test_month_rollover_clamps_to_leap_february() {
        let delta = RelativeDelta::from_args(named(&[("months", 1)])).unwrap();
        let date = Date::new(2024, 1, 31).unwrap();
        assert_eq!(delta.apply(&date).unwrap(), Date::new(2024, 2, 29).unwrap());
        assert_eq!(date.apply(&delta).unwrap(), Date::new(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_singular_and_plural_fields_add_up() {
        let delta = RelativeDelta::from_args(named(&[("year", 1), ("years", 2)])).unwrap();
        assert_eq!(delta.years(), 3);

        let delta = RelativeDelta::from_args(named(&[("weeks", 1)])).unwrap();
        assert_eq!(delta.days(), 7);

        let delta = RelativeDelta::from_args(named(&[("weeks", 2), ("day", 1), ("days", -3)])).unwrap();
        assert_eq!(delta.days(), 12);
    }

    #[test]
    fn test_weekday_always_fails() {
        for args in [
            named(&[("weekday", 0)]),
            named(&[("weekday", 3), ("months", 1)]),
            named(&[("weekday", 0), ("bogus", 1)]),
            CallArgs::new().with_named("weekday", Value::None),
            CallArgs::from_positional(vec![Value::from(0); 14]),
        ] {
            assert_matches!(
                RelativeDelta::from_args(args),
                Err(TemporalError::UnsupportedArgument { ref name }) if name == "weekday"
            );
        }
    }

    #[test]
    fn test_positional_order() {
        let args = CallArgs::from_positional(vec![
            Value::from(1),
            Value::from(2),
            Value::from(3),
            Value::from(1),
            Value::from(4),
            Value::from(5),
            Value::from(6),
        ]);
        let delta = RelativeDelta::from_args(args).unwrap();
        assert_eq!(delta, RelativeDelta::new(1, 2, 10, 4, 5, 6));
    }

    #[test]
    fn test_unknown_argument() {
        assert_matches!(
            RelativeDelta::from_args(named(&[("fortnights", 1)])),
            Err(TemporalError::UnexpectedArgument { .. })
        );
    }

    #[test]
    fn test_apply_order_and_carry() {
        let start = DateTime::new(2023, 12, 31, 23, 59, 30).unwrap();

        let delta = RelativeDelta::new(0, 2, 0, 0, 0, 45);
        // 2023-12-31 -> 2024-02-29 (clamped) -> +45s crosses midnight
        assert_eq!(
            delta.apply(&start).unwrap(),
            DateTime::new(2024, 3, 1, 0, 0, 15).unwrap()
        );

        let delta = RelativeDelta::new(1, 0, 1, 0, 0, 0);
        assert_eq!(
            delta.apply(&start).unwrap(),
            DateTime::new(2025, 1, 1, 23, 59, 30).unwrap()
        );
    }

    #[test]
    fn test_delta_is_reusable() {
        let delta = RelativeDelta::new(0, 0, 1, 0, 0, 0);
        let first = delta.apply(&Date::new(2024, 2, 28).unwrap()).unwrap();
        let second = delta.apply(&first).unwrap();
        assert_eq!(first, Date::new(2024, 2, 29).unwrap());
        assert_eq!(second, Date::new(2024, 3, 1).unwrap());
        assert_eq!(delta.days(), 1);
    }

    #[test]
    fn test_apply_to_time_wraps() {
        let delta = RelativeDelta::new(0, 0, 0, 2, 30, 0);
        let time = Time::new(23, 0, 0).unwrap();
        assert_eq!(delta.apply(&time).unwrap(), Time::new(1, 30, 0).unwrap());
    }

    #[test]
    fn test_negation() {
        let delta = RelativeDelta::new(0, 1, 0, 0, 0, 0);
        let date = Date::new(2024, 3, 31).unwrap();
        assert_eq!((-delta).apply(&date).unwrap(), Date::new(2024, 2, 29).unwrap());
        assert_eq!(-(-delta), delta);
        assert!(RelativeDelta::default().is_zero());
        assert!(!delta.is_zero());
    }

    #[test]
    fn test_out_of_range_results() {
        let delta = RelativeDelta::new(1, 0, 0, 0, 0, 0);
        assert_matches!(
            delta.apply(&Date::new(9999, 6, 1).unwrap()),
            Err(TemporalError::OutOfRange { field: "year" })
        );

        let delta = RelativeDelta::new(i64::MAX, 0, 0, 0, 0, 0);
        assert_matches!(
            delta.apply(&Date::new(2024, 1, 1).unwrap()),
            Err(TemporalError::OutOfRange { field: "years" })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(RelativeDelta::default().to_string(), "relativedelta()");
        assert_eq!(
            RelativeDelta::new(1, 0, -7, 0, 0, 0).to_string(),
            "relativedelta(years=+1, days=-7)"
        );
    }
}
