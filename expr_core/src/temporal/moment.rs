//! Shared moment representation behind dates, date-times and times
//!
//! A moment is a naive date-time read as UTC fields. The three public kinds
//! wrap one and differ only in which fields they expose.

use crate::config::compile_time::temporal::{IMPLICIT_DATE, MAX_YEAR, MIN_YEAR};
use crate::temporal::error::TemporalError;
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

pub(crate) type Moment = NaiveDateTime;

/// Wall-clock now as UTC fields
pub(crate) fn current() -> Moment {
    Utc::now().naive_utc()
}

/// Date carried by time-only values
pub(crate) fn implicit_date() -> NaiveDate {
    let (year, month, day) = IMPLICIT_DATE;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(crate) fn check_year(moment: Moment) -> Result<Moment, TemporalError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&moment.year()) {
        Ok(moment)
    } else {
        Err(TemporalError::OutOfRange { field: "year" })
    }
}

pub(crate) fn date_from_fields(year: i64, month: i64, day: i64) -> Result<NaiveDate, TemporalError> {
    let year = i32::try_from(year)
        .ok()
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
        .ok_or(TemporalError::OutOfRange { field: "year" })?;

    let invalid = TemporalError::InvalidDate {
        year: i64::from(year),
        month,
        day,
    };
    let (Ok(month), Ok(day)) = (u32::try_from(month), u32::try_from(day)) else {
        return Err(invalid);
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or(invalid)
}

pub(crate) fn time_from_fields(hour: i64, minute: i64, second: i64) -> Result<NaiveTime, TemporalError> {
    let invalid = TemporalError::InvalidTime {
        hour,
        minute,
        second,
    };
    let (Ok(h), Ok(m), Ok(s)) = (u32::try_from(hour), u32::try_from(minute), u32::try_from(second))
    else {
        return Err(invalid);
    };

    NaiveTime::from_hms_opt(h, m, s).ok_or(invalid)
}

/// Calendar month step; the day is clamped to the target month's length
pub(crate) fn add_months(moment: Moment, months: i64) -> Result<Moment, TemporalError> {
    let out_of_range = TemporalError::OutOfRange { field: "months" };
    let step = u32::try_from(months.unsigned_abs())
        .map(Months::new)
        .map_err(|_| out_of_range.clone())?;

    let shifted = if months >= 0 {
        moment.checked_add_months(step)
    } else {
        moment.checked_sub_months(step)
    };
    shifted.ok_or(out_of_range)
}

/// Fixed-length step; overflow carries into the larger fields
pub(crate) fn add_delta(
    moment: Moment,
    amount: i64,
    unit: fn(i64) -> Option<TimeDelta>,
    field: &'static str,
) -> Result<Moment, TemporalError> {
    unit(amount)
        .and_then(|delta| moment.checked_add_signed(delta))
        .ok_or(TemporalError::OutOfRange { field })
}
