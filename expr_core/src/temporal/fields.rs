//! Constructor argument extraction shared by the temporal kinds

use crate::args::{bind, BoundArgs, CallArgs};
use crate::log_error;
use crate::temporal::error::TemporalError;
use crate::value::Value;

/// Bind call arguments, rejecting names that are not parameters
pub(crate) fn bind_fields(
    args: CallArgs<Value>,
    params: &[&str],
) -> Result<BoundArgs<Value>, TemporalError> {
    let bound = bind(args, params)?;

    if let Some(name) = bound.unknown_names(params).first() {
        return Err(TemporalError::UnexpectedArgument {
            name: name.to_string(),
        });
    }

    Ok(bound)
}

/// Log a constructor failure and hand the error back
pub(crate) fn report(constructor: &str, err: TemporalError) -> TemporalError {
    log_error!(err.error_code(), &err.to_string(), "constructor" => constructor);
    err
}

/// Integer field with a default; integral numbers and booleans are accepted
pub(crate) fn int_field(
    bound: &BoundArgs<Value>,
    name: &str,
    default: i64,
) -> Result<i64, TemporalError> {
    match bound.get(name) {
        None => Ok(default),
        Some(value) => to_integer(name, value),
    }
}

pub(crate) fn to_integer(name: &str, value: &Value) -> Result<i64, TemporalError> {
    match value {
        Value::Bool(flag) => Ok(i64::from(*flag)),
        Value::Number(number) => {
            // i64::MAX is not representable; the bound is exclusive
            let in_range = *number >= i64::MIN as f64 && *number < i64::MAX as f64;
            if number.fract() == 0.0 && in_range {
                Ok(*number as i64)
            } else {
                Err(TemporalError::NotIntegral {
                    name: name.to_string(),
                })
            }
        }
        other => Err(TemporalError::InvalidArgumentType {
            name: name.to_string(),
            expected: "int",
            found: other.type_name(),
        }),
    }
}

/// Sum of several optional integer fields, each defaulting to zero
pub(crate) fn summed_field(
    bound: &BoundArgs<Value>,
    names: &[&str],
    field: &'static str,
) -> Result<i64, TemporalError> {
    names.iter().try_fold(0i64, |total, name| {
        total
            .checked_add(int_field(bound, name, 0)?)
            .ok_or(TemporalError::OutOfRange { field })
    })
}
