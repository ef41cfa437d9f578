//! Retry-until-valid prompts.
//!
//! [`input_validated`] keeps asking until the raw line both converts and
//! validates, printing the same error message after every failed attempt.
//! A cancelled read (the console yields no line) returns `Ok(None)`, which
//! callers treat as "abandon this operation".

use crate::error::Result;
use crate::menu::console::{Console, Tone};
use std::convert::Infallible;
use std::num::ParseIntError;

pub fn input_validated<T, E>(
    console: &mut dyn Console,
    prompt: &str,
    mut convert: impl FnMut(&str) -> std::result::Result<T, E>,
    mut validate: impl FnMut(&T) -> bool,
    error_message: &str,
) -> Result<Option<T>> {
    loop {
        let Some(raw) = console.read_line(prompt)? else {
            return Ok(None);
        };
        match convert(&raw) {
            Ok(value) if validate(&value) => return Ok(Some(value)),
            _ => console.write_line(error_message, Tone::Error)?,
        }
    }
}

/// Trims surrounding whitespace.
pub fn convert_string(raw: &str) -> std::result::Result<String, Infallible> {
    Ok(raw.trim().to_string())
}

pub fn convert_int(raw: &str) -> std::result::Result<i64, ParseIntError> {
    raw.trim().parse()
}

pub fn convert_id(raw: &str) -> std::result::Result<u64, ParseIntError> {
    raw.trim().parse()
}

#[allow(clippy::ptr_arg)]
pub fn not_empty(value: &String) -> bool {
    !value.is_empty()
}

pub fn always<T>(_: &T) -> bool {
    true
}

/// Inclusive range check; `None` leaves that side unbounded.
pub fn int_range(min: Option<i64>, max: Option<i64>) -> impl Fn(&i64) -> bool {
    move |value| min.is_none_or(|m| m <= *value) && max.is_none_or(|m| *value <= m)
}
