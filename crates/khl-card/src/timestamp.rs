//! `YYYY-MM-DD HH:MM:SS` wall-clock strings to epoch milliseconds.

use chrono::{Local, LocalResult, NaiveDateTime, TimeZone};

use crate::error::{Result, ValidationError, reject};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reads `input` as a wall-clock time in `tz`. Times repeated by a DST
/// fall-back resolve to the earlier instant; skipped times are rejected.
pub fn parse_timestamp<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<i64> {
    let naive = NaiveDateTime::parse_from_str(input.trim(), TIMESTAMP_FORMAT)
        .map_err(|err| reject(ValidationError::timestamp(input, err)))?;
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(at) => Ok(at.timestamp_millis()),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.timestamp_millis()),
        LocalResult::None => Err(reject(ValidationError::timestamp(
            input,
            "time does not exist in this time zone",
        ))),
    }
}

pub fn parse_local_timestamp(input: &str) -> Result<i64> {
    parse_timestamp(input, &Local)
}
