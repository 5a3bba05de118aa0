use chrono::{NaiveDateTime, TimeDelta};
use std::time::Duration;

/// Format of block and head timestamps returned by the node (UTC, no zone suffix).
pub const BASE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(thiserror::Error, Debug)]
pub enum BlockTimeError {
    #[error("Invalid timestamp: {0}")]
    InvalidFormat(#[from] chrono::ParseError),
    #[error("Timestamp {timestamp} plus {times} x {interval:?} is out of range")]
    OutOfRange {
        timestamp: String,
        interval: Duration,
        times: u32,
    },
}

pub fn parse(timestamp: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(timestamp, BASE_FORMAT)
}

pub fn format(timestamp: NaiveDateTime) -> String {
    timestamp.format(BASE_FORMAT).to_string()
}

/// Whole-second chrono delta for a production interval, if it fits.
pub fn interval_delta(interval: Duration) -> Option<TimeDelta> {
    i64::try_from(interval.as_secs())
        .ok()
        .and_then(TimeDelta::try_seconds)
}

/// Returns `timestamp` moved forward by `times` production intervals.
pub fn advance(timestamp: &str, interval: Duration, times: u32) -> Result<String, BlockTimeError> {
    let start = parse(timestamp)?;
    let advanced = interval_delta(interval)
        .zip(i32::try_from(times).ok())
        .and_then(|(step, times)| step.checked_mul(times))
        .and_then(|step| start.checked_add_signed(step))
        .ok_or_else(|| BlockTimeError::OutOfRange {
            timestamp: timestamp.to_string(),
            interval,
            times,
        })?;
    Ok(format(advanced))
}
