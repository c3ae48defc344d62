//! Human date references ("yesterday", "last friday", "2024-03-01")

use crate::error::{DaybookError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date expressed relative to some base day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Signed day offset, written `+3` or `-1`
    Offset(i64),
    /// Most recent occurrence, today included
    Weekday(Weekday),
    /// Strictly before the base day
    LastWeekday(Weekday),
    /// Strictly after the base day
    NextWeekday(Weekday),
    Date(NaiveDate),
}

impl TimeReference {
    /// Parse a time reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || DaybookError::InvalidTimeReference(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(TimeReference::Today),
            "yesterday" => return Ok(TimeReference::Yesterday),
            "tomorrow" => return Ok(TimeReference::Tomorrow),
            _ => {}
        }

        if let Some(rest) = normalized.strip_prefix("last ") {
            return parse_weekday(rest)
                .map(TimeReference::LastWeekday)
                .ok_or_else(invalid);
        }
        if let Some(rest) = normalized.strip_prefix("next ") {
            return parse_weekday(rest)
                .map(TimeReference::NextWeekday)
                .ok_or_else(invalid);
        }
        if let Some(weekday) = parse_weekday(&normalized) {
            return Ok(TimeReference::Weekday(weekday));
        }
        if normalized.starts_with('+') || normalized.starts_with('-') {
            if let Ok(days) = normalized.parse::<i64>() {
                return Ok(TimeReference::Offset(days));
            }
        }

        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&normalized, "%d-%m-%Y"))
            .map(TimeReference::Date)
            .map_err(|_| invalid())
    }

    /// Resolve this time reference against a base date.
    ///
    /// Returns `None` when the result falls outside the representable date range.
    pub fn resolve(&self, base: NaiveDate) -> Option<NaiveDate> {
        match self {
            TimeReference::Today => Some(base),
            TimeReference::Yesterday => shift(base, -1),
            TimeReference::Tomorrow => shift(base, 1),
            TimeReference::Offset(days) => shift(base, *days),
            TimeReference::Weekday(target) => shift(base, -days_back(base, *target)),
            TimeReference::LastWeekday(target) => {
                let back = days_back(base, *target);
                shift(base, -(if back == 0 { 7 } else { back }))
            }
            TimeReference::NextWeekday(target) => {
                let forward = (7 - days_back(base, *target)) % 7;
                shift(base, if forward == 0 { 7 } else { forward })
            }
            TimeReference::Date(date) => Some(*date),
        }
    }
}

/// Parse a time reference and resolve it in one step
pub fn resolve_date(input: &str, base: NaiveDate) -> Result<NaiveDate> {
    TimeReference::parse(input)?
        .resolve(base)
        .ok_or_else(|| DaybookError::InvalidTimeReference(input.to_string()))
}

/// `base` moved by a signed number of days, if still a valid date
pub fn shift(base: NaiveDate, days: i64) -> Option<NaiveDate> {
    Duration::try_days(days).and_then(|delta| base.checked_add_signed(delta))
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    // chrono also accepts "mon"; only full names are references here
    if name.len() < 6 {
        return None;
    }
    name.parse::<Weekday>().ok()
}

/// Days since the most recent `target`, in 0..7
fn days_back(base: NaiveDate, target: Weekday) -> i64 {
    let current = base.weekday().num_days_from_monday() as i64;
    let target = target.num_days_from_monday() as i64;
    (current - target).rem_euclid(7)
}
