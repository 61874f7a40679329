//! Day-of-month labels
//!
//! The tracker's date cells carry only a day-of-month label like "5.",
//! no month or year. Filtering works on those labels.

use chrono::{Datelike, Duration, NaiveDate};

pub(crate) fn day_label(date: NaiveDate) -> String {
    format!("{}.", date.day())
}

pub(crate) fn yesterday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(1)
}

/// Monday of the week containing `date` (a Sunday belongs to the week
/// started six days earlier)
pub(crate) fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Labels for the most recent Monday through `today`, inclusive
pub(crate) fn week_labels(today: NaiveDate) -> Vec<String> {
    week_start(today)
        .iter_days()
        .take_while(|d| *d <= today)
        .map(day_label)
        .collect()
}
