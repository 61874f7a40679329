//! Entry filtering and duration summation
//!
//! One linear pass per invocation: filter rows by day label, sanity-check
//! date homogeneity in single-day modes, then sum the duration cells.

use crate::core::duration::parse_duration;
use crate::core::types::{DurationTotal, Entry};
use crate::error::AppError;

/// Keep entries whose date cell contains one of the given day labels.
///
/// Substring match, like the tracker scrape it replaces: a label "5." also
/// hits a "15." cell, which is why single-day modes run `has_mixed_dates`
/// on the result. Preserves input order; empty output is not an error.
pub(crate) fn entries_matching(entries: Vec<Entry>, labels: &[String]) -> Vec<Entry> {
    entries
        .into_iter()
        .filter(|entry| labels.iter().any(|label| entry.date_label.contains(label.as_str())))
        .collect()
}

/// Sum the duration cells of all entries.
///
/// Returns `Ok(None)` for an empty sequence. An unparseable duration cell
/// aborts with an error naming the offending text.
pub(crate) fn aggregate_entries(entries: &[Entry]) -> Result<Option<DurationTotal>, AppError> {
    if entries.is_empty() {
        return Ok(None);
    }

    let mut total = DurationTotal::default();
    for entry in entries {
        let (hours, minutes) = parse_duration(&entry.duration)?;
        total.add(hours, minutes);
    }
    Ok(Some(total))
}

/// True if any entry's date label differs from the first entry's.
///
/// Guards against the filter admitting mismatched rows (month-boundary
/// ambiguity, since only day-of-month is compared). False for empty input.
pub(crate) fn has_mixed_dates(entries: &[Entry]) -> bool {
    let Some(first) = entries.first() else {
        return false;
    };
    entries
        .iter()
        .any(|entry| entry.date_label != first.date_label)
}
