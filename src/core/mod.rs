pub(crate) mod aggregator;
pub(crate) mod dates;
pub(crate) mod duration;
pub(crate) mod types;

pub(crate) use aggregator::{aggregate_entries, entries_matching, has_mixed_dates};
pub(crate) use types::{DurationTotal, Entry};
