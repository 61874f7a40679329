//! Snapshot input boundary
//!
//! Rows come from an export of the tracker's rendered table, one row per
//! line. The aggregation pipeline only sees `RowSource`, so tests can feed
//! it in-memory rows.

pub(crate) mod snapshot;

pub(crate) use snapshot::SnapshotSource;

use crate::error::AppError;

/// One table row: its cell texts in document order
/// (task, project, date, duration).
pub(crate) type RawRow = Vec<String>;

#[derive(Debug, Default)]
pub(crate) struct Snapshot {
    pub(crate) rows: Vec<RawRow>,
    /// Lines that were present but did not parse as a row
    pub(crate) skipped: i64,
}

pub(crate) trait RowSource {
    /// Read all rows fresh; nothing is cached between invocations.
    fn rows(&self) -> Result<Snapshot, AppError>;
}
