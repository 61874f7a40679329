use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::error::AppError;
use crate::source::{RawRow, RowSource, Snapshot};

/// Line-oriented table export: one JSON array of cell strings per line.
///
/// Reads a file when a path is given, stdin otherwise. Blank lines are
/// ignored; lines that fail to parse are counted as skipped, never fatal.
pub(crate) struct SnapshotSource {
    path: Option<PathBuf>,
}

impl SnapshotSource {
    pub(crate) fn new(path: Option<PathBuf>) -> Self {
        SnapshotSource { path }
    }

    fn read_lines(reader: impl BufRead) -> Snapshot {
        let mut snapshot = Snapshot::default();

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => {
                    snapshot.skipped += 1;
                    continue;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<RawRow>(&line) {
                Ok(cells) => snapshot.rows.push(cells),
                Err(_) => snapshot.skipped += 1,
            }
        }

        snapshot
    }
}

impl RowSource for SnapshotSource {
    fn rows(&self) -> Result<Snapshot, AppError> {
        match &self.path {
            Some(path) => {
                let file = File::open(path).map_err(|e| AppError::Snapshot {
                    path: path.display().to_string(),
                    source: e,
                })?;
                Ok(Self::read_lines(BufReader::new(file)))
            }
            None => Ok(Self::read_lines(io::stdin().lock())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_one_row_per_line() {
        let input = "[\"Fix login\",\"Acme\",\"5.\",\"1h 30m\"]\n[\"Review\",\"Acme\",\"5.\",\"2h 45m\"]\n";
        let snapshot = SnapshotSource::read_lines(input.as_bytes());
        assert_eq!(snapshot.rows.len(), 2);
        assert_eq!(snapshot.skipped, 0);
        assert_eq!(snapshot.rows[0][3], "1h 30m");
    }

    #[test]
    fn blank_lines_are_ignored_bad_lines_are_counted() {
        let input = "\n[\"a\",\"b\",\"5.\",\"1h 0m\"]\nnot json\n   \n{\"task\":\"wrong shape\"}\n";
        let snapshot = SnapshotSource::read_lines(input.as_bytes());
        assert_eq!(snapshot.rows.len(), 1);
        assert_eq!(snapshot.skipped, 2);
    }

    #[test]
    fn short_rows_are_kept_as_is() {
        let input = "[\"only task\"]\n";
        let snapshot = SnapshotSource::read_lines(input.as_bytes());
        assert_eq!(snapshot.rows.len(), 1);
        assert_eq!(snapshot.rows[0].len(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let source = SnapshotSource::new(Some(PathBuf::from("/nonexistent/rows.jsonl")));
        assert!(source.rows().is_err());
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[\"a\",\"b\",\"5.\",\"1h 0m\"]").unwrap();
        let source = SnapshotSource::new(Some(file.path().to_path_buf()));
        let snapshot = source.rows().unwrap();
        assert_eq!(snapshot.rows.len(), 1);
    }
}
