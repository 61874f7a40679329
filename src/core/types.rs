use std::fmt;

/// One logged time record scraped from the tracker table.
///
/// Field values are snapshots of external UI state; nothing here is
/// validated beyond the position it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) task: String,
    pub(crate) project: String,
    /// Day-of-month label like "5." (month and year are not recorded)
    pub(crate) date_label: String,
    /// Free-text duration like "1h 30m"
    pub(crate) duration: String,
}

impl Entry {
    /// Build an entry from one snapshot row's cells, taken by position:
    /// task, project, date, duration. Missing cells read as empty strings.
    pub(crate) fn from_cells(cells: &[String]) -> Self {
        let cell = |idx: usize| cells.get(idx).cloned().unwrap_or_default();
        Entry {
            task: cell(0),
            project: cell(1),
            date_label: cell(2),
            duration: cell(3),
        }
    }
}

/// Summed hours and minutes across entries.
///
/// Raw summed minutes may exceed 59; `normalized` folds the overflow into
/// whole hours so displayed minutes stay in 0..=59.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DurationTotal {
    pub(crate) hours: u32,
    pub(crate) minutes: u32,
}

impl DurationTotal {
    pub(crate) fn add(&mut self, hours: u32, minutes: u32) {
        self.hours += hours;
        self.minutes += minutes;
    }

    pub(crate) fn normalized(self) -> DurationTotal {
        DurationTotal {
            hours: self.hours + self.minutes / 60,
            minutes: self.minutes % 60,
        }
    }
}

impl fmt::Display for DurationTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.normalized();
        write!(f, "{}h {}m", n.hours, n.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cells_takes_fields_by_position() {
        let cells = vec![
            "Fix login".to_string(),
            "Acme".to_string(),
            "5.".to_string(),
            "1h 30m".to_string(),
        ];
        let entry = Entry::from_cells(&cells);
        assert_eq!(entry.task, "Fix login");
        assert_eq!(entry.project, "Acme");
        assert_eq!(entry.date_label, "5.");
        assert_eq!(entry.duration, "1h 30m");
    }

    #[test]
    fn from_cells_missing_cells_read_empty() {
        let cells = vec!["Only task".to_string()];
        let entry = Entry::from_cells(&cells);
        assert_eq!(entry.task, "Only task");
        assert_eq!(entry.project, "");
        assert_eq!(entry.date_label, "");
        assert_eq!(entry.duration, "");
    }

    #[test]
    fn normalized_folds_minute_overflow_into_hours() {
        let total = DurationTotal {
            hours: 3,
            minutes: 75,
        };
        assert_eq!(
            total.normalized(),
            DurationTotal {
                hours: 4,
                minutes: 15
            }
        );
    }

    #[test]
    fn display_uses_normalized_minutes() {
        let total = DurationTotal {
            hours: 3,
            minutes: 75,
        };
        assert_eq!(total.to_string(), "4h 15m");
    }

    #[test]
    fn display_keeps_minutes_under_sixty() {
        for minutes in [0, 1, 59, 60, 61, 119, 600] {
            let total = DurationTotal { hours: 0, minutes };
            let n = total.normalized();
            assert!(n.minutes < 60, "minutes {} normalized to {}", minutes, n.minutes);
        }
    }
}
