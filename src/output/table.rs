use comfy_table::{Cell, Table};

use crate::core::{DurationTotal, Entry};
use crate::output::format::{create_styled_table, header_cell, right_cell};

#[derive(Debug, Clone, Copy)]
pub(crate) struct EntryTableOptions {
    /// Add date, project, and task columns next to the duration
    pub(crate) full: bool,
    pub(crate) use_color: bool,
}

/// Build the entry listing table. Returns `None` for an empty entry list,
/// which prints nothing rather than an empty frame.
pub(crate) fn entry_table(entries: &[Entry], opts: EntryTableOptions) -> Option<Table> {
    if entries.is_empty() {
        return None;
    }

    let mut table = create_styled_table();

    let mut header = vec![header_cell("Duration", opts.use_color)];
    if opts.full {
        header.extend([
            header_cell("Date", opts.use_color),
            header_cell("Project", opts.use_color),
            header_cell("Task", opts.use_color),
        ]);
    }
    table.set_header(header);

    for entry in entries {
        let mut row = vec![right_cell(&entry.duration, None, false)];
        if opts.full {
            row.extend([
                right_cell(&entry.date_label, None, false),
                Cell::new(&entry.project),
                Cell::new(&entry.task),
            ]);
        }
        table.add_row(row);
    }

    Some(table)
}

/// Print the total line, bold cyan when color is on
pub(crate) fn print_total_line(total: DurationTotal, use_color: bool) {
    if use_color {
        println!("\nHours worked: \x1b[1;36m{total}\x1b[0m");
    } else {
        println!("\nHours worked: {total}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date_label: &str, duration: &str) -> Entry {
        Entry {
            task: "Fix login".to_string(),
            project: "Acme".to_string(),
            date_label: date_label.to_string(),
            duration: duration.to_string(),
        }
    }

    #[test]
    fn empty_entries_render_no_table() {
        let opts = EntryTableOptions {
            full: false,
            use_color: false,
        };
        assert!(entry_table(&[], opts).is_none());
    }

    #[test]
    fn default_table_has_only_the_duration_column() {
        let opts = EntryTableOptions {
            full: false,
            use_color: false,
        };
        let table = entry_table(&[entry("5.", "1h 30m")], opts).unwrap();
        let rendered = table.to_string();
        assert!(rendered.contains("Duration"));
        assert!(rendered.contains("1h 30m"));
        assert!(!rendered.contains("Acme"));
    }

    #[test]
    fn full_table_shows_all_fields() {
        let opts = EntryTableOptions {
            full: true,
            use_color: false,
        };
        let table = entry_table(&[entry("5.", "1h 30m")], opts).unwrap();
        let rendered = table.to_string();
        assert!(rendered.contains("Date"));
        assert!(rendered.contains("5."));
        assert!(rendered.contains("Acme"));
        assert!(rendered.contains("Fix login"));
    }
}
