mod format;
mod json;
mod table;

pub(crate) use json::output_report_json;
pub(crate) use table::{EntryTableOptions, entry_table, print_total_line};
