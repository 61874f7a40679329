//! One report pass: fetch rows, filter by day label, validate, aggregate,
//! display. Runs to completion once per invocation; nothing is shared
//! between runs.

use chrono::{Local, NaiveDate};

use crate::cli::{Cli, Mode};
use crate::core::{
    Entry, aggregate_entries, dates, entries_matching, has_mixed_dates,
};
use crate::error::AppError;
use crate::output::{EntryTableOptions, entry_table, output_report_json, print_total_line};
use crate::source::{RowSource, SnapshotSource};
use crate::utils::parse_date;

/// Day labels the given mode filters on
pub(crate) fn labels_for(mode: Mode, reference: NaiveDate) -> Vec<String> {
    match mode {
        Mode::Today => vec![dates::day_label(reference)],
        Mode::Yesterday => vec![dates::day_label(dates::yesterday(reference))],
        Mode::Week => dates::week_labels(reference),
    }
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let reference = match &cli.date {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let source = SnapshotSource::new(cli.input.clone());
    let mode = Mode::from(&cli.command);
    run_report(&source, mode, reference, cli)
}

pub(crate) fn run_report(
    source: &dyn RowSource,
    mode: Mode,
    reference: NaiveDate,
    cli: &Cli,
) -> Result<(), AppError> {
    let labels = labels_for(mode, reference);
    let snapshot = source.rows()?;

    if cli.debug {
        eprintln!("[DEBUG] Snapshot rows: {}", snapshot.rows.len());
        eprintln!("[DEBUG] Skipped lines: {}", snapshot.skipped);
        eprintln!("[DEBUG] Date labels: {:?}", labels);
    }

    let entries: Vec<Entry> = snapshot
        .rows
        .iter()
        .map(|row| Entry::from_cells(row))
        .collect();
    let entries = entries_matching(entries, &labels);

    if cli.debug {
        eprintln!("[DEBUG] Matched entries: {}", entries.len());
    }

    if mode.requires_uniform_dates() && has_mixed_dates(&entries) {
        // Dump every field of the offending entries before aborting
        let opts = EntryTableOptions {
            full: true,
            use_color: false,
        };
        if let Some(table) = entry_table(&entries, opts) {
            eprintln!("{table}");
        }
        return Err(AppError::MixedDates {
            label: labels[0].clone(),
        });
    }

    let total = aggregate_entries(&entries)?;

    if cli.json {
        output_report_json(mode, reference, &labels, &entries, total);
        return Ok(());
    }

    let Some(total) = total else {
        println!(
            "No entries matched {} (labels {}).",
            mode.as_str(),
            labels.join(" ")
        );
        return Ok(());
    };

    let opts = EntryTableOptions {
        full: cli.full,
        use_color: cli.use_color(),
    };
    if let Some(table) = entry_table(&entries, opts) {
        println!("{table}");
    }
    print_total_line(total, cli.use_color());

    Ok(())
}
