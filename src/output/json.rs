use chrono::NaiveDate;

use crate::cli::Mode;
use crate::core::{DurationTotal, Entry};

/// Print the report as pretty JSON. `total` is null when nothing matched.
pub(crate) fn output_report_json(
    mode: Mode,
    reference: NaiveDate,
    labels: &[String],
    entries: &[Entry],
    total: Option<DurationTotal>,
) {
    let entries_json: Vec<serde_json::Value> = entries
        .iter()
        .map(|entry| {
            serde_json::json!({
                "task": entry.task,
                "project": entry.project,
                "date": entry.date_label,
                "duration": entry.duration,
            })
        })
        .collect();

    let total_json = match total {
        Some(total) => {
            let n = total.normalized();
            serde_json::json!({
                "hours": n.hours,
                "minutes": n.minutes,
                "display": total.to_string(),
            })
        }
        None => serde_json::Value::Null,
    };

    let report = serde_json::json!({
        "mode": mode.as_str(),
        "date": reference.format("%Y-%m-%d").to_string(),
        "labels": labels,
        "entries": entries_json,
        "total": total_json,
    });

    println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
}
