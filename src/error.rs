use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid duration \"{input}\" (expected hours and minutes like \"1h 30m\")")]
    InvalidDuration { input: String },

    #[error("Matched entries carry more than one date label (expected all \"{label}\")")]
    MixedDates { label: String },

    #[error("Failed to read snapshot {path}: {source}")]
    Snapshot {
        path: String,
        source: std::io::Error,
    },
}
