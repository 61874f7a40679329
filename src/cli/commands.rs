//! CLI subcommand definitions
//!
//! Defines the report modes and their normalized form.

use clap::Subcommand;

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sum entries logged today (default)
    Today,
    /// Sum entries logged yesterday
    Yesterday,
    /// Sum entries from Monday through today
    Week,
}

/// Normalized report mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Today,
    Yesterday,
    Week,
}

impl Mode {
    /// Single-day modes require every matched entry to share one date label
    pub(crate) fn requires_uniform_dates(self) -> bool {
        matches!(self, Mode::Today | Mode::Yesterday)
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Mode::Today => "today",
            Mode::Yesterday => "yesterday",
            Mode::Week => "week",
        }
    }
}

impl From<&Option<Commands>> for Mode {
    fn from(cmd: &Option<Commands>) -> Self {
        match cmd {
            Some(Commands::Today) | None => Mode::Today,
            Some(Commands::Yesterday) => Mode::Yesterday,
            Some(Commands::Week) => Mode::Week,
        }
    }
}
