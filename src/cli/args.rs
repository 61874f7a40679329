//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "hourtally")]
#[command(about = "Sum logged hours from a time-tracker table export", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Snapshot file with one JSON row per line (default: stdin)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub(crate) input: Option<PathBuf>,

    /// Reference date instead of today (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true, value_name = "DATE")]
    pub(crate) date: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Show date, project, and task columns in the entry table
    #[arg(short, long, global = true)]
    pub(crate) full: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (show processing details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.full && config.full {
            self.full = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color {
            if self.color == ColorMode::Auto {
                // Only override if CLI is at default
                self.color = match color {
                    ConfigColorMode::Auto => ColorMode::Auto,
                    ConfigColorMode::Always => ColorMode::Always,
                    ConfigColorMode::Never => ColorMode::Never,
                };
            }
        }

        if self.input.is_none() {
            self.input = config.input.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
