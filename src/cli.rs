//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments using the
//! [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use folder_size::config::ScanOptions;
use folder_size::config::file::{FileConfig, expand_tilde};
use folder_size::error::UnitError;
use folder_size::model::ExtensionFilter;
use folder_size::utils::SizeUnit;

/// Command-line arguments controlling what is printed.
#[derive(Parser)]
struct OutputArgs {
    /// Display unit for sizes
    ///
    /// All sizes are converted with binary multipliers (1 KB = 1024 bytes).
    /// Defaults to MB.
    #[arg(short = 'u', long, value_enum, ignore_case = true)]
    unit: Option<SizeUnit>,

    /// Show the size breakdown per file extension
    #[arg(short = 'd', long)]
    detail: bool,

    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, all human-readable output (colors, progress spinner)
    /// is suppressed and a single JSON document is printed to stdout.
    #[arg(long)]
    json: bool,
}

/// Command-line arguments for controlling directory scanning behavior.
#[derive(Parser)]
struct ScanningArgs {
    /// Show access errors that occur while scanning
    ///
    /// Entries that cannot be read are always left out of the totals; this
    /// flag lists them on stderr.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Directory names to leave out of the scan
    ///
    /// Any directory below the root with this exact name is not descended
    /// into. Can be specified multiple times.
    #[arg(long, action = clap::ArgAction::Append)]
    skip: Vec<PathBuf>,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser)]
#[command(name = "folder-size")]
#[command(about = "Report the size of a folder, broken down by file extension")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Folder to analyze (defaults to the current directory)
    path: Option<PathBuf>,

    /// Only count files ending with this extension
    ///
    /// Matching is a case-insensitive suffix match, so `.tar.gz` works. A
    /// missing leading dot is added. Can be specified multiple times. In
    /// this mode only the matching total is reported.
    #[arg(short = 'e', long = "ext", action = clap::ArgAction::Append)]
    extensions: Vec<String>,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.output.json
    }

    /// Resolve the folder to analyze.
    ///
    /// Priority: CLI argument > config file `dir` > current directory (`.`).
    /// Tilde expansion is applied to the config-file path.
    #[must_use]
    pub fn directory(&self, config: &FileConfig) -> PathBuf {
        if let Some(ref path) = self.path {
            return path.clone();
        }

        config
            .dir
            .as_ref()
            .map_or_else(|| PathBuf::from("."), |dir| expand_tilde(dir))
    }

    /// Resolve the display unit.
    ///
    /// Priority: CLI argument > config file > `MB`.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::Unknown`] when the unit comes from the config file
    /// and is not a supported symbol. Invalid CLI values are rejected by clap
    /// while parsing.
    pub fn unit(&self, config: &FileConfig) -> Result<SizeUnit, UnitError> {
        if let Some(unit) = self.output.unit {
            return Ok(unit);
        }

        Ok(config.unit()?.unwrap_or_default())
    }

    /// Whether to print the per-extension report (CLI flag `||` config value).
    #[must_use]
    pub fn detail(&self, config: &FileConfig) -> bool {
        self.output.detail || config.detail.unwrap_or(false)
    }

    /// The extension filter, when `--ext` was given at least once.
    #[must_use]
    pub fn extension_filter(&self) -> Option<ExtensionFilter> {
        if self.extensions.is_empty() {
            None
        } else {
            Some(ExtensionFilter::new(&self.extensions))
        }
    }

    /// Extract scanning options from CLI args and config file.
    ///
    /// - **verbose**: CLI flag `||` config value `||` `false`
    /// - **skip**: merged from both sources (config values first, then CLI)
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        let mut skip = config.scanning.skip.clone().unwrap_or_default();
        skip.extend(self.scanning.skip.clone());

        ScanOptions {
            verbose: self.scanning.verbose || config.scanning.verbose.unwrap_or(false),
            skip,
        }
    }
}
