//! # folder-size
//!
//! A CLI tool that reports the total size of a folder and how that size is
//! distributed across file extensions.
//!
//! ## Features
//!
//! - Recursive, best-effort scan: unreadable entries are skipped, not fatal
//! - Display in B, KB, MB, GB or TB (binary multipliers)
//! - Per-extension breakdown with percentages
//! - Totals restricted to chosen extensions
//! - JSON output for scripting
//! - Persistent configuration via `~/.config/folder-size/config.toml`
//!
//! ## Usage
//!
//! ```bash
//! # Size of the current directory in MB
//! folder-size
//!
//! # Size of a project in KB with the extension breakdown
//! folder-size ~/Projects/app --unit KB --detail
//!
//! # Only Python sources
//! folder-size --ext .py --ext .pyw
//! ```

mod cli;

use std::{
    path::{Component, Path, PathBuf},
    process::exit,
};

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use folder_size::{
    config::FileConfig,
    model::{ExtensionFilter, ScanResult},
    output::{JsonFilteredOutput, JsonOutput},
    report::{format_distribution, print_distribution},
    scanner::Scanner,
    utils::{SizeUnit, convert, format_auto},
};

/// Entry point for the folder-size application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Resolves arguments against the config file, scans the folder and prints
/// either the human-readable summary or a JSON document.
///
/// # Errors
///
/// Returns errors for an invalid configured unit, a root folder that cannot be
/// scanned, or JSON serialization failures.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let json_mode = args.json();
    let file_config = load_config(json_mode);

    let unit = args.unit(&file_config)?;
    let dir = args.directory(&file_config);
    let detail = args.detail(&file_config);
    let scanner = Scanner::new(args.scan_options(&file_config)).with_quiet(json_mode);
    let display_path = absolute_path(&dir);

    if let Some(filter) = args.extension_filter() {
        if filter.is_empty() {
            bail!("--ext needs at least one non-empty extension");
        }

        let total = scanner.scan_filtered(&dir, &filter)?;
        return print_filtered(&display_path, unit, &filter, total, json_mode);
    }

    let result = scanner.scan(&dir)?;
    let rows = format_distribution(&result.distribution, unit);

    if json_mode {
        let output = JsonOutput::from_scan(&display_path, unit, &result, &rows);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_summary(&display_path, unit, &result);

    if detail && !rows.is_empty() {
        print_distribution(&rows, unit);
    }

    Ok(())
}

// ── Helper functions ────────────────────────────────────────────────────

/// Absolute form of `path` for display; falls back to the path as given.
///
/// `.` and `..` are resolved lexically, so symlinks in the path are kept.
fn absolute_path(path: &Path) -> PathBuf {
    let Ok(absolute) = std::path::absolute(path) else {
        return path.to_path_buf();
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Print the folder, its total size and the file counters.
fn print_summary(path: &Path, unit: SizeUnit, result: &ScanResult) {
    println!("Folder: {}", path.display());
    println!(
        "Total Size: {} {unit} {}",
        format!("{:.2}", convert(result.total_bytes, unit))
            .bright_white()
            .bold(),
        format!("({})", format_auto(result.total_bytes)).dimmed()
    );

    if result.skipped > 0 {
        println!(
            "Files: {} ({})",
            result.file_count,
            format!("{} entries skipped, use --verbose to list them", result.skipped).yellow()
        );
    } else {
        println!("Files: {}", result.file_count);
    }
}

/// Print the total of a filtered scan in JSON or human-readable form.
fn print_filtered(
    path: &Path,
    unit: SizeUnit,
    filter: &ExtensionFilter,
    total: u64,
    json_mode: bool,
) -> Result<()> {
    if json_mode {
        let output = JsonFilteredOutput::from_total(path, unit, filter, total);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Folder: {}", path.display());
    println!(
        "Total Size ({}): {} {unit} {}",
        filter.suffixes().join(", "),
        format!("{:.2}", convert(total, unit)).bright_white().bold(),
        format!("({})", format_auto(total)).dimmed()
    );

    Ok(())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# folder-size configuration
# All values shown are their defaults. Uncomment and change as needed.

# Default folder to analyze (defaults to current directory when not set)
# dir = "."

# Display unit: B, KB, MB, GB, TB
# unit = "MB"

# Always print the per-extension breakdown
# detail = false

[scanning]
# List entries that could not be read
# verbose = false

# Directory names to leave out of the scan
# skip = []
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_paths(val: Option<&[PathBuf]>) -> String {
        match val {
            Some(v) if !v.is_empty() => {
                let items: Vec<String> = v.iter().map(|p| format!("\"{}\"", p.display())).collect();
                format!("[{}]", items.join(", "))
            }
            _ => "[]  (default)".to_string(),
        }
    }

    let dir_str = config.dir.as_ref().map_or_else(
        || "\".\"  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );
    let unit_str = config.unit.as_deref().map_or_else(
        || format!("\"{}\"  (default)", SizeUnit::default()),
        |v| format!("\"{v}\""),
    );

    format!(
        "\
dir     = {dir}
unit    = {unit}
detail  = {detail}

[scanning]
verbose = {verbose}
skip    = {skip}",
        dir = dir_str,
        unit = unit_str,
        detail = show_bool(config.detail, false),
        verbose = show_bool(config.scanning.verbose, false),
        skip = show_paths(config.scanning.skip.as_deref()),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        std::result::Result::Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_template_parses() {
        let config: FileConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert!(config.dir.is_none());
        assert!(config.unit.is_none());
    }

    #[test]
    fn test_format_config_defaults() {
        let text = format_config(&FileConfig::default());

        assert!(text.contains("unit    = \"MB\"  (default)"));
        assert!(text.contains("detail  = false  (default)"));
        assert!(text.contains("skip    = []  (default)"));
    }

    #[test]
    fn test_format_config_values() {
        let config: FileConfig =
            toml::from_str("unit = \"GB\"\n[scanning]\nskip = [\"target\"]\n").unwrap();
        let text = format_config(&config);

        assert!(text.contains("unit    = \"GB\""));
        assert!(text.contains("skip    = [\"target\"]"));
    }

    #[test]
    fn test_absolute_path_of_relative_input() {
        let abs = absolute_path(Path::new("some/relative"));
        assert!(abs.is_absolute());
        assert!(abs.ends_with("some/relative"));
    }

    #[test]
    fn test_absolute_path_resolves_parent_components() {
        let cwd = std::env::current_dir().unwrap();
        let expected = cwd.parent().unwrap_or(&cwd).join("x");

        assert_eq!(absolute_path(Path::new("../x")), expected);
        assert_eq!(absolute_path(Path::new("./a/../x/.")), cwd.join("x"));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_path_never_climbs_above_root() {
        assert_eq!(absolute_path(Path::new("/../tmp/../../y")), PathBuf::from("/y"));
    }
}
