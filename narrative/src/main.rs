//! Narrative descriptor CLI.
//!
//! Reads the `*.narrative` file describing a directory (or every directory of
//! a hierarchy) and prints it as JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use narrative::core::issues::PatternIssueScanner;
use narrative::exit_codes;
use narrative::io::config::{DEFAULT_CONFIG_FILE, NarrativeConfig, load_config, write_config};
use narrative::io::loader::NarrativeLoader;
use narrative::logging;
use narrative::tree::scan_tree;

#[derive(Parser)]
#[command(
    name = "narrative",
    version,
    about = "Read narrative descriptors from a directory tree"
)]
struct Cli {
    /// Loader configuration (TOML). Defaults apply when the file is missing.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default loader configuration to `--config`.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the narrative of one directory as JSON.
    Show {
        /// Directory containing a `*.narrative` file.
        dir: PathBuf,
    },
    /// Report problems with a directory's narrative (unreadable, ambiguous).
    Check {
        /// Directory to check.
        dir: PathBuf,
    },
    /// Print every narrative found below a root directory as JSON.
    Scan {
        /// Root of the hierarchy.
        root: PathBuf,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Show { dir } => cmd_show(&build_loader(&cli.config)?, &dir),
        Command::Check { dir } => cmd_check(&build_loader(&cli.config)?, &dir),
        Command::Scan { root } => cmd_scan(&build_loader(&cli.config)?, &root),
    }
}

fn cmd_init(config_path: &Path, force: bool) -> Result<i32> {
    if !force && config_path.exists() {
        println!("kept existing {}", config_path.display());
        return Ok(exit_codes::OK);
    }
    write_config(config_path, &NarrativeConfig::default())
        .with_context(|| format!("write {}", config_path.display()))?;
    println!("wrote {}", config_path.display());
    Ok(exit_codes::OK)
}

fn build_loader(config_path: &Path) -> Result<NarrativeLoader<PatternIssueScanner>> {
    let cfg = load_config(config_path).context("load config")?;
    let scanner = cfg.scanner()?;
    Ok(NarrativeLoader::with_options(scanner, cfg.body_options()))
}

fn cmd_show(loader: &NarrativeLoader<PatternIssueScanner>, dir: &Path) -> Result<i32> {
    match loader.try_load_from(dir)? {
        Some(narrative) => {
            print_json(&narrative)?;
            Ok(exit_codes::OK)
        }
        None => {
            eprintln!("no narrative file in {}", dir.display());
            Ok(exit_codes::NOT_FOUND)
        }
    }
}

fn cmd_check(loader: &NarrativeLoader<PatternIssueScanner>, dir: &Path) -> Result<i32> {
    let inspection = loader.inspect(dir);
    for diagnostic in &inspection.diagnostics {
        println!("{diagnostic}");
    }
    if !inspection.diagnostics.is_empty() {
        return Ok(exit_codes::INVALID);
    }
    match inspection.narrative {
        Some(narrative) => println!("ok: {} narrative", narrative.kind()),
        None => println!("ok: no narrative"),
    }
    Ok(exit_codes::OK)
}

fn cmd_scan(loader: &NarrativeLoader<PatternIssueScanner>, root: &Path) -> Result<i32> {
    let entries = scan_tree(root, loader)?;
    print_json(&entries)?;
    Ok(exit_codes::OK)
}

/// Print `value` as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{payload}");
    Ok(())
}
