//! FORM & VOID - a terminal browser for a small design archive
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use tracing::info;

use formvoid_app::config::{init_config_dir, load_catalog, load_settings, FORMVOID_DIR};
use formvoid_app::AppState;
use formvoid_core::logging;

/// FORM & VOID - browse the archive by category or by how you feel
#[derive(Parser, Debug)]
#[command(name = "formvoid")]
#[command(about = "A terminal browser for the FORM & VOID design archive", long_about = None)]
struct Args {
    /// Directory holding `.formvoid/` (defaults to the current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Run in headless mode (stdin commands, NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Write default config and catalog files, then exit
    #[arg(long, conflicts_with = "headless")]
    init: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let project_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        init_config_dir(&project_path)
            .wrap_err_with(|| format!("cannot initialize {}", project_path.display()))?;
        eprintln!(
            "Wrote default configuration to {}",
            project_path.join(FORMVOID_DIR).display()
        );
        return Ok(());
    }

    logging::init().wrap_err("cannot set up logging")?;
    info!("Starting formvoid in {}", project_path.display());
    if let Ok(log_file) = logging::get_current_log_file() {
        info!("Logging to {}", log_file.display());
    }

    let settings = load_settings(&project_path);
    let catalog = load_catalog(&project_path, &settings).wrap_err("cannot load the catalog")?;
    let state = AppState::with_settings(project_path, settings, catalog);

    if args.headless {
        form_void::run_headless(state)?;
    } else {
        form_void::run_tui(state)?;
    }

    Ok(())
}
