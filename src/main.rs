//! folio - TUI viewer for portfolio timeline documents.

use clap::Parser;
use folio::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, load_saved_theme,
    merge_config,
};
use folio::logging;
use folio::source::DocumentSource;
use folio::view::styles::ColorConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// TUI viewer for portfolio timeline JSON documents.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Args {
    /// Portfolio document to view, or `-` for stdin.
    #[arg(default_value = "data/entries.json")]
    file: PathBuf,

    /// Theme to start with.
    #[arg(long, value_parser = ["light", "dark", "auto"])]
    theme: Option<String>,

    /// Path to a config file (default: ~/.config/folio/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory prefix for relative image references.
    #[arg(long)]
    images_dir: Option<String>,

    /// Start at the top of the timeline instead of the latest entry.
    #[arg(long)]
    top: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config_file = match load_config_with_precedence(args.config.clone()) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut config = merge_config(config_file);
    // A persisted toggle choice beats the config file; env and CLI still win.
    if let Some(saved) = load_saved_theme() {
        config.theme = saved;
    }
    config = apply_env_overrides(config);
    config = apply_cli_overrides(config, args.theme, args.images_dir, args.top);

    if let Err(e) = logging::init(&config.log_file_path) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }
    info!(?config, "Starting folio");

    let colors = ColorConfig::from_env_and_args(args.no_color);
    let source = DocumentSource::detect(args.file);

    match folio::view::run_with_source(source, config, colors) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
