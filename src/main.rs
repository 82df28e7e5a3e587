//! tabula - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tabula::config::{CliOverrides, SortSpec};
use tabula::model::AppError;
use tracing::{info, warn};

/// tabula - page through a JSONL file as a sortable, selectable table
#[derive(Parser, Debug)]
#[command(name = "tabula")]
#[command(version)]
#[command(about = "Server-driven table viewer for JSONL files")]
pub struct Args {
    /// Path to JSONL file, one object per line
    pub file: PathBuf,

    /// Rows per page at startup
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..=10_000))]
    pub page_size: Option<u64>,

    /// Columns to show, in order (defaults to the fields of the first record)
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Columns pinned to the left edge
    #[arg(long, value_delimiter = ',')]
    pub pin_left: Vec<String>,

    /// Columns pinned to the right edge
    #[arg(long, value_delimiter = ',')]
    pub pin_right: Vec<String>,

    /// Initial sort, as `column` or `column:asc|desc`
    #[arg(short, long)]
    pub sort: Option<SortSpec>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            page_size: self.page_size.map(|n| n as usize),
            columns: self.columns.clone(),
            pin_left: self.pin_left.clone(),
            pin_right: self.pin_right.clone(),
            sort: self.sort.clone(),
        }
    }

    /// File name shown in the status bar.
    fn source_label(&self) -> String {
        self.file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.display().to_string())
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        // 1. Load config file (or None if missing)
        let config_file = tabula::config::load_config_with_precedence(args.config.clone())?;

        // 2. Merge with defaults
        let merged = tabula::config::merge_config(config_file);

        // 3. Apply environment variable overrides
        let with_env = tabula::config::apply_env_overrides(merged)?;

        // 4. Apply CLI argument overrides, then check the result as a whole
        let with_cli = tabula::config::apply_cli_overrides(with_env, args.overrides());
        tabula::config::validate(with_cli)?
    };

    tabula::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let source = tabula::source::JsonlSource::load(&args.file, config.key_field.as_deref())?;
    if source.skipped() > 0 {
        warn!(
            skipped = source.skipped(),
            file = %args.file.display(),
            "Some lines were not JSON objects"
        );
    }

    let cli_args =
        tabula::view::CliArgs::new(args.source_label(), config.narrow_width, args.no_color);

    tabula::view::run_with_source(source, &config, cli_args)?;

    Ok(())
}
