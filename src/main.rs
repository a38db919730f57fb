use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use astdeps::core::config::{DEFAULT_MAX_FILE_BYTES, DEFAULT_TOP_EMITTERS};
use astdeps::core::{DependencyAnalyzer, ScanConfig};
use astdeps::formatters::JsonReportFormatter;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "astdeps",
    version,
    about = "Extract include/import dependency graphs from a mixed-language source tree"
)]
struct Cli {
    /// Repository root to scan
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    root: PathBuf,

    /// Path for the detailed graph JSON output
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "docs/analysis/ast_dependency_graphs.json"
    )]
    output: PathBuf,

    /// Path for the summary statistics JSON output
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "docs/analysis/ast_dependency_summary.json"
    )]
    summary: PathBuf,

    /// Directory name to omit at any depth (repeatable, added to the defaults)
    #[arg(long, value_name = "DIR")]
    omit: Vec<String>,

    /// Do not omit .git, build, _build and third_party
    #[arg(long)]
    no_default_omit: bool,

    /// Files larger than this are counted but not parsed
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_FILE_BYTES)]
    max_file_bytes: u64,

    /// Worker threads for extraction (defaults to one per core)
    #[arg(short = 'j', long, value_name = "N")]
    threads: Option<usize>,

    /// Number of heavy emitters listed per language
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_EMITTERS)]
    top: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        root,
        output,
        summary,
        omit,
        no_default_omit,
        max_file_bytes,
        threads,
        top,
        verbose: _,
    } = cli;

    let base = if no_default_omit {
        ScanConfig::without_omit()
    } else {
        ScanConfig::default()
    };
    let mut config = base.with_omit(omit).with_max_file_bytes(max_file_bytes);
    if let Some(threads) = threads {
        config = config.with_threads(threads);
    }

    let root = root
        .canonicalize()
        .with_context(|| format!("cannot resolve scan root {}", root.display()))?;
    let analyzer = DependencyAnalyzer::new(config);
    let result = analyzer.analyze(&root)?;

    let formatter = JsonReportFormatter::new().with_top_emitters(top);
    formatter.write_detailed(&result, &output)?;
    formatter.write_summary(&result, &summary)?;

    info!(
        output = %output.display(),
        summary = %summary.display(),
        "dependency reports written"
    );
    Ok(())
}
