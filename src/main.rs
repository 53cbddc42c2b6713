//! csvtally: merge per-folder CSV exports into deduplicated,
//! frequency-ranked reports.
//!
//! Thin binary entry point. All logic lives in the `csvtally-core` crate.

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use csvtally_core::model::{OutputNaming, Schema, DEFAULT_KEY};
use csvtally_core::pipeline::{self, PipelineConfig};
use csvtally_core::scaffold::{create_templates, DEFAULT_TEMPLATE_DIR};
use csvtally_core::scanner::FolderFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "csvtally",
    version,
    about = "Merge per-folder CSV exports into deduplicated, frequency-ranked reports",
    long_about = "Scans a directory tree for the five fixed export files \
                  ('1. Thirty Days.csv' .. '5. All.csv'), merges each set column-wise, \
                  collapses duplicate titles while counting them and writes one ranked \
                  CSV per file into an output folder.\n\n\
                  Example usage:\n  \
                  csvtally run ./companies --filter Google,Amazon"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log per-file detail
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Collect, merge, deduplicate and rank every pattern
    Run(RunArgs),
    /// Create a folder of header-only template files
    Init {
        /// Folder to create
        #[arg(default_value = DEFAULT_TEMPLATE_DIR)]
        dir: PathBuf,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Comma-separated folder names, or a file with one name per line
    #[arg(short, long, value_name = "LIST|FILE")]
    filter: Option<String>,

    /// Destination folder (default: master_folder, or filtered_folder with --filter)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Output file naming convention
    #[arg(long, value_enum, default_value = "final")]
    naming: Naming,

    /// Column used to deduplicate rows
    #[arg(long, default_value = DEFAULT_KEY)]
    key: String,

    /// Comma-separated output column list (default: the six export columns)
    #[arg(long, value_delimiter = ',')]
    columns: Vec<String>,

    /// Format of the run summary printed to stdout
    #[arg(long, value_enum, default_value = "text")]
    summary: SummaryFormat,
}

/// Output file naming convention
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Naming {
    /// `<basename>_final.csv`
    Final,
    /// `<basename>.csv`
    Plain,
}

impl From<Naming> for OutputNaming {
    fn from(n: Naming) -> Self {
        match n {
            Naming::Final => OutputNaming::Final,
            Naming::Plain => OutputNaming::Plain,
        }
    }
}

/// Run summary format
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SummaryFormat {
    /// Human-readable table
    Text,
    /// Machine-readable JSON
    Json,
}

fn run(args: RunArgs) -> anyhow::Result<()> {
    let filter = args
        .filter
        .as_deref()
        .map(FolderFilter::from_arg)
        .transpose()
        .context("Invalid folder filter")?;

    let schema = if args.columns.is_empty() {
        Schema::default().with_key(args.key)
    } else {
        Schema::new(args.columns, args.key)
    };

    let config = PipelineConfig::new(&args.root)
        .with_filter(filter)
        .with_output_dir(args.output_dir)
        .with_naming(args.naming.into())
        .with_schema(schema);

    let report = pipeline::run(config)
        .with_context(|| format!("Failed to process '{}'", args.root.display()))?;

    match args.summary {
        SummaryFormat::Text => println!("{report}"),
        SummaryFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.files_skipped() > 0 {
        tracing::warn!("{} source file(s) skipped; see warnings above", report.files_skipped());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr so stdout carries only the summary.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Run(args) => run(args),
        Command::Init { dir } => {
            let written = create_templates(&dir, &Schema::default())
                .with_context(|| format!("Failed to create templates in '{}'", dir.display()))?;
            println!("Created directory '{}' with {} CSV files.", dir.display(), written.len());
            Ok(())
        }
    }
}
