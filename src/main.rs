use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use deal_sync::classifier::builtin::builtin_spec;
use deal_sync::classifier::Classifier;
use deal_sync::config::{load_config, AppConfig};
use deal_sync::pipeline::{Pipeline, SheetSource};
use deal_sync::scraper::HttpFetcher;
use deal_sync::storage::open_store;

#[derive(Parser)]
#[command(name = "deal-sync", version, about = "Keeps the deal catalog in sync with its sources")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to the JSON config file
    #[arg(long, global = true, default_value = "config.json")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Poll feeds and the spreadsheet export, merge, save
    Sync {
        /// Read the spreadsheet export from a local file instead of the configured URL
        #[arg(long)]
        sheet: Option<PathBuf>,
        /// Feeds only
        #[arg(long, conflicts_with = "sheet")]
        no_sheet: bool,
    },
    /// Merge a local spreadsheet HTML export
    ImportSheet { path: PathBuf },
    /// Replace search links with direct deal links
    Resolve {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Re-run the classifier over the whole catalog
    Recategorize,
    /// Print catalog statistics
    Stats,
    /// Print the built-in rule table as JSON
    DumpRules,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // A missing config file means defaults; a broken one is fatal.
    let config = if cli.config.exists() {
        match load_config(&cli.config) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Config load error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        info!(path = %cli.config.display(), "No config file, using defaults");
        AppConfig::default()
    };

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Command::DumpRules = command {
        println!("{}", serde_json::to_string_pretty(&builtin_spec())?);
        return Ok(());
    }

    let classifier = Classifier::from_config(config)?;
    let fetcher = HttpFetcher::from_config(config)?;
    let store = open_store(config)?;
    let pipeline = Pipeline::new(config, classifier, &fetcher, store.as_ref());
    let now = Utc::now();

    match command {
        Command::Sync { sheet, no_sheet } => {
            let source = match (&sheet, no_sheet) {
                (Some(path), _) => SheetSource::File(path),
                (None, true) => SheetSource::Skip,
                (None, false) => SheetSource::Configured,
            };
            let summary = pipeline.sync(source, now).await?;
            info!(
                sources_ok = summary.sources_ok,
                sources_failed = summary.sources_failed,
                candidates = summary.candidates,
                "Sync finished: {}",
                summary.merge
            );
        }
        Command::ImportSheet { path } => {
            let report = pipeline.import_sheet_file(&path, now)?;
            info!("Import finished: {}", report);
        }
        Command::Resolve { limit } => {
            let summary = pipeline.resolve(limit, now).await?;
            info!(
                attempted = summary.attempted,
                found = summary.found,
                "Resolve finished: {}",
                summary.merge
            );
        }
        Command::Recategorize => {
            let report = pipeline.recategorize(now)?;
            println!("{report}");
        }
        Command::Stats => {
            let stats = pipeline.stats()?;
            print!("{stats}");
        }
        Command::DumpRules => {}
    }

    Ok(())
}
