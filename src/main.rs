//! adsref CLI - manage a personal library of ADS BibTeX records

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use adsref::config::{self, AdsRefConfig};
use adsref::storage::RecordStore;
use adsref::ui::{self, Icons, RecordRow};
use adsref::AdsFetcher;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "adsref")]
#[command(version)]
#[command(about = "Manage ADS references in a local BibTeX database")]
#[command(long_about = r#"
adsref keeps the BibTeX records of the papers you cite in a local database,
fetching each one from ADS the first time you add its bibcode.

Example usage:
  adsref add 2016ApJ...816...52C
  adsref search 2016ApJ...816...52C
  adsref remove 2016ApJ...816...52C
  adsref output paper/ref.bib
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only print records, no status lines
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the database file (default: ~/.ads_ref.db)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file (default: ~/.ads_ref.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the record of a bibcode from ADS and store it
    Add {
        /// 19-character bibcode
        bibcode: String,
    },

    /// Remove the record of a bibcode
    Remove {
        /// 19-character bibcode
        bibcode: String,
    },

    /// Print the stored record of a bibcode
    Search {
        /// 19-character bibcode
        bibcode: String,
    },

    /// Write all records to a BibTeX file
    Output {
        /// Output file (default: ref.bib)
        path: Option<PathBuf>,
    },

    /// List the stored bibcodes
    List,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    adsref::output::set_quiet(cli.quiet);

    if let Err(e) = run(cli) {
        ui::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config: AdsRefConfig = config::load_config(cli.config.as_deref())?;
    let database = config.database_path(cli.database.as_deref())?;
    tracing::debug!("Using database {}", database.display());

    let store = RecordStore::open(&database)?;

    match cli.command {
        Commands::Add { bibcode } => {
            let fetcher = AdsFetcher::with_endpoint(config.endpoint(), config.db_key())?;
            if store.add(&bibcode, &fetcher)? {
                ui::success("Success");
            } else {
                ui::not_found("The record already exists");
            }
        }
        Commands::Remove { bibcode } => {
            if store.remove(&bibcode)? {
                ui::success("Success");
            } else {
                ui::not_found("The record does not exist");
            }
        }
        Commands::Search { bibcode } => match store.search(&bibcode)? {
            Some(record) => println!("{record}"),
            None => ui::not_found("The record does not exist"),
        },
        Commands::Output { path } => {
            let path = config.output_path(path.as_deref());
            let written = store.export_all(Some(&path))?;
            ui::info(Icons::FILE, "Output", &path.display().to_string());
            ui::success(&format!("Wrote {written} records"));
        }
        Commands::List => {
            let rows: Vec<RecordRow> = store
                .records()?
                .iter()
                .map(|(bibcode, record)| RecordRow::new(bibcode, record))
                .collect();
            ui::info(Icons::DATABASE, "Database", &database.display().to_string());
            if rows.is_empty() {
                println!("{}", ui::dim("No records stored"));
            } else {
                println!("{}", ui::record_table(&rows));
            }
        }
    }

    store.close()?;
    Ok(())
}
