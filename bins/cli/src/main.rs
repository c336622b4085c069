//! Ratewise interactive converter
//!
//! Main entry point for the `ratewise` binary.

mod repl;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ratewise_core::{ConverterService, CurrencyRepository};
use ratewise_db::{
    InMemoryCurrencyRepository, JsonFileCurrencyRepository, check_reference, parse_catalog,
    seed_if_empty,
};
use ratewise_shared::{AppConfig, AppError, CurrencyCode};

use crate::repl::{Command, Session};

/// Catalog used to seed an empty store.
const BUNDLED_CATALOG: &str = include_str!("../catalog.json");

#[derive(Parser)]
#[command(name = "ratewise", version, about = "Multi-currency converter")]
struct Cli {
    /// Extra configuration file layered over config/default
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON store location (overrides storage.path)
    #[arg(short, long)]
    store: Option<PathBuf>,

    /// Locale preset such as en-US, de-DE, fr-FR or de-CH
    #[arg(short, long)]
    locale: Option<String>,

    /// Keep everything in memory; nothing is written to disk
    #[arg(long)]
    memory: bool,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing on stderr so stdout stays the converter screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ratewise=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "ratewise failed");
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<AppError>()
                .map_or(1, AppError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // Load configuration
    let mut config = AppConfig::load_from(cli.config.as_deref())?;
    if let Some(store) = &cli.store {
        config.storage.path.clone_from(store);
    }
    if let Some(locale) = &cli.locale {
        config.locale.preset = Some(locale.clone());
    }

    // Open the store
    let repository: Arc<dyn CurrencyRepository> = if cli.memory {
        info!("Using in-memory store");
        Arc::new(InMemoryCurrencyRepository::new())
    } else {
        let repo = JsonFileCurrencyRepository::open(&config.storage.path)
            .map_err(AppError::from)
            .with_context(|| format!("opening {}", config.storage.path.display()))?;
        info!(path = %config.storage.path.display(), "Opened store");
        Arc::new(repo)
    };

    let catalog = parse_catalog(BUNDLED_CATALOG).map_err(AppError::from)?;
    let reference = CurrencyCode::new(&config.catalog.reference_currency).map_err(AppError::from)?;
    check_reference(&catalog, &reference).map_err(AppError::from)?;
    seed_if_empty(&repository, &catalog).map_err(AppError::from)?;

    let service = ConverterService::from_config(repository, &config)?;
    let mut session = Session::start(service)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session.render(&mut stdout)?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => {
                if let Err(err) = session.execute(&command, &mut stdout) {
                    writeln!(stdout, "error: {err}")?;
                }
            }
            Err(err) => writeln!(stdout, "error: {err}")?,
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}
