mod app;
mod commands;
mod paths;
mod render;
mod settings;

use std::fs;
use std::fs::File;
use std::path::PathBuf;

use artic_lib::ArticClient;
use artic_lib::session::TableSession;
use clap::Parser;
use log::info;
use simplelog::{Config, WriteLogger};
use thiserror::Error;

use crate::app::App;
use crate::settings::ConfigError;
use crate::settings::Settings;

/// Browse the Art Institute of Chicago artworks collection page by page.
#[derive(Debug, Parser)]
#[command(name = "artic", version)]
pub struct Args {
    /// API root of the artworks endpoint.
    #[arg(long, env = "ARTIC_BASE_URL")]
    pub base_url: Option<String>,

    /// Rows per page (5, 10, 12, 25 or 50).
    #[arg(long, short)]
    pub rows: Option<u32>,

    /// Page to open first.
    #[arg(long, short, default_value_t = 1)]
    pub page: u32,

    /// Request timeout in seconds; 0 disables it.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Settings file to read instead of the platform default.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level written to the log file.
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Client(#[from] artic_lib::error::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

fn init_logging(settings: &Settings) -> Result<PathBuf, CliError> {
    paths::rotate_logs();
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from("artic.log"));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let log_file = File::create(&path)?;
    WriteLogger::init(settings.level_filter()?, Config::default(), log_file)?;
    Ok(path)
}

async fn run(args: Args) -> Result<(), CliError> {
    let settings = Settings::resolve(&args)?;
    let log_path = init_logging(&settings)?;
    info!("Logging to {}", log_path.display());
    info!("Using {} with {} rows per page", settings.base_url, settings.rows_per_page);

    let mut builder = ArticClient::builder().base_url(settings.base_url.clone());
    if let Some(timeout) = settings.timeout() {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    let session = TableSession::new(client, settings.rows_per_page)
        .map_err(artic_lib::error::Error::from)?;

    println!("{}", commands::HELP);
    App::new(session).run(args.page).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
