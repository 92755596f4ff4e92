use std::io;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vibecheck_scoring::batch;
use vibecheck_scoring::config::{LoggingSettings, Settings};
use vibecheck_scoring::{Catalog, Evaluator};

/// Logs go to stderr; stdout carries one JSON result per request
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(io::stderr);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        io::Error::new(io::ErrorKind::Other, format!("Configuration error: {}", e))
    })?;

    init_tracing(&settings.logging);

    info!("Starting VibeCheck scorer...");

    let catalog = Catalog::from_settings(&settings.catalog).map_err(|e| {
        error!("Failed to load question catalog: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    info!("Question catalog loaded ({} questions)", catalog.len());

    let evaluator = Evaluator::new(Arc::new(catalog));

    let stdin = io::stdin();
    let stdout = io::stdout();

    let stats = batch::run(&evaluator, stdin.lock(), stdout.lock())?;

    info!("Scored {} responses ({} rejected)", stats.scored, stats.rejected);

    Ok(())
}
