use anyhow::Result;
use feedcaster::{FeedConfig, Feeder};
use std::env;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn run() -> Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => FeedConfig::load(&path)?,
        None => FeedConfig::default(),
    };

    let mut feeder = Feeder::new(&config)?;
    let sent = feeder.run()?;
    info!(sent, "streaming complete!");
    Ok(())
}

fn main() {
    // ─── init logging ────────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    info!("===============================================");
    info!("starting fake streaming process");

    // Every fault is fatal to the run: log it and exit normally, without a
    // distinguished exit code. Recovery means re-invoking from scratch,
    // which re-sends every row.
    if let Err(e) = run() {
        error!("an error occurred: {e:#}");
    }
    info!("===============================================");
}
