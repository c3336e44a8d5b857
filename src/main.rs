use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kvrel::cli::cli;
use kvrel::config::Config;

fn main() -> Result<()> {
    let config = Config::load();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_writer(io::stderr)
        .init();

    info!("kvrel v{}", env!("CARGO_PKG_VERSION"));
    let database = config
        .open_database()
        .with_context(|| format!("failed to open store at {}", config.database))?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    cli(database, &config.prompt, stdin.lock(), &mut stdout)?;
    Ok(())
}
