//! Steward entry point
//!
//! Run with:
//! ```bash
//! cargo run -p steward-bot < events.ndjson
//! ```
//!
//! Configuration comes from environment variables; credentials from the
//! bootstrap files (with interactive fallback). Events are consumed as
//! line-delimited JSON on stdin; the live gateway connector that produces
//! them is deployed separately.

use std::sync::Arc;

use tracing::{debug, error, info};

use steward_bot::{bootstrap, replay};
use steward_common::{try_init_tracing, AppConfig};
use steward_core::Platform;
use steward_service::{MemoryPlatform, Relay};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "steward failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Environment override first, bootstrap file otherwise. Either way a
    // malformed identity aborts startup.
    let admin_id = match config.bootstrap.admin_id {
        Some(id) => id,
        None => bootstrap::init_admin_id(&config.bootstrap.admin_id_file)?,
    };
    let token = bootstrap::init_token(&config.bootstrap.token_file)?;
    debug!(token_len = token.len(), "token loaded for the gateway connector");

    info!(
        app = %config.app.name,
        admin_id = %admin_id,
        log_dir = %config.storage.log_dir.display(),
        "configuration loaded"
    );

    let platform = Arc::new(MemoryPlatform::new());
    let relay = Relay::new(
        Arc::clone(&platform) as Arc<dyn Platform>,
        &config,
        admin_id,
    );

    info!("reading platform events from stdin");
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    replay::run(&relay, &platform, stdin).await?;

    Ok(())
}
