use anyhow::Result;
use tracing::{error, info};

use asset_pipeline::config::LOG_FILTER;
use asset_pipeline::{BatchProcessor, Config, Ffmpeg};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter(LOG_FILTER).init();

    // Pre-flight: credential, input root, and media tool must all be present
    // before any work begins.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if !config.assets_root.exists() {
        error!("Assets folder not found: {}", config.assets_root.display());
        std::process::exit(1);
    }

    let ffmpeg = match Ffmpeg::locate().await {
        Ok(ffmpeg) => ffmpeg,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!("Assets root: {}", config.assets_root.display());
    info!("Stills root: {}", config.stills_root.display());
    info!("Transcripts root: {}", config.transcripts_root.display());

    let processor = BatchProcessor::new(config, ffmpeg);
    let summary = processor.run().await?;

    // Per-file failures are reported but do not change the exit code.
    info!(
        "Done: {} processed, {} succeeded, {} failed",
        summary.total, summary.successful, summary.failed
    );

    Ok(())
}
