use anyhow::Context;
use venue_table::{ClientConfig, Document, VenueTableRenderer, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env().context("Invalid configuration")?;
    logger::init_logger(&config.log_level, config.log_dir.as_deref())
        .context("Failed to initialize logging")?;

    tracing::info!(endpoint = %config.endpoint, "Starting venue-table");

    let source = config
        .build_source()
        .context("Failed to build HTTP client")?;
    let mut doc = Document::page_shell(&config.container_id);
    let mut renderer = VenueTableRenderer::new(source, &config);

    let state = renderer.load(&mut doc).await?;

    doc.write_to(&config.output)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;
    tracing::info!(?state, output = %config.output.display(), "Page written");

    Ok(())
}
