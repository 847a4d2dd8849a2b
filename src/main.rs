use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use font_header::converter::{convert, ConversionJob};

fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let job = ConversionJob::from_constants();
    info!(
        "Embedding {} into {}",
        job.input_path.display(),
        job.header_path.display()
    );

    let report = convert(&job)
        .with_context(|| format!("Failed to embed {}", job.input_path.display()))?;

    info!(
        "Generated {} with array {}[{}] over {} lines",
        report.header_path.display(),
        report.array_name,
        report.bytes,
        report.lines
    );
    Ok(())
}
