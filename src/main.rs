use std::{path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use transport_guider::io::{
    read_document, read_document_file, write_responses, write_responses_file,
};

#[derive(Parser)]
struct Args {
    /// Path to the request document, read from stdin when omitted
    input: Option<PathBuf>,
    /// Where to write the responses, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,
    /// Wait time at stops in minutes, replacing the document's value
    #[arg(long)]
    bus_wait_time: Option<f64>,
    /// Bus velocity in km/h, replacing the document's value
    #[arg(long)]
    bus_velocity: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let now = Instant::now();
    let mut document = match &args.input {
        Some(path) => read_document_file(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => read_document(std::io::stdin().lock()).context("Failed to read stdin")?,
    };
    info!(
        base_requests = document.base_requests.len(),
        stat_requests = document.stat_requests.len(),
        "read document in {:?}",
        now.elapsed()
    );

    document
        .override_settings(args.bus_wait_time, args.bus_velocity)
        .context("Invalid routing settings")?;

    let now = Instant::now();
    let responses = transport_guider::run(document).context("Failed to process requests")?;
    info!("answered {} requests in {:?}", responses.len(), now.elapsed());

    match &args.output {
        Some(path) => write_responses_file(path, &responses, args.pretty)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => write_responses(std::io::stdout().lock(), &responses, args.pretty)
            .context("Failed to write stdout")?,
    }

    Ok(())
}
