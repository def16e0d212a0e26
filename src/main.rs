use anyhow::{Context, Result};
use deremas_scrape::{
    config::Config,
    crawler::{Crawler, JsonLinesSink},
    extractor::Extractor,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let writer: Box<dyn Write> = if config.output() == "-" {
        Box::new(io::stdout().lock())
    } else {
        let file = File::create(config.output())
            .with_context(|| format!("cannot create output file {}", config.output()))?;
        Box::new(BufWriter::new(file))
    };

    let mut crawler = Crawler::new(
        Extractor::default(),
        JsonLinesSink::new(writer),
        Duration::from_millis(config.request_delay_ms()),
        config.max_pages(),
    );

    let stats = crawler.run(config.start_url().clone()).await?;
    println!(
        "visited {} pages, emitted {} records, skipped {}",
        stats.pages_visited, stats.records_emitted, stats.pages_skipped
    );
    Ok(())
}
