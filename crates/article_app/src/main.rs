//! `scrape_article <url>`: fetch one page and print its title and article
//! text as a single JSON line.
//!
//! The process exits 0 whether or not the scrape succeeded; the outcome is
//! reported in the `success` field. Only argument errors exit non-zero.

mod config;
mod logging;

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Context;
use article_engine::{
    scrape_report, Extractor, Fetcher, HeuristicExtractor, ReqwestFetcher, ScrapeError,
    ScrapeReport,
};
use clap::Parser;
use engine_logging::{engine_error, engine_info};

#[derive(Parser, Debug)]
#[command(name = "scrape_article")]
#[command(about = "Scrape an article and output JSON")]
#[command(
    after_help = "Always exits 0 once a URL is given; check the \"success\" field of the output."
)]
struct Args {
    /// URL of the article to scrape
    url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(&logging::LogSettings::from_env());

    let fetcher = Arc::new(ReqwestFetcher::new(config::fetch_settings_from_env()));
    engine_info!("scraping {}", args.url);
    let report = run(fetcher, Arc::new(HeuristicExtractor), args.url).await;

    let line = report.to_json_line().context("serializing result")?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(line.as_bytes()).context("writing result")?;
    stdout.flush().context("flushing stdout")?;
    Ok(())
}

/// Runs the scrape on its own task so a panic becomes a failure report.
async fn run(fetcher: Arc<dyn Fetcher>, extractor: Arc<dyn Extractor>, url: String) -> ScrapeReport {
    let task = tokio::spawn(async move {
        scrape_report(fetcher.as_ref(), extractor.as_ref(), &url).await
    });
    match task.await {
        Ok(report) => report,
        Err(join_err) => {
            engine_error!("scrape task failed: {}", join_err);
            ScrapeReport::failure(ScrapeError::Internal(join_err.to_string()).to_string())
        }
    }
}
