//! # news_sweep
//!
//! A browser-automation pipeline that searches a news site for a phrase,
//! filters the results by publication date range and section, extracts each
//! result into a structured record, enriches the records with derived
//! signals (monetary mentions, phrase counts), downloads the article
//! images, and exports everything as a tabular dataset.
//!
//! ## Usage
//!
//! ```sh
//! news_sweep --url https://www.nytimes.com \
//!     --search-phrase climate \
//!     --section Business \
//!     --date-type "Specific Dates" \
//!     --months 2 --show-more 3 \
//!     --output-excel ./output/news.csv \
//!     --picture-output ./output/pictures
//! ```
//!
//! ## Architecture
//!
//! The pipeline is strictly sequential:
//! 1. **Collect** (headless Chrome, in a blocking task): navigate, search,
//!    sort/filter, paginate, extract
//! 2. **Enrich**: money-mention flag and phrase counts per record
//! 3. **Pictures**: sequential image downloads
//! 4. **Export**: tabular projection of the record set
//!
//! Only a failed navigation or a broken configuration ends the run early;
//! every other failure degrades the result and is visible in the logs and
//! the final summary.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};
use url::Url;

mod cli;
mod dates;
mod error;
mod models;
mod selectors;
mod session;
mod stages;
mod utils;

use cli::Cli;
use error::StageError;
use models::Collected;
use session::chrome::ChromeSession;
use utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_sweep starting up");

    // Parse CLI; missing or malformed values exit before any automation.
    let args = Cli::parse();
    debug!(?args.url, ?args.search_phrase, ?args.section, "Parsed CLI arguments");

    if let Err(e) = Url::parse(&args.url) {
        error!(url = %args.url, error = %e, "Configured URL is not valid");
        return Err(e.into());
    }

    // Early check: picture directory must be writable before we scrape.
    if let Err(e) = ensure_writable_dir(&args.picture_output).await {
        error!(
            path = %args.picture_output,
            error = %e,
            "Picture output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // --- Browser-facing stages ---
    // headless_chrome is a blocking API, so the whole collection phase runs
    // in a blocking task. The session is dropped when the closure returns,
    // on success and failure alike, which tears the browser down.
    let cfg = args.clone();
    let collected: Result<Collected, StageError> = tokio::task::spawn_blocking(move || {
        let session = ChromeSession::launch()
            .map_err(|e| StageError::Fatal(format!("browser session: {e}")))?;
        stages::collect(&session, &cfg)
    })
    .await?;

    let collected = match collected {
        Ok(collected) => collected,
        Err(e) => {
            error!(error = %e, "Pipeline aborted");
            return Err(e.into());
        }
    };
    let mut records = collected.records;
    info!(count = records.len(), "Collected records");

    // --- Enrichment ---
    stages::enrich::run(&mut records, &args.search_phrase);

    // --- Picture downloads ---
    let client = reqwest::Client::new();
    stages::pictures::run(&mut records, &client, &args.picture_output).await;

    // --- Export ---
    // Always attempted, even over an empty or degraded record set.
    if let Err(e) = stages::export::run(&records, &args.output_excel) {
        error!(error = %e, "Failed to write export");
    }

    let elapsed = start_time.elapsed();
    if collected.degraded_stages.is_empty() {
        info!(
            records = records.len(),
            secs = elapsed.as_secs(),
            millis = elapsed.subsec_millis(),
            "Run complete"
        );
    } else {
        warn!(
            records = records.len(),
            degraded_stages = ?collected.degraded_stages,
            secs = elapsed.as_secs(),
            "Run complete with degraded stages"
        );
    }

    Ok(())
}
