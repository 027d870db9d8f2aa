//! Command-line interface definitions for news_sweep.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! All arguments can be provided via command-line flags or environment
//! variables. Missing or malformed values are fatal before any browser
//! automation begins.

use clap::Parser;

/// Command-line arguments for the news_sweep application.
///
/// These map one-to-one onto the knobs of a run: where to search, what to
/// search for, how to filter and sort, how far to paginate, and where the
/// outputs land.
///
/// # Examples
///
/// ```sh
/// # Search the past two months of Business coverage for "climate"
/// news_sweep --url https://www.nytimes.com \
///     --search-phrase climate \
///     --section Business \
///     --date-type "Specific Dates" \
///     --months 2 \
///     --show-more 3 \
///     --output-excel ./output/news.csv \
///     --picture-output ./output/pictures
/// ```
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Cli {
    /// URL of the news site to search
    #[arg(long, env = "NEWS_URL")]
    pub url: String,

    /// Phrase to search for; also the subject of the per-record match counts
    #[arg(long, env = "NEWS_SEARCH_PHRASE")]
    pub search_phrase: String,

    /// Section filter, matched as a substring of the visible option labels
    #[arg(long, env = "NEWS_SECTION")]
    pub section: String,

    /// Date-type filter, matched as a substring of the visible option labels
    #[arg(long, env = "NEWS_DATE_TYPE")]
    pub date_type: String,

    /// Width of the publication date range in months (0 and 1 both mean the
    /// current month)
    #[arg(long, env = "NEWS_MONTHS")]
    pub months: u32,

    /// Number of times to expand the listing via the "show more" control
    #[arg(long, env = "NEWS_SHOW_MORE")]
    pub show_more: u32,

    /// Path of the exported tabular file
    #[arg(long, env = "NEWS_OUTPUT_EXCEL")]
    pub output_excel: String,

    /// Directory where downloaded article images are stored
    #[arg(long, env = "NEWS_PICTURE_OUTPUT")]
    pub picture_output: String,
}
