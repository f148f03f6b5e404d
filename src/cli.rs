//! Command-line interface definitions for the crypto news scrapers.
//!
//! Every option can come from a flag; the rendering credentials can also come
//! from the environment.

use crate::render::DEFAULT_ENDPOINT;
use crate::scrapers::Target;
use clap::Parser;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Every built-in site, key from the environment
/// ZENROWS_API_KEY=... crypto_news_scrapers -o ./out
///
/// # Two sites, one narrowed to a category
/// crypto_news_scrapers -o ./out -s decrypt -s cointelegraph:nft
///
/// # Patched selectors from a rules file
/// crypto_news_scrapers -o ./out -r ./rules.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the per-site JSON files
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Rendering service API key
    #[arg(long, env = "ZENROWS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Rendering service endpoint
    #[arg(long, env = "ZENROWS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Site to scrape as `id` or `id:category` (repeatable; default: all sites)
    #[arg(short, long = "site")]
    pub sites: Vec<Target>,

    /// Optional YAML file whose site rules replace or extend the built-in ones
    #[arg(short, long)]
    pub rules: Option<String>,

    /// Maximum number of sites scraped at once
    #[arg(short, long, default_value_t = 4)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub timeout_secs: u64,

    /// Print the known site ids and categories, then exit
    #[arg(long)]
    pub list_sites: bool,
}
