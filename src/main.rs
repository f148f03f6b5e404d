//! # Crypto News Scrapers
//!
//! Scrapes crypto and finance news listings through a JavaScript-rendering
//! proxy and writes one JSON file per site.
//!
//! ## Usage
//!
//! ```sh
//! crypto_news_scrapers -o ./out
//! crypto_news_scrapers -o ./out -s coinness -s cointelegraph:nft
//! ```
//!
//! ## Architecture
//!
//! Every site is a set of declarative rules run by one extraction engine:
//! 1. **Rules**: the built-in catalog, optionally patched from a YAML file
//! 2. **Rendering**: listing pages are fetched through the rendering service
//! 3. **Extraction**: selectors turn each listing into normalized records
//! 4. **Output**: each target writes `<site>[_<category>].json`, or
//!    `<site>[_<category>]_error.json` when the task failed

use chrono::Utc;
use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod extract;
mod models;
mod outputs;
mod render;
mod rules;
mod scrapers;
mod sites;
mod time;
mod utils;

use cli::Cli;
use outputs::json;
use render::ZenRowsClient;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
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
    info!("crypto_news_scrapers starting up");

    let args = Cli::parse();
    debug!(?args.output_dir, ?args.sites, ?args.rules, "Parsed CLI arguments");

    // ---- Site rules ----
    let mut site_rules = sites::catalog();
    if let Some(path) = &args.rules {
        let overrides = sites::load_rules(path).await?;
        site_rules = sites::merge(site_rules, overrides);
    }

    if args.list_sites {
        for rules in &site_rules {
            let categories = rules.categories.keys().cloned().collect::<Vec<_>>();
            if categories.is_empty() {
                println!("{}", rules.id);
            } else {
                println!("{} [{}]", rules.id, categories.join(", "));
            }
        }
        return Ok(());
    }

    let targets = if args.sites.is_empty() {
        scrapers::all_targets(&site_rules)
    } else {
        args.sites.clone()
    };
    scrapers::validate_targets(&site_rules, &targets)?;

    // Early check: ensure output dir is writable
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Rendering client ----
    if args.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
        warn!("No ZENROWS_API_KEY configured; every site will write an error file");
    }
    let client = ZenRowsClient::new(
        &args.endpoint,
        args.api_key.clone(),
        Duration::from_secs(args.timeout_secs),
    )?;

    // ---- Scrape ----
    let reference = Utc::now();
    info!(
        targets = targets.len(),
        concurrency = args.concurrency,
        %reference,
        "Starting site tasks"
    );
    let outcomes =
        scrapers::run_all(&client, &site_rules, targets, args.concurrency, reference).await;

    // ---- Output ----
    let mut succeeded = 0usize;
    let mut failed = 0usize;
    for outcome in &outcomes {
        if outcome.envelope.is_error() {
            failed += 1;
        } else {
            succeeded += 1;
        }
        let stem = json::file_stem(&outcome.target.site, outcome.target.category.as_deref());
        if let Err(e) = json::write_envelope(&outcome.envelope, &args.output_dir, &stem).await {
            error!(target = %outcome.target, error = %e, "Failed to write JSON");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        succeeded,
        failed,
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
