//! Site tasks: render, extract, enrich, wrap.
//!
//! Each target runs the same pipeline:
//!
//! 1. **Render** the listing page through the [`RenderPage`] client
//! 2. **Extract** records with the site's compiled [`Extractor`]
//! 3. **Enrich** (secondary-fetch sites only): render each article page in turn
//!    and store its body text in `content`
//! 4. **Wrap** the records in the site's [`Envelope`] shape
//!
//! Targets run concurrently via [`run_all`]; a failed target produces an error
//! envelope and never affects its siblings.

pub mod articles;

use crate::error::{RulesError, ScrapeError};
use crate::extract::Extractor;
use crate::outputs::envelope::{self, Envelope};
use crate::render::RenderPage;
use crate::rules::{EnvelopeShape, SiteRules};
use crate::sites;
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use scraper::Html;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use tracing::{error, info, instrument, warn};

/// One site to scrape, optionally narrowed to a listing category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub site: String,
    pub category: Option<String>,
}

impl FromStr for Target {
    type Err = String;

    /// Parses `site` or `site:category`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (site, category) = match s.split_once(':') {
            Some((site, category)) => (site.trim(), Some(category.trim())),
            None => (s.trim(), None),
        };
        if site.is_empty() {
            return Err(format!("missing site id in `{s}`"));
        }
        Ok(Target {
            site: site.to_string(),
            category: category.filter(|c| !c.is_empty()).map(str::to_string),
        })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.category {
            Some(category) => write!(f, "{}:{}", self.site, category),
            None => write!(f, "{}", self.site),
        }
    }
}

/// The result of one target, ready to persist.
#[derive(Debug)]
pub struct SiteOutcome {
    pub target: Target,
    pub envelope: Envelope,
}

/// Scrape one site target into an envelope.
///
/// # Errors
///
/// Returns [`ScrapeError`] when the rules do not compile or the listing page
/// cannot be rendered. Item-level problems never fail the task.
#[instrument(level = "info", skip_all, fields(site = %rules.id, category = ?category))]
pub async fn scrape_site<C: RenderPage>(
    client: &C,
    rules: &SiteRules,
    category: Option<&str>,
    reference: DateTime<Utc>,
) -> Result<Envelope, ScrapeError> {
    let extractor = Extractor::compile(rules)?;

    if let Some(requested) = category {
        if !rules.categories.contains_key(requested) {
            warn!(requested, "Unknown category; using default listing");
        }
    }
    let page_url = rules.page_url(category);

    let t0 = Instant::now();
    let html = client
        .fetch_rendered_page(page_url, rules.wait_ms, rules.script.as_deref())
        .await?;

    let mut records = {
        let document = Html::parse_document(&html);
        extractor.extract(&document, reference)
    };
    info!(count = records.len(), url = page_url, "Extracted listing");

    if let Some(lookup) = extractor.secondary() {
        records = articles::fill_bodies(client, lookup, records).await;
    }

    let envelope = match rules.envelope {
        EnvelopeShape::Keyed => envelope::build(records, &rules.key),
        EnvelopeShape::GroupedByDate => envelope::build_grouped(records),
    };
    info!(
        records = envelope.record_count(),
        elapsed_ms = t0.elapsed().as_millis(),
        "Site scraped"
    );
    Ok(envelope)
}

/// Scrape one target, turning any failure into an error envelope.
async fn run_target<C: RenderPage>(
    client: &C,
    rules: &[SiteRules],
    target: Target,
    reference: DateTime<Utc>,
) -> SiteOutcome {
    let result = match sites::find(rules, &target.site) {
        Ok(site_rules) => scrape_site(client, site_rules, target.category.as_deref(), reference).await,
        Err(e) => Err(e.into()),
    };
    let envelope = match result {
        Ok(envelope) => envelope,
        Err(e) => {
            error!(target = %target, error = %e, "Site task failed");
            envelope::failed(e)
        }
    };
    SiteOutcome { target, envelope }
}

/// Scrape all `targets` with at most `concurrency` in flight.
///
/// Outcomes come back in completion order, one per target.
#[instrument(level = "info", skip_all, fields(targets = targets.len(), concurrency = concurrency))]
pub async fn run_all<C: RenderPage>(
    client: &C,
    rules: &[SiteRules],
    targets: Vec<Target>,
    concurrency: usize,
    reference: DateTime<Utc>,
) -> Vec<SiteOutcome> {
    stream::iter(targets)
        .map(|target| run_target(client, rules, target, reference))
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await
}

/// Every site in `rules` at its default listing.
pub fn all_targets(rules: &[SiteRules]) -> Vec<Target> {
    rules
        .iter()
        .map(|r| Target {
            site: r.id.clone(),
            category: None,
        })
        .collect()
}

/// Reject targets whose site id is unknown before any fetch is made.
pub fn validate_targets(rules: &[SiteRules], targets: &[Target]) -> Result<(), RulesError> {
    for target in targets {
        sites::find(rules, &target.site)?;
    }
    Ok(())
}
