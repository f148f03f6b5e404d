//! Full-article body fetching for sites whose listings carry no text.
//!
//! Detail pages are rendered one after another, never in parallel, to keep
//! the load on the rendering service bounded by the site's item limit. A
//! record whose page fails to render, or whose body cannot be found, is
//! dropped; the remaining records keep their listing metadata alongside the
//! fetched body.

use crate::error::Skip;
use crate::extract::BodyLookup;
use crate::models::Record;
use crate::render::RenderPage;
use scraper::Html;
use tracing::{debug, info, instrument, warn};

/// Fetch each record's article page and store its body text in `content`.
#[instrument(level = "info", skip_all, fields(count = records.len()))]
pub async fn fill_bodies<C: RenderPage>(
    client: &C,
    lookup: &BodyLookup,
    records: Vec<Record>,
) -> Vec<Record> {
    let total = records.len();
    let mut filled = Vec::with_capacity(total);

    for mut record in records {
        let html = match client
            .fetch_rendered_page(&record.url, lookup.wait_ms, None)
            .await
        {
            Ok(html) => html,
            Err(e) => {
                warn!(url = %record.url, error = %e, "Article fetch failed; skipping item");
                continue;
            }
        };

        let body: Result<String, Skip> = {
            let document = Html::parse_document(&html);
            lookup.body_text(&document)
        };
        match body {
            Ok(text) => {
                debug!(url = %record.url, chars = text.chars().count(), "Fetched article body");
                record.content = Some(text);
                filled.push(record);
            }
            Err(skip) => warn!(url = %record.url, reason = %skip, "Skipping item"),
        }
    }

    info!(fetched = filled.len(), total, "Fetched article bodies");
    filled
}
