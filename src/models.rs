//! Data models for extracted news items.
//!
//! - [`Record`]: one news item as extracted from a listing page
//! - [`Author`]: a byline with an optional profile link
//! - [`DateGroup`]: records sharing one calendar date, for ticker feeds
//!
//! Every site shares the one [`Record`] shape. Fields a site does not configure
//! stay `None` and are left out of the JSON output, so each site's envelope
//! only carries the keys its page actually exposes.

use serde::Serialize;
use std::collections::BTreeMap;

/// A single news item extracted from a listing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    /// The headline, whitespace-flattened and never empty.
    pub title: String,
    /// Absolute link to the article.
    pub url: String,
    /// ISO-8601 when the source format is known, otherwise the source text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    /// Preview text, or the full article body for secondary-fetch sites.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// Article kind label, e.g. "Press Release".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Author>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Attribution for data-driven pieces ("Data via ...").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    /// 1-based position on pages that publish an explicit ranking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin_tags: Option<Vec<String>>,
    /// Calendar date (`YYYY-MM-DD`) for date-grouped feeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Site flags such as `is_sponsored`, `is_featured` or `isHighlight`.
    #[serde(flatten)]
    pub flags: BTreeMap<String, bool>,
    /// Site counters such as `bull_count` or `quote_count`.
    #[serde(flatten)]
    pub counts: BTreeMap<String, u64>,
}

/// An article byline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// All records of one calendar date, in their original relative order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateGroup {
    pub date: String,
    pub items: Vec<Record>,
}
