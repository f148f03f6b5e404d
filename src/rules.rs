//! Declarative extraction rules for one site target.
//!
//! A [`SiteRules`] value describes everything that differs between sites:
//! which page to render, where the item list lives, how each field is read,
//! and how the result is shaped. The built-in catalog lives in
//! [`crate::sites`]; the same structure can be loaded from YAML to add or
//! override targets without recompiling.
//!
//! ```yaml
//! - id: example_latest
//!   key: latest_news
//!   base_url: https://example.com
//!   listing_url: https://example.com/latest
//!   sections:
//!     - container: main .news-list
//!       item: article
//!   fields:
//!     title: { selector: h3 }
//!     url: { selector: a, attr: href }
//!     published_time: { selector: time }
//!   time_format: normalize
//! ```

use crate::render::InteractionStep;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default wait after page load, in milliseconds.
pub const DEFAULT_WAIT_MS: u64 = 5000;

/// Cap on detail-page fetches when a secondary-fetch site sets no `limit`.
pub const DEFAULT_SECONDARY_LIMIT: usize = 3;

fn default_wait_ms() -> u64 {
    DEFAULT_WAIT_MS
}

/// Full extraction configuration for one site target.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteRules {
    /// Target id, also the output file stem.
    pub id: String,
    /// Key under `data` in the keyed envelope.
    pub key: String,
    /// Base for resolving relative links and image paths.
    pub base_url: String,
    /// Page fetched when no (known) category is requested.
    pub listing_url: String,
    /// Alternative listing pages by category name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub categories: BTreeMap<String, String>,
    #[serde(default = "default_wait_ms")]
    pub wait_ms: u64,
    /// Browser actions run before the listing is captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<Vec<InteractionStep>>,
    pub sections: Vec<Section>,
    pub fields: FieldRules,
    #[serde(default)]
    pub time_format: TimeFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_date: Option<PageDateRule>,
    /// Maximum candidate items taken from each section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<SecondaryFetch>,
    #[serde(default)]
    pub envelope: EnvelopeShape,
}

impl SiteRules {
    /// The listing URL for `category`, falling back to [`SiteRules::listing_url`].
    pub fn page_url(&self, category: Option<&str>) -> &str {
        category
            .and_then(|c| self.categories.get(c))
            .map(String::as_str)
            .unwrap_or(&self.listing_url)
    }
}

/// One item list on the page.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Section {
    /// Selector for the node enclosing the items.
    pub container: String,
    /// Selector for each item, scoped to the container.
    pub item: String,
    /// Constant flags stamped on every record from this section.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flags: BTreeMap<String, bool>,
}

impl Section {
    pub fn new(container: &str, item: &str) -> Self {
        Self {
            container: container.to_string(),
            item: item.to_string(),
            flags: BTreeMap::new(),
        }
    }

    pub fn flag(mut self, name: &str, value: bool) -> Self {
        self.flags.insert(name.to_string(), value);
        self
    }
}

/// How to read one value out of an item node.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FieldRule {
    /// Selector scoped to the item; absent means the item node itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    /// Read this attribute instead of the text content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<String>,
    /// Read the `url(...)` of an inline `background-image` style.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub background_url: bool,
    /// Which match to use, counting only matches that pass `contains`.
    #[serde(default)]
    pub nth: usize,
    /// Only consider matches whose text contains one of these.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contains: Vec<String>,
    /// Leading boilerplate removed from the value (e.g. `by`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strip_prefix: Vec<String>,
    /// Value used when nothing is found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl FieldRule {
    /// Text content of the first match.
    pub fn text(selector: &str) -> Self {
        Self {
            selector: Some(selector.to_string()),
            ..Default::default()
        }
    }

    /// An attribute of the first match.
    pub fn attr(selector: &str, attr: &str) -> Self {
        Self {
            selector: Some(selector.to_string()),
            attr: Some(attr.to_string()),
            ..Default::default()
        }
    }

    /// An attribute of the item node itself.
    pub fn own_attr(attr: &str) -> Self {
        Self {
            attr: Some(attr.to_string()),
            ..Default::default()
        }
    }

    /// The inline background image of the first match.
    pub fn background(selector: &str) -> Self {
        Self {
            selector: Some(selector.to_string()),
            background_url: true,
            ..Default::default()
        }
    }

    pub fn nth(mut self, index: usize) -> Self {
        self.nth = index;
        self
    }

    pub fn containing(mut self, needles: &[&str]) -> Self {
        self.contains = needles.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn strip(mut self, prefixes: &[&str]) -> Self {
        self.strip_prefix = prefixes.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn or(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }
}

/// Author list: one entry per matching link.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AuthorRule {
    pub selector: String,
    /// Attribute holding the display name; text content when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_attr: Option<String>,
    /// Attribute holding the profile link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_attr: Option<String>,
}

/// Field rules for an item. `title` and `url` are required.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FieldRules {
    pub title: FieldRule,
    pub url: FieldRule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<FieldRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_time: Option<FieldRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<FieldRule>,
    /// Every match becomes one entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<FieldRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<FieldRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<AuthorRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<FieldRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<FieldRule>,
    /// When set, items without a parsable rank are dropped and the rest sorted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<FieldRule>,
    /// Every match becomes one entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin_tags: Option<FieldRule>,
    /// Flag name → rule; the flag is true when the rule finds a match.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flags: BTreeMap<String, FieldRule>,
    /// Counter name → rule; the digits of the match are parsed.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub counts: BTreeMap<String, FieldRule>,
    /// Selectors that must match inside the item for it to be kept.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub require: Vec<String>,
}

/// How `published_time` text is post-processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// Kept as the source text.
    #[default]
    Raw,
    /// Relative ages and month-name dates become ISO-8601.
    Normalize,
    /// Ticker `HH:MM` clock shifted to 24-hour time.
    SubDayClock,
}

/// Page-level calendar date stamped on every record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PageDateRule {
    pub selector: String,
    /// Regex with three capture groups: year, month, day.
    pub pattern: String,
}

/// Detail-page lookup for sites whose listing carries no body text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SecondaryFetch {
    /// Selector for the article wrapper on the detail page.
    pub container: String,
    /// Selector for the body, scoped to the container.
    pub body: String,
    #[serde(default = "default_wait_ms")]
    pub wait_ms: u64,
}

/// Output envelope layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeShape {
    /// `{"data": {key: [...]}}`
    #[default]
    Keyed,
    /// `{"data": [{"date": ..., "items": [...]}]}`
    GroupedByDate,
}
