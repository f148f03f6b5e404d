//! Error types for fetching, rule compilation and extraction.
//!
//! Only [`FetchError`] and [`RulesError`] ever leave a site task (wrapped in
//! [`ScrapeError`]). [`Skip`] and [`TimeParseError`] are recovered where they
//! occur: the offending item, section or timestamp is logged and skipped or
//! degraded to raw text.

use thiserror::Error;

/// Failure of the rendering proxy for one page fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no rendering API key configured (set ZENROWS_API_KEY)")]
    MissingCredential,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("rendering service returned HTTP {status} for {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("could not encode interaction script: {0}")]
    Script(#[from] serde_json::Error),
}

/// Invalid or unavailable site rules.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("site `{0}` has no extraction section")]
    NoSections(String),

    #[error("unknown site `{0}`")]
    UnknownSite(String),

    #[error("could not read rules file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse rules file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Whole-task failure for one site target.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// Reason a section or item was left out of the result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Skip {
    #[error("section container `{0}` not found")]
    SectionMissing(String),

    #[error("required field `{0}` missing")]
    MissingField(&'static str),

    #[error("required element `{0}` missing")]
    MissingGuard(String),

    #[error("article body `{0}` not found")]
    BodyMissing(String),
}

/// A timestamp in a shape the normalizer does not know.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized time format: {0:?}")]
pub struct TimeParseError(pub String);
