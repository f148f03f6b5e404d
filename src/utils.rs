//! Text and filesystem helpers shared by the extractor and the output writers.
//!
//! - Whitespace flattening for every text value stored in a record
//! - Relative link resolution against a site's base URL
//! - Boilerplate prefix stripping for bylines and source labels
//! - String truncation for log previews
//! - Output directory validation

use itertools::Itertools;
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

/// Collapse every whitespace run (newlines included) to a single space and trim.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_text("  Bitcoin\n\n  rallies \t again "), "Bitcoin rallies again");
/// ```
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().join(" ")
}

/// Resolve a link or image value against `base_url`.
///
/// Values that already parse as absolute URLs are returned unchanged.
/// Path-absolute values (`/news/x`) are appended to the base as written, so
/// non-ASCII paths keep their original characters. Other relative values are
/// joined with [`Url::join`], which percent-encodes them; if the base itself is
/// unusable the two are concatenated with a single slash between them.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(resolve_url("https://example.com", "/news/x"), "https://example.com/news/x");
/// assert_eq!(resolve_url("https://example.com", "https://other.io/a"), "https://other.io/a");
/// ```
pub fn resolve_url(base_url: &str, href: &str) -> String {
    let href = href.trim();
    if Url::parse(href).is_ok() {
        return href.to_string();
    }
    if href.starts_with('/') && !href.starts_with("//") {
        return format!("{}{}", base_url.trim_end_matches('/'), href);
    }
    match Url::parse(base_url).and_then(|base| base.join(href)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            href.trim_start_matches('/')
        ),
    }
}

/// Remove leading boilerplate such as a `by` byline token.
///
/// Each prefix is matched case-insensitively and only as a whole word, so
/// `"Bobby Ong"` keeps its name when stripping `"by"`. Commas and whitespace
/// left dangling at either end are trimmed too.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(strip_prefixes("By Jane Doe,", &["by".into()]), "Jane Doe");
/// assert_eq!(strip_prefixes("Data via Farside", &["Data via".into()]), "Farside");
/// ```
pub fn strip_prefixes(text: &str, prefixes: &[String]) -> String {
    let mut rest = text.trim_matches(|c: char| c == ',' || c.is_whitespace());
    loop {
        let before = rest.len();
        for prefix in prefixes {
            let Some(head) = rest.get(..prefix.len()) else {
                continue;
            };
            let tail = &rest[prefix.len()..];
            let at_boundary = tail
                .chars()
                .next()
                .map_or(true, |c| c.is_whitespace() || c == ',' || c == ':');
            if head.eq_ignore_ascii_case(prefix) && at_boundary {
                rest = tail.trim_matches(|c: char| c == ',' || c == ':' || c.is_whitespace());
            }
        }
        if rest.len() == before {
            break;
        }
    }
    rest.to_string()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut at a character boundary at or below `max` bytes with an
/// ellipsis and byte count appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then writes and removes a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or written to.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}
