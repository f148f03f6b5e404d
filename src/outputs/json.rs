//! JSON file output, one file per site target.
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── coindesk_top_stories.json
//! ├── cointelegraph_nft.json          # site with a category
//! └── decrypt_error.json              # failed task
//! ```

use crate::outputs::envelope::Envelope;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// File stem for a target: the site id, plus the category when one was requested.
pub fn file_stem(site: &str, category: Option<&str>) -> String {
    match category {
        Some(category) => format!("{site}_{category}"),
        None => site.to_string(),
    }
}

/// Path the envelope for `stem` is written to.
pub fn output_path(output_dir: &str, stem: &str, envelope: &Envelope) -> PathBuf {
    let file_name = if envelope.is_error() {
        format!("{stem}_error.json")
    } else {
        format!("{stem}.json")
    };
    Path::new(output_dir).join(file_name)
}

/// Serialize `envelope` as pretty JSON under `output_dir`.
///
/// # Returns
///
/// The path written, or an error if serialization or the write fails.
#[instrument(level = "info", skip_all, fields(%output_dir, %stem))]
pub async fn write_envelope(
    envelope: &Envelope,
    output_dir: &str,
    stem: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(envelope)?;

    if let Err(e) = fs::create_dir_all(output_dir).await {
        error!(error = %e, "Failed to create output dir");
        return Err(e.into());
    }

    let path = output_path(output_dir, stem, envelope);
    fs::write(&path, json).await?;
    info!(path = %path.display(), records = envelope.record_count(), "Wrote JSON");
    Ok(path)
}
