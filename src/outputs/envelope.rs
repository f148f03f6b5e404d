//! Uniform JSON envelopes around a site's records.
//!
//! ```text
//! keyed:    {"data": {"<key>": [record, ...]}}
//! grouped:  {"data": [{"date": "2024-12-20", "items": [record, ...]}, ...]}
//! failed:   {"error": "<message>"}
//! ```

use crate::models::{DateGroup, Record};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// The single output artifact of one site task.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Keyed { data: BTreeMap<String, Vec<Record>> },
    Grouped { data: Vec<DateGroup> },
    Failed { error: String },
}

impl Envelope {
    pub fn is_error(&self) -> bool {
        matches!(self, Envelope::Failed { .. })
    }

    /// Number of records carried, zero for an error envelope.
    pub fn record_count(&self) -> usize {
        match self {
            Envelope::Keyed { data } => data.values().map(Vec::len).sum(),
            Envelope::Grouped { data } => data.iter().map(|g| g.items.len()).sum(),
            Envelope::Failed { .. } => 0,
        }
    }
}

/// Wrap records under `key`.
pub fn build(records: Vec<Record>, key: &str) -> Envelope {
    let mut data = BTreeMap::new();
    data.insert(key.to_string(), records);
    Envelope::Keyed { data }
}

/// Group records by `date`, groups ordered by first appearance.
///
/// Records without a date are grouped under an empty date string.
pub fn build_grouped(records: Vec<Record>) -> Envelope {
    let mut groups: Vec<DateGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let date = record.date.clone().unwrap_or_default();
        match index.get(&date) {
            Some(&i) => groups[i].items.push(record),
            None => {
                index.insert(date.clone(), groups.len());
                groups.push(DateGroup {
                    date,
                    items: vec![record],
                });
            }
        }
    }

    Envelope::Grouped { data: groups }
}

/// Error envelope for a failed site task.
pub fn failed(error: impl ToString) -> Envelope {
    Envelope::Failed {
        error: error.to_string(),
    }
}
