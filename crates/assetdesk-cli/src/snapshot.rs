//! JSON snapshot loading.
//!
//! A snapshot is a JSON array of records of one kind. The `kind` tag is
//! optional in the file; records without one are tagged with the kind being
//! queried.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use assetdesk_records::{EntityKind, Record};
use serde_json::Value as Json;
use tracing::debug;

/// Reads the records of a snapshot file.
pub fn load(path: &Path, kind: EntityKind) -> Result<Vec<Record>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let records = parse(&contents, kind)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;
    debug!(path = %path.display(), %kind, count = records.len(), "loaded snapshot");
    Ok(records)
}

/// Parses snapshot text.
pub fn parse(contents: &str, kind: EntityKind) -> Result<Vec<Record>> {
    let raw: Json = serde_json::from_str(contents)?;
    let Json::Array(items) = raw else {
        bail!("expected a JSON array of records");
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, mut item)| {
            if let Some(object) = item.as_object_mut() {
                object
                    .entry("kind")
                    .or_insert_with(|| Json::String(kind.as_str().to_string()));
            }
            serde_json::from_value(item).with_context(|| format!("record #{index}"))
        })
        .collect()
}
