use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One row of the feed table: display name plus feed URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub name: String,
    pub url: String,
}

/// Load a previously generated feed list from disk.
pub fn load_entries(path: &Path) -> Result<Vec<FeedEntry>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read feed list {}", path.display()))?;
    parse_entries(&text).with_context(|| format!("Invalid feed list {}", path.display()))
}

pub fn parse_entries(json: &str) -> Result<Vec<FeedEntry>> {
    Ok(serde_json::from_str(json)?)
}
