pub mod row;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::feed::FeedEntry;

/// Read the markdown table at `path` and return every feed row in file order.
pub fn read_entries(path: &Path) -> Result<Vec<FeedEntry>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    collect_entries(BufReader::new(file)).with_context(|| format!("Failed to read {}", path.display()))
}

/// Line-by-line pass; rows that don't parse are dropped, duplicates are kept.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn collect_entries<R: BufRead>(mut reader: R) -> Result<Vec<FeedEntry>> {
    let mut entries = Vec::new();
    let mut buf = Vec::new();
    while reader.read_until(b'\n', &mut buf)? > 0 {
        let chunk = std::str::from_utf8(&buf)?;
        let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
        let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
        for line in chunk.split('\r') {
            if let Some(entry) = row::parse_row(line) {
                entries.push(entry);
            }
        }
        buf.clear();
    }
    Ok(entries)
}
