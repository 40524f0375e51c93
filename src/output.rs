use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::feed::FeedEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Single line, `", "` and `": "` separators.
    #[default]
    Compact,
    /// Two-space indented.
    Pretty,
}

/// Single-line JSON with a space after every `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

/// Serialize entries as a JSON array. Non-ASCII text is written as-is.
pub fn render(entries: &[FeedEntry], layout: Layout) -> Result<String> {
    let mut buf = Vec::new();
    match layout {
        Layout::Compact => entries.serialize(&mut Serializer::with_formatter(&mut buf, SpacedFormatter))?,
        Layout::Pretty => entries.serialize(&mut Serializer::pretty(&mut buf))?,
    }
    Ok(String::from_utf8(buf)?)
}

/// Replace the contents of `path` with `json`.
pub fn write_file(path: &Path, json: &str) -> Result<()> {
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
