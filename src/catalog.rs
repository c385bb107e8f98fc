//! Word catalog append.
//!
//! The catalog is a JavaScript object literal of categories, each an array of
//! `{ word: '…', chord: '…' }` records, closed by a final `};`. Appending drops
//! that terminator, adds the rendered categories, and writes it back.

use std::fs;
use std::path::Path;

use memchr::memmem;
use serde::Deserialize;

use crate::error::{Error, Result};

pub const TERMINATOR: &str = "};";
const RECORD_KEY: &str = "{ word:";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub word: String,
    pub chord: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Object key, e.g. `american-cities`.
    pub key: String,
    /// Human title used in the leading comment.
    pub title: String,
    #[serde(default)]
    pub records: Vec<Record>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppendReport {
    pub categories: usize,
    pub before: usize,
    pub after: usize,
}

/// Parse a JSON array of categories.
pub fn parse_categories(json: &str) -> Result<Vec<Category>> {
    Ok(serde_json::from_str(json)?)
}

/// Render categories as a block that continues an object literal
/// (it starts with the separating comma).
pub fn render_block(categories: &[Category]) -> String {
    let mut out = String::new();
    for cat in categories {
        out.push_str(&format!(
            ",\n    // {} Category\n    '{}': [\n",
            one_line(&cat.title),
            escape(&cat.key)
        ));
        for (i, rec) in cat.records.iter().enumerate() {
            let sep = if i + 1 == cat.records.len() { "" } else { "," };
            out.push_str(&format!(
                "        {{ word: '{}', chord: '{}' }}{sep}\n",
                escape(&rec.word),
                escape(&rec.chord)
            ));
        }
        out.push_str("    ]");
    }
    out
}

/// Insert `block` in front of the catalog terminator. Trailing whitespace after
/// the terminator is dropped; the result ends with exactly one terminator.
pub fn append_block(content: &str, block: &str) -> Result<String> {
    let body = content
        .trim_end()
        .strip_suffix(TERMINATOR)
        .ok_or(Error::MissingTerminator(TERMINATOR))?;

    let mut out = String::with_capacity(body.len() + block.len() + TERMINATOR.len() + 1);
    out.push_str(body);
    out.push_str(block);
    out.push('\n');
    out.push_str(TERMINATOR);
    Ok(out)
}

/// Number of records in a catalog.
pub fn count_records(content: &str) -> usize {
    memmem::find_iter(content.as_bytes(), RECORD_KEY).count()
}

/// Append `categories` to the catalog file at `path`, in place.
pub fn append_to_file(path: &Path, categories: &[Category]) -> Result<AppendReport> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let updated = append_block(&content, &render_block(categories))?;
    fs::write(path, &updated).map_err(|e| Error::io(path, e))?;

    let report = AppendReport {
        categories: categories.len(),
        before: count_records(&content),
        after: count_records(&updated),
    };
    log::debug!("appended to {}: {:?}", path.display(), report);
    Ok(report)
}

// Titles land in a `//` comment; a line break would end it early.
fn one_line(s: &str) -> String {
    s.split(['\r', '\n', '\u{2028}', '\u{2029}'])
        .filter(|part| !part.trim().is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch == '\\' || ch == '\'' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
