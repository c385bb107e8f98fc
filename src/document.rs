//! Whole-document pipeline: heading pass, split, line pass, join.

use std::fs;
use std::path::Path;

use crate::closing::{insert_closing_markers, insert_closing_markers_strict};
use crate::error::{Error, Result};
use crate::headings::rewrite_headings;
use crate::markup::Markup;

/// Counts from one run, for reporting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub headings: usize,
    pub groups: usize,
    pub wrapped: usize,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    /// Fail on malformed nesting instead of doing a best-effort pass.
    pub strict: bool,
}

/// Run both passes over `text` in memory.
pub fn collapse(text: &str, markup: &Markup, opts: Options) -> Result<(String, Report)> {
    let headed = rewrite_headings(text, markup);
    let lines: Vec<&str> = headed.text.split('\n').collect();

    let pass = if opts.strict {
        insert_closing_markers_strict(&lines, markup)?
    } else {
        insert_closing_markers(&lines, markup)
    };

    let report = Report {
        headings: headed.count(),
        groups: pass.groups,
        wrapped: pass.wrapped,
    };
    Ok((pass.lines.join("\n"), report))
}

/// Read `input`, run both passes, and write the result to `output`
/// (or back over `input`). Nothing is written if either pass fails.
pub fn collapse_file(
    input: &Path,
    output: Option<&Path>,
    markup: &Markup,
    opts: Options,
) -> Result<Report> {
    let src = fs::read_to_string(input).map_err(|e| Error::io(input, e))?;
    let (out, report) = collapse(&src, markup, opts)?;

    let out_path = output.unwrap_or(input);
    fs::write(out_path, out).map_err(|e| Error::io(out_path, e))?;
    log::debug!("wrote {} ({:?})", out_path.display(), report);
    Ok(report)
}
