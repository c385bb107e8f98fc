//! Markup knobs shared by both passes.
//!
//! `MarkupOptions` is the plain, user-facing form (strings, as they come from the
//! command line). `Markup` is the compiled form: the heading regex plus one
//! `memmem::Finder` per line signature, built once and reused for every line.

use memchr::memmem::Finder;
use regex::Regex;

use crate::error::{Error, Result};

/* =============================== Defaults =============================== */

pub const HEADING_PATTERN: &str = r#"<h4 class="group-title">([^<]+)</h4>"#;
pub const HEADING_TEMPLATE: &str =
    r#"<h4 class="group-title collapsible"><span class="collapse-icon">▼</span>${1}</h4>"#;
pub const OPEN_MARKER: &str = r#"<div class="category-items">"#;
pub const CLOSE_MARKER: &str = "</div><!-- /category-items -->";
pub const GROUP_OPEN: &str = r#"<div class="category-group">"#;
pub const ITEM: &str = r#"<label class="category-label""#;
pub const CLOSE: &str = "</div>";
pub const WRAPPER: &str = "category-items";
pub const INDENT: &str = "            ";

/// Uncompiled markup settings. `Default` matches the category-group page layout.
#[derive(Clone, Debug)]
pub struct MarkupOptions {
    /// Regex for a heading line; capture 1 (or `title`) is the title text.
    pub heading_pattern: String,
    /// Replacement for a heading, in `regex` expansion syntax (`${1}`, `$title`).
    pub heading_template: String,
    /// Wrapper line emitted right after each rewritten heading.
    pub open_marker: String,
    /// Wrapper line emitted right before the close of a group with items.
    pub close_marker: String,
    /// Substring identifying a group-open line.
    pub group_open: String,
    /// Substring identifying an item line.
    pub item: String,
    /// Substring identifying a closing line.
    pub close: String,
    /// Substring identifying wrapper lines, which never close a group.
    pub wrapper: String,
    /// Leading whitespace put in front of both wrapper lines.
    pub indent: String,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        MarkupOptions {
            heading_pattern: HEADING_PATTERN.to_string(),
            heading_template: HEADING_TEMPLATE.to_string(),
            open_marker: OPEN_MARKER.to_string(),
            close_marker: CLOSE_MARKER.to_string(),
            group_open: GROUP_OPEN.to_string(),
            item: ITEM.to_string(),
            close: CLOSE.to_string(),
            wrapper: WRAPPER.to_string(),
            indent: INDENT.to_string(),
        }
    }
}

impl MarkupOptions {
    pub fn compile(&self) -> Result<Markup> {
        let heading = Regex::new(&self.heading_pattern)?;
        // captures_len counts the implicit whole-match group.
        if heading.captures_len() < 2 {
            return Err(Error::MissingTitleCapture);
        }
        Ok(Markup {
            heading,
            heading_template: self.heading_template.clone(),
            open_marker: format!("{}{}", self.indent, self.open_marker),
            close_marker: format!("{}{}", self.indent, self.close_marker),
            group_open: Finder::new(self.group_open.as_bytes()).into_owned(),
            item: Finder::new(self.item.as_bytes()).into_owned(),
            close: Finder::new(self.close.as_bytes()).into_owned(),
            wrapper: Finder::new(self.wrapper.as_bytes()).into_owned(),
        })
    }
}

/* ============================ Compiled markup =========================== */

#[derive(Clone, Debug)]
pub struct Markup {
    pub(crate) heading: Regex,
    pub(crate) heading_template: String,
    pub(crate) open_marker: String,
    pub(crate) close_marker: String,
    group_open: Finder<'static>,
    item: Finder<'static>,
    close: Finder<'static>,
    wrapper: Finder<'static>,
}

impl Markup {
    /// Indented open wrapper line.
    pub fn open_marker(&self) -> &str {
        &self.open_marker
    }

    /// Indented close wrapper line.
    pub fn close_marker(&self) -> &str {
        &self.close_marker
    }

    #[inline]
    pub fn is_group_open(&self, line: &str) -> bool {
        contains(&self.group_open, line)
    }

    #[inline]
    pub fn is_item(&self, line: &str) -> bool {
        contains(&self.item, line)
    }

    /// A closing line that is not itself a wrapper line.
    #[inline]
    pub fn is_group_close(&self, line: &str) -> bool {
        contains(&self.close, line) && !contains(&self.wrapper, line)
    }

    /// An open wrapper line, as emitted by the heading pass. Only lines
    /// carrying the wrapper signature qualify.
    #[inline]
    pub fn is_wrapper_open(&self, line: &str) -> bool {
        is_marker_line(&self.open_marker, line) && contains(&self.wrapper, line)
    }

    /// A close wrapper line left by an earlier run. Only lines carrying the
    /// wrapper signature qualify, so a marker that looks like a plain closer
    /// never swallows a group's own close.
    #[inline]
    pub fn is_wrapper_close(&self, line: &str) -> bool {
        is_marker_line(&self.close_marker, line) && contains(&self.wrapper, line)
    }
}

#[inline]
fn is_marker_line(marker: &str, line: &str) -> bool {
    let marker = marker.trim();
    !marker.is_empty() && line.trim() == marker
}

// An empty needle would match every line; treat it as "never".
#[inline]
fn contains(finder: &Finder<'_>, line: &str) -> bool {
    !finder.needle().is_empty() && finder.find(line.as_bytes()).is_some()
}
