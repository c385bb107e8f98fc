//! foldgroups: make item groups in an HTML page collapsible.
//!
//! Two passes over one in-memory document:
//!
//! 1. [`headings::rewrite_headings`] turns every group heading into an annotated
//!    heading followed by an open wrapper line.
//! 2. [`closing::insert_closing_markers`] walks the lines once and closes the
//!    wrapper right before the end of each group that holds at least one item.
//!
//! [`document::collapse`] chains the two; [`catalog`] is the unrelated word
//! catalog append used by the same tool.

pub mod catalog;
pub mod closing;
pub mod document;
pub mod error;
pub mod headings;
pub mod markup;

pub use document::{collapse, collapse_file, Options, Report};
pub use error::{Error, Result};
pub use markup::{Markup, MarkupOptions};
