//! Line pass: close the wrapper of every group that turned out to hold items.
//!
//! One forward scan, no backtracking. The scan is a three-state machine:
//!
//! ```text
//!   Idle ──group-open──▶ InGroup ──item──▶ InGroupWithItems
//!    ▲                     │                      │
//!    └──────close──────────┘                      │
//!    └──────close (emit close marker first)───────┘
//! ```
//!
//! A group-open line always (re)enters `InGroup`. A close wrapper line left by
//! an earlier run moves `InGroupWithItems` back to `InGroup`, so processed
//! output can be scanned again without gaining a second marker.

use std::convert::Infallible;

use crate::error::{Error, Result};
use crate::markup::Markup;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    InGroup,
    InGroupWithItems,
}

/// What to do with the current line besides passing it through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Pass,
    /// Emit the close wrapper marker before the line.
    CloseWrapper,
}

/// Line classes the machine reacts to. Everything else is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    GroupOpen,
    Item,
    WrapperOpen,
    WrapperClose,
    GroupClose,
    Other,
}

/// Classify one line. Earlier checks win, so a line carrying both the
/// group-open and the close signature counts as an open.
pub fn classify(line: &str, markup: &Markup) -> LineKind {
    if markup.is_group_open(line) {
        LineKind::GroupOpen
    } else if markup.is_item(line) {
        LineKind::Item
    } else if markup.is_wrapper_open(line) {
        LineKind::WrapperOpen
    } else if markup.is_wrapper_close(line) {
        LineKind::WrapperClose
    } else if markup.is_group_close(line) {
        LineKind::GroupClose
    } else {
        LineKind::Other
    }
}

impl ScanState {
    /// Transition table.
    pub fn step(self, kind: LineKind) -> (ScanState, Action) {
        use LineKind::*;
        use ScanState::*;

        match (self, kind) {
            (_, GroupOpen) => (InGroup, Action::Pass),
            (InGroup, Item) => (InGroupWithItems, Action::Pass),
            (InGroupWithItems, WrapperClose) => (InGroup, Action::Pass),
            (InGroupWithItems, GroupClose) => (Idle, Action::CloseWrapper),
            (InGroup, GroupClose) => (Idle, Action::Pass),
            (state, _) => (state, Action::Pass),
        }
    }

    pub fn in_group(self) -> bool {
        self != ScanState::Idle
    }
}

/// Output of [`insert_closing_markers`].
#[derive(Debug)]
pub struct ClosingPass {
    pub lines: Vec<String>,
    /// Groups seen (group-open lines).
    pub groups: usize,
    /// Close markers inserted.
    pub wrapped: usize,
}

/// Tolerant scan: malformed nesting is logged, never fatal. A second
/// group-open simply restarts the group.
pub fn insert_closing_markers<S: AsRef<str>>(lines: &[S], markup: &Markup) -> ClosingPass {
    let tolerate = |fault: Error| -> std::result::Result<(), Infallible> {
        log::warn!("{fault}");
        Ok(())
    };
    match scan(lines, markup, tolerate) {
        Ok(pass) => pass,
        Err(never) => match never {},
    }
}

/// Same scan, but a group opened inside another group, a group left open at
/// the end of input, or an open wrapper in a group that never got items is an
/// error.
pub fn insert_closing_markers_strict<S: AsRef<str>>(
    lines: &[S],
    markup: &Markup,
) -> Result<ClosingPass> {
    scan(lines, markup, Err)
}

fn scan<S, E>(
    lines: &[S],
    markup: &Markup,
    mut fault: impl FnMut(Error) -> std::result::Result<(), E>,
) -> std::result::Result<ClosingPass, E>
where
    S: AsRef<str>,
{
    let mut out = Vec::with_capacity(lines.len() + lines.len() / 8 + 1);
    let mut state = ScanState::Idle;
    let mut open_line = 0usize;
    // open wrapper line seen since the last group close
    let mut pending_wrapper: Option<usize> = None;
    let mut groups = 0usize;
    let mut wrapped = 0usize;

    for (idx, line) in lines.iter().enumerate() {
        let line: &str = line.as_ref();
        let kind = classify(line, markup);
        let (next, action) = state.step(kind);

        match kind {
            LineKind::GroupOpen => {
                if state.in_group() {
                    fault(Error::NestedGroup {
                        line: idx + 1,
                        open: open_line,
                    })?;
                }
                open_line = idx + 1;
                groups += 1;
            }
            LineKind::WrapperOpen => pending_wrapper = Some(idx + 1),
            LineKind::Item if state.in_group() => pending_wrapper = None,
            LineKind::GroupClose if state.in_group() => {
                if let Some(wrapper_line) = pending_wrapper.take() {
                    fault(Error::EmptyWrapper { line: wrapper_line })?;
                }
            }
            _ => {}
        }

        if action == Action::CloseWrapper {
            out.push(markup.close_marker().to_string());
            wrapped += 1;
        }
        out.push(line.to_string());
        state = next;
    }

    if state.in_group() {
        fault(Error::UnclosedGroup { line: open_line })?;
    }
    log::debug!("closed {wrapped} of {groups} group(s)");

    Ok(ClosingPass {
        lines: out,
        groups,
        wrapped,
    })
}
