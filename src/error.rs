//! Errors surfaced by the rewrite passes and the catalog append.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid heading pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("heading pattern has no capture group for the title")]
    MissingTitleCapture,

    #[error("line {line}: group opened while the group from line {open} is still open")]
    NestedGroup { line: usize, open: usize },

    #[error("line {line}: group is never closed")]
    UnclosedGroup { line: usize },

    #[error("line {line}: wrapper opened for a group without items")]
    EmptyWrapper { line: usize },

    #[error("catalog does not end with the terminator '{0}'")]
    MissingTerminator(&'static str),

    #[error("cannot parse records: {0}")]
    Records(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
