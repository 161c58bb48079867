//! The error type shared by every stage of the pipeline.

use std::{fmt, io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A source file is not available and nothing can be extracted to produce it.
    #[error("source file '{}' is missing: {reason}", .path.display())]
    Download { path: PathBuf, reason: String },
    /// A source archive is present but the raw file has not been extracted from it.
    #[error("failed to extract '{}' from '{}': {reason}", .path.display(), .archive.display())]
    Extraction {
        path: PathBuf,
        archive: PathBuf,
        reason: String,
    },
    #[error("malformed data in '{}' at {location}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        location: Location,
        message: String,
    },
    /// The source was well-formed but nothing survived filtering.
    #[error("no valid {pool} found in '{}'", .path.display())]
    EmptyResult { pool: PoolKind, path: PathBuf },
    #[error("failed to access '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(
        path: impl Into<PathBuf>,
        location: Location,
        message: impl ToString,
    ) -> Self {
        Self::Parse {
            path: path.into(),
            location,
            message: message.to_string(),
        }
    }
}

/// Where in a source file a parse error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// 1-based line and column of a text document.
    Text { line: u64, column: u64 },
    /// 1-based line and record number of a tabular document.
    Record { line: u64, record: u64 },
    Unknown,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { line, column } => write!(f, "line {line}, column {column}"),
            Self::Record { line, record } => write!(f, "line {line} (record {record})"),
            Self::Unknown => write!(f, "unknown position"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    GivenNames,
    Surnames,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GivenNames => write!(f, "given names"),
            Self::Surnames => write!(f, "surnames"),
        }
    }
}
