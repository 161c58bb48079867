//! Normalizes surnames from the census surname list.

use crate::{
    error::{Error, PoolKind, Result},
    input::census::RecordReader,
    pool::Pool,
    romaji,
};
use serde::Serialize;
use std::{
    fmt,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

pub type SurnamePool = Pool<Surname>;

/// The census aggregates rare names into one pseudo-surname row.
const AGGREGATE_ROW: &str = "all other names";

/// A trimmed, title-cased surname, such as `O'Brien`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Surname(String);

impl Surname {
    /// Returns `None` if nothing is left after normalization.
    pub fn normalize(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        (!normalized.is_empty()).then_some(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Surname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trims, collapses internal whitespace and title-cases.
pub fn normalize(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    romaji::title_case(&collapsed)
}

/// Builds the surname pool from the tabular file at `path`.
pub fn extract_surnames(path: &Path) -> Result<SurnamePool> {
    tracing::info!("extracting surnames from {}", path.display());
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    surnames_from_reader(BufReader::new(file), path)
}

/// Builds the surname pool from tabular data. `path` names the source in errors.
///
/// Duplicates are kept, the source's own frequency may be meaningful.
pub fn surnames_from_reader<R: Read>(r: R, path: &Path) -> Result<SurnamePool> {
    let mut surnames = vec![];
    let mut skipped = 0usize;
    for record in RecordReader::new(r, path) {
        let record = record?;
        if record.name.trim().eq_ignore_ascii_case(AGGREGATE_ROW) {
            skipped += 1;
            continue;
        }
        match Surname::normalize(&record.name) {
            Some(surname) => surnames.push(surname),
            None => {
                tracing::trace!("skipping empty name with rank {:?}", record.rank);
                skipped += 1;
            }
        }
    }
    tracing::info!("kept {} surnames, skipped {skipped} rows", surnames.len());
    Pool::new(surnames, PoolKind::Surnames, path)
}
