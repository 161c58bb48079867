//! Locating the raw source files.
//!
//! Fetching and unpacking the files is left to the caller, the core only needs to know
//! where they are.

use crate::error::{Error, Result};
use std::{
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

pub const DICTIONARY_FILE: &str = "JMnedict.xml";
pub const SURNAME_FILE: &str = "Names_2010Census.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub dictionary: PathBuf,
    pub surnames: PathBuf,
}

pub trait SourceAcquirer {
    /// Ensures both raw files exist in `dir`.
    fn ensure_sources(&self, dir: &Path) -> Result<SourcePaths>;
}

/// Uses files that are already on disk.
#[derive(Debug, Clone)]
pub struct LocalSources {
    pub dictionary_file: String,
    pub dictionary_archives: Vec<String>,
    pub surname_file: String,
    pub surname_archives: Vec<String>,
}

impl Default for LocalSources {
    fn default() -> Self {
        Self {
            dictionary_file: DICTIONARY_FILE.to_string(),
            dictionary_archives: vec![
                "JMnedict.xml.gz".to_string(),
                "JMnedict.xml.zip".to_string(),
            ],
            surname_file: SURNAME_FILE.to_string(),
            surname_archives: vec!["names.zip".to_string(), "us_surnames.zip".to_string()],
        }
    }
}

impl LocalSources {
    fn locate(dir: &Path, file: &str, archives: &[String]) -> Result<PathBuf> {
        let path = dir.join(file);
        if path.is_file() {
            tracing::debug!("found {}", path.display());
            return Ok(path);
        }
        if let Some(archive) = archives.iter().map(|a| dir.join(a)).find(|a| a.is_file()) {
            return Err(Error::Extraction {
                path,
                archive,
                reason: "the archive has not been unpacked".to_string(),
            });
        }
        Err(Error::Download {
            path,
            reason: "no local copy or archive was found".to_string(),
        })
    }
}

impl SourceAcquirer for LocalSources {
    fn ensure_sources(&self, dir: &Path) -> Result<SourcePaths> {
        Ok(SourcePaths {
            dictionary: Self::locate(dir, &self.dictionary_file, &self.dictionary_archives)?,
            surnames: Self::locate(dir, &self.surname_file, &self.surname_archives)?,
        })
    }
}

/// Retries [`Error::Download`] failures of the inner acquirer, other errors are returned as is.
#[derive(Debug, Clone)]
pub struct Retry<A> {
    inner: A,
    attempts: u32,
    delay: Duration,
}

impl<A> Retry<A> {
    /// `retries` is the number of attempts after the first one.
    pub fn new(inner: A, retries: u32, delay: Duration) -> Self {
        Self {
            inner,
            attempts: retries.saturating_add(1),
            delay,
        }
    }
}

impl<A: SourceAcquirer> SourceAcquirer for Retry<A> {
    fn ensure_sources(&self, dir: &Path) -> Result<SourcePaths> {
        let mut attempt = 1;
        loop {
            match self.inner.ensure_sources(dir) {
                Err(err @ Error::Download { .. }) if attempt < self.attempts => {
                    tracing::warn!("attempt {attempt}/{} failed: {err}", self.attempts);
                    attempt += 1;
                    thread::sleep(self.delay);
                }
                result => return result,
            }
        }
    }
}
