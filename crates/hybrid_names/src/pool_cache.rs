//! Caches the given-name pool as a plain text file, one name per line,
//! so the dictionary only needs to be parsed once.

use crate::{
    error::{Error, Location, PoolKind, Result},
    given_names::{extract_given_names, GivenName, GivenNamePool, NameFilter},
    pool::Pool,
};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::Path,
};

pub const CACHE_FILE: &str = "jp_names.txt";

/// Loads the cached pool. Returns `None` if there is no cache or the cache file is empty.
///
/// Every line is validated again with `filter`, a cache written with different bounds
/// or edited by hand is rejected with [`Error::Parse`] rather than silently trimmed.
pub fn load(path: &Path, filter: &NameFilter) -> Result<Option<GivenNamePool>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(path, e)),
    };
    let metadata = file.metadata().map_err(|e| Error::io(path, e))?;
    if metadata.len() == 0 {
        return Ok(None);
    }

    let mut names = vec![];
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line_no = idx as u64 + 1;
        let line = line.map_err(|e| {
            Error::parse(
                path,
                Location::Text {
                    line: line_no,
                    column: 1,
                },
                e,
            )
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let name = GivenName::from_romaji(line, filter).ok_or_else(|| {
            Error::parse(
                path,
                Location::Text {
                    line: line_no,
                    column: 1,
                },
                format!("'{line}' is not a valid given name"),
            )
        })?;
        names.push(name);
    }
    tracing::info!("loaded {} cached given names from {}", names.len(), path.display());
    Pool::new(names, PoolKind::GivenNames, path).map(Some)
}

pub fn save(path: &Path, pool: &GivenNamePool) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for name in pool {
        writeln!(writer, "{name}").map_err(|e| Error::io(path, e))?;
    }
    writer.flush().map_err(|e| Error::io(path, e))?;
    tracing::info!("cached {} given names to {}", pool.as_slice().len(), path.display());
    Ok(())
}

/// Uses the cache at `cache` if there is one, otherwise parses `dictionary`.
/// Without `use_cache` the cache is neither read nor written.
pub fn load_or_extract(
    cache: &Path,
    dictionary: &Path,
    filter: &NameFilter,
    use_cache: bool,
) -> Result<GivenNamePool> {
    if use_cache {
        if let Some(pool) = load(cache, filter)? {
            return Ok(pool);
        }
    }
    let pool = extract_given_names(dictionary, filter)?;
    if use_cache {
        save(cache, &pool)?;
    }
    Ok(pool)
}
