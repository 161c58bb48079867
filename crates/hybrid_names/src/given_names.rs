//! Extracts romanized given names from the JMnedict dictionary.

use crate::{
    error::{Error, PoolKind, Result},
    input::jmnedict::{EntryReader, NameType},
    pool::Pool,
    romaji,
};
use serde::Serialize;
use std::{
    collections::HashSet,
    fmt,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

pub type GivenNamePool = Pool<GivenName>;

/// Length bounds for accepted names, counted in romaji letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameFilter {
    pub min_len: usize,
    /// Longer readings are usually a surname and given name written together.
    pub max_len: usize,
}

impl Default for NameFilter {
    fn default() -> Self {
        Self {
            min_len: 2,
            max_len: 14,
        }
    }
}

impl NameFilter {
    fn accepts(&self, romaji: &str) -> bool {
        let len = romaji.chars().count();
        (self.min_len..=self.max_len).contains(&len)
            && romaji.chars().all(romaji::is_hepburn_letter)
    }
}

/// A capitalized Hepburn romanization of a given name, such as `Tarou`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GivenName(String);

impl GivenName {
    /// Romanizes a kana reading. Returns `None` for readings that are not pure kana
    /// or whose romanization does not pass the filter.
    pub fn from_reading(reading: &str, filter: &NameFilter) -> Option<Self> {
        if !romaji::is_kana_str(reading) {
            return None;
        }
        Self::from_romaji(&romaji::romanize(reading), filter)
    }

    /// Validates an already romanized name, in any casing.
    pub fn from_romaji(romaji: &str, filter: &NameFilter) -> Option<Self> {
        let lower = romaji.trim().to_lowercase();
        filter
            .accepts(&lower)
            .then(|| Self(romaji::capitalize(&lower)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GivenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the given-name pool from the JMnedict file at `path`.
pub fn extract_given_names(path: &Path, filter: &NameFilter) -> Result<GivenNamePool> {
    tracing::info!("extracting given names from {}", path.display());
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    given_names_from_reader(BufReader::new(file), path, filter)
}

/// Builds the given-name pool from JMnedict data. `path` names the source in errors.
pub fn given_names_from_reader<R: Read>(
    r: R,
    path: &Path,
    filter: &NameFilter,
) -> Result<GivenNamePool> {
    let mut seen = HashSet::new();
    let mut names = vec![];
    let mut scanned = 0usize;
    let mut given_entries = 0usize;
    let mut rejected = 0usize;

    for entry in EntryReader::new(r, path) {
        let entry = entry?;
        scanned += 1;
        if !entry.is_given_name() {
            tracing::trace!(
                "skipping entry {:?} with name types {:?}",
                entry.ent_seq,
                entry
                    .trans
                    .iter()
                    .flat_map(|t| &t.name_type)
                    .map(NameType::code)
                    .collect::<Vec<_>>()
            );
            continue;
        }
        given_entries += 1;
        for reading in entry.readings() {
            match GivenName::from_reading(reading, filter) {
                Some(name) => {
                    if seen.insert(name.clone()) {
                        names.push(name);
                    }
                }
                None => {
                    tracing::trace!("rejected reading {reading} of entry {:?}", entry.ent_seq);
                    rejected += 1;
                }
            }
        }
    }

    tracing::info!(
        "scanned {scanned} entries, {given_entries} given name entries, kept {} names, rejected {rejected} readings",
        names.len()
    );
    Pool::new(names, PoolKind::GivenNames, path)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<JMnedict>
<entry>
<ent_seq>1</ent_seq>
<k_ele><keb>太郎</keb></k_ele>
<r_ele><reb>たろう</reb></r_ele>
<trans><name_type>&masc;</name_type><trans_det>Tarou</trans_det></trans>
</entry>
<entry>
<ent_seq>2</ent_seq>
<k_ele><keb>田中</keb></k_ele>
<r_ele><reb>たなか</reb></r_ele>
<trans><name_type>&surname;</name_type></trans>
</entry>
<entry>
<ent_seq>3</ent_seq>
<r_ele><reb>ハナコ</reb></r_ele>
<trans><name_type>&fem;</name_type></trans>
</entry>
<entry>
<ent_seq>4</ent_seq>
<k_ele><keb>多郎</keb></k_ele>
<r_ele><reb>たろう</reb></r_ele>
<r_ele><reb>ん</reb></r_ele>
<r_ele><reb>太ろう</reb></r_ele>
<trans><name_type>&given;</name_type></trans>
</entry>
<entry>
<ent_seq>5</ent_seq>
<r_ele><reb>じゅげむじゅげむごこうのすりきれ</reb></r_ele>
<trans><name_type>&given;</name_type></trans>
</entry>
<entry>
<ent_seq>6</ent_seq>
<r_ele><reb>とうきょう</reb></r_ele>
<trans><name_type>&place;</name_type></trans>
</entry>
</JMnedict>
"#;

    fn extract(xml: &str) -> Result<GivenNamePool> {
        given_names_from_reader(xml.as_bytes(), Path::new("JMnedict.xml"), &NameFilter::default())
    }

    fn names(pool: &GivenNamePool) -> Vec<&str> {
        pool.iter().map(GivenName::as_str).collect()
    }

    #[test]
    fn extracts_given_names_in_source_order() {
        let pool = extract(SAMPLE).unwrap();
        assert_eq!(names(&pool), &["Tarou", "Hanako"]);
    }

    #[test]
    fn excludes_entries_not_tagged_as_given_names() {
        let pool = extract(SAMPLE).unwrap();
        assert!(!names(&pool).contains(&"Tanaka"));
        assert!(!names(&pool).contains(&"Toukyou"));
    }

    #[test]
    fn every_name_satisfies_invariants() {
        let pool = extract(SAMPLE).unwrap();
        for name in &pool {
            let lower = name.as_str().to_lowercase();
            assert!(lower.len() >= 2);
            assert!(lower.len() <= 14);
            assert!(lower.chars().all(romaji::is_hepburn_letter), "{name}");
        }
    }

    #[test]
    fn no_given_names_is_an_empty_result() {
        let xml = "<JMnedict><entry><r_ele><reb>たなか</reb></r_ele>\
                   <trans><name_type>&surname;</name_type></trans></entry></JMnedict>";
        assert!(matches!(
            extract(xml),
            Err(Error::EmptyResult {
                pool: PoolKind::GivenNames,
                ..
            })
        ));
    }

    #[test]
    fn malformed_dictionary_is_a_parse_error() {
        assert!(matches!(
            extract("<JMnedict><entry>"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn filter_bounds_are_configurable() {
        let filter = NameFilter {
            min_len: 6,
            max_len: 14,
        };
        let pool =
            given_names_from_reader(SAMPLE.as_bytes(), Path::new("JMnedict.xml"), &filter)
                .unwrap();
        assert_eq!(names(&pool), &["Hanako"]);
    }

    #[test]
    fn validates_romaji() {
        let filter = NameFilter::default();
        assert_eq!(
            GivenName::from_romaji("TAROU", &filter).unwrap().as_str(),
            "Tarou"
        );
        assert!(GivenName::from_romaji("t", &filter).is_none());
        assert!(GivenName::from_romaji("lily", &filter).is_none());
        assert!(GivenName::from_romaji("ta-rou", &filter).is_none());
        assert!(GivenName::from_romaji("", &filter).is_none());
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let pool = extract_given_names(file.path(), &NameFilter::default()).unwrap();
        assert_eq!(names(&pool), &["Tarou", "Hanako"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("JMnedict.xml");
        assert!(matches!(
            extract_given_names(&path, &NameFilter::default()),
            Err(Error::Io { .. })
        ));
    }
}
