//! Models and parses the tabular surname file, such as the 2010 US Census surname list.
//! See <https://www.census.gov/topics/population/genealogy/data/2010_surnames.html>

use crate::error::{Error, Location, Result};
use csv::{StringRecord, StringRecordsIntoIter};
use std::{
    io::Read,
    path::{Path, PathBuf},
};

const HEADER_LABELS: &[&str] = &["name", "surname", "last_name", "lastname"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSurnameRecord {
    /// The name field as it appears in the file.
    pub name: String,
    pub rank: Option<u64>,
    pub count: Option<u64>,
}

/// Streams data rows out of a delimited surname file, skipping the header row if there is one.
pub struct RecordReader<R: Read> {
    records: StringRecordsIntoIter<R>,
    path: PathBuf,
    seen_first: bool,
    finished: bool,
}

impl<R: Read> RecordReader<R> {
    /// `path` is only used to give context to errors.
    pub fn new(r: R, path: impl AsRef<Path>) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(false)
            .from_reader(r);
        Self {
            records: reader.into_records(),
            path: path.as_ref().to_path_buf(),
            seen_first: false,
            finished: false,
        }
    }

    fn error(&self, position: Option<&csv::Position>, message: impl ToString) -> Error {
        let location = position
            .map(|p| Location::Record {
                line: p.line(),
                record: p.record() + 1,
            })
            .unwrap_or(Location::Unknown);
        Error::parse(&self.path, location, message)
    }

    fn parse_record(&self, record: &StringRecord) -> Result<RawSurnameRecord> {
        if record.len() < 2 {
            return Err(self.error(
                record.position(),
                format!(
                    "expected a name and at least one numeric field, found {} field(s)",
                    record.len()
                ),
            ));
        }
        Ok(RawSurnameRecord {
            name: record[0].to_string(),
            rank: parse_number(&record[1]),
            count: record.get(2).and_then(parse_number),
        })
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<RawSurnameRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(err) => {
                    self.finished = true;
                    return Some(Err(self.error(err.position(), &err)));
                }
            };
            let first = !self.seen_first;
            self.seen_first = true;
            if first && is_header(&record) {
                tracing::debug!("skipping header row {record:?}");
                continue;
            }
            let parsed = self.parse_record(&record);
            if parsed.is_err() {
                self.finished = true;
            }
            return Some(parsed);
        }
        None
    }
}

/// Rows with fewer than two fields are never headers, they are rejected as malformed.
fn is_header(record: &StringRecord) -> bool {
    if record.len() < 2 {
        return false;
    }
    let name = record.get(0).unwrap_or_default().trim();
    let label = HEADER_LABELS
        .iter()
        .any(|label| name.eq_ignore_ascii_case(label));
    let numeric = record
        .get(1)
        .map(|field| field.trim().parse::<f64>().is_ok())
        .unwrap_or(false);
    label || !numeric
}

fn parse_number(field: &str) -> Option<u64> {
    field.trim().parse().ok()
}

#[cfg(test)]
mod test {
    use super::*;

    fn read_all(csv: &str) -> Result<Vec<RawSurnameRecord>> {
        RecordReader::new(csv.as_bytes(), "names.csv").collect()
    }

    #[test]
    fn skips_census_header() {
        let csv = "name,rank,count,prop100k\nSMITH,1,2442977,828.19\nJOHNSON,2,1932812,655.24\n";
        let records = read_all(csv).unwrap();
        assert_eq!(
            records,
            &[
                RawSurnameRecord {
                    name: "SMITH".into(),
                    rank: Some(1),
                    count: Some(2442977),
                },
                RawSurnameRecord {
                    name: "JOHNSON".into(),
                    rank: Some(2),
                    count: Some(1932812),
                },
            ]
        );
    }

    #[test]
    fn headerless_file_keeps_first_row() {
        let records = read_all("SMITH,1\nJOHNSON,2\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "SMITH");
        assert_eq!(records[0].count, None);
    }

    #[test]
    fn non_numeric_first_row_is_a_header() {
        let records = read_all("Family,Position\nGarcia,6\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Garcia");
    }

    #[test]
    fn keeps_raw_name_text() {
        let records = read_all("\" o'brien \", 12345\n").unwrap();
        assert_eq!(records[0].name, " o'brien ");
        assert_eq!(records[0].rank, Some(12345));
    }

    #[test]
    fn wrong_field_count_is_a_parse_error() {
        let csv = "name,rank,count\nSMITH,1,2442977\nJOHNSON,2\nWILLIAMS,3,1625252\n";
        let mut reader = RecordReader::new(csv.as_bytes(), "names.csv");
        assert!(reader.next().unwrap().is_ok());
        match reader.next().unwrap().unwrap_err() {
            Error::Parse { location, .. } => {
                assert_eq!(location, Location::Record { line: 3, record: 3 })
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(reader.next().is_none());
    }

    #[test]
    fn single_column_is_a_parse_error() {
        assert!(matches!(
            read_all("SMITH\nJOHNSON\n"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn lone_single_column_row_is_a_parse_error() {
        assert!(matches!(
            read_all("SMITH\n"),
            Err(Error::Parse {
                location: Location::Record { line: 1, record: 1 },
                ..
            })
        ));
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let bytes: &[u8] = b"name,rank\nM\xFCller,1\n";
        let result: Result<Vec<_>> = RecordReader::new(bytes, "names.csv").collect();
        assert!(matches!(result, Err(Error::Parse { .. })));
    }
}
