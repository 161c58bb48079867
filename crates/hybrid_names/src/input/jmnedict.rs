//! Models and parses the JMnedict file.
//! See <https://www.edrdg.org/enamdict/enamdict_doc.html>
//!
//! The dictionary is large, so it is read one `<entry>` at a time with [`EntryReader`]
//! instead of being deserialized as a whole.

use crate::error::{Error, Location, Result};
use std::{
    io::Read,
    path::{Path, PathBuf},
};
use xml::{
    common::Position,
    reader::{EventReader, ParserConfig, XmlEvent},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub ent_seq: Option<String>,
    pub k_ele: Vec<KEle>,
    pub r_ele: Vec<REle>,
    pub trans: Vec<Trans>,
}

impl Entry {
    /// Whether any translation classifies the entry as a given name.
    pub fn is_given_name(&self) -> bool {
        self.trans
            .iter()
            .flat_map(|t| &t.name_type)
            .any(NameType::is_given_name)
    }

    pub fn readings(&self) -> impl Iterator<Item = &str> {
        self.r_ele.iter().map(|r| r.reb.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KEle {
    pub keb: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct REle {
    pub reb: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trans {
    pub name_type: Vec<NameType>,
    pub trans_det: Vec<String>,
}

/// The `<name_type>` classifications used by JMnedict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameType {
    Character,
    Company,
    Creature,
    Deity,
    Document,
    Event,
    Female,
    Fiction,
    Given,
    Group,
    Legend,
    Male,
    Mythology,
    Object,
    Organization,
    Other,
    Person,
    Place,
    Product,
    Religion,
    Service,
    Ship,
    Station,
    Surname,
    Unclassified,
    Work,
}

// (variant, entity name, entity expansion)
const NAME_TYPES: &[(NameType, &str, &str)] = &[
    (NameType::Character, "char", "character"),
    (NameType::Company, "company", "company name"),
    (NameType::Creature, "creat", "creature"),
    (NameType::Deity, "dei", "deity"),
    (NameType::Document, "doc", "document"),
    (NameType::Event, "ev", "event"),
    (NameType::Female, "fem", "female given name or forename"),
    (NameType::Fiction, "fict", "fiction"),
    (
        NameType::Given,
        "given",
        "given name or forename, gender not specified",
    ),
    (NameType::Group, "group", "group"),
    (NameType::Legend, "leg", "legend"),
    (NameType::Male, "masc", "male given name or forename"),
    (NameType::Mythology, "myth", "mythology"),
    (NameType::Object, "obj", "object"),
    (NameType::Organization, "organization", "organization name"),
    (NameType::Other, "oth", "other"),
    (NameType::Person, "person", "full name of a particular person"),
    (NameType::Place, "place", "place name"),
    (NameType::Product, "product", "product name"),
    (NameType::Religion, "relig", "religion"),
    (NameType::Service, "serv", "service"),
    (NameType::Ship, "ship", "ship name"),
    (NameType::Station, "station", "railway station"),
    (NameType::Surname, "surname", "family or surname"),
    (NameType::Unclassified, "unclass", "unclassified name"),
    (
        NameType::Work,
        "work",
        "work of art, literature, music, etc. name",
    ),
];

impl NameType {
    pub fn is_given_name(&self) -> bool {
        matches!(self, Self::Given | Self::Female | Self::Male)
    }

    pub fn code(&self) -> &'static str {
        NAME_TYPES
            .iter()
            .find(|(nt, _, _)| nt == self)
            .map(|(_, code, _)| *code)
            .unwrap_or_default()
    }

    /// Accepts both the expanded entity text and the bare entity name.
    pub fn from_text(text: &str) -> Option<Self> {
        let text = text.trim();
        NAME_TYPES
            .iter()
            .find(|(_, code, description)| {
                text.eq_ignore_ascii_case(code) || text.eq_ignore_ascii_case(description)
            })
            .map(|(nt, _, _)| *nt)
    }
}

/// Streams entries out of a JMnedict document.
pub struct EntryReader<R: Read> {
    events: EventReader<R>,
    path: PathBuf,
    text: String,
    entry: Option<Entry>,
    trans: Option<Trans>,
    finished: bool,
}

impl<R: Read> EntryReader<R> {
    /// `path` is only used to give context to errors.
    pub fn new(r: R, path: impl AsRef<Path>) -> Self {
        Self {
            events: EventReader::new_with_config(r, make_config()),
            path: path.as_ref().to_path_buf(),
            text: String::new(),
            entry: None,
            trans: None,
            finished: false,
        }
    }

    fn take_text(&mut self) -> Option<String> {
        let text = std::mem::take(&mut self.text);
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    fn error(&self, position: xml::common::TextPosition, message: impl ToString) -> Error {
        Error::parse(
            &self.path,
            Location::Text {
                line: position.row + 1,
                column: position.column + 1,
            },
            message,
        )
    }

    /// Handles a closing tag, returning the entry if it was closed.
    fn end_element(&mut self, name: &str) -> Option<Entry> {
        match name {
            "entry" => {
                self.trans = None;
                return self.entry.take();
            }
            "trans" => {
                if let (Some(entry), Some(trans)) = (&mut self.entry, self.trans.take()) {
                    entry.trans.push(trans);
                }
            }
            "ent_seq" => {
                let text = self.take_text();
                if let Some(entry) = &mut self.entry {
                    entry.ent_seq = text;
                }
            }
            "keb" => {
                if let (Some(keb), Some(entry)) = (self.take_text(), &mut self.entry) {
                    entry.k_ele.push(KEle { keb });
                }
            }
            "reb" => {
                if let (Some(reb), Some(entry)) = (self.take_text(), &mut self.entry) {
                    entry.r_ele.push(REle { reb });
                }
            }
            "name_type" => {
                if let (Some(text), Some(trans)) = (self.take_text(), &mut self.trans) {
                    match NameType::from_text(&text) {
                        Some(name_type) => trans.name_type.push(name_type),
                        None => tracing::trace!("ignoring unknown name type '{text}'"),
                    }
                }
            }
            "trans_det" => {
                if let (Some(text), Some(trans)) = (self.take_text(), &mut self.trans) {
                    trans.trans_det.push(text);
                }
            }
            _ => {}
        }
        None
    }
}

impl<R: Read> Iterator for EntryReader<R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let event = match self.events.next() {
                Ok(event) => event,
                Err(err) => {
                    self.finished = true;
                    return Some(Err(self.error(err.position(), err.msg())));
                }
            };
            match event {
                XmlEvent::StartElement { name, .. } => {
                    self.text.clear();
                    match name.local_name.as_str() {
                        "entry" => {
                            if self.entry.is_some() {
                                self.finished = true;
                                let position = self.events.position();
                                return Some(Err(self.error(position, "nested <entry> element")));
                            }
                            self.entry = Some(Entry::default());
                        }
                        "trans" => self.trans = Some(Trans::default()),
                        _ => {}
                    }
                }
                XmlEvent::Characters(text) | XmlEvent::CData(text) => self.text.push_str(&text),
                XmlEvent::EndElement { name } => {
                    if let Some(entry) = self.end_element(&name.local_name) {
                        return Some(Ok(entry));
                    }
                }
                XmlEvent::EndDocument => self.finished = true,
                _ => {}
            }
        }
        None
    }
}

fn make_config() -> ParserConfig {
    NAME_TYPES
        .iter()
        .fold(
            ParserConfig::new()
                .trim_whitespace(true)
                .ignore_comments(true),
            |config, (_, code, description)| config.add_entity(*code, *description),
        )
}

#[cfg(test)]
mod test {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<JMnedict>
<!-- comment -->
<entry>
<ent_seq>5000000</ent_seq>
<k_ele><keb>太郎</keb></k_ele>
<r_ele><reb>たろう</reb></r_ele>
<trans>
<name_type>&masc;</name_type>
<trans_det>Tarou</trans_det>
</trans>
</entry>
<entry>
<ent_seq>5000001</ent_seq>
<k_ele><keb>田中</keb></k_ele>
<r_ele><reb>たなか</reb></r_ele>
<trans>
<name_type>&surname;</name_type>
<name_type>&place;</name_type>
<trans_det>Tanaka</trans_det>
</trans>
</entry>
<entry>
<ent_seq>5000002</ent_seq>
<r_ele><reb>ハナコ</reb></r_ele>
<r_ele><reb>はなこ</reb></r_ele>
<trans>
<name_type>&fem;</name_type>
</trans>
</entry>
</JMnedict>
"#;

    fn read_all(xml: &str) -> Result<Vec<Entry>> {
        EntryReader::new(xml.as_bytes(), "JMnedict.xml").collect()
    }

    #[test]
    fn reads_entries_in_order() {
        let entries = read_all(SAMPLE).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].ent_seq.as_deref(), Some("5000000"));
        assert_eq!(entries[0].k_ele, &[KEle { keb: "太郎".into() }]);
        assert_eq!(entries[0].readings().collect::<Vec<_>>(), &["たろう"]);
        assert_eq!(entries[0].trans[0].trans_det, &["Tarou"]);
        assert_eq!(
            entries[2].readings().collect::<Vec<_>>(),
            &["ハナコ", "はなこ"]
        );
    }

    #[test]
    fn expands_name_type_entities() {
        let entries = read_all(SAMPLE).unwrap();
        assert_eq!(entries[0].trans[0].name_type, &[NameType::Male]);
        assert_eq!(
            entries[1].trans[0].name_type,
            &[NameType::Surname, NameType::Place]
        );
        assert!(entries[0].is_given_name());
        assert!(!entries[1].is_given_name());
        assert!(entries[2].is_given_name());
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let xml = "<JMnedict><entry><r_ele><reb>け</reb></r_ele></entry></JMnedict>";
        let entries = read_all(xml).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].ent_seq.is_none());
        assert!(entries[0].k_ele.is_empty());
        assert!(entries[0].trans.is_empty());
        assert!(!entries[0].is_given_name());
    }

    #[test]
    fn ignores_unknown_name_types() {
        let xml = "<JMnedict><entry><r_ele><reb>あ</reb></r_ele>\
                   <trans><name_type>spaceship</name_type><name_type>given</name_type></trans>\
                   </entry></JMnedict>";
        let entries = read_all(xml).unwrap();
        assert_eq!(entries[0].trans[0].name_type, &[NameType::Given]);
    }

    #[test]
    fn reports_position_of_malformed_xml() {
        let xml = "<JMnedict>\n<entry>\n<reb>たろう</r_ele>\n</JMnedict>";
        let err = read_all(xml).unwrap_err();
        match err {
            Error::Parse { path, location, .. } => {
                assert_eq!(path, Path::new("JMnedict.xml"));
                assert!(matches!(location, Location::Text { line: 3, .. }));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn empty_document_is_malformed() {
        assert!(matches!(read_all(""), Err(Error::Parse { .. })));
    }

    #[test]
    fn stops_after_first_error() {
        let mut reader = EntryReader::new("<JMnedict><entry></JMnedict>".as_bytes(), "x");
        assert!(matches!(reader.next(), Some(Err(_))));
        assert!(reader.next().is_none());
    }

    #[test]
    fn name_type_codes_round_trip() {
        for (nt, code, description) in NAME_TYPES {
            assert_eq!(nt.code(), *code);
            assert_eq!(NameType::from_text(code), Some(*nt));
            assert_eq!(NameType::from_text(description), Some(*nt));
        }
    }
}
