//! Street-name extraction from OSM XML data
//!
//! Streams through the document with quick-xml and yields the `v`
//! attribute of every `<tag>` element whose `k` attribute is one of the
//! configured addr or name tags. Element nesting is irrelevant: tags of
//! nodes, ways, and relations are all picked up.

use std::fs::File;
use std::io::BufRead;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::InputError;

/// Extracts candidate street names from OSM XML.
#[derive(Debug)]
pub struct OsmNameExtractor {
    addr_tags: Vec<String>,
    name_tags: Vec<String>,
}

impl OsmNameExtractor {
    pub fn new(addr_tags: Vec<String>, name_tags: Vec<String>) -> Self {
        Self {
            addr_tags,
            name_tags,
        }
    }

    fn wants(&self, key: &str) -> bool {
        self.addr_tags.iter().any(|t| t == key) || self.name_tags.iter().any(|t| t == key)
    }

    /// Parse an OSM file, feeding every extracted name to `sink`.
    pub fn parse_file(&self, path: &Path, sink: &mut dyn FnMut(&str)) -> Result<(), InputError> {
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|error| InputError::Io {
            source_name: source_name.clone(),
            error,
        })?;
        self.parse_reader(&source_name, std::io::BufReader::new(file), sink)
    }

    /// Parse OSM data from an arbitrary reader (used for stdin).
    pub fn parse_reader(
        &self,
        source_name: &str,
        reader: impl BufRead,
        sink: &mut dyn FnMut(&str),
    ) -> Result<(), InputError> {
        let xml_error = |message: String| InputError::Xml {
            source_name: source_name.to_string(),
            message,
        };

        let mut xml = Reader::from_reader(reader);
        let mut buf = Vec::new();
        loop {
            match xml.read_event_into(&mut buf) {
                Ok(Event::Start(element)) | Ok(Event::Empty(element))
                    if element.name().as_ref() == b"tag" =>
                {
                    let mut key = None;
                    let mut value = None;
                    for attribute in element.attributes() {
                        let attribute = attribute.map_err(|e| xml_error(e.to_string()))?;
                        match attribute.key.as_ref() {
                            b"k" => {
                                key = Some(
                                    attribute
                                        .unescape_value()
                                        .map_err(|e| xml_error(e.to_string()))?,
                                )
                            }
                            b"v" => {
                                value = Some(
                                    attribute
                                        .unescape_value()
                                        .map_err(|e| xml_error(e.to_string()))?,
                                )
                            }
                            _ => {}
                        }
                    }
                    if let (Some(key), Some(value)) = (key, value) {
                        if self.wants(&key) {
                            sink(&value);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(xml_error(e.to_string())),
            }
            buf.clear();
        }
        Ok(())
    }
}
