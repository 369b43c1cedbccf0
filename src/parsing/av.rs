use std::io::BufRead;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tracing::info;

use crate::core::entry::CatalogEntry;
use crate::parsing::ParseError;

/// Parse an av-style catalog from a file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse
/// errors if the document is invalid.
pub fn parse_file(path: &Path) -> Result<Vec<CatalogEntry>, ParseError> {
    let file = std::fs::File::open(path)?;
    parse_reader(std::io::BufReader::new(file))
}

/// Parse an av-style catalog from text
pub fn parse_text(text: &str) -> Result<Vec<CatalogEntry>, ParseError> {
    parse_reader(text.as_bytes())
}

/// Parse `/Catalog/Make/Model` elements; `Make@name` and `Model@name`
/// carry the literal names.
fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<CatalogEntry>, ParseError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut entries = Vec::new();
    let mut current_make: Option<String> = None;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.name().as_ref() {
                b"Make" => current_make = name_attribute(e)?,
                b"Model" => push_model(&mut entries, current_make.as_deref(), e)?,
                _ => {}
            },
            Event::Empty(ref e) => {
                if e.name().as_ref() == b"Model" {
                    push_model(&mut entries, current_make.as_deref(), e)?;
                }
            }
            Event::End(ref e) => {
                if e.name().as_ref() == b"Make" {
                    current_make = None;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    info!("av-style: parsed {} model entries", entries.len());
    Ok(entries)
}

fn push_model(
    entries: &mut Vec<CatalogEntry>,
    current_make: Option<&str>,
    e: &BytesStart<'_>,
) -> Result<(), ParseError> {
    let make = current_make
        .ok_or_else(|| ParseError::invalid("Model element outside of a Make element"))?;
    let model = name_attribute(e)?
        .ok_or_else(|| ParseError::invalid("Model element without a name attribute"))?;
    entries.push(CatalogEntry::new(make, model));
    Ok(())
}

/// Extract the `name` attribute of an element, if present
fn name_attribute(e: &BytesStart<'_>) -> Result<Option<String>, ParseError> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"name" {
            return Ok(Some(String::from_utf8_lossy(&attr.value).to_string()));
        }
    }
    Ok(None)
}
