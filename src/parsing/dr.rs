use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use tracing::info;

use crate::core::entry::CatalogEntry;
use crate::parsing::ParseError;

/// Parse a dr-style catalog from a file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse
/// errors if the document is invalid.
pub fn parse_file(path: &Path) -> Result<Vec<CatalogEntry>, ParseError> {
    let file = std::fs::File::open(path)?;
    parse_reader(std::io::BufReader::new(file))
}

/// Parse a dr-style catalog from text
pub fn parse_text(text: &str) -> Result<Vec<CatalogEntry>, ParseError> {
    parse_reader(text.as_bytes())
}

/// Parse the two flat reference tables — `/References/Marks/Mark`
/// (`idMark`, `sMark`) and `/References/Models/Model` (`idMark`, `sModel`)
/// — and join them on the shared id. A model whose id resolves to no mark
/// gets an empty make string; the join never fails.
fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<CatalogEntry>, ParseError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut marks: HashMap<i64, String> = HashMap::new();
    let mut models: Vec<(i64, String)> = Vec::new();

    // Row fields being accumulated for the enclosing Mark/Model element
    let mut current_tag = String::new();
    let mut current_id: Option<i64> = None;
    let mut current_name: Option<String> = None;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if tag == "Mark" || tag == "Model" {
                    current_id = None;
                    current_name = None;
                }
                current_tag = tag;
            }
            Event::Text(ref e) => {
                let text = e.unescape()?.to_string();
                match current_tag.as_str() {
                    "idMark" => {
                        let id = text.trim().parse().map_err(|_| {
                            ParseError::invalid(format!("Invalid idMark value: '{text}'"))
                        })?;
                        current_id = Some(id);
                    }
                    "sMark" | "sModel" => current_name = Some(text),
                    _ => {}
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"Mark" => {
                    if let (Some(id), Some(name)) = (current_id.take(), current_name.take()) {
                        marks.insert(id, name);
                    }
                }
                b"Model" => {
                    if let (Some(id), Some(name)) = (current_id.take(), current_name.take()) {
                        models.push((id, name));
                    }
                }
                _ => current_tag.clear(),
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    let entries: Vec<CatalogEntry> = models
        .into_iter()
        .map(|(id, model)| {
            let make = marks.get(&id).cloned().unwrap_or_default();
            CatalogEntry::new(make, model)
        })
        .collect();

    info!(
        "dr-style: parsed {} marks, {} model entries",
        marks.len(),
        entries.len()
    );
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<References>
    <Marks>
        <Mark>
            <idMark>1</idMark>
            <sMark>Toyota</sMark>
        </Mark>
        <Mark>
            <idMark>2</idMark>
            <sMark>Lada</sMark>
        </Mark>
    </Marks>
    <Models>
        <Model>
            <idMark>1</idMark>
            <sModel>Corolla</sModel>
        </Model>
        <Model>
            <idMark>2</idMark>
            <sModel>VAZ-2107</sModel>
        </Model>
        <Model>
            <idMark>99</idMark>
            <sModel>Orphan</sModel>
        </Model>
    </Models>
</References>"#;

    #[test]
    fn test_parse_dr_catalog_joins_on_id() {
        let entries = parse_text(SAMPLE).unwrap();
        assert_eq!(
            entries,
            vec![
                CatalogEntry::new("Toyota", "Corolla"),
                CatalogEntry::new("Lada", "VAZ-2107"),
                // Unresolved id: empty make sentinel, not an error.
                CatalogEntry::new("", "Orphan"),
            ]
        );
    }

    #[test]
    fn test_parse_dr_invalid_id_is_an_error() {
        let xml = r#"<References><Marks><Mark><idMark>abc</idMark><sMark>X</sMark></Mark></Marks></References>"#;
        let result = parse_text(xml);
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_dr_models_before_marks() {
        // The two tables may appear in either order; the join happens after
        // the whole document is read.
        let xml = r#"<References>
            <Models><Model><idMark>5</idMark><sModel>Niva</sModel></Model></Models>
            <Marks><Mark><idMark>5</idMark><sMark>VAZ</sMark></Mark></Marks>
        </References>"#;
        let entries = parse_text(xml).unwrap();
        assert_eq!(entries, vec![CatalogEntry::new("VAZ", "Niva")]);
    }
}
