//! Parsers for the three catalog XML schemas.
//!
//! Each naming convention ships its makes and models in a different document
//! shape; every parser flattens its document into the same
//! `Vec<CatalogEntry>`:
//!
//! | Schema   | Path                      | Names carried in                    |
//! |----------|---------------------------|-------------------------------------|
//! | av-style | `/Catalog/Make/Model`     | `name` attributes                   |
//! | au-style | `/catalog/mark/folder`    | `name` attributes, model annotated  |
//! | dr-style | `/References/Marks\|Models` | child elements, joined on `idMark` |
//!
//! au-style model names may carry a trailing comma-delimited annotation
//! (`"Corolla, sedan"`), stripped before the name participates in matching.
//! dr-style models whose `idMark` resolves to no mark get an empty make
//! string instead of failing the join.

use thiserror::Error;

pub mod au;
pub mod av;
pub mod dr;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Invalid catalog document: {0}")]
    InvalidFormat(String),
}

impl ParseError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }
}
