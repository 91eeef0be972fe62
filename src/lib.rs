//! A lenient parser for small XML fragments such as infobox markup.
//!
//! Malformed markup never panics and never aborts the caller. Every problem
//! is reported as an [`XmlError`] carrying the libxml2 level, code and
//! message, and a tree is returned whenever the root element could be
//! closed.
//!
//! ```
//! use ibxml::{parse_xml_string, XmlParserErrors};
//!
//! let doc = parse_xml_string(r#"<infobox><data source="caption"></data></infobox>"#).unwrap();
//! assert_eq!(doc.root().child("data").unwrap().attribute("source"), Some("caption"));
//!
//! // the mismatched end tag still closes the root, so a tree is returned
//! let doc = parse_xml_string("<data>d</dat/a>").unwrap();
//! let codes = doc.errors().iter().map(|e| e.code).collect::<Vec<_>>();
//! assert_eq!(
//!     codes,
//!     [
//!         XmlParserErrors::XmlErrGtRequired,
//!         XmlParserErrors::XmlErrTagNameMismatch,
//!         XmlParserErrors::XmlErrDocumentEnd,
//!     ]
//! );
//! ```
#![warn(unused_mut)]
#![warn(unused_imports)]
#![warn(unused_labels)]
#![warn(unused_parens)]
#![warn(unused_variables)]

pub mod chvalid;
pub mod encoding;
pub mod entities;
pub mod error;
#[cfg(feature = "html")]
pub mod html;
pub mod parser;
pub mod tree;

pub use entities::decode_entities;
pub use error::{XmlError, XmlErrorLevel, XmlParserErrors, report_error};
#[cfg(feature = "html")]
pub use html::html_entity_lookup;
pub use parser::{
    UnparseableMarkupError, XmlErrorCollector, XmlParseResult, XmlParserConfig,
    XmlParserDiagnostic, XmlParserOption, parse_xml_bytes, parse_xml_string,
};
pub use tree::{XmlDocument, XmlNode, XmlNodeContent};
