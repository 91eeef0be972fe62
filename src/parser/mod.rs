//! The parser front end.
//!
//! [`parse_xml_string`] is the entry point most callers need.
//! [`XmlParserConfig`] carries the option bits and the set of raw content
//! tags for callers that need something other than the defaults.

mod context;
mod error;
mod parse;

use std::fmt;

use crate::{encoding::decode_input, error::XmlError, tree::XmlDocument};

pub(crate) use context::*;
pub use error::*;

/// Maximum nesting depth of elements.
pub const XML_PARSER_MAX_DEPTH: usize = 256;
/// Maximum nesting depth of elements with [`XmlParserOption::XmlParseHuge`].
pub const XML_PARSER_HUGE_MAX_DEPTH: usize = 2048;
/// Maximum size of the input in bytes.
pub const XML_MAX_TEXT_LENGTH: usize = 10_000_000;
/// Maximum size of the input in bytes with [`XmlParserOption::XmlParseHuge`].
pub const XML_MAX_HUGE_LENGTH: usize = 1_000_000_000;

/// Elements whose content is taken as text up to their end tag.
pub const DEFAULT_RAW_CONTENT_TAGS: &[&str] =
    &["default", "label", "format", "navigation", "header"];

/// Parser options.
///
/// The values are the same as libxml2's `xmlParserOption`, and are combined
/// into an `i32` mask.
#[doc(alias = "xmlParserOption")]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlParserOption {
    /// suppress warning reports
    XmlParseNoWarning = 1 << 6,
    /// remove blank nodes
    XmlParseNoBlanks = 1 << 8,
    /// relax any hardcoded limit from the parser
    XmlParseHuge = 1 << 19,
}

/// Configuration of a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlParserConfig {
    pub(crate) options: i32,
    pub(crate) raw_content_tags: Vec<String>,
}

impl Default for XmlParserConfig {
    fn default() -> Self {
        Self {
            options: 0,
            raw_content_tags: DEFAULT_RAW_CONTENT_TAGS
                .iter()
                .map(|&tag| tag.to_owned())
                .collect(),
        }
    }
}

impl XmlParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the option mask, a combination of [`XmlParserOption`].
    #[doc(alias = "xmlCtxtUseOptions")]
    pub fn options(mut self, options: i32) -> Self {
        self.options = options;
        self
    }

    pub fn with_option(mut self, option: XmlParserOption) -> Self {
        self.options |= option as i32;
        self
    }

    pub fn get_options(&self) -> i32 {
        self.options
    }

    /// Replace the set of raw content tags.
    pub fn raw_content_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw_content_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_raw_content_tag(&self, name: &str) -> bool {
        self.raw_content_tags.iter().any(|tag| tag == name)
    }

    /// Parse `markup` with this configuration.
    #[doc(alias = "xmlCtxtReadMemory")]
    pub fn parse(&self, markup: &str) -> XmlParseResult {
        let mut ctxt = XmlParserCtxt::new(self, markup);
        ctxt.parse_document();
        ctxt.into_result()
    }

    /// Decode `bytes` and parse the result.
    ///
    /// A byte order mark or the `encoding` of a leading XML declaration
    /// selects the decoder; UTF-8 is assumed otherwise.
    pub fn parse_bytes(&self, bytes: &[u8]) -> XmlParseResult {
        let (markup, error) = decode_input(bytes);
        let mut ctxt = XmlParserCtxt::new(self, &markup);
        if let Some(diag) = error {
            xml_fatal_err(&mut ctxt, diag);
        }
        ctxt.parse_document();
        ctxt.into_result()
    }
}

impl XmlParserCtxt<'_> {
    fn into_result(mut self) -> XmlParseResult {
        let errors = self.errors.drain();
        match self.root.take() {
            Some(root) if !self.is_halted() => {
                Ok(XmlDocument::new(root, errors, self.well_formed))
            }
            _ => Err(UnparseableMarkupError { errors }),
        }
    }
}

/// Outcome of a parse. Both arms carry the diagnostics.
pub type XmlParseResult = Result<XmlDocument, UnparseableMarkupError>;

/// No usable tree could be built from the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnparseableMarkupError {
    errors: Vec<XmlError>,
}

impl UnparseableMarkupError {
    /// Diagnostics in emission order.
    pub fn errors(&self) -> &[XmlError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<XmlError> {
        self.errors
    }
}

impl fmt::Display for UnparseableMarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unparseable markup")?;
        if let Some(err) = self.errors.iter().find(|err| err.is_fatal()) {
            write!(f, ": {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for UnparseableMarkupError {}

/// Parse `markup` with the default configuration.
///
/// ```
/// let doc = ibxml::parse_xml_string(r#"<data source="caption"><label>Caption</label></data>"#)
///     .unwrap();
/// assert_eq!(doc.root().attribute("source"), Some("caption"));
/// assert!(doc.errors().is_empty());
///
/// let err = ibxml::parse_xml_string("<data>").unwrap_err();
/// assert_eq!(err.errors()[0].message, "Premature end of data in tag data line 1");
/// ```
#[doc(alias = "xmlReadMemory")]
pub fn parse_xml_string(markup: &str) -> XmlParseResult {
    XmlParserConfig::default().parse(markup)
}

/// Parse undecoded `bytes` with the default configuration.
pub fn parse_xml_bytes(bytes: &[u8]) -> XmlParseResult {
    XmlParserConfig::default().parse_bytes(bytes)
}
