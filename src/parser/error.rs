//! Diagnostic taxonomy and collection for the parser.
//!
//! [`XmlParserDiagnostic`] is the only place where a diagnostic's level,
//! code and message text are decided. Parsing routines raise diagnostics
//! through the `xml_*_err*` helpers below, which stamp the current input
//! position and hand the result to the context's [`XmlErrorCollector`].

use std::borrow::Cow;

use crate::error::{XmlError, XmlErrorLevel, XmlParserErrors};

use super::XmlParserCtxt;

/// Every condition the parser can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlParserDiagnostic {
    /// An attribute could not be parsed at all; the start tag stops there.
    ProblemParsingAttributes,
    /// The element stack grew beyond the configured depth.
    ExcessiveDepth { max_depth: usize },
    /// The input is larger than the configured length limit.
    HugeInputLookup,
    DocumentEmpty,
    StartTagExpected,
    DocumentEnd,
    InvalidChar { value: u32 },
    InvalidCharInAttribute,
    StringNotStarted,
    StringNotClosed,
    LtInAttribute,
    AttributeNotStarted,
    AttributeNotFinished,
    AttributeWithoutValue { name: String },
    AttributeRedefined { name: String },
    CommentNotFinished,
    HyphenInComment,
    PINotStarted,
    PINotFinished { target: String },
    PISpaceRequired { target: String },
    XmlDeclNotFinished,
    MisplacedCDATAEnd,
    CDATANotFinished,
    ReservedXmlName,
    ReservedXmlNamePrefix,
    AttributesConstruct,
    BlankRequiredAfterXmlDecl,
    BlankRequired,
    AttributeNameRequired,
    StartTagInvalidName,
    GtRequired,
    StartTagNotFinished { name: String, line: usize },
    EqualRequired,
    TagNameMismatch { open: String, line: usize, close: String },
    TagNotFinished { name: String, line: usize },
    InvalidEncoding,
    StandaloneValue,
    VersionMissing,
    UnsupportedVersion { version: String },
    UnknownVersion { version: String },
}

impl XmlParserDiagnostic {
    pub fn code(&self) -> XmlParserErrors {
        use XmlParserErrors::*;

        match self {
            Self::ProblemParsingAttributes
            | Self::ExcessiveDepth { .. }
            | Self::HugeInputLookup => XmlErrInternalError,
            Self::DocumentEmpty | Self::StartTagExpected => XmlErrDocumentEmpty,
            Self::DocumentEnd => XmlErrDocumentEnd,
            Self::InvalidChar { .. } | Self::InvalidCharInAttribute => XmlErrInvalidChar,
            Self::StringNotStarted => XmlErrStringNotStarted,
            Self::StringNotClosed => XmlErrStringNotClosed,
            Self::LtInAttribute => XmlErrLtInAttribute,
            Self::AttributeNotStarted => XmlErrAttributeNotStarted,
            Self::AttributeNotFinished => XmlErrAttributeNotFinished,
            Self::AttributeWithoutValue { .. } => XmlErrAttributeWithoutValue,
            Self::AttributeRedefined { .. } => XmlErrAttributeRedefined,
            Self::CommentNotFinished => XmlErrCommentNotFinished,
            Self::HyphenInComment => XmlErrHyphenInComment,
            Self::PINotStarted => XmlErrPINotStarted,
            Self::PINotFinished { .. } => XmlErrPINotFinished,
            Self::XmlDeclNotFinished => XmlErrXMLDeclNotFinished,
            Self::MisplacedCDATAEnd => XmlErrMisplacedCDATAEnd,
            Self::CDATANotFinished => XmlErrCDATANotFinished,
            Self::ReservedXmlName | Self::ReservedXmlNamePrefix => XmlErrReservedXmlName,
            Self::AttributesConstruct
            | Self::BlankRequiredAfterXmlDecl
            | Self::BlankRequired
            | Self::PISpaceRequired { .. } => XmlErrSpaceRequired,
            Self::AttributeNameRequired | Self::StartTagInvalidName => XmlErrNameRequired,
            Self::GtRequired | Self::StartTagNotFinished { .. } => XmlErrGtRequired,
            Self::EqualRequired => XmlErrEqualRequired,
            Self::TagNameMismatch { .. } => XmlErrTagNameMismatch,
            Self::TagNotFinished { .. } => XmlErrTagNotFinished,
            Self::InvalidEncoding => XmlErrInvalidEncoding,
            Self::StandaloneValue => XmlErrStandaloneValue,
            Self::VersionMissing => XmlErrVersionMissing,
            Self::UnsupportedVersion { .. } => XmlWarUnknownVersion,
            Self::UnknownVersion { .. } => XmlErrUnknownVersion,
        }
    }

    pub fn level(&self) -> XmlErrorLevel {
        match self {
            Self::UnsupportedVersion { .. } | Self::ReservedXmlNamePrefix => {
                XmlErrorLevel::XmlErrWarning
            }
            _ => XmlErrorLevel::XmlErrFatal,
        }
    }

    /// The message text, without libxml2's trailing newline.
    pub fn message(&self) -> Cow<'static, str> {
        match self {
            Self::ProblemParsingAttributes => {
                "xmlParseStartTag: problem parsing attributes".into()
            }
            Self::ExcessiveDepth { max_depth } => format!(
                "Excessive depth in document: {max_depth} use XML_PARSE_HUGE option"
            )
            .into(),
            Self::HugeInputLookup => "Huge input lookup".into(),
            Self::DocumentEmpty => "Document is empty".into(),
            Self::StartTagExpected => "Start tag expected, '<' not found".into(),
            Self::DocumentEnd => "Extra content at the end of the document".into(),
            Self::InvalidChar { value } => format!("PCDATA invalid Char value {value}").into(),
            Self::InvalidCharInAttribute => "invalid character in attribute value".into(),
            Self::StringNotStarted => "String not started expecting ' or \"".into(),
            Self::StringNotClosed => "String not closed expecting \" or '".into(),
            Self::LtInAttribute => "Unescaped '<' not allowed in attributes values".into(),
            Self::AttributeNotStarted => "AttValue: \" or ' expected".into(),
            Self::AttributeNotFinished => "AttValue: ' expected".into(),
            Self::AttributeWithoutValue { name } => {
                format!("Specification mandates value for attribute {name}").into()
            }
            Self::AttributeRedefined { name } => format!("Attribute {name} redefined").into(),
            Self::CommentNotFinished => "Comment not terminated".into(),
            Self::HyphenInComment => "Double hyphen within comment".into(),
            Self::PINotStarted => "xmlParsePI : no target name".into(),
            Self::PINotFinished { target } => format!("ParsePI: PI {target} never end ...").into(),
            Self::PISpaceRequired { target } => {
                format!("ParsePI: PI {target} space expected").into()
            }
            Self::XmlDeclNotFinished => "parsing XML declaration: '?>' expected".into(),
            Self::MisplacedCDATAEnd => "Sequence ']]>' not allowed in content".into(),
            Self::CDATANotFinished => "CData section not finished".into(),
            Self::ReservedXmlName => {
                "XML declaration allowed only at the start of the document".into()
            }
            Self::ReservedXmlNamePrefix => "xmlParsePITarget: invalid name prefix 'xml'".into(),
            Self::AttributesConstruct => "attributes construct error".into(),
            Self::BlankRequiredAfterXmlDecl => "Blank needed after '<?xml'".into(),
            Self::BlankRequired => "Blank needed here".into(),
            Self::AttributeNameRequired => "error parsing attribute name".into(),
            Self::StartTagInvalidName => "StartTag: invalid element name".into(),
            Self::GtRequired => "expected '>'".into(),
            Self::StartTagNotFinished { name, line } => {
                format!("Couldn't find end of Start Tag {name} line {line}").into()
            }
            Self::EqualRequired => "expected '='".into(),
            Self::TagNameMismatch { open, line, close } => {
                format!("Opening and ending tag mismatch: {open} line {line} and {close}").into()
            }
            Self::TagNotFinished { name, line } => {
                format!("Premature end of data in tag {name} line {line}").into()
            }
            Self::InvalidEncoding => "Input is not proper UTF-8, indicate encoding !".into(),
            Self::StandaloneValue => "standalone accepts only 'yes' or 'no'".into(),
            Self::VersionMissing => "Malformed declaration expecting version".into(),
            Self::UnsupportedVersion { version } | Self::UnknownVersion { version } => {
                format!("Unsupported version '{version}'").into()
            }
        }
    }

    /// The string libxml2 attaches as `str1`, if any.
    pub fn str1(&self) -> Option<Cow<'static, str>> {
        match self {
            Self::AttributeWithoutValue { name }
            | Self::AttributeRedefined { name }
            | Self::StartTagNotFinished { name, .. }
            | Self::TagNotFinished { name, .. }
            | Self::TagNameMismatch { open: name, .. } => Some(name.clone().into()),
            Self::PINotFinished { target } | Self::PISpaceRequired { target } => {
                Some(target.clone().into())
            }
            Self::UnsupportedVersion { version } | Self::UnknownVersion { version } => {
                Some(version.clone().into())
            }
            _ => None,
        }
    }
}

/// Ordered sink of diagnostics for one parse.
///
/// Nothing is merged, filtered or reordered.
#[derive(Debug, Clone, Default)]
pub struct XmlErrorCollector {
    errors: Vec<XmlError>,
}

impl XmlErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic. Surrounding whitespace of `message` is removed.
    pub fn record(
        &mut self,
        level: XmlErrorLevel,
        code: XmlParserErrors,
        message: impl Into<Cow<'static, str>>,
        line: usize,
    ) {
        self.push(XmlError {
            level,
            code,
            message: message.into(),
            line,
            col: 0,
            str1: None,
        });
    }

    pub(crate) fn push(&mut self, mut error: XmlError) {
        let trimmed = error.message.trim();
        if trimmed.len() != error.message.len() {
            error.message = Cow::Owned(trimmed.to_owned());
        }
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_fatal(&self) -> bool {
        self.errors.iter().any(|err| err.is_fatal())
    }

    pub fn iter(&self) -> impl Iterator<Item = &XmlError> {
        self.errors.iter()
    }

    /// Take every recorded diagnostic, in emission order.
    pub fn drain(&mut self) -> Vec<XmlError> {
        std::mem::take(&mut self.errors)
    }
}

/// Raise `diag` at the current input position.
///
/// Nothing is reported once parsing has been halted.
#[doc(alias = "__xmlRaiseError")]
pub(crate) fn xml_raise_error(ctxt: &mut XmlParserCtxt, diag: XmlParserDiagnostic) {
    if ctxt.is_halted() {
        return;
    }
    let level = diag.level();
    if level == XmlErrorLevel::XmlErrWarning && ctxt.no_warnings() {
        return;
    }
    if level == XmlErrorLevel::XmlErrFatal {
        ctxt.well_formed = false;
    }
    let error = XmlError {
        level,
        code: diag.code(),
        message: diag.message(),
        line: ctxt.line,
        col: ctxt.col,
        str1: diag.str1(),
    };
    ctxt.errors.push(error);
}

/// Handle a fatal parser error, i.e. violating Well-Formedness constraints
#[doc(alias = "xmlFatalErr")]
pub(crate) fn xml_fatal_err(ctxt: &mut XmlParserCtxt, diag: XmlParserDiagnostic) {
    debug_assert_eq!(diag.level(), XmlErrorLevel::XmlErrFatal);
    xml_raise_error(ctxt, diag);
}

/// Handle a warning.
#[doc(alias = "xmlWarningMsg")]
pub(crate) fn xml_warning_msg(ctxt: &mut XmlParserCtxt, diag: XmlParserDiagnostic) {
    debug_assert_eq!(diag.level(), XmlErrorLevel::XmlErrWarning);
    xml_raise_error(ctxt, diag);
}
