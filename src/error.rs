//! Error codes, levels and the diagnostic record produced by the parser.
//!
//! Codes and levels use the same numbering as libxml2's `xmlParserErrors`
//! and `xmlErrorLevel`, so callers that used to inspect libxml2 errors can
//! compare them unchanged.

use std::{borrow::Cow, fmt, io::Write};

macro_rules! impl_xml_parser_errors {
    ( $( $variant:ident = $value:literal ),* $(,)? ) => {
        /// The subset of libxml2 `xmlParserErrors` this parser can emit.
        #[repr(C)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum XmlParserErrors {
            $(
                $variant = $value
            ),*
        }

        impl XmlParserErrors {
            /// Every known code, in ascending order.
            pub const ALL: &'static [XmlParserErrors] = &[ $( Self:: $variant ),* ];
        }

        impl TryFrom<i32> for XmlParserErrors {
            type Error = anyhow::Error;
            fn try_from(value: i32) -> Result<Self, Self::Error> {
                $(
                    if value == Self:: $variant as i32 {
                        return Ok(Self:: $variant);
                    }
                )*
                Err(anyhow::anyhow!(
                    "Invalid convert from value '{value}' to {}",
                    std::any::type_name::<Self>()
                ))
            }
        }

        impl Default for XmlParserErrors {
            fn default() -> Self {
                Self::XmlErrOK
            }
        }
    };
}
impl_xml_parser_errors!(
    XmlErrOK = 0,
    XmlErrInternalError = 1,
    XmlErrDocumentEmpty = 4,
    XmlErrDocumentEnd = 5,
    XmlErrInvalidChar = 9,
    XmlErrStringNotStarted = 33,
    XmlErrStringNotClosed = 34,
    XmlErrLtInAttribute = 38,
    XmlErrAttributeNotStarted = 39,
    XmlErrAttributeNotFinished = 40,
    XmlErrAttributeWithoutValue = 41,
    XmlErrAttributeRedefined = 42,
    XmlErrCommentNotFinished = 45,
    XmlErrPINotStarted = 46,
    XmlErrPINotFinished = 47,
    XmlErrXMLDeclNotFinished = 57,
    XmlErrMisplacedCDATAEnd = 62,
    XmlErrCDATANotFinished = 63,
    XmlErrReservedXmlName = 64,
    XmlErrSpaceRequired = 65,
    XmlErrNameRequired = 68,
    XmlErrGtRequired = 73,
    XmlErrEqualRequired = 75,
    XmlErrTagNameMismatch = 76,
    XmlErrTagNotFinished = 77,
    XmlErrStandaloneValue = 78,
    XmlErrHyphenInComment = 80,
    XmlErrInvalidEncoding = 81,
    XmlErrVersionMissing = 96,
    XmlWarUnknownVersion = 97,
    XmlErrUnknownVersion = 108,
);

/// Indicates the level of an error.
#[doc(alias = "xmlErrorLevel")]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum XmlErrorLevel {
    #[default]
    XmlErrNone = 0,
    /// A simple warning
    XmlErrWarning = 1,
    /// A recoverable error
    XmlErrError = 2,
    /// A fatal error
    XmlErrFatal = 3,
}

impl XmlErrorLevel {
    fn as_report_str(&self) -> &'static str {
        match self {
            Self::XmlErrWarning => "warning : ",
            _ => "error : ",
        }
    }
}

/// One diagnostic emitted while parsing.
///
/// `message` never carries the trailing newline libxml2 appends.
#[doc(alias = "xmlError")]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlError {
    pub level: XmlErrorLevel,
    pub code: XmlParserErrors,
    pub message: Cow<'static, str>,
    /// 1-based line of the input cursor when the error was raised.
    pub line: usize,
    /// 1-based column, best effort.
    pub col: usize,
    /// Extra string information, usually the element or attribute name.
    pub str1: Option<Cow<'static, str>>,
}

impl XmlError {
    pub fn is_fatal(&self) -> bool {
        self.level == XmlErrorLevel::XmlErrFatal
    }
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: parser {}{}",
            self.line,
            self.level.as_report_str(),
            self.message
        )
    }
}

/// Write `err` the way libxml2's default error handler does, including the
/// offending source line and a caret under the column when `source` is given.
///
/// ```text
/// file.xml:1: parser error : Opening and ending tag mismatch: data line 1 and dat
/// <data>d</dat/a>
///             ^
/// ```
#[doc(alias = "xmlReportError")]
pub fn report_error(
    out: &mut impl Write,
    err: &XmlError,
    file: Option<&str>,
    source: Option<&str>,
) -> std::io::Result<()> {
    match file {
        Some(file) => write!(out, "{file}:{}: ", err.line)?,
        None => write!(out, "Entity: line {}: ", err.line)?,
    }
    writeln!(
        out,
        "parser {}{}",
        err.level.as_report_str(),
        err.message
    )?;
    if let Some(source) = source {
        print_file_context(out, source, err.line, err.col)?;
    }
    Ok(())
}

/// Print at most 80 characters of the line `line` and a caret below `col`.
#[doc(alias = "xmlParserPrintFileContextInternal")]
fn print_file_context(
    out: &mut impl Write,
    source: &str,
    line: usize,
    col: usize,
) -> std::io::Result<()> {
    const SIZE: usize = 80;

    let Some(content) = source.split('\n').nth(line.saturating_sub(1)) else {
        return Ok(());
    };
    let col = col.max(1);
    let skip = col.saturating_sub(SIZE);
    let shown = content.chars().skip(skip).take(SIZE).collect::<String>();
    writeln!(out, "{shown}")?;
    let caret = shown
        .chars()
        .take(col - 1 - skip)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect::<String>();
    writeln!(out, "{caret}^")
}

/// Write a message on `out`, or on stderr when no sink is given.
pub fn generic_error_default(out: Option<&mut impl Write>, msg: &str) {
    if let Some(out) = out {
        write!(out, "{msg}").ok();
    } else {
        eprint!("{msg}");
    }
}
