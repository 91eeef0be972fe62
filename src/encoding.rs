//! Decoding of undecoded input bytes.
//!
//! The parser itself works on `str`. Byte input is decoded up front: a byte
//! order mark or the first four bytes pick UTF-16, otherwise the `encoding`
//! label of a leading XML declaration is honored, and UTF-8 is the default.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252};

use crate::parser::XmlParserDiagnostic;

/// Encodings that can be told apart from the first bytes of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlCharEncoding {
    None,
    UTF8,
    UTF16LE,
    UTF16BE,
}

impl XmlCharEncoding {
    fn encoding(&self) -> Option<&'static Encoding> {
        match *self {
            Self::UTF8 => Some(UTF_8),
            Self::UTF16LE => Some(UTF_16LE),
            Self::UTF16BE => Some(UTF_16BE),
            Self::None => None,
        }
    }
}

/// Guess the encoding from the first bytes of `input`.
///
/// ```text
/// F. Autodetection of Character Encodings
/// ```
#[doc(alias = "xmlDetectCharEncoding")]
pub fn detect_encoding(input: &[u8]) -> XmlCharEncoding {
    match input {
        [0x3C, 0x3F, 0x78, 0x6D, ..] => XmlCharEncoding::UTF8,
        [0x3C, 0x00, 0x3F, 0x00, ..] => XmlCharEncoding::UTF16LE,
        [0x00, 0x3C, 0x00, 0x3F, ..] => XmlCharEncoding::UTF16BE,
        // UTF-8 BOM
        [0xEF, 0xBB, 0xBF, ..] => XmlCharEncoding::UTF8,
        // UTF-16 BOM (BE)
        [0xFE, 0xFF, ..] => XmlCharEncoding::UTF16BE,
        // UTF-16 BOM (LE)
        [0xFF, 0xFE, ..] => XmlCharEncoding::UTF16LE,
        _ => XmlCharEncoding::None,
    }
}

/// Look up a decoder by the label of an `encoding` declaration.
///
/// UTF-16 labels are not trusted here: a declaration that could be read
/// as ASCII cannot describe a UTF-16 document.
#[doc(alias = "xmlFindCharEncodingHandler")]
pub fn find_encoding(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes()).map(Encoding::output_encoding)
}

/// Extract the `encoding` pseudo-attribute of a leading `<?xml ... ?>`.
fn sniff_declared_encoding(input: &[u8]) -> Option<&str> {
    let decl = input.strip_prefix(b"<?xml")?;
    let end = decl.windows(2).take(1024).position(|w| w == b"?>")?;
    let decl = std::str::from_utf8(&decl[..end]).ok()?;
    let rest = &decl[decl.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|&c| c == '"' || c == '\'')?;
    let rest = &rest[1..];
    rest.find(quote).map(|len| &rest[..len])
}

/// Decode `input` into a string.
///
/// Malformed input is reported as [`XmlParserDiagnostic::InvalidEncoding`]
/// and decoded again as windows-1252, so that parsing can go on.
pub fn decode_input(input: &[u8]) -> (Cow<'_, str>, Option<XmlParserDiagnostic>) {
    let (encoding, input) = match Encoding::for_bom(input) {
        Some((encoding, bom_len)) => (encoding, &input[bom_len..]),
        None => {
            let encoding = detect_encoding(input)
                .encoding()
                .filter(|&enc| enc != UTF_8)
                .or_else(|| sniff_declared_encoding(input).and_then(find_encoding))
                .unwrap_or(UTF_8);
            (encoding, input)
        }
    };

    let (text, malformed) = encoding.decode_without_bom_handling(input);
    if !malformed {
        return (text, None);
    }
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(input);
    (text, Some(XmlParserDiagnostic::InvalidEncoding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect() {
        assert_eq!(detect_encoding(b"<?xml version"), XmlCharEncoding::UTF8);
        assert_eq!(detect_encoding(b"\xFF\xFE<\x00"), XmlCharEncoding::UTF16LE);
        assert_eq!(detect_encoding(b"\x00<\x00?"), XmlCharEncoding::UTF16BE);
        assert_eq!(detect_encoding(b"<data>"), XmlCharEncoding::None);
    }

    #[test]
    fn sniff_declaration() {
        assert_eq!(
            sniff_declared_encoding(b"<?xml version=\"1.0\" encoding = 'ISO-8859-1'?><a/>"),
            Some("ISO-8859-1")
        );
        assert_eq!(
            sniff_declared_encoding(b"<?xml version=\"1.0\"?><a/>"),
            None
        );
        assert_eq!(sniff_declared_encoding(b"<a encoding='x'/>"), None);
        assert_eq!(find_encoding("latin1"), Some(WINDOWS_1252));
        assert_eq!(find_encoding("utf-16"), Some(UTF_8));
        assert_eq!(find_encoding("no-such-encoding"), None);
    }

    #[test]
    fn decode() {
        let (text, err) = decode_input("<a>ü</a>".as_bytes());
        assert_eq!(text, "<a>ü</a>");
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(err, None);

        let (text, err) = decode_input(b"\xEF\xBB\xBF<a/>");
        assert_eq!(text, "<a/>");
        assert_eq!(err, None);

        let (text, err) = decode_input(b"\xFF\xFE<\x00a\x00/\x00>\x00");
        assert_eq!(text, "<a/>");
        assert_eq!(err, None);

        let (text, err) = decode_input(b"<?xml version='1.0' encoding='ISO-8859-1'?><a>\xFC</a>");
        assert_eq!(text, "<?xml version='1.0' encoding='ISO-8859-1'?><a>ü</a>");
        assert_eq!(err, None);

        let (text, err) = decode_input(b"<a>\xFC</a>");
        assert_eq!(text, "<a>ü</a>");
        assert_eq!(err, Some(XmlParserDiagnostic::InvalidEncoding));
    }
}
