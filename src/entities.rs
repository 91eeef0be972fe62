//! Character entity decoding and encoding.
//!
//! Decoding never fails: anything that does not form a
//! complete, known reference is copied through untouched, and exactly one
//! level of escaping is removed per call.

use std::borrow::Cow;

use crate::chvalid::xml_is_char;
#[cfg(feature = "html")]
use crate::html::html_entity_lookup;

/// Longest reference body (between `&` and `;`) worth looking at.
/// The longest HTML 4.01 name is 8 characters, `&#x10FFFF;` needs 8.
const MAX_REFERENCE_LENGTH: usize = 32;

/// The XML predefined entities.
///
/// ```text
/// 4.6 Predefined Entities
/// ```
const XML_PREDEFINED_ENTITIES: &[(&str, char)] = &[
    ("lt", '<'),
    ("gt", '>'),
    ("amp", '&'),
    ("apos", '\''),
    ("quot", '"'),
];

/// Check whether this name is a predefined entity.
#[doc(alias = "xmlGetPredefinedEntity")]
pub fn xml_get_predefined_entity(name: &str) -> Option<char> {
    XML_PREDEFINED_ENTITIES
        .iter()
        .find(|(ent, _)| *ent == name)
        .map(|&(_, c)| c)
}

/// Resolve a named entity: the XML built-ins first, then HTML 4.01 names.
fn lookup_named_entity(name: &str) -> Option<char> {
    if let Some(c) = xml_get_predefined_entity(name) {
        return Some(c);
    }
    #[cfg(feature = "html")]
    if let Some(c) = html_entity_lookup(name).and_then(|ent| ent.as_char()) {
        return Some(c);
    }
    None
}

/// Resolve the body of a character reference (`#65`, `#x41`).
///
/// ```text
/// [66] CharRef ::= '&#' [0-9]+ ';' | '&#x' [0-9a-fA-F]+ ';'
/// ```
#[doc(alias = "xmlParseStringCharRef")]
fn parse_char_ref(body: &str) -> Option<char> {
    let body = body.strip_prefix('#')?;
    let (digits, radix) = match body.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16),
        None => (body, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let value = u32::from_str_radix(digits, radix).ok()?;
    // [ WFC: Legal Character ]
    if !xml_is_char(value) {
        return None;
    }
    char::from_u32(value)
}

/// Try to decode the reference at the head of `input`, which starts with `&`.
///
/// Returns the decoded character and the number of bytes consumed.
fn decode_reference(input: &str) -> Option<(char, usize)> {
    let rest = input.strip_prefix('&')?;
    let end = rest
        .char_indices()
        .take(MAX_REFERENCE_LENGTH + 1)
        .find(|&(_, c)| !(c.is_ascii_alphanumeric() || c == '#'))
        .map(|(i, _)| i)?;
    if !rest[end..].starts_with(';') || end == 0 {
        return None;
    }
    let body = &rest[..end];
    let c = if body.starts_with('#') {
        parse_char_ref(body)?
    } else {
        lookup_named_entity(body)?
    };
    // '&' + body + ';'
    Some((c, end + 2))
}

/// Decode character and entity references in `text`.
///
/// - `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;` and (with the `html`
///   feature) every HTML 4.01 named entity are replaced by their character.
/// - `&#NNN;` and `&#xHH;` are replaced when they name a legal XML character.
/// - Unknown names, references without `;` and illegal code points are
///   left as they are.
///
/// The output is never decoded again, so `&amp;amp;` becomes `&amp;`.
///
/// ```
/// use ibxml::entities::decode_entities;
///
/// assert_eq!(decode_entities("a &amp; b"), "a & b");
/// assert_eq!(decode_entities("&amp;amp;"), "&amp;");
/// assert_eq!(decode_entities("&aksjdf;"), "&aksjdf;");
/// ```
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find('&') else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    let mut rest = &text[first..];
    let mut changed = false;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        if let Some((c, len)) = decode_reference(rest) {
            out.push(c);
            rest = &rest[len..];
            changed = true;
        } else {
            out.push('&');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(text)
    }
}

/// Escape `&`, `<` and `>` so that `text` can be written as character data.
#[doc(alias = "xmlEncodeSpecialChars")]
pub fn xml_encode_special_chars(text: &str) -> Cow<'_, str> {
    encode_with(text, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '\r' => Some("&#13;"),
        _ => None,
    })
}

/// Escape `text` for use inside a double quoted attribute value.
#[doc(alias = "xmlBufAttrSerializeTxtContent")]
pub fn xml_encode_attribute_value(text: &str) -> Cow<'_, str> {
    encode_with(text, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\n' => Some("&#10;"),
        '\r' => Some("&#13;"),
        '\t' => Some("&#9;"),
        _ => None,
    })
}

fn encode_with(text: &str, replace: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    if !text.chars().any(|c| replace(c).is_some()) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match replace(c) {
            Some(rep) => out.push_str(rep),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_entities() {
        assert_eq!(decode_entities("&amp;"), "&");
        assert_eq!(decode_entities("&lt;&gt;"), "<>");
        assert_eq!(decode_entities("&quot;x&apos;"), "\"x'");
        assert_eq!(xml_get_predefined_entity("amp"), Some('&'));
        assert_eq!(xml_get_predefined_entity("nbsp"), None);
    }

    #[cfg(feature = "html")]
    #[test]
    fn html_entities() {
        assert_eq!(decode_entities("&middot;"), "·");
        assert_eq!(decode_entities("&Uuml;"), "Ü");
        assert_eq!(decode_entities("&Delta;"), "Δ");
        assert_eq!(decode_entities("a&nbsp;b"), "a\u{A0}b");
    }

    #[test]
    fn character_references() {
        assert_eq!(decode_entities("&#65;&#x42;&#X43;"), "ABC");
        assert_eq!(decode_entities("&#x394;"), "Δ");
        assert_eq!(decode_entities("&#0;"), "&#0;");
        assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
        assert_eq!(decode_entities("&#x110000;"), "&#x110000;");
        assert_eq!(decode_entities("&#99999999999;"), "&#99999999999;");
        assert_eq!(decode_entities("&#;"), "&#;");
        assert_eq!(decode_entities("&#x;"), "&#x;");
        assert_eq!(decode_entities("&#12a;"), "&#12a;");
    }

    #[test]
    fn malformed_references_pass_through() {
        assert_eq!(decode_entities("&aksjdf;"), "&aksjdf;");
        assert_eq!(decode_entities("&amp"), "&amp");
        assert_eq!(decode_entities("&"), "&");
        assert_eq!(decode_entities("&;"), "&;");
        assert_eq!(decode_entities("a & b"), "a & b");
        assert_eq!(decode_entities("&am p;"), "&am p;");
        assert_eq!(decode_entities("&&amp;"), "&&");
        assert_eq!(decode_entities("&AMP;"), "&AMP;");
    }

    #[test]
    fn single_level() {
        assert_eq!(decode_entities("&amp;amp;"), "&amp;");
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities(&decode_entities("&amp;amp;")), "&");
    }

    #[test]
    fn borrowed_when_unchanged() {
        assert!(matches!(decode_entities("plain text"), Cow::Borrowed(_)));
        assert!(matches!(decode_entities("&unknown;"), Cow::Borrowed(_)));
        assert!(matches!(decode_entities("&amp;"), Cow::Owned(_)));
    }

    #[test]
    fn decoding_is_idempotent_without_references() {
        for text in ["", "sadf <br> sakdjfl", "<>", "a & b", "ü·Δ"] {
            let once = decode_entities(text);
            assert_eq!(decode_entities(&once), once);
        }
    }

    #[test]
    fn encode_special_chars() {
        assert_eq!(xml_encode_special_chars("a<b>&c"), "a&lt;b&gt;&amp;c");
        assert_eq!(xml_encode_attribute_value("\"x\"\n"), "&quot;x&quot;&#10;");
        assert!(matches!(xml_encode_special_chars("abc"), Cow::Borrowed(_)));
    }
}
