use crate::chvalid::XmlCharValid;

use super::super::XmlParserCtxt;

impl XmlParserCtxt<'_> {
    /// Parse an XML name.
    ///
    /// ```text
    /// [4] NameChar ::= Letter | Digit | '.' | '-' | '_' | ':' | CombiningChar | Extender
    /// [5] Name ::= (Letter | '_' | ':') (NameChar)*
    /// ```
    ///
    /// Returns `None` without consuming anything if no name starts here.
    #[doc(alias = "xmlParseName")]
    pub(crate) fn parse_name(&mut self) -> Option<String> {
        let content = self.content();
        let mut chars = content.char_indices();
        let (_, first) = chars.next()?;
        if !first.is_name_start_char() {
            return None;
        }
        let len = chars
            .find(|&(_, c)| !c.is_name_char())
            .map_or(content.len(), |(i, _)| i);
        let name = content[..len].to_owned();
        self.advance(len);
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{XmlParserConfig, XmlParserCtxt};

    #[test]
    fn parse_name_test() {
        const TESTS: &[(&str, Option<&str>, u8)] = &[
            ("data source", Some("data"), b' '),
            ("dat/a>", Some("dat"), b'/'),
            ("_x-1.2:y>", Some("_x-1.2:y"), b'>'),
            ("Überschrift>", Some("Überschrift"), b'>'),
            ("1abc", None, b'1'),
            ("-abc", None, b'-'),
            (" abc", None, b' '),
            ("", None, 0),
        ];

        let config = XmlParserConfig::default();
        for &(input, name, next) in TESTS {
            let mut ctxt = XmlParserCtxt::new(&config, input);
            assert_eq!(ctxt.parse_name().as_deref(), name, "{input:?}");
            assert_eq!(ctxt.current_byte(), next, "{input:?}");
        }
    }
}
