use crate::{
    chvalid::{xml_is_blank_char, xml_is_char},
    entities::decode_entities,
};

use super::super::{XmlParserCtxt, XmlParserDiagnostic, xml_fatal_err};

impl XmlParserCtxt<'_> {
    /// Parse a value for an attribute.
    ///
    /// ```text
    /// [10] AttValue ::= '"' ([^<&"] | Reference)* '"' | "'" ([^<&'] | Reference)* "'"
    ///
    /// 3.3.3 Attribute-Value Normalization:
    /// For each character, entity reference, or character reference in the
    /// unnormalized attribute value, beginning with the first and continuing
    /// to the last, do the following:
    /// - For a character reference, append the referenced character to the
    ///   normalized value.
    /// - For a white space character (#x20, #xD, #xA, #x9), append a space
    ///   character (#x20) to the normalized value.
    /// - For another character, append the character to the normalized value.
    /// ```
    ///
    /// A value cut short by '<', an illegal character or the end of input
    /// is still returned as far as it was read.
    ///
    /// Returns `None` if the value is not quoted.
    #[doc(alias = "xmlParseAttValueInternal", alias = "xmlParseAttValueComplex")]
    pub(crate) fn parse_att_value_internal(&mut self) -> Option<String> {
        let limit = match self.current_byte() {
            quote @ (b'"' | b'\'') => quote as char,
            _ => {
                xml_fatal_err(self, XmlParserDiagnostic::AttributeNotStarted);
                return None;
            }
        };
        self.advance(1);

        let mut buf = String::new();
        loop {
            let Some(c) = self.current_char() else {
                xml_fatal_err(self, XmlParserDiagnostic::AttributeNotFinished);
                break;
            };
            if c == limit {
                self.advance(1);
                break;
            }
            if c == '<' {
                xml_fatal_err(self, XmlParserDiagnostic::LtInAttribute);
                break;
            }
            if !xml_is_char(c as u32) {
                xml_fatal_err(self, XmlParserDiagnostic::InvalidCharInAttribute);
                break;
            }
            buf.push(if xml_is_blank_char(c as u32) { ' ' } else { c });
            self.advance(c.len_utf8());
        }

        Some(decode_entities(&buf).into_owned())
    }

    /// Parse an attribute in the context of a start tag.
    ///
    /// ```text
    /// [41] Attribute ::= Name Eq AttValue
    /// [25] Eq ::= S? '=' S?
    /// ```
    ///
    /// Returns the attribute name and its value. No name means the start
    /// tag cannot be parsed any further; no value means the attribute is
    /// dropped.
    #[doc(alias = "xmlParseAttribute2")]
    pub(crate) fn parse_attribute2(&mut self) -> (Option<String>, Option<String>) {
        let Some(name) = self.parse_name() else {
            xml_fatal_err(self, XmlParserDiagnostic::AttributeNameRequired);
            return (None, None);
        };

        // read the value
        self.skip_blanks();
        if self.current_byte() != b'=' {
            xml_fatal_err(self, XmlParserDiagnostic::AttributeWithoutValue { name });
            return (None, None);
        }
        self.advance(1);
        self.skip_blanks();
        let value = self.parse_att_value_internal();
        (Some(name), value)
    }
}
