use crate::chvalid::xml_is_blank_char;

use super::super::{XmlParserCtxt, XmlParserDiagnostic, xml_fatal_err, xml_warning_msg};

/// The only XML version this parser knows about.
const XML_DEFAULT_VERSION: &str = "1.0";

impl XmlParserCtxt<'_> {
    /// Parse the XML version value.
    ///
    /// ```text
    /// [26] VersionNum ::= '1.' [0-9]+
    /// ```
    ///
    /// In practice allow [0-9].[0-9]+ at that level
    #[doc(alias = "xmlParseVersionNum")]
    fn parse_version_num(&mut self) -> Option<String> {
        let content = self.content_bytes();
        if !content.first().is_some_and(u8::is_ascii_digit) || content.get(1) != Some(&b'.') {
            return None;
        }
        let len = 2 + content[2..].iter().take_while(|b| b.is_ascii_digit()).count();
        let version = self.content()[..len].to_owned();
        self.advance(len);
        Some(version)
    }

    /// Parse the encoding name.
    ///
    /// ```text
    /// [81] EncName ::= [A-Za-z] ([A-Za-z0-9._] | '-')*
    /// ```
    #[doc(alias = "xmlParseEncName")]
    fn parse_enc_name(&mut self) -> Option<String> {
        let content = self.content_bytes();
        if !content.first().is_some_and(u8::is_ascii_alphabetic) {
            return None;
        }
        let len = content
            .iter()
            .take_while(|&&b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
            .count();
        let name = self.content()[..len].to_owned();
        self.advance(len);
        Some(name)
    }

    /// Parse `S? '=' S?` followed by a quoted value read by `parse_value`.
    fn parse_pseudo_attribute(
        &mut self,
        name: &str,
        parse_value: impl FnOnce(&mut Self) -> Option<String>,
    ) -> Option<String> {
        self.skip_blanks();
        if !self.content_bytes().starts_with(name.as_bytes()) {
            return None;
        }
        self.advance(name.len());
        self.skip_blanks();
        if self.current_byte() != b'=' {
            xml_fatal_err(self, XmlParserDiagnostic::EqualRequired);
            return None;
        }
        self.advance(1);
        self.skip_blanks();

        let quote = self.current_byte();
        if quote != b'"' && quote != b'\'' {
            xml_fatal_err(self, XmlParserDiagnostic::StringNotStarted);
            return None;
        }
        self.advance(1);
        let value = parse_value(self);
        if self.current_byte() != quote {
            xml_fatal_err(self, XmlParserDiagnostic::StringNotClosed);
        } else {
            self.advance(1);
        }
        value
    }

    /// Parse the XML version.
    ///
    /// ```text
    /// [24] VersionInfo ::= S 'version' Eq (' VersionNum ' | " VersionNum ")
    /// [25] Eq ::= S? '=' S?
    /// ```
    #[doc(alias = "xmlParseVersionInfo")]
    fn parse_version_info(&mut self) -> Option<String> {
        self.parse_pseudo_attribute("version", Self::parse_version_num)
    }

    /// Parse the XML encoding declaration.
    ///
    /// ```text
    /// [80] EncodingDecl ::= S 'encoding' Eq ('"' EncName '"' |  "'" EncName "'")
    /// ```
    ///
    /// Byte input is decoded before parsing, so the name is only checked.
    #[doc(alias = "xmlParseEncodingDecl")]
    fn parse_encoding_decl(&mut self) -> Option<String> {
        self.parse_pseudo_attribute("encoding", Self::parse_enc_name)
    }

    /// Parse the XML standalone declaration.
    ///
    /// ```text
    /// [32] SDDecl ::= S 'standalone' Eq (("'" ('yes' | 'no') "'") | ('"' ('yes' | 'no')'"'))
    /// ```
    #[doc(alias = "xmlParseSDDecl")]
    fn parse_sddecl(&mut self) -> Option<bool> {
        let value = self.parse_pseudo_attribute("standalone", |ctxt| {
            let value = ["yes", "no"]
                .into_iter()
                .find(|value| ctxt.content().starts_with(value));
            match value {
                Some(value) => ctxt.advance(value.len()),
                None => xml_fatal_err(ctxt, XmlParserDiagnostic::StandaloneValue),
            }
            value.map(str::to_owned)
        })?;
        Some(value == "yes")
    }

    /// Parse an XML declaration header.
    ///
    /// ```text
    /// [23] XMLDecl ::= '<?xml' VersionInfo EncodingDecl? SDDecl? S? '?>'
    /// ```
    #[doc(alias = "xmlParseXMLDecl")]
    pub(crate) fn parse_xmldecl(&mut self) {
        // We know that '<?xml' is here.
        self.advance(5);

        if !xml_is_blank_char(self.current_byte() as u32) {
            xml_fatal_err(self, XmlParserDiagnostic::BlankRequiredAfterXmlDecl);
        }

        // We must have the VersionInfo here.
        match self.parse_version_info() {
            None => xml_fatal_err(self, XmlParserDiagnostic::VersionMissing),
            // Changed here for XML-1.0 5th edition
            Some(version) if version != XML_DEFAULT_VERSION => {
                if version.starts_with("1.") {
                    xml_warning_msg(self, XmlParserDiagnostic::UnsupportedVersion { version });
                } else {
                    xml_fatal_err(self, XmlParserDiagnostic::UnknownVersion { version });
                }
            }
            Some(_) => {}
        }

        // We may have the encoding declaration
        if !xml_is_blank_char(self.current_byte() as u32) {
            if self.content_bytes().starts_with(b"?>") {
                self.advance(2);
                return;
            }
            xml_fatal_err(self, XmlParserDiagnostic::BlankRequired);
        }
        let encoding = self.parse_encoding_decl();

        // We may have the standalone status.
        if encoding.is_some() && !xml_is_blank_char(self.current_byte() as u32) {
            if self.content_bytes().starts_with(b"?>") {
                self.advance(2);
                return;
            }
            xml_fatal_err(self, XmlParserDiagnostic::BlankRequired);
        }
        self.parse_sddecl();

        self.skip_blanks();
        if self.content_bytes().starts_with(b"?>") {
            self.advance(2);
        } else if self.current_byte() == b'>' {
            // Deprecated old WD ...
            xml_fatal_err(self, XmlParserDiagnostic::XmlDeclNotFinished);
            self.advance(1);
        } else {
            xml_fatal_err(self, XmlParserDiagnostic::XmlDeclNotFinished);
            let len = self
                .content()
                .find('>')
                .map_or(self.content().len(), |pos| pos + 1);
            self.advance(len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::*;
    use crate::{XmlErrorLevel, XmlParserConfig, XmlParserOption};

    #[test]
    fn xmldecl_test() {
        const DOCUMENT_AND_RESULT: &[(&str, &[i32])] = &[
            ("<?xml version=\"1.0\"?><root/>", &[]),
            ("<?xml version='1.0' encoding='UTF-8'?>\n<root/>", &[]),
            ("<?xml version='1.0' encoding='UTF-8' standalone='yes'?><root/>", &[]),
            ("<?xml version='1.0' standalone=\"no\" ?><root/>", &[]),
            ("<?xml version='1.1'?><root/>", &[97]),
            ("<?xml version='2.0'?><root/>", &[108]),
            ("<?xml ?><root/>", &[96]),
            ("<?xml version=1.0?><root/>", &[33, 96, 65, 57]),
            ("<?xml version '1.0'?><root/>", &[75, 96, 65, 57]),
            ("<?xml version='1.0' standalone='maybe'?><root/>", &[78, 34, 57]),
            ("<?xml version='1.0'><root/>", &[65, 57]),
            ("<?xml version='1.0'encoding='UTF-8'?><root/>", &[65]),
            ("<?xml version='1.0' encoding='UTF-8'standalone='no'?><root/>", &[65]),
        ];
        do_test(DOCUMENT_AND_RESULT);
    }

    #[test]
    fn version_warning_test() {
        let errs = errors("<?xml version='1.1'?><root/>");
        assert_eq!(errs[0].level, XmlErrorLevel::XmlErrWarning);
        assert_eq!(errs[0].message, "Unsupported version '1.1'");

        let doc = XmlParserConfig::new()
            .with_option(XmlParserOption::XmlParseNoWarning)
            .parse("<?xml version='1.1'?><root/>")
            .unwrap();
        assert!(doc.errors().is_empty());
    }
}
