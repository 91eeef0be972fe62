use super::super::{XmlParserCtxt, XmlParserDiagnostic, xml_fatal_err, xml_warning_msg};

/// Processing instruction targets reserved by W3C specifications.
const XML_W3_CPIS: &[&str] = &["xml-stylesheet", "xml-model"];

impl XmlParserCtxt<'_> {
    /// Parse the name of a PI
    ///
    /// ```text
    /// [17] PITarget ::= Name - (('X' | 'x') ('M' | 'm') ('L' | 'l'))
    /// ```
    #[doc(alias = "xmlParsePITarget")]
    fn parse_pi_target(&mut self) -> Option<String> {
        let name = self.parse_name()?;
        if name.get(..3).is_some_and(|pre| pre.eq_ignore_ascii_case("xml")) {
            if name.len() == 3 {
                xml_fatal_err(self, XmlParserDiagnostic::ReservedXmlName);
            } else if !XML_W3_CPIS.contains(&name.as_str()) {
                xml_warning_msg(self, XmlParserDiagnostic::ReservedXmlNamePrefix);
            }
        }
        Some(name)
    }

    /// Skip an XML Processing Instruction.
    ///
    /// ```text
    /// [16] PI ::= '<?' PITarget (S (Char* - (Char* '?>' Char*)))? '?>'
    /// ```
    #[doc(alias = "xmlParsePI")]
    pub(crate) fn parse_pi(&mut self) {
        if !self.content_bytes().starts_with(b"<?") {
            return;
        }
        self.advance(2);

        let Some(target) = self.parse_pi_target() else {
            xml_fatal_err(self, XmlParserDiagnostic::PINotStarted);
            return;
        };
        if self.content_bytes().starts_with(b"?>") {
            self.advance(2);
            return;
        }
        if self.skip_blanks() == 0 {
            let diag = XmlParserDiagnostic::PISpaceRequired {
                target: target.clone(),
            };
            xml_fatal_err(self, diag);
        }
        match self.content().find("?>") {
            Some(pos) => self.advance(pos + 2),
            None => {
                let len = self.content().len();
                self.advance(len);
                xml_fatal_err(self, XmlParserDiagnostic::PINotFinished { target });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::*;

    #[test]
    fn pi_test() {
        const DOCUMENT_AND_RESULT: &[(&str, &[i32])] = &[
            ("<?php echo 1; ?><root/>", &[]),
            ("<root><?target?></root>", &[]),
            ("<?xml-stylesheet href='a.css'?><root/>", &[]),
            ("<?xml-foo bar?><root/>", &[64]),
            ("<root/><?xml version='1.0'?>", &[64]),
            ("<root/><?XML x?>", &[64]),
            ("<?php\"x\"?><root/>", &[65]),
            ("<root/><?php never", &[47]),
            ("<root/><? php ?>", &[46, 5]),
        ];
        do_test(DOCUMENT_AND_RESULT);

        let errs = errors("<?xml-foo bar?><root/>");
        assert_eq!(errs[0].level, crate::XmlErrorLevel::XmlErrWarning);
        let errs = errors("<root/><?php never");
        assert_eq!(errs[0].message, "ParsePI: PI php never end ...");
    }
}
