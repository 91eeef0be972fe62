mod attribute;
mod cdata;
mod comment;
mod element;
mod names;
mod pi;
mod xmldecl;

use crate::chvalid::{xml_is_blank_char, xml_is_char};

use super::{XmlParserCtxt, XmlParserDiagnostic, XmlParserInputState, xml_fatal_err};

impl XmlParserCtxt<'_> {
    /// Parse an XML document and build its tree.
    ///
    /// ```text
    /// [1] document ::= prolog element Misc*
    /// [22] prolog ::= XMLDecl? Misc* (doctypedecl Misc*)?
    /// ```
    #[doc(alias = "xmlParseDocument")]
    pub(crate) fn parse_document(&mut self) {
        if self.input_len() > self.max_length() {
            xml_fatal_err(self, XmlParserDiagnostic::HugeInputLookup);
            self.halt();
            return;
        }

        if self.is_eof() {
            xml_fatal_err(self, XmlParserDiagnostic::DocumentEmpty);
            return;
        }

        // Check for the XMLDecl in the Prolog.
        if self.content_bytes().starts_with(b"<?xml") && xml_is_blank_char(self.nth_byte(5) as u32)
        {
            self.parse_xmldecl();
            if self.is_halted() {
                return;
            }
        }

        // The Misc part of the Prolog
        self.parse_misc();

        // Time to start parsing the tree itself
        if self.current_byte() != b'<' {
            xml_fatal_err(self, XmlParserDiagnostic::StartTagExpected);
        } else {
            self.instate = XmlParserInputState::XmlParserContent;
            self.parse_element();
            self.instate = XmlParserInputState::XmlParserEpilog;

            // The Misc part at the end
            self.parse_misc();

            if !self.is_eof() {
                xml_fatal_err(self, XmlParserDiagnostic::DocumentEnd);
            }
        }
        self.instate = XmlParserInputState::XmlParserEOF;
    }

    /// Parse an XML Misc* optional field.
    ///
    /// ```text
    /// [27] Misc ::= Comment | PI |  S
    /// ```
    #[doc(alias = "xmlParseMisc")]
    pub(crate) fn parse_misc(&mut self) {
        while self.instate != XmlParserInputState::XmlParserEOF {
            self.skip_blanks();
            if self.content_bytes().starts_with(b"<?") {
                self.parse_pi();
            } else if self.content_bytes().starts_with(b"<!--") {
                self.parse_comment();
            } else {
                break;
            }
        }
    }

    /// Parse the content of the current element, up to the end tag that
    /// closes it or the end of input.
    ///
    /// ```text
    /// [43] content ::= (element | CharData | Reference | CDSect | PI | Comment)*
    /// ```
    #[doc(alias = "xmlParseContentInternal")]
    pub(crate) fn parse_content_internal(&mut self) {
        let name_nr = self.name_nr();
        while !self.is_eof() && self.instate != XmlParserInputState::XmlParserEOF {
            let cur = self.content_bytes();
            if cur.starts_with(b"<?") {
                self.parse_pi();
            } else if cur.starts_with(b"<![CDATA[") {
                self.parse_cdsect();
            } else if cur.starts_with(b"<!--") {
                self.parse_comment();
            } else if cur.starts_with(b"</") {
                if self.name_nr() <= name_nr {
                    break;
                }
                self.parse_element_end();
            } else if cur[0] == b'<' {
                self.parse_element_start();
            } else {
                self.parse_char_data();
            }
        }
    }

    /// Parse character data up to the next '<'.
    ///
    /// ```text
    /// [14] CharData ::= [^<&]* - ([^<&]* ']]>' [^<&]*)
    /// ```
    ///
    /// '&' is kept as data, references are decoded with the whole run.
    #[doc(alias = "xmlParseCharData")]
    pub(crate) fn parse_char_data(&mut self) {
        let mut buf = String::new();
        loop {
            let content = self.content();
            let stop = content
                .find(|c: char| c == '<' || c == ']' || !xml_is_char(c as u32))
                .unwrap_or(content.len());
            buf.push_str(&content[..stop]);
            self.advance(stop);

            match self.current_char() {
                None | Some('<') => break,
                Some(']') => {
                    if self.content_bytes().starts_with(b"]]>") {
                        xml_fatal_err(self, XmlParserDiagnostic::MisplacedCDATAEnd);
                    }
                    buf.push(']');
                    self.advance(1);
                }
                Some(c) => {
                    // Generate the error and skip the offending character
                    xml_fatal_err(self, XmlParserDiagnostic::InvalidChar { value: c as u32 });
                    self.skip_char();
                }
            }
        }
        self.characters(&buf);
    }
}

#[cfg(test)]
pub(super) mod test_util {
    use crate::{XmlError, XmlParserConfig};

    /// Parse `doc` and return the codes of all diagnostics.
    pub(crate) fn error_codes(doc: &str) -> Vec<i32> {
        errors(doc).iter().map(|err| err.code as i32).collect()
    }

    pub(crate) fn errors(doc: &str) -> Vec<XmlError> {
        match XmlParserConfig::default().parse(doc) {
            Ok(doc) => doc.errors().to_vec(),
            Err(err) => err.errors().to_vec(),
        }
    }

    pub(crate) fn do_test(docs: &[(&str, &[i32])]) {
        for &(doc, codes) in docs {
            assert_eq!(error_codes(doc), codes, "{doc:?}");
        }
    }
}
