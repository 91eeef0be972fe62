use std::collections::HashSet;

use crate::{
    chvalid::{xml_is_blank_char, xml_is_char},
    tree::XmlNode,
};

use super::super::{XmlParserCtxt, XmlParserDiagnostic, xml_fatal_err};

impl XmlParserCtxt<'_> {
    /// Parse an XML element
    ///
    /// ```text
    /// [39] element ::= EmptyElemTag | STag content ETag
    ///
    /// [ WFC: Element Type Match ]
    /// The Name in an element's end-tag must match the element type in the start-tag.
    /// ```
    #[doc(alias = "xmlParseElement")]
    pub(crate) fn parse_element(&mut self) {
        if self.parse_element_start() != 0 {
            return;
        }

        self.parse_content_internal();
        if self.is_halted() {
            return;
        }

        if self.is_eof() {
            if let Some((name, line)) = self.name() {
                let diag = XmlParserDiagnostic::TagNotFinished {
                    name: name.to_owned(),
                    line,
                };
                xml_fatal_err(self, diag);
            }
            return;
        }

        self.parse_element_end();
    }

    /// Parse the start of an XML element.
    ///
    /// Returns -1 in case of error, 0 if an opening tag was parsed,
    /// 1 if an empty element was parsed.
    #[doc(alias = "xmlParseElementStart")]
    pub(crate) fn parse_element_start(&mut self) -> i32 {
        let max_depth = self.max_depth();
        if self.name_nr() > max_depth {
            xml_fatal_err(self, XmlParserDiagnostic::ExcessiveDepth { max_depth });
            self.halt();
            return -1;
        }

        let line = self.line;
        let Some(node) = self.parse_start_tag2(line) else {
            return -1;
        };
        if self.is_halted() {
            return -1;
        }
        let name = node.name().to_owned();
        self.name_push(name.clone(), line);
        self.node_push(node);

        // Check for an Empty Element.
        if self.content_bytes().starts_with(b"/>") {
            self.advance(2);
            self.node_end();
            self.name_pop();
            return 1;
        }
        if self.current_byte() == b'>' {
            self.advance(1);
            if self.config().is_raw_content_tag(&name) {
                self.parse_raw_content(&name);
            }
            return 0;
        }

        xml_fatal_err(
            self,
            XmlParserDiagnostic::StartTagNotFinished { name, line },
        );
        // end of parsing of this node.
        // A child keeps what was gathered so far, a broken root is dropped.
        if self.name_nr() > 1 {
            self.node_end();
        } else {
            self.node_discard();
        }
        self.name_pop();
        -1
    }

    /// Parse the end of an XML element.
    #[doc(alias = "xmlParseElementEnd")]
    pub(crate) fn parse_element_end(&mut self) {
        let Some((name, line)) = self.name_pop() else {
            return;
        };
        self.parse_end_tag2(&name, line);
        self.node_end();
    }

    /// Parse a start tag and its attributes. Always consumes '<'.
    ///
    /// ```text
    /// [40] STag ::= '<' Name (S Attribute)* S? '>'
    /// [44] EmptyElemTag ::= '<' Name (S Attribute)* S? '/>'
    ///
    /// [ WFC: Unique Att Spec ]
    /// No attribute name may appear more than once in the same start-tag or
    /// empty-element tag.
    /// ```
    ///
    /// Returns the element, or `None` if no valid name follows '<'.
    #[doc(alias = "xmlParseStartTag2")]
    fn parse_start_tag2(&mut self, line: usize) -> Option<XmlNode> {
        if self.current_byte() != b'<' {
            return None;
        }
        self.advance(1);

        let Some(name) = self.parse_name() else {
            xml_fatal_err(self, XmlParserDiagnostic::StartTagInvalidName);
            return None;
        };
        let mut node = XmlNode::new(name, line);
        let mut seen = HashSet::new();

        // Now parse the attributes, it ends up with the ending
        //
        // (S Attribute)* S?
        self.skip_blanks();
        while xml_is_char(self.current_byte() as u32)
            && self.current_byte() != b'>'
            && !self.content_bytes().starts_with(b"/>")
            && !self.is_halted()
        {
            let (attname, attvalue) = self.parse_attribute2();
            let Some(attname) = attname else {
                xml_fatal_err(self, XmlParserDiagnostic::ProblemParsingAttributes);
                break;
            };

            'next_attr: {
                let Some(attvalue) = attvalue else {
                    break 'next_attr;
                };
                if !seen.insert(attname.clone()) {
                    xml_fatal_err(
                        self,
                        XmlParserDiagnostic::AttributeRedefined { name: attname },
                    );
                    break 'next_attr;
                }
                node.add_attribute(attname, attvalue);
            }

            // next_attr:
            if self.current_byte() == b'>' || self.content_bytes().starts_with(b"/>") {
                break;
            }
            if self.skip_blanks() == 0 {
                xml_fatal_err(self, XmlParserDiagnostic::AttributesConstruct);
                break;
            }
        }

        Some(node)
    }

    /// Parse an end tag. The name was already popped as `name`, opened on `line`.
    ///
    /// ```text
    /// [42] ETag ::= '</' Name S? '>'
    /// ```
    #[doc(alias = "xmlParseEndTag2")]
    fn parse_end_tag2(&mut self, name: &str, line: usize) {
        if !self.content_bytes().starts_with(b"</") {
            return;
        }
        self.advance(2);

        let close = self.parse_name_and_compare(name);

        // We should definitely be at the ending "S? '>'" part
        self.skip_blanks();
        if self.current_byte() != b'>' {
            xml_fatal_err(self, XmlParserDiagnostic::GtRequired);
        } else {
            self.advance(1);
        }

        // [ WFC: Element Type Match ]
        // The Name in an element's end-tag must match the element type in the start-tag.
        if let Err(close) = close {
            let diag = XmlParserDiagnostic::TagNameMismatch {
                open: name.to_owned(),
                line,
                close: close.unwrap_or_else(|| "unparsable".to_owned()),
            };
            xml_fatal_err(self, diag);
        }
    }

    /// Parse an XML name and compares for match (specialized for endtag parsing)
    ///
    /// Returns `Err(None)` for an illegal name, and `Err(Some(name))` for a mismatch.
    #[doc(alias = "xmlParseNameAndCompare")]
    fn parse_name_and_compare(&mut self, name: &str) -> Result<(), Option<String>> {
        let input = self.content_bytes();
        if input.starts_with(name.as_bytes())
            && input
                .get(name.len())
                .is_some_and(|&b| b == b'>' || xml_is_blank_char(b as u32))
        {
            // success
            self.advance(name.len());
            return Ok(());
        }
        // failure (or end of input buffer), check with full function
        match self.parse_name() {
            Some(ret) if ret == name => Ok(()),
            ret => Err(ret),
        }
    }

    /// Take the text of a raw content element verbatim up to its end tag.
    ///
    /// Without an end tag the content is left to the regular content parser.
    fn parse_raw_content(&mut self, name: &str) {
        if self.raw_end_tag_missing(name) {
            return;
        }
        let Some(len) = find_end_tag(self.content(), name) else {
            self.set_raw_end_tag_missing(name);
            return;
        };
        let text = self.content()[..len].to_owned();
        self.advance(len);
        self.characters(&text);
    }
}

/// Find the offset of the first `</name S? >` in `content`.
fn find_end_tag(content: &str, name: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(pos) = content[from..].find("</") {
        let start = from + pos;
        if let Some(rest) = content[start + 2..].strip_prefix(name) {
            if rest
                .trim_start_matches(|c: char| xml_is_blank_char(c as u32))
                .starts_with('>')
            {
                return Some(start);
            }
        }
        from = start + 2;
    }
    None
}
