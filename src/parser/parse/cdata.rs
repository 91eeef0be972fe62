use crate::chvalid::xml_is_char;

use super::super::{XmlParserCtxt, XmlParserDiagnostic, xml_fatal_err};

impl XmlParserCtxt<'_> {
    /// Parse escaped pure raw content.
    ///
    /// ```text
    /// [18] CDSect ::= CDStart CData CDEnd
    /// [19] CDStart ::= '<![CDATA['
    /// [20] Data ::= (Char* - (Char* ']]>' Char*))
    /// [21] CDEnd ::= ']]>'
    /// ```
    ///
    /// The text is added as is, references are not decoded.
    #[doc(alias = "xmlParseCDSect")]
    pub(crate) fn parse_cdsect(&mut self) {
        if !self.content_bytes().starts_with(b"<![CDATA[") {
            return;
        }
        self.advance(9);

        // stop at the first "]]>" or illegal character, whichever comes first
        let content = self.content();
        let stop = content
            .char_indices()
            .find(|&(i, c)| {
                !xml_is_char(c as u32) || (c == ']' && content[i..].starts_with("]]>"))
            })
            .map(|(i, c)| (i, c == ']'));
        if let Some((end, true)) = stop {
            let text = content[..end].to_owned();
            self.advance(end + 3);
            self.cdata_block(&text);
            return;
        }
        let len = stop.map_or(content.len(), |(pos, _)| pos);
        self.advance(len);
        xml_fatal_err(self, XmlParserDiagnostic::CDATANotFinished);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::*;
    use crate::parse_xml_string;

    #[test]
    fn cdata_test() {
        const DOCUMENT_AND_RESULT: &[(&str, &[i32])] = &[
            ("<a><![CDATA[<b>&amp;</b>]]></a>", &[]),
            ("<a><![CDATA[]]></a>", &[]),
            ("<a><![CDATA[never", &[63, 77]),
            ("<a><![CDATA[x\u{1}]]></a>", &[63, 9, 62]),
        ];
        do_test(DOCUMENT_AND_RESULT);

        let doc = parse_xml_string("<a>x &amp; <![CDATA[<b>&amp;</b>]]></a>").unwrap();
        assert_eq!(doc.root().text(), "x & <b>&amp;</b>");
    }
}
