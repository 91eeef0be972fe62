use super::super::{XmlParserCtxt, XmlParserDiagnostic, xml_fatal_err};

impl XmlParserCtxt<'_> {
    /// Skip an XML comment.
    ///
    /// ```text
    /// [15] Comment ::= '<!--' ((Char - '-') | ('-' (Char - '-')))* '-->'
    /// ```
    ///
    /// XML 1.0 says that "For compatibility, the string "--" (double-hyphen)
    /// must not occur within comments. "
    /// Each offending "--" is reported and the comment goes on.
    #[doc(alias = "xmlParseComment")]
    pub(crate) fn parse_comment(&mut self) {
        // Check that there is a comment right here.
        if !self.content_bytes().starts_with(b"<!--") {
            return;
        }
        self.advance(4);

        loop {
            let Some(pos) = self.content().find("--") else {
                let len = self.content().len();
                self.advance(len);
                xml_fatal_err(self, XmlParserDiagnostic::CommentNotFinished);
                return;
            };
            self.advance(pos);
            if self.nth_byte(2) == b'>' {
                self.advance(3);
                return;
            }
            xml_fatal_err(self, XmlParserDiagnostic::HyphenInComment);
            self.advance(1);
        }
    }
}
