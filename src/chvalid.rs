//! Character classes of the XML 1.0 (Fifth Edition) grammar.

/// ```text
/// [2] Char ::= #x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]
/// ```
#[doc(alias = "xmlIsChar")]
pub fn xml_is_char(c: u32) -> bool {
    matches!(c, 0x9 | 0xA | 0xD | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x10000..=0x10FFFF)
}

/// ```text
/// [3] S ::= (#x20 | #x9 | #xD | #xA)+
/// ```
#[doc(alias = "xmlIsBlank")]
pub fn xml_is_blank_char(c: u32) -> bool {
    matches!(c, 0x20 | 0x9 | 0xA | 0xD)
}

/// Name classification for the `Name` production.
///
/// ```text
/// [4]  NameStartChar ::= ":" | [A-Z] | "_" | [a-z] | [#xC0-#xD6] | [#xD8-#xF6]
///                        | [#xF8-#x2FF] | [#x370-#x37D] | [#x37F-#x1FFF]
///                        | [#x200C-#x200D] | [#x2070-#x218F] | [#x2C00-#x2FEF]
///                        | [#x3001-#xD7FF] | [#xF900-#xFDCF] | [#xFDF0-#xFFFD]
///                        | [#x10000-#xEFFFF]
/// [4a] NameChar      ::= NameStartChar | "-" | "." | [0-9] | #xB7
///                        | [#x0300-#x036F] | [#x203F-#x2040]
/// ```
pub(crate) trait XmlCharValid {
    fn is_name_start_char(&self) -> bool;
    fn is_name_char(&self) -> bool;
}

impl XmlCharValid for char {
    fn is_name_start_char(&self) -> bool {
        let c = *self;
        c.is_ascii_alphabetic()
            || c == '_'
            || c == ':'
            || matches!(
                c as u32,
                0xC0..=0xD6
                    | 0xD8..=0xF6
                    | 0xF8..=0x2FF
                    | 0x370..=0x37D
                    | 0x37F..=0x1FFF
                    | 0x200C..=0x200D
                    | 0x2070..=0x218F
                    | 0x2C00..=0x2FEF
                    | 0x3001..=0xD7FF
                    | 0xF900..=0xFDCF
                    | 0xFDF0..=0xFFFD
                    | 0x10000..=0xEFFFF
            )
    }

    fn is_name_char(&self) -> bool {
        let c = *self;
        self.is_name_start_char()
            || c.is_ascii_digit()
            || c == '-'
            || c == '.'
            || c == '\u{B7}'
            || matches!(c as u32, 0x300..=0x36F | 0x203F..=0x2040)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_ranges() {
        assert!(xml_is_char('\t' as u32));
        assert!(xml_is_char('a' as u32));
        assert!(xml_is_char(0x10FFFF));
        assert!(!xml_is_char(0));
        assert!(!xml_is_char(0x1F));
        assert!(!xml_is_char(0xFFFE));
        assert!(!xml_is_char(0xD800));
    }

    #[test]
    fn name_chars() {
        assert!('d'.is_name_start_char());
        assert!('_'.is_name_start_char());
        assert!('é'.is_name_start_char());
        assert!(!'1'.is_name_start_char());
        assert!(!'-'.is_name_start_char());
        assert!(!' '.is_name_start_char());
        assert!('1'.is_name_char());
        assert!('-'.is_name_char());
        assert!(!'/'.is_name_char());
        assert!(!'>'.is_name_char());
        assert!(!'='.is_name_char());
    }
}
