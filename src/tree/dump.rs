//! Serialization of a parsed tree back to XML.

use std::fmt;

use crate::entities::{xml_encode_attribute_value, xml_encode_special_chars};

use super::{XmlNode, XmlNodeContent};

impl XmlNode {
    /// Serialize this element and its subtree into `buf`.
    ///
    /// Empty elements are written as `<name/>`. Text is escaped, so the
    /// output parses back to an equal tree.
    #[doc(alias = "xmlNodeDump")]
    pub fn dump(&self, buf: &mut String) {
        buf.push('<');
        buf.push_str(&self.name);
        for (name, value) in &self.attributes {
            buf.push(' ');
            buf.push_str(name);
            buf.push_str("=\"");
            buf.push_str(&xml_encode_attribute_value(value));
            buf.push('"');
        }
        if self.content.is_empty() {
            buf.push_str("/>");
            return;
        }
        buf.push('>');
        for content in &self.content {
            match content {
                XmlNodeContent::Text(text) => buf.push_str(&xml_encode_special_chars(text)),
                XmlNodeContent::Element(node) => node.dump(buf),
            }
        }
        buf.push_str("</");
        buf.push_str(&self.name);
        buf.push('>');
    }
}

impl fmt::Display for XmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.dump(&mut buf);
        f.write_str(&buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_escapes_text_and_attributes() {
        let mut root = XmlNode::new("data", 1);
        root.add_attribute("source".into(), "a \"b\" & c".into());
        let mut format = XmlNode::new("format", 1);
        format.push_text("<> & more");
        root.push_child(format);
        root.push_child(XmlNode::new("label", 1));

        assert_eq!(
            root.to_string(),
            "<data source=\"a &quot;b&quot; &amp; c\"><format>&lt;&gt; &amp; more</format><label/></data>"
        );
    }
}
