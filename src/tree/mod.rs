//! The parsed tree.
//!
//! A parse produces one [`XmlDocument`] owning a single root [`XmlNode`].
//! Every node owns its content outright, so the tree is immutable once
//! returned, and every type here is `Send + Sync`.

mod dump;

use std::borrow::Cow;

use crate::{chvalid::xml_is_blank_char, error::XmlError};

/// One segment of an element's mixed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNodeContent {
    /// Character data, with references already decoded.
    Text(String),
    /// A child element.
    Element(XmlNode),
}

impl XmlNodeContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&XmlNode> {
        match self {
            Self::Element(node) => Some(node),
            Self::Text(_) => None,
        }
    }

    fn is_blank(&self) -> bool {
        self.as_text()
            .is_some_and(|text| text.chars().all(|c| xml_is_blank_char(c as u32)))
    }
}

/// An element.
#[doc(alias = "xmlNode")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    content: Vec<XmlNodeContent>,
    line: usize,
}

impl XmlNode {
    pub(crate) fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            attributes: vec![],
            content: vec![],
            line,
        }
    }

    /// The tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The line on which the start tag begins.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Look up the decoded value of the attribute `name`.
    #[doc(alias = "xmlGetProp")]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attributes in document order.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn content(&self) -> &[XmlNodeContent] {
        &self.content
    }

    /// Child elements in document order.
    pub fn children(&self) -> impl Iterator<Item = &XmlNode> + '_ {
        self.content.iter().filter_map(XmlNodeContent::as_element)
    }

    /// The first child element named `name`.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children().find(|child| child.name == name)
    }

    /// The text of the first child element named `name`.
    ///
    /// Returns `None` if there is no such child and `Some("")` if it is empty.
    ///
    /// ```
    /// let doc = ibxml::parse_xml_string(
    ///     r#"<data source="a"><label></label><default>x &amp; y</default></data>"#,
    /// )
    /// .unwrap();
    /// let root = doc.root();
    /// assert_eq!(root.child_text("default").as_deref(), Some("x & y"));
    /// assert_eq!(root.child_text("label").as_deref(), Some(""));
    /// assert_eq!(root.child_text("format"), None);
    /// ```
    pub fn child_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.child(name).map(XmlNode::text_content)
    }

    /// The direct text content of this element, child elements excluded.
    pub fn text(&self) -> Cow<'_, str> {
        let mut texts = self.content.iter().filter_map(XmlNodeContent::as_text);
        match (texts.next(), texts.next()) {
            (None, _) => Cow::Borrowed(""),
            (Some(first), None) => Cow::Borrowed(first),
            (Some(first), Some(second)) => {
                let mut buf = String::from(first);
                buf.push_str(second);
                texts.for_each(|text| buf.push_str(text));
                Cow::Owned(buf)
            }
        }
    }

    /// The concatenated text of this element and all its descendants.
    #[doc(alias = "xmlNodeGetContent")]
    pub fn text_content(&self) -> Cow<'_, str> {
        if self.children().next().is_none() {
            return self.text();
        }
        let mut buf = String::new();
        self.collect_text(&mut buf);
        Cow::Owned(buf)
    }

    fn collect_text(&self, buf: &mut String) {
        for content in &self.content {
            match content {
                XmlNodeContent::Text(text) => buf.push_str(text),
                XmlNodeContent::Element(node) => node.collect_text(buf),
            }
        }
    }

    /// Append an attribute. The caller rejects duplicate names.
    pub(crate) fn add_attribute(&mut self, name: String, value: String) {
        self.attributes.push((name, value));
    }

    /// Append text, merging it with a preceding text segment.
    #[doc(alias = "xmlTextConcat")]
    pub(crate) fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(XmlNodeContent::Text(last)) = self.content.last_mut() {
            last.push_str(text);
        } else {
            self.content.push(XmlNodeContent::Text(text.to_owned()));
        }
    }

    pub(crate) fn push_child(&mut self, child: XmlNode) {
        self.content.push(XmlNodeContent::Element(child));
    }

    /// Drop whitespace-only text segments if this element also has
    /// element children.
    #[doc(alias = "xmlSAX2IgnorableWhitespace")]
    pub(crate) fn remove_blank_text(&mut self) {
        if self.children().next().is_some() {
            self.content.retain(|content| !content.is_blank());
        }
    }
}

/// A successfully parsed fragment.
///
/// The diagnostics are kept even when a tree could be built, because
/// recovered errors are still worth reporting.
#[doc(alias = "xmlDoc")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlNode,
    errors: Vec<XmlError>,
    well_formed: bool,
}

impl XmlDocument {
    pub(crate) fn new(root: XmlNode, errors: Vec<XmlError>, well_formed: bool) -> Self {
        Self {
            root,
            errors,
            well_formed,
        }
    }

    #[doc(alias = "xmlDocGetRootElement")]
    pub fn root(&self) -> &XmlNode {
        &self.root
    }

    /// Diagnostics in emission order.
    pub fn errors(&self) -> &[XmlError] {
        &self.errors
    }

    /// `true` if no fatal error was raised, warnings aside.
    #[doc(alias = "wellFormed")]
    pub fn is_well_formed(&self) -> bool {
        self.well_formed
    }

    pub fn into_parts(self) -> (XmlNode, Vec<XmlError>) {
        (self.root, self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> XmlNode {
        let mut caption = XmlNode::new("caption", 2);
        caption.push_text("A ");
        let mut b = XmlNode::new("b", 2);
        b.push_text("bold");
        caption.push_child(b);
        caption.push_text(" word");

        let mut root = XmlNode::new("data", 1);
        root.add_attribute("source".into(), "image".into());
        root.add_attribute("theme".into(), "dark".into());
        root.push_text("\n  ");
        root.push_child(caption);
        root.push_child(XmlNode::new("label", 3));
        root.push_text("\n");
        root
    }

    #[test]
    fn attributes() {
        let root = sample();
        assert_eq!(root.attribute("source"), Some("image"));
        assert_eq!(root.attribute("theme"), Some("dark"));
        assert_eq!(root.attribute("missing"), None);
        assert_eq!(
            root.attributes().collect::<Vec<_>>(),
            vec![("source", "image"), ("theme", "dark")]
        );
    }

    #[test]
    fn text_accessors() {
        let root = sample();
        let caption = root.child("caption").unwrap();
        assert_eq!(caption.text(), "A  word");
        assert_eq!(caption.text_content(), "A bold word");
        assert_eq!(root.child_text("caption").as_deref(), Some("A bold word"));
        assert_eq!(root.child_text("label").as_deref(), Some(""));
        assert_eq!(root.child_text("header"), None);
        assert_eq!(
            root.children().map(|c| c.name()).collect::<Vec<_>>(),
            ["caption", "label"]
        );
    }

    #[test]
    fn adjacent_text_is_merged() {
        let mut node = XmlNode::new("p", 1);
        node.push_text("a");
        node.push_text("");
        node.push_text("b");
        assert_eq!(node.content(), [XmlNodeContent::Text("ab".into())]);
    }

    #[test]
    fn remove_blank_text() {
        let mut root = sample();
        root.remove_blank_text();
        assert_eq!(root.content().len(), 2);
        assert!(root.content().iter().all(|c| c.as_element().is_some()));

        let mut leaf = XmlNode::new("label", 1);
        leaf.push_text("   ");
        leaf.remove_blank_text();
        assert_eq!(leaf.text(), "   ");
    }

    #[test]
    fn send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<XmlNode>();
        assert_send_sync::<XmlDocument>();
    }
}
