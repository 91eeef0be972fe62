use std::{borrow::Cow, collections::HashMap};

use crate::{
    chvalid::xml_is_blank_char,
    entities::decode_entities,
    tree::XmlNode,
};

use super::{
    XML_MAX_HUGE_LENGTH, XML_MAX_TEXT_LENGTH, XML_PARSER_HUGE_MAX_DEPTH, XML_PARSER_MAX_DEPTH,
    XmlErrorCollector, XmlParserConfig, XmlParserOption,
};

/// The parser state.
#[doc(alias = "xmlParserInputState")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum XmlParserInputState {
    /// nothing parsed yet
    #[default]
    XmlParserStart,
    /// within the root element
    XmlParserContent,
    /// after the root element
    XmlParserEpilog,
    /// nothing left to parse
    XmlParserEOF,
}

/// The parser context.
///
/// Holds the whole (line-normalized) input, the cursor, the stacks of open
/// element names and nodes, and the diagnostics raised so far. The element
/// stacks are explicit, so nesting depth never turns into call depth.
#[doc(alias = "xmlParserCtxt")]
pub(crate) struct XmlParserCtxt<'a> {
    input: Cow<'a, str>,
    cur: usize,
    // current line and column, both 1-based
    pub(crate) line: usize,
    pub(crate) col: usize,
    config: &'a XmlParserConfig,
    pub(crate) instate: XmlParserInputState,
    halted: bool,
    pub(crate) well_formed: bool,
    pub(crate) errors: XmlErrorCollector,
    // open element names with the line of their start tag
    name_tab: Vec<(String, usize)>,
    node_tab: Vec<XmlNode>,
    pub(crate) root: Option<XmlNode>,
    // raw content tag name -> offset from which no end tag follows
    raw_end_misses: HashMap<String, usize>,
}

impl<'a> XmlParserCtxt<'a> {
    pub(crate) fn new(config: &'a XmlParserConfig, input: &'a str) -> Self {
        let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
        Self {
            input: normalize_line_endings(input),
            cur: 0,
            line: 1,
            col: 1,
            config,
            instate: XmlParserInputState::default(),
            halted: false,
            well_formed: true,
            errors: XmlErrorCollector::new(),
            name_tab: vec![],
            node_tab: vec![],
            root: None,
            raw_end_misses: HashMap::new(),
        }
    }

    pub(crate) fn config(&self) -> &'a XmlParserConfig {
        self.config
    }

    pub(crate) fn has_option(&self, option: XmlParserOption) -> bool {
        self.config.options & option as i32 != 0
    }

    pub(crate) fn no_warnings(&self) -> bool {
        self.has_option(XmlParserOption::XmlParseNoWarning)
    }

    pub(crate) fn max_depth(&self) -> usize {
        if self.has_option(XmlParserOption::XmlParseHuge) {
            XML_PARSER_HUGE_MAX_DEPTH
        } else {
            XML_PARSER_MAX_DEPTH
        }
    }

    pub(crate) fn max_length(&self) -> usize {
        if self.has_option(XmlParserOption::XmlParseHuge) {
            XML_MAX_HUGE_LENGTH
        } else {
            XML_MAX_TEXT_LENGTH
        }
    }

    pub(crate) fn input_len(&self) -> usize {
        self.input.len()
    }

    /// The unparsed rest of the input.
    pub(crate) fn content(&self) -> &str {
        &self.input[self.cur..]
    }

    pub(crate) fn content_bytes(&self) -> &[u8] {
        &self.input.as_bytes()[self.cur..]
    }

    /// The byte under the cursor, `0` at the end of input.
    pub(crate) fn current_byte(&self) -> u8 {
        self.nth_byte(0)
    }

    pub(crate) fn nth_byte(&self, nth: usize) -> u8 {
        self.content_bytes().get(nth).copied().unwrap_or(0)
    }

    pub(crate) fn current_char(&self) -> Option<char> {
        self.content().chars().next()
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.cur >= self.input.len()
    }

    /// Advance the cursor by `nth` bytes, keeping line and column current.
    ///
    /// `nth` must end on a character boundary.
    pub(crate) fn advance(&mut self, nth: usize) {
        let end = (self.cur + nth).min(self.input.len());
        for c in self.input[self.cur..end].chars() {
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        self.cur = end;
    }

    /// Skip to the next character.
    #[doc(alias = "xmlNextChar")]
    pub(crate) fn skip_char(&mut self) {
        if let Some(c) = self.current_char() {
            self.advance(c.len_utf8());
        }
    }

    /// Skip blank characters and return how many were skipped.
    #[doc(alias = "xmlSkipBlankChars")]
    pub(crate) fn skip_blanks(&mut self) -> usize {
        let res = self
            .content_bytes()
            .iter()
            .take_while(|&&b| xml_is_blank_char(b as u32))
            .count();
        self.advance(res);
        res
    }

    /// Blocks further parser processing.
    #[doc(alias = "xmlHaltParser")]
    pub(crate) fn halt(&mut self) {
        self.instate = XmlParserInputState::XmlParserEOF;
        self.halted = true;
        self.cur = self.input.len();
    }

    pub(crate) fn is_halted(&self) -> bool {
        self.halted
    }

    pub(crate) fn name_push(&mut self, name: String, line: usize) {
        self.name_tab.push((name, line));
    }

    pub(crate) fn name_pop(&mut self) -> Option<(String, usize)> {
        self.name_tab.pop()
    }

    /// Number of open elements.
    pub(crate) fn name_nr(&self) -> usize {
        self.name_tab.len()
    }

    /// The innermost open element and the line of its start tag.
    pub(crate) fn name(&self) -> Option<(&str, usize)> {
        self.name_tab
            .last()
            .map(|(name, line)| (name.as_str(), *line))
    }

    pub(crate) fn node_push(&mut self, node: XmlNode) {
        self.node_tab.push(node);
    }

    pub(crate) fn node_mut(&mut self) -> Option<&mut XmlNode> {
        self.node_tab.last_mut()
    }

    /// `true` if no end tag of the raw content tag `name` follows the cursor.
    pub(crate) fn raw_end_tag_missing(&self, name: &str) -> bool {
        self.raw_end_misses
            .get(name)
            .is_some_and(|&from| self.cur >= from)
    }

    pub(crate) fn set_raw_end_tag_missing(&mut self, name: &str) {
        if !self.raw_end_misses.contains_key(name) {
            self.raw_end_misses.insert(name.to_owned(), self.cur);
        }
    }

    /// Close the innermost node and attach it to its parent.
    ///
    /// Closing the outermost node completes the document root.
    pub(crate) fn node_end(&mut self) {
        let Some(mut node) = self.node_tab.pop() else {
            return;
        };
        if self.has_option(XmlParserOption::XmlParseNoBlanks) {
            node.remove_blank_text();
        }
        match self.node_tab.last_mut() {
            Some(parent) => parent.push_child(node),
            None => self.root = Some(node),
        }
    }

    /// Drop the innermost node without attaching it anywhere.
    pub(crate) fn node_discard(&mut self) {
        self.node_tab.pop();
    }

    /// Append character data to the innermost node, decoding references.
    #[doc(alias = "xmlSAX2Characters")]
    pub(crate) fn characters(&mut self, text: &str) {
        if let Some(node) = self.node_mut() {
            node.push_text(&decode_entities(text));
        }
    }

    /// Append character data verbatim.
    #[doc(alias = "xmlSAX2CDataBlock")]
    pub(crate) fn cdata_block(&mut self, text: &str) {
        if let Some(node) = self.node_mut() {
            node.push_text(text);
        }
    }
}

/// Replace `\r\n` and lone `\r` with `\n`.
///
/// ```text
/// 2.11 End-of-Line Handling
/// ```
fn normalize_line_endings(input: &str) -> Cow<'_, str> {
    if !input.contains('\r') {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.replace("\r\n", "\n").replace('\r', "\n"))
}
