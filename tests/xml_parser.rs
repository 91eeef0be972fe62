use ibxml::{
    XmlError, XmlErrorLevel, XmlParseResult, XmlParserConfig, XmlParserOption, parse_xml_bytes,
    parse_xml_string,
};

const FATAL: XmlErrorLevel = XmlErrorLevel::XmlErrFatal;

fn errors(result: &XmlParseResult) -> &[XmlError] {
    match result {
        Ok(doc) => doc.errors(),
        Err(err) => err.errors(),
    }
}

fn summary(errors: &[XmlError]) -> Vec<(XmlErrorLevel, i32, &str)> {
    errors
        .iter()
        .map(|err| (err.level, err.code as i32, err.message.as_ref()))
        .collect()
}

#[test]
fn error_handling_test() {
    // (markup, a tree is expected, diagnostics)
    const MARKUP_AND_ERRORS: &[(&str, bool, &[(XmlErrorLevel, i32, &str)])] = &[
        (
            "<data>d</dat/a>",
            true,
            &[
                (FATAL, 73, "expected '>'"),
                (FATAL, 76, "Opening and ending tag mismatch: data line 1 and dat"),
                (FATAL, 5, "Extra content at the end of the document"),
            ],
        ),
        (
            "<data> x </data></data>",
            true,
            &[(FATAL, 5, "Extra content at the end of the document")],
        ),
        (
            "<data> > ddd < a ></data>",
            true,
            &[(FATAL, 68, "StartTag: invalid element name")],
        ),
        (
            "<data>",
            false,
            &[(FATAL, 77, "Premature end of data in tag data line 1")],
        ),
        (
            "<infobox><data source=caption></infobox>",
            true,
            &[
                (FATAL, 39, "AttValue: \" or ' expected"),
                (FATAL, 65, "attributes construct error"),
                (FATAL, 73, "Couldn't find end of Start Tag data line 1"),
            ],
        ),
        (
            "<infobox><data source=\"caption\"></infobox>",
            false,
            &[
                (FATAL, 76, "Opening and ending tag mismatch: data line 1 and infobox"),
                (FATAL, 77, "Premature end of data in tag infobox line 1"),
            ],
        ),
        (
            "<infobox><data source=\"caption></data></infobox>",
            true,
            &[
                (FATAL, 38, "Unescaped '<' not allowed in attributes values"),
                (FATAL, 65, "attributes construct error"),
                (FATAL, 73, "Couldn't find end of Start Tag data line 1"),
                (FATAL, 76, "Opening and ending tag mismatch: infobox line 1 and data"),
                (FATAL, 5, "Extra content at the end of the document"),
            ],
        ),
    ];

    for &(markup, has_tree, expected) in MARKUP_AND_ERRORS {
        let result = parse_xml_string(markup);
        assert_eq!(result.is_ok(), has_tree, "{markup:?}");
        assert_eq!(summary(errors(&result)), expected, "{markup:?}");
        // the same input gives the same diagnostics
        assert_eq!(parse_xml_string(markup), result, "{markup:?}");
    }
}

#[test]
fn content_tags_test() {
    const TAG_AND_CONTENT: &[(&str, &str)] = &[
        ("default", "sadf <br> sakdjfl"),
        ("format", "<>"),
        ("label", ""),
    ];

    for &(tag, content) in TAG_AND_CONTENT {
        let markup = format!("<data source=\"asdfd\"><{tag}>{content}</{tag}></data>");
        let doc = parse_xml_string(&markup).unwrap();
        assert!(doc.errors().is_empty(), "{markup:?}: {:?}", doc.errors());
        assert_eq!(doc.root().attribute("source"), Some("asdfd"));
        assert_eq!(
            doc.root().child_text(tag).as_deref(),
            Some(content),
            "{markup:?}"
        );
    }

    let doc = parse_xml_string("<data><label></label></data>").unwrap();
    assert_eq!(doc.root().child_text("default"), None);
}

#[test]
fn html_entities_test() {
    const MARKUP_AND_TEXT: &[(&str, &str)] = &[
        ("<data></data>", ""),
        ("<data>&aksjdf;</data>", "&aksjdf;"),
        ("<data>&amp;</data>", "&"),
        ("<data>&middot;</data>", "·"),
        ("<data>&Uuml;</data>", "Ü"),
        ("<data>&Delta;</data>", "Δ"),
        ("<data>&amp;amp;</data>", "&amp;"),
        ("<data>&amp</data>", "&amp"),
        ("<data>&#x3A9;&#937;</data>", "ΩΩ"),
    ];

    for &(markup, text) in MARKUP_AND_TEXT {
        let doc = parse_xml_string(markup).unwrap();
        assert!(doc.errors().is_empty(), "{markup:?}");
        assert_eq!(doc.root().text(), text, "{markup:?}");
    }
}

#[test]
fn attribute_value_test() {
    let doc = parse_xml_string("<data source=\"a &amp; b\" name='&Delta;\tx'/>").unwrap();
    assert!(doc.errors().is_empty());
    assert_eq!(doc.root().attribute("source"), Some("a & b"));
    assert_eq!(doc.root().attribute("name"), Some("Δ x"));
    assert_eq!(doc.root().attributes().len(), 2);
}

#[test]
fn mixed_content_test() {
    let markup = "<infobox>\n  <title source=\"name\"/>\n  <data source=\"a\"><label>A</label></data>\n</infobox>";

    let doc = parse_xml_string(markup).unwrap();
    assert!(doc.errors().is_empty());
    let root = doc.root();
    assert_eq!(root.content().len(), 5);
    assert_eq!(
        root.children().map(|child| child.name()).collect::<Vec<_>>(),
        ["title", "data"]
    );
    assert_eq!(root.child("data").unwrap().line(), 3);
    assert_eq!(
        root.child("data").unwrap().child_text("label").as_deref(),
        Some("A")
    );

    let doc = XmlParserConfig::new()
        .with_option(XmlParserOption::XmlParseNoBlanks)
        .parse(markup)
        .unwrap();
    assert_eq!(doc.root().content().len(), 2);
    assert!(
        doc.root()
            .content()
            .iter()
            .all(|content| content.as_element().is_some())
    );
}

#[test]
fn line_numbers_test() {
    let result = parse_xml_string("<infobox>\n  <data source=\"x\">\n</infobox>");
    let errs = errors(&result);
    assert!(result.is_err());
    assert_eq!(
        summary(errs),
        [
            (FATAL, 76, "Opening and ending tag mismatch: data line 2 and infobox"),
            (FATAL, 77, "Premature end of data in tag infobox line 1"),
        ]
    );
    assert_eq!(errs[0].line, 3);
    assert_eq!(errs[0].str1.as_deref(), Some("data"));

    // "\r\n" counts as one line break
    let errs = parse_xml_string("<a>\r\n\r\n</b>").unwrap().into_parts().1;
    assert_eq!(errs[0].code as i32, 76);
    assert_eq!(errs[0].line, 3);
}

#[test]
fn raw_content_tags_test() {
    let config = XmlParserConfig::new().raw_content_tags(["caption"]);
    let doc = config
        .parse("<data><caption>a <b> c</caption><label><i>x</i></label></data>")
        .unwrap();
    assert!(doc.errors().is_empty());
    assert_eq!(doc.root().child_text("caption").as_deref(), Some("a <b> c"));
    let label = doc.root().child("label").unwrap();
    assert_eq!(label.child_text("i").as_deref(), Some("x"));
    assert_eq!(label.text(), "");

    // without any raw tag the content of <format> is markup
    let result = XmlParserConfig::new()
        .raw_content_tags(Vec::<String>::new())
        .parse("<data><format><></format></data>");
    assert_eq!(errors(&result)[0].code as i32, 68);
}

#[test]
fn bytes_input_test() {
    let doc = parse_xml_bytes("<data>&Uuml;Ü</data>".as_bytes()).unwrap();
    assert_eq!(doc.root().text(), "ÜÜ");

    let utf16 = "\u{feff}<data>Ü</data>"
        .encode_utf16()
        .flat_map(u16::to_le_bytes)
        .collect::<Vec<_>>();
    let doc = parse_xml_bytes(&utf16).unwrap();
    assert!(doc.errors().is_empty());
    assert_eq!(doc.root().text(), "Ü");

    let latin1 = b"<?xml version='1.0' encoding='ISO-8859-1'?><data>\xDC</data>";
    let doc = parse_xml_bytes(latin1).unwrap();
    assert!(doc.errors().is_empty());
    assert_eq!(doc.root().text(), "Ü");

    let doc = parse_xml_bytes(b"<data>\xFF</data>").unwrap();
    assert_eq!(doc.errors().len(), 1);
    assert_eq!(doc.errors()[0].code as i32, 81);
    assert_eq!(doc.errors()[0].level, FATAL);
    assert!(!doc.is_well_formed());
    assert_eq!(doc.root().text(), "ÿ");
}

#[test]
fn unparseable_markup_error_test() {
    let err = parse_xml_string("<data>").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unparseable markup: line 1: parser error : Premature end of data in tag data line 1"
    );
    assert_eq!(err.into_errors().len(), 1);

    let err = parse_xml_string("").unwrap_err();
    assert_eq!(err.errors()[0].code as i32, 4);
}
