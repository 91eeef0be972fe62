//! HTML 4.01 character entity table.
//!
//! The table is the one libxml2's HTML parser uses (`html40EntitiesTable`),
//! kept sorted by name so lookups are a binary search.

/// One named HTML character entity.
#[doc(alias = "htmlEntityDesc")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlEntityDesc {
    /// The entity name, without `&` and `;`
    pub name: &'static str,
    /// The UNICODE value for the character
    pub value: u32,
}

impl HtmlEntityDesc {
    const fn new(name: &'static str, value: u32) -> Self {
        Self { name, value }
    }

    /// The character this entity stands for.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.value)
    }
}

const HTML40_ENTITIES_TABLE: &[HtmlEntityDesc] = &[
    HtmlEntityDesc::new("AElig", 0x00C6),
    HtmlEntityDesc::new("Aacute", 0x00C1),
    HtmlEntityDesc::new("Acirc", 0x00C2),
    HtmlEntityDesc::new("Agrave", 0x00C0),
    HtmlEntityDesc::new("Alpha", 0x0391),
    HtmlEntityDesc::new("Aring", 0x00C5),
    HtmlEntityDesc::new("Atilde", 0x00C3),
    HtmlEntityDesc::new("Auml", 0x00C4),
    HtmlEntityDesc::new("Beta", 0x0392),
    HtmlEntityDesc::new("Ccedil", 0x00C7),
    HtmlEntityDesc::new("Chi", 0x03A7),
    HtmlEntityDesc::new("Dagger", 0x2021),
    HtmlEntityDesc::new("Delta", 0x0394),
    HtmlEntityDesc::new("ETH", 0x00D0),
    HtmlEntityDesc::new("Eacute", 0x00C9),
    HtmlEntityDesc::new("Ecirc", 0x00CA),
    HtmlEntityDesc::new("Egrave", 0x00C8),
    HtmlEntityDesc::new("Epsilon", 0x0395),
    HtmlEntityDesc::new("Eta", 0x0397),
    HtmlEntityDesc::new("Euml", 0x00CB),
    HtmlEntityDesc::new("Gamma", 0x0393),
    HtmlEntityDesc::new("Iacute", 0x00CD),
    HtmlEntityDesc::new("Icirc", 0x00CE),
    HtmlEntityDesc::new("Igrave", 0x00CC),
    HtmlEntityDesc::new("Iota", 0x0399),
    HtmlEntityDesc::new("Iuml", 0x00CF),
    HtmlEntityDesc::new("Kappa", 0x039A),
    HtmlEntityDesc::new("Lambda", 0x039B),
    HtmlEntityDesc::new("Mu", 0x039C),
    HtmlEntityDesc::new("Ntilde", 0x00D1),
    HtmlEntityDesc::new("Nu", 0x039D),
    HtmlEntityDesc::new("OElig", 0x0152),
    HtmlEntityDesc::new("Oacute", 0x00D3),
    HtmlEntityDesc::new("Ocirc", 0x00D4),
    HtmlEntityDesc::new("Ograve", 0x00D2),
    HtmlEntityDesc::new("Omega", 0x03A9),
    HtmlEntityDesc::new("Omicron", 0x039F),
    HtmlEntityDesc::new("Oslash", 0x00D8),
    HtmlEntityDesc::new("Otilde", 0x00D5),
    HtmlEntityDesc::new("Ouml", 0x00D6),
    HtmlEntityDesc::new("Phi", 0x03A6),
    HtmlEntityDesc::new("Pi", 0x03A0),
    HtmlEntityDesc::new("Prime", 0x2033),
    HtmlEntityDesc::new("Psi", 0x03A8),
    HtmlEntityDesc::new("Rho", 0x03A1),
    HtmlEntityDesc::new("Scaron", 0x0160),
    HtmlEntityDesc::new("Sigma", 0x03A3),
    HtmlEntityDesc::new("THORN", 0x00DE),
    HtmlEntityDesc::new("Tau", 0x03A4),
    HtmlEntityDesc::new("Theta", 0x0398),
    HtmlEntityDesc::new("Uacute", 0x00DA),
    HtmlEntityDesc::new("Ucirc", 0x00DB),
    HtmlEntityDesc::new("Ugrave", 0x00D9),
    HtmlEntityDesc::new("Upsilon", 0x03A5),
    HtmlEntityDesc::new("Uuml", 0x00DC),
    HtmlEntityDesc::new("Xi", 0x039E),
    HtmlEntityDesc::new("Yacute", 0x00DD),
    HtmlEntityDesc::new("Yuml", 0x0178),
    HtmlEntityDesc::new("Zeta", 0x0396),
    HtmlEntityDesc::new("aacute", 0x00E1),
    HtmlEntityDesc::new("acirc", 0x00E2),
    HtmlEntityDesc::new("acute", 0x00B4),
    HtmlEntityDesc::new("aelig", 0x00E6),
    HtmlEntityDesc::new("agrave", 0x00E0),
    HtmlEntityDesc::new("alefsym", 0x2135),
    HtmlEntityDesc::new("alpha", 0x03B1),
    HtmlEntityDesc::new("amp", 0x0026),
    HtmlEntityDesc::new("and", 0x2227),
    HtmlEntityDesc::new("ang", 0x2220),
    HtmlEntityDesc::new("apos", 0x0027),
    HtmlEntityDesc::new("aring", 0x00E5),
    HtmlEntityDesc::new("asymp", 0x2248),
    HtmlEntityDesc::new("atilde", 0x00E3),
    HtmlEntityDesc::new("auml", 0x00E4),
    HtmlEntityDesc::new("bdquo", 0x201E),
    HtmlEntityDesc::new("beta", 0x03B2),
    HtmlEntityDesc::new("brvbar", 0x00A6),
    HtmlEntityDesc::new("bull", 0x2022),
    HtmlEntityDesc::new("cap", 0x2229),
    HtmlEntityDesc::new("ccedil", 0x00E7),
    HtmlEntityDesc::new("cedil", 0x00B8),
    HtmlEntityDesc::new("cent", 0x00A2),
    HtmlEntityDesc::new("chi", 0x03C7),
    HtmlEntityDesc::new("circ", 0x02C6),
    HtmlEntityDesc::new("clubs", 0x2663),
    HtmlEntityDesc::new("cong", 0x2245),
    HtmlEntityDesc::new("copy", 0x00A9),
    HtmlEntityDesc::new("crarr", 0x21B5),
    HtmlEntityDesc::new("cup", 0x222A),
    HtmlEntityDesc::new("curren", 0x00A4),
    HtmlEntityDesc::new("dArr", 0x21D3),
    HtmlEntityDesc::new("dagger", 0x2020),
    HtmlEntityDesc::new("darr", 0x2193),
    HtmlEntityDesc::new("deg", 0x00B0),
    HtmlEntityDesc::new("delta", 0x03B4),
    HtmlEntityDesc::new("diams", 0x2666),
    HtmlEntityDesc::new("divide", 0x00F7),
    HtmlEntityDesc::new("eacute", 0x00E9),
    HtmlEntityDesc::new("ecirc", 0x00EA),
    HtmlEntityDesc::new("egrave", 0x00E8),
    HtmlEntityDesc::new("empty", 0x2205),
    HtmlEntityDesc::new("emsp", 0x2003),
    HtmlEntityDesc::new("ensp", 0x2002),
    HtmlEntityDesc::new("epsilon", 0x03B5),
    HtmlEntityDesc::new("equiv", 0x2261),
    HtmlEntityDesc::new("eta", 0x03B7),
    HtmlEntityDesc::new("eth", 0x00F0),
    HtmlEntityDesc::new("euml", 0x00EB),
    HtmlEntityDesc::new("euro", 0x20AC),
    HtmlEntityDesc::new("exist", 0x2203),
    HtmlEntityDesc::new("fnof", 0x0192),
    HtmlEntityDesc::new("forall", 0x2200),
    HtmlEntityDesc::new("frac12", 0x00BD),
    HtmlEntityDesc::new("frac14", 0x00BC),
    HtmlEntityDesc::new("frac34", 0x00BE),
    HtmlEntityDesc::new("frasl", 0x2044),
    HtmlEntityDesc::new("gamma", 0x03B3),
    HtmlEntityDesc::new("ge", 0x2265),
    HtmlEntityDesc::new("gt", 0x003E),
    HtmlEntityDesc::new("hArr", 0x21D4),
    HtmlEntityDesc::new("harr", 0x2194),
    HtmlEntityDesc::new("hearts", 0x2665),
    HtmlEntityDesc::new("hellip", 0x2026),
    HtmlEntityDesc::new("iacute", 0x00ED),
    HtmlEntityDesc::new("icirc", 0x00EE),
    HtmlEntityDesc::new("iexcl", 0x00A1),
    HtmlEntityDesc::new("igrave", 0x00EC),
    HtmlEntityDesc::new("image", 0x2111),
    HtmlEntityDesc::new("infin", 0x221E),
    HtmlEntityDesc::new("int", 0x222B),
    HtmlEntityDesc::new("iota", 0x03B9),
    HtmlEntityDesc::new("iquest", 0x00BF),
    HtmlEntityDesc::new("isin", 0x2208),
    HtmlEntityDesc::new("iuml", 0x00EF),
    HtmlEntityDesc::new("kappa", 0x03BA),
    HtmlEntityDesc::new("lArr", 0x21D0),
    HtmlEntityDesc::new("lambda", 0x03BB),
    HtmlEntityDesc::new("lang", 0x2329),
    HtmlEntityDesc::new("laquo", 0x00AB),
    HtmlEntityDesc::new("larr", 0x2190),
    HtmlEntityDesc::new("lceil", 0x2308),
    HtmlEntityDesc::new("ldquo", 0x201C),
    HtmlEntityDesc::new("le", 0x2264),
    HtmlEntityDesc::new("lfloor", 0x230A),
    HtmlEntityDesc::new("lowast", 0x2217),
    HtmlEntityDesc::new("loz", 0x25CA),
    HtmlEntityDesc::new("lrm", 0x200E),
    HtmlEntityDesc::new("lsaquo", 0x2039),
    HtmlEntityDesc::new("lsquo", 0x2018),
    HtmlEntityDesc::new("lt", 0x003C),
    HtmlEntityDesc::new("macr", 0x00AF),
    HtmlEntityDesc::new("mdash", 0x2014),
    HtmlEntityDesc::new("micro", 0x00B5),
    HtmlEntityDesc::new("middot", 0x00B7),
    HtmlEntityDesc::new("minus", 0x2212),
    HtmlEntityDesc::new("mu", 0x03BC),
    HtmlEntityDesc::new("nabla", 0x2207),
    HtmlEntityDesc::new("nbsp", 0x00A0),
    HtmlEntityDesc::new("ndash", 0x2013),
    HtmlEntityDesc::new("ne", 0x2260),
    HtmlEntityDesc::new("ni", 0x220B),
    HtmlEntityDesc::new("not", 0x00AC),
    HtmlEntityDesc::new("notin", 0x2209),
    HtmlEntityDesc::new("nsub", 0x2284),
    HtmlEntityDesc::new("ntilde", 0x00F1),
    HtmlEntityDesc::new("nu", 0x03BD),
    HtmlEntityDesc::new("oacute", 0x00F3),
    HtmlEntityDesc::new("ocirc", 0x00F4),
    HtmlEntityDesc::new("oelig", 0x0153),
    HtmlEntityDesc::new("ograve", 0x00F2),
    HtmlEntityDesc::new("oline", 0x203E),
    HtmlEntityDesc::new("omega", 0x03C9),
    HtmlEntityDesc::new("omicron", 0x03BF),
    HtmlEntityDesc::new("oplus", 0x2295),
    HtmlEntityDesc::new("or", 0x2228),
    HtmlEntityDesc::new("ordf", 0x00AA),
    HtmlEntityDesc::new("ordm", 0x00BA),
    HtmlEntityDesc::new("oslash", 0x00F8),
    HtmlEntityDesc::new("otilde", 0x00F5),
    HtmlEntityDesc::new("otimes", 0x2297),
    HtmlEntityDesc::new("ouml", 0x00F6),
    HtmlEntityDesc::new("para", 0x00B6),
    HtmlEntityDesc::new("part", 0x2202),
    HtmlEntityDesc::new("permil", 0x2030),
    HtmlEntityDesc::new("perp", 0x22A5),
    HtmlEntityDesc::new("phi", 0x03C6),
    HtmlEntityDesc::new("pi", 0x03C0),
    HtmlEntityDesc::new("piv", 0x03D6),
    HtmlEntityDesc::new("plusmn", 0x00B1),
    HtmlEntityDesc::new("pound", 0x00A3),
    HtmlEntityDesc::new("prime", 0x2032),
    HtmlEntityDesc::new("prod", 0x220F),
    HtmlEntityDesc::new("prop", 0x221D),
    HtmlEntityDesc::new("psi", 0x03C8),
    HtmlEntityDesc::new("quot", 0x0022),
    HtmlEntityDesc::new("rArr", 0x21D2),
    HtmlEntityDesc::new("radic", 0x221A),
    HtmlEntityDesc::new("rang", 0x232A),
    HtmlEntityDesc::new("raquo", 0x00BB),
    HtmlEntityDesc::new("rarr", 0x2192),
    HtmlEntityDesc::new("rceil", 0x2309),
    HtmlEntityDesc::new("rdquo", 0x201D),
    HtmlEntityDesc::new("real", 0x211C),
    HtmlEntityDesc::new("reg", 0x00AE),
    HtmlEntityDesc::new("rfloor", 0x230B),
    HtmlEntityDesc::new("rho", 0x03C1),
    HtmlEntityDesc::new("rlm", 0x200F),
    HtmlEntityDesc::new("rsaquo", 0x203A),
    HtmlEntityDesc::new("rsquo", 0x2019),
    HtmlEntityDesc::new("sbquo", 0x201A),
    HtmlEntityDesc::new("scaron", 0x0161),
    HtmlEntityDesc::new("sdot", 0x22C5),
    HtmlEntityDesc::new("sect", 0x00A7),
    HtmlEntityDesc::new("shy", 0x00AD),
    HtmlEntityDesc::new("sigma", 0x03C3),
    HtmlEntityDesc::new("sigmaf", 0x03C2),
    HtmlEntityDesc::new("sim", 0x223C),
    HtmlEntityDesc::new("spades", 0x2660),
    HtmlEntityDesc::new("sub", 0x2282),
    HtmlEntityDesc::new("sube", 0x2286),
    HtmlEntityDesc::new("sum", 0x2211),
    HtmlEntityDesc::new("sup", 0x2283),
    HtmlEntityDesc::new("sup1", 0x00B9),
    HtmlEntityDesc::new("sup2", 0x00B2),
    HtmlEntityDesc::new("sup3", 0x00B3),
    HtmlEntityDesc::new("supe", 0x2287),
    HtmlEntityDesc::new("szlig", 0x00DF),
    HtmlEntityDesc::new("tau", 0x03C4),
    HtmlEntityDesc::new("there4", 0x2234),
    HtmlEntityDesc::new("theta", 0x03B8),
    HtmlEntityDesc::new("thetasym", 0x03D1),
    HtmlEntityDesc::new("thinsp", 0x2009),
    HtmlEntityDesc::new("thorn", 0x00FE),
    HtmlEntityDesc::new("tilde", 0x02DC),
    HtmlEntityDesc::new("times", 0x00D7),
    HtmlEntityDesc::new("trade", 0x2122),
    HtmlEntityDesc::new("uArr", 0x21D1),
    HtmlEntityDesc::new("uacute", 0x00FA),
    HtmlEntityDesc::new("uarr", 0x2191),
    HtmlEntityDesc::new("ucirc", 0x00FB),
    HtmlEntityDesc::new("ugrave", 0x00F9),
    HtmlEntityDesc::new("uml", 0x00A8),
    HtmlEntityDesc::new("upsih", 0x03D2),
    HtmlEntityDesc::new("upsilon", 0x03C5),
    HtmlEntityDesc::new("uuml", 0x00FC),
    HtmlEntityDesc::new("weierp", 0x2118),
    HtmlEntityDesc::new("xi", 0x03BE),
    HtmlEntityDesc::new("yacute", 0x00FD),
    HtmlEntityDesc::new("yen", 0x00A5),
    HtmlEntityDesc::new("yuml", 0x00FF),
    HtmlEntityDesc::new("zeta", 0x03B6),
    HtmlEntityDesc::new("zwj", 0x200D),
    HtmlEntityDesc::new("zwnj", 0x200C),
];

/// Lookup the given entity in the HTML 4.01 entity table.
///
/// Names are case sensitive: `Uuml` and `uuml` are different entities.
#[doc(alias = "htmlEntityLookup")]
pub fn html_entity_lookup(name: &str) -> Option<&'static HtmlEntityDesc> {
    HTML40_ENTITIES_TABLE
        .binary_search_by(|entry| entry.name.cmp(name))
        .ok()
        .and_then(|index| HTML40_ENTITIES_TABLE.get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert!(
            HTML40_ENTITIES_TABLE
                .windows(2)
                .all(|w| w[0].name < w[1].name)
        );
        assert_eq!(HTML40_ENTITIES_TABLE.len(), 253);
    }

    #[test]
    fn lookup_entities() {
        assert_eq!(
            html_entity_lookup("middot").and_then(|e| e.as_char()),
            Some('·')
        );
        assert_eq!(
            html_entity_lookup("Uuml").and_then(|e| e.as_char()),
            Some('Ü')
        );
        assert_eq!(
            html_entity_lookup("uuml").and_then(|e| e.as_char()),
            Some('ü')
        );
        assert_eq!(
            html_entity_lookup("Delta").and_then(|e| e.as_char()),
            Some('Δ')
        );
        assert_eq!(html_entity_lookup("apos").map(|e| e.value), Some(39));
        assert_eq!(html_entity_lookup("nbsp").map(|e| e.value), Some(0xA0));
        assert!(html_entity_lookup("aksjdf").is_none());
        assert!(html_entity_lookup("").is_none());
        assert!(html_entity_lookup("AMP").is_none());
    }
}
