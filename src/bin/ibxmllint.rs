//! Parse infobox markup files and report what the parser sees.

use std::{
    borrow::Cow,
    fs,
    io::{Read, Write, stderr, stdin, stdout},
    process::exit,
};

use anyhow::Context;
use clap::Parser;
use ibxml::{
    XmlError, XmlParserConfig, XmlParserOption,
    encoding::decode_input,
    error::{generic_error_default, report_error},
};

const RETURN_OK: i32 = 0; // No error
const ERR_UNCLASS: i32 = 1; // Unclassified
const ERR_RDFILE: i32 = 5; // Cannot read a file

#[derive(Parser, Debug)]
#[command(
    version,
    name = "ibxmllint",
    arg_required_else_help = true,
    about = "Parse infobox markup files.\nThis tool is based on xmllint."
)]
struct CmdArgs {
    /// files to parse, `-` reads the standard input
    #[clap(required = true)]
    xml_files: Vec<String>,
    /// remove any internal arbitrary parser limits
    #[arg(long)]
    huge: bool,
    /// don't output the result tree
    #[arg(long)]
    noout: bool,
    /// drop ignorable blank spaces
    #[arg(long)]
    noblanks: bool,
    /// do not emit warnings from parser
    #[arg(long)]
    nowarning: bool,
    /// take the content of NAME as text (repeatable, replaces the defaults)
    #[arg(long = "raw-tag", value_name = "NAME")]
    raw_tags: Vec<String>,
    /// parse the content of every element as markup
    #[arg(long, conflicts_with = "raw_tags")]
    no_raw_tags: bool,
}

impl CmdArgs {
    fn config(&self) -> XmlParserConfig {
        let mut config = XmlParserConfig::new();
        if self.huge {
            config = config.with_option(XmlParserOption::XmlParseHuge);
        }
        if self.noblanks {
            config = config.with_option(XmlParserOption::XmlParseNoBlanks);
        }
        if self.nowarning {
            config = config.with_option(XmlParserOption::XmlParseNoWarning);
        }
        if self.no_raw_tags {
            config = config.raw_content_tags(Vec::<String>::new());
        } else if !self.raw_tags.is_empty() {
            config = config.raw_content_tags(self.raw_tags.iter().cloned());
        }
        config
    }
}

fn read_input(filename: &str) -> anyhow::Result<Vec<u8>> {
    if filename == "-" {
        let mut buf = vec![];
        stdin()
            .read_to_end(&mut buf)
            .context("failed to read the standard input")?;
        return Ok(buf);
    }
    fs::read(filename).with_context(|| format!("failed to load external entity \"{filename}\""))
}

/// The input as the parser saw it, for printing the context of an error.
fn source_text(input: &[u8]) -> Cow<'_, str> {
    decode_input(input).0
}

fn report_errors(filename: &str, input: &[u8], errors: &[XmlError]) -> anyhow::Result<()> {
    let source = source_text(input);
    let mut err = stderr().lock();
    for error in errors {
        report_error(&mut err, error, Some(filename), Some(source.as_ref()))?;
    }
    Ok(())
}

/// Parse one file and return the exit status for it.
fn parse_and_print(
    config: &XmlParserConfig,
    args: &CmdArgs,
    filename: &str,
) -> anyhow::Result<i32> {
    let input = match read_input(filename) {
        Ok(input) => input,
        Err(err) => {
            generic_error_default(Some(&mut stderr().lock()), &format!("{err:#}\n"));
            return Ok(ERR_RDFILE);
        }
    };

    match config.parse_bytes(&input) {
        Ok(doc) => {
            report_errors(filename, &input, doc.errors())?;
            if !args.noout {
                let mut out = stdout().lock();
                writeln!(out, "{}", doc.root())?;
            }
            Ok(RETURN_OK)
        }
        Err(err) => {
            report_errors(filename, &input, err.errors())?;
            Ok(ERR_UNCLASS)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cmd_args = CmdArgs::parse();
    let config = cmd_args.config();

    let mut result = RETURN_OK;
    for filename in &cmd_args.xml_files {
        let status = parse_and_print(&config, &cmd_args, filename)?;
        if result == RETURN_OK {
            result = status;
        }
    }

    if result != RETURN_OK {
        exit(result);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_text_is_decoded() {
        let utf16 = "\u{feff}<data>Ü</dat>"
            .encode_utf16()
            .flat_map(u16::to_le_bytes)
            .collect::<Vec<_>>();
        assert_eq!(source_text(&utf16), "<data>Ü</dat>");
        assert_eq!(source_text(b"\xEF\xBB\xBF<a/>"), "<a/>");

        let latin1 = b"<?xml version='1.0' encoding='ISO-8859-1'?><a>\xDC</b>";
        assert_eq!(
            source_text(latin1),
            "<?xml version='1.0' encoding='ISO-8859-1'?><a>Ü</b>"
        );
    }
}
