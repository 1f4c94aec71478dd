//! Input/Output functions
use anyhow::{bail, Context, Result};
use encoding_rs::{Encoding, UTF_8};
use std::{
    fs,
    io::{self, Read},
    path::Path,
};

/// The operand name that means "read standard input"
pub const STDIN: &str = "-";

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN
}

/// Returns the contents of `a` and `b`, decoded as text. At most one of them
/// may be standard input.
pub fn read_operands(a: &Path, b: &Path) -> Result<(String, String)> {
    if is_stdin(a) && is_stdin(b) {
        bail!("Only one operand can be read from standard input (`{STDIN}`)");
    }
    Ok((read_operand(a)?, read_operand(b)?))
}

/// Returns the contents of the file at `path` (or of standard input, if
/// `path` is `-`) decoded as text.
pub fn read_operand(path: &Path) -> Result<String> {
    let bytes = if is_stdin(path) {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf).context("Can't read standard input")?;
        buf
    } else {
        fs::read(path).with_context(|| format!("Can't read file: {}", path.display()))?
    };
    Ok(decode(&bytes, &path.display().to_string()))
}

/// Decode `candidate` to a `String`. If it begins with a UTF-16 Byte Order
/// Mark it's decoded as UTF-16, otherwise as UTF-8. The Byte Order Mark
/// itself is dropped, and malformed sequences become the Unicode REPLACEMENT
/// CHARACTER.
fn decode(candidate: &[u8], name: &str) -> String {
    let encoding = Encoding::for_bom(candidate).map_or(UTF_8, |(enc, _bom_length)| enc);
    let (text, had_malformed_sequences) = encoding.decode_with_bom_removal(candidate);
    if had_malformed_sequences {
        log::warn!("{name} isn't valid {}; replaced malformed sequences", encoding.name());
    }
    log::debug!("read {} bytes of {} from {name}", candidate.len(), encoding.name());
    text.into_owned()
}

/// Write each of `lines` followed by `\n`
pub fn output_lines<'a>(lines: impl IntoIterator<Item = &'a str>, out: &mut impl io::Write) -> Result<()> {
    for line in lines {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use assert_fs::{prelude::*, TempDir};

    const UTF8_BOM: &str = "\u{FEFF}";

    fn to_utf_16le(source: &str) -> Vec<u8> {
        let mut result = b"\xff\xfe".to_vec();
        for b in source.as_bytes().iter() {
            result.push(*b);
            result.push(0);
        }
        result
    }

    fn to_utf_16be(source: &str) -> Vec<u8> {
        let mut result = b"\xfe\xff".to_vec();
        for b in source.as_bytes().iter() {
            result.push(0);
            result.push(*b);
        }
        result
    }

    #[test]
    fn utf_16le_is_translated_to_utf8() {
        let expected = "The cute red crab\n jumps over the lazy blue gopher\n";
        assert_eq!(decode(&to_utf_16le(expected), "le"), expected);
    }

    #[test]
    fn utf_16be_is_translated_to_utf8() {
        let expected = "The cute red crab\n jumps over the lazy blue gopher\n";
        assert_eq!(decode(&to_utf_16be(expected), "be"), expected);
    }

    #[test]
    fn utf8_bom_is_dropped() {
        let text = UTF8_BOM.to_string() + "a\nb\n";
        assert_eq!(decode(text.as_bytes(), "bom"), "a\nb\n");
    }

    #[test]
    fn malformed_utf8_is_replaced_not_rejected() {
        assert_eq!(decode(b"a\xffb", "bad"), "a\u{FFFD}b");
    }

    #[test]
    fn operands_are_read_from_files() {
        let temp = TempDir::new().unwrap();
        let a = temp.child("a.txt");
        a.write_str("x\ny\n").unwrap();
        let b = temp.child("b.txt");
        b.write_binary(&to_utf_16le("y\n")).unwrap();
        let (text_a, text_b) = read_operands(a.path(), b.path()).unwrap();
        assert_eq!(text_a, "x\ny\n");
        assert_eq!(text_b, "y\n");
    }

    #[test]
    fn missing_files_are_named_in_the_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.child("nope.txt");
        let err = read_operand(missing.path()).unwrap_err();
        assert!(format!("{err}").contains("nope.txt"), "{err}");
    }

    #[test]
    fn both_operands_cannot_be_stdin() {
        let stdin = Path::new(STDIN);
        assert!(read_operands(stdin, stdin).is_err());
    }

    #[test]
    fn output_terminates_every_line() {
        let mut out = Vec::new();
        output_lines(["a", "", "b"], &mut out).unwrap();
        assert_eq!(out, b"a\n\nb\n");
    }
}
