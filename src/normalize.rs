//! Provides `Normalization`, the knobs that decide what counts as "the same
//! line", and `extract_lines`, which turns a text blob into the sequence of
//! lines that will be compared.
use memchr::memchr;
use std::borrow::Cow;

/// `Normalization` says how each line is transformed before lines are
/// compared. Every field toggles one stage independently of the others:
///
/// * `trim` strips leading and trailing whitespace,
/// * `ignore_empty` then drops the lines left empty, and
/// * `ignore_case` lowercases the comparison key (but not the line shown in
///   results).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Normalization {
    /// Compare lines without regard to case
    pub ignore_case: bool,
    /// Strip leading and trailing whitespace from every line
    pub trim: bool,
    /// Drop empty lines (empty after trimming, when `trim` is set)
    pub ignore_empty: bool,
}

impl Default for Normalization {
    /// Trim lines and skip blank ones, but keep comparisons case sensitive.
    fn default() -> Self {
        Normalization { ignore_case: false, trim: true, ignore_empty: true }
    }
}

impl Normalization {
    /// The comparison key for `line`: the line itself, or its lowercase form
    /// when `ignore_case` is set. Only the lowercased form is allocated.
    #[must_use]
    pub fn key_of<'data>(&self, line: &'data str) -> Cow<'data, str> {
        if self.ignore_case {
            Cow::Owned(line.to_lowercase())
        } else {
            Cow::Borrowed(line)
        }
    }
}

/// Returns the lines of `text` that survive `cfg`'s trimming and empty-line
/// stages, in the order they occur. Trimming happens first, so with both
/// stages on a whitespace-only line is dropped.
pub fn extract_lines(text: &str, cfg: Normalization) -> impl Iterator<Item = &str> + '_ {
    lines_of(text)
        .map(move |line| if cfg.trim { line.trim_matches(is_trimmable) } else { line })
        .filter(move |line| !(cfg.ignore_empty && line.is_empty()))
}

/// Unicode whitespace, plus the zero width no-break space (U+FEFF) that a
/// Byte Order Mark leaves behind when files are concatenated
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Splits `text` at every `\n`. A `\r` before the `\n` stays part of the
/// line, and a trailing `\n` produces a final empty line. Empty text has no
/// lines at all.
#[must_use]
pub fn lines_of(text: &str) -> Lines<'_> {
    Lines { rest: if text.is_empty() { None } else { Some(text) } }
}

/// Iterator returned by `lines_of`
#[derive(Clone, Debug)]
pub struct Lines<'data> {
    rest: Option<&'data str>,
}

impl<'data> Iterator for Lines<'data> {
    type Item = &'data str;

    fn next(&mut self) -> Option<&'data str> {
        let slice = self.rest?;
        match memchr(b'\n', slice.as_bytes()) {
            Some(end) => {
                // `\n` is a single byte, so both halves fall on char boundaries
                self.rest = Some(&slice[end + 1..]);
                Some(&slice[..end])
            }
            None => {
                self.rest = None;
                Some(slice)
            }
        }
    }
}
