//! Provides the `LineIndex` structure, the de-duplicated view of one input's
//! lines.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use std::borrow::Cow;

use crate::normalize::{extract_lines, Normalization};

/// A `LineIndex` maps the comparison key of each line to the line shown for
/// that key in results.
/// * Keys are `Cow<'data, str>`: borrowed from the input text, unless case
///   folding produced a new string
/// * Display lines are always borrowed from the input text
/// * A key keeps the position where it was first inserted, so iteration
///   follows first-occurrence order
/// * Inserting a key that's already present replaces its display line: the
///   last occurrence of a line is the one shown
/// * A `LineIndex` also counts every line inserted, duplicates included
#[derive(Clone, Debug)]
pub struct LineIndex<'data> {
    map: KeyMap<'data>,
    normalization: Normalization,
    line_count: usize,
}
type KeyMap<'data> = IndexMap<Cow<'data, str>, &'data str, FxBuildHasher>;

impl<'data> LineIndex<'data> {
    /// An empty index whose keys are derived according to `normalization`
    #[must_use]
    pub fn new(normalization: Normalization) -> Self {
        LineIndex { map: KeyMap::default(), normalization, line_count: 0 }
    }

    /// Indexes every line of `text` that survives `normalization`
    #[must_use]
    pub fn of(text: &'data str, normalization: Normalization) -> Self {
        Self::from_lines(extract_lines(text, normalization), normalization)
    }

    /// Indexes already-extracted `lines`, in order
    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = &'data str>, normalization: Normalization) -> Self {
        let mut index = Self::new(normalization);
        for line in lines {
            index.insert(line);
        }
        log::trace!("indexed {} lines under {} keys", index.line_count, index.len());
        index
    }

    /// Insert `line` under its key. An existing key keeps its position but
    /// takes `line` as its new display line.
    pub fn insert(&mut self, line: &'data str) {
        self.line_count += 1;
        self.map.insert(self.normalization.key_of(line), line);
    }

    /// `(key, display line)` pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'data str)> + '_ {
        self.map.iter().map(|(key, display)| (key.as_ref(), *display))
    }

    /// Keys in first-occurrence order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.keys().map(Cow::as_ref)
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Are there no keys at all?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of lines inserted, counting duplicates
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_count
    }
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    fn folded() -> Normalization {
        Normalization { ignore_case: true, ..Normalization::default() }
    }

    #[test]
    fn given_repeated_lines_the_index_keeps_them_in_order_without_dups() {
        let index = LineIndex::of("xxx\nabc\nxxx\nyyy\nxxx\nabc\n", Normalization::default());
        assert_eq!(index.keys().collect::<Vec<_>>(), ["xxx", "abc", "yyy"]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.line_count(), 6);
    }

    #[test]
    fn last_occurrence_supplies_the_display_but_first_supplies_the_position() {
        let index = LineIndex::of("Foo\nbar\nFOO\n", folded());
        assert_eq!(index.iter().collect::<Vec<_>>(), [("foo", "FOO"), ("bar", "bar")]);
    }

    #[test]
    fn keys_are_normalized_but_displays_are_not() {
        let index = LineIndex::of("Foo\n", folded());
        assert_eq!(index.iter().collect::<Vec<_>>(), [("foo", "Foo")]);
    }

    #[test]
    fn case_sensitive_keys_are_distinct() {
        let index = LineIndex::of("Foo\nfoo\n", Normalization::default());
        assert_eq!(index.keys().collect::<Vec<_>>(), ["Foo", "foo"]);
    }

    #[test]
    fn the_empty_line_is_an_ordinary_key_when_kept() {
        let keep_empty = Normalization { ignore_empty: false, ..Normalization::default() };
        let index = LineIndex::of("a\n\n\nb", keep_empty);
        assert_eq!(index.keys().collect::<Vec<_>>(), ["a", "", "b"]);
        assert_eq!(index.line_count(), 4);
    }

    #[test]
    fn an_empty_index_is_empty() {
        let index = LineIndex::new(Normalization::default());
        assert!(index.is_empty());
        assert_eq!(index.line_count(), 0);
    }
}
