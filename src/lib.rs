//! The `compare` function is the kernel of the application: it takes two
//! blobs of text and reports which lines they share, which lines only one of
//! them has, and which lines either has. The `normalize` module decides what
//! counts as the same line, `set` de-duplicates each input, and `relations`
//! does the comparing. The `args`, `io` and `report` modules serve the
//! command line tool.
//!
//! Every sequence in the result is free of duplicates and in a fixed order:
//! lines appear where their first occurrence appeared, A's lines before B's.
//! When case is ignored, the line shown for a key is the last occurrence of
//! that key in its input, and A's occurrence when both inputs have it.
//!
//! Current Limitations:
//! * A "line" is whatever lies between `\n` characters. Other line
//!   terminators aren't recognized, though trimming removes a stray `\r`.
//! * Case folding is Unicode lowercasing, not locale-aware collation.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod io;
pub mod normalize;
pub mod relations;
pub mod report;
pub mod set;
pub mod styles;

pub use crate::normalize::Normalization;
pub use crate::relations::{Comparison, Relation, Relations, Side, DISPLAY_PREFERENCE};
use crate::set::LineIndex;

/// Compares the lines of `text_a` with those of `text_b`, normalized
/// according to `config`, and returns the intersection, the lines unique to
/// each side, and the union.
#[must_use]
pub fn compute<'data>(text_a: &'data str, text_b: &'data str, config: Normalization) -> Relations<'data> {
    compare(text_a, text_b, config).relations
}

/// Like `compute`, but also reports how many lines each input contributed
/// (after trimming and empty-line filtering, before de-duplication).
#[must_use]
pub fn compare<'data>(text_a: &'data str, text_b: &'data str, config: Normalization) -> Comparison<'data> {
    let a = LineIndex::of(text_a, config);
    let b = LineIndex::of(text_b, config);
    log::debug!(
        "A: {} lines, {} distinct; B: {} lines, {} distinct; {:?}",
        a.line_count(),
        a.len(),
        b.line_count(),
        b.len(),
        config
    );
    Comparison::between(&a, &b)
}
