//! Houses `Relations::between`, which compares two `LineIndex`es, and the
//! `Comparison` returned by the crate's `compare` function.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use serde::Serialize;

use crate::set::LineIndex;

/// One of the two inputs being compared
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The first input
    A,
    /// The second input
    B,
}

/// When a key occurs in both inputs, results show the display line from
/// this side.
pub const DISPLAY_PREFERENCE: Side = Side::A;

/// Names one of the four sequences in a `Relations`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// Lines present in both inputs
    Intersection,
    /// Lines present in A but not B
    UniqueA,
    /// Lines present in B but not A
    UniqueB,
    /// Lines present in either input
    Union,
}

impl Relation {
    /// All four relations, in report order
    pub const ALL: [Relation; 4] =
        [Relation::Intersection, Relation::UniqueA, Relation::UniqueB, Relation::Union];

    /// Human-readable name, used as a section title
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Relation::Intersection => "Intersection",
            Relation::UniqueA => "Only in A",
            Relation::UniqueB => "Only in B",
            Relation::Union => "Union",
        }
    }
}

/// The four set relations between two inputs. Each field is a sequence of
/// display lines, no two of which share a key.
/// * `intersection` and `unique_a` follow A's order,
/// * `unique_b` follows B's order, and
/// * `union` is A's keys in A's order followed by B's remaining keys in B's
///   order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Relations<'data> {
    /// Lines whose key occurs in both inputs
    pub intersection: Vec<&'data str>,
    /// Lines whose key occurs in A only
    pub unique_a: Vec<&'data str>,
    /// Lines whose key occurs in B only
    pub unique_b: Vec<&'data str>,
    /// Lines whose key occurs in either input
    pub union: Vec<&'data str>,
}

/// Sizes of the four sequences of a `Relations`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    /// Length of `Relations::intersection`
    pub intersection: usize,
    /// Length of `Relations::unique_a`
    pub unique_a: usize,
    /// Length of `Relations::unique_b`
    pub unique_b: usize,
    /// Length of `Relations::union`
    pub union: usize,
}

// The bookkeeping value for each key of the union: which inputs it was seen
// in, and the line to show for it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SeenIn {
    OnlyA,
    OnlyB,
    Both,
}

#[derive(Clone, Copy)]
struct Bookkeeping<'data> {
    seen_in: SeenIn,
    display: &'data str,
}

type UnionMap<'idx, 'data> = IndexMap<&'idx str, Bookkeeping<'data>, FxBuildHasher>;

impl<'data> Relations<'data> {
    /// Computes the relations between `a` and `b`. We build the union in a
    /// single map, A's keys first, recording where each key was seen; each
    /// relation is then an order-preserving filter over that map. So the
    /// intersection and the two differences partition the union by
    /// construction.
    #[must_use]
    pub fn between(a: &LineIndex<'data>, b: &LineIndex<'data>) -> Self {
        let mut set = UnionMap::default();
        for (key, display) in a.iter() {
            set.insert(key, Bookkeeping { seen_in: SeenIn::OnlyA, display });
        }
        for (key, display) in b.iter() {
            set.entry(key)
                .and_modify(|entry| {
                    entry.seen_in = SeenIn::Both;
                    if DISPLAY_PREFERENCE == Side::B {
                        entry.display = display;
                    }
                })
                .or_insert(Bookkeeping { seen_in: SeenIn::OnlyB, display });
        }

        Relations {
            intersection: displays_where(&set, |seen_in| seen_in == SeenIn::Both),
            unique_a: displays_where(&set, |seen_in| seen_in == SeenIn::OnlyA),
            unique_b: displays_where(&set, |seen_in| seen_in == SeenIn::OnlyB),
            union: displays_where(&set, |_| true),
        }
    }

    /// The sequence named by `relation`
    #[must_use]
    pub fn get(&self, relation: Relation) -> &[&'data str] {
        match relation {
            Relation::Intersection => &self.intersection,
            Relation::UniqueA => &self.unique_a,
            Relation::UniqueB => &self.unique_b,
            Relation::Union => &self.union,
        }
    }

    /// Sizes of the four sequences
    #[must_use]
    pub fn counts(&self) -> Counts {
        Counts {
            intersection: self.intersection.len(),
            unique_a: self.unique_a.len(),
            unique_b: self.unique_b.len(),
            union: self.union.len(),
        }
    }
}

fn displays_where<'data>(set: &UnionMap<'_, 'data>, keep: impl Fn(SeenIn) -> bool) -> Vec<&'data str> {
    set.values().filter(|v| keep(v.seen_in)).map(|v| v.display).collect()
}

/// `Relations` together with the number of lines each input contributed
/// (after trimming and empty-line filtering, before de-duplication).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Comparison<'data> {
    /// Lines extracted from A
    pub lines_in_a: usize,
    /// Lines extracted from B
    pub lines_in_b: usize,
    /// The four relations
    #[serde(flatten)]
    pub relations: Relations<'data>,
}

/// Line counts of a `Comparison` without the lines themselves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Lines extracted from A
    pub lines_in_a: usize,
    /// Lines extracted from B
    pub lines_in_b: usize,
    /// Sizes of the four relations
    #[serde(flatten)]
    pub counts: Counts,
}

impl<'data> Comparison<'data> {
    /// Compares two indexes, recording their line counts
    #[must_use]
    pub fn between(a: &LineIndex<'data>, b: &LineIndex<'data>) -> Self {
        Comparison {
            lines_in_a: a.line_count(),
            lines_in_b: b.line_count(),
            relations: Relations::between(a, b),
        }
    }

    /// The counts, without the lines
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            lines_in_a: self.lines_in_a,
            lines_in_b: self.lines_in_b,
            counts: self.relations.counts(),
        }
    }
}
