//! Writes a `Comparison` in the form the command line asked for
use anyhow::Result;
use serde::Serialize;
use std::io;

use crate::args::OpName;
use crate::io::output_lines;
use crate::relations::{Comparison, Relation};
use crate::styles::{as_count, as_title};

/// Writes the report named by `op` to `out`, as JSON if `json` is set and as
/// lines otherwise:
///
/// * a single relation prints its lines, one per line,
/// * `OpName::All` prints every relation under a title with its count, and
/// * `OpName::Summary` prints just the counts.
pub fn write(op: OpName, json: bool, comparison: &Comparison, mut out: impl io::Write) -> Result<()> {
    match (op.relation(), json) {
        (Some(relation), false) => output_lines(comparison.relations.get(relation).iter().copied(), &mut out)?,
        (Some(relation), true) => write_json(comparison.relations.get(relation), &mut out)?,
        (None, false) if op == OpName::Summary => write_summary(comparison, &mut out)?,
        (None, true) if op == OpName::Summary => write_json(&comparison.summary(), &mut out)?,
        (None, false) => write_sections(comparison, &mut out)?,
        (None, true) => write_json(comparison, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// Each relation's title and count, then its lines. A blank line separates
/// the sections.
fn write_sections(comparison: &Comparison, out: &mut impl io::Write) -> Result<()> {
    for (n, relation) in Relation::ALL.into_iter().enumerate() {
        if n > 0 {
            writeln!(out)?;
        }
        let lines = comparison.relations.get(relation);
        let count = lines.len().to_string();
        writeln!(out, "{} ({}):", as_title(relation.title()), as_count(&count))?;
        output_lines(lines.iter().copied(), out)?;
    }
    Ok(())
}

fn write_summary(comparison: &Comparison, out: &mut impl io::Write) -> Result<()> {
    let counts = [
        ("Lines in A", comparison.lines_in_a),
        ("Lines in B", comparison.lines_in_b),
    ]
    .into_iter()
    .chain(Relation::ALL.map(|relation| (relation.title(), comparison.relations.get(relation).len())));

    let entries: Vec<_> = counts.map(|(label, count)| (as_title(label), count.to_string())).collect();
    let width = entries.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, count) in &entries {
        let padding = width - label.len();
        writeln!(out, "{label}:{:padding$} {}", "", as_count(count))?;
    }
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(value: &T, out: &mut impl io::Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
