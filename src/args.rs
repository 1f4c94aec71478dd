//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::normalize::Normalization;
use crate::relations::Relation;
use crate::styles::ColorChoice;

/// Returns the parsed command line: the `Args` return value's `op` field is
/// the report requested, `a` and `b` name the two inputs, and
/// `normalization` says how their lines are compared.
#[must_use]
pub fn parsed() -> Args {
    Args::from_cli(CliArgs::parse())
}

/// Parses `args` (starting with the program name) the way `parsed` parses
/// the process's own command line, but returns errors instead of exiting.
pub fn try_parsed_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(args).map(Args::from_cli)
}

/// The parsed command line
#[derive(Debug, Clone)]
pub struct Args {
    /// `op` is the report requested
    pub op: OpName,
    /// Path of the first input; `-` is standard input
    pub a: PathBuf,
    /// Path of the second input; `-` is standard input
    pub b: PathBuf,
    /// How lines are normalized before comparison
    pub normalization: Normalization,
    /// Print JSON instead of text
    pub json: bool,
    /// When to color titles and counts
    pub color: ColorChoice,
    verbosity: u8,
}

impl Args {
    /// The log level asked for by the number of `-v` flags
    #[must_use]
    pub fn log_level_filter(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn from_cli(parsed: CliArgs) -> Self {
        let op = match parsed.op {
            CliName::Intersect => OpName::Intersect,
            CliName::OnlyA => OpName::OnlyA,
            CliName::OnlyB => OpName::OnlyB,
            CliName::Union => OpName::Union,
            CliName::All => OpName::All,
            CliName::Summary => OpName::Summary,
        };
        let normalization = Normalization {
            ignore_case: parsed.ignore_case,
            trim: !parsed.no_trim,
            ignore_empty: !parsed.keep_empty,
        };
        Args {
            op,
            a: parsed.a,
            b: parsed.b,
            normalization,
            json: parsed.json,
            color: parsed.color,
            verbosity: parsed.verbose,
        }
    }
}

/// The report to print
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum OpName {
    /// Print the lines present in both inputs
    Intersect,
    /// Print the lines present in A but not B
    OnlyA,
    /// Print the lines present in B but not A
    OnlyB,
    /// Print the lines present in either input
    Union,
    /// Print all four relations, each under a title
    All,
    /// Print line counts for the inputs and the four relations
    Summary,
}

impl OpName {
    /// The single relation this report prints, if it prints just one
    #[must_use]
    pub fn relation(self) -> Option<Relation> {
        match self {
            OpName::Intersect => Some(Relation::Intersection),
            OpName::OnlyA => Some(Relation::UniqueA),
            OpName::OnlyB => Some(Relation::UniqueB),
            OpName::Union => Some(Relation::Union),
            OpName::All | OpName::Summary => None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "linezet", version)]
/// Compare two lists of lines: which lines they share, which only one of
/// them has, and which either has
struct CliArgs {
    #[arg(value_enum)]
    /// The relation to print
    op: CliName,
    /// First input file (`-` for standard input)
    a: PathBuf,
    /// Second input file (`-` for standard input)
    b: PathBuf,
    #[arg(short, long)]
    /// Compare lines without regard to case
    ignore_case: bool,
    #[arg(long)]
    /// Keep leading and trailing whitespace
    no_trim: bool,
    #[arg(long)]
    /// Keep empty lines
    keep_empty: bool,
    #[arg(long)]
    /// Print JSON instead of lines
    json: bool,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    /// When to color titles and counts
    color: ColorChoice,
    #[arg(short, long, action = ArgAction::Count)]
    /// Log more (repeat for even more)
    verbose: u8,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, ValueEnum)]
/// Name of the requested report
enum CliName {
    /// Print the lines present in both inputs
    Intersect,
    /// Print the lines present in A but not B
    OnlyA,
    /// Print the lines present in B but not A
    OnlyB,
    /// Print the lines present in either input
    Union,
    /// Print all four relations, each under a title
    All,
    /// Print line counts for the inputs and the four relations
    Summary,
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        try_parsed_from(std::iter::once("linezet").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn normalization_defaults_to_trimming_and_skipping_empty_lines() {
        let args = parse(&["union", "a.txt", "b.txt"]);
        assert_eq!(args.op, OpName::Union);
        assert_eq!(args.normalization, Normalization::default());
        assert!(!args.json);
        assert_eq!(args.color, ColorChoice::Auto);
        assert_eq!(args.log_level_filter(), LevelFilter::Warn);
    }

    #[test]
    fn flags_toggle_each_stage() {
        let args = parse(&["only-a", "-i", "--no-trim", "--keep-empty", "a", "b"]);
        assert_eq!(args.op, OpName::OnlyA);
        assert_eq!(
            args.normalization,
            Normalization { ignore_case: true, trim: false, ignore_empty: false }
        );
    }

    #[test]
    fn relation_names_map_to_relations() {
        for (name, relation) in [
            ("intersect", Some(Relation::Intersection)),
            ("only-a", Some(Relation::UniqueA)),
            ("only-b", Some(Relation::UniqueB)),
            ("union", Some(Relation::Union)),
            ("all", None),
            ("summary", None),
        ] {
            assert_eq!(parse(&[name, "a", "b"]).op.relation(), relation, "for {name}");
        }
    }

    #[test]
    fn each_v_raises_the_log_level() {
        assert_eq!(parse(&["all", "a", "b", "-v"]).log_level_filter(), LevelFilter::Info);
        assert_eq!(parse(&["all", "a", "b", "-vv"]).log_level_filter(), LevelFilter::Debug);
        assert_eq!(parse(&["all", "a", "b", "-vvvv"]).log_level_filter(), LevelFilter::Trace);
    }

    #[test]
    fn two_operands_are_required() {
        assert!(try_parsed_from(["linezet", "union", "a"]).is_err());
        assert!(try_parsed_from(["linezet", "union", "a", "b", "c"]).is_err());
        assert!(try_parsed_from(["linezet", "difference", "a", "b"]).is_err());
    }
}
