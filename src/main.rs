use anyhow::Result;
use is_terminal::IsTerminal;
use linezet::io::read_operands;
use linezet::{args, compare, report};
use std::io;

fn main() -> Result<()> {
    let args = args::parsed();

    env_logger::Builder::new().filter_level(args.log_level_filter()).parse_default_env().init();

    let (text_a, text_b) = read_operands(&args.a, &args.b)?;
    let comparison = compare(&text_a, &text_b, args.normalization);

    let stdout = anstream::AutoStream::new(io::stdout().lock(), args.color.into());
    if io::stdout().is_terminal() {
        report::write(args.op, args.json, &comparison, stdout)?;
    } else {
        report::write(args.op, args.json, &comparison, io::BufWriter::new(stdout))?;
    };
    Ok(())
}
