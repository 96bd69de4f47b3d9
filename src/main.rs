//! CLI entry point for the search strategy experiment

use bayes_rescue::io::cli::{Cli, ExperimentRunner, render_report};
use bayes_rescue::io::logging::init_logging;
use clap::Parser;
use std::io::Write;

fn main() -> bayes_rescue::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut runner = ExperimentRunner::new(cli);
    let summaries = runner.process()?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(render_report(&summaries).as_bytes())?;
    Ok(())
}
