//! CLI definition and dispatch.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::file_log_adapter::FileLogAdapter;
use crate::domain::aggregator::Aggregate;
use crate::domain::report::Report;
use crate::ports::log_port::TradeLogPort;

#[derive(Parser, Debug)]
#[command(name = "tradestats", about = "Trade log P&L summariser")]
pub struct Cli {
    /// Trade log to read, one record per line
    #[arg(default_value = "trades.txt")]
    pub input: PathBuf,
}

pub fn run(cli: Cli) -> ExitCode {
    eprintln!("Reading trade log from {}", cli.input.display());

    let adapter = FileLogAdapter::new(cli.input);
    let lines = match adapter.read_lines() {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let aggregate = Aggregate::from_lines(&lines);
    let report = Report::compute(&aggregate);

    println!("{report}");
    ExitCode::SUCCESS
}
