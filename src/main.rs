use clap::Parser;
use tradestats::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
