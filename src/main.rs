use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;

use hashmob::cli::Cli;
use hashmob::output::Output;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new(cli.no_color, io::stdout().is_terminal(), cli.quiet);
    colored::control::set_override(output.color);

    match hashmob::cli::lookup::run(cli, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.report(&err);
            ExitCode::FAILURE
        }
    }
}
