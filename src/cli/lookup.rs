use std::io::{self, IsTerminal, Write};

use crate::client::LookupClient;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::Output;
use crate::render;
use crate::source;
use crate::status;

use super::Cli;

pub fn run(cli: Cli, output: &Output) -> Result<()> {
    let config = Config::from_env(cli.endpoint)?;

    let input = source::parse(cli.input.as_deref(), io::stdin().is_terminal())?;
    if input.is_file() {
        status!(output, "Reading hashes from file: {}", input.name());
    }
    let hashes = input.hashes()?;

    let client = LookupClient::new(config)?;
    let body = client.lookup(&hashes)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.quiet {
        match render::found(&body) {
            Ok(found) if found.is_empty() => return Err(Error::NoResults),
            Ok(found) => render::write_found(&mut out, &found).map_err(Error::Stdout)?,
            // A body that does not decode is reported but is not fatal here.
            Err(err) => output.report(&err),
        }
    } else if cli.no_format {
        render::write_raw(&mut out, &body).map_err(Error::Stdout)?;
    } else {
        render::write_pretty(&mut out, &body, output)?;
    }

    out.flush().map_err(Error::Stdout)
}
