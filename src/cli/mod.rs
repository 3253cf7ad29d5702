pub mod lookup;

use clap::Parser;

use crate::config::{DEFAULT_ENDPOINT, ENDPOINT_VAR};

const EXAMPLES: &str = "\
Examples:
   hashmob -q 098f6bcd4621d373cade4e832627b4f6
   cat hashes.txt | hashmob -q
   hashmob 098f6bcd4621d373cade4e832627b4f6,5f4dcc3b5aa765d61d8327deb882cf99
   hashmob -q path/to/hashes.txt";

#[derive(Parser, Debug)]
#[command(name = "hashmob")]
#[command(about = "Reads a list of hashes and looks for their cleartext counterparts in HashMob's database")]
#[command(long_about = "Reads a list of hashes and looks for their cleartext counterparts in HashMob's database.\n\
If no positional argument is provided and a pipe is detected, hashes are read from STDIN.\n\
A valid API key must be supplied via the HASHMOB_KEY environment variable.")]
#[command(after_help = EXAMPLES)]
#[command(version)]
pub struct Cli {
    /// Single hash, comma separated hashes, or path to a file with one hash per line
    pub input: Option<String>,

    /// Output founds as hash:plain instead of the full API response
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable JSON response prettifying
    #[arg(short = 'n', long = "no-format")]
    pub no_format: bool,

    /// Disable colored output (automatically disabled when piping)
    #[arg(long)]
    pub no_color: bool,

    #[arg(long, env = ENDPOINT_VAR, default_value = DEFAULT_ENDPOINT, hide = true)]
    pub endpoint: String,
}
