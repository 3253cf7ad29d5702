use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("A valid API key must be specified in the environment variable HASHMOB_KEY")]
    MissingApiKey { dotfile: PathBuf },

    #[error("Usage: hashmob [-q] [-n] <hash input>")]
    Usage,

    #[error("Error reading input: {0}")]
    Stdin(#[source] io::Error),

    #[error("Error opening file: {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading file: {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error creating request payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Error sending request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Error reading response: {0}")]
    ReadResponse(#[source] reqwest::Error),

    #[error("Error parsing response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Error writing output: {0}")]
    Stdout(#[source] io::Error),

    #[error("No results :(")]
    NoResults,
}

pub type Result<T> = std::result::Result<T, Error>;
