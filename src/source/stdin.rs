use std::io;

use crate::error::{Error, Result};

use super::{read_lines, HashSource};

pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HashSource for StdinSource {
    fn name(&self) -> &str {
        "stdin"
    }

    fn hashes(&self) -> Result<Vec<String>> {
        read_lines(io::stdin().lock(), false).map_err(Error::Stdin)
    }
}
