use crate::error::Result;

use super::{split_literal, HashSource};

/// A single hash or a comma-separated list given on the command line.
pub struct LiteralSource {
    value: String,
}

impl LiteralSource {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl HashSource for LiteralSource {
    fn name(&self) -> &str {
        "argument"
    }

    fn hashes(&self) -> Result<Vec<String>> {
        Ok(split_literal(&self.value))
    }
}
