mod file;
mod literal;
mod stdin;

pub use file::FileSource;
pub use literal::LiteralSource;
pub use stdin::StdinSource;

use std::io::{self, BufRead};
use std::path::Path;

use crate::error::{Error, Result};

pub trait HashSource {
    fn name(&self) -> &str;
    fn hashes(&self) -> Result<Vec<String>>;

    fn is_file(&self) -> bool {
        false
    }
}

/// Picks the input source: piped stdin when no argument is given, an
/// existing non-directory path as a hash file, otherwise a comma list.
pub fn parse(arg: Option<&str>, stdin_is_terminal: bool) -> Result<Box<dyn HashSource>> {
    match arg {
        None if stdin_is_terminal => Err(Error::Usage),
        None => Ok(Box::new(StdinSource::new())),
        Some(arg) if is_regular_path(arg) => Ok(Box::new(FileSource::new(arg))),
        Some(arg) => Ok(Box::new(LiteralSource::new(arg))),
    }
}

fn is_regular_path(arg: &str) -> bool {
    Path::new(arg)
        .metadata()
        .map(|meta| !meta.is_dir())
        .unwrap_or(false)
}

pub fn split_literal(value: &str) -> Vec<String> {
    value.split(',').map(|hash| hash.trim().to_string()).collect()
}

/// Reads one trimmed hash per line, stopping at the first read error.
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn read_lines<R: BufRead>(mut reader: R, skip_empty: bool) -> io::Result<Vec<String>> {
    let mut hashes = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let hash = line.trim();
        if skip_empty && hash.is_empty() {
            continue;
        }
        hashes.push(hash.to_string());
    }
    Ok(hashes)
}
