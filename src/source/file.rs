use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::{read_lines, HashSource};

pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl HashSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn hashes(&self) -> Result<Vec<String>> {
        let file = File::open(&self.path).map_err(|source| Error::OpenFile {
            path: self.path.clone(),
            source,
        })?;
        read_lines(BufReader::new(file), true).map_err(|source| Error::ReadFile {
            path: self.path.clone(),
            source,
        })
    }

    fn is_file(&self) -> bool {
        true
    }
}
