use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const API_KEY_VAR: &str = "HASHMOB_KEY";
pub const ENDPOINT_VAR: &str = "HASHMOB_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "https://hashmob.net/api/v2/search/paid";

/// Placeholder key shown in the setup hint.
pub const EXAMPLE_KEY: &str = "329b9b8c-dc02-11ed-8c5d-e7484ed0ea8c";

const FALLBACK_DOTFILE: &str = ".bashrc";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
}

impl Config {
    pub fn from_env(endpoint: impl Into<String>) -> Result<Self> {
        Self::resolve(std::env::var(API_KEY_VAR).ok(), endpoint)
    }

    /// An unset or empty key is rejected with the dotfile the user should
    /// persist it in.
    pub fn resolve(api_key: Option<String>, endpoint: impl Into<String>) -> Result<Self> {
        match api_key {
            Some(api_key) if !api_key.is_empty() => Ok(Self {
                api_key,
                endpoint: endpoint.into(),
            }),
            _ => Err(Error::MissingApiKey {
                dotfile: default_dotfile(),
            }),
        }
    }
}

pub fn default_dotfile() -> PathBuf {
    let shell = std::env::var("SHELL").ok();
    dotfile(shell.as_deref(), dirs::home_dir().as_deref())
}

pub fn dotfile(shell: Option<&str>, home: Option<&Path>) -> PathBuf {
    let name = match shell {
        Some(shell) if shell.contains("zsh") => ".zshrc",
        Some(shell) if shell.contains("bash") => ".bashrc",
        _ => return PathBuf::from(FALLBACK_DOTFILE),
    };

    match home {
        Some(home) => home.join(name),
        None => PathBuf::from(FALLBACK_DOTFILE),
    }
}
