use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};

pub const USER_AGENT: &str = concat!("hashmob/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
pub struct HashRequest<'a> {
    pub hashes: &'a [String],
}

impl HashRequest<'_> {
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(Error::Encode)
    }
}

pub struct LookupClient {
    http: Client,
    config: Config,
}

impl LookupClient {
    pub fn new(config: Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::Transport)?;
        Ok(Self { http, config })
    }

    /// Sends one search request and returns the raw body. The status code is
    /// not checked: error payloads are rendered like any other response.
    pub fn lookup(&self, hashes: &[String]) -> Result<Vec<u8>> {
        let payload = HashRequest { hashes }.to_json()?;

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "*/*")
            .header("api-key", &self.config.api_key)
            .header("X-CSRF-TOKEN", "")
            .body(payload)
            .send()
            .map_err(Error::Transport)?;

        let body = response.bytes().map_err(Error::ReadResponse)?;
        Ok(body.to_vec())
    }
}
