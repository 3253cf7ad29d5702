pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod source;

pub use client::LookupClient;
pub use config::Config;
pub use error::{Error, Result};
pub use output::Output;
pub use source::HashSource;
