//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::DEFAULT_PAGE_SIZE;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared by every fetcher built on one backend.
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[cfg(feature = "http")]
impl ClientConfig {
    /// Loads configuration from an optional `learnhub.yaml` next to the
    /// binary, overridden by `LEARNHUB_*` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("learnhub").required(false))
            .add_source(config::Environment::with_prefix("LEARNHUB"))
            .build()?
            .try_deserialize()
    }
}
