//! Environment configuration
//!
//! Settings come from `LENS_*` environment variables, optionally loaded from
//! a `.env` file by [`crate::init`].

use crate::discover::{CandidatePool, HandleSampler, SampleBoard};
use crate::error::{LensFinderError, Result};
use crate::handle::HandleChecker;
use crate::lens::registry::handle_suffix;
use crate::lens::LensApiClient;
use crate::types::{CheckConfig, LensNetwork, SampleConfig};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Everything the CLI needs to build a checker and a sampler
#[derive(Debug, Clone, Default)]
pub struct FinderConfig {
    pub check: CheckConfig,
    pub sample: SampleConfig,
    /// JSON word list; the built-in list is used when unset
    pub wordlist: Option<PathBuf>,
}

impl FinderConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(network) = get("LENS_NETWORK") {
            config.check.network = network.parse()?;
        }
        config.check.api_url = get("LENS_API_URL");
        if let Some(secs) = get("LENS_TIMEOUT_SECS") {
            let secs: u64 = parse_var("LENS_TIMEOUT_SECS", &secs)?;
            if secs == 0 {
                return Err(LensFinderError::config("LENS_TIMEOUT_SECS must be positive"));
            }
            config.check.timeout = Duration::from_secs(secs);
        }
        if let Some(strict) = get("LENS_STRICT_CHARSET") {
            config.check.strict_charset = parse_flag("LENS_STRICT_CHARSET", &strict)?;
        }

        if let Some(size) = get("LENS_SAMPLE_SIZE") {
            config.sample.target = parse_var("LENS_SAMPLE_SIZE", &size)?;
        }
        if let Some(attempts) = get("LENS_MAX_ATTEMPTS") {
            config.sample.max_attempts = parse_var("LENS_MAX_ATTEMPTS", &attempts)?;
        }
        if let Some(concurrency) = get("LENS_SAMPLE_CONCURRENCY") {
            config.sample.concurrency = parse_var("LENS_SAMPLE_CONCURRENCY", &concurrency)?;
        }
        if let Some(allow) = get("LENS_ALLOW_DUPLICATES") {
            config.sample.allow_duplicates = parse_flag("LENS_ALLOW_DUPLICATES", &allow)?;
        }

        config.wordlist = get("LENS_WORDLIST").map(PathBuf::from);

        Ok(config)
    }

    /// Handle suffix for the configured network
    pub fn suffix(&self) -> &'static str {
        handle_suffix(self.check.network)
    }

    pub fn network(&self) -> LensNetwork {
        self.check.network
    }

    /// Build a checker backed by the Lens API
    pub fn build_checker(&self) -> HandleChecker {
        let client = LensApiClient::new(&self.check);
        tracing::debug!(url = client.url(), network = %self.check.network, "Using Lens API");
        HandleChecker::new(Arc::new(client), self.suffix()).with_timeout(self.check.timeout)
    }

    /// Load the configured candidate pool
    pub fn load_pool(&self) -> Result<CandidatePool> {
        match &self.wordlist {
            Some(path) => CandidatePool::from_json_file(path),
            None => CandidatePool::builtin(),
        }
    }

    /// Build a sample board sharing `checker`
    pub fn build_board(&self, checker: HandleChecker) -> Result<SampleBoard> {
        let sampler = HandleSampler::new(self.load_pool()?, checker, self.sample.clone())?;
        Ok(SampleBoard::new(sampler))
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| crate::config_error!("{} has an invalid value: '{}'", key, value))
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(crate::config_error!("{} must be true or false, got '{}'", key, value)),
    }
}
