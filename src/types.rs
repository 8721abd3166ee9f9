//! Core types and structures for lens-finder

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Lens network the handles are checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LensNetwork {
    #[default]
    Mainnet,
    Testnet,
}

impl std::fmt::Display for LensNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LensNetwork::Mainnet => write!(f, "mainnet"),
            LensNetwork::Testnet => write!(f, "testnet"),
        }
    }
}

impl std::str::FromStr for LensNetwork {
    type Err = crate::error::LensFinderError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" | "main" | "polygon" => Ok(LensNetwork::Mainnet),
            "testnet" | "test" | "mumbai" => Ok(LensNetwork::Testnet),
            other => Err(crate::config_error!(
                "Unknown Lens network '{}'. Use mainnet or testnet",
                other
            )),
        }
    }
}

/// Handle availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    /// No profile is registered under the handle
    Available,
    /// A profile already owns the handle
    Taken,
    /// The lookup itself failed; availability is unknown
    Failed,
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvailabilityStatus::Available => write!(f, "available"),
            AvailabilityStatus::Taken => write!(f, "taken"),
            AvailabilityStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Handle availability check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandleResult {
    pub handle: String,
    pub full_handle: String,
    pub status: AvailabilityStatus,
    pub checked_at: DateTime<Utc>,
    pub check_duration: Option<Duration>,
    pub profile_id: Option<String>,
    pub error_message: Option<String>,
}

impl HandleResult {
    /// Boolean view: only a confirmed "no profile" counts as available
    pub fn is_available(&self) -> bool {
        self.status == AvailabilityStatus::Available
    }
}

/// A batch of random handles that were all available when drawn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub handles: Vec<String>,
    pub target: usize,
    pub attempts: usize,
    pub failed_queries: usize,
    pub generated_at: DateTime<Utc>,
}

impl Sample {
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.handles.len() == self.target
    }
}

/// Configuration for single handle checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub network: LensNetwork,
    /// Endpoint override; the network's default endpoint is used when unset
    pub api_url: Option<String>,
    pub timeout: Duration,
    /// Block submission on characters outside `[a-z0-9_-]`, not just on length
    pub strict_charset: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            network: LensNetwork::Mainnet,
            api_url: None,
            timeout: Duration::from_secs(10),
            strict_charset: false,
        }
    }
}

/// Configuration for random handle sampling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Number of available handles to collect
    pub target: usize,
    /// Upper bound on draws before giving up with a partial sample
    pub max_attempts: usize,
    /// Number of lookups issued at once; 1 keeps draws strictly serial
    pub concurrency: usize,
    pub allow_duplicates: bool,
    /// Fixed RNG seed for reproducible draws
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            target: 10,
            max_attempts: 200,
            concurrency: 1,
            allow_duplicates: false,
            seed: None,
        }
    }
}

/// Counters for handle lookups, shared between clones of a checker
#[derive(Debug, Default)]
pub struct PerformanceMetrics {
    handles_checked: AtomicU64,
    errors_encountered: AtomicU64,
    total_check_time_ms: AtomicU64,
}

impl PerformanceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_handles_checked(&self) {
        self.handles_checked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_errors(&self) {
        self.errors_encountered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_check_time(&self, millis: u64) {
        self.total_check_time_ms.fetch_add(millis, Ordering::Relaxed);
    }

    pub fn get_stats(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            handles_checked: self.handles_checked.load(Ordering::Relaxed),
            errors_encountered: self.errors_encountered.load(Ordering::Relaxed),
            total_check_time_ms: self.total_check_time_ms.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`PerformanceMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub handles_checked: u64,
    pub errors_encountered: u64,
    pub total_check_time_ms: u64,
}

impl MetricsSnapshot {
    /// Average time per lookup, counting failed lookups too
    pub fn avg_check_time_ms(&self) -> f64 {
        let total = self.handles_checked + self.errors_encountered;
        if total == 0 {
            0.0
        } else {
            self.total_check_time_ms as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_parsing() {
        assert_eq!("mainnet".parse::<LensNetwork>().unwrap(), LensNetwork::Mainnet);
        assert_eq!("Mumbai".parse::<LensNetwork>().unwrap(), LensNetwork::Testnet);
        assert!("goerli".parse::<LensNetwork>().is_err());
    }

    #[test]
    fn test_metrics_average() {
        let metrics = PerformanceMetrics::new();
        assert_eq!(metrics.get_stats().avg_check_time_ms(), 0.0);

        metrics.increment_handles_checked();
        metrics.increment_errors();
        metrics.add_check_time(30);
        metrics.add_check_time(10);

        let stats = metrics.get_stats();
        assert_eq!(stats.handles_checked, 1);
        assert_eq!(stats.errors_encountered, 1);
        assert_eq!(stats.avg_check_time_ms(), 20.0);
    }

    #[test]
    fn test_sample_completeness() {
        let sample = Sample {
            handles: vec!["alpha".to_string(), "bravo".to_string()],
            target: 3,
            attempts: 9,
            failed_queries: 0,
            generated_at: Utc::now(),
        };
        assert_eq!(sample.len(), 2);
        assert!(!sample.is_complete());
    }
}
