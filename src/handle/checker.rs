//! Handle availability checker

use super::{HandleOracle, HandleValidator, ProfileLookup};
use crate::error::LensFinderError;
use crate::types::{AvailabilityStatus, HandleResult, MetricsSnapshot, PerformanceMetrics};
use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;

/// Handle availability checker with performance monitoring.
///
/// Oracle failures never escape as errors: they are reported as
/// [`AvailabilityStatus::Failed`] so callers can tell them apart from taken
/// handles.
#[derive(Clone)]
pub struct HandleChecker {
    oracle: Arc<dyn HandleOracle>,
    validator: Arc<HandleValidator>,
    timeout: Duration,
    metrics: Arc<PerformanceMetrics>,
}

impl HandleChecker {
    /// Create a new checker over an oracle, for handles under `suffix`
    pub fn new(oracle: Arc<dyn HandleOracle>, suffix: impl Into<String>) -> Self {
        Self {
            oracle,
            validator: Arc::new(HandleValidator::new(suffix)),
            timeout: Duration::from_secs(10),
            metrics: Arc::new(PerformanceMetrics::new()),
        }
    }

    /// Bound each lookup by a wall-clock timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check a single handle (without suffix)
    pub async fn check_handle(&self, handle: &str) -> HandleResult {
        let start_time = Instant::now();
        let full_handle = self.validator.full_handle(handle);

        let lookup = match timeout(self.timeout, self.oracle.lookup_profile(&full_handle)).await {
            Ok(result) => result,
            Err(_) => Err(LensFinderError::timeout(
                format!("{} lookup", self.oracle.name()),
                self.timeout,
            )),
        };

        let duration = start_time.elapsed();
        self.metrics.add_check_time(duration.as_millis() as u64);

        let (status, profile_id, error_message) = match lookup {
            Ok(ProfileLookup::NotFound) => (AvailabilityStatus::Available, None, None),
            Ok(ProfileLookup::Found { id }) => (AvailabilityStatus::Taken, Some(id), None),
            Err(e) => {
                tracing::warn!(
                    handle = %full_handle,
                    oracle = self.oracle.name(),
                    error = %e,
                    "Handle lookup failed"
                );
                (AvailabilityStatus::Failed, None, Some(e.to_string()))
            }
        };

        if status == AvailabilityStatus::Failed {
            self.metrics.increment_errors();
        } else {
            self.metrics.increment_handles_checked();
        }

        tracing::debug!(
            handle = %full_handle,
            oracle = self.oracle.name(),
            status = %status,
            duration_ms = %duration.as_millis(),
            "Handle check completed"
        );

        HandleResult {
            handle: handle.to_string(),
            full_handle,
            status,
            checked_at: Utc::now(),
            check_duration: Some(duration),
            profile_id,
            error_message,
        }
    }

    /// Check multiple handles concurrently, results in input order
    pub async fn check_handles(&self, handles: &[String]) -> Vec<HandleResult> {
        let batch_start = Instant::now();
        let results = join_all(handles.iter().map(|handle| self.check_handle(handle))).await;

        let available = results.iter().filter(|r| r.is_available()).count();
        let failed = results
            .iter()
            .filter(|r| r.status == AvailabilityStatus::Failed)
            .count();

        tracing::info!(
            handles_requested = %handles.len(),
            available = %available,
            failed = %failed,
            batch_duration_ms = %batch_start.elapsed().as_millis(),
            "Batch handle check completed"
        );

        results
    }

    /// Get the validator used to build full handles
    pub fn validator(&self) -> &HandleValidator {
        &self.validator
    }

    /// Get the handle suffix
    pub fn suffix(&self) -> &str {
        self.validator.suffix()
    }

    /// Get current metrics snapshot
    pub fn get_metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.get_stats()
    }
}
