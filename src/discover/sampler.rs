//! Random available handle sampler

use std::collections::VecDeque;
use std::time::Instant;

use chrono::Utc;
use futures::future::join_all;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::pool::CandidatePool;
use crate::error::{LensFinderError, Result};
use crate::handle::HandleChecker;
use crate::types::{AvailabilityStatus, Sample, SampleConfig};

/// Draws random candidates from a pool until enough of them are available.
///
/// Draws are bounded by `max_attempts`; a run that hits the bound returns
/// [`LensFinderError::SampleExhausted`] carrying the handles found so far.
pub struct HandleSampler {
    pool: CandidatePool,
    checker: HandleChecker,
    config: SampleConfig,
    rng: Mutex<StdRng>,
    /// Handles confirmed available after a previous run was already full.
    /// Drawn (and re-checked) before any random draw.
    carried: Mutex<VecDeque<String>>,
}

impl HandleSampler {
    /// Create a sampler, validating the configuration
    pub fn new(pool: CandidatePool, checker: HandleChecker, config: SampleConfig) -> Result<Self> {
        if config.target == 0 {
            return Err(LensFinderError::config("Sample size must be at least 1"));
        }
        if config.max_attempts < config.target {
            return Err(LensFinderError::config(format!(
                "Max attempts ({}) must be at least the sample size ({})",
                config.max_attempts, config.target
            )));
        }
        if config.concurrency == 0 {
            return Err(LensFinderError::config("Sample concurrency must be at least 1"));
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            pool,
            checker,
            config,
            rng: Mutex::new(rng),
            carried: Mutex::new(VecDeque::new()),
        })
    }

    /// Get sampler configuration
    pub fn config(&self) -> &SampleConfig {
        &self.config
    }

    /// Get the candidate pool
    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    /// Get the checker used for lookups
    pub fn checker(&self) -> &HandleChecker {
        &self.checker
    }

    /// Collect a sample of the configured size
    pub async fn sample(&self) -> Result<Sample> {
        self.sample_n(self.config.target).await
    }

    /// Collect a sample of `target` available handles, in draw order
    pub async fn sample_n(&self, target: usize) -> Result<Sample> {
        if target == 0 {
            return Err(LensFinderError::validation("Sample size must be at least 1"));
        }

        let start_time = Instant::now();
        let max_attempts = self.config.max_attempts;
        let mut handles: Vec<String> = Vec::with_capacity(target);
        let mut attempts = 0usize;
        let mut failed_queries = 0usize;

        while handles.len() < target && attempts < max_attempts {
            let batch_size = self.config.concurrency.min(max_attempts - attempts);
            let mut batch: Vec<String> = Vec::with_capacity(batch_size);

            for _ in 0..batch_size {
                let candidate = self.next_candidate();
                attempts += 1;

                if !self.config.allow_duplicates
                    && (handles.contains(&candidate) || batch.contains(&candidate))
                {
                    continue;
                }
                batch.push(candidate);
            }

            let results = join_all(batch.iter().map(|c| self.checker.check_handle(c))).await;

            for result in results {
                match result.status {
                    AvailabilityStatus::Available if handles.len() < target => {
                        handles.push(result.handle);
                    }
                    AvailabilityStatus::Available => {
                        self.carried.lock().push_back(result.handle);
                    }
                    AvailabilityStatus::Taken => {}
                    AvailabilityStatus::Failed => failed_queries += 1,
                }
            }
        }

        let duration = start_time.elapsed();

        if handles.len() < target {
            tracing::warn!(
                target = %target,
                found = %handles.len(),
                attempts = %attempts,
                failed_queries = %failed_queries,
                duration_ms = %duration.as_millis(),
                "Sampling stopped at the attempt limit"
            );
            return Err(LensFinderError::sample_exhausted(
                target,
                handles,
                attempts,
                failed_queries,
            ));
        }

        tracing::info!(
            target = %target,
            attempts = %attempts,
            failed_queries = %failed_queries,
            duration_ms = %duration.as_millis(),
            "Sample completed"
        );

        Ok(Sample {
            handles,
            target,
            attempts,
            failed_queries,
            generated_at: Utc::now(),
        })
    }

    /// Number of handles carried over for the next run
    pub fn carried_len(&self) -> usize {
        self.carried.lock().len()
    }

    fn next_candidate(&self) -> String {
        if let Some(handle) = self.carried.lock().pop_front() {
            return handle;
        }

        let index = self.rng.lock().gen_range(0..self.pool.len());
        // Index is always in range; the pool is never empty
        self.pool.get(index).unwrap_or_default().to_string()
    }
}
