//! Published sample of random available handles

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;
use tokio::sync::Mutex;

use super::sampler::HandleSampler;
use crate::error::{LensFinderError, Result};
use crate::types::Sample;

/// A sample together with the refresh that produced it
#[derive(Debug, Clone)]
pub struct PublishedSample {
    /// Refresh sequence number, starting at 1
    pub generation: u64,
    pub sample: Sample,
}

/// Holds the currently shown sample and serializes refreshes.
///
/// Only one refresh samples at a time; later callers queue behind it, so the
/// published sample always comes from the last refresh to finish. A refresh
/// that exhausts its attempts leaves the previous sample in place and records
/// the error.
pub struct SampleBoard {
    sampler: HandleSampler,
    generation: Mutex<u64>,
    published: RwLock<Option<PublishedSample>>,
    last_error: RwLock<Option<LensFinderError>>,
    in_flight: AtomicUsize,
}

impl SampleBoard {
    pub fn new(sampler: HandleSampler) -> Self {
        Self {
            sampler,
            generation: Mutex::new(0),
            published: RwLock::new(None),
            last_error: RwLock::new(None),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Draw a new sample and publish it once complete
    pub async fn refresh(&self) -> Result<PublishedSample> {
        let _loading = InFlight::enter(&self.in_flight);
        let mut generation = self.generation.lock().await;
        *generation += 1;
        let current = *generation;

        tracing::debug!(generation = current, "Refreshing random handles");

        match self.sampler.sample().await {
            Ok(sample) => {
                let published = PublishedSample {
                    generation: current,
                    sample,
                };
                *self.published.write() = Some(published.clone());
                *self.last_error.write() = None;
                Ok(published)
            }
            Err(e) => {
                *self.last_error.write() = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Get the sample currently shown
    pub fn current(&self) -> Option<PublishedSample> {
        self.published.read().clone()
    }

    /// Get the error from the most recent refresh, if it failed
    pub fn last_error(&self) -> Option<LensFinderError> {
        self.last_error.read().clone()
    }

    /// Whether any refresh is running or queued
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn sampler(&self) -> &HandleSampler {
        &self.sampler
    }
}

/// Counts a refresh as in flight until dropped, including on cancellation
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
