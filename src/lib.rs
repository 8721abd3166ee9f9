//! Lens Finder - Lens handle availability checking
//!
//! Check whether a Lens handle is free to claim, and keep a small rotating
//! sample of random handles that are available right now.

pub mod config;
pub mod discover;
pub mod error;
pub mod handle;
pub mod lens;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use config::FinderConfig;
pub use error::{LensFinderError, Result};
pub use types::{
    AvailabilityStatus, CheckConfig, HandleResult, LensNetwork, MetricsSnapshot,
    PerformanceMetrics, Sample, SampleConfig,
};

// Re-export main functionality
pub use discover::{CandidatePool, HandleSampler, PublishedSample, SampleBoard};
pub use handle::{HandleChecker, HandleOracle, HandleValidator, ProfileLookup};
pub use lens::LensApiClient;
pub use session::{SearchState, SubmitOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
