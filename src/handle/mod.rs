//! Lens handle validation and availability checking

pub mod checker;
pub mod validator;

// Re-export main functionality
pub use checker::HandleChecker;
pub use validator::{HandleValidator, InputCheck};

use crate::error::Result;
use async_trait::async_trait;

/// Shortest handle the naming service accepts, suffix excluded
pub const MIN_HANDLE_LENGTH: usize = 5;

/// Longest handle the naming service accepts, suffix excluded
pub const MAX_HANDLE_LENGTH: usize = 31;

/// What the naming service knows about a full handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileLookup {
    /// No profile is registered under the handle
    NotFound,
    /// A profile owns the handle
    Found { id: String },
}

/// Read-only query interface to the naming service
#[async_trait]
pub trait HandleOracle: Send + Sync {
    /// Look up the profile registered for a full handle (e.g. `vitalik.lens`)
    async fn lookup_profile(&self, full_handle: &str) -> Result<ProfileLookup>;

    /// Get the oracle name, used in logs
    fn name(&self) -> &'static str;
}
