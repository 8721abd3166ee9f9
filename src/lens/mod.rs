//! Lens API access shared across modules.
//!
//! Endpoint and suffix knowledge lives in `registry` so single checks and
//! random sampling always agree on which network they talk to.

pub mod client;
pub mod registry;

pub use client::LensApiClient;
