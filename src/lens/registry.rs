//! Central Lens network registry.
//!
//! A small static mapping: each network has one GraphQL endpoint and one
//! handle suffix.

use crate::types::LensNetwork;

/// Get the GraphQL endpoint for a network
pub fn api_url(network: LensNetwork) -> &'static str {
    match network {
        LensNetwork::Mainnet => "https://api.lens.dev",
        LensNetwork::Testnet => "https://api-mumbai.lens.dev",
    }
}

/// Get the handle suffix (without the dot) for a network
pub fn handle_suffix(network: LensNetwork) -> &'static str {
    match network {
        LensNetwork::Mainnet => "lens",
        LensNetwork::Testnet => "test",
    }
}
