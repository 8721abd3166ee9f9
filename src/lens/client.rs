//! GraphQL client for the Lens API

use super::registry::api_url;
use crate::error::{LensFinderError, Result};
use crate::handle::{HandleOracle, ProfileLookup};
use crate::types::CheckConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Profile lookup by handle
pub const PROFILE_QUERY: &str = r#"query Profile($request: SingleProfileQueryRequest!) {
  profile(request: $request) {
    id
    handle
  }
}"#;

/// Lens API client answering "does a profile exist for this handle"
pub struct LensApiClient {
    client: Client,
    url: String,
}

impl LensApiClient {
    /// Create a client for the configured network or endpoint override
    pub fn new(config: &CheckConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(config.timeout)
            .user_agent(concat!("lens-finder/", env!("CARGO_PKG_VERSION")))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create HTTP client: {}. Using default.", e);
                Client::new()
            });

        let url = config
            .api_url
            .clone()
            .unwrap_or_else(|| api_url(config.network).to_string());

        Self { client, url }
    }

    /// Get the endpoint this client queries
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn query_profile(&self, full_handle: &str) -> Result<ProfileLookup> {
        let body = json!({
            "query": PROFILE_QUERY,
            "variables": { "request": { "handle": full_handle } },
        });

        let response = self.client.post(&self.url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LensFinderError::network(
                format!("Lens API request failed with status {}", status),
                Some(status.as_u16()),
                Some(self.url.clone()),
            ));
        }

        let text = response.text().await?;

        parse_profile_response(full_handle, &text)
    }
}

#[async_trait]
impl HandleOracle for LensApiClient {
    async fn lookup_profile(&self, full_handle: &str) -> Result<ProfileLookup> {
        self.query_profile(full_handle).await
    }

    fn name(&self) -> &'static str {
        "lens-api"
    }
}

/// Interpret a GraphQL response body for the profile query
pub fn parse_profile_response(full_handle: &str, body: &str) -> Result<ProfileLookup> {
    let response: GraphqlResponse = serde_json::from_str(body)
        .map_err(|e| LensFinderError::parse(e.to_string(), Some(body.to_string())))?;

    if !response.errors.is_empty() {
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(LensFinderError::oracle(full_handle, messages.join("; ")));
    }

    let data = response
        .data
        .ok_or_else(|| LensFinderError::oracle(full_handle, "response carried no data"))?;

    Ok(match data.profile {
        None => ProfileLookup::NotFound,
        Some(profile) => ProfileLookup::Found { id: profile.id },
    })
}

/// GraphQL response structures
#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<ProfileData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct ProfileData {
    profile: Option<Profile>,
}

#[derive(Debug, Deserialize)]
struct Profile {
    id: String,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}
