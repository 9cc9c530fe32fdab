//! Fetch a provider's model catalog over HTTPS.

use std::time::Duration;

use log::{debug, info, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;

use crate::core::credential::Credential;
use crate::core::providers::{AuthMode, ProviderConfig};

use super::error::FetchError;
use super::normalize;
use super::record::ModelRecord;

/// Transport timeout for the listing call. Failures are not retried.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Attach the credential the way the provider expects it.
fn authorize(request: RequestBuilder, auth: &AuthMode, credential: &Credential) -> RequestBuilder {
    match auth {
        AuthMode::BearerHeader => {
            request.header(AUTHORIZATION, format!("Bearer {}", credential.expose()))
        }
        AuthMode::QueryParam { name } => request.query(&[(*name, credential.expose())]),
    }
}

/// List the provider's models, newest first.
///
/// Issues exactly one GET. Non-200 responses come back as [`FetchError::HttpStatus`]
/// with the raw body; a 200 body without a `data` / `models` list yields an empty vec.
pub async fn fetch_models(
    provider: &ProviderConfig,
    credential: &Credential,
) -> Result<Vec<ModelRecord>, FetchError> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    fetch_with_client(&client, provider, credential).await
}

pub(super) async fn fetch_with_client(
    client: &Client,
    provider: &ProviderConfig,
    credential: &Credential,
) -> Result<Vec<ModelRecord>, FetchError> {
    info!("Fetching models from {}...", provider.name);

    let request = authorize(
        client.get(provider.endpoint.as_ref()),
        &provider.auth,
        credential,
    );
    let response = request.send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("{} error body unreadable: {}", provider.name, e.without_url());
                String::new()
            }
        };
        warn!("{} API error: {}", provider.name, status);
        return Err(FetchError::HttpStatus {
            code: status.as_u16(),
            body,
        });
    }

    let body = response.text().await?;
    debug!("{} response: {} bytes", provider.name, body.len());
    let payload: Value = serde_json::from_str(&body)?;

    let records = normalize::normalize_response(&payload, &provider.name);
    info!("{} returned {} models", provider.name, records.len());
    Ok(records)
}
