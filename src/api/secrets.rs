use reqwest::Client;
use serde::Deserialize;

use crate::error::{Result, TradeError};

// ============== Response Types ==============

/// One entry in a workspace's secret listing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SecretEntry {
    pub id: u64,
    pub name: String,
}

// ============== Pure Lookup Helpers ==============

/// Exact-name lookup in a secret listing.
///
/// On a miss the error carries every available name, so a caller that
/// guessed the wrong name can correct itself without another round trip.
pub fn find_secret<'a>(name: &str, entries: &'a [SecretEntry]) -> Result<&'a SecretEntry> {
    entries
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| TradeError::SecretNotFound {
            name: name.to_string(),
            available: entries.iter().map(|entry| entry.name.clone()).collect(),
        })
}

/// Strips one layer of enclosing quote characters, if the value has a
/// matching pair. The store's value channel is plaintext but some writers
/// wrap values in quotes; only the outermost pair is transport noise.
pub fn strip_quotes(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

// ============== Implementation ==============

/// HTTP client for the workspace secret store.
///
/// Two endpoints: list the secrets visible to a workspace, then fetch one
/// value by id. Values come back as a plaintext body.
#[derive(Clone)]
pub struct SecretsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SecretsClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Endpoint: GET /workspaces/{id}/secrets
    pub async fn list_secrets(&self, workspace_id: u64) -> Result<Vec<SecretEntry>> {
        let url = format!("{}/workspaces/{}/secrets", self.base_url, workspace_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TradeError::SecretStoreUnavailable(format!(
                "secret listing returned {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    /// Endpoint: GET /workspaces/{id}/secrets/{secret_id}/value
    pub async fn secret_value(&self, workspace_id: u64, secret_id: u64) -> Result<String> {
        let url = format!(
            "{}/workspaces/{}/secrets/{}/value",
            self.base_url, workspace_id, secret_id
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TradeError::SecretStoreUnavailable(format!(
                "secret value fetch returned {}",
                response.status()
            )));
        }

        let raw = response.text().await?;
        Ok(strip_quotes(&raw).to_string())
    }
}

/// Per-invocation resolver over [`SecretsClient`].
///
/// The workspace listing is fetched once and reused, so resolving both the
/// private key and a vault address costs one list call plus one value fetch
/// each. Nothing here outlives the request.
pub struct SecretResolver<'a> {
    client: &'a SecretsClient,
    workspace_id: u64,
    listing: Option<Vec<SecretEntry>>,
}

impl<'a> SecretResolver<'a> {
    pub fn new(client: &'a SecretsClient, workspace_id: u64) -> Self {
        Self {
            client,
            workspace_id,
            listing: None,
        }
    }

    pub async fn resolve(&mut self, name: &str) -> Result<String> {
        if self.listing.is_none() {
            self.listing = Some(self.client.list_secrets(self.workspace_id).await?);
        }
        let entries = self.listing.as_deref().unwrap_or(&[]);
        let entry = find_secret(name, entries)?;
        self.client.secret_value(self.workspace_id, entry.id).await
    }
}
