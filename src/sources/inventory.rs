//! Generic describe-reservations fetcher, one instance per descriptor row.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::ReservationSource;
use crate::config::Config;
use crate::error::FetchError;
use crate::reservation::RawReservation;
use crate::resource::{KindSpec, ResourceKind};

/// Calls the inventory API's describe endpoint for one resource kind and
/// pulls the kind-specific list field out of the response body.
pub struct InventorySource {
    client: Client,
    base_url: String,
    token: Option<String>,
    spec: &'static KindSpec,
}

impl InventorySource {
    pub fn new(client: Client, config: &Config, spec: &'static KindSpec) -> Self {
        Self {
            client,
            base_url: config.inventory_api_url.trim_end_matches('/').to_string(),
            token: config.inventory_api_token.clone(),
            spec,
        }
    }
}

#[async_trait]
impl ReservationSource for InventorySource {
    fn kind(&self) -> ResourceKind {
        self.spec.kind
    }

    async fn fetch(&self) -> Result<Vec<RawReservation>, FetchError> {
        let url = format!("{}/{}", self.base_url, self.spec.describe_path);
        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|source| FetchError::Transport {
            kind: self.spec.label,
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                kind: self.spec.label,
                status,
            });
        }

        let body: Value = response.json().await.map_err(|source| FetchError::Decode {
            kind: self.spec.label,
            source,
        })?;

        // Absent or empty list field means an empty inventory.
        let records: Vec<RawReservation> = body
            .get(self.spec.list_field)
            .and_then(Value::as_array)
            .map(|list| list.iter().cloned().map(RawReservation::new).collect())
            .unwrap_or_default();

        debug!(kind = self.spec.label, count = records.len(), "fetched reservations");
        Ok(records)
    }
}
