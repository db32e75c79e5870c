use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client,
};
use tracing::{debug, info};

use super::PredictionStore;
use crate::{config::AppConfig, error::StoreError, record::SubmissionRecord};

/// Writes predictions through the Supabase REST interface.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    anon_key: String,
    table: String,
}

impl SupabaseStore {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            anon_key: anon_key.into(),
            table: table.into(),
        }
    }

    pub fn from_config(client: Client, config: &AppConfig) -> Self {
        Self::new(
            client,
            config.supabase_url.clone(),
            config.supabase_anon_key.clone(),
            config.predictions_table.clone(),
        )
    }

    /// `{base}/rest/v1/{table}`
    pub fn endpoint(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            self.table
        )
    }

    fn headers(&self) -> Result<HeaderMap, StoreError> {
        let mut headers = HeaderMap::new();
        headers.insert("apikey", HeaderValue::from_str(&self.anon_key)?);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.anon_key))?,
        );
        headers.insert("prefer", HeaderValue::from_static("return=minimal"));
        Ok(headers)
    }
}

impl PredictionStore for SupabaseStore {
    async fn insert(&self, record: &SubmissionRecord) -> Result<(), StoreError> {
        let url = self.endpoint();
        debug!(%url, "Inserting prediction");
        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(&[record])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(table = %self.table, "Prediction stored");
        Ok(())
    }
}
