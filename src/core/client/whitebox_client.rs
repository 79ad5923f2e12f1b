use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error};

use super::monitoring_backend_trait::MonitoringBackend;
use super::whitebox_dto::{DriftingMetricDto, PerformanceMetricDto};
use crate::core::config::dashboard_config::DashboardConfig;

const API_KEY_HEADER: &str = "api-key";

/// Failure talking to the monitoring backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("monitoring backend returned {status}: {body} (url={url})")]
    Status {
        status: StatusCode,
        body: String,
        url: String,
    },

    #[error("failed to call monitoring backend (url={url}): {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode monitoring backend response (url={url}): {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// HTTP client for the Whitebox monitoring API.
pub struct WhiteboxClient {
    client: Client,
    host: String,
    api_key: Option<String>,
}

impl WhiteboxClient {
    pub fn new(client: Client, host: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            host: host.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn from_config(cfg: &DashboardConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self::new(client, cfg.whitebox_host.clone(), cfg.whitebox_api_key.clone()))
    }

    pub fn metrics_url(&self, resource: &str, model_id: &str) -> String {
        format!(
            "{}/v1/{}?model_id={}",
            self.host,
            resource,
            urlencoding::encode(model_id)
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, BackendError> {
        debug!(%url, "Fetching metrics from monitoring backend");

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let resp = request.send().await.map_err(|source| BackendError::Transport {
            url: url.clone(),
            source,
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            error!(%status, %url, "Monitoring backend request failed");
            return Err(BackendError::Status { status, body, url });
        }

        resp.json::<T>()
            .await
            .map_err(|source| BackendError::Decode { url, source })
    }
}

#[async_trait]
impl MonitoringBackend for WhiteboxClient {
    async fn get_drifting_metrics(&self, model_id: &str) -> Result<Vec<DriftingMetricDto>> {
        let url = self.metrics_url("drifting-metrics", model_id);
        Ok(self.get_json(url).await?)
    }

    async fn get_performance_metrics(&self, model_id: &str) -> Result<Vec<PerformanceMetricDto>> {
        let url = self.metrics_url("performance-metrics", model_id);
        // A model without any report yet comes back as `null` on older backends.
        let reports: Option<Vec<PerformanceMetricDto>> = self.get_json(url).await?;
        Ok(reports.unwrap_or_default())
    }
}
