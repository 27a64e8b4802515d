//! HTTP client for the external ML prediction service.
//!
//! One attempt per request, explicit timeout, no retry. Dropping the future
//! (caller disconnect) aborts the in-flight request; nothing is shared
//! between calls, so an abandoned call cannot affect a later one.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::errors::PredictError;
use crate::models::prediction::{ManualServiceRequest, PredictionResult, SolarServiceRequest};

#[derive(Debug, Clone)]
pub struct MlServiceClient {
    client: Client,
    base_url: String,
}

impl MlServiceClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }

    pub async fn predict_solar(
        &self,
        request: &SolarServiceRequest,
    ) -> Result<PredictionResult, PredictError> {
        self.post("/predict/solar", request).await
    }

    pub async fn predict_manual(
        &self,
        request: &ManualServiceRequest,
    ) -> Result<PredictionResult, PredictError> {
        self.post("/predict/manual", request).await
    }

    async fn post<T: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<PredictionResult, PredictError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "calling external ML service");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| PredictError::ExternalService(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::ExternalService(format!(
                "{endpoint} returned status {status}"
            )));
        }

        let mut result: PredictionResult = response
            .json()
            .await
            .map_err(|e| PredictError::ExternalService(format!("malformed response body: {e}")))?;
        result.used_fallback = false;
        Ok(result)
    }
}
