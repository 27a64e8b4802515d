//! Prediction orchestrator.
//!
//! Per request: one call to the external ML service within a bounded
//! timeout. A 2xx with a well-formed body passes through unchanged; any
//! failure (transport error, non-2xx, undecodable body) runs the local
//! fallback chain instead of surfacing an error. Both paths return the same
//! result shape, tagged with `used_fallback`.

use chrono::{Datelike, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::prediction::{
    ManualServiceRequest, PredictionResult, SolarServiceRequest, TemporalContext,
};
use crate::services::fallback;
use crate::services::ml_client::MlServiceClient;
use crate::services::validation::ValidatedSolarRequest;

#[derive(Debug)]
pub struct PredictionService {
    ml: MlServiceClient,
    rng_seed: Option<u64>,
}

impl PredictionService {
    pub fn new(config: &Config) -> Self {
        Self {
            ml: MlServiceClient::new(
                config.ml_service.base_url.clone(),
                std::time::Duration::from_secs(config.ml_service.timeout_s),
            ),
            rng_seed: config.fallback.rng_seed,
        }
    }

    /// A fresh randomness source per request: no state is shared across
    /// invocations, so concurrent callers cannot cross-contaminate.
    fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub async fn predict_solar(&self, request: ValidatedSolarRequest) -> PredictionResult {
        let wire = SolarServiceRequest {
            latitude: request.coordinate.latitude,
            longitude: request.coordinate.longitude,
            start_date: request.start_date.format("%Y%m%d").to_string(),
            end_date: request.end_date.format("%Y%m%d").to_string(),
            temporal: request.temporal.clone(),
            include_analysis: request.include_analysis,
        };

        match self.ml.predict_solar(&wire).await {
            Ok(result) => {
                info!(model = %result.model, "external solar prediction succeeded");
                result
            }
            Err(error) => {
                warn!(%error, "external solar prediction failed, computing fallback");
                let temporal = TemporalContext::solar_noon(request.start_date.ordinal());
                fallback::solar_estimate(request.coordinate, temporal, &mut self.rng())
            }
        }
    }

    pub async fn predict_manual(&self, features: &[f64], model_key: &str) -> PredictionResult {
        let now = Utc::now();
        let wire = ManualServiceRequest {
            irradiation: features[0],
            ambient_temperature: features[1],
            module_temperature: features[2],
            // Fourth feature is an HHMM time value; the service wants the hour.
            hour: (features[3] / 100.0).floor().max(0.0) as u32,
            day: now.day(),
            month: now.month(),
            weekday: now.weekday().num_days_from_sunday(),
            model_name: model_key.to_string(),
        };

        match self.ml.predict_manual(&wire).await {
            Ok(result) => {
                info!(model = %result.model, "external manual prediction succeeded");
                result
            }
            Err(error) => {
                warn!(%error, "external manual prediction failed, computing fallback");
                fallback::manual_estimate(features, model_key, &mut self.rng())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FallbackConfig, MlServiceConfig, ServerConfig};
    use crate::models::prediction::GeoCoordinate;
    use crate::services::validation::ValidatedSolarRequest;
    use chrono::NaiveDate;

    fn unreachable_service(seed: Option<u64>) -> PredictionService {
        PredictionService::new(&Config {
            server: ServerConfig { port: 0 },
            ml_service: MlServiceConfig {
                // Nothing listens here, so every attempt fails fast.
                base_url: "http://127.0.0.1:1".to_string(),
                timeout_s: 1,
            },
            fallback: FallbackConfig { rng_seed: seed },
        })
    }

    fn phoenix_week() -> ValidatedSolarRequest {
        ValidatedSolarRequest {
            coordinate: GeoCoordinate::new(33.4484, -112.074).unwrap(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(),
            temporal: "daily".to_string(),
            include_analysis: true,
        }
    }

    #[tokio::test]
    async fn unreachable_service_resolves_to_fallback() {
        let service = unreachable_service(None);
        let result = service.predict_solar(phoenix_week()).await;
        assert!(result.used_fallback);
        assert!(result.prediction >= 0.0);
        assert!((75.0..=90.0).contains(&result.confidence));
        assert!(!result.recommendations.is_empty());
    }

    #[tokio::test]
    async fn seeded_service_is_reproducible() {
        let service = unreachable_service(Some(42));
        let a = service.predict_solar(phoenix_week()).await;
        let b = service.predict_solar(phoenix_week()).await;
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[tokio::test]
    async fn manual_fallback_reports_feature_count() {
        let service = unreachable_service(Some(1));
        let result = service
            .predict_manual(&[81.5, 25.0, 40.0, 1130.0], "svm")
            .await;
        assert!(result.used_fallback);
        assert_eq!(result.features_analyzed, 4);
        assert_eq!(result.model, "Support Vector Machine");
    }
}
