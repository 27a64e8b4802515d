use axum::{Json, extract::State, response::IntoResponse};

use crate::errors::PredictError;
use crate::models::prediction::{
    ManualPredictRequest, PredictionEnvelope, SolarPredictRequest,
};
use crate::services::validation;
use crate::shared_state::AppState;

const FALLBACK_WARNING: &str = "Using fallback prediction - ML service not available";

/// POST /api/solar-predict
/// Solar power prediction for a coordinate and date range
///
/// Forwards the request to the external ML service; if that service is
/// unreachable the response carries a locally computed estimate with
/// `used_fallback: true` and a warning.
#[utoipa::path(
    post,
    path = "/api/solar-predict",
    request_body = SolarPredictRequest,
    responses(
        (status = 200, description = "Prediction (external or fallback)", body = PredictionEnvelope),
        (status = 400, description = "Invalid coordinates or dates")
    )
)]
pub async fn solar_predict(
    State(state): State<AppState>,
    Json(request): Json<SolarPredictRequest>,
) -> Result<Json<PredictionEnvelope>, PredictError> {
    let validated = validation::validate_solar_request(&request)?;
    let data = state.service.predict_solar(validated).await;
    let warning = data.used_fallback.then(|| FALLBACK_WARNING.to_string());
    Ok(Json(PredictionEnvelope {
        success: true,
        data,
        warning,
    }))
}

/// POST /api/predict
/// Manual prediction from a four-feature array
///
/// Features: irradiation, ambient temperature, module temperature and an
/// HHMM time value. Optional `model` selects the ML model to ask for.
#[utoipa::path(
    post,
    path = "/api/predict",
    request_body = ManualPredictRequest,
    responses(
        (status = 200, description = "Prediction (external or fallback)", body = PredictionEnvelope),
        (status = 400, description = "Feature array missing or not of length 4"),
        (status = 500, description = "Feature value failed to parse as a number")
    )
)]
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<ManualPredictRequest>,
) -> Result<Json<PredictionEnvelope>, PredictError> {
    let raw = request.features.unwrap_or_default();
    if raw.len() != 4 {
        return Err(PredictError::Validation(
            "Invalid features. Expected array of 4 numbers.".to_string(),
        ));
    }
    let features = validation::parse_features(&raw)?;
    let model_key = request.model.as_deref().unwrap_or("neural_network");

    let data = state.service.predict_manual(&features, model_key).await;
    let warning = data.used_fallback.then(|| FALLBACK_WARNING.to_string());
    Ok(Json(PredictionEnvelope {
        success: true,
        data,
        warning,
    }))
}

/// GET /api/solar-predict
/// Usage notes for the solar prediction endpoint
#[utoipa::path(
    get,
    path = "/api/solar-predict",
    responses((status = 200, description = "Endpoint description"))
)]
pub async fn solar_predict_info() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Solar Power Prediction API",
        "endpoints": {
            "POST": "/api/solar-predict - Solar power prediction with weather data",
        },
        "required_fields": ["latitude", "longitude", "start_date", "end_date"],
        "optional_fields": ["temporal", "include_analysis"],
        "examples": {
            "solar_prediction": {
                "latitude": 33.4484,
                "longitude": -112.074,
                "start_date": "20250101",
                "end_date": "20250107",
                "temporal": "daily",
                "include_analysis": true
            }
        }
    }))
}

/// GET /api/predict
/// Usage notes for the manual prediction endpoint
#[utoipa::path(
    get,
    path = "/api/predict",
    responses((status = 200, description = "Endpoint description"))
)]
pub async fn predict_info() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "AI Prediction API",
        "endpoints": {
            "POST": "/api/predict - Make predictions with ML models",
        },
        "models": ["neural_network", "random_forest", "svm"],
    }))
}
