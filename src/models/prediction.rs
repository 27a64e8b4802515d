use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::PredictError;

// ─── Core value objects ──────────────────────────────────────────────────────

/// Validated geographic position. Constructed once per request; the range
/// checks live here so no out-of-range coordinate can reach the formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, PredictError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(PredictError::Validation(
                "Latitude must be between -90 and 90".to_string(),
            ));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(PredictError::Validation(
                "Longitude must be between -180 and 180".to_string(),
            ));
        }
        Ok(Self { latitude, longitude })
    }
}

/// Point in the solar calendar used by the geometry formulas.
/// Hour angle 0 means solar noon.
#[derive(Debug, Clone, Copy)]
pub struct TemporalContext {
    pub day_of_year: u32,
    pub hour_angle_deg: f64,
}

impl TemporalContext {
    pub fn solar_noon(day_of_year: u32) -> Self {
        Self {
            day_of_year: day_of_year.clamp(1, 366),
            hour_angle_deg: 0.0,
        }
    }
}

/// Sun position for a coordinate and calendar day. Elevation may be
/// negative (night); consumers clamp where they need to.
#[derive(Debug, Clone, Copy)]
pub struct SolarGeometry {
    pub declination_deg: f64,
    pub elevation_deg: f64,
}

// ─── Prediction result (uniform across external and fallback paths) ─────────

/// Synthetic ambient conditions, each rounded to one decimal place.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeatherData {
    pub solar_radiation_wm2: f64,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_ms: f64,
    pub cloud_cover_pct: f64,
    pub pressure_hpa: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Analysis {
    pub location: String,
    pub solar_elevation_deg: f64,
    pub estimated_irradiance_wm2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub category: String,
    pub priority: Priority,
    pub recommendation: String,
    pub potential_improvement: String,
}

/// Uniform prediction shape. External 2xx bodies deserialize into this same
/// struct, so downstream consumers never branch on which path produced it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PredictionResult {
    /// Estimated power output in kW, never negative
    pub prediction: f64,
    /// Heuristic confidence percentage
    pub confidence: f64,
    /// Model label, e.g. "Fallback Solar Model"
    pub model: String,
    pub processing_time: String,
    pub features_analyzed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_data: Option<WeatherData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub used_fallback: bool,
}

// ─── Request wire types ──────────────────────────────────────────────────────

/// Raw solar prediction request. Coordinates are accepted as JSON numbers or
/// numeric strings; everything is optional here so validation can answer with
/// the documented messages instead of a generic deserialization failure.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SolarPredictRequest {
    #[schema(value_type = Object)]
    pub latitude: Option<serde_json::Value>,
    #[schema(value_type = Object)]
    pub longitude: Option<serde_json::Value>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub temporal: Option<String>,
    pub include_analysis: Option<bool>,
}

/// Manual prediction request: four features
/// (irradiation, ambient temp, module temp, HHMM time value).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ManualPredictRequest {
    #[schema(value_type = Vec<Object>)]
    pub features: Option<Vec<serde_json::Value>>,
    pub model: Option<String>,
}

// ─── External ML service contracts ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SolarServiceRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub start_date: String,
    pub end_date: String,
    pub temporal: String,
    pub include_analysis: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManualServiceRequest {
    pub irradiation: f64,
    pub ambient_temperature: f64,
    pub module_temperature: f64,
    pub hour: u32,
    pub day: u32,
    pub month: u32,
    pub weekday: u32,
    pub model_name: String,
}

// ─── Response envelope ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PredictionEnvelope {
    pub success: bool,
    pub data: PredictionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
