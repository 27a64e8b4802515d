use chrono::NaiveDate;

use crate::errors::PredictError;
use crate::models::prediction::{GeoCoordinate, SolarPredictRequest};

/// A solar prediction request after validation. All downstream stages work
/// from these values; raw request fields never reach the formulas.
#[derive(Debug, Clone)]
pub struct ValidatedSolarRequest {
    pub coordinate: GeoCoordinate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub temporal: String,
    pub include_analysis: bool,
}

pub fn validate_solar_request(
    req: &SolarPredictRequest,
) -> Result<ValidatedSolarRequest, PredictError> {
    let (Some(latitude), Some(longitude), Some(start_date), Some(end_date)) = (
        req.latitude.as_ref(),
        req.longitude.as_ref(),
        req.start_date.as_deref(),
        req.end_date.as_deref(),
    ) else {
        return Err(PredictError::Validation(
            "Missing required fields: latitude, longitude, start_date, end_date".to_string(),
        ));
    };

    let coordinate = GeoCoordinate::new(parse_coordinate(latitude)?, parse_coordinate(longitude)?)?;

    Ok(ValidatedSolarRequest {
        coordinate,
        start_date: parse_date(start_date)?,
        end_date: parse_date(end_date)?,
        temporal: req.temporal.clone().unwrap_or_else(|| "daily".to_string()),
        include_analysis: req.include_analysis.unwrap_or(true),
    })
}

/// Coordinates arrive either as JSON numbers or as numeric strings
/// (the form fields in the demo UI submit strings).
fn parse_coordinate(value: &serde_json::Value) -> Result<f64, PredictError> {
    match value {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| PredictError::Validation("Invalid coordinate value".to_string())),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| PredictError::Validation("Invalid coordinate value".to_string())),
        _ => Err(PredictError::Validation(
            "Invalid coordinate value".to_string(),
        )),
    }
}

/// Dates must be exactly 8 digits (YYYYMMDD) and name a real calendar day.
pub fn parse_date(raw: &str) -> Result<NaiveDate, PredictError> {
    let date_error = || PredictError::Validation("Date format must be YYYYMMDD".to_string());
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(date_error());
    }
    NaiveDate::parse_from_str(raw, "%Y%m%d").map_err(|_| date_error())
}

/// Parse the manual feature array. A value that does not read as a number is
/// a computation-level failure: validation let it through as far as the
/// numeric stage, so the caller sees the offending value.
pub fn parse_features(raw: &[serde_json::Value]) -> Result<Vec<f64>, PredictError> {
    raw.iter()
        .map(|value| {
            let parsed = match value {
                serde_json::Value::Number(n) => n.as_f64(),
                serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            parsed
                .filter(|n| n.is_finite())
                .ok_or_else(|| PredictError::Computation(format!("Invalid feature value: {value}")))
        })
        .collect()
}
