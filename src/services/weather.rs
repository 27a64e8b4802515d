//! Synthetic weather conditions from location, season and bounded randomness.
//!
//! One canonical formula set. The temperature model is latitude-driven
//! (cooler away from |lat| = 30 than inside it) with a seasonal sine peaking
//! around day 171 (phase offset 80) and ±2.5 °C of noise.

use std::f64::consts::PI;

use rand::Rng;

use crate::models::prediction::{GeoCoordinate, TemporalContext, WeatherData};

pub const SEASONAL_AMPLITUDE_C: f64 = 10.0;
pub const TEMPERATURE_NOISE_C: f64 = 2.5;

pub fn base_temperature_c(latitude_deg: f64) -> f64 {
    20.0 + (latitude_deg.abs() - 30.0) * -0.5
}

pub fn seasonal_delta_c(day_of_year: u32) -> f64 {
    SEASONAL_AMPLITUDE_C * (2.0 * PI * (day_of_year.clamp(1, 366) as f64 - 80.0) / 365.0).sin()
}

pub fn synthesize<R: Rng>(
    coordinate: GeoCoordinate,
    temporal: TemporalContext,
    solar_radiation_wm2: f64,
    rng: &mut R,
) -> WeatherData {
    let temperature_c = base_temperature_c(coordinate.latitude)
        + seasonal_delta_c(temporal.day_of_year)
        + rng.gen_range(-TEMPERATURE_NOISE_C..TEMPERATURE_NOISE_C);

    WeatherData {
        solar_radiation_wm2: round1(solar_radiation_wm2),
        temperature_c: round1(temperature_c),
        humidity_pct: round1(rng.gen_range(30.0..70.0)),
        wind_speed_ms: round1(rng.gen_range(2.0..8.0)),
        cloud_cover_pct: round1(rng.gen_range(0.0..30.0)),
        pressure_hpa: round1(1013.0 + rng.gen_range(-10.0..10.0)),
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
