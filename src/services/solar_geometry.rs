//! Simplified solar position model: declination from day of year, elevation
//! from latitude, declination and hour angle. Uses the fixed 284/365
//! constants of the Cooper formula — deliberately not leap-year aware.

use std::f64::consts::PI;

use crate::models::prediction::{SolarGeometry, TemporalContext};

const DEG: f64 = PI / 180.0;

/// Peak clear-sky irradiance on a horizontal surface (W/m²).
pub const PEAK_IRRADIANCE_WM2: f64 = 1000.0;

pub fn solar_position(latitude_deg: f64, temporal: TemporalContext) -> SolarGeometry {
    let doy = temporal.day_of_year.clamp(1, 366) as f64;

    let declination_deg = 23.45 * (2.0 * PI * (284.0 + doy) / 365.0).sin();

    let lat = latitude_deg * DEG;
    let decl = declination_deg * DEG;
    let hour_angle = temporal.hour_angle_deg * DEG;

    let sin_elevation = lat.sin() * decl.sin() + lat.cos() * decl.cos() * hour_angle.cos();
    let elevation_deg = sin_elevation.clamp(-1.0, 1.0).asin() / DEG;

    SolarGeometry {
        declination_deg,
        elevation_deg,
    }
}

/// Clear-sky irradiance for a solar elevation angle.
/// Zero at and below the horizon — night is not an error.
pub fn clear_sky_irradiance(elevation_deg: f64) -> f64 {
    (PEAK_IRRADIANCE_WM2 * (elevation_deg * DEG).sin()).max(0.0)
}
