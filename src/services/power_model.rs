//! Power output from irradiance, assuming a fixed residential installation.

use rand::Rng;

use crate::services::weather::round1;

/// Typical crystalline-silicon module efficiency.
pub const PANEL_EFFICIENCY: f64 = 0.20;
/// Assumed residential array area (m²).
pub const PANEL_AREA_M2: f64 = 10.0;

#[derive(Debug, Clone, Copy)]
pub struct PowerEstimate {
    /// Estimated output, never negative.
    pub power_kw: f64,
    /// Fallback-path confidence, always within [75, 90].
    pub confidence_pct: f64,
}

pub fn estimate_output<R: Rng>(radiation_wm2: f64, rng: &mut R) -> PowerEstimate {
    let power_kw = (radiation_wm2 * PANEL_EFFICIENCY * PANEL_AREA_M2 / 1000.0
        + rng.gen_range(-0.25..0.25))
    .max(0.0);

    // Lower variance than a genuine model's confidence: the fallback never
    // claims more than it can back up.
    let confidence_pct = round1(75.0 + rng.gen_range(0.0..15.0));

    PowerEstimate {
        power_kw,
        confidence_pct,
    }
}
