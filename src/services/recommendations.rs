//! Threshold rules over weather and siting, evaluated in a fixed order so
//! the output list is stable. Rules are mutually distinct, so there is
//! nothing to deduplicate, and the engine cannot fail.

use crate::models::prediction::{GeoCoordinate, Priority, Recommendation, WeatherData};

const HOT_TEMPERATURE_C: f64 = 30.0;
const STRONG_WIND_MS: f64 = 5.0;
const CLOUDY_PCT: f64 = 20.0;
const HUMID_PCT: f64 = 70.0;
const HIGH_LATITUDE_DEG: f64 = 60.0;
const EQUATORIAL_LATITUDE_DEG: f64 = 10.0;

pub fn evaluate(
    weather: &WeatherData,
    coordinate: GeoCoordinate,
    used_fallback: bool,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if weather.temperature_c > HOT_TEMPERATURE_C {
        recommendations.push(rec(
            "Thermal",
            Priority::Medium,
            "High temperatures reduce panel efficiency - consider installing cooling systems or improving ventilation",
            "5-15% efficiency recovery on hot days",
        ));
    }
    if weather.wind_speed_ms > STRONG_WIND_MS {
        recommendations.push(rec(
            "Mechanical",
            Priority::Medium,
            "High wind speeds - ensure secure panel mounting",
            "Reduced risk of wind damage",
        ));
    }
    if weather.cloud_cover_pct > CLOUDY_PCT {
        recommendations.push(rec(
            "Production",
            Priority::Medium,
            "Frequent cloud cover may reduce production - consider battery storage to smooth output",
            "More consistent energy availability",
        ));
    }
    if weather.humidity_pct > HUMID_PCT {
        recommendations.push(rec(
            "Performance",
            Priority::Low,
            "High humidity may affect panel performance",
            "Up to 5% output recovery with anti-soiling coatings",
        ));
    }
    if coordinate.latitude.abs() > HIGH_LATITUDE_DEG {
        recommendations.push(rec(
            "Siting",
            Priority::Medium,
            "High latitude location - consider a ground-mounted system with adjustable tilt angle",
            "10-20% increase in annual energy capture",
        ));
    }
    if coordinate.latitude.abs() < EQUATORIAL_LATITUDE_DEG {
        recommendations.push(rec(
            "Siting",
            Priority::Medium,
            "Equatorial region - consider heat-resistant panels and cooling systems",
            "Longer panel lifetime and steadier output",
        ));
    }
    if used_fallback {
        recommendations.push(data_quality());
    }

    recommendations
}

/// Always attached on the fallback path, so fallback responses carry at
/// least one recommendation.
pub fn data_quality() -> Recommendation {
    rec(
        "Data Quality",
        Priority::High,
        "Connect to a live weather and ML service for real-time data",
        "More accurate predictions with live weather data",
    )
}

fn rec(
    category: &str,
    priority: Priority,
    recommendation: &str,
    potential_improvement: &str,
) -> Recommendation {
    Recommendation {
        category: category.to_string(),
        priority,
        recommendation: recommendation.to_string(),
        potential_improvement: potential_improvement.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm_weather() -> WeatherData {
        WeatherData {
            solar_radiation_wm2: 500.0,
            temperature_c: 22.0,
            humidity_pct: 45.0,
            wind_speed_ms: 3.0,
            cloud_cover_pct: 10.0,
            pressure_hpa: 1013.0,
        }
    }

    fn mid_latitude() -> GeoCoordinate {
        GeoCoordinate::new(45.0, 7.0).unwrap()
    }

    #[test]
    fn calm_mid_latitude_without_fallback_yields_nothing() {
        assert!(evaluate(&calm_weather(), mid_latitude(), false).is_empty());
    }

    #[test]
    fn fallback_always_includes_data_quality() {
        let recommendations = evaluate(&calm_weather(), mid_latitude(), true);
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].category, "Data Quality");
        assert_eq!(recommendations[0].priority, Priority::High);
    }

    #[test]
    fn each_threshold_fires_its_rule() {
        let mut weather = calm_weather();
        weather.temperature_c = 34.0;
        weather.wind_speed_ms = 6.5;
        weather.cloud_cover_pct = 25.0;
        weather.humidity_pct = 80.0;
        let categories: Vec<_> = evaluate(&weather, mid_latitude(), false)
            .into_iter()
            .map(|r| r.category)
            .collect();
        assert_eq!(
            categories,
            ["Thermal", "Mechanical", "Production", "Performance"]
        );
    }

    #[test]
    fn siting_rules_track_latitude() {
        let arctic = GeoCoordinate::new(68.0, 20.0).unwrap();
        let equatorial = GeoCoordinate::new(2.0, 100.0).unwrap();
        assert!(
            evaluate(&calm_weather(), arctic, false)
                .iter()
                .any(|r| r.recommendation.contains("adjustable tilt"))
        );
        assert!(
            evaluate(&calm_weather(), equatorial, false)
                .iter()
                .any(|r| r.recommendation.contains("heat-resistant"))
        );
    }

    #[test]
    fn boundary_values_do_not_fire() {
        let mut weather = calm_weather();
        weather.temperature_c = HOT_TEMPERATURE_C;
        weather.wind_speed_ms = STRONG_WIND_MS;
        weather.cloud_cover_pct = CLOUDY_PCT;
        weather.humidity_pct = HUMID_PCT;
        assert!(evaluate(&weather, mid_latitude(), false).is_empty());
    }
}
