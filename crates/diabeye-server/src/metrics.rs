//! Placeholder health metrics returned alongside classification output.
//!
//! These values are NOT derived from the uploaded image: they are uniformly
//! sampled on every request, rounded to one decimal place, and exist only to
//! fill the dashboard panels the web client renders next to the prediction.
//! They carry no identity and are never stored.

use rand::Rng;
use serde::Serialize;

/// Per-request placeholder metrics, camelCase for the JS client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    /// Uniform in [70, 400] mg/dL, one decimal place.
    pub glucose_level: f64,
    /// Uniform in [10, 30] mmHg, one decimal place.
    pub intraocular_pressure: f64,
    /// Uniform in [90, 140] mmHg (systolic), one decimal place.
    pub blood_pressure: f64,
    /// Marks the values as estimates, not measurements.
    pub source: &'static str,
}

/// Samples a fresh set of placeholder metrics.
pub fn sample() -> HealthMetrics {
    let mut rng = rand::thread_rng();
    HealthMetrics {
        glucose_level: round_one_decimal(rng.gen_range(70.0..=400.0)),
        intraocular_pressure: round_one_decimal(rng.gen_range(10.0..=30.0)),
        blood_pressure: round_one_decimal(rng.gen_range(90.0..=140.0)),
        source: "estimated",
    }
}

/// Half-up rounding to one decimal place.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_range() {
        for _ in 0..200 {
            let metrics = sample();
            assert!((70.0..=400.0).contains(&metrics.glucose_level));
            assert!((10.0..=30.0).contains(&metrics.intraocular_pressure));
            assert!((90.0..=140.0).contains(&metrics.blood_pressure));
            assert_eq!(metrics.source, "estimated");
        }
    }

    #[test]
    fn samples_are_rounded_to_one_decimal() {
        for _ in 0..200 {
            let metrics = sample();
            for value in [
                metrics.glucose_level,
                metrics.intraocular_pressure,
                metrics.blood_pressure,
            ] {
                let scaled = value * 10.0;
                assert!((scaled - scaled.round()).abs() < 1e-9, "not one decimal: {}", value);
            }
        }
    }

    #[test]
    fn round_one_decimal_is_half_up() {
        // 2.25 is exact in binary, so the tie is real and must round up.
        assert_eq!(round_one_decimal(2.25), 2.3);
        assert_eq!(round_one_decimal(87.34), 87.3);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("glucoseLevel").is_some());
        assert!(json.get("intraocularPressure").is_some());
        assert!(json.get("bloodPressure").is_some());
    }
}
