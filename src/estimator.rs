//! Yield Estimator
//!
//! Deterministic yield and financial estimate from a crop selection and a
//! soil sample. The formula is a fixed chain of multiplicative adjustments:
//!
//! 1. start from the crop's base yield
//! 2. pH band: 6.0-7.5 → ×1.10, below 5.5 or above 8.0 → ×0.80
//! 3. NPK average: above 40 → ×1.15, below 20 → ×0.85
//! 4. round to the cent (half up)
//!
//! The 5.5-6.0 and 7.5-8.0 pH bands are neutral. NaN inputs fail every
//! comparison and therefore apply no adjustment.

use serde::{Deserialize, Serialize};

use crate::crop::Crop;
use crate::selection::CropSelection;
use crate::soil::SoilSample;

pub const OPTIMAL_PH_MIN: f64 = 6.0;
pub const OPTIMAL_PH_MAX: f64 = 7.5;
pub const ACIDIC_PH_LIMIT: f64 = 5.5;
pub const ALKALINE_PH_LIMIT: f64 = 8.0;

pub const OPTIMAL_PH_FACTOR: f64 = 1.10;
pub const POOR_PH_FACTOR: f64 = 0.80;
pub const RICH_NPK_FACTOR: f64 = 1.15;
pub const POOR_NPK_FACTOR: f64 = 0.85;

pub const RICH_NPK_THRESHOLD: f64 = 40.0;
pub const POOR_NPK_THRESHOLD: f64 = 20.0;
pub const HIGH_CONFIDENCE_NPK: f64 = 30.0;
pub const MEDIUM_CONFIDENCE_NPK: f64 = 20.0;

/// Coarse qualitative confidence label (not a statistical measure)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn display_text(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }

    fn from_inputs(npk_avg: f64, ph: f64) -> Self {
        if npk_avg > HIGH_CONFIDENCE_NPK && is_optimal_ph(ph) {
            Confidence::High
        } else if npk_avg > MEDIUM_CONFIDENCE_NPK {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Result of a single estimate. Recomputed on every call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub crop: Crop,
    pub yield_value: f64,
    pub yield_unit: &'static str,
    pub regional_average: f64,
    pub confidence: Confidence,
    pub cost_per_acre: u32,
    pub expected_revenue: f64,
    pub expected_profit: f64,
    /// Percent difference from the regional average, one decimal
    pub improvement_pct: f64,
}

impl PredictionResult {
    pub fn is_profitable(&self) -> bool {
        self.expected_profit > 0.0
    }

    pub fn above_regional_average(&self) -> bool {
        self.improvement_pct > 0.0
    }
}

fn is_optimal_ph(ph: f64) -> bool {
    (OPTIMAL_PH_MIN..=OPTIMAL_PH_MAX).contains(&ph)
}

/// Multiplier applied for the pH band
pub fn ph_factor(ph: f64) -> f64 {
    if is_optimal_ph(ph) {
        OPTIMAL_PH_FACTOR
    } else if ph < ACIDIC_PH_LIMIT || ph > ALKALINE_PH_LIMIT {
        POOR_PH_FACTOR
    } else {
        1.0
    }
}

/// Multiplier applied for the NPK average
pub fn npk_factor(npk_avg: f64) -> f64 {
    if npk_avg > RICH_NPK_THRESHOLD {
        RICH_NPK_FACTOR
    } else if npk_avg < POOR_NPK_THRESHOLD {
        POOR_NPK_FACTOR
    } else {
        1.0
    }
}

/// Round half up at the given number of decimals
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale + 0.5).floor() / scale
}

/// Estimate yield and financials.
///
/// Returns `None` when the crop is not chosen or pH was not entered; the
/// caller should prompt for the missing input rather than report an error.
pub fn estimate(selection: &CropSelection, soil: &SoilSample) -> Option<PredictionResult> {
    let crop = selection.crop?;
    let ph = soil.ph?;

    let regional_average = crop.regional_average();
    let npk_avg = soil.npk_average();

    // pH first, then NPK
    let predicted = crop.base_yield() * ph_factor(ph) * npk_factor(npk_avg);

    let yield_value = round_half_up(predicted, 2);
    let confidence = Confidence::from_inputs(npk_avg, ph);

    let cost_per_acre = crop.cost_per_acre();
    let expected_revenue = yield_value * crop.price_per_unit();
    let expected_profit = expected_revenue - f64::from(cost_per_acre);
    let improvement_pct =
        round_half_up((yield_value - regional_average) / regional_average * 100.0, 1);

    tracing::debug!(
        "Estimated {} at pH {} / NPK {:.2}: {} {} ({} confidence)",
        crop,
        ph,
        npk_avg,
        yield_value,
        crop.yield_unit(),
        confidence.display_text()
    );

    Some(PredictionResult {
        crop,
        yield_value,
        yield_unit: crop.yield_unit(),
        regional_average,
        confidence,
        cost_per_acre,
        expected_revenue,
        expected_profit,
        improvement_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn soil(ph: f64, n: f64, p: f64, k: f64) -> SoilSample {
        SoilSample {
            ph: Some(ph),
            nitrogen: n,
            phosphorus: p,
            potassium: k,
            ..SoilSample::default()
        }
    }

    #[test]
    fn test_wheat_reference_case() {
        let result = estimate(&CropSelection::new(Crop::Wheat, "Pune"), &soil(6.5, 45.0, 38.0, 42.0)).unwrap();
        assert_eq!(result.yield_value, 27.83);
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.regional_average, 20.0);
        assert_eq!(result.cost_per_acre, 8_000);
        assert_relative_eq!(result.expected_revenue, 55_660.0, epsilon = 1e-6);
        assert_relative_eq!(result.expected_profit, 47_660.0, epsilon = 1e-6);
        assert_relative_eq!(result.improvement_pct, 39.1, epsilon = 1e-9);
    }

    #[test]
    fn test_sugarcane_financials() {
        let result = estimate(&CropSelection::new(Crop::Sugarcane, ""), &soil(6.5, 45.0, 38.0, 42.0)).unwrap();
        assert_eq!(result.cost_per_acre, 25_000);
        // 450 × 1.1 × 1.15 = 569.25
        assert_relative_eq!(result.yield_value, 569.25, epsilon = 1e-9);
        assert_relative_eq!(result.expected_revenue, 569.25 * 3_000.0, epsilon = 1e-6);
        assert_eq!(result.yield_unit, "tons/hectare");
    }

    #[test]
    fn test_acidic_ph_penalty() {
        // 22 × 0.8 = 17.6, NPK average 30 leaves yield unchanged
        let result = estimate(&CropSelection::new(Crop::Wheat, ""), &soil(5.0, 30.0, 30.0, 30.0)).unwrap();
        assert_relative_eq!(result.yield_value, 17.6, epsilon = 1e-9);
        assert_eq!(result.confidence, Confidence::Medium);
    }

    #[test]
    fn test_neutral_ph_bands() {
        assert_eq!(ph_factor(7.8), 1.0);
        assert_eq!(ph_factor(5.7), 1.0);
        assert_eq!(ph_factor(5.5), 1.0);
        assert_eq!(ph_factor(8.0), 1.0);
        assert_eq!(ph_factor(6.0), OPTIMAL_PH_FACTOR);
        assert_eq!(ph_factor(7.5), OPTIMAL_PH_FACTOR);
        assert_eq!(ph_factor(8.1), POOR_PH_FACTOR);

        let result = estimate(&CropSelection::new(Crop::Maize, ""), &soil(7.8, 30.0, 30.0, 30.0)).unwrap();
        assert_relative_eq!(result.yield_value, 28.0, epsilon = 1e-9);
    }

    #[test]
    fn test_npk_bands() {
        assert_eq!(npk_factor(40.0), 1.0);
        assert_eq!(npk_factor(40.1), RICH_NPK_FACTOR);
        assert_eq!(npk_factor(20.0), 1.0);
        assert_eq!(npk_factor(19.9), POOR_NPK_FACTOR);
    }

    #[test]
    fn test_absent_when_crop_unset() {
        let selection = CropSelection::default();
        assert!(estimate(&selection, &soil(6.5, 45.0, 38.0, 42.0)).is_none());
    }

    #[test]
    fn test_absent_when_ph_missing() {
        let sample = SoilSample {
            ph: None,
            nitrogen: 45.0,
            ..SoilSample::default()
        };
        assert!(estimate(&CropSelection::new(Crop::Rice, ""), &sample).is_none());
    }

    #[test]
    fn test_confidence_tiers() {
        let wheat = CropSelection::new(Crop::Wheat, "");
        // NPK above 30 but pH outside the optimal band
        let r = estimate(&wheat, &soil(7.8, 35.0, 35.0, 35.0)).unwrap();
        assert_eq!(r.confidence, Confidence::Medium);
        // NPK exactly 20 is not above the Medium threshold
        let r = estimate(&wheat, &soil(6.5, 20.0, 20.0, 20.0)).unwrap();
        assert_eq!(r.confidence, Confidence::Low);
    }

    #[test]
    fn test_idempotent() {
        let selection = CropSelection::new(Crop::Cotton, "Gujarat");
        let sample = soil(6.9, 12.0, 55.0, 31.0);
        let first = estimate(&selection, &sample).unwrap();
        let second = estimate(&selection, &sample).unwrap();
        assert_eq!(first.yield_value.to_bits(), second.yield_value.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_improvement_sign() {
        let above = estimate(&CropSelection::new(Crop::Rice, ""), &soil(6.5, 50.0, 50.0, 50.0)).unwrap();
        assert!(above.yield_value > above.regional_average);
        assert!(above.above_regional_average());

        let below = estimate(&CropSelection::new(Crop::Rice, ""), &soil(4.5, 5.0, 5.0, 5.0)).unwrap();
        assert!(below.yield_value < below.regional_average);
        assert!(below.improvement_pct < 0.0);
    }

    #[test]
    fn test_nan_inputs_apply_no_adjustment() {
        let sample = SoilSample {
            ph: Some(f64::NAN),
            nitrogen: f64::NAN,
            ..SoilSample::default()
        };
        let result = estimate(&CropSelection::new(Crop::Wheat, ""), &sample).unwrap();
        assert_eq!(result.yield_value, 22.0);
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5, 0), 3.0);
        assert_eq!(round_half_up(17.625, 2), 17.63);
        assert_eq!(round_half_up(39.14999, 1), 39.1);
    }
}
