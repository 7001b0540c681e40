// Estimator properties through the public form-parsing path
//
// Run with: cargo test --test estimator_properties

use agriyield::estimator::{npk_factor, ph_factor, round_half_up};
use agriyield::selection::CropForm;
use agriyield::{estimate, Confidence, Crop, CropSelection, PredictionReport, SoilForm};
use approx::assert_relative_eq;

fn form(crop: &str) -> CropForm {
    CropForm {
        crop: crop.to_string(),
        location: "Nashik, Maharashtra".to_string(),
    }
}

#[test]
fn test_sample_record_every_crop() {
    let soil = SoilForm::sample().parse().unwrap();
    for crop in Crop::ALL {
        let result = estimate(&CropSelection::new(crop, ""), &soil).unwrap();
        assert_eq!(result.yield_value, round_half_up(crop.base_yield() * 1.10 * 1.15, 2));
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.yield_unit, crop.yield_unit());
    }
}

#[test]
fn test_rice_half_cent_rounds_up() {
    // 35 * 1.10 * 1.15 = 44.275
    let soil = SoilForm::sample().parse().unwrap();
    let result = estimate(&CropSelection::new(Crop::Rice, ""), &soil).unwrap();
    assert_eq!(result.yield_value, 44.28);
}

#[test]
fn test_sugarcane_financials_from_forms() {
    let report = PredictionReport::from_forms(&form("Sugarcane"), &SoilForm::sample()).unwrap();
    let prediction = report.prediction.unwrap();
    assert_eq!(prediction.cost_per_acre, 25_000);
    assert_relative_eq!(prediction.expected_revenue, 569.25 * 3000.0, epsilon = 1e-6);
    assert!(prediction.is_profitable());
}

#[test]
fn test_ph_gap_between_bands() {
    for ph in [5.5, 5.9, 7.6, 7.8, 8.0] {
        assert_eq!(ph_factor(ph), 1.0, "pH {}", ph);
    }
    assert_eq!(ph_factor(5.0), 0.80);
    assert_eq!(ph_factor(8.1), 0.80);
    assert_eq!(ph_factor(6.0), 1.10);
    assert_eq!(ph_factor(7.5), 1.10);
}

#[test]
fn test_npk_band_edges_are_exclusive() {
    assert_eq!(npk_factor(40.0), 1.0);
    assert_eq!(npk_factor(20.0), 1.0);
    assert_eq!(npk_factor(40.01), 1.15);
    assert_eq!(npk_factor(19.99), 0.85);
}

#[test]
fn test_unset_crop_is_absent_even_with_full_soil() {
    let report = PredictionReport::from_forms(&form(""), &SoilForm::sample()).unwrap();
    assert!(report.prediction.is_none());
    assert!(report.message.is_some());
}

#[test]
fn test_repeated_estimates_identical() {
    let soil = SoilForm {
        ph: "7.8".to_string(),
        nitrogen: "12".to_string(),
        ..SoilForm::sample()
    }
    .parse()
    .unwrap();
    let selection = CropSelection::new(Crop::Cotton, "");

    let first = estimate(&selection, &soil).unwrap();
    let second = estimate(&selection, &soil).unwrap();
    assert_eq!(first.yield_value.to_bits(), second.yield_value.to_bits());
    assert_eq!(first, second);
}

#[test]
fn test_improvement_sign_tracks_yield() {
    let rich = SoilForm::sample().parse().unwrap();
    let poor = SoilForm {
        ph: "4.8".to_string(),
        nitrogen: "5".to_string(),
        phosphorus: "5".to_string(),
        potassium: "5".to_string(),
        ..SoilForm::default()
    }
    .parse()
    .unwrap();

    for crop in Crop::ALL {
        let selection = CropSelection::new(crop, "");
        for soil in [&rich, &poor] {
            let result = estimate(&selection, soil).unwrap();
            let above = result.yield_value > result.regional_average;
            assert_eq!(result.improvement_pct > 0.0, above, "{}", crop);
        }
    }
}
