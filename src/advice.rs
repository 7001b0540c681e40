//! Advice Generation
//!
//! Threshold-based recommendation cards shown next to a prediction, plus the
//! alternative crop suggestions and the yield comparison chart series.

use serde::Serialize;

use crate::crop::Crop;
use crate::estimator::PredictionResult;
use crate::selection::CropSelection;
use crate::soil::SoilSample;

/// Rainfall (mm) below which irrigation should be increased
pub const LOW_RAINFALL_MM: f64 = 100.0;

/// NPK average below which a corrective fertilizer dose is recommended
pub const LOW_NPK_AVERAGE: f64 = 30.0;

/// Temperature (°C) above which heat-stress pests are flagged
pub const HEAT_STRESS_TEMP_C: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceKind {
    Irrigation,
    Fertilizer,
    PestManagement,
}

/// Recommendation card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub kind: AdviceKind,
    pub title: &'static str,
    pub advice: String,
}

/// Irrigation, fertilizer and pest management advice, in that order
pub fn recommendations(selection: &CropSelection, soil: &SoilSample) -> Vec<Recommendation> {
    vec![
        irrigation_advice(soil),
        fertilizer_advice(selection.crop, soil),
        pest_advice(soil),
    ]
}

fn irrigation_advice(soil: &SoilSample) -> Recommendation {
    let dry = soil.rainfall.is_some_and(|mm| mm < LOW_RAINFALL_MM);
    let advice = if dry {
        "Increase irrigation frequency. Apply 25-30mm water twice weekly."
    } else {
        "Apply 20mm water weekly. Use drip irrigation for efficiency."
    };
    Recommendation {
        kind: AdviceKind::Irrigation,
        title: "Irrigation Advice",
        advice: advice.to_string(),
    }
}

fn fertilizer_advice(crop: Option<Crop>, soil: &SoilSample) -> Recommendation {
    let advice = if soil.npk_average() < LOW_NPK_AVERAGE {
        let supplement = if crop == Some(Crop::Rice) { "Urea 100kg" } else { "DAP 50kg" };
        format!("Apply NPK 12:32:16 @ 150kg/acre. Add {}/acre.", supplement)
    } else {
        let top_up = if crop == Some(Crop::Wheat) { "Urea" } else { "MOP" };
        format!("Maintain with NPK 10:26:26 @ 100kg/acre. Apply {} as needed.", top_up)
    };
    Recommendation {
        kind: AdviceKind::Fertilizer,
        title: "Fertilizer Recommendation",
        advice,
    }
}

fn pest_advice(soil: &SoilSample) -> Recommendation {
    let hot = soil.temperature.is_some_and(|t| t > HEAT_STRESS_TEMP_C);
    let advice = if hot {
        "Monitor for heat-stress pests. Use integrated pest management practices."
    } else {
        "Maintain regular field inspection. Apply preventive organic pest control measures."
    };
    Recommendation {
        kind: AdviceKind::PestManagement,
        title: "Pest Management",
        advice: advice.to_string(),
    }
}

// ============================================================================
// Alternative crops
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeCrop {
    pub crop: Crop,
    pub expected_yield: String,
    /// Suitability score (0-100)
    pub suitability: u8,
}

const ALTERNATIVES: [(Crop, u8); 3] = [(Crop::Maize, 85), (Crop::Pulses, 78), (Crop::Cotton, 72)];

/// Fixed suggestion list without the currently selected crop
pub fn alternative_crops(selected: Option<Crop>) -> Vec<AlternativeCrop> {
    ALTERNATIVES
        .iter()
        .filter(|(crop, _)| Some(*crop) != selected)
        .take(3)
        .map(|&(crop, suitability)| AlternativeCrop {
            crop,
            expected_yield: format!("{} {}", crop.base_yield(), crop.yield_unit()),
            suitability,
        })
        .collect()
}

// ============================================================================
// Chart series
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YieldChartPoint {
    pub month: &'static str,
    pub current: f64,
    pub average: f64,
}

/// Six-month yield vs regional average series; April carries the prediction
pub fn yield_comparison(prediction: Option<&PredictionResult>) -> Vec<YieldChartPoint> {
    let april_current = prediction.map_or(25.0, |p| p.yield_value);
    let april_average = prediction.map_or(20.0, |p| p.regional_average);
    [
        ("Jan", 18.0, 16.0),
        ("Feb", 20.0, 18.0),
        ("Mar", 22.0, 19.0),
        ("Apr", april_current, april_average),
        ("May", 26.0, 21.0),
        ("Jun", 24.0, 20.0),
    ]
    .into_iter()
    .map(|(month, current, average)| YieldChartPoint { month, current, average })
    .collect()
}
