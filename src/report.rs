//! Prediction report
//!
//! Everything the result view shows for one pair of input forms: the parsed
//! inputs, the estimate (if the input is complete) and the advice derived
//! from the same inputs.

use serde::Serialize;

use crate::advice::{
    alternative_crops, recommendations, yield_comparison, AlternativeCrop, Recommendation,
    YieldChartPoint,
};
use crate::error::Result;
use crate::estimator::{estimate, PredictionResult};
use crate::selection::{CropForm, CropSelection};
use crate::soil::{SoilForm, SoilSample};

pub const INCOMPLETE_INPUT_PROMPT: &str = "Please select crop and fill soil data to get prediction";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    pub selection: CropSelection,
    pub soil: SoilSample,
    pub prediction: Option<PredictionResult>,
    /// Prompt shown instead of a result when input is incomplete
    pub message: Option<&'static str>,
    pub recommendations: Vec<Recommendation>,
    pub alternatives: Vec<AlternativeCrop>,
    pub yield_comparison: Vec<YieldChartPoint>,
}

impl PredictionReport {
    /// Parse both forms and evaluate them.
    ///
    /// Errors only for crop or soil type names outside the catalogs.
    pub fn from_forms(crop_form: &CropForm, soil_form: &SoilForm) -> Result<Self> {
        let selection = crop_form.parse()?;
        let soil = soil_form.parse()?;
        Ok(Self::build(selection, soil))
    }

    pub fn build(selection: CropSelection, soil: SoilSample) -> Self {
        let prediction = estimate(&selection, &soil);

        match prediction {
            Some(result) => Self {
                recommendations: recommendations(&selection, &soil),
                alternatives: alternative_crops(selection.crop),
                yield_comparison: yield_comparison(Some(&result)),
                prediction,
                message: None,
                selection,
                soil,
            },
            None => Self {
                selection,
                soil,
                prediction: None,
                message: Some(INCOMPLETE_INPUT_PROMPT),
                recommendations: Vec::new(),
                alternatives: Vec::new(),
                yield_comparison: Vec::new(),
            },
        }
    }
}
