//! Navigation Context
//!
//! Explicit view state handed to the rendering layer: the active section,
//! the form data collected so far, and whether a prediction was requested.
//! Nothing here outlives the session that owns it.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::estimator::{estimate, PredictionResult};
use crate::report::PredictionReport;
use crate::selection::CropForm;
use crate::soil::SoilForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Prediction,
    History,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Prediction => "Prediction",
            Section::History => "History",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewContext {
    section: Section,
    crop_form: Option<CropForm>,
    soil_form: Option<SoilForm>,
    show_prediction: bool,
}

impl ViewContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn show_prediction(&self) -> bool {
        self.show_prediction
    }

    pub fn crop_form(&self) -> Option<&CropForm> {
        self.crop_form.as_ref()
    }

    pub fn soil_form(&self) -> Option<&SoilForm> {
        self.soil_form.as_ref()
    }

    pub fn update_crop(&mut self, form: CropForm) {
        self.crop_form = Some(form);
    }

    pub fn update_soil(&mut self, form: SoilForm) {
        self.soil_form = Some(form);
    }

    /// Both forms have been touched at least once
    pub fn can_request_prediction(&self) -> bool {
        self.crop_form.is_some() && self.soil_form.is_some()
    }

    /// Switch sections. Returns the section actually shown.
    ///
    /// Going home hides the prediction; the prediction section stays locked
    /// until `request_prediction` succeeded.
    pub fn navigate(&mut self, target: Section) -> Section {
        match target {
            Section::Home => {
                self.show_prediction = false;
                self.section = Section::Home;
            }
            Section::Prediction if !self.show_prediction => {
                tracing::debug!("Prediction section locked; staying on {:?}", self.section);
            }
            other => self.section = other,
        }
        self.section
    }

    /// The "Get prediction" action. Returns whether the prediction view opened.
    pub fn request_prediction(&mut self) -> bool {
        if !self.can_request_prediction() {
            return false;
        }
        self.show_prediction = true;
        self.section = Section::Prediction;
        true
    }

    /// Evaluate the estimator against the current forms.
    ///
    /// `Ok(None)` means the input is still incomplete.
    pub fn prediction(&self) -> Result<Option<PredictionResult>> {
        let selection = self.crop_form.clone().unwrap_or_default().parse()?;
        let soil = match &self.soil_form {
            Some(form) => form.parse()?,
            None => return Ok(None),
        };
        Ok(estimate(&selection, &soil))
    }

    /// Full result view for the current forms, `None` until both were touched
    pub fn report(&self) -> Result<Option<PredictionReport>> {
        match (&self.crop_form, &self.soil_form) {
            (Some(crop), Some(soil)) => PredictionReport::from_forms(crop, soil).map(Some),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheat_form() -> CropForm {
        CropForm {
            crop: "wheat".to_string(),
            location: "Pune, Maharashtra".to_string(),
        }
    }

    #[test]
    fn test_starts_at_home() {
        let ctx = ViewContext::new();
        assert_eq!(ctx.section(), Section::Home);
        assert!(!ctx.show_prediction());
    }

    #[test]
    fn test_prediction_locked_until_requested() {
        let mut ctx = ViewContext::new();
        assert_eq!(ctx.navigate(Section::Prediction), Section::Home);
        assert_eq!(ctx.navigate(Section::History), Section::History);
        assert_eq!(ctx.navigate(Section::Prediction), Section::History);
    }

    #[test]
    fn test_request_needs_both_forms() {
        let mut ctx = ViewContext::new();
        ctx.update_crop(wheat_form());
        assert!(!ctx.request_prediction());

        ctx.update_soil(SoilForm::sample());
        assert!(ctx.request_prediction());
        assert_eq!(ctx.section(), Section::Prediction);
    }

    #[test]
    fn test_home_clears_prediction() {
        let mut ctx = ViewContext::new();
        ctx.update_crop(wheat_form());
        ctx.update_soil(SoilForm::sample());
        ctx.request_prediction();

        ctx.navigate(Section::History);
        assert_eq!(ctx.navigate(Section::Prediction), Section::Prediction);

        ctx.navigate(Section::Home);
        assert!(!ctx.show_prediction());
        assert_eq!(ctx.navigate(Section::Prediction), Section::Home);
    }

    #[test]
    fn test_prediction_from_context() {
        let mut ctx = ViewContext::new();
        assert_eq!(ctx.prediction().unwrap(), None);

        ctx.update_crop(wheat_form());
        ctx.update_soil(SoilForm::sample());
        let result = ctx.prediction().unwrap().unwrap();
        assert_eq!(result.yield_value, 27.83);
    }

    #[test]
    fn test_report_needs_both_forms() {
        let mut ctx = ViewContext::new();
        ctx.update_soil(SoilForm::sample());
        assert!(ctx.report().unwrap().is_none());

        ctx.update_crop(wheat_form());
        let report = ctx.report().unwrap().unwrap();
        assert_eq!(report.recommendations.len(), 3);
    }

    #[test]
    fn test_touched_but_incomplete_soil() {
        let mut ctx = ViewContext::new();
        ctx.update_crop(wheat_form());
        ctx.update_soil(SoilForm::default());
        assert!(ctx.request_prediction());
        assert_eq!(ctx.prediction().unwrap(), None);
    }
}
