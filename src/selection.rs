//! Crop selection input

use serde::{Deserialize, Serialize};

use crate::crop::Crop;
use crate::error::Result;

/// Raw crop picker fields (crop name may still be empty)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropForm {
    pub crop: String,
    pub location: String,
}

impl CropForm {
    pub fn parse(&self) -> Result<CropSelection> {
        let crop = if self.crop.trim().is_empty() {
            None
        } else {
            Some(self.crop.parse()?)
        };
        Ok(CropSelection {
            crop,
            location: self.location.clone(),
        })
    }
}

/// Chosen crop and free-text location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropSelection {
    pub crop: Option<Crop>,
    pub location: String,
}

impl CropSelection {
    pub fn new(crop: Crop, location: impl Into<String>) -> Self {
        Self {
            crop: Some(crop),
            location: location.into(),
        }
    }

    /// Location for display, "your area" when none was entered
    pub fn location_or_default(&self) -> &str {
        let trimmed = self.location.trim();
        if trimmed.is_empty() {
            "your area"
        } else {
            trimmed
        }
    }
}
