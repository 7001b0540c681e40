//! Crop catalog
//!
//! Closed enumeration of the supported crops. Every per-crop constant used by
//! the estimator is an exhaustive `match`, so there is no silent default for
//! an unrecognized crop; unknown names are rejected by `FromStr`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AgriError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Wheat,
    Rice,
    Maize,
    Cotton,
    Sugarcane,
    Pulses,
}

impl Crop {
    pub const ALL: [Crop; 6] = [
        Crop::Wheat,
        Crop::Rice,
        Crop::Maize,
        Crop::Cotton,
        Crop::Sugarcane,
        Crop::Pulses,
    ];

    /// Lowercase wire name ("wheat", "sugarcane", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Wheat => "wheat",
            Crop::Rice => "rice",
            Crop::Maize => "maize",
            Crop::Cotton => "cotton",
            Crop::Sugarcane => "sugarcane",
            Crop::Pulses => "pulses",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Crop::Wheat => "Wheat",
            Crop::Rice => "Rice",
            Crop::Maize => "Maize",
            Crop::Cotton => "Cotton",
            Crop::Sugarcane => "Sugarcane",
            Crop::Pulses => "Pulses",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Crop::Wheat | Crop::Rice => "🌾",
            Crop::Maize => "🌽",
            Crop::Cotton => "🌿",
            Crop::Sugarcane => "🎋",
            Crop::Pulses => "🫘",
        }
    }

    /// Starting yield before soil adjustments
    pub fn base_yield(&self) -> f64 {
        match self {
            Crop::Wheat => 22.0,
            Crop::Rice => 35.0,
            Crop::Maize => 28.0,
            Crop::Cotton => 12.0,
            Crop::Sugarcane => 450.0,
            Crop::Pulses => 8.0,
        }
    }

    /// Fixed comparison baseline, not derived from any regional data source
    pub fn regional_average(&self) -> f64 {
        match self {
            Crop::Wheat => 20.0,
            Crop::Rice => 32.0,
            Crop::Maize => 25.0,
            Crop::Cotton => 10.0,
            Crop::Sugarcane => 400.0,
            Crop::Pulses => 7.0,
        }
    }

    pub fn cost_per_acre(&self) -> u32 {
        match self {
            Crop::Sugarcane => 25_000,
            _ => 8_000,
        }
    }

    pub fn price_per_unit(&self) -> f64 {
        match self {
            Crop::Sugarcane => 3_000.0,
            _ => 2_000.0,
        }
    }

    /// Unit the yield figure is displayed in
    pub fn yield_unit(&self) -> &'static str {
        match self {
            Crop::Sugarcane => "tons/hectare",
            _ => "quintals/acre",
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Crop {
    type Err = AgriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Crop::ALL
            .iter()
            .copied()
            .find(|crop| crop.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AgriError::UnknownCrop(s.to_string()))
    }
}

/// Entry of the crop picker
#[derive(Debug, Clone, Serialize)]
pub struct CropOption {
    pub value: Crop,
    pub label: &'static str,
    pub icon: &'static str,
}

pub fn crop_catalog() -> Vec<CropOption> {
    Crop::ALL
        .iter()
        .map(|&crop| CropOption {
            value: crop,
            label: crop.label(),
            icon: crop.icon(),
        })
        .collect()
}
