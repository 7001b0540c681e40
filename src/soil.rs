//! Soil and weather input
//!
//! `SoilForm` is the raw record exactly as typed into the input form (every
//! field a string). `SoilForm::parse` turns it into a typed `SoilSample`.
//!
//! Parsing rules:
//! - pH: an empty field means "not entered" (`None`)
//! - N/P/K: an empty field counts as 0
//! - temperature/humidity/rainfall: an empty field means "not entered"
//! - pH and N/P/K text is read by `parse_decimal_prefix`, so "6.5 pH" reads
//!   as 6.5 and "abc" reads as NaN
//! - weather text is read by `parse_numeric_literal`, so "50mm" reads as NaN

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AgriError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Sandy,
    Clay,
    Loamy,
    Silt,
    Black,
    Red,
}

impl SoilType {
    pub const ALL: [SoilType; 6] = [
        SoilType::Sandy,
        SoilType::Clay,
        SoilType::Loamy,
        SoilType::Silt,
        SoilType::Black,
        SoilType::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Sandy => "sandy",
            SoilType::Clay => "clay",
            SoilType::Loamy => "loamy",
            SoilType::Silt => "silt",
            SoilType::Black => "black",
            SoilType::Red => "red",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Sandy => "Sandy Soil",
            SoilType::Clay => "Clay Soil",
            SoilType::Loamy => "Loamy Soil",
            SoilType::Silt => "Silt Soil",
            SoilType::Black => "Black Soil",
            SoilType::Red => "Red Soil",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoilType {
    type Err = AgriError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        SoilType::ALL
            .iter()
            .copied()
            .find(|soil| soil.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AgriError::UnknownSoilType(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SoilTypeOption {
    pub value: SoilType,
    pub label: &'static str,
}

pub fn soil_type_catalog() -> Vec<SoilTypeOption> {
    SoilType::ALL
        .iter()
        .map(|&soil| SoilTypeOption {
            value: soil,
            label: soil.label(),
        })
        .collect()
}

// ============================================================================
// Raw form record
// ============================================================================

/// Soil and weather fields as entered by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SoilForm {
    pub ph: String,
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub soil_type: String,
    pub temperature: String,
    pub humidity: String,
    pub rainfall: String,
}

impl Default for SoilForm {
    /// Blank soil fields with the weather fields pre-filled
    fn default() -> Self {
        Self {
            ph: String::new(),
            nitrogen: String::new(),
            phosphorus: String::new(),
            potassium: String::new(),
            soil_type: String::new(),
            temperature: "28".to_string(),
            humidity: "65".to_string(),
            rainfall: "120".to_string(),
        }
    }
}

impl SoilForm {
    /// The "auto-fill sample data" record
    pub fn sample() -> Self {
        Self {
            ph: "6.5".to_string(),
            nitrogen: "45".to_string(),
            phosphorus: "38".to_string(),
            potassium: "42".to_string(),
            soil_type: "loamy".to_string(),
            temperature: "28".to_string(),
            humidity: "65".to_string(),
            rainfall: "120".to_string(),
        }
    }

    /// Parse the form into a typed sample.
    ///
    /// Only an unrecognized soil type is rejected; malformed numbers become NaN.
    pub fn parse(&self) -> Result<SoilSample> {
        let soil_type = if self.soil_type.is_empty() {
            None
        } else {
            Some(self.soil_type.parse()?)
        };

        Ok(SoilSample {
            ph: optional_field(&self.ph),
            nitrogen: zero_default_field(&self.nitrogen),
            phosphorus: zero_default_field(&self.phosphorus),
            potassium: zero_default_field(&self.potassium),
            soil_type,
            temperature: optional_weather_field(&self.temperature),
            humidity: optional_weather_field(&self.humidity),
            rainfall: optional_weather_field(&self.rainfall),
        })
    }
}

fn optional_field(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        None
    } else {
        Some(parse_decimal_prefix(raw))
    }
}

/// Weather fields are compared as whole values: trailing text makes them NaN
fn optional_weather_field(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        None
    } else {
        Some(parse_numeric_literal(raw))
    }
}

fn zero_default_field(raw: &str) -> f64 {
    if raw.is_empty() {
        0.0
    } else {
        parse_decimal_prefix(raw)
    }
}

// ============================================================================
// Parsed sample
// ============================================================================

/// Typed soil and weather sample consumed by the estimator
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilSample {
    pub ph: Option<f64>,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub soil_type: Option<SoilType>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall: Option<f64>,
}

impl SoilSample {
    /// Mean of N, P and K
    pub fn npk_average(&self) -> f64 {
        (self.nitrogen + self.phosphorus + self.potassium) / 3.0
    }
}

/// Read the longest leading decimal number of `raw`.
///
/// Leading whitespace is skipped and trailing garbage ignored. Returns NaN
/// when no digits lead the string.
pub fn parse_decimal_prefix(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if s[pos..].starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    let mut exponent = "";
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = &s[pos..end];
        }
    }

    let normalized = format!(
        "{}{}.{}{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
        exponent,
    );
    normalized.parse().unwrap_or(f64::NAN)
}

/// Read `raw` as one whole numeric literal.
///
/// Surrounding whitespace is ignored and blank input reads as 0. Accepts
/// signed decimals with optional exponent, `Infinity`, and unsigned
/// `0x`/`0o`/`0b` integers. Anything else, including trailing text, is NaN.
pub fn parse_numeric_literal(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d));
    }

    // `str::parse` also takes "inf" and "nan", which are not literals here
    let literal_chars = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !literal_chars {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}
