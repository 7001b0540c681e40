//! Error types
//!
//! Incomplete input is not an error: the estimator returns `None` for it.
//! These variants cover values that cannot be mapped onto the closed
//! enumerations, and server configuration problems.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgriError {
    #[error("unknown crop '{0}' (expected one of wheat, rice, maize, cotton, sugarcane, pulses)")]
    UnknownCrop(String),

    #[error("unknown soil type '{0}' (expected one of sandy, clay, loamy, silt, black, red)")]
    UnknownSoilType(String),

    #[error("batch of {size} requests exceeds the limit of {limit}")]
    BatchTooLarge { size: usize, limit: usize },

    #[error("invalid configuration for {key}: {message}")]
    Config { key: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, AgriError>;
