//! AgriYield
//!
//! Deterministic crop yield estimator with the advisory content and static
//! reference data of the AgriYield UI, plus an optional Axum shell.
//!
//! - `crop`, `soil`, `selection`: typed input records
//! - `estimator`: the yield / financial formula
//! - `advice`, `report`: what the result view shows for one input
//! - `reference/`: mock history, community and language tables
//! - `navigation`: explicit view state for the rendering layer
//! - `api_server`, `web/` (feature `api`): JSON API and HTML pages

pub mod error;
pub mod config;
pub mod crop;
pub mod soil;
pub mod selection;
pub mod estimator;
pub mod advice;
pub mod report;
pub mod reference;
pub mod navigation;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use config::ServerConfig;
pub use crop::Crop;
pub use error::AgriError;
pub use estimator::{estimate, Confidence, PredictionResult};
pub use navigation::{Section, ViewContext};
pub use report::PredictionReport;
pub use selection::{CropForm, CropSelection};
pub use soil::{SoilForm, SoilSample, SoilType};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
