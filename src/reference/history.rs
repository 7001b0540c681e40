//! Prediction history (mock records)

use serde::Serialize;
use std::collections::BTreeSet;

use crate::crop::Crop;
use crate::estimator::round_half_up;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HistoryStatus {
    Excellent,
    Good,
    Average,
}

impl HistoryStatus {
    pub fn display_text(&self) -> &'static str {
        match self {
            HistoryStatus::Excellent => "Excellent",
            HistoryStatus::Good => "Good",
            HistoryStatus::Average => "Average",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: u32,
    /// ISO date (YYYY-MM-DD)
    pub date: &'static str,
    pub crop: Crop,
    pub location: &'static str,
    pub yield_value: f64,
    pub yield_unit: &'static str,
    pub status: HistoryStatus,
    pub recommendations: &'static str,
}

pub fn prediction_history() -> Vec<HistoryRecord> {
    vec![
        HistoryRecord {
            id: 1,
            date: "2024-09-01",
            crop: Crop::Wheat,
            location: "Pune, Maharashtra",
            yield_value: 22.5,
            yield_unit: Crop::Wheat.yield_unit(),
            status: HistoryStatus::Good,
            recommendations: "Increase irrigation",
        },
        HistoryRecord {
            id: 2,
            date: "2024-08-15",
            crop: Crop::Rice,
            location: "Nashik, Maharashtra",
            yield_value: 35.2,
            yield_unit: Crop::Rice.yield_unit(),
            status: HistoryStatus::Excellent,
            recommendations: "Continue current practices",
        },
        HistoryRecord {
            id: 3,
            date: "2024-07-20",
            crop: Crop::Maize,
            location: "Aurangabad, Maharashtra",
            yield_value: 28.1,
            yield_unit: Crop::Maize.yield_unit(),
            status: HistoryStatus::Average,
            recommendations: "Apply NPK fertilizer",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub total_predictions: usize,
    /// Mean yield, one decimal; 0 for an empty history
    pub average_yield: f64,
    pub crops_analyzed: usize,
}

impl HistorySummary {
    pub fn from_records(records: &[HistoryRecord]) -> Self {
        let total_predictions = records.len();
        let average_yield = if records.is_empty() {
            0.0
        } else {
            let sum: f64 = records.iter().map(|r| r.yield_value).sum();
            round_half_up(sum / total_predictions as f64, 1)
        };
        let crops_analyzed = records.iter().map(|r| r.crop).collect::<BTreeSet<_>>().len();

        Self {
            total_predictions,
            average_yield,
            crops_analyzed,
        }
    }
}
