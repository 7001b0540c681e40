// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::Query,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use crate::advice::{AlternativeCrop, Recommendation, YieldChartPoint};
use crate::crop::{crop_catalog, CropOption};
use crate::estimator::PredictionResult;
use crate::navigation::{Section, ViewContext};
use crate::reference::languages::DEFAULT_LANGUAGE;
use crate::reference::{
    community_stats, find_language, forum_posts, helplines, languages, prediction_history,
    CommunityStat, ForumPost, Helpline, HistoryRecord, HistorySummary, Language,
};
use crate::report::PredictionReport;
use crate::selection::CropForm;
use crate::soil::{soil_type_catalog, SoilForm, SoilTypeOption};

// ============================================================================
// Shared page chrome
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

fn current_language(code: Option<&str>) -> &'static Language {
    code.and_then(find_language)
        .or_else(|| find_language(DEFAULT_LANGUAGE))
        .unwrap_or(&languages()[0])
}

fn render<T: Template>(template: &T) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template error: {}", e);
        format!("Template error: {}", e)
    }))
}

/// Group the integer part in thousands, keep up to two decimals
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && rounded != "0.00" { "-" } else { "" };
    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}

// ============================================================================
// Home Page (input forms)
// ============================================================================

/// The input form resubmitted to itself. Auto-fill replaces only the soil
/// and weather fields; the crop choice and location carry over.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub lang: Option<String>,
    /// Present when the "auto-fill sample data" button was pressed
    pub sample: Option<String>,
    #[serde(flatten)]
    pub crop: CropForm,
    #[serde(flatten)]
    pub soil: SoilForm,
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub active: &'static str,
    pub language: &'static Language,
    pub languages: &'static [Language],
    pub crops: Vec<CropOption>,
    pub soil_types: Vec<SoilTypeOption>,
    pub crop_form: CropForm,
    pub soil: SoilForm,
    pub sample_filled: bool,
}

pub async fn home_page(Query(query): Query<HomeQuery>) -> impl IntoResponse {
    let sample_filled = query.sample.is_some();
    let template = HomeTemplate {
        title: "AgriYield AI".to_string(),
        active: Section::Home.title(),
        language: current_language(query.lang.as_deref()),
        languages: languages(),
        crops: crop_catalog(),
        soil_types: soil_type_catalog(),
        crop_form: query.crop,
        soil: if sample_filled { SoilForm::sample() } else { query.soil },
        sample_filled,
    };
    render(&template)
}

// ============================================================================
// Prediction Page
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct PredictionQuery {
    pub lang: Option<String>,
    #[serde(flatten)]
    pub crop: CropForm,
    #[serde(flatten)]
    pub soil: SoilForm,
}

pub struct ChartRow {
    pub month: &'static str,
    pub current: f64,
    pub average: f64,
    pub current_pct: u32,
    pub average_pct: u32,
}

fn chart_rows(points: &[YieldChartPoint]) -> Vec<ChartRow> {
    let max = points
        .iter()
        .flat_map(|p| [p.current, p.average])
        .fold(0.0_f64, f64::max);
    let pct = |v: f64| if max > 0.0 { (v / max * 100.0).round() as u32 } else { 0 };
    points
        .iter()
        .map(|p| ChartRow {
            month: p.month,
            current: p.current,
            average: p.average,
            current_pct: pct(p.current),
            average_pct: pct(p.average),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "pages/prediction.html")]
pub struct PredictionTemplate {
    pub title: String,
    pub active: &'static str,
    pub language: &'static Language,
    pub languages: &'static [Language],
    pub crop_name: String,
    pub location: String,
    pub prediction: Option<PredictionResult>,
    pub message: String,
    pub cost_display: String,
    pub revenue_display: String,
    pub profit_display: String,
    pub recommendations: Vec<Recommendation>,
    pub alternatives: Vec<AlternativeCrop>,
    pub chart: Vec<ChartRow>,
}

pub async fn prediction_page(Query(query): Query<PredictionQuery>) -> impl IntoResponse {
    let language = current_language(query.lang.as_deref());

    let mut ctx = ViewContext::new();
    ctx.update_crop(query.crop);
    ctx.update_soil(query.soil);
    ctx.request_prediction();

    let (status, report) = match ctx.report() {
        Ok(Some(report)) => (StatusCode::OK, report),
        Ok(None) => (StatusCode::OK, PredictionReport::build(Default::default(), Default::default())),
        Err(e) => {
            tracing::debug!("Rejected prediction form: {}", e);
            let mut report = PredictionReport::build(Default::default(), Default::default());
            report.message = None;
            let template = prediction_template(language, ctx.section(), report, Some(e.to_string()));
            return (StatusCode::UNPROCESSABLE_ENTITY, render(&template));
        }
    };

    let template = prediction_template(language, ctx.section(), report, None);
    (status, render(&template))
}

fn prediction_template(
    language: &'static Language,
    section: Section,
    report: PredictionReport,
    error: Option<String>,
) -> PredictionTemplate {
    let crop_name = report
        .selection
        .crop
        .map(|c| c.as_str().to_string())
        .unwrap_or_default();
    let location = report.selection.location_or_default().to_string();
    let message = error
        .or_else(|| report.message.map(str::to_string))
        .unwrap_or_default();
    let (cost_display, revenue_display, profit_display) = match &report.prediction {
        Some(p) => (
            format_amount(f64::from(p.cost_per_acre)),
            format_amount(p.expected_revenue),
            format_amount(p.expected_profit),
        ),
        None => Default::default(),
    };

    PredictionTemplate {
        title: "Yield Prediction".to_string(),
        active: section.title(),
        language,
        languages: languages(),
        crop_name,
        location,
        prediction: report.prediction,
        message,
        cost_display,
        revenue_display,
        profit_display,
        chart: chart_rows(&report.yield_comparison),
        recommendations: report.recommendations,
        alternatives: report.alternatives,
    }
}

// ============================================================================
// History Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/history.html")]
pub struct HistoryTemplate {
    pub title: String,
    pub active: &'static str,
    pub language: &'static Language,
    pub languages: &'static [Language],
    pub records: Vec<HistoryRecord>,
    pub summary: HistorySummary,
}

pub async fn history_page(Query(query): Query<LangQuery>) -> impl IntoResponse {
    let records = prediction_history();
    let summary = HistorySummary::from_records(&records);
    let template = HistoryTemplate {
        title: "Prediction History".to_string(),
        active: Section::History.title(),
        language: current_language(query.lang.as_deref()),
        languages: languages(),
        records,
        summary,
    };
    render(&template)
}

// ============================================================================
// Community Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/community.html")]
pub struct CommunityTemplate {
    pub title: String,
    pub active: &'static str,
    pub language: &'static Language,
    pub languages: &'static [Language],
    pub posts: Vec<ForumPost>,
    pub helplines: Vec<Helpline>,
    pub stats: Vec<CommunityStat>,
}

pub async fn community_page(Query(query): Query<LangQuery>) -> impl IntoResponse {
    let template = CommunityTemplate {
        title: "Community".to_string(),
        active: "Community",
        language: current_language(query.lang.as_deref()),
        languages: languages(),
        posts: forum_posts(),
        helplines: helplines(),
        stats: community_stats(),
    };
    render(&template)
}

// ============================================================================
// Not Found
// ============================================================================

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub title: String,
    pub active: &'static str,
    pub language: &'static Language,
    pub languages: &'static [Language],
    pub path: String,
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::warn!("404: no route for {}", uri.path());
    let template = NotFoundTemplate {
        title: "Page not found".to_string(),
        active: "",
        language: current_language(None),
        languages: languages(),
        path: uri.path().to_string(),
    };
    (StatusCode::NOT_FOUND, render(&template))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(8000.0), "8,000");
        assert_eq!(format_amount(55_660.0), "55,660");
        assert_eq!(format_amount(1_707_750.0), "1,707,750");
        assert_eq!(format_amount(-1_234.5), "-1,234.5");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_unknown_language_falls_back() {
        assert_eq!(current_language(Some("fr")).code, "en");
        assert_eq!(current_language(Some("mr")).code, "mr");
        assert_eq!(current_language(None).code, "en");
    }

    #[test]
    fn test_chart_rows_scaled_to_max() {
        let rows = chart_rows(&crate::advice::yield_comparison(None));
        assert_eq!(rows.iter().map(|r| r.current_pct).max(), Some(100));
        assert_eq!(rows[4].current_pct, 100); // May, 26
    }
}
