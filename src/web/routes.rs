//! Route handlers for the form page and the JSON API.
//!
//! Handlers only parse, call into `strategy`, and render. State is
//! read-only and shared via `Arc<WebState>`.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use handlebars::Handlebars;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::strategy::{AuctionEvaluator, InvestmentGrowthCalculator};
use crate::types::{
    AdvisorError, AuctionInput, AuctionResult, GrowthInput, InvestmentType, Recommendation,
};

/// Template name for the form page.
const INDEX_TEMPLATE: &str = "index";

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Shared, read-only state accessible by all route handlers.
pub struct WebState {
    pub title: String,
    pub evaluator: AuctionEvaluator,
    pub growth: InvestmentGrowthCalculator,
    templates: Handlebars<'static>,
}

impl WebState {
    pub fn new(title: impl Into<String>) -> Result<Self, AdvisorError> {
        let mut templates = Handlebars::new();
        templates
            .register_template_string(INDEX_TEMPLATE, super::INDEX_HTML)
            .map_err(|e| AdvisorError::Render(e.to_string()))?;

        Ok(Self {
            title: title.into(),
            evaluator: AuctionEvaluator::new(),
            growth: InvestmentGrowthCalculator::new(),
            templates,
        })
    }

    /// Render the form page.
    pub fn render_index(&self, view: &IndexView) -> Result<String, AdvisorError> {
        self.templates
            .render(INDEX_TEMPLATE, view)
            .map_err(|e| AdvisorError::Render(e.to_string()))
    }
}

pub type AppState = Arc<WebState>;

// ---------------------------------------------------------------------------
// Form types
// ---------------------------------------------------------------------------

/// Form submission after field-name resolution. The original Portuguese
/// field names are accepted too; when a request sends both spellings of
/// the same field, the English one wins.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuctionForm {
    pub address: Option<String>,
    pub market_value: Option<String>,
    pub auction_value: Option<String>,
    pub planned_bid: Option<String>,
    pub monthly_rent: Option<String>,
}

impl AuctionForm {
    /// Build from raw decoded form fields.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let pick = |name: &str, legacy: &str| fields.get(name).or_else(|| fields.get(legacy)).cloned();
        Self {
            address: pick("address", "endereco"),
            market_value: pick("market_value", "valor_mercado"),
            auction_value: pick("auction_value", "valor_leilao"),
            planned_bid: pick("planned_bid", "oferta"),
            monthly_rent: pick("monthly_rent", "aluguel"),
        }
    }

    /// Coerce the numeric fields. Missing or unparseable values become 0.
    pub fn to_input(&self) -> AuctionInput {
        AuctionInput::new(
            coerce_number(self.market_value.as_deref()),
            coerce_number(self.auction_value.as_deref()),
            coerce_number(self.planned_bid.as_deref()),
            coerce_number(self.monthly_rent.as_deref()),
        )
    }
}

fn coerce_number(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// JSON numbers pass through, strings go through [`coerce_number`],
/// anything else (null, bool, missing) is 0.
fn coerce_json_number(raw: Option<&serde_json::Value>) -> f64 {
    match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(s)) => coerce_number(Some(s.as_str())),
        _ => 0.0,
    }
}

/// Everything the form template needs.
#[derive(Debug, Clone, Serialize)]
pub struct IndexView {
    pub title: String,
    pub form: AuctionForm,
    pub result: Option<ResultView>,
    pub error: Option<String>,
}

/// An [`AuctionResult`] with numbers pre-formatted for display.
#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    pub recommendation: String,
    pub css_class: &'static str,
    pub max_acceptable_bid: String,
    pub extra_costs: String,
    pub total_debits: String,
    pub annual_rent_yield: Option<String>,
    pub justifications: Vec<String>,
}

impl From<&AuctionResult> for ResultView {
    fn from(r: &AuctionResult) -> Self {
        Self {
            recommendation: r.recommendation.to_string(),
            css_class: match r.recommendation {
                Recommendation::Buy => "buy",
                Recommendation::Investigate => "investigate",
            },
            max_acceptable_bid: format!("{:.2}", r.max_acceptable_bid),
            extra_costs: format!("{:.2}", r.extra_costs),
            total_debits: format!("{:.2}", r.total_debits),
            annual_rent_yield: r.annual_rent_yield_percent.map(|y| format!("{y:.2}%")),
            justifications: r.justifications.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// API types
// ---------------------------------------------------------------------------

/// Body of `POST /api/evaluate`. Fields may be numbers or numeric strings;
/// missing or unparseable fields are 0, as on the form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub market_value: Option<serde_json::Value>,
    #[serde(default)]
    pub auction_value: Option<serde_json::Value>,
    #[serde(default)]
    pub planned_bid: Option<serde_json::Value>,
    #[serde(default)]
    pub monthly_rent: Option<serde_json::Value>,
}

impl EvaluateRequest {
    pub fn to_input(&self) -> AuctionInput {
        AuctionInput::new(
            coerce_json_number(self.market_value.as_ref()),
            coerce_json_number(self.auction_value.as_ref()),
            coerce_json_number(self.planned_bid.as_ref()),
            coerce_json_number(self.monthly_rent.as_ref()),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GrowthRequest {
    pub principal: f64,
    pub months: f64,
    pub investment_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthResponse {
    pub final_value: f64,
    pub investment_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvestmentTypeEntry {
    pub name: String,
    pub label: &'static str,
    pub monthly_rate: Decimal,
}

impl IntoResponse for AdvisorError {
    fn into_response(self) -> Response {
        let status = match self {
            AdvisorError::InvalidInvestmentType(_) | AdvisorError::DivisionByZero { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AdvisorError::Config(_) | AdvisorError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// GET /
pub async fn get_index(State(state): State<AppState>) -> Response {
    render(&state, StatusCode::OK, AuctionForm::default(), None, None)
}

/// POST /
pub async fn post_index(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let form = AuctionForm::from_fields(&fields);
    let input = form.to_input();
    match state.evaluator.evaluate(&input) {
        Ok(result) => {
            info!(
                address = form.address.as_deref().unwrap_or(""),
                recommendation = %result.recommendation,
                "Form evaluated"
            );
            render(&state, StatusCode::OK, form, Some(ResultView::from(&result)), None)
        }
        Err(e) => {
            warn!(error = %e, "Form evaluation rejected");
            render(&state, StatusCode::UNPROCESSABLE_ENTITY, form, None, Some(e.to_string()))
        }
    }
}

fn render(
    state: &WebState,
    status: StatusCode,
    form: AuctionForm,
    result: Option<ResultView>,
    error: Option<String>,
) -> Response {
    let view = IndexView {
        title: state.title.clone(),
        form,
        result,
        error,
    };
    match state.render_index(&view) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// POST /api/evaluate
pub async fn post_evaluate(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<AuctionResult>, AdvisorError> {
    let result = state.evaluator.evaluate(&req.to_input())?;
    info!(recommendation = %result.recommendation, "API evaluation");
    Ok(Json(result))
}

/// POST /api/growth
pub async fn post_growth(
    State(state): State<AppState>,
    Json(req): Json<GrowthRequest>,
) -> Result<Json<GrowthResponse>, AdvisorError> {
    let investment_type: InvestmentType = req.investment_type.parse()?;
    let final_value = state.growth.compute(&GrowthInput {
        principal: req.principal,
        months: req.months,
        investment_type,
    });
    Ok(Json(GrowthResponse {
        final_value,
        investment_type: investment_type.label().to_string(),
    }))
}

/// GET /api/investment-types
pub async fn get_investment_types() -> Json<Vec<InvestmentTypeEntry>> {
    Json(
        InvestmentType::ALL
            .iter()
            .map(|t| InvestmentTypeEntry {
                name: format!("{t:?}"),
                label: t.label(),
                monthly_rate: t.monthly_rate(),
            })
            .collect(),
    )
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
