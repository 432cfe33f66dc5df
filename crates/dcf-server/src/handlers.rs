//! Request handlers.

use axum::extract::Query;
use axum::response::Response;
use axum::{Form, Json};
use serde::Serialize;

use dcf_core::{compute, RawInput, ValuationInput, ValuationResult};

use crate::error::ApiResult;
use crate::views::{render_template, IndexPage, ReportView};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET / - Empty form.
pub async fn index() -> Response {
    render_template(&IndexPage::blank())
}

/// POST /compute - Form submission.
///
/// Failures are an expected outcome: the page is re-rendered with the
/// message and the user's raw values so they can be corrected.
pub async fn compute_form(Form(raw): Form<RawInput>) -> Response {
    let page = IndexPage::with_values(&raw);

    let page = match raw.evaluate() {
        Ok((input, result)) => {
            tracing::debug!(%input, firm_value = result.firm_value(), "form valuation");
            page.with_report(ReportView::new(input, &result))
        }
        Err(e) => {
            tracing::debug!(code = e.code(), "form valuation rejected: {}", e);
            page.with_error(e.to_string())
        }
    };

    render_template(&page)
}

/// Valuation input and result together.
#[derive(Debug, Serialize)]
pub struct ValuationResponse {
    /// The input that was valued.
    pub input: ValuationInput,
    /// Every step of the valuation.
    pub result: ValuationResult,
}

/// POST /api/v1/valuation - JSON input, JSON result.
pub async fn value_json(Json(input): Json<ValuationInput>) -> ApiResult<Json<ValuationResponse>> {
    let result = compute(&input)?;
    Ok(Json(ValuationResponse { input, result }))
}

/// GET /api/v1/valuation - Query-string input (`?fcf=..&shares=..`), JSON result.
pub async fn value_query(Query(raw): Query<RawInput>) -> ApiResult<Json<ValuationResponse>> {
    let (input, result) = raw.evaluate()?;
    Ok(Json(ValuationResponse { input, result }))
}
