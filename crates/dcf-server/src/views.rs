//! HTML page models.
//!
//! Templates are compiled into the binary by askama, so the page layout is a
//! read-only resource fixed at build time.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use dcf_core::{Field, RawInput, ValuationInput, ValuationResult};

/// Renders a template into an axum response.
pub fn render_template<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template render error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", e),
            )
                .into_response()
        }
    }
}

/// One input box of the form, pre-filled with what the user typed.
#[derive(Debug, Clone)]
pub struct FormField {
    /// Form field name.
    pub key: &'static str,
    /// Label shown next to the box.
    pub label: &'static str,
    /// Current raw value.
    pub value: String,
}

/// One forecast period of the report.
#[derive(Debug, Clone)]
pub struct PeriodView {
    /// 1-based period number.
    pub year: u32,
    /// Projected free cash flow.
    pub projected: f64,
    /// `(1 + r)^year`.
    pub discount_factor: f64,
    /// Present value.
    pub discounted: f64,
}

/// The step-by-step report shown after a successful valuation.
#[derive(Debug, Clone)]
pub struct ReportView {
    /// The parsed input that was valued.
    pub input: ValuationInput,
    /// Per-period rows.
    pub periods: Vec<PeriodView>,
    /// Sum of present values over the forecast horizon.
    pub sum_pv: f64,
    /// Terminal value at the end of period N.
    pub terminal_value: f64,
    /// Present value of the terminal value.
    pub discounted_terminal: f64,
    /// Firm value.
    pub firm_value: f64,
    /// Value per share.
    pub per_share_value: f64,
}

impl ReportView {
    /// Builds the report rows from a finished valuation.
    pub fn new(input: ValuationInput, result: &ValuationResult) -> Self {
        let periods = result
            .periods()
            .map(|p| PeriodView {
                year: p.period,
                projected: p.projected,
                discount_factor: p.discount_factor,
                discounted: p.discounted,
            })
            .collect();

        Self {
            input,
            periods,
            sum_pv: result.sum_discounted_fcf(),
            terminal_value: result.terminal_value(),
            discounted_terminal: result.discounted_terminal(),
            firm_value: result.firm_value(),
            per_share_value: result.per_share_value(),
        }
    }
}

/// The single page: the form, plus an error or a report.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    /// Form fields in entry order.
    pub fields: Vec<FormField>,
    /// Message from a failed submission.
    pub error: Option<String>,
    /// Report from a successful submission.
    pub report: Option<ReportView>,
}

impl IndexPage {
    /// An empty form.
    pub fn blank() -> Self {
        Self::with_values(&RawInput::default())
    }

    /// A form echoing `raw`.
    pub fn with_values(raw: &RawInput) -> Self {
        let fields = Field::ALL
            .into_iter()
            .map(|field| FormField {
                key: field.key(),
                label: field.label(),
                value: raw.value_of(field).to_string(),
            })
            .collect();

        Self {
            fields,
            error: None,
            report: None,
        }
    }

    /// Attaches an error message.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Attaches a report.
    pub fn with_report(mut self, report: ReportView) -> Self {
        self.report = Some(report);
        self
    }
}
