//! Error types for the DCF toolkit.
//!
//! Two layers of failure are kept apart:
//!
//! - [`InputError`]: raised while gathering raw user input, before the engine
//!   is ever invoked.
//! - [`ValuationError`]: raised by the engine when a well-formed input is
//!   economically meaningless.
//!
//! Neither is retryable. Both are normal return values, surfaced verbatim to
//! whoever asked for the valuation.

use thiserror::Error;

use crate::input::Field;

/// A specialized Result type for operations that may fail at either layer.
pub type DcfResult<T> = Result<T, DcfError>;

/// Domain validation failures reported by [`crate::compute`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    /// The forecast horizon is shorter than one period.
    #[error("years must be >= 1 (got {years})")]
    InvalidYears {
        /// The rejected number of forecast periods.
        years: u32,
    },

    /// The forecast horizon exceeds [`crate::engine::MAX_YEARS`].
    #[error("years must be <= {max} (got {years})")]
    YearsTooLarge {
        /// The rejected number of forecast periods.
        years: u32,
        /// The largest accepted horizon.
        max: u32,
    },

    /// The share count is zero, negative, or not a number.
    #[error("total shares must be > 0 (got {total_shares})")]
    InvalidShares {
        /// The rejected share count.
        total_shares: f64,
    },

    /// The discount rate does not exceed the perpetual growth rate.
    #[error(
        "discount rate must be greater than perpetual growth rate \
         (r = {discount_rate_pct}%, gp = {perpetual_growth_pct}%)"
    )]
    InvalidRateRelation {
        /// Discount rate, in percent.
        discount_rate_pct: f64,
        /// Perpetual growth rate, in percent.
        perpetual_growth_pct: f64,
    },
}

impl ValuationError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidYears { .. } => "INVALID_YEARS",
            Self::YearsTooLarge { .. } => "YEARS_TOO_LARGE",
            Self::InvalidShares { .. } => "INVALID_SHARES",
            Self::InvalidRateRelation { .. } => "INVALID_RATE_RELATION",
        }
    }
}

/// Failures while turning raw, user-typed text into a [`crate::ValuationInput`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A required parameter was absent or blank.
    #[error("missing parameter: {field}")]
    MissingParameter {
        /// The parameter that was not supplied.
        field: Field,
    },

    /// A parameter was supplied but is not a usable number.
    #[error("malformed number for {field}: {value:?}")]
    MalformedNumber {
        /// The parameter that failed to parse.
        field: Field,
        /// The text as the user entered it.
        value: String,
    },
}

impl InputError {
    /// Creates a missing parameter error.
    #[must_use]
    pub fn missing(field: Field) -> Self {
        Self::MissingParameter { field }
    }

    /// Creates a malformed number error.
    #[must_use]
    pub fn malformed(field: Field, value: impl Into<String>) -> Self {
        Self::MalformedNumber {
            field,
            value: value.into(),
        }
    }

    /// The parameter this error is about.
    pub fn field(&self) -> Field {
        match self {
            Self::MissingParameter { field } | Self::MalformedNumber { field, .. } => *field,
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingParameter { .. } => "MISSING_PARAMETER",
            Self::MalformedNumber { .. } => "MALFORMED_NUMBER",
        }
    }
}

/// Either kind of failure, for callers that parse and compute in one go.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DcfError {
    /// Raw input could not be parsed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The engine rejected the parsed input.
    #[error(transparent)]
    Valuation(#[from] ValuationError),
}

impl DcfError {
    /// Stable machine-readable code for the wrapped error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.code(),
            Self::Valuation(e) => e.code(),
        }
    }
}
