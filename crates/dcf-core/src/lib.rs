//! # DCF Core
//!
//! Core types and the valuation engine for the two-stage discounted cash flow
//! (DCF) toolkit.
//!
//! This crate provides the building blocks shared by every front-end:
//!
//! - **Types**: [`ValuationInput`] and [`ValuationResult`]
//! - **Engine**: [`compute`], the pure valuation function
//! - **Input parsing**: [`RawInput`] turns user-typed strings into a validated input
//! - **Errors**: engine-level [`ValuationError`] and collaborator-level [`InputError`]
//!
//! ## Design Philosophy
//!
//! - **Pure**: the engine performs no I/O and owns no state across calls
//! - **All or nothing**: a call either returns every step or fails before the first
//! - **Explicit Over Implicit**: failures are labeled values, never NaN or infinity
//!
//! ## Example
//!
//! ```rust
//! use dcf_core::prelude::*;
//!
//! let input = ValuationInput::new(10.0, 100.0, 10.0, 3.0, 5, 8.0);
//! let result = compute(&input).unwrap();
//!
//! assert_eq!(result.projected_fcf().len(), 5);
//! assert_eq!(result.projected_fcf()[0], 10.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod engine;
pub mod error;
pub mod input;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::{compute, MAX_YEARS};
    pub use crate::error::{DcfError, DcfResult, InputError, ValuationError};
    pub use crate::input::{Field, RawInput};
    pub use crate::types::{PeriodCashFlow, ValuationInput, ValuationResult};
}

// Re-export commonly used types at crate root
pub use engine::{compute, MAX_YEARS};
pub use error::{DcfError, DcfResult, InputError, ValuationError};
pub use input::{Field, RawInput};
pub use types::{PeriodCashFlow, ValuationInput, ValuationResult};
