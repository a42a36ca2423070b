// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # shipfee — tiered shipping fees
//!
//! Computes the fee for sending a package from its weight, its shipping
//! zone and whether it is insured. The calculation is a pure function:
//! the same inputs always give the same fee or the same error.
//!
//! ## Quick Start
//!
//! ```rust
//! use shipfee::{calculate_shipping_fee, quote, Zone};
//!
//! // String-typed entry point
//! let fee = calculate_shipping_fee(5.0, "Domestic", false)?;
//! assert!((fee - 10.0).abs() < shipfee::FEE_TOLERANCE);
//!
//! // Typed entry point with an itemised breakdown
//! let breakdown = quote(50.0, Zone::Express, true)?;
//! assert!((breakdown.subtotal - 287.5).abs() < shipfee::FEE_TOLERANCE);
//! assert!((breakdown.total - 291.8125).abs() < shipfee::FEE_TOLERANCE);
//! # Ok::<(), shipfee::Error>(())
//! ```
//!
//! ## Tariff
//!
//! | Zone | Base fee | Per kg |
//! |------|----------|--------|
//! | Domestic | 5.00 | 1.00 |
//! | International | 20.00 | 2.50 |
//! | Express | 30.00 | 5.00 |
//!
//! Packages above 10 kg pay a flat 7.50 surcharge. Insurance adds 1.5% of
//! the subtotal. Accepted weights are above 0 and at most 50 kg.

pub mod error;
pub mod fee;
pub mod rates;
pub mod zone;

// Re-exports
pub use error::{Error, Result};
pub use fee::{
    calculate_shipping_fee, quote, quote_labelled, validate_weight, FeeBreakdown, WeightClass,
    FEE_TOLERANCE, HEAVY_SURCHARGE, HEAVY_THRESHOLD_KG, INSURANCE_RATE, MAX_WEIGHT_KG,
};
pub use rates::{RateCard, ZoneRate};
pub use zone::Zone;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
