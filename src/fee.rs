//! Fee calculation
//!
//! Validation runs first and the first violation wins: weight, then zone.
//! After that the fee is
//!
//! ```text
//! subtotal = base_fee[zone] + weight * per_kg_rate[zone] + heavy_surcharge
//! fee      = subtotal + (insured ? subtotal * INSURANCE_RATE : 0)
//! ```
//!
//! where `heavy_surcharge` is [`HEAVY_SURCHARGE`] for weights strictly above
//! [`HEAVY_THRESHOLD_KG`]. Amounts are left at full `f64` precision; compare
//! them with [`FEE_TOLERANCE`].

use crate::error::{Error, Result};
use crate::zone::Zone;
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{debug, trace};

/// Heaviest accepted package, inclusive
pub const MAX_WEIGHT_KG: f64 = 50.0;

/// Packages strictly heavier than this pay [`HEAVY_SURCHARGE`]
pub const HEAVY_THRESHOLD_KG: f64 = 10.0;

/// Flat surcharge for heavy packages
pub const HEAVY_SURCHARGE: f64 = 7.50;

/// Share of the subtotal charged for insurance (1.5%)
pub const INSURANCE_RATE: f64 = 0.015;

/// Tolerance for comparing computed fees
pub const FEE_TOLERANCE: f64 = 0.01;

/// Check that `weight` lies in `(0, MAX_WEIGHT_KG]`.
///
/// NaN fails the range check and is rejected too.
pub fn validate_weight(weight: f64) -> Result<f64> {
    if weight > 0.0 && weight <= MAX_WEIGHT_KG {
        Ok(weight)
    } else {
        debug!(weight, "rejected package weight");
        Err(Error::InvalidWeight(weight))
    }
}

/// Pricing tier by weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub enum WeightClass {
    /// Up to and including [`HEAVY_THRESHOLD_KG`]
    Standard,
    /// Above [`HEAVY_THRESHOLD_KG`]
    Heavy,
}

impl WeightClass {
    pub fn of(weight: f64) -> WeightClass {
        if weight > HEAVY_THRESHOLD_KG {
            WeightClass::Heavy
        } else {
            WeightClass::Standard
        }
    }

    pub const fn surcharge(self) -> f64 {
        match self {
            WeightClass::Standard => 0.0,
            WeightClass::Heavy => HEAVY_SURCHARGE,
        }
    }
}

/// Itemised result of a fee calculation
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct FeeBreakdown {
    pub weight_kg: f64,
    pub zone: Zone,
    pub insured: bool,
    pub weight_class: WeightClass,
    pub base_fee: f64,
    pub per_kg_cost: f64,
    pub heavy_surcharge: f64,
    /// Base fee + per-kg cost + heavy surcharge
    pub subtotal: f64,
    pub insurance_cost: f64,
    pub total: f64,
}

impl FeeBreakdown {
    /// Generate human-readable report
    pub fn to_report(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "Shipment: {} kg, {} ({:?}){}\n",
            self.weight_kg,
            self.zone,
            self.weight_class,
            if self.insured { ", insured" } else { "" }
        ));
        out.push_str(&format!("  Base fee:         {:>10.4}\n", self.base_fee));
        out.push_str(&format!("  Per-kg cost:      {:>10.4}\n", self.per_kg_cost));
        out.push_str(&format!("  Heavy surcharge:  {:>10.4}\n", self.heavy_surcharge));
        out.push_str(&format!("  Subtotal:         {:>10.4}\n", self.subtotal));
        out.push_str(&format!("  Insurance:        {:>10.4}\n", self.insurance_cost));
        out.push_str(&format!("Total: {:.4}\n", self.total));

        out
    }
}

/// Price a package for a known zone.
pub fn quote(weight: f64, zone: Zone, insured: bool) -> Result<FeeBreakdown> {
    let weight = validate_weight(weight)?;
    Ok(price(weight, zone, insured))
}

/// Price a package for a zone label, checking weight before the label.
pub fn quote_labelled(weight: f64, zone: &str, insured: bool) -> Result<FeeBreakdown> {
    let weight = validate_weight(weight)?;
    let zone = Zone::parse(zone).inspect_err(|_| debug!(zone, "rejected shipping zone"))?;
    Ok(price(weight, zone, insured))
}

/// Tiered pricing for an already validated weight.
fn price(weight: f64, zone: Zone, insured: bool) -> FeeBreakdown {
    let weight_class = WeightClass::of(weight);
    let base_fee = zone.base_fee();
    let per_kg_cost = weight * zone.per_kg_rate();
    let heavy_surcharge = weight_class.surcharge();

    let subtotal = base_fee + per_kg_cost + heavy_surcharge;
    let insurance_cost = if insured { subtotal * INSURANCE_RATE } else { 0.0 };

    let breakdown = FeeBreakdown {
        weight_kg: weight,
        zone,
        insured,
        weight_class,
        base_fee,
        per_kg_cost,
        heavy_surcharge,
        subtotal,
        insurance_cost,
        total: subtotal + insurance_cost,
    };
    trace!(?breakdown, "computed shipping fee");

    breakdown
}

/// Compute the shipping fee for `weight` kilograms sent to `zone`.
///
/// Fails with [`Error::InvalidWeight`] when the weight is outside
/// `(0, 50]`, otherwise with [`Error::InvalidZone`] when `zone` is not
/// exactly `Domestic`, `International` or `Express`.
///
/// ```
/// use shipfee::{calculate_shipping_fee, Error};
///
/// let fee = calculate_shipping_fee(20.0, "Domestic", true).unwrap();
/// assert!((fee - 32.9875).abs() < 0.01);
///
/// assert!(matches!(
///     calculate_shipping_fee(10.0, "Local", false),
///     Err(Error::InvalidZone(z)) if z == "Local"
/// ));
/// ```
pub fn calculate_shipping_fee(weight: f64, zone: &str, insured: bool) -> Result<f64> {
    quote_labelled(weight, zone, insured).map(|b| b.total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_fee(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= FEE_TOLERANCE,
            "expected fee {:.4}, got {:.4}",
            expected,
            actual
        );
    }

    #[test]
    fn test_validate_weight_bounds() {
        assert!(validate_weight(0.1).is_ok());
        assert!(validate_weight(MAX_WEIGHT_KG).is_ok());
        assert!(matches!(validate_weight(0.0), Err(Error::InvalidWeight(_))));
        assert!(matches!(validate_weight(-5.0), Err(Error::InvalidWeight(_))));
        assert!(matches!(validate_weight(50.000001), Err(Error::InvalidWeight(_))));
        assert!(matches!(validate_weight(f64::NAN), Err(Error::InvalidWeight(_))));
        assert!(matches!(validate_weight(f64::INFINITY), Err(Error::InvalidWeight(_))));
    }

    #[test]
    fn test_weight_class_threshold() {
        assert_eq!(WeightClass::of(10.0), WeightClass::Standard);
        assert_eq!(WeightClass::of(10.000001), WeightClass::Heavy);
        assert_eq!(WeightClass::Standard.surcharge(), 0.0);
        assert_eq!(WeightClass::Heavy.surcharge(), HEAVY_SURCHARGE);
    }

    #[test]
    fn test_quote_itemises_heavy_insured() {
        let b = quote(50.0, Zone::Express, true).unwrap();
        assert_eq!(b.weight_class, WeightClass::Heavy);
        assert_fee(b.base_fee, 30.0);
        assert_fee(b.per_kg_cost, 250.0);
        assert_fee(b.heavy_surcharge, 7.5);
        assert_fee(b.subtotal, 287.5);
        assert_fee(b.insurance_cost, 4.3125);
        assert_fee(b.total, 291.8125);
    }

    #[test]
    fn test_quote_standard_uninsured_has_no_extras() {
        let b = quote(8.0, Zone::International, false).unwrap();
        assert_eq!(b.heavy_surcharge, 0.0);
        assert_eq!(b.insurance_cost, 0.0);
        assert_eq!(b.subtotal, b.total);
        assert_fee(b.total, 40.0);
    }

    #[test]
    fn test_weight_checked_before_zone() {
        assert!(matches!(
            calculate_shipping_fee(0.0, "Local", false),
            Err(Error::InvalidWeight(_))
        ));
    }

    #[test]
    fn test_quote_labelled_checks_weight_then_zone() {
        assert!(matches!(
            quote_labelled(0.0, "Local", false),
            Err(Error::InvalidWeight(_))
        ));
        assert!(matches!(
            quote_labelled(10.0, "Local", false),
            Err(Error::InvalidZone(z)) if z == "Local"
        ));
        let b = quote_labelled(20.0, "Domestic", true).unwrap();
        assert_eq!(b, quote(20.0, Zone::Domestic, true).unwrap());
    }

    #[test]
    fn test_calculate_matches_quote_total() {
        for zone in Zone::ALL {
            let fee = calculate_shipping_fee(12.5, zone.as_str(), true).unwrap();
            let b = quote(12.5, zone, true).unwrap();
            assert_eq!(fee, b.total);
        }
    }

    #[test]
    fn test_report_contains_total() {
        let report = quote(5.0, Zone::Domestic, false).unwrap().to_report();
        assert!(report.contains("Domestic"));
        assert!(report.contains("Total: 10.0000"));
        assert!(!report.contains("insured"));
    }
}
