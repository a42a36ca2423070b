//! Read-only view of the tariff, for display and schema output.

use crate::fee::{HEAVY_SURCHARGE, HEAVY_THRESHOLD_KG, INSURANCE_RATE, MAX_WEIGHT_KG};
use crate::zone::Zone;
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ZoneRate {
    pub zone: Zone,
    pub base_fee: f64,
    pub per_kg_rate: f64,
}

/// The complete fee schedule
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct RateCard {
    pub zones: Vec<ZoneRate>,
    pub max_weight_kg: f64,
    pub heavy_threshold_kg: f64,
    pub heavy_surcharge: f64,
    pub insurance_rate: f64,
}

impl RateCard {
    pub fn standard() -> Self {
        RateCard {
            zones: Zone::ALL
                .iter()
                .map(|&zone| ZoneRate {
                    zone,
                    base_fee: zone.base_fee(),
                    per_kg_rate: zone.per_kg_rate(),
                })
                .collect(),
            max_weight_kg: MAX_WEIGHT_KG,
            heavy_threshold_kg: HEAVY_THRESHOLD_KG,
            heavy_surcharge: HEAVY_SURCHARGE,
            insurance_rate: INSURANCE_RATE,
        }
    }

    /// Generate human-readable report
    pub fn to_report(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{:<15} {:>10} {:>10}\n",
            "Zone", "Base fee", "Per kg"
        ));
        for rate in &self.zones {
            out.push_str(&format!(
                "{:<15} {:>10.2} {:>10.2}\n",
                rate.zone.as_str(),
                rate.base_fee,
                rate.per_kg_rate
            ));
        }
        out.push('\n');
        out.push_str(&format!(
            "Accepted weight: above 0 up to {} kg\n",
            self.max_weight_kg
        ));
        out.push_str(&format!(
            "Heavy surcharge: {:.2} above {} kg\n",
            self.heavy_surcharge, self.heavy_threshold_kg
        ));
        out.push_str(&format!(
            "Insurance: {}% of subtotal\n",
            self.insurance_rate * 100.0
        ));

        out
    }
}

impl Default for RateCard {
    fn default() -> Self {
        Self::standard()
    }
}
