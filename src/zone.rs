//! Shipping zones
//!
//! A zone picks the base fee and the per-kilogram rate. Labels are matched
//! exactly: `"domestic"` or `" Domestic"` are not zones.

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shipping-distance category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Zone {
    Domestic,
    International,
    Express,
}

impl Zone {
    /// Every zone, cheapest first
    pub const ALL: [Zone; 3] = [Zone::Domestic, Zone::International, Zone::Express];

    /// Parse a zone label (exact, case-sensitive)
    pub fn parse(label: &str) -> Result<Zone> {
        match label {
            "Domestic" => Ok(Zone::Domestic),
            "International" => Ok(Zone::International),
            "Express" => Ok(Zone::Express),
            other => Err(Error::InvalidZone(other.to_string())),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Zone::Domestic => "Domestic",
            Zone::International => "International",
            Zone::Express => "Express",
        }
    }

    /// Flat fee charged for every package in this zone
    pub const fn base_fee(self) -> f64 {
        match self {
            Zone::Domestic => 5.0,
            Zone::International => 20.0,
            Zone::Express => 30.0,
        }
    }

    /// Cost per kilogram of package weight
    pub const fn per_kg_rate(self) -> f64 {
        match self {
            Zone::Domestic => 1.0,
            Zone::International => 2.5,
            Zone::Express => 5.0,
        }
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Zone::parse(s)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_labels() {
        for zone in Zone::ALL {
            assert_eq!(Zone::parse(zone.as_str()).unwrap(), zone);
            assert_eq!(zone.to_string().parse::<Zone>().unwrap(), zone);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        for label in ["domestic", "EXPRESS", "international", " Domestic", "Domestic ", ""] {
            match Zone::parse(label) {
                Err(Error::InvalidZone(v)) => assert_eq!(v, label),
                other => panic!("expected InvalidZone for {:?}, got {:?}", label, other),
            }
        }
    }

    #[test]
    fn test_rate_table() {
        assert_eq!(Zone::Domestic.base_fee(), 5.0);
        assert_eq!(Zone::International.base_fee(), 20.0);
        assert_eq!(Zone::Express.base_fee(), 30.0);
        assert_eq!(Zone::Domestic.per_kg_rate(), 1.0);
        assert_eq!(Zone::International.per_kg_rate(), 2.5);
        assert_eq!(Zone::Express.per_kg_rate(), 5.0);
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Zone::International).unwrap();
        assert_eq!(json, "\"International\"");
        let back: Zone = serde_json::from_str("\"Express\"").unwrap();
        assert_eq!(back, Zone::Express);
        assert!(serde_json::from_str::<Zone>("\"express\"").is_err());
    }
}
