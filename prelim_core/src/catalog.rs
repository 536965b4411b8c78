//! Soil and usage catalogs
//!
//! Static lookup tables for allowable soil bearing capacities and occupancy
//! live loads. Entries are immutable process-wide data keyed by enum; nothing
//! here is ever mutated after startup.
//!
//! ## Example
//!
//! ```rust
//! use prelim_core::catalog::{SoilClass, UsageClass};
//!
//! assert_eq!(SoilClass::Medium.bearing_capacity_kpa(), 200.0);
//! assert_eq!(UsageClass::Residential.live_load_kpa(), 2.0);
//! ```

use serde::{Deserialize, Serialize};

/// Soil condition classes supported by the foundation sizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilClass {
    /// Soft soil (100 kPa allowable bearing)
    Soft,
    /// Medium soil (200 kPa allowable bearing)
    #[default]
    Medium,
    /// Stiff soil (300 kPa allowable bearing)
    Stiff,
}

/// Catalog entry describing a soil condition (serialize-only display view)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilCondition {
    /// Catalog key
    pub class: SoilClass,
    /// Display name
    pub name: &'static str,
    /// Allowable bearing capacity (kPa)
    pub bearing_capacity_kpa: f64,
}

impl SoilClass {
    /// All soil classes for UI selection
    pub const ALL: [SoilClass; 3] = [SoilClass::Soft, SoilClass::Medium, SoilClass::Stiff];

    /// Catalog entry for this class
    pub fn condition(&self) -> SoilCondition {
        match self {
            SoilClass::Soft => SoilCondition {
                class: SoilClass::Soft,
                name: "Soft soil",
                bearing_capacity_kpa: 100.0,
            },
            SoilClass::Medium => SoilCondition {
                class: SoilClass::Medium,
                name: "Medium soil",
                bearing_capacity_kpa: 200.0,
            },
            SoilClass::Stiff => SoilCondition {
                class: SoilClass::Stiff,
                name: "Stiff soil",
                bearing_capacity_kpa: 300.0,
            },
        }
    }

    /// Allowable bearing capacity (kPa)
    pub fn bearing_capacity_kpa(&self) -> f64 {
        self.condition().bearing_capacity_kpa
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        self.condition().name
    }
}

/// Building usage (occupancy) classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageClass {
    /// Residential occupancy (2.0 kPa live load)
    #[default]
    Residential,
    /// Office occupancy (2.5 kPa live load)
    Office,
    /// Commercial occupancy (3.0 kPa live load)
    Commercial,
    /// Industrial occupancy (5.0 kPa live load)
    Industrial,
}

/// Catalog entry describing a usage class (serialize-only display view)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Usage {
    /// Catalog key
    pub class: UsageClass,
    /// Display name
    pub name: &'static str,
    /// Characteristic live load (kPa)
    pub live_load_kpa: f64,
}

impl UsageClass {
    /// All usage classes for UI selection
    pub const ALL: [UsageClass; 4] = [
        UsageClass::Residential,
        UsageClass::Office,
        UsageClass::Commercial,
        UsageClass::Industrial,
    ];

    /// Catalog entry for this class
    pub fn usage(&self) -> Usage {
        match self {
            UsageClass::Residential => Usage {
                class: UsageClass::Residential,
                name: "Residential",
                live_load_kpa: 2.0,
            },
            UsageClass::Office => Usage {
                class: UsageClass::Office,
                name: "Office",
                live_load_kpa: 2.5,
            },
            UsageClass::Commercial => Usage {
                class: UsageClass::Commercial,
                name: "Commercial",
                live_load_kpa: 3.0,
            },
            UsageClass::Industrial => Usage {
                class: UsageClass::Industrial,
                name: "Industrial",
                live_load_kpa: 5.0,
            },
        }
    }

    /// Characteristic live load (kPa)
    pub fn live_load_kpa(&self) -> f64 {
        self.usage().live_load_kpa
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        self.usage().name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soil_bearing_values() {
        assert_eq!(SoilClass::Soft.bearing_capacity_kpa(), 100.0);
        assert_eq!(SoilClass::Medium.bearing_capacity_kpa(), 200.0);
        assert_eq!(SoilClass::Stiff.bearing_capacity_kpa(), 300.0);
    }

    #[test]
    fn test_usage_live_loads() {
        assert_eq!(UsageClass::Residential.live_load_kpa(), 2.0);
        assert_eq!(UsageClass::Office.live_load_kpa(), 2.5);
        assert_eq!(UsageClass::Commercial.live_load_kpa(), 3.0);
        assert_eq!(UsageClass::Industrial.live_load_kpa(), 5.0);
    }

    #[test]
    fn test_live_loads_ascend_with_severity() {
        let loads: Vec<f64> = UsageClass::ALL.iter().map(|u| u.live_load_kpa()).collect();
        assert!(loads.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_key_serialization() {
        assert_eq!(serde_json::to_string(&SoilClass::Medium).unwrap(), "\"medium\"");
        assert_eq!(
            serde_json::to_string(&UsageClass::Residential).unwrap(),
            "\"residential\""
        );
        let soil: SoilClass = serde_json::from_str("\"stiff\"").unwrap();
        assert_eq!(soil, SoilClass::Stiff);
    }
}
