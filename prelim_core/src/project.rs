//! # Project Data Structures
//!
//! [`ProjectData`] is the engine's input snapshot: grid, building
//! specification, and cost rates. It is owned by the caller (UI or store);
//! the engine only reads it. [`Project`] wraps a snapshot with identity and
//! timestamps for the file-backed store; projects serialize to `.plm`
//! (Prelim) files as human-readable JSON.
//!
//! ## Example
//!
//! ```rust
//! use prelim_core::project::{Project, ProjectData};
//!
//! let data = ProjectData::default();
//! assert!(data.validate().is_ok());
//!
//! let project = Project::new("Five-story residential", data);
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("Five-story residential"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{SoilClass, UsageClass};
use crate::errors::{DesignError, DesignResult};
use crate::grid::GridSpec;

/// Current schema version for .plm files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Concrete and steel strengths used in member sizing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Concrete cylinder compressive strength f'c (MPa)
    pub fck_mpa: f64,
    /// Steel yield strength fy (MPa)
    pub fy_mpa: f64,
}

impl Default for MaterialSpec {
    fn default() -> Self {
        MaterialSpec {
            fck_mpa: 25.0,
            fy_mpa: 500.0,
        }
    }
}

/// Foundation system selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoundationType {
    /// Isolated square footings under each column
    #[default]
    Isolated,
    /// Combined footings (not sized by this engine)
    Combined,
    /// Raft foundation (not sized by this engine)
    Raft,
}

/// Building-level inputs shared by every member design.
///
/// The optional wind speed and seismic zone fields are accepted and carried
/// through persistence for forward compatibility; the current engine does
/// not read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingSpec {
    /// Number of floors (>= 1)
    pub floors: u32,
    /// Storey height (m)
    pub floor_height_m: f64,
    /// Occupancy class, source of the live load
    pub usage: UsageClass,
    /// Soil class, source of the allowable bearing capacity
    pub soil: SoilClass,
    /// Concrete/steel strengths
    pub materials: MaterialSpec,
    /// Slab thickness (m)
    pub slab_thickness_m: f64,
    /// Beam width (m)
    pub beam_width_m: f64,
    /// Beam overall depth (m)
    pub beam_depth_m: f64,
    /// Foundation system
    pub foundation_type: FoundationType,
    /// Free-text site location
    #[serde(default)]
    pub location: String,
    /// Basic wind speed (m/s), reserved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_wind_speed_ms: Option<f64>,
    /// Seismic zone designation, reserved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seismic_zone: Option<String>,
    /// Superimposed dead load from finishes (kPa)
    pub finishes_load_kpa: f64,
}

impl Default for BuildingSpec {
    fn default() -> Self {
        BuildingSpec {
            floors: 5,
            floor_height_m: 3.2,
            usage: UsageClass::Residential,
            soil: SoilClass::Medium,
            materials: MaterialSpec::default(),
            slab_thickness_m: 0.125,
            beam_width_m: 0.25,
            beam_depth_m: 0.45,
            foundation_type: FoundationType::Isolated,
            location: String::new(),
            basic_wind_speed_ms: None,
            seismic_zone: None,
            finishes_load_kpa: 1.5,
        }
    }
}

impl BuildingSpec {
    /// Validate field ranges.
    pub fn validate(&self) -> DesignResult<()> {
        if self.floors == 0 {
            return Err(DesignError::invalid_input(
                "floors",
                self.floors.to_string(),
                "Building must have at least one floor",
            ));
        }
        for (field, value) in [
            ("floor_height_m", self.floor_height_m),
            ("slab_thickness_m", self.slab_thickness_m),
            ("beam_width_m", self.beam_width_m),
            ("beam_depth_m", self.beam_depth_m),
            ("fck_mpa", self.materials.fck_mpa),
            ("fy_mpa", self.materials.fy_mpa),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DesignError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be a positive number",
                ));
            }
        }
        if !self.finishes_load_kpa.is_finite() || self.finishes_load_kpa < 0.0 {
            return Err(DesignError::invalid_input(
                "finishes_load_kpa",
                self.finishes_load_kpa.to_string(),
                "Finishes load cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Unit rates used by the cost summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostInputs {
    /// Concrete rate (currency per m³)
    pub concrete_rate_per_m3: f64,
    /// Reinforcement rate (currency per kg)
    pub steel_rate_per_kg: f64,
}

impl Default for CostInputs {
    fn default() -> Self {
        CostInputs {
            concrete_rate_per_m3: 9000.0,
            steel_rate_per_kg: 110.0,
        }
    }
}

impl CostInputs {
    /// Validate field ranges.
    pub fn validate(&self) -> DesignResult<()> {
        for (field, value) in [
            ("concrete_rate_per_m3", self.concrete_rate_per_m3),
            ("steel_rate_per_kg", self.steel_rate_per_kg),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DesignError::invalid_input(
                    field,
                    value.to_string(),
                    "Rate cannot be negative",
                ));
            }
        }
        Ok(())
    }
}

/// Full analysis input snapshot: grid + building + cost rates.
///
/// The default value is the standard demo project: 3x2 bays of 5 m x 4 m,
/// five residential floors on medium soil.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectData {
    /// Structural grid
    pub grid: GridSpec,
    /// Building specification
    pub building: BuildingSpec,
    /// Cost rates
    pub costs: CostInputs,
}

impl ProjectData {
    /// Validate the whole snapshot (grid shape, positive dimensions, rates).
    pub fn validate(&self) -> DesignResult<()> {
        self.grid.validate()?;
        self.building.validate()?;
        self.costs.validate()?;
        Ok(())
    }
}

/// A stored project: identity, timestamps, and the data snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier
    pub id: Uuid,
    /// File/store metadata
    pub meta: ProjectMeta,
    /// The analysis input snapshot
    pub data: ProjectData,
}

/// Metadata kept alongside a stored project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMeta {
    /// Schema version (for migration compatibility)
    pub version: String,
    /// User-facing project name
    pub name: String,
    /// When the project was created
    pub created: DateTime<Utc>,
    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

impl Project {
    /// Create a new project wrapping `data`.
    pub fn new(name: impl Into<String>, data: ProjectData) -> Self {
        let now = Utc::now();
        Project {
            id: Uuid::new_v4(),
            meta: ProjectMeta {
                version: SCHEMA_VERSION.to_string(),
                name: name.into(),
                created: now,
                modified: now,
            },
            data,
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_project_matches_demo() {
        let data = ProjectData::default();
        assert_eq!(data.grid.nx, 3);
        assert_eq!(data.grid.ny, 2);
        assert_eq!(data.grid.x_spacings_m, vec![5.0, 5.0, 5.0]);
        assert_eq!(data.grid.y_spacings_m, vec![4.0, 4.0]);
        assert_eq!(data.building.floors, 5);
        assert_eq!(data.building.floor_height_m, 3.2);
        assert_eq!(data.building.usage, UsageClass::Residential);
        assert_eq!(data.building.soil, SoilClass::Medium);
        assert_eq!(data.building.slab_thickness_m, 0.125);
        assert_eq!(data.costs.concrete_rate_per_m3, 9000.0);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_floors() {
        let mut data = ProjectData::default();
        data.building.floors = 0;
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_dimension() {
        let mut data = ProjectData::default();
        data.building.beam_depth_m = f64::NAN;
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_project_data_roundtrip() {
        let data = ProjectData::default();
        let json = serde_json::to_string(&data).unwrap();
        let roundtrip: ProjectData = serde_json::from_str(&json).unwrap();
        assert_eq!(data, roundtrip);
    }

    #[test]
    fn test_roundtrip_preserves_optional_fields() {
        let mut data = ProjectData::default();
        data.building.basic_wind_speed_ms = Some(52.0);
        data.building.seismic_zone = Some("Z2".to_string());
        data.building.location = "Dhaka".to_string();
        let json = serde_json::to_string(&data).unwrap();
        let roundtrip: ProjectData = serde_json::from_str(&json).unwrap();
        assert_eq!(data, roundtrip);
    }

    #[test]
    fn test_stored_project_roundtrip() {
        let project = Project::new("Test", ProjectData::default());
        let json = serde_json::to_string_pretty(&project).unwrap();
        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(project, roundtrip);
        assert_eq!(roundtrip.meta.version, SCHEMA_VERSION);
    }

    #[test]
    fn test_foundation_type_serialization() {
        assert_eq!(
            serde_json::to_string(&FoundationType::Isolated).unwrap(),
            "\"isolated\""
        );
    }
}
