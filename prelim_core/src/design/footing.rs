//! # Isolated Footing Sizing
//!
//! Square isolated footings sized from the allowable-bearing constraint.
//!
//! The service load is back-calculated from the factored column load as
//! `Pu / 1.5` (an average load factor, not a proper unfactored combination).
//! The plan side is the square root of the required area, rounded to 0.05 m
//! and clamped to [0.8, 3.0] m; the depth is the linear heuristic
//! `0.5 + Pu/5000` clamped to [0.4, 1.0] m, not a punching-shear check.
//! Both shortcuts are preliminary-stage conventions; keeping them stable
//! keeps saved estimates comparable across versions.

use serde::{Deserialize, Serialize};

use crate::grid::GridNode;
use crate::warnings::WarningCode;

/// Ratio between factored and approximate service load
const AVERAGE_LOAD_FACTOR: f64 = 1.5;

/// Plan side rounding: increments per meter (0.05 m steps)
const SIDE_INCREMENTS_PER_M: f64 = 20.0;

/// Plan side bounds (m)
const MIN_SIDE_M: f64 = 0.8;
const MAX_SIDE_M: f64 = 3.0;

/// Depth heuristic bounds (m)
const MIN_DEPTH_M: f64 = 0.4;
const MAX_DEPTH_M: f64 = 1.0;

/// Design result for one isolated footing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "node": { "i": 1, "j": 1 },
///   "required_area_m2": 3.42,
///   "side_m": 1.85,
///   "depth_m": 0.71,
///   "bearing_pressure_kpa": 200.0,
///   "warnings": ["FootingBearingExceeded"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingResult {
    /// Grid node of the supported column
    pub node: GridNode,
    /// Required plan area from the bearing constraint (m²)
    pub required_area_m2: f64,
    /// Chosen square plan side (m)
    pub side_m: f64,
    /// Chosen depth (m)
    pub depth_m: f64,
    /// Bearing pressure under the approximate service load (kPa)
    pub bearing_pressure_kpa: f64,
    /// Adequacy warnings (bearing overstress)
    pub warnings: Vec<WarningCode>,
}

impl FootingResult {
    /// Concrete volume of this footing (m³)
    pub fn volume_m3(&self) -> f64 {
        self.side_m * self.side_m * self.depth_m
    }
}

/// Size the footing under a column with factored load `pu_kn` on soil with
/// the given allowable bearing capacity.
pub fn design_footing(node: GridNode, pu_kn: f64, allowable_bearing_kpa: f64) -> FootingResult {
    let service_kn = pu_kn / AVERAGE_LOAD_FACTOR;
    let required_area_m2 = service_kn / allowable_bearing_kpa;
    let raw_side_m = required_area_m2.sqrt();
    let side_m = ((raw_side_m * SIDE_INCREMENTS_PER_M).round() / SIDE_INCREMENTS_PER_M)
        .clamp(MIN_SIDE_M, MAX_SIDE_M);
    let depth_m = (0.5 + pu_kn / 5000.0).clamp(MIN_DEPTH_M, MAX_DEPTH_M);
    let bearing_pressure_kpa = service_kn / (side_m * side_m);
    let warnings = if bearing_pressure_kpa > allowable_bearing_kpa {
        vec![WarningCode::FootingBearingExceeded]
    } else {
        Vec::new()
    };
    FootingResult {
        node,
        required_area_m2,
        side_m,
        depth_m,
        bearing_pressure_kpa,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_rounding_to_increment() {
        // Pu 294.6875 kN on 200 kPa: area 0.9823 m², side 0.9911 -> 1.0 m
        let footing = design_footing(GridNode::new(0, 0), 294.6875, 200.0);
        assert!((footing.side_m - 1.0).abs() < 1e-12);
        assert!(footing.warnings.is_empty());
    }

    #[test]
    fn test_warning_iff_pressure_exceeds_bearing() {
        // Pu 1026.875 kN on 200 kPa: side rounds down to 1.85 m and the
        // pressure lands just above allowable
        let footing = design_footing(GridNode::new(1, 1), 1026.875, 200.0);
        assert!((footing.side_m - 1.85).abs() < 1e-12);
        assert!(footing.bearing_pressure_kpa > 200.0);
        assert_eq!(footing.warnings, vec![WarningCode::FootingBearingExceeded]);

        // light load: the clamped 0.8 m minimum leaves ample margin
        let ok = design_footing(GridNode::new(0, 0), 150.0, 300.0);
        assert_eq!(ok.side_m, 0.8);
        assert!(ok.bearing_pressure_kpa <= 300.0);
        assert!(ok.warnings.is_empty());
    }

    #[test]
    fn test_side_clamped_to_bounds() {
        let tiny = design_footing(GridNode::new(0, 0), 10.0, 300.0);
        assert_eq!(tiny.side_m, 0.8);

        let huge = design_footing(GridNode::new(0, 0), 10_000.0, 100.0);
        assert_eq!(huge.side_m, 3.0);
        // clamped plan area cannot carry the load
        assert_eq!(huge.warnings, vec![WarningCode::FootingBearingExceeded]);
    }

    #[test]
    fn test_depth_heuristic_bounds() {
        assert_eq!(design_footing(GridNode::new(0, 0), 0.0, 200.0).depth_m, 0.5);
        // Pu 1026.875: 0.5 + 0.205375 = 0.705375
        let mid = design_footing(GridNode::new(0, 0), 1026.875, 200.0);
        assert!((mid.depth_m - 0.705375).abs() < 1e-12);
        assert_eq!(design_footing(GridNode::new(0, 0), 9000.0, 200.0).depth_m, 1.0);
    }

    #[test]
    fn test_volume() {
        let footing = design_footing(GridNode::new(0, 0), 294.6875, 200.0);
        assert!((footing.volume_m3() - 1.0 * 1.0 * 0.5589375).abs() < 1e-12);
    }

    #[test]
    fn test_result_serialization() {
        let footing = design_footing(GridNode::new(2, 1), 555.625, 200.0);
        let json = serde_json::to_string(&footing).unwrap();
        let roundtrip: FootingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(footing, roundtrip);
    }
}
