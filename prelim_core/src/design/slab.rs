//! # One-Way Slab Strips
//!
//! Per-meter strip design for one-way slabs. The representative span per
//! axis is the average bay width, so the engine emits at most one strip
//! result per direction.
//!
//! Bar selection iterates diameters 10/12/16 mm ascending and, within each
//! diameter, spacings from 100 to 300 mm in 25 mm steps; the first pair whose
//! provided area per meter reaches the requirement is taken. The fallback,
//! when nothing in range is adequate, is 16 mm at 100 mm regardless of
//! adequacy.

use serde::{Deserialize, Serialize};

use crate::grid::Direction;
use crate::rebar::BarSize;
use crate::warnings::WarningCode;

use super::PHI_FLEXURE;

/// Cover allowance from slab thickness to steel centroid (m)
const COVER_ALLOWANCE_M: f64 = 0.03;

/// Minimum effective depth clamp (m)
const MIN_EFFECTIVE_DEPTH_M: f64 = 0.02;

/// Candidate spacings (mm): 100..=300 step 25
const SPACING_MIN_MM: u32 = 100;
const SPACING_MAX_MM: u32 = 300;
const SPACING_STEP_MM: u32 = 25;

/// Bars at a repeating spacing, per meter of slab width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlabBar {
    /// Bar size
    pub size: BarSize,
    /// Center-to-center spacing (mm)
    pub spacing_mm: u32,
}

impl SlabBar {
    /// Provided steel area per meter width (mm²/m)
    pub fn area_per_m_mm2(&self) -> f64 {
        (1000.0 / self.spacing_mm as f64) * self.size.area_mm2()
    }
}

impl std::fmt::Display for SlabBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}mm", self.size, self.spacing_mm)
    }
}

/// Fallback when no in-range (diameter, spacing) pair is adequate
pub const FALLBACK_SLAB_BAR: SlabBar = SlabBar {
    size: BarSize::D16,
    spacing_mm: 100,
};

/// Design result for a one-way strip in one direction.
///
/// ## JSON Example
///
/// ```json
/// {
///   "direction": "X",
///   "span_m": 5.0,
///   "w_uls_kpa": 8.75,
///   "mu_knm_per_m": 27.34,
///   "bar": { "size": "D10", "spacing_mm": 100 },
///   "warnings": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabResult {
    /// Strip span axis
    pub direction: Direction,
    /// Representative span, the average bay width on this axis (m)
    pub span_m: f64,
    /// Factored pressure (kPa)
    pub w_uls_kpa: f64,
    /// Factored moment per meter width (kNm/m)
    pub mu_knm_per_m: f64,
    /// Selected bar and spacing
    pub bar: SlabBar,
    /// Adequacy warnings
    pub warnings: Vec<WarningCode>,
}

/// Effective depth of the strip after the cover allowance.
pub fn effective_depth_m(thickness_m: f64) -> f64 {
    (thickness_m - COVER_ALLOWANCE_M).max(MIN_EFFECTIVE_DEPTH_M)
}

/// Select the first adequate (diameter, spacing) pair for a required steel
/// area per meter width.
pub fn pick_slab_bar(required_area_per_m_mm2: f64) -> SlabBar {
    for size in BarSize::SLAB {
        let mut spacing_mm = SPACING_MIN_MM;
        while spacing_mm <= SPACING_MAX_MM {
            let candidate = SlabBar { size, spacing_mm };
            if candidate.area_per_m_mm2() >= required_area_per_m_mm2 {
                return candidate;
            }
            spacing_mm += SPACING_STEP_MM;
        }
    }
    FALLBACK_SLAB_BAR
}

/// One-way strip design: moment per meter width and bar selection.
///
/// The factored pressure in kPa acts as kN/m on the unit-width strip, so
/// `Mu = w L²/8` in kNm per meter.
pub fn design_slab_strip(
    direction: Direction,
    span_m: f64,
    w_uls_kpa: f64,
    thickness_m: f64,
    fy_mpa: f64,
) -> SlabResult {
    let mu_knm_per_m = w_uls_kpa * span_m * span_m / 8.0;
    let jd_m = 0.9 * effective_depth_m(thickness_m);
    let required_area_per_m_mm2 = mu_knm_per_m * 1e6 / (PHI_FLEXURE * fy_mpa * jd_m * 1e3);
    SlabResult {
        direction,
        span_m,
        w_uls_kpa,
        mu_knm_per_m,
        bar: pick_slab_bar(required_area_per_m_mm2),
        warnings: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_depth_clamp() {
        assert!((effective_depth_m(0.125) - 0.095).abs() < 1e-12);
        assert_eq!(effective_depth_m(0.04), 0.02);
    }

    #[test]
    fn test_area_per_meter() {
        let bar = SlabBar {
            size: BarSize::D10,
            spacing_mm: 100,
        };
        // (1000/100) * 78.54 = 785.4 mm²/m
        assert!((bar.area_per_m_mm2() - 785.4).abs() < 1e-9);
    }

    #[test]
    fn test_pick_prefers_smallest_diameter() {
        // 10mm at 100 provides 785.4; anything below that picks D10 @ 100
        let bar = pick_slab_bar(700.0);
        assert_eq!(bar.size, BarSize::D10);
        assert_eq!(bar.spacing_mm, 100);
    }

    #[test]
    fn test_pick_escalates_diameter() {
        // above 785.4 the 10mm column is exhausted (its densest spacing is
        // first), so selection moves to 12mm @ 100 (1131 mm²/m)
        let bar = pick_slab_bar(900.0);
        assert_eq!(bar.size, BarSize::D12);
        assert_eq!(bar.spacing_mm, 100);
    }

    #[test]
    fn test_pick_fallback() {
        // beyond 16mm @ 100 (2010.6 mm²/m) nothing is adequate
        let bar = pick_slab_bar(3000.0);
        assert_eq!(bar, FALLBACK_SLAB_BAR);
        assert!(bar.area_per_m_mm2() < 3000.0);
    }

    #[test]
    fn test_strip_design_default_pressure() {
        // ULS 8.75 kPa over a 5 m strip, 125 mm slab, fy 500:
        // Mu = 8.75*25/8 = 27.34375 kNm/m
        // As = 27.34375e6 / (0.9*500*0.0855*1e3) = 710.7 mm²/m -> 10mm @ 100
        let result = design_slab_strip(Direction::X, 5.0, 8.75, 0.125, 500.0);
        assert!((result.mu_knm_per_m - 27.34375).abs() < 1e-9);
        assert_eq!(result.bar.size, BarSize::D10);
        assert_eq!(result.bar.spacing_mm, 100);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_result_serialization() {
        let result = design_slab_strip(Direction::Y, 4.0, 8.75, 0.125, 500.0);
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: SlabResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
