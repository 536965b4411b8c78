//! # Beam Flexure
//!
//! Simply-supported beam moment/shear and longitudinal bar selection.
//!
//! ## Assumptions
//!
//! - Simply-supported span: `Mu = w L²/8`, `Vu = w L/2`
//! - Effective depth approximated as overall depth minus a 60 mm cover
//!   allowance, floored at 50 mm for degenerate inputs
//! - Internal lever arm `jd = 0.9 d`
//! - Multi-storey demand reported as the per-floor value times the floor
//!   count. This is an envelope sum over repeated floors, not a frame
//!   analysis; bar selection stays at the per-floor level, matching the
//!   single-span approximation it comes from.

use serde::{Deserialize, Serialize};

use crate::grid::{Direction, GridNode};
use crate::rebar::{pick_bars, BarArrangement};
use crate::warnings::WarningCode;

use super::PHI_FLEXURE;

/// Cover allowance from overall depth to steel centroid (m)
const COVER_ALLOWANCE_M: f64 = 0.06;

/// Minimum effective depth clamp (m)
const MIN_EFFECTIVE_DEPTH_M: f64 = 0.05;

/// Flexural design of one span at the per-floor level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamFlexure {
    /// Factored moment per floor, wL²/8 (kNm)
    pub mu_knm: f64,
    /// Required tension steel area (mm²)
    pub required_steel_area_mm2: f64,
    /// Selected bars
    pub bars: BarArrangement,
}

/// Design result for one beam span.
///
/// ## JSON Example
///
/// ```json
/// {
///   "direction": "X",
///   "from": { "i": 0, "j": 1 },
///   "to": { "i": 1, "j": 1 },
///   "span_m": 5.0,
///   "w_uls_kn_per_m": 38.375,
///   "mu_knm": 599.6,
///   "vu_kn": 479.7,
///   "required_steel_area_mm2": 759.2,
///   "bars": { "size": "D16", "count": 4 },
///   "warnings": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    /// Span axis
    pub direction: Direction,
    /// Start node
    pub from: GridNode,
    /// End node
    pub to: GridNode,
    /// Clear span taken as the bay width (m)
    pub span_m: f64,
    /// Factored line load (kN/m)
    pub w_uls_kn_per_m: f64,
    /// Factored moment, floor-count envelope (kNm)
    pub mu_knm: f64,
    /// Factored shear per support, floor-count envelope (kN)
    pub vu_kn: f64,
    /// Required tension steel per floor (mm²)
    pub required_steel_area_mm2: f64,
    /// Selected bars
    pub bars: BarArrangement,
    /// Adequacy warnings
    pub warnings: Vec<WarningCode>,
}

/// Effective depth after the cover allowance, clamped to the minimum.
pub fn effective_depth_m(depth_m: f64) -> f64 {
    (depth_m - COVER_ALLOWANCE_M).max(MIN_EFFECTIVE_DEPTH_M)
}

/// Flexural design of a simply-supported span under a factored line load.
///
/// `As = Mu·1e6 / (phi · fy · jd · 1e3)` with Mu in kNm, fy in MPa, jd in
/// meters, As in mm².
pub fn beam_flexure(
    span_m: f64,
    w_uls_kn_per_m: f64,
    depth_m: f64,
    fy_mpa: f64,
) -> BeamFlexure {
    let mu_knm = w_uls_kn_per_m * span_m * span_m / 8.0;
    let jd_m = 0.9 * effective_depth_m(depth_m);
    let required_steel_area_mm2 = mu_knm * 1e6 / (PHI_FLEXURE * fy_mpa * jd_m * 1e3);
    let bars = pick_bars(required_steel_area_mm2);
    BeamFlexure {
        mu_knm,
        required_steel_area_mm2,
        bars,
    }
}

/// Assemble the full result for one beam span, scaling moment and shear by
/// the floor count.
#[allow(clippy::too_many_arguments)]
pub fn design_beam(
    direction: Direction,
    from: GridNode,
    to: GridNode,
    span_m: f64,
    w_uls_kn_per_m: f64,
    depth_m: f64,
    fy_mpa: f64,
    floors: u32,
) -> BeamResult {
    let flexure = beam_flexure(span_m, w_uls_kn_per_m, depth_m, fy_mpa);
    let floors_f = floors as f64;
    BeamResult {
        direction,
        from,
        to,
        span_m,
        w_uls_kn_per_m,
        mu_knm: flexure.mu_knm * floors_f,
        vu_kn: w_uls_kn_per_m * span_m / 2.0 * floors_f,
        required_steel_area_mm2: flexure.required_steel_area_mm2,
        bars: flexure.bars,
        warnings: Vec::new(),
    }
}
