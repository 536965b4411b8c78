//! # Load Assembly
//!
//! Gravity load bookkeeping and the ultimate-limit-state combination.
//!
//! The engine designs for a single fixed ULS combination, `1.2D + 1.6L`;
//! every member demand (slab pressure, beam line load, column axial load)
//! is factored through [`GravityLoad::factored`] so the factors live in
//! exactly one place.
//!
//! ## Example
//!
//! ```rust
//! use prelim_core::loads::{slab_self_weight_kpa, GravityLoad};
//!
//! let dead = slab_self_weight_kpa(0.125) + 1.5; // self-weight + finishes
//! let loads = GravityLoad { dead, live: 2.0 };
//! assert!((loads.factored() - 8.75).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

/// Unit weight of reinforced concrete (kN/m³)
pub const GAMMA_CONCRETE_KN_M3: f64 = 25.0;

/// Density of reinforcing steel (kg/m³)
pub const STEEL_DENSITY_KG_M3: f64 = 7850.0;

/// Dead load factor in the ULS combination
pub const DEAD_FACTOR: f64 = 1.2;

/// Live load factor in the ULS combination
pub const LIVE_FACTOR: f64 = 1.6;

/// A dead/live load pair in consistent units (kPa for pressures, kN/m for
/// line loads, kN for point loads).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GravityLoad {
    /// Dead load component
    pub dead: f64,
    /// Live load component
    pub live: f64,
}

impl GravityLoad {
    /// Unfactored service-level total, D + L
    pub fn service(&self) -> f64 {
        self.dead + self.live
    }

    /// Factored ULS total, 1.2D + 1.6L
    pub fn factored(&self) -> f64 {
        factored_load(self.dead, self.live)
    }
}

/// The fixed ULS combination: `1.2 D + 1.6 L`.
pub fn factored_load(dead: f64, live: f64) -> f64 {
    DEAD_FACTOR * dead + LIVE_FACTOR * live
}

/// Slab self-weight pressure (kPa) for a given thickness (m).
pub fn slab_self_weight_kpa(thickness_m: f64) -> f64 {
    thickness_m * GAMMA_CONCRETE_KN_M3
}

/// Beam self-weight line load (kN/m) for a rectangular section.
pub fn beam_self_weight_kn_per_m(width_m: f64, depth_m: f64) -> f64 {
    width_m * depth_m * GAMMA_CONCRETE_KN_M3
}
