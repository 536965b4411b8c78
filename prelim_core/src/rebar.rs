//! Standard Reinforcement Bars
//!
//! Deformed bar diameters with nominal cross-section areas, and the discrete
//! bar-group selection used by the column and beam designers.
//!
//! ## Areas
//!
//! Areas are the tabulated nominal values (mm²) used throughout the sizing
//! engine; they are part of the observable output contract and must not be
//! recomputed from pi*d²/4 at higher precision.

use serde::{Deserialize, Serialize};

/// Standard deformed bar size designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BarSize {
    /// 10 mm (78.54 mm²)
    D10,
    /// 12 mm (113.10 mm²)
    D12,
    /// 16 mm (201.06 mm²)
    #[default]
    D16,
    /// 20 mm (314.16 mm²)
    D20,
    /// 25 mm (490.87 mm²)
    D25,
    /// 28 mm (615.75 mm²)
    D28,
    /// 32 mm (804.25 mm²)
    D32,
}

impl BarSize {
    /// All bar sizes, ascending by diameter
    pub const ALL: [BarSize; 7] = [
        BarSize::D10,
        BarSize::D12,
        BarSize::D16,
        BarSize::D20,
        BarSize::D25,
        BarSize::D28,
        BarSize::D32,
    ];

    /// Sizes considered for column and beam longitudinal steel, ascending
    pub const LONGITUDINAL: [BarSize; 6] = [
        BarSize::D12,
        BarSize::D16,
        BarSize::D20,
        BarSize::D25,
        BarSize::D28,
        BarSize::D32,
    ];

    /// Sizes considered for slab strips, ascending
    pub const SLAB: [BarSize; 3] = [BarSize::D10, BarSize::D12, BarSize::D16];

    /// Nominal diameter (mm)
    pub fn diameter_mm(&self) -> u32 {
        match self {
            BarSize::D10 => 10,
            BarSize::D12 => 12,
            BarSize::D16 => 16,
            BarSize::D20 => 20,
            BarSize::D25 => 25,
            BarSize::D28 => 28,
            BarSize::D32 => 32,
        }
    }

    /// Nominal cross-section area (mm²), tabulated
    pub fn area_mm2(&self) -> f64 {
        match self {
            BarSize::D10 => 78.54,
            BarSize::D12 => 113.10,
            BarSize::D16 => 201.06,
            BarSize::D20 => 314.16,
            BarSize::D25 => 490.87,
            BarSize::D28 => 615.75,
            BarSize::D32 => 804.25,
        }
    }
}

impl std::fmt::Display for BarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}mm", self.diameter_mm())
    }
}

/// A group of identical bars (e.g., 8-12mm column verticals)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarArrangement {
    /// Bar size
    pub size: BarSize,
    /// Number of bars
    pub count: u32,
}

impl BarArrangement {
    /// Total provided steel area (mm²)
    pub fn area_mm2(&self) -> f64 {
        self.size.area_mm2() * self.count as f64
    }
}

impl std::fmt::Display for BarArrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.count, self.size)
    }
}

/// Smallest bar count considered per diameter
const MIN_BARS: u32 = 4;
/// Largest bar count considered per diameter
const MAX_BARS: u32 = 12;

/// Fallback arrangement when no in-range group reaches the required area.
///
/// 16 bars of 32 mm; its area may still fall short of very large demands,
/// in which case the caller flags a deficiency warning.
pub const FALLBACK_BARS: BarArrangement = BarArrangement {
    size: BarSize::D32,
    count: 16,
};

/// Select a bar group providing at least `required_area_mm2`.
///
/// For each diameter (ascending), counts run 4..=12 in steps of 2 and the
/// first adequate count is that diameter's candidate. Across diameters the
/// candidate with the smallest total provided area wins, which is not
/// necessarily the smallest diameter. Falls back to [`FALLBACK_BARS`] when
/// nothing in range is adequate.
///
/// # Example
/// ```
/// use prelim_core::rebar::{pick_bars, BarSize};
///
/// let bars = pick_bars(900.0);
/// assert_eq!(bars.size, BarSize::D12);
/// assert_eq!(bars.count, 8);
/// ```
pub fn pick_bars(required_area_mm2: f64) -> BarArrangement {
    let mut best: Option<BarArrangement> = None;
    for size in BarSize::LONGITUDINAL {
        let mut count = MIN_BARS;
        while count <= MAX_BARS {
            let candidate = BarArrangement { size, count };
            if candidate.area_mm2() >= required_area_mm2 {
                let better = match best {
                    Some(b) => candidate.area_mm2() < b.area_mm2(),
                    None => true,
                };
                if better {
                    best = Some(candidate);
                }
                break;
            }
            count += 2;
        }
    }
    best.unwrap_or(FALLBACK_BARS)
}
