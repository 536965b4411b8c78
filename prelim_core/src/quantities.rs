//! # Quantity Takeoff
//!
//! Reduces the sized members into a bill of quantities and a cost summary.
//!
//! Concrete is summed member by member; reinforcement weight is estimated
//! from provided bar areas times member run lengths. The slab steel run
//! length uses `plan_area / span` per floor, a deliberate rough stand-in for
//! a real rebar count; keeping it stable keeps saved estimates comparable
//! across versions.

use serde::{Deserialize, Serialize};

use crate::design::{BeamResult, ColumnResult, FootingResult, SlabResult};
use crate::loads::STEEL_DENSITY_KG_M3;
use crate::project::ProjectData;

/// One line of the bill of quantities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoqItem {
    /// Item name
    pub name: String,
    /// Measurement unit
    pub unit: String,
    /// Quantity in `unit`
    pub quantity: f64,
}

/// Aggregated volumes, weights, and cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Total concrete volume (m³), rounded to 2 decimals
    pub concrete_m3: f64,
    /// Total reinforcement weight (kg), rounded to 1 decimal
    pub steel_kg: f64,
    /// Total cost in the currency of the rates, rounded to whole units
    pub total_cost: f64,
}

/// Round to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let m = 10f64.powi(decimals);
    (value * m).round() / m
}

/// Sum concrete volumes and steel weights over all sized members and price
/// them with the project rates.
pub fn aggregate(
    project: &ProjectData,
    columns: &[ColumnResult],
    beams: &[BeamResult],
    slabs: &[SlabResult],
    footings: &[FootingResult],
) -> (Vec<BoqItem>, CostSummary) {
    let building = &project.building;
    let floors = building.floors as f64;
    let total_height_m = floors * building.floor_height_m;
    let plan_area_m2 = project.grid.plan_area_m2();

    let mut concrete_m3 = 0.0;
    for column in columns {
        let side = column.section.size_m();
        concrete_m3 += side * side * total_height_m;
    }
    for beam in beams {
        concrete_m3 += building.beam_width_m * building.beam_depth_m * beam.span_m * floors;
    }
    concrete_m3 += plan_area_m2 * building.slab_thickness_m * floors;
    for footing in footings {
        concrete_m3 += footing.volume_m3();
    }

    let mut steel_kg = 0.0;
    for column in columns {
        let ast_m2 = column.section.bars.area_mm2() / 1e6;
        steel_kg += ast_m2 * total_height_m * STEEL_DENSITY_KG_M3;
    }
    for beam in beams {
        let ast_m2 = beam.bars.area_mm2() / 1e6;
        steel_kg += ast_m2 * beam.span_m * floors * STEEL_DENSITY_KG_M3;
    }
    for slab in slabs {
        let as_per_m_m2 = slab.bar.area_per_m_mm2() / 1e6;
        // run length from plan_area/span, a documented approximation
        let run_m = plan_area_m2 / slab.span_m.max(0.1) * floors;
        steel_kg += as_per_m_m2 * run_m * STEEL_DENSITY_KG_M3;
    }

    let boq = vec![
        BoqItem {
            name: "Concrete (total)".to_string(),
            unit: "m³".to_string(),
            quantity: round_to(concrete_m3, 2),
        },
        BoqItem {
            name: "Steel (total)".to_string(),
            unit: "kg".to_string(),
            quantity: round_to(steel_kg, 1),
        },
    ];

    let cost = CostSummary {
        concrete_m3: round_to(concrete_m3, 2),
        steel_kg: round_to(steel_kg, 1),
        total_cost: round_to(
            concrete_m3 * project.costs.concrete_rate_per_m3
                + steel_kg * project.costs.steel_rate_per_kg,
            0,
        ),
    };

    (boq, cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::column::ColumnSection;
    use crate::grid::GridNode;
    use crate::rebar::{BarArrangement, BarSize};

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(149.3330429, 2), 149.33);
        assert_eq!(round_to(4744.83516, 1), 4744.8);
        assert_eq!(round_to(1_865_929.25, 0), 1_865_929.0);
        assert_eq!(round_to(2.675, 1), 2.7);
    }

    #[test]
    fn test_empty_members_leave_only_slab_plate() {
        let project = ProjectData::default();
        let (boq, cost) = aggregate(&project, &[], &[], &[], &[]);
        // 120 m² * 0.125 m * 5 floors = 75 m³
        assert_eq!(cost.concrete_m3, 75.0);
        assert_eq!(cost.steel_kg, 0.0);
        assert_eq!(boq.len(), 2);
        assert_eq!(boq[0].unit, "m³");
        assert_eq!(boq[1].unit, "kg");
    }

    #[test]
    fn test_single_column_contribution() {
        let project = ProjectData::default();
        let column = ColumnResult {
            node: GridNode::new(0, 0),
            tributary_area_m2: 5.0,
            service_load_per_floor_kn: 45.8,
            ultimate_load_kn: 294.7,
            section: ColumnSection {
                size_mm: 300,
                bars: BarArrangement {
                    size: BarSize::D12,
                    count: 8,
                },
                axial_capacity_kn: 1524.7,
            },
            warnings: Vec::new(),
        };
        let (_, with_col) = aggregate(&project, &[column], &[], &[], &[]);
        let (_, base) = aggregate(&project, &[], &[], &[], &[]);
        // 0.3*0.3*16 = 1.44 m³ of concrete
        assert!((with_col.concrete_m3 - base.concrete_m3 - 1.44).abs() < 0.005 + 1e-9);
        // 904.8e-6 * 16 * 7850 = 113.64 kg of steel
        assert!((with_col.steel_kg - 113.6).abs() < 0.05 + 1e-9);
    }

    #[test]
    fn test_cost_uses_unrounded_totals() {
        let mut project = ProjectData::default();
        project.costs.concrete_rate_per_m3 = 1.0;
        project.costs.steel_rate_per_kg = 0.0;
        let (_, cost) = aggregate(&project, &[], &[], &[], &[]);
        assert_eq!(cost.total_cost, 75.0);
    }
}
