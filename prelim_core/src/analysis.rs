//! # Analysis Orchestration
//!
//! The single entry point of the engine: [`analyze`] consumes a
//! [`ProjectData`] snapshot and produces an immutable [`AnalysisResults`].
//! No state survives between calls and nothing in the input is mutated; the
//! computation is total and cheap enough to rerun on every edit.
//!
//! Output ordering is part of the contract consumed by display layers:
//! columns iterate the grid with `i` outer and `j` inner; X-direction beams
//! come before Y-direction beams (X spans row by row, Y spans column by
//! column); footings follow the column order.
//!
//! ## Example
//!
//! ```rust
//! use prelim_core::analysis::analyze;
//! use prelim_core::project::ProjectData;
//!
//! let results = analyze(&ProjectData::default());
//! assert_eq!(results.columns.len(), 12);
//! assert!(results.cost.total_cost > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::design::{
    beam::design_beam, column::design_column, footing::design_footing, slab::design_slab_strip,
    BeamResult, ColumnResult, FootingResult, SlabResult,
};
use crate::grid::{Direction, GridNode};
use crate::loads::{beam_self_weight_kn_per_m, slab_self_weight_kpa, GravityLoad};
use crate::project::ProjectData;
use crate::quantities::{aggregate, BoqItem, CostSummary};
use crate::warnings::WarningCode;

/// Complete output of one analysis run.
///
/// Consumers read this; they never mutate it. Per-member warnings live on
/// the members; `warnings` carries project-level notices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Sized columns, grid order (`i` outer, `j` inner)
    pub columns: Vec<ColumnResult>,
    /// Sized beams, X direction first
    pub beams: Vec<BeamResult>,
    /// One-way slab strips, X then Y
    pub slabs: Vec<SlabResult>,
    /// Isolated footings, column order
    pub footings: Vec<FootingResult>,
    /// Bill of quantities
    pub boq: Vec<BoqItem>,
    /// Cost summary
    pub cost: CostSummary,
    /// Project-level warnings
    pub warnings: Vec<WarningCode>,
}

/// Run the full design pass over a project snapshot.
pub fn analyze(project: &ProjectData) -> AnalysisResults {
    let grid = &project.grid;
    let building = &project.building;
    let materials = building.materials;
    let floors = building.floors as f64;

    let live_load_kpa = building.usage.live_load_kpa();
    let bearing_kpa = building.soil.bearing_capacity_kpa();

    let slab_dead_kpa = slab_self_weight_kpa(building.slab_thickness_m) + building.finishes_load_kpa;
    let slab_pressure = GravityLoad {
        dead: slab_dead_kpa,
        live: live_load_kpa,
    };
    let uls_kpa = slab_pressure.factored();
    let beam_weight_kn_per_m = beam_self_weight_kn_per_m(building.beam_width_m, building.beam_depth_m);

    // Columns: point loads from tributary area plus the attributed beam runs
    let mut columns = Vec::new();
    for i in 0..=grid.nx {
        for j in 0..=grid.ny {
            if !grid.has_column(i, j) {
                continue;
            }
            let tributary_m2 = grid.tributary_area_m2(i, j);
            let beam_run_m = grid.tributary_width_x_m(i) + grid.tributary_width_y_m(j);
            let per_floor = GravityLoad {
                dead: slab_dead_kpa * tributary_m2 + beam_weight_kn_per_m * beam_run_m,
                live: live_load_kpa * tributary_m2,
            };
            let ultimate_kn = per_floor.factored() * floors;
            columns.push(design_column(
                GridNode::new(i, j),
                tributary_m2,
                per_floor.service(),
                ultimate_kn,
                materials.fck_mpa,
                materials.fy_mpa,
            ));
        }
    }

    // Beams: every span between two present columns, X direction first
    let mut beams = Vec::new();
    for j in 0..=grid.ny {
        for i in 0..grid.nx {
            if !grid.has_column(i, j) || !grid.has_column(i + 1, j) {
                continue;
            }
            let line = GravityLoad {
                dead: slab_dead_kpa * grid.tributary_width_y_m(j) + beam_weight_kn_per_m,
                live: live_load_kpa * grid.tributary_width_y_m(j),
            };
            beams.push(design_beam(
                Direction::X,
                GridNode::new(i, j),
                GridNode::new(i + 1, j),
                grid.x_spacings_m[i],
                line.factored(),
                building.beam_depth_m,
                materials.fy_mpa,
                building.floors,
            ));
        }
    }
    for i in 0..=grid.nx {
        for j in 0..grid.ny {
            if !grid.has_column(i, j) || !grid.has_column(i, j + 1) {
                continue;
            }
            let line = GravityLoad {
                dead: slab_dead_kpa * grid.tributary_width_x_m(i) + beam_weight_kn_per_m,
                live: live_load_kpa * grid.tributary_width_x_m(i),
            };
            beams.push(design_beam(
                Direction::Y,
                GridNode::new(i, j),
                GridNode::new(i, j + 1),
                grid.y_spacings_m[j],
                line.factored(),
                building.beam_depth_m,
                materials.fy_mpa,
                building.floors,
            ));
        }
    }

    // Slabs: one representative strip per axis, at the average bay width
    let mut slabs = Vec::new();
    let avg_span_x = grid.average_span_x_m();
    if avg_span_x > 0.0 {
        slabs.push(design_slab_strip(
            Direction::X,
            avg_span_x,
            uls_kpa,
            building.slab_thickness_m,
            materials.fy_mpa,
        ));
    }
    let avg_span_y = grid.average_span_y_m();
    if avg_span_y > 0.0 {
        slabs.push(design_slab_strip(
            Direction::Y,
            avg_span_y,
            uls_kpa,
            building.slab_thickness_m,
            materials.fy_mpa,
        ));
    }

    // Footings: one isolated footing per designed column
    let footings: Vec<FootingResult> = columns
        .iter()
        .map(|column| design_footing(column.node, column.ultimate_load_kn, bearing_kpa))
        .collect();

    let (boq, cost) = aggregate(project, &columns, &beams, &slabs, &footings);

    AnalysisResults {
        columns,
        beams,
        slabs,
        footings,
        boq,
        cost,
        warnings: Vec::new(),
    }
}
