//! # Grid Geometry
//!
//! The rectangular bay grid: column positions at grid intersections, bay
//! spacings per axis, and the tributary decomposition that attributes slab
//! area and beam runs to each support.
//!
//! ## Tributary policy
//!
//! The tributary half-width on each side of a node is half the adjacent bay
//! spacing; a side with no bay (grid boundary) contributes zero. On a uniform
//! grid this gives an interior node a full panel, an edge node half a panel,
//! and a corner node a quarter panel.
//!
//! ## Example
//!
//! ```rust
//! use prelim_core::grid::GridSpec;
//!
//! let grid = GridSpec::uniform(3, 2, 5.0, 4.0);
//! assert_eq!(grid.tributary_area_m2(1, 1), 20.0); // interior
//! assert_eq!(grid.tributary_area_m2(0, 0), 5.0);  // corner
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};

/// A grid intersection, identified by its axis indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridNode {
    /// Index along the X axis, 0..=nx
    pub i: usize,
    /// Index along the Y axis, 0..=ny
    pub j: usize,
}

impl GridNode {
    /// Create a node reference
    pub fn new(i: usize, j: usize) -> Self {
        GridNode { i, j }
    }
}

/// Principal axis of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Along the X grid lines
    X,
    /// Along the Y grid lines
    Y,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::X => write!(f, "X"),
            Direction::Y => write!(f, "Y"),
        }
    }
}

/// Rectangular structural grid.
///
/// `columns[i][j]` is true when a column stands at node (i,j); the outer
/// vector has `nx + 1` entries and each inner vector `ny + 1`. Labels are
/// optional ETABS-style grid line names (x lines "1", "2", ...; y lines
/// "A", "B", ...).
///
/// ## JSON Example
///
/// ```json
/// {
///   "nx": 2,
///   "ny": 1,
///   "x_spacings_m": [5.0, 5.0],
///   "y_spacings_m": [4.0],
///   "columns": [[true, true], [true, true], [true, true]],
///   "x_labels": ["1", "2", "3"],
///   "y_labels": ["A", "B"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of bays along X (>= 1)
    pub nx: usize,
    /// Number of bays along Y (>= 1)
    pub ny: usize,
    /// Bay widths along X in meters, length nx
    pub x_spacings_m: Vec<f64>,
    /// Bay widths along Y in meters, length ny
    pub y_spacings_m: Vec<f64>,
    /// Column presence per node, (nx+1) x (ny+1)
    pub columns: Vec<Vec<bool>>,
    /// Optional X grid line labels, length nx+1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_labels: Option<Vec<String>>,
    /// Optional Y grid line labels, length ny+1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_labels: Option<Vec<String>>,
}

impl Default for GridSpec {
    /// The sample 3x2 grid, matching the default demo project.
    fn default() -> Self {
        GridSpec::sample()
    }
}

impl GridSpec {
    /// Create a uniform grid with every column present and default labels.
    pub fn uniform(nx: usize, ny: usize, x_spacing_m: f64, y_spacing_m: f64) -> Self {
        GridSpec {
            nx,
            ny,
            x_spacings_m: vec![x_spacing_m; nx],
            y_spacings_m: vec![y_spacing_m; ny],
            columns: vec![vec![true; ny + 1]; nx + 1],
            x_labels: Some(default_x_labels(nx)),
            y_labels: Some(default_y_labels(ny)),
        }
    }

    /// The sample 3x2 grid returned by the layout-inference mock: 5 m bays
    /// in X, 4 m bays in Y, all columns present.
    pub fn sample() -> Self {
        GridSpec::uniform(3, 2, 5.0, 4.0)
    }

    /// Validate array shapes and spacing values.
    pub fn validate(&self) -> DesignResult<()> {
        if self.nx == 0 {
            return Err(DesignError::invalid_input(
                "nx",
                "0",
                "Grid must have at least one bay in X",
            ));
        }
        if self.ny == 0 {
            return Err(DesignError::invalid_input(
                "ny",
                "0",
                "Grid must have at least one bay in Y",
            ));
        }
        if self.x_spacings_m.len() != self.nx {
            return Err(DesignError::grid_shape(
                "x_spacings_m",
                self.nx,
                self.x_spacings_m.len(),
            ));
        }
        if self.y_spacings_m.len() != self.ny {
            return Err(DesignError::grid_shape(
                "y_spacings_m",
                self.ny,
                self.y_spacings_m.len(),
            ));
        }
        if self.columns.len() != self.nx + 1 {
            return Err(DesignError::grid_shape(
                "columns",
                self.nx + 1,
                self.columns.len(),
            ));
        }
        for (i, row) in self.columns.iter().enumerate() {
            if row.len() != self.ny + 1 {
                return Err(DesignError::grid_shape(
                    format!("columns[{}]", i),
                    self.ny + 1,
                    row.len(),
                ));
            }
        }
        for (idx, s) in self.x_spacings_m.iter().enumerate() {
            if !s.is_finite() || *s <= 0.0 {
                return Err(DesignError::invalid_input(
                    format!("x_spacings_m[{}]", idx),
                    s.to_string(),
                    "Bay spacing must be a positive number",
                ));
            }
        }
        for (idx, s) in self.y_spacings_m.iter().enumerate() {
            if !s.is_finite() || *s <= 0.0 {
                return Err(DesignError::invalid_input(
                    format!("y_spacings_m[{}]", idx),
                    s.to_string(),
                    "Bay spacing must be a positive number",
                ));
            }
        }
        if let Some(labels) = &self.x_labels {
            if labels.len() != self.nx + 1 {
                return Err(DesignError::grid_shape("x_labels", self.nx + 1, labels.len()));
            }
        }
        if let Some(labels) = &self.y_labels {
            if labels.len() != self.ny + 1 {
                return Err(DesignError::grid_shape("y_labels", self.ny + 1, labels.len()));
            }
        }
        Ok(())
    }

    /// Whether a column is present at node (i,j). Out-of-range indices and
    /// ragged rows read as absent.
    pub fn has_column(&self, i: usize, j: usize) -> bool {
        self.columns
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(false)
    }

    /// Tributary width along X at grid line `i` (meters).
    ///
    /// Half of each adjacent bay; a boundary side contributes zero.
    pub fn tributary_width_x_m(&self, i: usize) -> f64 {
        let left = if i == 0 {
            0.0
        } else {
            self.x_spacings_m[i - 1] / 2.0
        };
        let right = if i == self.nx {
            0.0
        } else {
            self.x_spacings_m[i] / 2.0
        };
        left + right
    }

    /// Tributary width along Y at grid line `j` (meters).
    pub fn tributary_width_y_m(&self, j: usize) -> f64 {
        let down = if j == 0 {
            0.0
        } else {
            self.y_spacings_m[j - 1] / 2.0
        };
        let up = if j == self.ny {
            0.0
        } else {
            self.y_spacings_m[j] / 2.0
        };
        down + up
    }

    /// Tributary floor area attributed to node (i,j) (m²).
    pub fn tributary_area_m2(&self, i: usize, j: usize) -> f64 {
        self.tributary_width_x_m(i) * self.tributary_width_y_m(j)
    }

    /// Total grid extent along X (meters)
    pub fn total_width_x_m(&self) -> f64 {
        self.x_spacings_m.iter().sum()
    }

    /// Total grid extent along Y (meters)
    pub fn total_width_y_m(&self) -> f64 {
        self.y_spacings_m.iter().sum()
    }

    /// Plan area of one floor plate (m²)
    pub fn plan_area_m2(&self) -> f64 {
        self.total_width_x_m() * self.total_width_y_m()
    }

    /// Average bay width along X (meters), the representative slab span
    pub fn average_span_x_m(&self) -> f64 {
        if self.nx > 0 {
            self.total_width_x_m() / self.nx as f64
        } else {
            0.0
        }
    }

    /// Average bay width along Y (meters)
    pub fn average_span_y_m(&self) -> f64 {
        if self.ny > 0 {
            self.total_width_y_m() / self.ny as f64
        } else {
            0.0
        }
    }

    /// Display label for X grid line `i` ("1", "2", ... when unlabeled)
    pub fn x_label(&self, i: usize) -> String {
        self.x_labels
            .as_ref()
            .and_then(|l| l.get(i).cloned())
            .unwrap_or_else(|| (i + 1).to_string())
    }

    /// Display label for Y grid line `j` ("A", "B", ... when unlabeled)
    pub fn y_label(&self, j: usize) -> String {
        self.y_labels
            .as_ref()
            .and_then(|l| l.get(j).cloned())
            .unwrap_or_else(|| alpha_label(j))
    }
}

/// Default X grid line labels: "1", "2", ..., "nx+1"
pub fn default_x_labels(nx: usize) -> Vec<String> {
    (0..=nx).map(|i| (i + 1).to_string()).collect()
}

/// Default Y grid line labels: "A", "B", ..., wrapping to "AA" style past Z
pub fn default_y_labels(ny: usize) -> Vec<String> {
    (0..=ny).map(alpha_label).collect()
}

/// Spreadsheet-style alphabetic label for index `j` (0 -> "A", 25 -> "Z",
/// 26 -> "AA")
fn alpha_label(j: usize) -> String {
    let mut n = j + 1;
    let mut label = String::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        label.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tributary_uniform_grid() {
        let grid = GridSpec::uniform(3, 2, 5.0, 4.0);
        // interior node: full panel
        assert_eq!(grid.tributary_area_m2(1, 1), 20.0);
        // corner node: quarter panel
        assert_eq!(grid.tributary_area_m2(0, 0), 5.0);
        // edge node on the x boundary, interior j: half panel
        assert_eq!(grid.tributary_area_m2(0, 1), 10.0);
        // edge node on the y boundary, interior i
        assert_eq!(grid.tributary_area_m2(2, 0), 10.0);
    }

    #[test]
    fn test_tributary_grows_with_spacing() {
        let narrow = GridSpec::uniform(2, 2, 4.0, 4.0);
        let wide = GridSpec::uniform(2, 2, 6.0, 4.0);
        assert!(wide.tributary_area_m2(1, 1) > narrow.tributary_area_m2(1, 1));
    }

    #[test]
    fn test_tributary_nonuniform() {
        let grid = GridSpec {
            nx: 2,
            ny: 1,
            x_spacings_m: vec![4.0, 6.0],
            y_spacings_m: vec![3.0],
            columns: vec![vec![true; 2]; 3],
            x_labels: None,
            y_labels: None,
        };
        // node between the 4 m and 6 m bays
        assert_eq!(grid.tributary_width_x_m(1), 5.0);
        assert_eq!(grid.tributary_area_m2(1, 0), 5.0 * 1.5);
    }

    #[test]
    fn test_plan_and_average() {
        let grid = GridSpec::sample();
        assert_eq!(grid.plan_area_m2(), 120.0);
        assert_eq!(grid.average_span_x_m(), 5.0);
        assert_eq!(grid.average_span_y_m(), 4.0);
    }

    #[test]
    fn test_validate_shape_mismatch() {
        let mut grid = GridSpec::sample();
        grid.x_spacings_m.pop();
        let err = grid.validate().unwrap_err();
        assert_eq!(err.error_code(), "GRID_SHAPE_MISMATCH");
    }

    #[test]
    fn test_validate_rejects_nonpositive_spacing() {
        let mut grid = GridSpec::sample();
        grid.y_spacings_m[0] = 0.0;
        assert!(grid.validate().is_err());
        grid.y_spacings_m[0] = f64::NAN;
        assert!(grid.validate().is_err());
    }

    #[test]
    fn test_has_column_out_of_range() {
        let grid = GridSpec::sample();
        assert!(grid.has_column(0, 0));
        assert!(!grid.has_column(99, 0));
        assert!(!grid.has_column(0, 99));
    }

    #[test]
    fn test_labels() {
        let grid = GridSpec::sample();
        assert_eq!(grid.x_label(0), "1");
        assert_eq!(grid.x_label(3), "4");
        assert_eq!(grid.y_label(0), "A");
        assert_eq!(grid.y_label(2), "C");
        assert_eq!(default_y_labels(26)[26], "AA");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let grid = GridSpec::sample();
        let json = serde_json::to_string(&grid).unwrap();
        let roundtrip: GridSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, roundtrip);
    }

    #[test]
    fn test_labels_absent_roundtrip() {
        let grid = GridSpec {
            x_labels: None,
            y_labels: None,
            ..GridSpec::sample()
        };
        let json = serde_json::to_string(&grid).unwrap();
        assert!(!json.contains("x_labels"));
        let roundtrip: GridSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, roundtrip);
    }
}
