//! # prelim_core - Preliminary Structural Sizing Engine
//!
//! `prelim_core` estimates preliminary member sizes (columns, beams, one-way
//! slabs, isolated footings) and quantities/cost for a regular rectangular
//! building grid. All inputs and outputs are JSON-serializable, making the
//! engine easy to drive from UIs, services, or scripts.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one call, one snapshot in, one result out
//! - **Total**: every discrete search has a deterministic fallback; member
//!   inadequacy is reported as warning codes, never as failure
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Preliminary**: sizing for early-stage estimation, not construction
//!   detailing
//!
//! ## Quick Start
//!
//! ```rust
//! use prelim_core::analysis::analyze;
//! use prelim_core::project::ProjectData;
//!
//! // The default project: 3x2 bays of 5 m x 4 m, five residential floors
//! let project = ProjectData::default();
//! let results = analyze(&project);
//!
//! println!("Concrete: {} m³", results.cost.concrete_m3);
//! println!("Steel: {} kg", results.cost.steel_kg);
//! ```
//!
//! ## Modules
//!
//! - [`analysis`] - the orchestrating `analyze` call and its results
//! - [`grid`] - structural grid and tributary geometry
//! - [`project`] - project snapshot, building spec, defaults, validation
//! - [`loads`] - gravity loads and the ULS combination
//! - [`design`] - column/beam/slab/footing sizing
//! - [`catalog`] - soil and usage lookup tables
//! - [`rebar`] - bar catalog and bar-group selection
//! - [`quantities`] - bill of quantities and cost summary
//! - [`warnings`] - warning codes and localized messages
//! - [`errors`] - structured error types
//! - [`store`] - file-backed persistence with atomic saves and locking

pub mod analysis;
pub mod catalog;
pub mod design;
pub mod errors;
pub mod grid;
pub mod loads;
pub mod project;
pub mod quantities;
pub mod rebar;
pub mod store;
pub mod warnings;

// Re-export commonly used types at crate root for convenience
pub use analysis::{analyze, AnalysisResults};
pub use errors::{DesignError, DesignResult};
pub use project::{Project, ProjectData};
pub use store::{load_project, save_project, FileLock, ProjectStore};
