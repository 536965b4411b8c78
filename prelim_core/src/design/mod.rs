//! # Member Design
//!
//! Preliminary member sizing. Each module follows the pattern of a pure
//! design function that consumes already-assembled demands and returns a
//! `*Result` struct (JSON-serializable) with the chosen section, the
//! governing numbers, and any adequacy warnings.
//!
//! Every discrete search here has a fixed candidate order and a
//! deterministic fallback, so design never fails; inadequate fallbacks are
//! flagged with warning codes instead.
//!
//! ## Available designers
//!
//! - [`column`] - square column axial sizing
//! - [`beam`] - simply-supported beam flexure and shear
//! - [`slab`] - one-way slab strip flexure
//! - [`footing`] - isolated square footing bearing design

pub mod beam;
pub mod column;
pub mod footing;
pub mod slab;

pub use beam::{design_beam, BeamResult};
pub use column::{design_column, ColumnResult};
pub use footing::{design_footing, FootingResult};
pub use slab::{design_slab_strip, SlabResult};

/// Strength-reduction factor for tied columns in axial compression
pub const PHI_COLUMN: f64 = 0.65;

/// Strength-reduction factor for flexure (beams and slabs)
pub const PHI_FLEXURE: f64 = 0.9;
