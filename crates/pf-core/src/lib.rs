//! pf-core: stable foundation for pyroflow.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - grid (radial discretization and particle geometry)
//! - error (shared error types)

pub mod error;
pub mod grid;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PfError, PfResult};
pub use grid::{Geometry, RadialGrid};
pub use numeric::*;
