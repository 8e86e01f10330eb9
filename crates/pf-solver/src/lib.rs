//! Implicit intraparticle conduction solver.
//!
//! This crate provides the backward-Euler step for 1-D transient heat
//! conduction in a symmetric solid particle (slab, cylinder, or sphere) with
//! convection at the surface and symmetry at the center. Each step assembles
//! a tridiagonal system over the radial nodes and solves it in linear time;
//! the implicit formulation is unconditionally stable for any time step.

pub mod conduction;
pub mod error;
pub mod tridiagonal;

pub use conduction::{SurfaceConvection, ThermalProps, conduction_step};
pub use error::{SolverError, SolverResult};
pub use tridiagonal::TriDiagonal;
