//! Pyrolysis reaction kinetics.
//!
//! This crate provides:
//! - Arrhenius-family rate laws (plain, linear-in-T pre-multiplier, and the
//!   two-term-exponent form used by the Koufopanos primary reactions)
//! - directed reaction networks over named species with per-reaction
//!   stoichiometric yields
//! - a catalog of published kinetic schemes
//! - the explicit-Euler integrator that advances per-node mass fractions and
//!   produces the volumetric heat-generation field for the conduction solver
//!
//! The integrator is deliberately a forward-Euler scheme: the published
//! models are defined by the same first-order update, so stiffness is the
//! caller's problem (small `dt`), not grounds for an implicit method.

pub mod catalog;
pub mod error;
pub mod integrator;
pub mod network;
pub mod rate;

pub use catalog::{SchemeCatalogEntry, find_scheme, scheme_catalog};
pub use error::{KineticsError, KineticsResult};
pub use integrator::{IsothermalRecord, KineticsState, advance, run_isothermal};
pub use network::{Phase, Reaction, ReactionNetwork, SpeciesDef};
pub use rate::{GAS_CONSTANT_J_PER_MOL_K, RateLaw};
