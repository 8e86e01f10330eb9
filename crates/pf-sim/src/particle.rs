//! Particle run configuration.

use crate::error::{SimError, SimResult};
use crate::material::SolidMaterial;
use pf_core::{Geometry, RadialGrid};
use pf_kinetics::ReactionNetwork;

/// Pyrolysis configuration: which reaction network runs inside the particle
/// and with what reaction enthalpy.
#[derive(Clone, Debug)]
pub struct Pyrolysis {
    pub network: ReactionNetwork,
    /// Heat of reaction, J/kg. Negative = exothermic, positive = endothermic.
    pub heat_of_reaction_j_per_kg: f64,
}

/// Full configuration of a particle run. All fields are fixed for the life
/// of the run; the time loop executes exactly `steps` steps of
/// `t_end_s / steps` seconds each.
#[derive(Clone, Debug)]
pub struct ParticleSpec {
    pub geometry: Geometry,
    pub diameter_m: f64,
    /// Radial nodes from center to surface, at least 2.
    pub nodes: usize,
    pub initial_temperature_k: f64,
    pub ambient_temperature_k: f64,
    pub h_w_per_m2_k: f64,
    pub material: SolidMaterial,
    /// `None` runs pure conduction in an inert particle.
    pub pyrolysis: Option<Pyrolysis>,
    pub t_end_s: f64,
    pub steps: usize,
    /// Scan each step's fields for non-finite values and record the first
    /// offending step (diagnostic warning only, never a failure).
    pub check_finite: bool,
}

impl ParticleSpec {
    pub fn dt_s(&self) -> f64 {
        self.t_end_s / self.steps as f64
    }

    pub fn grid(&self) -> SimResult<RadialGrid> {
        Ok(RadialGrid::new(0.5 * self.diameter_m, self.nodes)?)
    }

    /// Configuration errors are fatal before the time loop starts.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.diameter_m.is_finite() && self.diameter_m > 0.0) {
            return Err(SimError::InvalidArg {
                what: "diameter_m must be positive",
            });
        }
        if self.nodes < 2 {
            return Err(SimError::InvalidArg {
                what: "nodes must be at least 2",
            });
        }
        if self.steps == 0 {
            return Err(SimError::InvalidArg {
                what: "steps must be positive",
            });
        }
        if !(self.t_end_s.is_finite() && self.t_end_s > 0.0) {
            return Err(SimError::InvalidArg {
                what: "t_end_s must be positive",
            });
        }
        if !(self.h_w_per_m2_k.is_finite() && self.h_w_per_m2_k >= 0.0) {
            return Err(SimError::InvalidArg {
                what: "h_w_per_m2_k must be non-negative",
            });
        }
        if !(self.initial_temperature_k.is_finite() && self.initial_temperature_k > 0.0) {
            return Err(SimError::InvalidArg {
                what: "initial_temperature_k must be positive",
            });
        }
        if !(self.ambient_temperature_k.is_finite() && self.ambient_temperature_k > 0.0) {
            return Err(SimError::InvalidArg {
                what: "ambient_temperature_k must be positive",
            });
        }
        if !(self.material.rho_virgin_kg_per_m3.is_finite()
            && self.material.rho_virgin_kg_per_m3 > 0.0)
        {
            return Err(SimError::InvalidArg {
                what: "rho_virgin_kg_per_m3 must be positive",
            });
        }
        if let Some(pyro) = &self.pyrolysis {
            if !pyro.heat_of_reaction_j_per_kg.is_finite() {
                return Err(SimError::InvalidArg {
                    what: "heat_of_reaction_j_per_kg must be finite",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_spec() -> ParticleSpec {
        ParticleSpec {
            geometry: Geometry::Sphere,
            diameter_m: 0.02,
            nodes: 20,
            initial_temperature_k: 293.0,
            ambient_temperature_k: 673.0,
            h_w_per_m2_k: 65.0,
            material: SolidMaterial::dry_wood(682.0),
            pyrolysis: None,
            t_end_s: 840.0,
            steps: 2000,
            check_finite: false,
        }
    }

    #[test]
    fn valid_spec_passes() {
        let spec = base_spec();
        spec.validate().unwrap();
        assert!((spec.dt_s() - 0.42).abs() < 1e-12);
        assert_eq!(spec.grid().unwrap().nodes(), 20);
    }

    #[test]
    fn rejects_degenerate_configuration() {
        let mut spec = base_spec();
        spec.nodes = 1;
        assert!(spec.validate().is_err());

        let mut spec = base_spec();
        spec.diameter_m = 0.0;
        assert!(spec.validate().is_err());

        let mut spec = base_spec();
        spec.steps = 0;
        assert!(spec.validate().is_err());

        let mut spec = base_spec();
        spec.t_end_s = -1.0;
        assert!(spec.validate().is_err());

        let mut spec = base_spec();
        spec.h_w_per_m2_k = -5.0;
        assert!(spec.validate().is_err());
    }
}
