//! Radial discretization of a symmetric solid particle.

use crate::error::{PfError, PfResult};
use crate::numeric::{Real, ensure_positive};

/// Particle geometry. Selects the curvature terms of the conduction
/// equation via the shape factor: 0 = slab, 1 = cylinder, 2 = sphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Geometry {
    Slab,
    Cylinder,
    #[default]
    Sphere,
}

impl Geometry {
    pub fn shape_factor(self) -> Real {
        match self {
            Geometry::Slab => 0.0,
            Geometry::Cylinder => 1.0,
            Geometry::Sphere => 2.0,
        }
    }
}

/// Uniform 1-D radial grid from the particle center (node 0) to the
/// surface (node `nodes - 1`).
#[derive(Clone, Copy, Debug)]
pub struct RadialGrid {
    radius_m: Real,
    nodes: usize,
}

impl RadialGrid {
    /// A grid needs at least a center and a surface node.
    pub fn new(radius_m: Real, nodes: usize) -> PfResult<Self> {
        ensure_positive(radius_m, "grid radius_m must be positive")?;
        if nodes < 2 {
            return Err(PfError::InvalidArg {
                what: "grid needs at least 2 nodes",
            });
        }
        Ok(Self { radius_m, nodes })
    }

    pub fn radius_m(&self) -> Real {
        self.radius_m
    }

    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Uniform node spacing `r / (m - 1)`.
    pub fn dr(&self) -> Real {
        self.radius_m / (self.nodes as Real - 1.0)
    }

    /// Radial position of node `i`.
    pub fn node_radius(&self, i: usize) -> Real {
        i as Real * self.dr()
    }
}
