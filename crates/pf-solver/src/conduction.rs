//! Backward-Euler conduction step for a symmetric solid particle.
//!
//! Control-volume finite differences on a uniform radial grid. Three node
//! classes: the center node (symmetry, curvature term scaled by `1 + b`),
//! internal nodes (half-node interface conductivities, face areas weighted
//! by `((i ± 0.5)·dr)^b`), and the surface node (Robin condition combining
//! half-node conduction with convective exchange).

use crate::error::{SolverError, SolverResult};
use crate::tridiagonal::TriDiagonal;
use nalgebra::DVector;
use pf_core::{Geometry, RadialGrid};

/// Per-node effective thermal properties for one step.
#[derive(Clone, Debug)]
pub struct ThermalProps {
    /// Effective density, kg/m³
    pub rho: DVector<f64>,
    /// Effective heat capacity, J/(kg·K)
    pub cp: DVector<f64>,
    /// Effective thermal conductivity, W/(m·K)
    pub k: DVector<f64>,
}

impl ThermalProps {
    /// Composition-independent properties, the same at every node.
    pub fn uniform(nodes: usize, rho: f64, cp: f64, k: f64) -> Self {
        Self {
            rho: DVector::from_element(nodes, rho),
            cp: DVector::from_element(nodes, cp),
            k: DVector::from_element(nodes, k),
        }
    }

    fn validate(&self, nodes: usize) -> SolverResult<()> {
        for (name, field) in [("rho", &self.rho), ("cp", &self.cp), ("k", &self.k)] {
            if field.len() != nodes {
                return Err(SolverError::ProblemSetup {
                    what: format!(
                        "property {name} has {} entries, grid has {nodes} nodes",
                        field.len()
                    ),
                });
            }
            if let Some(i) = field.iter().position(|v| !v.is_finite() || *v <= 0.0) {
                return Err(SolverError::ProblemSetup {
                    what: format!("property {name} is not positive at node {i}"),
                });
            }
        }
        Ok(())
    }
}

/// Convective boundary condition at the particle surface.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceConvection {
    /// Heat transfer coefficient, W/(m²·K); zero means insulated.
    pub h_w_per_m2_k: f64,
    /// Ambient temperature, K
    pub t_inf_k: f64,
}

/// Advance the temperature field by one implicit step.
///
/// `generation` is the volumetric heat source (W/m³) held over the step and
/// `temps` the field at the previous step; both must have one entry per grid
/// node. Returns the new field. Unconditionally stable for any `dt_s > 0`.
pub fn conduction_step(
    grid: &RadialGrid,
    geometry: Geometry,
    dt_s: f64,
    convection: &SurfaceConvection,
    generation: &DVector<f64>,
    temps: &DVector<f64>,
    props: &ThermalProps,
) -> SolverResult<DVector<f64>> {
    let m = grid.nodes();
    let dr = grid.dr();
    let r = grid.radius_m();
    let b = geometry.shape_factor();

    if !(dt_s.is_finite() && dt_s > 0.0) {
        return Err(SolverError::ProblemSetup {
            what: format!("dt_s must be positive, got {dt_s}"),
        });
    }
    if !(convection.h_w_per_m2_k.is_finite() && convection.h_w_per_m2_k >= 0.0) {
        return Err(SolverError::ProblemSetup {
            what: format!(
                "h_w_per_m2_k must be non-negative, got {}",
                convection.h_w_per_m2_k
            ),
        });
    }
    if !convection.t_inf_k.is_finite() {
        return Err(SolverError::ProblemSetup {
            what: "t_inf_k must be finite".to_string(),
        });
    }
    for (name, field) in [("generation", generation), ("temps", temps)] {
        if field.len() != m {
            return Err(SolverError::ProblemSetup {
                what: format!(
                    "{name} has {} entries, grid has {m} nodes",
                    field.len()
                ),
            });
        }
    }
    props.validate(m)?;

    let rho = &props.rho;
    let cp = &props.cp;
    let k = &props.k;

    let mut sys = TriDiagonal::zeros(m);
    let mut rhs = DVector::zeros(m);
    let dr2 = dr * dr;

    // Center node: zero flux by symmetry, conduction scaled by (1 + b).
    let v = dt_s / (rho[0] * cp[0]);
    let center = 2.0 * v * k[0] * (1.0 + b) / dr2;
    sys.diag[0] = 1.0 + center;
    sys.upper[0] = -center;
    rhs[0] = temps[0] + v * generation[0];

    // Internal nodes: interface conductivities are arithmetic means of the
    // neighboring nodes, face areas carry the shape factor.
    for i in 1..m - 1 {
        let ri = (i as f64 * dr).powf(b);
        let r_minus = ((i as f64 - 0.5) * dr).powf(b);
        let r_plus = ((i as f64 + 0.5) * dr).powf(b);
        let k_minus = 0.5 * (k[i] + k[i - 1]);
        let k_plus = 0.5 * (k[i] + k[i + 1]);
        let w = dt_s / (rho[i] * cp[i] * ri * dr2);
        let z = dt_s / (rho[i] * cp[i]);

        sys.lower[i] = -w * r_minus * k_minus;
        sys.diag[i] = 1.0 + w * r_minus * k_minus + w * r_plus * k_plus;
        sys.upper[i] = -w * r_plus * k_plus;
        rhs[i] = temps[i] + z * generation[i];
    }

    // Surface node: half-node conduction toward the interior plus the
    // convective exchange term (2/dr + b/r)·h.
    let s = m - 1;
    let ww = dt_s / (rho[s] * cp[s]);
    let k_surf = 0.5 * (k[s] + k[s - 1]);
    let conv = (2.0 / dr + b / r) * convection.h_w_per_m2_k;
    sys.lower[s] = -2.0 * ww * k_surf / dr2;
    sys.diag[s] = 1.0 + 2.0 * ww * k_surf / dr2 + ww * conv;
    rhs[s] = temps[s] + ww * conv * convection.t_inf_k + ww * generation[s];

    sys.solve(&rhs)
}
