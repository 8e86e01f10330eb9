//! Coupled time loop and run records.

use crate::error::SimResult;
use crate::material::SolidMaterial;
use crate::particle::ParticleSpec;
use nalgebra::DVector;
use pf_core::first_non_finite;
use pf_kinetics::{KineticsState, ReactionNetwork, advance};
use pf_solver::{SurfaceConvection, ThermalProps, conduction_step};

/// Full history of a particle run. Buffers hold one row per step,
/// `steps + 1` rows including the initial state; they are written once by
/// the run and read-only afterwards.
#[derive(Clone, Debug)]
pub struct ParticleRecord {
    /// Time points, seconds; `t[0] = 0`.
    pub t: Vec<f64>,
    /// Temperature field per step, K.
    pub temps: Vec<DVector<f64>>,
    /// Mass-fraction state per step; empty for pure-conduction runs.
    pub states: Vec<KineticsState>,
    /// Network the states refer to; `None` for pure-conduction runs.
    pub network: Option<ReactionNetwork>,
    /// First step at which a non-finite value appeared, when the run was
    /// configured with `check_finite`.
    pub first_non_finite_step: Option<usize>,
}

impl ParticleRecord {
    pub fn steps(&self) -> usize {
        self.t.len().saturating_sub(1)
    }

    pub fn center_temps(&self) -> Vec<f64> {
        self.temps.iter().map(|row| row[0]).collect()
    }

    pub fn surface_temps(&self) -> Vec<f64> {
        self.temps.iter().map(|row| row[row.len() - 1]).collect()
    }

    pub fn mean_temps(&self) -> Vec<f64> {
        self.temps.iter().map(|row| row.mean()).collect()
    }

    /// Node-averaged residual solid mass per step, relative to the virgin
    /// material (the `Ys` curve of the particle models). `None` for
    /// pure-conduction runs.
    pub fn residual_solid(&self) -> Option<Vec<f64>> {
        let network = self.network.as_ref()?;
        Some(
            self.states
                .iter()
                .map(|state| {
                    let nodes = state.nodes();
                    let total: f64 = (0..nodes).map(|i| state.solid_sum(network, i)).sum();
                    total / nodes as f64
                })
                .collect(),
        )
    }
}

fn effective_props(
    material: &SolidMaterial,
    temps: &DVector<f64>,
    composition: Option<(&ReactionNetwork, &KineticsState)>,
) -> ThermalProps {
    let m = temps.len();
    let mut rho = DVector::zeros(m);
    let mut cp = DVector::zeros(m);
    let mut k = DVector::zeros(m);
    for node in 0..m {
        let (virgin, solid_total) = match composition {
            Some((network, state)) => (
                state.fractions[network.virgin_index()][node],
                state.solid_sum(network, node),
            ),
            None => (1.0, 1.0),
        };
        let (r, c, kk) = material.effective(temps[node], virgin, solid_total);
        rho[node] = r;
        cp[node] = c;
        k[node] = kk;
    }
    ThermalProps { rho, cp, k }
}

fn any_non_finite(temps: &DVector<f64>, state: Option<&KineticsState>) -> bool {
    if first_non_finite(temps.as_slice()).is_some() {
        return true;
    }
    state.is_some_and(|s| {
        s.fractions
            .iter()
            .any(|f| first_non_finite(f.as_slice()).is_some())
    })
}

/// Run the coupled conduction/kinetics loop for the configured number of
/// steps.
///
/// Per step, in strict lock-step: the conduction solve consumes the previous
/// temperatures, current effective properties, and the heat generation
/// computed at the previous step; the kinetics advance then consumes the new
/// temperatures and the previous mass fractions; finally the effective
/// properties are recomputed from the new temperatures and fractions. There
/// is no convergence check and no early termination.
pub fn run_particle(spec: &ParticleSpec) -> SimResult<ParticleRecord> {
    spec.validate()?;

    let grid = spec.grid()?;
    let m = grid.nodes();
    let dt = spec.dt_s();
    let convection = SurfaceConvection {
        h_w_per_m2_k: spec.h_w_per_m2_k,
        t_inf_k: spec.ambient_temperature_k,
    };

    tracing::debug!(
        nodes = m,
        steps = spec.steps,
        dt_s = dt,
        pyrolysis = spec.pyrolysis.is_some(),
        "starting particle run"
    );

    let mut temps: Vec<DVector<f64>> = Vec::with_capacity(spec.steps + 1);
    temps.push(DVector::from_element(m, spec.initial_temperature_k));

    let mut states: Vec<KineticsState> = Vec::new();
    if let Some(pyro) = &spec.pyrolysis {
        states.reserve(spec.steps + 1);
        states.push(KineticsState::initial(&pyro.network, m));
    }

    let mut props = effective_props(
        &spec.material,
        &temps[0],
        spec.pyrolysis
            .as_ref()
            .map(|pyro| (&pyro.network, &states[0])),
    );
    let mut generation = DVector::zeros(m);
    let mut first_bad_step = None;

    for step in 1..=spec.steps {
        let new_temps = conduction_step(
            &grid,
            spec.geometry,
            dt,
            &convection,
            &generation,
            &temps[step - 1],
            &props,
        )?;

        if let Some(pyro) = &spec.pyrolysis {
            let (new_state, new_generation) = advance(
                &pyro.network,
                &new_temps,
                &states[step - 1],
                dt,
                spec.material.rho_virgin_kg_per_m3,
                pyro.heat_of_reaction_j_per_kg,
            )?;
            generation = new_generation;
            props = effective_props(
                &spec.material,
                &new_temps,
                Some((&pyro.network, &new_state)),
            );
            states.push(new_state);
        } else {
            props = effective_props(&spec.material, &new_temps, None);
        }

        if spec.check_finite
            && first_bad_step.is_none()
            && any_non_finite(&new_temps, states.last())
        {
            first_bad_step = Some(step);
            tracing::warn!(step, "non-finite value entered the state fields");
        }

        temps.push(new_temps);
    }

    Ok(ParticleRecord {
        t: (0..=spec.steps).map(|i| i as f64 * dt).collect(),
        temps,
        states,
        network: spec.pyrolysis.as_ref().map(|pyro| pyro.network.clone()),
        first_non_finite_step: first_bad_step,
    })
}
