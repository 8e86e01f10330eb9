//! Explicit-Euler advancement of per-node mass fractions.

use crate::error::{KineticsError, KineticsResult};
use crate::network::{Phase, ReactionNetwork};
use nalgebra::DVector;

/// Mass-fraction state: one vector per species, one entry per radial node.
#[derive(Clone, Debug)]
pub struct KineticsState {
    pub fractions: Vec<DVector<f64>>,
}

impl KineticsState {
    /// All-virgin state: the parent species at mass fraction 1 everywhere,
    /// every other species at 0.
    pub fn initial(network: &ReactionNetwork, nodes: usize) -> Self {
        let mut fractions = vec![DVector::zeros(nodes); network.n_species()];
        fractions[network.virgin_index()] = DVector::from_element(nodes, 1.0);
        Self { fractions }
    }

    pub fn nodes(&self) -> usize {
        self.fractions.first().map_or(0, |f| f.len())
    }

    /// Sum of all tracked species fractions at a node.
    pub fn species_sum(&self, node: usize) -> f64 {
        self.fractions.iter().map(|f| f[node]).sum()
    }

    /// Sum of solid-phase fractions at a node; this is the residual solid
    /// mass relative to the virgin material.
    pub fn solid_sum(&self, network: &ReactionNetwork, node: usize) -> f64 {
        network
            .species()
            .iter()
            .zip(&self.fractions)
            .filter(|(sp, _)| sp.phase == Phase::Solid)
            .map(|(_, f)| f[node])
            .sum()
    }
}

/// Advance every node's mass fractions by one explicit Euler step and
/// recompute the volumetric heat generation.
///
/// `temps` is the *current* step's temperature field; the returned
/// generation vector feeds the *next* conduction solve (the one-step lag is
/// part of the scheme). Heat of reaction is signed: negative = exothermic.
/// `g = H · rho_virgin · Σ(net solid rates)`; the net solid rate is
/// negative while mass volatilizes, so an exothermic scheme heats the
/// particle.
///
/// Nothing here guards against a too-large `dt` or Arrhenius overflow;
/// divergence shows up as non-finite values in the returned state.
pub fn advance(
    network: &ReactionNetwork,
    temps: &DVector<f64>,
    previous: &KineticsState,
    dt_s: f64,
    rho_virgin_kg_per_m3: f64,
    heat_of_reaction_j_per_kg: f64,
) -> KineticsResult<(KineticsState, DVector<f64>)> {
    let nodes = temps.len();
    if previous.fractions.len() != network.n_species() {
        return Err(KineticsError::LengthMismatch {
            what: "state species count",
            expected: network.n_species(),
            got: previous.fractions.len(),
        });
    }
    if previous.nodes() != nodes {
        return Err(KineticsError::LengthMismatch {
            what: "state node count",
            expected: nodes,
            got: previous.nodes(),
        });
    }

    let mut next = previous.clone();
    let mut generation = DVector::zeros(nodes);
    let mut net = vec![0.0; network.n_species()];

    for node in 0..nodes {
        let t = temps[node];
        net.fill(0.0);

        for rxn in network.reactions() {
            let rate = rxn.rate.eval(t) * previous.fractions[rxn.reactant][node];
            net[rxn.reactant] -= rate;
            for &(sp, yield_) in &rxn.products {
                net[sp] += yield_ * rate;
            }
        }

        let mut solid_rate = 0.0;
        for (sp, def) in network.species().iter().enumerate() {
            next.fractions[sp][node] = previous.fractions[sp][node] + net[sp] * dt_s;
            if def.phase == Phase::Solid {
                solid_rate += net[sp];
            }
        }
        generation[node] = heat_of_reaction_j_per_kg * rho_virgin_kg_per_m3 * solid_rate;
    }

    Ok((next, generation))
}

/// Fraction history of a single-node isothermal run.
#[derive(Clone, Debug)]
pub struct IsothermalRecord {
    /// Time points, seconds; `t[0] = 0`.
    pub t: Vec<f64>,
    /// Species fractions per step, indexed `[step][species]`.
    pub fractions: Vec<Vec<f64>>,
}

/// Integrate a network at a fixed temperature, starting all-virgin.
///
/// This is the kinetics-only analysis mode (the Ranzi scheme studies):
/// no spatial grid, no heat balance, just the fraction evolution.
pub fn run_isothermal(
    network: &ReactionNetwork,
    t_k: f64,
    dt_s: f64,
    steps: usize,
) -> KineticsResult<IsothermalRecord> {
    if !(dt_s.is_finite() && dt_s > 0.0) {
        return Err(KineticsError::InvalidArg {
            what: "dt_s must be positive",
        });
    }
    if steps == 0 {
        return Err(KineticsError::InvalidArg {
            what: "steps must be positive",
        });
    }

    let temps = DVector::from_element(1, t_k);
    let mut state = KineticsState::initial(network, 1);

    let snapshot =
        |state: &KineticsState| -> Vec<f64> { state.fractions.iter().map(|f| f[0]).collect() };

    let mut record = IsothermalRecord {
        t: Vec::with_capacity(steps + 1),
        fractions: Vec::with_capacity(steps + 1),
    };
    record.t.push(0.0);
    record.fractions.push(snapshot(&state));

    for step in 1..=steps {
        let (next, _) = advance(network, &temps, &state, dt_s, 1.0, 0.0)?;
        state = next;
        record.t.push(step as f64 * dt_s);
        record.fractions.push(snapshot(&state));
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_scheme;
    use crate::network::SpeciesDef;
    use crate::rate::RateLaw;

    #[test]
    fn initial_state_is_all_virgin() {
        let net = find_scheme("Koufopanos1991").unwrap().build().unwrap();
        let state = KineticsState::initial(&net, 5);
        for node in 0..5 {
            assert_eq!(state.fractions[0][node], 1.0);
            assert_eq!(state.species_sum(node), 1.0);
        }
    }

    #[test]
    fn isothermal_decay_matches_closed_form() {
        // At a fixed temperature the remaining biomass follows
        // B(t) = exp(-(K1+K2)·t); explicit Euler converges to it for small dt.
        let net = find_scheme("Sadhukhan2009").unwrap().build().unwrap();
        let t_k = 700.0;
        let dt = 0.01;
        let steps = 5000; // 50 s

        let k_total: f64 = net
            .reactions()
            .iter()
            .filter(|rxn| rxn.reactant == net.virgin_index())
            .map(|rxn| rxn.rate.eval(t_k))
            .sum();

        let record = run_isothermal(&net, t_k, dt, steps).unwrap();
        let b_end = record.fractions[steps][net.virgin_index()];
        let exact = (-k_total * dt * steps as f64).exp();
        assert!(
            (b_end - exact).abs() < 1e-3,
            "euler {b_end} vs closed form {exact}"
        );
    }

    #[test]
    fn conservative_network_conserves_fraction_sum() {
        let mut net = ReactionNetwork::new(vec![
            SpeciesDef::solid("biomass"),
            SpeciesDef::solid("char"),
            SpeciesDef::volatile("gas"),
        ])
        .unwrap();
        net.add_reaction(
            "biomass -> char + gas",
            "biomass",
            RateLaw::Arrhenius {
                a: 100.0,
                e: 40_000.0,
            },
            &[("char", 0.35), ("gas", 0.65)],
        )
        .unwrap();
        assert!(net.is_conservative());

        let record = run_isothermal(&net, 750.0, 0.005, 2000).unwrap();
        for row in &record.fractions {
            let total: f64 = row.iter().sum();
            assert!((total - 1.0).abs() < 1e-10, "mass drift: {total}");
        }
    }

    #[test]
    fn exothermic_decay_generates_heat() {
        let net = find_scheme("Sadhukhan2009").unwrap().build().unwrap();
        let temps = DVector::from_element(3, 700.0);
        let state = KineticsState::initial(&net, 3);

        // Negative H = exothermic; solids are being lost, so g must heat.
        let (next, generation) = advance(&net, &temps, &state, 0.01, 682.0, -220_000.0).unwrap();
        for node in 0..3 {
            assert!(next.fractions[0][node] < 1.0);
            assert!(generation[node] > 0.0);
        }
    }

    #[test]
    fn ranzi_cellulose_runs_to_near_completion() {
        let net = find_scheme("RanziCell2013").unwrap().build().unwrap();
        assert_eq!(net.n_species(), 16);

        // 1 s at 773 K consumes nearly all cellulose (K1 ≈ 7.5 1/s).
        let record = run_isothermal(&net, 773.0, 1e-3, 1000).unwrap();
        let last = record.fractions.last().unwrap();
        let cell = last[net.species_index("cell").unwrap()];
        let lvg = last[net.species_index("lvg").unwrap()];
        let char_ = last[net.species_index("char").unwrap()];
        assert!(cell < 1e-2, "cellulose left: {cell}");
        assert!(lvg > 0.0 && char_ > 0.0);
        assert!(last.iter().all(|f| f.is_finite()));
    }

    #[test]
    fn rejects_mismatched_state() {
        let net = find_scheme("Koufopanos1991").unwrap().build().unwrap();
        let temps = DVector::from_element(4, 600.0);
        let state = KineticsState::initial(&net, 3);
        assert!(matches!(
            advance(&net, &temps, &state, 0.1, 650.0, 0.0),
            Err(KineticsError::LengthMismatch { .. })
        ));
    }
}
