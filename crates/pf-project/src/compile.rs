//! Compilation of a validated project into runtime types.

use crate::schema::{
    FitDef, GeometryDef, ParticleProject, PhaseDef, RateLawDef, SchemeDef,
};
use crate::{ProjectError, ProjectResult};
use pf_core::Geometry;
use pf_kinetics::{RateLaw, ReactionNetwork, SpeciesDef, find_scheme};
use pf_sim::{ParticleSpec, PropertyFit, Pyrolysis, SolidMaterial};

impl From<GeometryDef> for Geometry {
    fn from(def: GeometryDef) -> Self {
        match def {
            GeometryDef::Slab => Geometry::Slab,
            GeometryDef::Cylinder => Geometry::Cylinder,
            GeometryDef::Sphere => Geometry::Sphere,
        }
    }
}

impl From<FitDef> for PropertyFit {
    fn from(def: FitDef) -> Self {
        PropertyFit { a: def.a, b: def.b }
    }
}

impl From<RateLawDef> for RateLaw {
    fn from(def: RateLawDef) -> Self {
        match def {
            RateLawDef::Arrhenius { a, e_j_per_mol } => RateLaw::Arrhenius { a, e: e_j_per_mol },
            RateLawDef::ArrheniusLinearT { a, e_j_per_mol } => {
                RateLaw::ArrheniusLinearT { a, e: e_j_per_mol }
            }
            RateLawDef::TwoTermExponent { a, g_k, l_k2 } => {
                RateLaw::TwoTermExponent { a, g: g_k, l: l_k2 }
            }
        }
    }
}

fn build_network(scheme: &SchemeDef) -> ProjectResult<ReactionNetwork> {
    match scheme {
        SchemeDef::Named { id } => {
            let entry = find_scheme(id).ok_or_else(|| {
                ProjectError::Validation(crate::ValidationError::MissingReference {
                    id: id.clone(),
                    context: "scheme catalog".to_string(),
                })
            })?;
            Ok(entry.build()?)
        }
        SchemeDef::Custom { species, reactions } => {
            let defs = species
                .iter()
                .map(|sp| match sp.phase {
                    PhaseDef::Solid => SpeciesDef::solid(&sp.name),
                    PhaseDef::Volatile => SpeciesDef::volatile(&sp.name),
                })
                .collect();
            let mut network = ReactionNetwork::new(defs)?;
            for reaction in reactions {
                let products: Vec<(&str, f64)> = reaction
                    .products
                    .iter()
                    .map(|p| (p.species.as_str(), p.yield_frac))
                    .collect();
                network.add_reaction(
                    &reaction.name,
                    &reaction.reactant,
                    reaction.rate.into(),
                    &products,
                )?;
            }
            Ok(network)
        }
    }
}

/// Turn a validated project into a runnable [`ParticleSpec`].
pub fn compile_project(project: &ParticleProject) -> ProjectResult<ParticleSpec> {
    crate::validate_project(project)?;

    let material = SolidMaterial {
        rho_virgin_kg_per_m3: project.material.rho_virgin_kg_per_m3,
        cp_virgin: project.material.cp_virgin.into(),
        k_virgin: project.material.k_virgin.into(),
        cp_char: project.material.cp_char.into(),
        k_char: project.material.k_char.into(),
    };

    let pyrolysis = match &project.pyrolysis {
        Some(def) => Some(Pyrolysis {
            network: build_network(&def.scheme)?,
            heat_of_reaction_j_per_kg: def.heat_of_reaction_j_per_kg,
        }),
        None => None,
    };

    Ok(ParticleSpec {
        geometry: project.particle.geometry.into(),
        diameter_m: project.particle.diameter_m,
        nodes: project.particle.nodes,
        initial_temperature_k: project.run.initial_temperature_k,
        ambient_temperature_k: project.run.ambient_temperature_k,
        h_w_per_m2_k: project.run.h_w_per_m2_k,
        material,
        pyrolysis,
        t_end_s: project.run.t_end_s,
        steps: project.run.steps,
        check_finite: project.run.check_finite,
    })
}
