//! Project validation logic.

use crate::schema::{ParticleProject, PhaseDef, SchemeDef};
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate species: {name} in {context}")]
    DuplicateSpecies { name: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn require_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be positive".to_string(),
        })
    }
}

fn require_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        })
    }
}

pub fn validate_project(project: &ParticleProject) -> Result<(), ValidationError> {
    if project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    require_positive("particle.diameter_m", project.particle.diameter_m)?;
    if project.particle.nodes < 2 {
        return Err(ValidationError::InvalidValue {
            field: "particle.nodes".to_string(),
            value: project.particle.nodes.to_string(),
            reason: "at least 2 nodes (center and surface)".to_string(),
        });
    }

    require_positive(
        "material.rho_virgin_kg_per_m3",
        project.material.rho_virgin_kg_per_m3,
    )?;
    for (name, fit) in [
        ("material.cp_virgin", &project.material.cp_virgin),
        ("material.k_virgin", &project.material.k_virgin),
        ("material.cp_char", &project.material.cp_char),
        ("material.k_char", &project.material.k_char),
    ] {
        require_finite(&format!("{name}.a"), fit.a)?;
        require_finite(&format!("{name}.b"), fit.b)?;
    }

    require_positive("run.t_end_s", project.run.t_end_s)?;
    if project.run.steps == 0 {
        return Err(ValidationError::InvalidValue {
            field: "run.steps".to_string(),
            value: "0".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    require_positive(
        "run.initial_temperature_k",
        project.run.initial_temperature_k,
    )?;
    require_positive(
        "run.ambient_temperature_k",
        project.run.ambient_temperature_k,
    )?;
    if !(project.run.h_w_per_m2_k.is_finite() && project.run.h_w_per_m2_k >= 0.0) {
        return Err(ValidationError::InvalidValue {
            field: "run.h_w_per_m2_k".to_string(),
            value: project.run.h_w_per_m2_k.to_string(),
            reason: "must be non-negative".to_string(),
        });
    }

    if let Some(pyrolysis) = &project.pyrolysis {
        require_finite(
            "pyrolysis.heat_of_reaction_j_per_kg",
            pyrolysis.heat_of_reaction_j_per_kg,
        )?;
        validate_scheme(&pyrolysis.scheme)?;
    }

    Ok(())
}

fn validate_scheme(scheme: &SchemeDef) -> Result<(), ValidationError> {
    match scheme {
        SchemeDef::Named { id } => {
            if pf_kinetics::find_scheme(id).is_none() {
                return Err(ValidationError::MissingReference {
                    id: id.clone(),
                    context: "scheme catalog".to_string(),
                });
            }
        }
        SchemeDef::Custom { species, reactions } => {
            if species.is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: "pyrolysis.scheme.species".to_string(),
                    value: "[]".to_string(),
                    reason: "custom scheme needs at least one species".to_string(),
                });
            }
            if species[0].phase != PhaseDef::Solid {
                return Err(ValidationError::InvalidValue {
                    field: format!("pyrolysis.scheme.species[0] ({})", species[0].name),
                    value: "Volatile".to_string(),
                    reason: "the virgin species must be solid".to_string(),
                });
            }

            let mut names = HashSet::new();
            for sp in species {
                if !names.insert(sp.name.as_str()) {
                    return Err(ValidationError::DuplicateSpecies {
                        name: sp.name.clone(),
                        context: "custom scheme".to_string(),
                    });
                }
            }

            for reaction in reactions {
                if !names.contains(reaction.reactant.as_str()) {
                    return Err(ValidationError::MissingReference {
                        id: reaction.reactant.clone(),
                        context: format!("reaction '{}' reactant", reaction.name),
                    });
                }
                for product in &reaction.products {
                    if !names.contains(product.species.as_str()) {
                        return Err(ValidationError::MissingReference {
                            id: product.species.clone(),
                            context: format!("reaction '{}' products", reaction.name),
                        });
                    }
                    if !(product.yield_frac.is_finite() && product.yield_frac >= 0.0) {
                        return Err(ValidationError::InvalidValue {
                            field: format!(
                                "reaction '{}' yield for '{}'",
                                reaction.name, product.species
                            ),
                            value: product.yield_frac.to_string(),
                            reason: "must be a non-negative finite number".to_string(),
                        });
                    }
                }
            }
        }
    }
    Ok(())
}
