use pf_project::schema::*;
use pf_project::{compile_project, load_json, load_yaml, save_json, save_yaml, validate_project};

fn dry_wood_material() -> MaterialDef {
    MaterialDef {
        rho_virgin_kg_per_m3: 682.0,
        cp_virgin: FitDef { a: 1112.0, b: 4.85 },
        k_virgin: FitDef { a: 0.13, b: 3e-4 },
        cp_char: FitDef { a: 1003.2, b: 2.09 },
        k_char: FitDef { a: 0.08, b: -1e-4 },
    }
}

fn heating_project() -> ParticleProject {
    ParticleProject {
        version: 1,
        name: "Inert heating sphere".to_string(),
        particle: ParticleDef {
            geometry: GeometryDef::Sphere,
            diameter_m: 0.02,
            nodes: 20,
        },
        material: dry_wood_material(),
        pyrolysis: None,
        run: RunDef {
            t_end_s: 840.0,
            steps: 2000,
            initial_temperature_k: 293.0,
            ambient_temperature_k: 673.0,
            h_w_per_m2_k: 65.0,
            check_finite: false,
        },
    }
}

fn pyrolysis_project() -> ParticleProject {
    ParticleProject {
        version: 1,
        name: "Sadhukhan cylinder".to_string(),
        particle: ParticleDef {
            geometry: GeometryDef::Cylinder,
            diameter_m: 0.02,
            nodes: 20,
        },
        material: dry_wood_material(),
        pyrolysis: Some(PyrolysisDef {
            scheme: SchemeDef::Named {
                id: "Sadhukhan2009".to_string(),
            },
            heat_of_reaction_j_per_kg: -220_000.0,
        }),
        run: RunDef {
            t_end_s: 800.0,
            steps: 2000,
            initial_temperature_k: 285.0,
            ambient_temperature_k: 683.0,
            h_w_per_m2_k: 50.0,
            check_finite: true,
        },
    }
}

#[test]
fn roundtrip_yaml_heating_project() {
    let project = heating_project();
    validate_project(&project).unwrap();

    let path = std::env::temp_dir().join("pf_project_roundtrip_heating.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_json_pyrolysis_project() {
    let project = pyrolysis_project();
    validate_project(&project).unwrap();

    let path = std::env::temp_dir().join("pf_project_roundtrip_pyrolysis.json");
    save_json(&path, &project).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_yaml_custom_scheme() {
    let mut project = pyrolysis_project();
    project.pyrolysis = Some(PyrolysisDef {
        scheme: SchemeDef::Custom {
            species: vec![
                SpeciesFieldDef {
                    name: "biomass".to_string(),
                    phase: PhaseDef::Solid,
                },
                SpeciesFieldDef {
                    name: "char".to_string(),
                    phase: PhaseDef::Solid,
                },
                SpeciesFieldDef {
                    name: "volatiles".to_string(),
                    phase: PhaseDef::Volatile,
                },
            ],
            reactions: vec![ReactionDef {
                name: "biomass -> char + volatiles".to_string(),
                reactant: "biomass".to_string(),
                rate: RateLawDef::Arrhenius {
                    a: 150.0,
                    e_j_per_mol: 60_000.0,
                },
                products: vec![
                    ProductDef {
                        species: "char".to_string(),
                        yield_frac: 0.3,
                    },
                    ProductDef {
                        species: "volatiles".to_string(),
                        yield_frac: 0.7,
                    },
                ],
            }],
        },
        heat_of_reaction_j_per_kg: -150_000.0,
    });

    validate_project(&project).unwrap();

    let path = std::env::temp_dir().join("pf_project_roundtrip_custom.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn compile_named_scheme_project() {
    let spec = compile_project(&pyrolysis_project()).unwrap();
    assert_eq!(spec.nodes, 20);
    assert_eq!(spec.steps, 2000);

    let pyro = spec.pyrolysis.as_ref().unwrap();
    assert_eq!(pyro.network.n_species(), 3);
    assert_eq!(pyro.heat_of_reaction_j_per_kg, -220_000.0);
}

#[test]
fn compile_pure_conduction_project() {
    let spec = compile_project(&heating_project()).unwrap();
    assert!(spec.pyrolysis.is_none());
    assert!((spec.material.cp_virgin.eval(273.15) - 1112.0).abs() < 1e-12);
}

#[test]
fn validation_rejects_unknown_scheme() {
    let mut project = pyrolysis_project();
    project.pyrolysis = Some(PyrolysisDef {
        scheme: SchemeDef::Named {
            id: "NoSuchScheme".to_string(),
        },
        heat_of_reaction_j_per_kg: 0.0,
    });
    assert!(validate_project(&project).is_err());
}

#[test]
fn validation_rejects_bad_geometry_and_run() {
    let mut project = heating_project();
    project.particle.nodes = 1;
    assert!(validate_project(&project).is_err());

    let mut project = heating_project();
    project.particle.diameter_m = -0.01;
    assert!(validate_project(&project).is_err());

    let mut project = heating_project();
    project.run.steps = 0;
    assert!(validate_project(&project).is_err());

    let mut project = heating_project();
    project.run.h_w_per_m2_k = -2.0;
    assert!(validate_project(&project).is_err());

    let mut project = heating_project();
    project.version = 99;
    assert!(validate_project(&project).is_err());
}

#[test]
fn validation_rejects_broken_custom_scheme() {
    // Duplicate species.
    let mut project = heating_project();
    project.pyrolysis = Some(PyrolysisDef {
        scheme: SchemeDef::Custom {
            species: vec![
                SpeciesFieldDef {
                    name: "a".to_string(),
                    phase: PhaseDef::Solid,
                },
                SpeciesFieldDef {
                    name: "a".to_string(),
                    phase: PhaseDef::Solid,
                },
            ],
            reactions: vec![],
        },
        heat_of_reaction_j_per_kg: 0.0,
    });
    assert!(validate_project(&project).is_err());

    // Unknown reactant.
    let mut project = heating_project();
    project.pyrolysis = Some(PyrolysisDef {
        scheme: SchemeDef::Custom {
            species: vec![SpeciesFieldDef {
                name: "a".to_string(),
                phase: PhaseDef::Solid,
            }],
            reactions: vec![ReactionDef {
                name: "bad".to_string(),
                reactant: "missing".to_string(),
                rate: RateLawDef::Arrhenius {
                    a: 1.0,
                    e_j_per_mol: 0.0,
                },
                products: vec![],
            }],
        },
        heat_of_reaction_j_per_kg: 0.0,
    });
    assert!(validate_project(&project).is_err());

    // Volatile virgin species.
    let mut project = heating_project();
    project.pyrolysis = Some(PyrolysisDef {
        scheme: SchemeDef::Custom {
            species: vec![SpeciesFieldDef {
                name: "gas".to_string(),
                phase: PhaseDef::Volatile,
            }],
            reactions: vec![],
        },
        heat_of_reaction_j_per_kg: 0.0,
    });
    assert!(validate_project(&project).is_err());
}
