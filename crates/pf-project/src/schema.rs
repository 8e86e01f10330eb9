//! Run definition schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParticleProject {
    pub version: u32,
    pub name: String,
    pub particle: ParticleDef,
    pub material: MaterialDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pyrolysis: Option<PyrolysisDef>,
    pub run: RunDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParticleDef {
    pub geometry: GeometryDef,
    pub diameter_m: f64,
    pub nodes: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GeometryDef {
    Slab,
    Cylinder,
    Sphere,
}

/// Linear property correlation `a + b·(T − 273.15)`; omit `b` for a
/// constant property.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FitDef {
    pub a: f64,
    #[serde(default)]
    pub b: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialDef {
    pub rho_virgin_kg_per_m3: f64,
    pub cp_virgin: FitDef,
    pub k_virgin: FitDef,
    pub cp_char: FitDef,
    pub k_char: FitDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PyrolysisDef {
    pub scheme: SchemeDef,
    /// J/kg; negative = exothermic.
    pub heat_of_reaction_j_per_kg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum SchemeDef {
    /// A scheme from the built-in catalog, by canonical id or alias.
    Named { id: String },
    /// A custom reaction network. The first species is the virgin solid.
    Custom {
        species: Vec<SpeciesFieldDef>,
        #[serde(default)]
        reactions: Vec<ReactionDef>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeciesFieldDef {
    pub name: String,
    pub phase: PhaseDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PhaseDef {
    Solid,
    Volatile,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReactionDef {
    pub name: String,
    pub reactant: String,
    pub rate: RateLawDef,
    #[serde(default)]
    pub products: Vec<ProductDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum RateLawDef {
    Arrhenius { a: f64, e_j_per_mol: f64 },
    ArrheniusLinearT { a: f64, e_j_per_mol: f64 },
    TwoTermExponent { a: f64, g_k: f64, l_k2: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDef {
    pub species: String,
    #[serde(rename = "yield")]
    pub yield_frac: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunDef {
    pub t_end_s: f64,
    pub steps: usize,
    pub initial_temperature_k: f64,
    pub ambient_temperature_k: f64,
    pub h_w_per_m2_k: f64,
    #[serde(default)]
    pub check_finite: bool,
}
