//! Directed reaction networks over named species.

use crate::error::{KineticsError, KineticsResult};
use crate::rate::RateLaw;

/// Phase tag: only solid-phase species contribute to the particle's
/// effective density and to the heat-generation balance; volatile species
/// are tracked for yields but leave the solid matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Solid,
    Volatile,
}

#[derive(Clone, Debug)]
pub struct SpeciesDef {
    pub name: String,
    pub phase: Phase,
}

impl SpeciesDef {
    pub fn solid(name: &str) -> Self {
        Self {
            name: name.to_string(),
            phase: Phase::Solid,
        }
    }

    pub fn volatile(name: &str) -> Self {
        Self {
            name: name.to_string(),
            phase: Phase::Volatile,
        }
    }
}

/// One first-order reaction: `reactant -> products` at `rate.eval(T) ·
/// x_reactant`. Yields are stoichiometric mass splits; they may sum above 1
/// (deposition coefficients) or below 1 (untracked volatiles).
#[derive(Clone, Debug)]
pub struct Reaction {
    pub name: String,
    pub reactant: usize,
    pub rate: RateLaw,
    /// (species index, yield) pairs produced by this reaction.
    pub products: Vec<(usize, f64)>,
}

/// A reaction network. Species index 0 is the parent (virgin) species that
/// starts at mass fraction 1.
#[derive(Clone, Debug)]
pub struct ReactionNetwork {
    species: Vec<SpeciesDef>,
    reactions: Vec<Reaction>,
}

impl ReactionNetwork {
    pub fn new(species: Vec<SpeciesDef>) -> KineticsResult<Self> {
        if species.is_empty() {
            return Err(KineticsError::NoSpecies);
        }
        for (i, sp) in species.iter().enumerate() {
            if species[..i].iter().any(|other| other.name == sp.name) {
                return Err(KineticsError::DuplicateSpecies {
                    name: sp.name.clone(),
                });
            }
        }
        Ok(Self {
            species,
            reactions: Vec::new(),
        })
    }

    /// Add a reaction, resolving species by name.
    pub fn add_reaction(
        &mut self,
        name: &str,
        reactant: &str,
        rate: RateLaw,
        products: &[(&str, f64)],
    ) -> KineticsResult<()> {
        let reactant = self.species_index(reactant).ok_or_else(|| {
            KineticsError::UnknownSpecies {
                name: reactant.to_string(),
                context: format!("reaction '{name}'"),
            }
        })?;
        let mut resolved = Vec::with_capacity(products.len());
        for &(sp_name, yield_) in products {
            let sp = self.species_index(sp_name).ok_or_else(|| {
                KineticsError::UnknownSpecies {
                    name: sp_name.to_string(),
                    context: format!("reaction '{name}'"),
                }
            })?;
            if !yield_.is_finite() || yield_ < 0.0 {
                return Err(KineticsError::InvalidYield {
                    species: sp_name.to_string(),
                    reaction: name.to_string(),
                    value: yield_,
                });
            }
            resolved.push((sp, yield_));
        }
        self.reactions.push(Reaction {
            name: name.to_string(),
            reactant,
            rate,
            products: resolved,
        });
        Ok(())
    }

    pub fn species(&self) -> &[SpeciesDef] {
        &self.species
    }

    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    pub fn n_species(&self) -> usize {
        self.species.len()
    }

    pub fn species_index(&self, name: &str) -> Option<usize> {
        self.species.iter().position(|sp| sp.name == name)
    }

    /// Index of the parent species (initial mass fraction 1).
    pub fn virgin_index(&self) -> usize {
        0
    }

    /// True when every reaction's yields sum to 1, i.e. the network
    /// redistributes mass without creating or dropping any. The species
    /// fraction sum is then invariant under integration.
    pub fn is_conservative(&self) -> bool {
        self.reactions.iter().all(|rxn| {
            let total: f64 = rxn.products.iter().map(|&(_, y)| y).sum();
            (total - 1.0).abs() < 1e-12
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_species() -> Vec<SpeciesDef> {
        vec![
            SpeciesDef::solid("biomass"),
            SpeciesDef::solid("char"),
            SpeciesDef::volatile("gas"),
        ]
    }

    #[test]
    fn rejects_duplicate_species() {
        let species = vec![SpeciesDef::solid("a"), SpeciesDef::solid("a")];
        assert!(matches!(
            ReactionNetwork::new(species),
            Err(KineticsError::DuplicateSpecies { .. })
        ));
    }

    #[test]
    fn rejects_unknown_reactant_and_product() {
        let mut net = ReactionNetwork::new(simple_species()).unwrap();
        let rate = RateLaw::Arrhenius { a: 1.0, e: 0.0 };

        assert!(matches!(
            net.add_reaction("bad", "tar", rate, &[]),
            Err(KineticsError::UnknownSpecies { .. })
        ));
        assert!(matches!(
            net.add_reaction("bad", "biomass", rate, &[("tar", 1.0)]),
            Err(KineticsError::UnknownSpecies { .. })
        ));
    }

    #[test]
    fn rejects_negative_yield() {
        let mut net = ReactionNetwork::new(simple_species()).unwrap();
        let rate = RateLaw::Arrhenius { a: 1.0, e: 0.0 };
        assert!(matches!(
            net.add_reaction("bad", "biomass", rate, &[("char", -0.5)]),
            Err(KineticsError::InvalidYield { .. })
        ));
    }

    #[test]
    fn conservative_check() {
        let rate = RateLaw::Arrhenius { a: 1.0, e: 0.0 };

        let mut net = ReactionNetwork::new(simple_species()).unwrap();
        net.add_reaction("split", "biomass", rate, &[("char", 0.3), ("gas", 0.7)])
            .unwrap();
        assert!(net.is_conservative());

        let mut lossy = ReactionNetwork::new(simple_species()).unwrap();
        lossy
            .add_reaction("vanish", "biomass", rate, &[])
            .unwrap();
        assert!(!lossy.is_conservative());
    }
}
