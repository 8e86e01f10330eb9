//! Catalog of published pyrolysis kinetic schemes.
//!
//! Each entry builds a ready-made [`ReactionNetwork`] from the constant
//! tables of the corresponding paper. Activation energies quoted in kJ/mol
//! or kcal/kmol are converted to J/mol here, once.

use crate::error::KineticsResult;
use crate::network::{ReactionNetwork, SpeciesDef};
use crate::rate::RateLaw;

#[derive(Debug, Clone, Copy)]
pub struct SchemeCatalogEntry {
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    builder: fn() -> KineticsResult<ReactionNetwork>,
}

impl SchemeCatalogEntry {
    pub fn build(&self) -> KineticsResult<ReactionNetwork> {
        (self.builder)()
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }
}

/// Koufopanos 1991: biomass decomposes to volatiles and primary char via
/// two-term-exponent rates; primary char converts to secondary char with a
/// deposition coefficient of 1.45.
fn koufopanos_1991() -> KineticsResult<ReactionNetwork> {
    let mut net = ReactionNetwork::new(vec![
        SpeciesDef::solid("biomass"),
        SpeciesDef::solid("char1"),
        SpeciesDef::solid("char2"),
    ])?;
    net.add_reaction(
        "biomass -> volatiles",
        "biomass",
        RateLaw::TwoTermExponent {
            a: 9.973e-5,
            g: 17_254.4,
            l: -9_061_227.0,
        },
        &[],
    )?;
    net.add_reaction(
        "biomass -> char1",
        "biomass",
        RateLaw::TwoTermExponent {
            a: 1.068e-3,
            g: 10_224.4,
            l: -6_123_081.0,
        },
        &[("char1", 1.0)],
    )?;
    net.add_reaction(
        "char1 -> char2",
        "char1",
        RateLaw::Arrhenius {
            a: 5.7e5,
            e: 81_000.0,
        },
        &[("char2", 1.45)],
    )?;
    Ok(net)
}

/// Sadhukhan 2009: same topology as Koufopanos with plain Arrhenius
/// constants and a deposition coefficient of 1.38.
fn sadhukhan_2009() -> KineticsResult<ReactionNetwork> {
    let mut net = ReactionNetwork::new(vec![
        SpeciesDef::solid("biomass"),
        SpeciesDef::solid("char1"),
        SpeciesDef::solid("char2"),
    ])?;
    net.add_reaction(
        "biomass -> volatiles",
        "biomass",
        RateLaw::Arrhenius {
            a: 168.4,
            e: 51_965.0,
        },
        &[],
    )?;
    net.add_reaction(
        "biomass -> char1",
        "biomass",
        RateLaw::Arrhenius {
            a: 13.2,
            e: 45_960.0,
        },
        &[("char1", 1.0)],
    )?;
    net.add_reaction(
        "char1 -> char2",
        "char1",
        RateLaw::Arrhenius {
            a: 5.7e6,
            e: 92_400.0,
        },
        &[("char2", 1.38)],
    )?;
    Ok(net)
}

/// Ranzi 2013 cellulose mechanism: activation, depolymerization to
/// levoglucosan, a 13-way light-product split, and a direct char + water
/// path. Energies converted from kcal/kmol (×4.184).
fn ranzi_cell_2013() -> KineticsResult<ReactionNetwork> {
    let mut net = ReactionNetwork::new(vec![
        SpeciesDef::solid("cell"),
        SpeciesDef::solid("cella"),
        SpeciesDef::solid("char"),
        SpeciesDef::volatile("h2o"),
        SpeciesDef::volatile("lvg"),
        SpeciesDef::volatile("haa"),
        SpeciesDef::volatile("glyox"),
        SpeciesDef::volatile("c2h4o"),
        SpeciesDef::volatile("hmfu"),
        SpeciesDef::volatile("c3h6o"),
        SpeciesDef::volatile("co2"),
        SpeciesDef::volatile("h2"),
        SpeciesDef::volatile("ch2o"),
        SpeciesDef::volatile("co"),
        SpeciesDef::volatile("ch4"),
        SpeciesDef::volatile("hcooh"),
    ])?;
    net.add_reaction(
        "cell -> cella",
        "cell",
        RateLaw::Arrhenius {
            a: 4e13,
            e: 188_280.0,
        },
        &[("cella", 1.0)],
    )?;
    net.add_reaction(
        "cell -> char + h2o",
        "cell",
        RateLaw::Arrhenius {
            a: 4e7,
            e: 129_704.0,
        },
        &[("h2o", 5.0), ("char", 6.0)],
    )?;
    net.add_reaction(
        "cella -> lvg",
        "cella",
        RateLaw::ArrheniusLinearT {
            a: 1.8,
            e: 41_840.0,
        },
        &[("lvg", 1.0)],
    )?;
    net.add_reaction(
        "cella -> light products",
        "cella",
        RateLaw::Arrhenius {
            a: 0.5e9,
            e: 121_336.0,
        },
        &[
            ("haa", 0.8),
            ("glyox", 0.2),
            ("c2h4o", 0.1),
            ("hmfu", 0.25),
            ("c3h6o", 0.3),
            ("co2", 0.21),
            ("h2", 0.1),
            ("ch2o", 0.4),
            ("co", 0.16),
            ("ch4", 0.1),
            ("h2o", 0.83),
            ("hcooh", 0.02),
            ("char", 0.61),
        ],
    )?;
    Ok(net)
}

/// Ranzi 2013 hemicellulose mechanism: decomposition into two intermediates
/// with distinct light-product splits, a xylan side path, and trapped-gas
/// pseudo-species (`g*` names). Energies converted from kcal/kmol (×4.184).
fn ranzi_hce_2013() -> KineticsResult<ReactionNetwork> {
    let mut net = ReactionNetwork::new(vec![
        SpeciesDef::solid("hce"),
        SpeciesDef::solid("hce1"),
        SpeciesDef::solid("hce2"),
        SpeciesDef::solid("xylan"),
        SpeciesDef::solid("char"),
        SpeciesDef::volatile("h2o"),
        SpeciesDef::volatile("co2"),
        SpeciesDef::volatile("hcooh"),
        SpeciesDef::volatile("co"),
        SpeciesDef::volatile("ch2o"),
        SpeciesDef::volatile("c2h5oh"),
        SpeciesDef::volatile("ch3oh"),
        SpeciesDef::volatile("c2h4"),
        SpeciesDef::volatile("haa"),
        SpeciesDef::volatile("gh2"),
        SpeciesDef::volatile("gco"),
        SpeciesDef::volatile("gco2"),
        SpeciesDef::volatile("gcoh2"),
        SpeciesDef::volatile("gch3oh"),
        SpeciesDef::volatile("gch4"),
        SpeciesDef::volatile("gc2h4"),
    ])?;
    net.add_reaction(
        "hce -> hce1 + hce2",
        "hce",
        RateLaw::Arrhenius {
            a: 0.33e10,
            e: 129_704.0,
        },
        &[("hce1", 0.4), ("hce2", 0.6)],
    )?;
    net.add_reaction(
        "hce1 -> light products",
        "hce1",
        RateLaw::Arrhenius {
            a: 1e9,
            e: 133_888.0,
        },
        &[
            ("h2o", 0.025),
            ("co2", 0.5),
            ("hcooh", 0.025),
            ("co", 0.5),
            ("ch2o", 0.8),
            ("c2h5oh", 0.125),
            ("ch3oh", 0.1),
            ("c2h4", 0.25),
            ("gh2", 0.125),
            ("gco2", 0.275),
            ("gcoh2", 0.4),
            ("gch3oh", 0.45),
            ("gch4", 0.325),
            ("char", 0.875),
        ],
    )?;
    net.add_reaction(
        "hce1 -> trapped gases",
        "hce1",
        RateLaw::ArrheniusLinearT {
            a: 0.05,
            e: 33_472.0,
        },
        &[
            ("h2o", 0.25),
            ("co2", 0.5),
            ("hcooh", 0.05),
            ("co", 0.3),
            ("gco", 0.15),
            ("gco2", 0.25),
            ("gcoh2", 1.7),
            ("gch4", 0.625),
            ("gc2h4", 0.375),
            ("char", 0.675),
        ],
    )?;
    net.add_reaction(
        "hce1 -> xylan",
        "hce1",
        RateLaw::Arrhenius {
            a: 0.9,
            e: 46_024.0,
        },
        &[("xylan", 1.0)],
    )?;
    net.add_reaction(
        "hce2 -> light products",
        "hce2",
        RateLaw::Arrhenius {
            a: 0.33e10,
            e: 138_072.0,
        },
        &[
            ("h2o", 0.2),
            ("co", 0.175),
            ("co2", 0.275),
            ("ch2o", 0.5),
            ("c2h5oh", 0.1),
            ("haa", 0.2),
            ("hcooh", 0.025),
            ("gch4", 0.25),
            ("gch3oh", 0.3),
            ("gc2h4", 0.275),
            ("gco2", 0.4),
            ("gcoh2", 0.925),
            ("char", 1.0),
        ],
    )?;
    Ok(net)
}

const SCHEME_CATALOG: [SchemeCatalogEntry; 4] = [
    SchemeCatalogEntry {
        canonical_id: "Koufopanos1991",
        display_name: "Koufopanos 1991 wood/char",
        aliases: &["koufopanos"],
        builder: koufopanos_1991,
    },
    SchemeCatalogEntry {
        canonical_id: "Sadhukhan2009",
        display_name: "Sadhukhan 2009 wood/char",
        aliases: &["sadhukhan"],
        builder: sadhukhan_2009,
    },
    SchemeCatalogEntry {
        canonical_id: "RanziCell2013",
        display_name: "Ranzi 2013 cellulose",
        aliases: &["cellulose"],
        builder: ranzi_cell_2013,
    },
    SchemeCatalogEntry {
        canonical_id: "RanziHCE2013",
        display_name: "Ranzi 2013 hemicellulose",
        aliases: &["hemicellulose", "hce"],
        builder: ranzi_hce_2013,
    },
];

pub fn scheme_catalog() -> &'static [SchemeCatalogEntry] {
    &SCHEME_CATALOG
}

/// Look up a scheme by canonical id or alias, case-insensitively.
pub fn find_scheme(id: &str) -> Option<&'static SchemeCatalogEntry> {
    let id = id.trim().to_ascii_lowercase();
    scheme_catalog().iter().find(|entry| {
        entry.canonical_id.to_ascii_lowercase() == id
            || entry
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase() == id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn canonical_ids_are_unique() {
        let mut seen = HashSet::new();
        for entry in scheme_catalog() {
            assert!(
                seen.insert(entry.canonical_id),
                "duplicate canonical id: {}",
                entry.canonical_id
            );
        }
    }

    #[test]
    fn every_scheme_builds() {
        for entry in scheme_catalog() {
            let net = entry.build().unwrap();
            assert!(net.n_species() >= 3);
            assert!(!net.reactions().is_empty());
        }
    }

    #[test]
    fn lookup_by_alias() {
        let entry = find_scheme("koufopanos").unwrap();
        assert_eq!(entry.canonical_id, "Koufopanos1991");
        assert!(find_scheme("no-such-scheme").is_none());
    }

    #[test]
    fn search_matches_display_names_and_aliases() {
        // "cellulose" is a substring of "hemicellulose", so both Ranzi
        // schemes match; the longer query narrows to one.
        let cellulose: Vec<_> = scheme_catalog()
            .iter()
            .filter(|entry| entry.matches_query("cellulose"))
            .map(|entry| entry.canonical_id)
            .collect();
        assert_eq!(cellulose, vec!["RanziCell2013", "RanziHCE2013"]);

        let hemi: Vec<_> = scheme_catalog()
            .iter()
            .filter(|entry| entry.matches_query("hemicellulose"))
            .map(|entry| entry.canonical_id)
            .collect();
        assert_eq!(hemi, vec!["RanziHCE2013"]);
    }

    #[test]
    fn hemicellulose_network_is_the_large_one() {
        let net = find_scheme("hce").unwrap().build().unwrap();
        assert_eq!(net.n_species(), 21);
        assert_eq!(net.reactions().len(), 5);
        assert!(
            net.reactions()
                .iter()
                .any(|rxn| matches!(rxn.rate, crate::rate::RateLaw::ArrheniusLinearT { .. }))
        );
    }

    #[test]
    fn wood_schemes_track_solids_only() {
        for id in ["Koufopanos1991", "Sadhukhan2009"] {
            let net = find_scheme(id).unwrap().build().unwrap();
            assert_eq!(net.n_species(), 3);
            assert_eq!(net.reactions().len(), 3);
            assert!(!net.is_conservative()); // volatiles are untracked
        }
    }
}
