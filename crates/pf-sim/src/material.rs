//! Solid material property correlations.

/// Linear-in-temperature property correlation `a + b·(T − 273.15)`.
///
/// A constant property is the `b = 0` case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyFit {
    pub a: f64,
    pub b: f64,
}

impl PropertyFit {
    pub const fn constant(a: f64) -> Self {
        Self { a, b: 0.0 }
    }

    pub fn eval(&self, t_k: f64) -> f64 {
        self.a + self.b * (t_k - 273.15)
    }
}

/// Virgin-solid and char property correlations plus the virgin density.
///
/// Effective per-node properties mix the virgin and char correlations by
/// the local virgin mass share of the remaining solid.
#[derive(Clone, Copy, Debug)]
pub struct SolidMaterial {
    /// Density of the virgin material, kg/m³
    pub rho_virgin_kg_per_m3: f64,
    /// Virgin heat capacity, J/(kg·K)
    pub cp_virgin: PropertyFit,
    /// Virgin thermal conductivity, W/(m·K)
    pub k_virgin: PropertyFit,
    /// Char heat capacity, J/(kg·K)
    pub cp_char: PropertyFit,
    /// Char thermal conductivity, W/(m·K)
    pub k_char: PropertyFit,
}

impl SolidMaterial {
    /// Dry wood correlations used by the Sadhukhan and Pyle particle models.
    pub fn dry_wood(rho_virgin_kg_per_m3: f64) -> Self {
        Self {
            rho_virgin_kg_per_m3,
            cp_virgin: PropertyFit { a: 1112.0, b: 4.85 },
            k_virgin: PropertyFit { a: 0.13, b: 3e-4 },
            cp_char: PropertyFit { a: 1003.2, b: 2.09 },
            k_char: PropertyFit { a: 0.08, b: -1e-4 },
        }
    }

    /// Constant-property beech wood set from the Papadikis fast-pyrolysis
    /// study.
    pub fn beech() -> Self {
        Self {
            rho_virgin_kg_per_m3: 700.0,
            cp_virgin: PropertyFit::constant(1500.0),
            k_virgin: PropertyFit::constant(0.105),
            cp_char: PropertyFit::constant(1100.0),
            k_char: PropertyFit::constant(0.071),
        }
    }

    /// Effective (rho, cp, k) at one node.
    ///
    /// `virgin` is the virgin-species mass fraction, `solid_total` the total
    /// solid fraction at the node; the mixing weight is their ratio. When
    /// the solid phase is exhausted the weight falls back to all-char
    /// instead of dividing by zero.
    pub fn effective(&self, t_k: f64, virgin: f64, solid_total: f64) -> (f64, f64, f64) {
        let yw = if solid_total > 0.0 {
            virgin / solid_total
        } else {
            0.0
        };
        let cp = yw * self.cp_virgin.eval(t_k) + (1.0 - yw) * self.cp_char.eval(t_k);
        let k = yw * self.k_virgin.eval(t_k) + (1.0 - yw) * self.k_char.eval(t_k);
        let rho = self.rho_virgin_kg_per_m3 * solid_total;
        (rho, cp, k)
    }
}
