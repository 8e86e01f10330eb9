//! Temperature-dependent rate constants.

/// Universal gas constant, J/(mol·K).
pub const GAS_CONSTANT_J_PER_MOL_K: f64 = 8.314_462_618;

/// Rate-constant expression for one reaction, k in 1/s.
///
/// Activation energies are stored in J/mol; scheme tables quoted in kJ/mol
/// or kcal/kmol are converted when the network is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RateLaw {
    /// `k = A·exp(−E/(R·T))`
    Arrhenius { a: f64, e: f64 },
    /// `k = A·T·exp(−E/(R·T))`, the linear-in-T pre-multiplier some of the
    /// Ranzi depolymerization steps use.
    ArrheniusLinearT { a: f64, e: f64 },
    /// `k = A·exp(g/T + l/T²)`, the two-term exponent of the Koufopanos
    /// primary reactions.
    TwoTermExponent { a: f64, g: f64, l: f64 },
}

impl RateLaw {
    /// Evaluate the rate constant at temperature `t_k` (Kelvin).
    ///
    /// Extreme temperatures can overflow the exponential; the result is then
    /// non-finite and propagates to the caller unchecked.
    pub fn eval(&self, t_k: f64) -> f64 {
        match *self {
            RateLaw::Arrhenius { a, e } => a * (-e / (GAS_CONSTANT_J_PER_MOL_K * t_k)).exp(),
            RateLaw::ArrheniusLinearT { a, e } => {
                a * t_k * (-e / (GAS_CONSTANT_J_PER_MOL_K * t_k)).exp()
            }
            RateLaw::TwoTermExponent { a, g, l } => a * (g / t_k + l / (t_k * t_k)).exp(),
        }
    }
}
