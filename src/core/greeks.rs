//! Option Greeks
//!
//! First-order sensitivities (plus gamma) for European options.

use serde::{Deserialize, Serialize};

/// Option Greeks (sensitivities)
///
/// Units follow the raw formulas: vega per unit vol move, theta per year,
/// rho per unit rate move. Callers wanting per-1% or per-day figures scale
/// themselves.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to spot)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// Theta: dV/dt (time decay, per year)
    pub theta: f64,
    /// Vega: dV/dσ (sensitivity to volatility)
    pub vega: f64,
    /// Rho: dV/dr (sensitivity to interest rate)
    pub rho: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho,
        }
    }

    /// Scale Greeks by a factor (e.g., for notional or per-1% quoting)
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            theta: self.theta * factor,
            vega: self.vega * factor,
            rho: self.rho * factor,
        }
    }

    /// Add two Greeks (for aggregating positions)
    pub fn add(&self, other: &Greeks) -> Self {
        Self {
            delta: self.delta + other.delta,
            gamma: self.gamma + other.gamma,
            theta: self.theta + other.theta,
            vega: self.vega + other.vega,
            rho: self.rho + other.rho,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_and_add() {
        let g = Greeks::new(0.6, 0.02, -6.0, 37.0, 53.0);

        let scaled = g.scale(100.0);
        assert_eq!(scaled.delta, 60.0);
        assert_eq!(scaled.vega, 3700.0);

        let sum = g.add(&g);
        assert_eq!(sum.delta, 1.2);
        assert_eq!(sum.theta, -12.0);
    }
}
