//! Option type definitions
//!
//! The Call/Put flag plus the payoff helpers every formula in this crate
//! branches on.

use serde::{Deserialize, Serialize};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Intrinsic value against the discounted strike: the zero-volatility
    /// price limit for `time > 0`, and the floor below which no market
    /// price carries any time value.
    pub fn discounted_intrinsic(&self, spot: f64, strike: f64, rate: f64, time: f64) -> f64 {
        let df = (-rate * time).exp();
        match self {
            OptionType::Call => (spot - strike * df).max(0.0),
            OptionType::Put => (strike * df - spot).max(0.0),
        }
    }
}
