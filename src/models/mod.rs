//! Pricing models
//!
//! Implements:
//! - Black-Scholes closed form (price, Greeks)
//! - Implied volatility solver (Newton-Raphson with bisection fallback)

pub mod black_scholes;
pub mod implied_vol;

pub use black_scholes::*;
pub use implied_vol::*;
