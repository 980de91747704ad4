//! # BS Options - European Option Pricing
//!
//! A small, pure-function library for European vanilla options:
//! Black-Scholes closed-form pricing, Greeks, and an implied volatility
//! solver (Newton-Raphson with a guaranteed bisection fallback).
//!
//! ## Key Components
//!
//! - **Normal kernel**: standard normal pdf/cdf
//! - **Black-Scholes**: closed-form call/put prices with explicit
//!   expiry and zero-volatility boundary handling
//! - **Greeks**: delta, gamma, vega, theta, rho as standalone functions
//! - **Implied Volatility**: hybrid Newton/bisection root finder that
//!   always returns a number, never errors
//!
//! ## Usage
//!
//! ```rust
//! use bs_options::prelude::*;
//! use bs_options::models::black_scholes;
//!
//! let price = black_scholes::price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0);
//!
//! // Recover the volatility implied by a market price
//! let iv = implied_vol(OptionType::Call, price, 100.0, 100.0, 0.05, 1.0);
//! assert!((iv - 0.20).abs() < 1e-6);
//! ```
//!
//! ## What This Library Does
//!
//! - Prices European calls and puts in closed form
//! - Computes analytic first-order Greeks (plus gamma)
//! - Inverts the pricing formula for implied volatility
//!
//! ## What This Library Does NOT Do
//!
//! - American exercise or dividend yields
//! - PDE or Monte Carlo pricing
//! - Market data I/O or volatility surfaces
//!
//! Every function is a pure function of its arguments: no global state,
//! no interior mutability. Calls may run concurrently without locking.

pub mod core;
pub mod math;
pub mod models;

/// Prelude with commonly used types and functions
pub mod prelude {
    // Core types
    pub use crate::core::{Greeks, OptionType, PricingError, PricingResult};

    // Distribution kernel
    pub use crate::math::{norm_cdf, norm_pdf};

    // Implied volatility solver
    pub use crate::models::{implied_vol, implied_vol_checked, implied_vol_with, SolverConfig};
}
