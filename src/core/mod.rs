//! Core data types for European option pricing
//!
//! Defines fundamental types:
//! - OptionType: Call/Put with payoff helpers
//! - Greeks: first-order sensitivities (plus gamma)
//! - PricingError: error type for the validated entry points

pub mod error;
pub mod greeks;
pub mod option;

pub use error::*;
pub use greeks::*;
pub use option::*;
