//! Math kernels
//!
//! Standard normal distribution functions used throughout the
//! Black-Scholes formula family.

pub mod normal;

pub use normal::*;
