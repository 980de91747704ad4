//! Standard normal distribution kernel
//!
//! Pure functions, no state. The CDF goes through `statrs`, whose
//! erf-based implementation is accurate to well below 1e-9 absolute
//! error over |x| <= 10.

use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::PI;

/// Standard normal PDF: exp(-x²/2) / sqrt(2π)
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}
