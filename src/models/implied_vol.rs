//! Implied volatility solver
//!
//! Inverts the Black-Scholes price for volatility given an observed market
//! price. The procedure is a two-phase hybrid:
//!
//! 1. **Newton-Raphson** seeded from `initial_sigma`, using analytic vega
//!    as the derivative. Quadratic convergence on well-behaved inputs,
//!    typically a handful of iterations.
//! 2. **Bisection fallback** over a bracket that is widened geometrically
//!    until it contains the root (or hits a hard ceiling). Entered whenever
//!    Newton stalls: near-zero vega, a non-finite step, or a step that
//!    escapes the bracket.
//!
//! The solver never errors and never panics. Prices at or below the
//! discounted intrinsic value short-circuit to zero volatility, and a
//! market price no volatility can reach resolves to a best-effort clamp at
//! the nearer bracket endpoint. Callers wanting input validation up front
//! use [`implied_vol_checked`].

use serde::{Deserialize, Serialize};

use crate::core::{OptionType, PricingError, PricingResult};
use crate::models::black_scholes::{price, vega};

/// Prices within this distance of intrinsic carry no time value.
const INTRINSIC_TOL: f64 = 1e-14;

/// Lower bracket endpoint: effectively zero vol, kept positive so the
/// pricing formula stays on its general branch.
const BRACKET_LOW: f64 = 1e-12;

/// Initial upper bracket endpoint (500% vol).
const BRACKET_HIGH: f64 = 5.0;

/// Ceiling for bracket widening (10000% vol).
const BRACKET_CEILING: f64 = 100.0;

/// Vega below this makes a Newton step unstable.
const VEGA_FLOOR: f64 = 1e-8;

/// Iteration budget for the bisection fallback. The bracket spans at most
/// ~100, so ~50 halvings reach 1e-8; 200 leaves ample margin.
const BISECTION_MAX_ITER: usize = 200;

/// Per-call solver parameters
///
/// Stands in for the defaulted arguments of the original signature:
/// override any subset, or use [`SolverConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Starting point for the Newton phase
    pub initial_sigma: f64,
    /// Convergence tolerance on the price residual
    pub tol: f64,
    /// Newton iteration budget before falling back to bisection
    pub max_iter: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_sigma: 0.2,
            tol: 1e-8,
            max_iter: 100,
        }
    }
}

/// Implied volatility with default solver parameters
///
/// Always returns a number: zero for prices at or below intrinsic, a
/// clamped endpoint for prices outside the achievable range.
pub fn implied_vol(
    option_type: OptionType,
    market_price: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    time: f64,
) -> f64 {
    implied_vol_with(
        option_type,
        market_price,
        spot,
        strike,
        rate,
        time,
        &SolverConfig::default(),
    )
}

/// Implied volatility with explicit solver parameters
pub fn implied_vol_with(
    option_type: OptionType,
    market_price: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    time: f64,
    config: &SolverConfig,
) -> f64 {
    // A price at intrinsic has zero time value, hence zero implied vol.
    // Must run before any iteration.
    let intrinsic = option_type.discounted_intrinsic(spot, strike, rate, time);
    if market_price <= intrinsic + INTRINSIC_TOL {
        return 0.0;
    }

    // Establish the bisection bracket, widening geometrically if even
    // 500% vol prices below the market.
    let low = BRACKET_LOW;
    let mut high = BRACKET_HIGH;
    let mut price_high = price(option_type, spot, strike, rate, high, time);
    while price_high < market_price && high < BRACKET_CEILING {
        high *= 2.0;
        price_high = price(option_type, spot, strike, rate, high, time);
    }

    // Newton phase
    let mut sigma = config.initial_sigma.max(1e-8);
    for _ in 0..config.max_iter {
        let p = price(option_type, spot, strike, rate, sigma, time);
        let diff = p - market_price;
        if diff.abs() < config.tol {
            return sigma;
        }

        let v = vega(spot, strike, rate, sigma, time);
        if v <= VEGA_FLOOR {
            // Flat price curve, a Newton step would be unstable
            tracing::trace!(sigma, vega = v, "vega floor hit, switching to bisection");
            break;
        }

        sigma -= diff / v;
        if sigma <= 0.0 || !sigma.is_finite() || sigma > high {
            tracing::trace!(sigma, "Newton step left the bracket, switching to bisection");
            break;
        }
    }

    // Bisection fallback, guaranteed to terminate
    let mut a = low;
    let mut b = high;
    let mut fa = price(option_type, spot, strike, rate, a, time) - market_price;
    let fb = price(option_type, spot, strike, rate, b, time) - market_price;

    if fa * fb > 0.0 {
        // No sign change: the market price is outside the achievable
        // range. Clamp to the endpoint with the smaller residual.
        tracing::debug!(
            market_price,
            low = a,
            high = b,
            "no sign change in bracket, clamping"
        );
        return if fa.abs() < fb.abs() { a } else { b };
    }

    let mut mid = 0.5 * (a + b);
    for _ in 0..BISECTION_MAX_ITER {
        mid = 0.5 * (a + b);
        let fm = price(option_type, spot, strike, rate, mid, time) - market_price;
        if fm.abs() < config.tol {
            return mid;
        }
        if fa * fm <= 0.0 {
            b = mid;
        } else {
            a = mid;
            fa = fm;
        }
        if b - a < config.tol {
            break;
        }
    }
    mid
}

/// Validated implied volatility
///
/// Rejects economically nonsensical inputs before delegating to the
/// permissive solver. Production wrapper for callers that prefer an error
/// over a silently clamped number.
pub fn implied_vol_checked(
    option_type: OptionType,
    market_price: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    time: f64,
    config: &SolverConfig,
) -> PricingResult<f64> {
    if !market_price.is_finite() || market_price <= 0.0 {
        return Err(PricingError::invalid_input("non-positive market price"));
    }
    if spot <= 0.0 || strike <= 0.0 {
        return Err(PricingError::invalid_input("non-positive spot or strike"));
    }
    if time < 0.0 {
        return Err(PricingError::invalid_input("negative time to expiry"));
    }

    let iv = implied_vol_with(option_type, market_price, spot, strike, rate, time, config);
    if !iv.is_finite() {
        return Err(PricingError::numerical("solver produced non-finite vol"));
    }
    Ok(iv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_round_trip_atm() {
        let market = price(OptionType::Call, 100.0, 100.0, 0.05, 0.25, 0.5);
        let iv = implied_vol(OptionType::Call, market, 100.0, 100.0, 0.05, 0.5);
        assert!((iv - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip_put() {
        let market = price(OptionType::Put, 100.0, 110.0, 0.03, 0.40, 1.5);
        let iv = implied_vol(OptionType::Put, market, 100.0, 110.0, 0.03, 1.5);
        assert!((iv - 0.40).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip_randomized() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..200 {
            let spot: f64 = rng.gen_range(80.0..120.0);
            let strike = spot * rng.gen_range(0.9..1.1);
            let rate = rng.gen_range(0.0..0.08);
            let vol = rng.gen_range(0.1..1.5);
            let time = rng.gen_range(0.1..3.0);
            let option_type = if rng.gen_bool(0.5) {
                OptionType::Call
            } else {
                OptionType::Put
            };

            let market = price(option_type, spot, strike, rate, vol, time);
            let iv = implied_vol(option_type, market, spot, strike, rate, time);
            assert!(
                (iv - vol).abs() < 1e-4,
                "round trip failed: vol={} iv={} spot={} strike={} t={}",
                vol,
                iv,
                spot,
                strike,
                time
            );
        }
    }

    #[test]
    fn test_round_trip_high_vol() {
        // Starts far from the default seed; Newton must climb or hand off
        let market = price(OptionType::Call, 100.0, 100.0, 0.05, 2.5, 2.0);
        let iv = implied_vol(OptionType::Call, market, 100.0, 100.0, 0.05, 2.0);
        assert!((iv - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_price_at_intrinsic_returns_zero() {
        // Deep ITM call quoted exactly at discounted intrinsic
        let intrinsic = OptionType::Call.discounted_intrinsic(150.0, 100.0, 0.05, 1.0);
        let iv = implied_vol(OptionType::Call, intrinsic, 150.0, 100.0, 0.05, 1.0);
        assert_eq!(iv, 0.0);

        // Below intrinsic as well
        let iv = implied_vol(OptionType::Put, 1.0, 100.0, 150.0, 0.05, 1.0);
        assert_eq!(iv, 0.0);
    }

    #[test]
    fn test_absurd_price_clamps() {
        // No volatility can push a call price above spot; the solver must
        // terminate and clamp rather than hang or return NaN.
        let iv = implied_vol(OptionType::Call, 1000.0, 100.0, 100.0, 0.05, 1.0);
        assert!(iv.is_finite());
        assert!(iv > BRACKET_HIGH);
    }

    #[test]
    fn test_expired_option_terminates() {
        // T = 0 with a price above intrinsic: price curve is flat in vol,
        // so there is no root; the clamp path must still return a number.
        let iv = implied_vol(OptionType::Call, 15.0, 100.0, 100.0, 0.05, 0.0);
        assert!(iv.is_finite());
    }

    #[test]
    fn test_custom_config() {
        assert_eq!(
            SolverConfig::default(),
            SolverConfig {
                initial_sigma: 0.2,
                tol: 1e-8,
                max_iter: 100
            }
        );

        // A bad seed still converges via the fallback machinery
        let config = SolverConfig {
            initial_sigma: 4.9,
            ..SolverConfig::default()
        };
        let market = price(OptionType::Call, 100.0, 105.0, 0.02, 0.3, 0.75);
        let iv = implied_vol_with(OptionType::Call, market, 100.0, 105.0, 0.02, 0.75, &config);
        assert!((iv - 0.3).abs() < 1e-4);
    }

    #[test]
    fn test_checked_rejects_bad_input() {
        let config = SolverConfig::default();

        assert!(
            implied_vol_checked(OptionType::Call, -1.0, 100.0, 100.0, 0.05, 1.0, &config).is_err()
        );
        assert!(
            implied_vol_checked(OptionType::Call, 10.0, 0.0, 100.0, 0.05, 1.0, &config).is_err()
        );
        assert!(
            implied_vol_checked(OptionType::Call, 10.0, 100.0, 100.0, 0.05, -1.0, &config).is_err()
        );

        let iv = implied_vol_checked(OptionType::Call, 10.45, 100.0, 100.0, 0.05, 1.0, &config)
            .unwrap();
        assert!((iv - 0.2).abs() < 1e-2);
    }
}
