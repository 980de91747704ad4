//! Black-Scholes Model
//!
//! Closed-form European option pricing and analytic Greeks.
//!
//! Every function here is self-contained: it takes the full parameter set
//! and recomputes d1/d2 itself, so each one can be called in isolation.
//! Boundary behavior (expiry, zero volatility) is handled by explicit
//! early returns rather than folded into the general formula.
//!
//! Inputs are not validated. Non-positive spot or strike will propagate
//! non-finite values through the formulas; that permissiveness is relied
//! on by the implied volatility solver, which deliberately evaluates
//! extreme volatilities while widening its bracket.

use crate::core::{Greeks, OptionType};
use crate::math::{norm_cdf, norm_pdf};

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    d1(spot, strike, rate, vol, time) - vol * time.sqrt()
}

/// Black-Scholes European option price
///
/// Expired options (`time <= 0`) are worth exactly their intrinsic value,
/// undiscounted. With zero volatility and time remaining, the price
/// collapses to the intrinsic value against the discounted strike.
pub fn price(option_type: OptionType, spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    if time <= 0.0 {
        return option_type.intrinsic(spot, strike);
    }
    if vol <= 0.0 {
        return option_type.discounted_intrinsic(spot, strike, rate, time);
    }

    let d1 = d1(spot, strike, rate, vol, time);
    let d2 = d2(spot, strike, rate, vol, time);
    let df = (-rate * time).exp();

    match option_type {
        OptionType::Call => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionType::Put => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}

/// Delta: dV/dS
///
/// At expiry delta degenerates to a step function on spot vs strike.
pub fn delta(option_type: OptionType, spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    if time <= 0.0 {
        return match option_type {
            OptionType::Call => {
                if spot > strike {
                    1.0
                } else {
                    0.0
                }
            }
            OptionType::Put => {
                if spot < strike {
                    -1.0
                } else {
                    0.0
                }
            }
        };
    }

    let d1 = d1(spot, strike, rate, vol, time);
    match option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - 1.0,
    }
}

/// Gamma: d²V/dS² (identical for calls and puts)
pub fn gamma(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    if time <= 0.0 || vol <= 0.0 {
        return 0.0;
    }
    let d1 = d1(spot, strike, rate, vol, time);
    norm_pdf(d1) / (spot * vol * time.sqrt())
}

/// Vega: dV/dσ, per unit vol move (identical for calls and puts)
///
/// Per-percentage-point sensitivity is this divided by 100.
pub fn vega(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    if time <= 0.0 {
        return 0.0;
    }
    let d1 = d1(spot, strike, rate, vol, time);
    spot * norm_pdf(d1) * time.sqrt()
}

/// Theta: dV/dt, per year
pub fn theta(option_type: OptionType, spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    if time <= 0.0 {
        return 0.0;
    }
    let sqrt_t = time.sqrt();
    let d1 = d1(spot, strike, rate, vol, time);
    let d2 = d1 - vol * sqrt_t;
    let decay = -(spot * norm_pdf(d1) * vol) / (2.0 * sqrt_t);
    let carry = rate * strike * (-rate * time).exp();

    match option_type {
        OptionType::Call => decay - carry * norm_cdf(d2),
        OptionType::Put => decay + carry * norm_cdf(-d2),
    }
}

/// Rho: dV/dr, per unit rate move
pub fn rho(option_type: OptionType, spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    if time <= 0.0 {
        return 0.0;
    }
    let d2 = d2(spot, strike, rate, vol, time);
    let df = (-rate * time).exp();

    match option_type {
        OptionType::Call => strike * time * df * norm_cdf(d2),
        OptionType::Put => -strike * time * df * norm_cdf(-d2),
    }
}

/// All five Greeks in one struct
pub fn greeks(option_type: OptionType, spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> Greeks {
    Greeks::new(
        delta(option_type, spot, strike, rate, vol, time),
        gamma(spot, strike, rate, vol, time),
        theta(option_type, spot, strike, rate, vol, time),
        vega(spot, strike, rate, vol, time),
        rho(option_type, spot, strike, rate, vol, time),
    )
}
