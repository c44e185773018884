//! Long call butterfly spread costing.
//!
//! cost = C(K_low) - 2 * C(K_mid) + C(K_high)
//!
//! One long call at each wing, two short at the body. All three legs
//! share spot, expiry, rate, and volatility. Pure composition of the
//! chosen pricing model: no side effects, no allocations.

use crate::errors::PricingResult;
use crate::models::{OptionParams, OptionPricingModel};

/// The three strikes of a butterfly, conventionally low < mid < high.
/// Ordering is not enforced: an inverted ladder simply prices as a
/// net credit (negative cost).
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct ButterflyStrikes {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

/// Net cost of the spread under the chosen pricing model.
///
/// Each leg is validated independently; the first invalid leg aborts
/// the computation. Identical strikes cancel to exactly 0.0.
pub fn butterfly_cost(
    model: &dyn OptionPricingModel,
    spot: f64,
    strikes: ButterflyStrikes,
    expiry_years: f64,
    rate: f64,
    sigma: f64,
) -> PricingResult<f64> {
    let low = OptionParams::new(spot, strikes.low, expiry_years, rate, sigma)?;
    let mid = OptionParams::new(spot, strikes.mid, expiry_years, rate, sigma)?;
    let high = OptionParams::new(spot, strikes.high, expiry_years, rate, sigma)?;

    Ok(model.call_price(&low) - 2.0 * model.call_price(&mid) + model.call_price(&high))
}
