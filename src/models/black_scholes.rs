use crate::models::{OptionParams, OptionPricingModel};
use statrs::distribution::{ContinuousCDF, Normal};

/// Black-Scholes European call pricing.
///
/// d1 = (ln(S/K) + (r + sigma^2/2)*T) / (sigma * sqrt(T))
/// d2 = d1 - sigma * sqrt(T)
/// C  = S * Phi(d1) - K * e^{-rT} * Phi(d2)
///
/// Phi is the erf-based standard normal CDF from statrs, accurate to
/// well past 6 significant digits.
///
/// All computation uses precomputed OptionParams. No allocations.
pub struct BlackScholesCall {
    /// Standard normal distribution (created once, reused)
    normal: Normal,
}

impl BlackScholesCall {
    pub fn new() -> Self {
        // Normal::new(0, 1) only fails if std_dev <= 0; this is safe.
        let normal = Normal::new(0.0, 1.0).unwrap_or(Normal::standard());
        Self { normal }
    }
}

impl OptionPricingModel for BlackScholesCall {
    #[inline]
    fn name(&self) -> &'static str {
        "BlackScholes"
    }

    /// Pure function: call premium from precomputed params.
    #[inline]
    fn call_price(&self, params: &OptionParams) -> f64 {
        // sigma and T are validated positive, but denormal-small values
        // can still underflow sigma*sqrt(T); price the sigma->0 limit.
        if params.sigma_sqrt_t < 1e-12 {
            return (params.spot - params.strike * params.discount).max(0.0);
        }

        let d1 = (params.ln_s_k + (params.rate + params.half_sigma_sq) * params.expiry_years)
            / params.sigma_sqrt_t;
        let d2 = d1 - params.sigma_sqrt_t;

        let price = params.spot * self.normal.cdf(d1)
            - params.strike * params.discount * self.normal.cdf(d2);

        // A call premium is never below zero; residue is float noise
        price.max(0.0)
    }
}
