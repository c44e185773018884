pub mod black_scholes;

use crate::errors::{PricingError, PricingResult};
use crate::models::black_scholes::BlackScholesCall;

/// All pricing models implement this trait.
/// call_price() must be a pure function: deterministic output from
/// inputs only, no side effects. Send + Sync so instances can be
/// shared freely.
pub trait OptionPricingModel: Send + Sync {
    fn name(&self) -> &'static str;

    /// European call premium from precomputed parameters.
    /// Inputs are validated at OptionParams construction. Never panics.
    fn call_price(&self, params: &OptionParams) -> f64;
}

/// Market inputs for one call option leg, with derived quantities
/// computed once at construction. Stack-allocated, Copy.
///
/// Construction is the validation boundary: spot, strike, expiry and
/// volatility must be positive and finite, the rate finite. Models can
/// assume well-formed inputs.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct OptionParams {
    pub spot: f64,
    pub strike: f64,
    pub expiry_years: f64,
    pub rate: f64,
    pub sigma: f64,
    // Precomputed
    pub ln_s_k: f64,
    pub sqrt_t: f64,
    pub sigma_sqrt_t: f64,
    pub half_sigma_sq: f64,
    pub discount: f64,
}

impl OptionParams {
    pub fn new(
        spot: f64,
        strike: f64,
        expiry_years: f64,
        rate: f64,
        sigma: f64,
    ) -> PricingResult<Self> {
        require_positive("spot price", spot)?;
        require_positive("strike price", strike)?;
        require_positive("time to expiration", expiry_years)?;
        require_positive("volatility", sigma)?;
        if !rate.is_finite() {
            return Err(PricingError::InvalidParameter(format!(
                "risk-free rate must be finite, got {rate}"
            )));
        }

        let ln_s_k = (spot / strike).ln();
        let sqrt_t = expiry_years.sqrt();
        Ok(Self {
            spot,
            strike,
            expiry_years,
            rate,
            sigma,
            ln_s_k,
            sqrt_t,
            sigma_sqrt_t: sigma * sqrt_t,
            half_sigma_sq: 0.5 * sigma * sigma,
            discount: (-rate * expiry_years).exp(),
        })
    }
}

fn require_positive(name: &str, value: f64) -> PricingResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidParameter(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

/// The set of registered models is closed at any given version.
/// Adding one means a new variant, a new match arm, and a new module;
/// callers go through create_model and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    BlackScholes,
}

impl std::str::FromStr for ModelKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BlackScholes" => Ok(Self::BlackScholes),
            other => Err(PricingError::UnsupportedModel(other.to_string())),
        }
    }
}

impl ModelKind {
    pub fn build(self) -> Box<dyn OptionPricingModel> {
        match self {
            Self::BlackScholes => Box::new(BlackScholesCall::new()),
        }
    }
}

/// Resolve a model-name token to a pricing model instance.
/// Fails with UnsupportedModel before any computation runs.
pub fn create_model(name: &str) -> PricingResult<Box<dyn OptionPricingModel>> {
    Ok(name.parse::<ModelKind>()?.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_rejected() {
        let err = match create_model("Binomial") {
            Ok(_) => panic!("Binomial should not resolve to a model"),
            Err(e) => e,
        };
        assert!(
            matches!(err, PricingError::UnsupportedModel(_)),
            "expected UnsupportedModel, got {err:?}"
        );
    }

    #[test]
    fn test_known_model_resolves() {
        let model = create_model("BlackScholes").expect("BlackScholes is registered");
        assert_eq!(model.name(), "BlackScholes");
    }

    #[test]
    fn test_rejects_nonpositive_inputs() {
        assert!(OptionParams::new(0.0, 100.0, 1.0, 0.05, 0.2).is_err(), "zero spot");
        assert!(OptionParams::new(100.0, -5.0, 1.0, 0.05, 0.2).is_err(), "negative strike");
        assert!(OptionParams::new(100.0, 100.0, 0.0, 0.05, 0.2).is_err(), "zero expiry");
        assert!(OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.0).is_err(), "zero vol");
        assert!(OptionParams::new(100.0, 100.0, 1.0, f64::NAN, 0.2).is_err(), "NaN rate");
        assert!(OptionParams::new(f64::INFINITY, 100.0, 1.0, 0.05, 0.2).is_err(), "inf spot");
    }

    #[test]
    fn test_precomputed_quantities() {
        let p = OptionParams::new(100.0, 95.0, 1.0, 0.05, 0.2).expect("valid params");
        assert!((p.ln_s_k - (100.0f64 / 95.0).ln()).abs() < 1e-12);
        assert!((p.sigma_sqrt_t - 0.2).abs() < 1e-12);
        assert!((p.half_sigma_sq - 0.02).abs() < 1e-12);
        assert!((p.discount - (-0.05f64).exp()).abs() < 1e-12);
    }
}
