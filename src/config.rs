use crate::errors::{PricingError, PricingResult};

/// Market parameters and model selection, resolved from the environment.
/// Every variable has a default, so an empty environment prices the
/// canonical butterfly: S=100, strikes 95/100/105, T=1y, r=5%, sigma=20%,
/// Black-Scholes.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub spot: f64,
    pub strike_low: f64,
    pub strike_mid: f64,
    pub strike_high: f64,
    pub expiry_years: f64,
    pub risk_free_rate: f64,
    pub volatility: f64,
    pub model_name: String,
}

impl AppConfig {
    pub fn from_env() -> PricingResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            spot: env_f64("SPOT_PRICE", "100")?,
            strike_low: env_f64("STRIKE_LOW", "95")?,
            strike_mid: env_f64("STRIKE_MID", "100")?,
            strike_high: env_f64("STRIKE_HIGH", "105")?,
            expiry_years: env_f64("EXPIRY_YEARS", "1")?,
            risk_free_rate: env_f64("RISK_FREE_RATE", "0.05")?,
            volatility: env_f64("VOLATILITY", "0.2")?,
            model_name: env_var_or("PRICING_MODEL", "BlackScholes"),
        })
    }
}

fn env_f64(key: &str, default: &str) -> PricingResult<f64> {
    env_var_or(key, default)
        .parse::<f64>()
        .map_err(|e| PricingError::Config(format!("{key}: {e}")))
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
