mod config;
mod errors;
mod models;
mod spread;

use crate::spread::ButterflyStrikes;

fn main() {
    // Structured logging to stderr; stdout carries only the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("butterfly spread pricer starting");

    let cfg = match config::AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    let model = match models::create_model(&cfg.model_name) {
        Ok(m) => m,
        Err(e) => {
            tracing::error!("model selection error: {e}");
            std::process::exit(1);
        }
    };

    let strikes = ButterflyStrikes {
        low: cfg.strike_low,
        mid: cfg.strike_mid,
        high: cfg.strike_high,
    };

    let cost = match spread::butterfly_cost(
        model.as_ref(),
        cfg.spot,
        strikes,
        cfg.expiry_years,
        cfg.risk_free_rate,
        cfg.volatility,
    ) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("pricing error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        model = model.name(),
        spot = cfg.spot,
        low = strikes.low,
        mid = strikes.mid,
        high = strikes.high,
        cost = cost,
        "spread priced"
    );

    println!(
        "Cost of Long Call Butterfly Spread using {}: {:.2}",
        model.name(),
        cost
    );
}
