/// Domain-specific error types for the spread pricer.
/// The program performs one computation and exits, so every error is
/// fatal to the run: main logs it and terminates nonzero.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("config error: {0}")]
    Config(String),

    #[error("unsupported pricing model: {0}")]
    UnsupportedModel(String),

    #[error("invalid market parameter: {0}")]
    InvalidParameter(String),
}

pub type PricingResult<T> = Result<T, PricingError>;
