use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

mod exchangerate;
pub use exchangerate::{ExchangeRateApi, ExchangeRateOptions, DEFAULT_BASE_URL};

/// Why a conversion request produced no amount.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// The request never completed (connection, timeout, body read).
    #[error("nu am putut contacta serviciul de schimb valutar: {0}")]
    Transport(String),
    /// The service answered and reported the conversion as unsuccessful.
    #[error("conversia a eșuat: {0}")]
    Service(String),
    /// The service answered with something that is not a pair-conversion result.
    #[error("răspuns neașteptat de la serviciul de schimb valutar: {0}")]
    Decode(String),
}

impl ConversionError {
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::Transport(_) => "transport",
            ConversionError::Service(_) => "service",
            ConversionError::Decode(_) => "decode",
        }
    }
}

/// Converts an amount between two currency codes with one remote lookup.
#[async_trait]
pub trait ConversionService: Send + Sync {
    /// Returns `amount` expressed in `to`.
    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, ConversionError>;
}

/// Create the default service from resolved options
pub fn create_service(options: ExchangeRateOptions) -> Result<Box<dyn ConversionService>> {
    Ok(Box::new(ExchangeRateApi::new(options)?))
}
