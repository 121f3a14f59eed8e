use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;

use super::{ConversionError, ConversionService};

pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

#[derive(Debug, Clone)]
pub struct ExchangeRateOptions {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ExchangeRateOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Body of a `/pair/{from}/{to}/{amount}` answer. Documentation, terms and
/// update timestamps are present too but carry nothing we use.
#[derive(Debug, Deserialize)]
struct PairResponse {
    result: String,
    #[serde(default)]
    conversion_result: Option<f64>,
    #[serde(rename = "error-type", default)]
    error_type: Option<String>,
}

/// Client for the exchangerate-api.com v6 pair endpoint.
pub struct ExchangeRateApi {
    client: reqwest::Client,
    options: ExchangeRateOptions,
}

impl ExchangeRateApi {
    pub fn new(options: ExchangeRateOptions) -> Result<Self> {
        if options.api_key.trim().is_empty() {
            bail!("exchange-rate API key is empty");
        }

        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, options })
    }

    fn pair_path(amount: f64, from: &str, to: &str) -> String {
        format!(
            "pair/{}/{}/{:.2}",
            from.to_ascii_uppercase(),
            to.to_ascii_uppercase(),
            amount
        )
    }

    fn pair_url(&self, amount: f64, from: &str, to: &str) -> String {
        format!(
            "{}/{}/{}",
            self.options.base_url.trim_end_matches('/'),
            self.options.api_key.trim(),
            Self::pair_path(amount, from, to)
        )
    }

    fn interpret(status: reqwest::StatusCode, body: &str) -> Result<f64, ConversionError> {
        let response: PairResponse = match serde_json::from_str(body) {
            Ok(response) => response,
            Err(_) if !status.is_success() => {
                return Err(ConversionError::Service(format!("HTTP {}", status)));
            }
            Err(err) => return Err(ConversionError::Decode(err.to_string())),
        };

        if response.result != "success" {
            let reason = response.error_type.unwrap_or(response.result);
            return Err(ConversionError::Service(reason));
        }

        match response.conversion_result {
            Some(value) if value.is_finite() => Ok(value),
            Some(value) => Err(ConversionError::Decode(format!(
                "conversion_result is not a finite number: {}",
                value
            ))),
            None => Err(ConversionError::Decode(
                "missing field `conversion_result`".to_string(),
            )),
        }
    }
}

#[async_trait]
impl ConversionService for ExchangeRateApi {
    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        // The key is part of the URL path, so only the tail is logged.
        debug!("GET .../{}", Self::pair_path(amount, from, to));

        let response = self
            .client
            .get(self.pair_url(amount, from, to))
            .send()
            .await
            .map_err(|e| ConversionError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ConversionError::Transport(e.without_url().to_string()))?;

        let outcome = Self::interpret(status, &body);
        if let Err(err) = &outcome {
            warn!("exchange-rate lookup {} -> {} failed ({}): {}", from, to, status, err);
        }
        outcome
    }
}
