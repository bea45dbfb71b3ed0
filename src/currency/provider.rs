//! HTTP client for the exchange-rate provider.
//!
//! The provider answers `GET {base}/{api_key}/latest/USD` with
//! `{"result": "success", "conversion_rates": {"EUR": 0.92, ...}}`.

use std::collections::HashMap;

use ratecard_config::Config;
use ratecard_core::RateTable;
use ratecard_domain::{CurrencyCode, BASE_CURRENCY};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

const SUCCESS: &str = "success";

#[derive(Debug, Error)]
pub enum FxError {
    #[error("no exchange-rate API key configured (set RATECARD_EXCHANGE_API_KEY or `config set api_key`)")]
    MissingApiKey,
    #[error("exchange-rate request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("exchange-rate provider answered HTTP {0}")]
    Status(u16),
    #[error("exchange-rate provider reported `{0}`")]
    Unsuccessful(String),
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: String,
    #[serde(default)]
    conversion_rates: Option<HashMap<String, f64>>,
    #[serde(rename = "error-type", default)]
    error_type: Option<String>,
}

/// Thin wrapper around `reqwest` for the latest USD-based rates.
pub struct ExchangeRateClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ExchangeRateClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, FxError> {
        let api_key = config.effective_api_key().ok_or(FxError::MissingApiKey)?;
        Ok(Self::new(config.api_base.clone(), api_key))
    }

    pub fn latest_url(&self) -> String {
        format!("{}/{}/latest/{}", self.base_url, self.api_key, BASE_CURRENCY)
    }

    pub async fn fetch_latest(&self) -> Result<RateTable, FxError> {
        let response = self.client.get(self.latest_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FxError::Status(status.as_u16()));
        }

        let body: LatestRatesResponse = response.json().await?;
        match body {
            LatestRatesResponse {
                result,
                conversion_rates: Some(rates),
                ..
            } if result == SUCCESS => Ok(RateTable::from_rates(
                rates
                    .into_iter()
                    .map(|(code, rate)| (CurrencyCode::new(code), rate)),
            )),
            LatestRatesResponse {
                result, error_type, ..
            } => Err(FxError::Unsuccessful(error_type.unwrap_or(result))),
        }
    }
}

/// Fetches the rate table on a throwaway current-thread runtime.
///
/// Never fails: every problem is logged and yields an empty table, which
/// makes conversions fall back to identity.
pub fn load_rates(config: &Config) -> RateTable {
    let client = match ExchangeRateClient::from_config(config) {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!("{err}");
            return RateTable::new();
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(error = %err, "could not start runtime for exchange-rate fetch");
            return RateTable::new();
        }
    };

    match runtime.block_on(client.fetch_latest()) {
        Ok(table) => {
            tracing::info!(currencies = table.len(), "exchange rates loaded");
            table
        }
        Err(err) => {
            tracing::error!(error = %err, "exchange-rate fetch failed");
            RateTable::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_url_joins_base_key_and_currency() {
        let client = ExchangeRateClient::new("https://rates.test/v6/", "k3y");
        assert_eq!(client.latest_url(), "https://rates.test/v6/k3y/latest/USD");
    }

    #[test]
    fn unsuccessful_body_reports_error_type() {
        let body: LatestRatesResponse =
            serde_json::from_str(r#"{"result":"error","error-type":"invalid-key"}"#)
                .expect("parse body");
        assert_eq!(body.result, "error");
        assert_eq!(body.error_type.as_deref(), Some("invalid-key"));
        assert!(body.conversion_rates.is_none());
    }
}
