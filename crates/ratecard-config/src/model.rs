use std::env;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Environment variable that overrides the stored exchange-rate API key.
pub const API_KEY_ENV: &str = "RATECARD_EXCHANGE_API_KEY";
pub const DEFAULT_API_BASE: &str = "https://v6.exchangerate-api.com/v6";

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    /// Currency new calculations default to.
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "Config::default_api_base")]
    pub api_base: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            api_key: None,
            api_base: Self::default_api_base(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_api_base() -> String {
        DEFAULT_API_BASE.into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// The API key from the environment, falling back to the stored one.
    pub fn effective_api_key(&self) -> Option<String> {
        env::var(API_KEY_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.api_key.clone())
            .filter(|value| !value.trim().is_empty())
    }

    /// Updates one setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "currency" => {
                if value.len() != 3 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(invalid(key, "expected a three-letter currency code"));
                }
                self.currency = value.to_ascii_uppercase();
            }
            "locale" => {
                if value.is_empty() {
                    return Err(invalid(key, "locale cannot be empty"));
                }
                self.locale = value.to_string();
            }
            "api_key" => {
                self.api_key = if value.is_empty() || value == "-" {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "api_base" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(invalid(key, "expected an http(s) URL"));
                }
                self.api_base = value.trim_end_matches('/').to_string();
            }
            "color" | "ui_color_enabled" => {
                self.ui_color_enabled = match value.to_ascii_lowercase().as_str() {
                    "on" | "true" | "yes" | "1" => true,
                    "off" | "false" | "no" | "0" => false,
                    _ => return Err(invalid(key, "expected on or off")),
                };
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Settings as label/value pairs with the API key masked.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let api_key = match &self.api_key {
            Some(key) => mask_secret(key),
            None => "(not set)".into(),
        };
        vec![
            ("currency", self.currency.clone()),
            ("locale", self.locale.clone()),
            ("api_key", api_key),
            ("api_base", self.api_base.clone()),
            (
                "color",
                if self.ui_color_enabled { "on" } else { "off" }.to_string(),
            ),
        ]
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}

fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("****{}", tail)
}
