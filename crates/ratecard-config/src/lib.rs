//! ratecard-config
//!
//! Persistent user preferences and data directory resolution.
//! Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;
pub mod paths;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, API_KEY_ENV, DEFAULT_API_BASE};
pub use paths::{DataPaths, HOME_ENV};
