//! Exchange-rate lookup and presentation of monetary amounts.

pub mod format;
pub mod provider;

pub use format::{format_amount, format_number, minor_units_for, symbol_for, NumberStyle};
pub use provider::{load_rates, ExchangeRateClient, FxError};
