//! ratecard-core
//!
//! Pricing engine, input validation, calculation history and currency math.
//! Depends on ratecard-domain. No CLI, no terminal I/O, no direct filesystem access.

pub mod currency;
pub mod error;
pub mod export;
pub mod history_service;
pub mod ids;
pub mod pricing_service;
pub mod storage;
pub mod time;
pub mod validation;

pub use currency::RateTable;
pub use error::CoreError;
pub use export::export_file_stem;
pub use history_service::{HistoryStore, HISTORY_CAPACITY};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use pricing_service::PricingService;
pub use storage::{HistorySnapshot, HistoryStorage, InMemoryHistoryStorage, HISTORY_STORAGE_KEY};
pub use time::{Clock, SystemClock};
pub use validation::{validate_input, FieldError, ValidationErrors};

#[cfg(test)]
mod tests;
