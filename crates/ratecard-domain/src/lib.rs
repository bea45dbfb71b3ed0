//! ratecard-domain
//!
//! Pure domain models (pricing inputs, derived rates, stored calculations).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod calculation;
pub mod common;
pub mod pricing;

pub use calculation::*;
pub use common::*;
pub use pricing::*;
