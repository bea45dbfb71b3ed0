#![doc(test(attr(deny(warnings))))]

//! Ratecard prices freelance work from costs, hours and margins, keeps a
//! short history of past quotes and converts them between currencies.

pub mod cli;
pub mod currency;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("ratecard tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }
}
