#![doc(test(attr(deny(warnings))))]

//! Fintrack Core is the derivation and classification engine behind a
//! personal finance tracker: it parses raw transaction input, classifies
//! spending, and computes budget summaries, cash-flow series, bill buckets,
//! advisory insights, and forecasts from stored records.

pub mod analytics;
pub mod classify;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod import;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
