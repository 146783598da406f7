//! Block parity filter for blockchain transaction monitoring events.
//!
//! This library implements the filter predicate side of a monitoring pipeline:
//! it consumes a single matched-transaction event, extracts the transaction's
//! block number, and decides whether the event should be propagated
//! downstream. The reference policy propagates only events whose block number
//! is even.
//!
//! # Module Structure
//!
//! - `models`: Data structures for the filter input, configuration and outcome
//! - `services`: Filter evaluation logic
//! - `utils`: Common utilities and helper functions

pub mod models;
pub mod services;
pub mod utils;
