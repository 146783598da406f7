//! Core services implementing the business logic.
//!
//! This module contains the main service implementations:
//!
//! - `filter`: Evaluates matched transaction events against the block parity
//!   policy

pub mod filter;
