//! Domain models and data structures for filter evaluation.
//!
//! This module contains all the core data structures used throughout the
//! application:
//!
//! - `filter`: Input document, per-invocation configuration and evaluation
//!   outcome

mod filter;

pub use filter::{
	EVMMatch, EVMTransaction, FilterConfig, FilterInput, FilterOutcome, MonitorMatch,
};
