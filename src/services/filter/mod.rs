//! Event filtering functionality.
//!
//! Implements the filter predicate applied to matched transaction events:
//! - Generic MatchFilter trait
//! - Block parity implementation
//! - FilterService facade used by the binary
//! - Helper functions for block number decoding

mod block_parity;
mod error;
pub mod helpers;

pub use block_parity::BlockParityFilter;
pub use error::FilterError;

use crate::models::{FilterConfig, FilterInput, FilterOutcome};

/// Trait for evaluating a matched transaction event
///
/// This trait must be implemented by every filter policy to provide a way to
/// decide whether an event is propagated downstream.
pub trait MatchFilter {
	fn evaluate(
		&self,
		input: &FilterInput,
		config: &FilterConfig,
	) -> Result<FilterOutcome, FilterError>;
}

/// Service for evaluating input documents
///
/// This service provides a way to evaluate a matched transaction event
/// against the block parity policy.
pub struct FilterService {}

impl FilterService {
	pub fn new() -> Self {
		FilterService {}
	}
}

impl Default for FilterService {
	fn default() -> Self {
		Self::new()
	}
}

impl FilterService {
	/// Deserializes a raw JSON document and evaluates it.
	pub fn evaluate_raw(&self, raw: &str) -> Result<FilterOutcome, FilterError> {
		let input: FilterInput = serde_json::from_str(raw).map_err(|e| {
			FilterError::invalid_input(
				"Failed to parse input document as JSON",
				Some(Box::new(e)),
				None,
			)
		})?;
		self.evaluate(&input)
	}

	/// Evaluates a parsed input document with configuration derived from its
	/// `args`.
	pub fn evaluate(&self, input: &FilterInput) -> Result<FilterOutcome, FilterError> {
		let config = FilterConfig::from_args(input.args());
		let filter = BlockParityFilter;
		filter.evaluate(input, &config)
	}
}
