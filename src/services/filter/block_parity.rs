//! Block parity filtering implementation.
//!
//! Extracts the block number from a matched EVM transaction and propagates
//! the event only when that number is even.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::{
	models::{FilterConfig, FilterInput, FilterOutcome, MonitorMatch},
	services::filter::{
		error::FilterError,
		helpers::{normalize_hex, parse_hex_u64},
		MatchFilter,
	},
};

/// Filter that propagates events whose transaction block number is even.
pub struct BlockParityFilter;

impl BlockParityFilter {
	/// Extracts the raw block number text from the opaque monitor match.
	///
	/// Classifies failures along the way: a missing or malformed
	/// `monitor_match` is an invalid input, while a match that parses but
	/// carries no usable block number is a missing field.
	fn extract_block_number(&self, input: &FilterInput) -> Result<String, FilterError> {
		let monitor_match = match &input.monitor_match {
			Some(Value::Object(fields)) if !fields.is_empty() => Value::Object(fields.clone()),
			Some(Value::Object(_)) => {
				return Err(FilterError::invalid_input(
					"Monitor match is empty",
					None,
					None,
				))
			}
			Some(other) => {
				return Err(FilterError::invalid_input(
					"Monitor match is not an object",
					None,
					Some(HashMap::from([(
						"monitor_match".to_string(),
						other.to_string(),
					)])),
				))
			}
			None => {
				return Err(FilterError::invalid_input(
					"No monitor match data provided",
					None,
					None,
				))
			}
		};

		let matched: MonitorMatch = serde_json::from_value(monitor_match).map_err(|e| {
			FilterError::missing_field(
				"Monitor match does not carry an EVM transaction block number",
				Some(Box::new(e)),
				None,
			)
		})?;
		let MonitorMatch::EVM(evm_match) = matched;

		match &evm_match.transaction.block_number {
			Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
			Some(_) => Err(FilterError::missing_field(
				"Block number field is empty",
				None,
				None,
			)),
			None => Err(FilterError::missing_field(
				"Block number field is missing from the transaction",
				None,
				None,
			)),
		}
	}
}

impl MatchFilter for BlockParityFilter {
	fn evaluate(
		&self,
		input: &FilterInput,
		config: &FilterConfig,
	) -> Result<FilterOutcome, FilterError> {
		let mut diagnostics = Vec::new();
		if config.verbose {
			diagnostics.push("verbose mode enabled".to_string());
		}

		let raw_block_number = self.extract_block_number(input)?;

		let normalized = normalize_hex(&raw_block_number);
		let block_number = parse_hex_u64(normalized).map_err(|msg| {
			FilterError::conversion_error(
				msg,
				None,
				Some(HashMap::from([(
					"block_number".to_string(),
					raw_block_number.clone(),
				)])),
			)
		})?;

		let decision = block_number % 2 == 0;

		if config.verbose {
			diagnostics.push(format!("raw block number: {}", raw_block_number));
			diagnostics.push(format!("decimal block number: {}", block_number));
			diagnostics.push(format!(
				"block number {} is {}",
				block_number,
				if decision { "even" } else { "odd" }
			));
		}

		debug!(
			raw_block_number = %raw_block_number,
			block_number,
			decision,
			"Evaluated block parity"
		);

		Ok(FilterOutcome {
			decision,
			block_number,
			raw_block_number,
			diagnostics,
		})
	}
}
