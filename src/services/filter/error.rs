//! Error types for filter operations.
//!
//! Defines the error cases that can occur while evaluating an input document
//! and provides helper methods for error creation and formatting.

use crate::utils::logging::error::{ErrorContext, TraceableError};
use std::collections::HashMap;
use thiserror::Error as ThisError;
use uuid::Uuid;

/// Represents errors that can occur during filter evaluation
#[derive(ThisError, Debug)]
pub enum FilterError {
	/// The input document or the monitor match substructure is
	/// missing or unparseable
	#[error("Invalid input error: {0}")]
	InvalidInput(ErrorContext),

	/// The structure parses but the block number field is absent or empty
	#[error("Missing field error: {0}")]
	MissingField(ErrorContext),

	/// The block number field is not valid hexadecimal text
	#[error("Conversion error: {0}")]
	Conversion(ErrorContext),

	/// Other errors that don't fit into the categories above
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl FilterError {
	// Invalid input error
	pub fn invalid_input(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::InvalidInput(ErrorContext::new_with_log(msg, source, metadata))
	}

	// Missing field error
	pub fn missing_field(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::MissingField(ErrorContext::new_with_log(msg, source, metadata))
	}

	// Conversion error
	pub fn conversion_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::Conversion(ErrorContext::new_with_log(msg, source, metadata))
	}
}

impl TraceableError for FilterError {
	fn trace_id(&self) -> String {
		match self {
			Self::InvalidInput(ctx) => ctx.trace_id.clone(),
			Self::MissingField(ctx) => ctx.trace_id.clone(),
			Self::Conversion(ctx) => ctx.trace_id.clone(),
			Self::Other(_) => Uuid::new_v4().to_string(),
		}
	}
}
