//! Filter input and output data structures.
//!
//! The input document mirrors what the monitor writes to a filter's stdin:
//! the matched transaction wrapped in a `monitor_match` object plus an
//! optional `args` array of command-line-style flags.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Flag that enables human-readable diagnostic lines for one invocation.
pub const VERBOSE_FLAG: &str = "--verbose";

/// Transaction view carrying the single field the filter reads.
///
/// The monitor serializes the full transaction; everything beyond the block
/// number is preserved in `extra` and ignored.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct EVMTransaction {
	/// Block number as hexadecimal text. None when pending.
	#[serde(
		rename = "blockNumber",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub block_number: Option<String>,

	/// Catch-all for the remaining transaction fields
	#[serde(flatten)]
	pub extra: HashMap<String, serde_json::Value>,
}

/// An EVM monitor match as emitted by the monitor.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct EVMMatch {
	/// Transaction that triggered the match
	pub transaction: EVMTransaction,

	/// Catch-all for the remaining match fields (monitor, receipt, logs, ...)
	#[serde(flatten)]
	pub extra: HashMap<String, serde_json::Value>,
}

/// Platform-tagged monitor match.
///
/// Externally tagged so the wire shape is `{"EVM": {...}}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum MonitorMatch {
	EVM(Box<EVMMatch>),
}

/// The document read from standard input.
///
/// `monitor_match` stays an opaque JSON value at this boundary; evaluation
/// classifies shape violations when it extracts the block number.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct FilterInput {
	/// The matched transaction event, opaque until evaluated
	#[serde(default)]
	pub monitor_match: Option<serde_json::Value>,

	/// Command-line-style flags controlling this invocation. The monitor
	/// serializes `null` when no arguments are configured.
	#[serde(default)]
	pub args: Option<Vec<String>>,
}

impl FilterInput {
	/// Returns the argument list, treating an absent array as empty.
	pub fn args(&self) -> &[String] {
		self.args.as_deref().unwrap_or_default()
	}
}

/// Per-invocation configuration derived from the input's `args`.
///
/// Threaded explicitly into evaluation; never global state.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FilterConfig {
	/// Emit human-readable trace lines for each evaluation step
	pub verbose: bool,
}

impl FilterConfig {
	/// Derives configuration from command-line-style flags.
	///
	/// Recognizes `--verbose` (case-sensitive, exact match). Unrecognized
	/// flags are ignored.
	pub fn from_args(args: &[String]) -> Self {
		Self {
			verbose: args.iter().any(|arg| arg == VERBOSE_FLAG),
		}
	}
}

/// The successful result of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
	/// True iff the block number is even
	pub decision: bool,
	/// Decoded decimal block number
	pub block_number: u64,
	/// Block number text as received, trimmed
	pub raw_block_number: String,
	/// Human-readable trace lines, populated in verbose mode
	pub diagnostics: Vec<String>,
}
