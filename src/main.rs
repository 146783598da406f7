//! Block parity filter entry point.
//!
//! This binary reads a single matched-transaction event as a JSON document
//! from standard input, extracts the transaction's block number, and decides
//! whether the event should be propagated downstream. Only transactions mined
//! in an even block are propagated.
//!
//! # Flow
//! 1. Parses CLI logging options and applies them to the environment
//! 2. Initializes structured logging (stderr by default, file optional)
//! 3. Reads the event document from standard input
//! 4. Evaluates the block parity predicate
//! 5. Prints `true` or `false` as the sole line on standard output
//!
//! The exit status distinguishes a determined `false` (exit 0) from an
//! evaluation failure (exit 1); failures still print `false` for consumers
//! that only read the last output line.

pub mod models;
pub mod services;
pub mod utils;

use std::{env::set_var, io::Read, process::ExitCode};

use clap::Parser;
use dotenvy::dotenv_override;
use tracing::{error, info};

use crate::{
	services::filter::{FilterError, FilterService},
	utils::{logging::setup_logging, parse_string_to_bytes_size},
};

#[derive(Parser)]
#[command(
	name = "block-parity-filter",
	about = "A filter predicate for blockchain transaction monitoring events that propagates only transactions mined in an even block.",
	version
)]
struct Cli {
	/// Write logs to file instead of stderr
	#[arg(long)]
	log_file: bool,

	/// Set log level (trace, debug, info, warn, error)
	#[arg(long, value_name = "LEVEL")]
	log_level: Option<String>,

	/// Path to store log files (default: logs/)
	#[arg(long, value_name = "PATH")]
	log_path: Option<String>,

	/// Maximum log file size before rolling (e.g., "1GB", "500MB", "1024KB")
	#[arg(long, value_name = "SIZE", value_parser = parse_string_to_bytes_size)]
	log_max_size: Option<u64>,
}

impl Cli {
	/// Apply CLI options to environment variables, overriding any existing values
	fn apply_to_env(&self) {
		// Reload environment variables from .env file
		// Override any existing environment variables
		dotenv_override().ok();

		// Log file mode - override if CLI flag is set
		if self.log_file {
			set_var("LOG_MODE", "file");
		}

		// Log level - override if CLI flag is set
		if let Some(level) = &self.log_level {
			set_var("LOG_LEVEL", level);
		}

		// Log path - override if CLI flag is set
		if let Some(path) = &self.log_path {
			set_var("LOG_DATA_DIR", path);
		}

		// Log max size - override if CLI flag is set
		if let Some(size) = self.log_max_size {
			set_var("LOG_MAX_SIZE", size.to_string());
		}
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	cli.apply_to_env();

	if let Err(e) = setup_logging() {
		eprintln!("Warning: Failed to setup logging: {}", e);
	}

	let mut raw = String::new();
	if let Err(e) = std::io::stdin().read_to_string(&mut raw) {
		return fail(FilterError::invalid_input(
			"Failed to read input document from stdin",
			Some(Box::new(e)),
			None,
		));
	}

	match FilterService::new().evaluate_raw(&raw) {
		Ok(outcome) => {
			for line in &outcome.diagnostics {
				eprintln!("{}", line);
			}
			info!(
				block_number = outcome.block_number,
				decision = outcome.decision,
				"Evaluation complete"
			);
			println!("{}", outcome.decision);
			ExitCode::SUCCESS
		}
		Err(e) => fail(e),
	}
}

/// Reports an evaluation failure and emits the conservative decision for
/// consumers that only read the last output line.
fn fail(err: FilterError) -> ExitCode {
	error!("Failed to evaluate input document: {}", err);
	eprintln!("{}", err);
	println!("false");
	ExitCode::FAILURE
}
