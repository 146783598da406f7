//! Integration tests for block parity evaluation.
//!
//! Feeds raw JSON documents through the filter service the same way the
//! binary does, and checks decisions, diagnostics and error classification.

use serde_json::json;
use std::collections::HashMap;

use block_parity_filter::{
	models::{EVMMatch, EVMTransaction, FilterInput, MonitorMatch},
	services::filter::{FilterError, FilterService},
};

fn document_with_block_number(block_number: &str) -> String {
	json!({
		"monitor_match": {
			"EVM": { "transaction": { "blockNumber": block_number } }
		},
		"args": null
	})
	.to_string()
}

#[test]
fn test_even_block_number_yields_true() {
	let service = FilterService::new();

	// 100 decimal
	let outcome = service
		.evaluate_raw(&document_with_block_number("0x64"))
		.unwrap();
	assert!(outcome.decision);
	assert_eq!(outcome.block_number, 100);
}

#[test]
fn test_odd_block_number_yields_false() {
	let service = FilterService::new();

	// 101 decimal
	let outcome = service
		.evaluate_raw(&document_with_block_number("0x65"))
		.unwrap();
	assert!(!outcome.decision);
	assert_eq!(outcome.block_number, 101);
}

#[test]
fn test_prefix_does_not_change_the_result() {
	let service = FilterService::new();

	let prefixed = service
		.evaluate_raw(&document_with_block_number("0x10"))
		.unwrap();
	let bare = service
		.evaluate_raw(&document_with_block_number("10"))
		.unwrap();

	assert_eq!(prefixed.decision, bare.decision);
	assert_eq!(prefixed.block_number, bare.block_number);
	assert_eq!(prefixed.block_number, 16);
}

#[test]
fn test_evaluation_is_idempotent() {
	let service = FilterService::new();
	let document = document_with_block_number("0x64");

	let first = service.evaluate_raw(&document).unwrap();
	let second = service.evaluate_raw(&document).unwrap();

	assert_eq!(first, second);
}

#[test]
fn test_invalid_json_document() {
	let service = FilterService::new();
	let result = service.evaluate_raw("not json at all");
	assert!(matches!(result, Err(FilterError::InvalidInput(_))));
}

#[test]
fn test_missing_monitor_match() {
	let service = FilterService::new();

	for document in [
		json!({ "args": ["--verbose"] }),
		json!({ "monitor_match": null }),
		json!({ "monitor_match": {} }),
		json!({ "monitor_match": "not an object" }),
	] {
		let result = service.evaluate_raw(&document.to_string());
		assert!(
			matches!(result, Err(FilterError::InvalidInput(_))),
			"document: {}",
			document
		);
	}
}

#[test]
fn test_missing_or_empty_block_number() {
	let service = FilterService::new();

	for document in [
		json!({ "monitor_match": { "EVM": { "transaction": {} } } }),
		json!({ "monitor_match": { "EVM": {} } }),
		json!({ "monitor_match": { "Stellar": { "transaction": {} } } }),
		json!({ "monitor_match": { "EVM": { "transaction": { "blockNumber": "" } } } }),
		json!({ "monitor_match": { "EVM": { "transaction": { "blockNumber": "  " } } } }),
		json!({ "monitor_match": { "EVM": { "transaction": { "blockNumber": null } } } }),
		json!({ "monitor_match": { "EVM": { "transaction": { "blockNumber": 100 } } } }),
	] {
		let result = service.evaluate_raw(&document.to_string());
		assert!(
			matches!(result, Err(FilterError::MissingField(_))),
			"document: {}",
			document
		);
	}
}

#[test]
fn test_non_hexadecimal_block_number() {
	let service = FilterService::new();

	for block_number in ["zzzz", "0x", "0xfoo", "1_000"] {
		let result = service.evaluate_raw(&document_with_block_number(block_number));
		assert!(
			matches!(result, Err(FilterError::Conversion(_))),
			"block number: '{}'",
			block_number
		);
	}
}

#[test]
fn test_verbose_flag_adds_diagnostics_without_changing_decision() {
	let service = FilterService::new();

	let quiet = json!({
		"monitor_match": {
			"EVM": { "transaction": { "blockNumber": "0x64" } }
		},
		"args": []
	});
	let verbose = json!({
		"monitor_match": {
			"EVM": { "transaction": { "blockNumber": "0x64" } }
		},
		"args": ["--verbose"]
	});

	let quiet_outcome = service.evaluate_raw(&quiet.to_string()).unwrap();
	let verbose_outcome = service.evaluate_raw(&verbose.to_string()).unwrap();

	assert_eq!(quiet_outcome.decision, verbose_outcome.decision);
	assert!(quiet_outcome.diagnostics.is_empty());
	assert!(!verbose_outcome.diagnostics.is_empty());
	assert_eq!(verbose_outcome.diagnostics[0], "verbose mode enabled");
}

#[test]
fn test_unrecognized_args_are_ignored() {
	let service = FilterService::new();

	let document = json!({
		"monitor_match": {
			"EVM": { "transaction": { "blockNumber": "0x64" } }
		},
		"args": ["--unknown-flag", "value"]
	});

	let outcome = service.evaluate_raw(&document.to_string()).unwrap();
	assert!(outcome.decision);
	assert!(outcome.diagnostics.is_empty());
}

#[test]
fn test_full_monitor_match_payload() {
	// The monitor serializes far more than the one field this filter reads;
	// all of it must be tolerated.
	let service = FilterService::new();

	let document = json!({
		"monitor_match": {
			"EVM": {
				"monitor": { "name": "Large Transfers", "networks": ["evm_mainnet"] },
				"transaction": {
					"blockNumber": "0x6e",
					"hash": "0x99b04cec5e5a0a6f51d0c49d6e59bbc26b31fa28c3a9b1714f544b7d52e6a12c",
					"from": "0x1234567890abcdef1234567890abcdef12345678",
					"to": "0xabcdef1234567890abcdef1234567890abcdef12",
					"value": "0xde0b6b3a7640000",
					"gasPrice": "0x3b9aca00"
				},
				"receipt": { "status": "0x1" },
				"logs": [],
				"network_slug": "evm_mainnet",
				"matched_on": { "events": [], "functions": [], "transactions": [] }
			}
		},
		"args": null
	});

	let outcome = service.evaluate_raw(&document.to_string()).unwrap();
	assert!(outcome.decision);
	assert_eq!(outcome.block_number, 110);
}

#[test]
fn test_typed_match_round_trip_through_service() {
	// Build the document from the typed models, the way the monitor builds
	// the executor input, and evaluate the serialized form.
	let matched = MonitorMatch::EVM(Box::new(EVMMatch {
		transaction: EVMTransaction {
			block_number: Some("0xa".to_string()),
			extra: HashMap::new(),
		},
		extra: HashMap::new(),
	}));
	let input = FilterInput {
		monitor_match: Some(serde_json::to_value(&matched).unwrap()),
		args: Some(vec!["--verbose".to_string()]),
	};

	let document = serde_json::to_string(&input).unwrap();
	let outcome = FilterService::new().evaluate_raw(&document).unwrap();

	assert!(outcome.decision);
	assert_eq!(outcome.block_number, 10);
	assert!(outcome
		.diagnostics
		.iter()
		.any(|line| line.contains("even")));
}
