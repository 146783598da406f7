//! Helper functions for decoding block number text.
//!
//! The monitor serializes block numbers as hexadecimal strings, with or
//! without a `0x` prefix depending on the upstream client.

/// Normalizes hexadecimal text by trimming surrounding whitespace and
/// stripping one optional `0x`/`0X` prefix.
pub fn normalize_hex(input: &str) -> &str {
	let trimmed = input.trim();
	trimmed
		.strip_prefix("0x")
		.or_else(|| trimmed.strip_prefix("0X"))
		.unwrap_or(trimmed)
}

/// Parses normalized hexadecimal text as a `u64`.
///
/// Rejects empty input, sign characters and anything that is not an ASCII
/// hex digit. Values that do not fit in 64 bits are an error rather than a
/// truncated result.
pub fn parse_hex_u64(hex: &str) -> Result<u64, String> {
	if hex.is_empty() {
		return Err("empty hexadecimal value".to_string());
	}
	// from_str_radix accepts a leading sign, which is not valid here
	if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
		return Err(format!("invalid hexadecimal value: '{}'", hex));
	}
	u64::from_str_radix(hex, 16)
		.map_err(|e| format!("hexadecimal value '{}' does not fit in 64 bits: {}", hex, e))
}
