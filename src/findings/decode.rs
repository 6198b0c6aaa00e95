//! Decode helpers shared by the JWT and Base64 Blob indicator functions.
//!
//! Per spec, a failed decode inside a scorer is a signal (a negative
//! indicator), never a crate-level error — these helpers return explicit
//! outcomes instead of propagating `Result` up through `?`.

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;
use serde_json::Value;

/// Outcome of attempting to base64-decode then JSON-parse a byte segment.
pub enum JsonDecodeOutcome {
    /// Decoded and parsed as a JSON object.
    Object(Value),
    /// Decoded and parsed as JSON, but not an object (array, string, etc).
    NonObjectJson,
    /// Bytes decoded but JSON parsing failed.
    JsonFailed,
    /// Bytes failed to base64-decode at all.
    DecodeFailed,
}

/// Base64url-decodes `segment` after right-padding it to a length divisible
/// by 4 with `=`, then attempts to parse the result as JSON.
#[must_use]
pub fn decode_json_segment(segment: &[u8]) -> JsonDecodeOutcome {
    let mut padded = segment.to_vec();
    while padded.len() % 4 != 0 {
        padded.push(b'=');
    }

    let Ok(bytes) = URL_SAFE.decode(&padded) else {
        return JsonDecodeOutcome::DecodeFailed;
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => JsonDecodeOutcome::Object(Value::Object(map)),
        Ok(_) => JsonDecodeOutcome::NonObjectJson,
        Err(_) => JsonDecodeOutcome::JsonFailed,
    }
}

/// Outcome of the two base64 decode attempts the Base64 Blob scorer makes.
pub struct Base64DecodeAttempts {
    pub padded_ok: bool,
    pub strict_ok: bool,
}

/// Attempts to decode `data` both with two bytes of trailing padding added
/// and in strict (validating) mode without modification.
#[must_use]
pub fn try_decode_base64(data: &[u8]) -> Base64DecodeAttempts {
    let mut with_padding = data.to_vec();
    with_padding.extend_from_slice(b"==");

    Base64DecodeAttempts {
        padded_ok: STANDARD.decode(&with_padding).is_ok() || STANDARD.decode(data).is_ok(),
        strict_ok: STANDARD.decode(data).is_ok(),
    }
}
