//! JSON Web Token (JWT) indicators.
//!
//! Per spec.md §4.4: base64url-decode each of the three dot-separated
//! segments (right-padded to a length divisible by 4 with `=`), then
//! attempt to JSON-parse each one.

use crate::findings::decode::{decode_json_segment, JsonDecodeOutcome};
use crate::findings::{generic::generic_indicators, Indicator, ScoringContext};

#[must_use]
pub fn indicators(ctx: &ScoringContext) -> Vec<Indicator> {
    let mut indicators = generic_indicators(ctx);

    let empty = Vec::new();
    let segment1 = ctx.groups.first().unwrap_or(&empty);
    let segment2 = ctx.groups.get(1).unwrap_or(&empty);
    let segment3 = ctx.groups.get(2).unwrap_or(&empty);

    let mut segment1_has_enc = false;

    match decode_json_segment(segment1) {
        JsonDecodeOutcome::Object(value) => {
            indicators.push(("First segment is valid JSON".to_string(), 1.0));
            if value.get("alg").is_some() {
                indicators.push((
                    "First segment contains expected JSON".to_string(),
                    1.0,
                ));
            }
            segment1_has_enc = value.get("enc").is_some();
        }
        JsonDecodeOutcome::NonObjectJson => {
            indicators.push((
                "First segment is valid JSON but not an object".to_string(),
                -1.0,
            ));
        }
        JsonDecodeOutcome::JsonFailed => {
            indicators.push(("First segment failed to parse as JSON".to_string(), -2.0));
        }
        JsonDecodeOutcome::DecodeFailed => {
            indicators.push(("First segment failed to decode".to_string(), -2.0));
        }
    }

    match decode_json_segment(segment2) {
        JsonDecodeOutcome::Object(value) => {
            indicators.push(("Second segment is valid JSON".to_string(), 1.0));
            if value.get("sub").is_some() {
                indicators.push(("Second segment contains a subject".to_string(), 1.0));
            }
        }
        JsonDecodeOutcome::NonObjectJson => {
            indicators.push((
                "Second segment is valid JSON but not an object".to_string(),
                -1.0,
            ));
        }
        JsonDecodeOutcome::JsonFailed | JsonDecodeOutcome::DecodeFailed => {
            if segment1_has_enc {
                indicators.push((
                    "Second segment appears to be encrypted".to_string(),
                    1.0,
                ));
            } else {
                indicators.push(("Second segment failed to decode".to_string(), -1.0));
            }
        }
    }

    match decode_json_segment(segment3) {
        JsonDecodeOutcome::Object(_) | JsonDecodeOutcome::NonObjectJson => {
            indicators.push(("Third segment is valid JSON".to_string(), -2.0));
        }
        JsonDecodeOutcome::DecodeFailed => {
            indicators.push(("Third segment failed to decode".to_string(), 0.5));
        }
        JsonDecodeOutcome::JsonFailed => {
            indicators.push(("Third segment is not valid JSON".to_string(), 0.5));
        }
    }

    indicators
}
