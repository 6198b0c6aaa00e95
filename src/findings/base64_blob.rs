//! Base64 Blob indicators.
//!
//! spec.md registers this finding type with a "type default" ideal rating
//! and does not specify extra indicator rules beyond the generic chain.
//! This module supplements the generic chain with the original
//! implementation's base64-specific heuristics
//! (`examples/original_source/mystik/secrets/base64.py`), translated to
//! the byte-context-window model: byte average, hash-adjacent naming,
//! pronounceability, decode attempts, case mixing, padding, and entropy.

use crate::findings::common::{average_byte, line_prefix_upper, pronounceability_score, shannon_entropy};
use crate::findings::decode::try_decode_base64;
use crate::findings::{generic::generic_indicators, Indicator, ScoringContext};

#[must_use]
pub fn indicators(ctx: &ScoringContext) -> Vec<Indicator> {
    let mut indicators = generic_indicators(ctx);
    let data = ctx.capture;

    let avg = average_byte(data);
    if (65.0..=95.0).contains(&avg) {
        indicators.push(("Similar byte average".to_string(), 0.125));
    } else {
        indicators.push(("Distant byte average".to_string(), -0.5));
    }

    let line_prefix = line_prefix_upper(ctx.context, ctx.capture_offset);
    if contains(&line_prefix, b"HASH") || contains(&line_prefix, b"SHA") || contains(&line_prefix, b"MD5") {
        indicators.push(("Potential hash".to_string(), -0.25));
    }

    let pronounceable = pronounceability_score(data);
    if pronounceable > 0.5 {
        indicators.push(("Pronounceable word".to_string(), -0.25));
    } else {
        indicators.push(("Unpronounceable word".to_string(), 0.25));
    }

    let attempts = try_decode_base64(data);
    if !attempts.padded_ok {
        indicators.push(("Failed to decode with padding".to_string(), -0.125));
    }
    if !attempts.strict_ok {
        indicators.push(("Failed to decode without padding".to_string(), -0.125));
    }

    let has_upper = data.iter().any(u8::is_ascii_uppercase);
    let has_lower = data.iter().any(u8::is_ascii_lowercase);
    if has_upper && has_lower {
        indicators.push(("Different cased letters".to_string(), 0.125));
    } else {
        indicators.push(("All same case letters".to_string(), -0.5));
    }

    if data.ends_with(b"==") || data.ends_with(b"=") {
        indicators.push(("Ends with \"=\" or \"==\"".to_string(), 0.125));
    } else {
        indicators.push(("Does not end with \"=\" or \"==\"".to_string(), -0.125));
    }

    if data.contains(&b'+') || data.contains(&b'/') {
        indicators.push(("Contains \"/\" or \"+\"".to_string(), 0.125));
    } else {
        indicators.push(("Does not contain \"/\" or \"+\"".to_string(), -0.125));
    }

    let upper = data.to_ascii_uppercase();
    if contains(&upper, b"ABCDEF") {
        let delta = if contains(&upper, b"GHIJKLMNOPQRSTUVWXYZ") { -0.5 } else { -0.25 };
        indicators.push(("Contains alphabet sequence".to_string(), delta));
    }

    let entropy = shannon_entropy(data);
    if entropy > 3.75 {
        indicators.push(("High Shannon entropy".to_string(), 0.125));
    } else {
        indicators.push(("Low Shannon entropy".to_string(), -0.125));
    }

    indicators
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(context: &'a [u8], capture_offset: usize, len: usize) -> ScoringContext<'a> {
        ScoringContext {
            context,
            capture: &context[capture_offset..capture_offset + len],
            capture_offset,
            groups: &[],
        }
    }

    #[test]
    fn partial_alphabet_run_gets_the_smaller_penalty() {
        let context = b"abcdefghQRST12==";
        let found = indicators(&ctx(context, 0, context.len()));
        assert!(found
            .iter()
            .any(|(label, delta)| label == "Contains alphabet sequence" && *delta == -0.25));
    }

    #[test]
    fn full_alphabet_run_gets_the_larger_penalty() {
        let context = b"abcdefghijklmnopqrstuvwxyz12==";
        let found = indicators(&ctx(context, 0, context.len()));
        assert!(found
            .iter()
            .any(|(label, delta)| label == "Contains alphabet sequence" && *delta == -0.5));
    }

    #[test]
    fn padded_blob_gets_padding_bonus() {
        let context = b"dGhpc2lzYXRlc3Q=";
        let found = indicators(&ctx(context, 0, context.len()));
        assert!(found
            .iter()
            .any(|(label, _)| label == "Ends with \"=\" or \"==\""));
    }
}
