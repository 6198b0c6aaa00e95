//! UUID indicators.
//!
//! Per spec.md §4.4: inspect the 15th byte of the capture (the version
//! nibble in a standard 8-4-4-4-12 UUID).

use crate::findings::{generic::generic_indicators, Indicator, ScoringContext};

#[must_use]
pub fn indicators(ctx: &ScoringContext) -> Vec<Indicator> {
    let mut indicators = generic_indicators(ctx);

    let version_byte = ctx.capture.get(14).copied();

    if matches!(version_byte, Some(b'1' | b'3' | b'4' | b'5')) {
        indicators.push((
            "Value specifies a known UUID version".to_string(),
            1.0,
        ));
    } else {
        indicators.push((
            "Value does not specify a known UUID version".to_string(),
            -0.5,
        ));
    }

    indicators
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(capture: &'static [u8]) -> ScoringContext<'static> {
        ScoringContext {
            context: capture,
            capture,
            capture_offset: 0,
            groups: &[],
        }
    }

    #[test]
    fn v4_uuid_gets_known_version_bonus() {
        let capture = b"550e8400-e29b-41d4-a716-446655440000";
        let found = indicators(&ctx(capture));
        assert!(found
            .iter()
            .any(|(label, _)| label == "Value specifies a known UUID version"));
    }

    #[test]
    fn unknown_version_is_penalized() {
        let capture = b"550e8400-e29b-21d4-a716-446655440000";
        let found = indicators(&ctx(capture));
        assert!(found
            .iter()
            .any(|(label, _)| label == "Value does not specify a known UUID version"));
    }
}
