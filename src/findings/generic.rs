//! Generic indicators applied to every secret-class finding, ahead of any
//! type-specific indicators: delimiter analysis around the capture within
//! its context window.
//!
//! Grounded on spec.md §4.4 "Generic indicators" and
//! `examples/original_source/mystik/secrets/__init__.py::Secret.get_weights`.

use crate::findings::{Indicator, ScoringContext};

fn is_printable(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte)
}

fn is_quote(byte: u8) -> bool {
    matches!(byte, b'\'' | b'"' | b'`')
}

fn is_soft_delimiter(byte: u8) -> bool {
    matches!(byte, b',' | b':' | b'|' | b'\t' | b' ')
}

/// Runs the generic indicator chain and returns the resulting (label, delta)
/// pairs, in order. Always yields at least two indicators.
#[must_use]
pub fn generic_indicators(ctx: &ScoringContext) -> Vec<Indicator> {
    let mut indicators = vec![("Capture matches pattern".to_string(), 1.0)];

    let capture_end_offset = ctx.capture_offset + ctx.capture.len();
    let before = (ctx.capture_offset > 0).then(|| ctx.context[ctx.capture_offset - 1]);
    let after = (capture_end_offset < ctx.context.len()).then(|| ctx.context[capture_end_offset]);

    match (before, after) {
        (None, None) => {
            indicators.push(("Capture is the entire file".to_string(), 1.0));
        }
        (Some(s), Some(e)) if s == e && is_quote(s) => {
            indicators.push(("Capture is quoted".to_string(), 1.0));
        }
        (Some(s), Some(e)) if s == e && is_printable(s) && !s.is_ascii_alphanumeric() => {
            indicators.push(("Capture is segmented".to_string(), 0.5));
        }
        (Some(s), None) if is_soft_delimiter(s) => {
            indicators.push(("Capture appears segmented".to_string(), 0.25));
        }
        (None, Some(e)) if is_soft_delimiter(e) => {
            indicators.push(("Capture appears segmented".to_string(), 0.25));
        }
        _ => {
            indicators.push(("Capture is not segmented".to_string(), -0.5));
        }
    }

    indicators
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
    fn entire_file_when_no_neighbors() {
        let context = b"ABCDEF";
        let found = generic_indicators(&ctx(context, 0, context.len()));
        assert!(found
            .iter()
            .any(|(label, _)| label == "Capture is the entire file"));
    }

    #[test]
    fn quoted_when_surrounded_by_matching_quotes() {
        let context = b"\"ABCDEF\"";
        let found = generic_indicators(&ctx(context, 1, 6));
        assert!(found.iter().any(|(label, _)| label == "Capture is quoted"));
    }

    #[test]
    fn segmented_when_surrounded_by_matching_punctuation() {
        let context = b"(ABCDEF)";
        let found = generic_indicators(&ctx(context, 1, 6));
        assert!(found
            .iter()
            .any(|(label, _)| label == "Capture is segmented"));
    }

    #[test]
    fn appears_segmented_with_one_soft_delimiter() {
        let context = b",ABCDEF";
        let found = generic_indicators(&ctx(context, 1, 6));
        assert!(found
            .iter()
            .any(|(label, _)| label == "Capture appears segmented"));
    }

    #[test]
    fn not_segmented_otherwise() {
        let context = b"xABCDEFy";
        let found = generic_indicators(&ctx(context, 1, 6));
        assert!(found
            .iter()
            .any(|(label, _)| label == "Capture is not segmented"));
    }
}
