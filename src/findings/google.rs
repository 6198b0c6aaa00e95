//! Google API Key indicators.
//!
//! The `AIza` prefix is already a strong, fixed-length signal on its own;
//! `examples/original_source/mystik/secrets/googletoken.py` carries no
//! type-specific weighting beyond the base `SecretExpression` weight, so
//! this finding type relies on the generic indicator chain only.

use crate::findings::{generic::generic_indicators, Indicator, ScoringContext};

#[must_use]
pub fn indicators(ctx: &ScoringContext) -> Vec<Indicator> {
    generic_indicators(ctx)
}
