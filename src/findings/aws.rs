//! AWS Token indicators.
//!
//! Per spec.md §4.4: "no type-specific indicators beyond the generic set;
//! its `ideal_rating` default suffices."

use crate::findings::{generic::generic_indicators, Indicator, ScoringContext};

#[must_use]
pub fn indicators(ctx: &ScoringContext) -> Vec<Indicator> {
    generic_indicators(ctx)
}
