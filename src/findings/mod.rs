//! Finding Registry: the static mapping from pattern tag to finding type,
//! plus the indicator framework each finding type's scoring function
//! plugs into.
//!
//! See spec.md §3 (`FindingType`, `Indicator`) and §4.3 (Finding Registry).

pub mod aws;
pub mod base64_blob;
pub mod common;
pub mod decode;
pub mod entropy;
pub mod generic;
pub mod google;
pub mod hex;
pub mod jwt;
pub mod uuid;

use once_cell::sync::Lazy;
use regex::bytes::{Regex, RegexBuilder};
use std::collections::HashMap;

/// A single (label, delta) contribution to a match's rating. Order within
/// a finding's indicator list is preserved and is part of the public output.
pub type Indicator = (String, f64);

/// Everything a type-specific indicator function needs to inspect a match,
/// without exposing the absolute file offsets that only `RawMatch` carries
/// (see spec.md §9's resolved indicator-signature ambiguity).
pub struct ScoringContext<'a> {
    /// The byte context window surrounding the capture.
    pub context: &'a [u8],
    /// The exact matched byte slice (a sub-slice of `context`).
    pub capture: &'a [u8],
    /// Offset of `capture`'s first byte within `context`.
    pub capture_offset: usize,
    /// Captured regex groups, in order; missing groups are empty slices.
    pub groups: &'a [Vec<u8>],
}

impl<'a> ScoringContext<'a> {
    #[must_use]
    pub fn capture_end_offset(&self) -> usize {
        self.capture_offset + self.capture.len()
    }
}

/// A compiled pattern, tagged with the finding type name that owns it.
pub struct CompiledPattern {
    pub tag: &'static str,
    pub source: &'static str,
    pub regex: Regex,
}

/// A named category of secret/credential pattern: its match patterns,
/// description, normalization constant, and scoring logic.
///
/// Constructed once at startup and immutable for the duration of a scan.
pub struct FindingType {
    pub name: &'static str,
    pub description: &'static [&'static str],
    pub patterns: &'static [&'static str],
    pub ideal_rating: f64,
    pub indicator_fn: fn(&ScoringContext) -> Vec<Indicator>,
    pub pre_filter_fn: Option<fn(&ScoringContext) -> bool>,
}

/// The default ideal rating for finding types spec.md marks as "type
/// default" rather than giving an explicit normalization constant.
///
/// Chosen as roughly the maximum rating a generic-indicators-only match
/// can achieve (`"Capture matches pattern"` + one delimiter bonus), so
/// that AWS/Google API keys — which carry no type-specific indicators —
/// normalize to ~1.0 on a typical clean match. See DESIGN.md.
pub const DEFAULT_IDEAL_RATING: f64 = 2.0;

/// Ideal rating for richer finding types (Hex Token, Base64 Blob) whose
/// type-specific indicator chains routinely add several more deltas.
pub const RICH_IDEAL_RATING: f64 = 4.0;

/// Minimum set of registered finding types (spec.md §4.3's table).
pub static FINDING_TYPES: &[FindingType] = &[
    FindingType {
        name: "Amazon Web Services (AWS) Token",
        description: &[
            "Matches access key identifiers issued by Amazon Web Services, \
             including both long-term (AKIA) and temporary/session (ASIA) \
             credential prefixes.",
        ],
        patterns: &["(AKIA|ASIA)[A-Z0-9]{16}"],
        ideal_rating: DEFAULT_IDEAL_RATING,
        indicator_fn: aws::indicators,
        pre_filter_fn: None,
    },
    FindingType {
        name: "UUID",
        description: &[
            "Matches values formatted as a standard 8-4-4-4-12 hexadecimal \
             UUID, regardless of version.",
        ],
        patterns: &[r"(?i)[a-f0-9]{8}-([a-f0-9]{4}-){3}[a-f0-9]{12}"],
        ideal_rating: 3.0,
        indicator_fn: uuid::indicators,
        pre_filter_fn: None,
    },
    FindingType {
        name: "JSON Web Token (JWT)",
        description: &[
            "Matches JSON Web Tokens: three dot-separated segments, each \
             base64url-encoded, the first two typically decoding to JSON \
             objects describing the token's header and payload.",
        ],
        patterns: &[r"([A-Za-z0-9_-]{8,})\.([A-Za-z0-9_-]{8,})\.([A-Za-z0-9_-]*)"],
        ideal_rating: 6.0,
        indicator_fn: jwt::indicators,
        pre_filter_fn: None,
    },
    FindingType {
        name: "Google API Key",
        description: &[
            "Matches API keys issued by Google Cloud / Firebase, which \
             always begin with the fixed `AIza` prefix.",
        ],
        patterns: &["AIza[A-Za-z0-9_-]{35}"],
        ideal_rating: DEFAULT_IDEAL_RATING,
        indicator_fn: google::indicators,
        pre_filter_fn: None,
    },
    FindingType {
        name: "Hex Token",
        description: &[
            "Matches runs of hexadecimal characters long enough to plausibly \
             be an encoded secret rather than an address or checksum.",
        ],
        patterns: &["(?i)[a-f0-9]{8,128}"],
        ideal_rating: RICH_IDEAL_RATING,
        indicator_fn: hex::indicators,
        pre_filter_fn: None,
    },
    FindingType {
        name: "Base64 Blob",
        description: &[
            "Matches runs of base64 alphabet characters, optionally followed \
             by `=` padding, long enough to plausibly carry encoded content.",
        ],
        patterns: &["(?i)[a-z0-9+/]{8,}", "(?i)[a-z0-9+/]{8,}={1,2}"],
        ideal_rating: RICH_IDEAL_RATING,
        indicator_fn: base64_blob::indicators,
        pre_filter_fn: None,
    },
    FindingType {
        name: "Entropy Token",
        description: &[
            "Matches opaque, high-entropy strings that don't fit a more \
             specific pattern: likely API keys, passwords, or other \
             hand-rolled secrets. Scored primarily on Shannon entropy, \
             pronounceability, and character-class composition.",
        ],
        patterns: &[r#"[A-Za-z0-9_=.+\-?!@#$%^&*/:]{8,}"#],
        ideal_rating: 7.0,
        indicator_fn: entropy::indicators,
        pre_filter_fn: Some(entropy::pre_filter),
    },
];

/// The union of every finding type's compiled patterns, plus a lookup from
/// pattern tag back to its `FindingType`.
pub struct Registry {
    pub patterns: Vec<CompiledPattern>,
    pub types: HashMap<&'static str, &'static FindingType>,
}

fn try_compile_pattern(tag: &'static str, source: &'static str) -> crate::error::Result<CompiledPattern> {
    let regex = RegexBuilder::new(source)
        .unicode(false)
        .build()
        .map_err(|err| crate::error::MystikError::RegexCompileFailed { tag, source: err })?;

    Ok(CompiledPattern { tag, source, regex })
}

fn build_registry() -> crate::error::Result<Registry> {
    let mut patterns = Vec::new();
    let mut types = HashMap::new();

    for finding in FINDING_TYPES {
        for source in finding.patterns {
            patterns.push(try_compile_pattern(finding.name, source)?);
        }
        types.insert(finding.name, finding);
    }

    Ok(Registry { patterns, types })
}

/// Compiles every registered finding type's patterns without discarding or
/// caching the result, surfacing the first compile failure (if any) through
/// the normal `MystikError` path instead of a panic.
///
/// Called once at startup, before the walker runs, so a malformed static
/// pattern aborts the scan the same way any other `ArgumentInvalid`-class
/// error does (spec.md §7). If this returns `Ok`, every later access to
/// `REGISTRY` is guaranteed to succeed, since it compiles the exact same
/// static pattern sources.
///
/// # Errors
///
/// Returns `MystikError::RegexCompileFailed` if any registered pattern
/// fails to compile as a byte regex.
pub fn validate() -> crate::error::Result<()> {
    build_registry().map(|_| ())
}

/// Builds the finding registry by compiling every pattern from every
/// registered finding type. Compiled once, shared read-only across workers.
///
/// # Panics
///
/// Panics if a registered pattern fails to compile. This is unreachable in
/// practice: callers are expected to invoke `validate()` first, which
/// compiles the same static patterns and returns a proper `MystikError`
/// instead of panicking.
pub static REGISTRY: Lazy<Registry> =
    Lazy::new(|| build_registry().expect("finding pattern set failed to compile; validate() should have caught this"));

/// Returns the finding type registered under `name`, if any.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static FindingType> {
    REGISTRY.types.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_compiles_every_pattern() {
        assert!(!REGISTRY.patterns.is_empty());
        assert_eq!(REGISTRY.types.len(), FINDING_TYPES.len());
    }

    #[test]
    fn validate_accepts_the_static_pattern_set() {
        assert!(validate().is_ok());
    }

    #[test]
    fn every_pattern_tag_resolves_to_a_finding_type() {
        for pattern in &REGISTRY.patterns {
            assert!(lookup(pattern.tag).is_some());
        }
    }
}
