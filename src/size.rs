//! Human-readable file size parsing for the `-l/--limit` CLI flag.
//!
//! Accepts a non-negative number followed by an optional unit suffix
//! (`B`, `KB`, `MB`, `GB`), using binary multiples (1 KB = 1024 B) and
//! case-insensitive unit matching, e.g. `"500mb"`, `"2GB"`, `"128"`.

use crate::error::MystikError;

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// Parses a size string into a byte count.
///
/// # Errors
///
/// Returns `MystikError::ArgumentInvalid` if the string has no numeric
/// prefix, the number doesn't parse, or the unit suffix is unrecognized.
pub fn parse_size(input: &str) -> Result<u64, MystikError> {
    let trimmed = input.trim();
    let split_at = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(trimmed.len());

    let (number, unit) = trimmed.split_at(split_at);
    let unit = unit.trim();

    let value: f64 = number
        .parse()
        .map_err(|_| MystikError::ArgumentInvalid(format!("invalid size: '{input}'")))?;

    if value < 0.0 {
        return Err(MystikError::ArgumentInvalid(format!(
            "size cannot be negative: '{input}'"
        )));
    }

    let multiplier = match unit.to_ascii_uppercase().as_str() {
        "" | "B" => 1,
        "KB" => KB,
        "MB" => MB,
        "GB" => GB,
        other => {
            return Err(MystikError::ArgumentInvalid(format!(
                "unrecognized size unit: '{other}'"
            )))
        }
    };

    Ok((value * multiplier as f64) as u64)
}

/// Formats a byte count as a human-readable size string, e.g. `1.5KB`.
///
/// Used for diagnostic/status output; not part of the manifest schema.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    let units = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut index = 0;

    while value >= 1024.0 && index < units.len() - 1 {
        value /= 1024.0;
        index += 1;
    }

    format!("{:.2}{}", value, units[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_bytes() {
        assert_eq!(parse_size("512").unwrap(), 512);
        assert_eq!(parse_size("512B").unwrap(), 512);
    }

    #[test]
    fn parses_binary_units_case_insensitively() {
        assert_eq!(parse_size("1KB").unwrap(), 1024);
        assert_eq!(parse_size("1kb").unwrap(), 1024);
        assert_eq!(parse_size("500MB").unwrap(), 500 * MB);
        assert_eq!(parse_size("2GB").unwrap(), 2 * GB);
    }

    #[test]
    fn parses_fractional_values() {
        assert_eq!(parse_size("1.5KB").unwrap(), 1536);
    }

    #[test]
    fn rejects_unknown_unit() {
        assert!(parse_size("10PB").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_size("not-a-size").is_err());
    }

    #[test]
    fn formats_round_trip_scale() {
        assert_eq!(format_size(512), "512.00B");
        assert_eq!(format_size(2048), "2.00KB");
    }
}
