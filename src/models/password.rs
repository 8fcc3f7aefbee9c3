//! Pwned Passwords range lines.
//!
//! The range API answers with `SUFFIX:COUNT` lines. The domain client hands
//! those lines back untouched; this module is for callers that want them
//! parsed.

use std::str::FromStr;

use thiserror::Error;

/// Length of the hash prefix sent to the range API.
pub const HASH_PREFIX_LEN: usize = 5;

/// A malformed range line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeLineError {
    /// No `:` separator.
    #[error("range line '{line}' has no ':' separator")]
    MissingSeparator { line: String },
    /// Suffix is empty or not hexadecimal.
    #[error("range line '{line}' has a non-hexadecimal suffix")]
    InvalidSuffix { line: String },
    /// Count is not a non-negative integer.
    #[error("range line '{line}' has an invalid count")]
    InvalidCount { line: String },
}

/// One `SUFFIX:COUNT` entry of a range response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PasswordRangeEntry {
    /// Hash suffix, uppercase hexadecimal.
    pub suffix: String,
    /// Times the full hash appears in the corpus. Padding entries carry 0.
    pub count: u64,
}

impl PasswordRangeEntry {
    /// True for entries injected by the `Add-Padding` request header.
    #[must_use]
    pub fn is_padding(&self) -> bool {
        self.count == 0
    }
}

impl FromStr for PasswordRangeEntry {
    type Err = RangeLineError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim();
        let (suffix, count) =
            trimmed
                .split_once(':')
                .ok_or_else(|| RangeLineError::MissingSeparator {
                    line: trimmed.to_string(),
                })?;
        if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RangeLineError::InvalidSuffix {
                line: trimmed.to_string(),
            });
        }
        let count = count
            .trim()
            .parse::<u64>()
            .map_err(|_| RangeLineError::InvalidCount {
                line: trimmed.to_string(),
            })?;
        Ok(Self {
            suffix: suffix.to_ascii_uppercase(),
            count,
        })
    }
}

/// Parses every non-blank line of a range response.
///
/// # Errors
///
/// Returns the first [`RangeLineError`] encountered.
pub fn parse_range_lines<S: AsRef<str>>(
    lines: &[S],
) -> Result<Vec<PasswordRangeEntry>, RangeLineError> {
    lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Looks up the occurrence count for `suffix` among raw range lines.
///
/// Malformed lines are skipped. Padding entries count as absent.
#[must_use]
pub fn find_suffix_count<S: AsRef<str>>(lines: &[S], suffix: &str) -> Option<u64> {
    lines
        .iter()
        .filter_map(|line| line.as_ref().parse::<PasswordRangeEntry>().ok())
        .find(|entry| entry.suffix.eq_ignore_ascii_case(suffix))
        .map(|entry| entry.count)
        .filter(|count| *count > 0)
}

/// Returns true if `prefix` is exactly five hexadecimal characters.
#[must_use]
pub fn is_valid_hash_prefix(prefix: &str) -> bool {
    prefix.len() == HASH_PREFIX_LEN && prefix.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &[&str] = &[
        "00000005AD76BD555C1D6D771DE417A4B87E4B4:4",
        "00000008CD8B57AA7CA1D16D96A2C70C7C86BAB5:1",
        "0000000A0E6C5B6F7E8A8F4A1B0F1B0F1B0F1B0F:0",
    ];

    #[test]
    fn test_parse_entry() {
        let entry: PasswordRangeEntry = SAMPLE[0].parse().unwrap();
        assert_eq!(entry.suffix, "00000005AD76BD555C1D6D771DE417A4B87E4B4");
        assert_eq!(entry.count, 4);
        assert!(!entry.is_padding());
    }

    #[test]
    fn test_parse_entry_uppercases_and_trims() {
        let entry: PasswordRangeEntry = " abc123:7\r".parse().unwrap();
        assert_eq!(entry.suffix, "ABC123");
        assert_eq!(entry.count, 7);
    }

    #[test]
    fn test_parse_entry_errors() {
        assert!(matches!(
            "ABCDEF".parse::<PasswordRangeEntry>(),
            Err(RangeLineError::MissingSeparator { .. })
        ));
        assert!(matches!(
            "XYZ:1".parse::<PasswordRangeEntry>(),
            Err(RangeLineError::InvalidSuffix { .. })
        ));
        assert!(matches!(
            "ABC:-1".parse::<PasswordRangeEntry>(),
            Err(RangeLineError::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_parse_range_lines_skips_blank() {
        let mut lines: Vec<&str> = SAMPLE.to_vec();
        lines.push("");
        let entries = parse_range_lines(&lines).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[2].is_padding());
    }

    #[test]
    fn test_find_suffix_count() {
        assert_eq!(
            find_suffix_count(SAMPLE, "00000008cd8b57aa7ca1d16d96a2c70c7c86bab5"),
            Some(1)
        );
        assert_eq!(find_suffix_count(SAMPLE, "FFFF"), None);
        // padding entry
        assert_eq!(
            find_suffix_count(SAMPLE, "0000000A0E6C5B6F7E8A8F4A1B0F1B0F1B0F1B0F"),
            None
        );
    }

    #[test]
    fn test_is_valid_hash_prefix() {
        assert!(is_valid_hash_prefix("21BD1"));
        assert!(is_valid_hash_prefix("abcde"));
        assert!(!is_valid_hash_prefix("21BD"));
        assert!(!is_valid_hash_prefix("21BD12"));
        assert!(!is_valid_hash_prefix("21BDG"));
    }
}
