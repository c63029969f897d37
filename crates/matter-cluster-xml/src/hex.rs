// crates/matter-cluster-xml/src/hex.rs

//! The `HexValue` type used for every protocol identifier (cluster codes,
//! attribute/command/event codes, field IDs, device and profile IDs).

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of hex digits an identifier is padded to when built from a number.
const CANONICAL_WIDTH: usize = 4;

/// A lowercase, `0x`-prefixed hexadecimal identifier.
///
/// Two values are equal when their canonical strings are equal, so
/// independently constructed instances compare by content.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexValue(String);

impl HexValue {
    /// Builds a value from a string, sanitizing it with [`sanitize_hex_string`].
    ///
    /// Never fails; input without any hex digit yields `0x0`.
    pub fn new(s: &str) -> Self {
        HexValue(sanitize_hex_string(s))
    }

    /// Builds a value from an integer, zero-padded to four digits.
    ///
    /// Values needing more than four digits keep their natural length.
    pub fn from_number(n: u64) -> Self {
        HexValue(format!("0x{:0width$x}", n, width = CANONICAL_WIDTH))
    }

    /// Parses the digits as base 16. `None` when they do not fit in a `u64`.
    pub fn to_number(&self) -> Option<u64> {
        u64::from_str_radix(self.digits(), 16).ok()
    }

    /// The canonical string, including the `0x` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digits without the `0x` prefix.
    pub fn digits(&self) -> &str {
        &self.0[2..]
    }
}

impl Default for HexValue {
    fn default() -> Self {
        HexValue::from_number(0)
    }
}

/// Filters arbitrary text down to a canonical hex string.
///
/// An optional leading `0x`/`0X` is removed, every non-hex character is
/// dropped, leading zeros beyond the four-digit identifier width are removed
/// and the result is lowercased and re-prefixed. Usable on every keystroke of
/// a form field: applying it twice gives the same result as applying it once.
pub fn sanitize_hex_string(s: &str) -> String {
    let trimmed = s.trim_start();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let digits: String = body
        .chars()
        .filter(char::is_ascii_hexdigit)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if digits.is_empty() {
        return String::from("0x0");
    }

    // Keep at most `CANONICAL_WIDTH` digits of zero padding.
    let significant = digits.trim_start_matches('0');
    let kept = if significant.len() >= CANONICAL_WIDTH {
        significant
    } else {
        let start = digits.len().saturating_sub(CANONICAL_WIDTH);
        &digits[start..]
    };

    format!("0x{}", kept)
}

impl fmt::Display for HexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexValue {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(HexValue::new(s))
    }
}

impl From<u64> for HexValue {
    fn from(n: u64) -> Self {
        HexValue::from_number(n)
    }
}

impl From<&str> for HexValue {
    fn from(s: &str) -> Self {
        HexValue::new(s)
    }
}

impl Serialize for HexValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(HexValue::new(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_number_pads_to_four_digits() {
        assert_eq!(HexValue::from_number(4660).as_str(), "0x1234");
        assert_eq!(HexValue::from_number(0).as_str(), "0x0000");
        assert_eq!(HexValue::from_number(6).as_str(), "0x0006");
        assert_eq!(HexValue::from_number(0xABCDE).as_str(), "0xabcde");
    }

    #[test]
    fn test_from_string_sanitizes() {
        assert_eq!(HexValue::new("0X00FF").as_str(), "0x00ff");
        assert_eq!(HexValue::new("0x1g2h3").as_str(), "0x123");
        assert_eq!(HexValue::new("zzz").as_str(), "0x0");
        assert_eq!(HexValue::new("").as_str(), "0x0");
        assert_eq!(HexValue::new("0x").as_str(), "0x0");
        assert_eq!(HexValue::new("0x000000fff1").as_str(), "0xfff1");
        assert_eq!(HexValue::new("0x0000000000").as_str(), "0x0000");
        assert_eq!(HexValue::new("0x00123456").as_str(), "0x123456");
    }

    #[test]
    fn test_to_number() {
        assert_eq!(HexValue::new("0x1234").to_number(), Some(4660));
        assert_eq!(HexValue::new("0x0").to_number(), Some(0));
        assert_eq!(HexValue::new("0xffffffffffffffffff").to_number(), None);
    }

    #[test]
    fn test_equality_is_by_string() {
        let a = HexValue::new("0x0006");
        let b = HexValue::from_number(6);
        assert_eq!(a, b);
        assert_ne!(HexValue::new("0x6"), b);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&HexValue::from_number(0x1f)).unwrap();
        assert_eq!(json, "\"0x001f\"");
        let back: HexValue = serde_json::from_str("\"0X1F\"").unwrap();
        assert_eq!(back.as_str(), "0x1f");
    }

    proptest! {
        #[test]
        fn prop_number_round_trip(n in 0u64..=u64::MAX) {
            let hex = HexValue::from_number(n);
            prop_assert_eq!(hex.to_number(), Some(n));
            prop_assert_eq!(HexValue::new(hex.as_str()), hex);
        }

        #[test]
        fn prop_sanitize_is_idempotent(s in ".*") {
            let once = sanitize_hex_string(&s);
            prop_assert_eq!(sanitize_hex_string(&once), once);
        }
    }
}
