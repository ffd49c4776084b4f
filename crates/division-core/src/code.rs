// crates/division-core/src/code.rs

//! # Division Codes
//!
//! A division code is six decimal digits: `PPCCAA`.
//!
//! - `PP` is the province number and is never `00`.
//! - `CC` is the city number; `0000` in `CCAA` marks a province record.
//! - `AA` is the area number; `00` marks a city record.

use serde::{Deserialize, Serialize};

/// Width of every well-formed division code.
pub const CODE_LEN: usize = 6;

/// Sentinel that addresses the (virtual) parent of all provinces.
pub const ROOT_CODE: &str = "000000";

/// The level a code addresses in the province → city → area hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeLevel {
    Unknown,
    Province,
    City,
    Area,
}

impl CodeLevel {
    /// Classifies `code`. Total: every string maps to exactly one level.
    ///
    /// ```rust
    /// use division_core::CodeLevel;
    ///
    /// assert_eq!(CodeLevel::classify("110000"), CodeLevel::Province);
    /// assert_eq!(CodeLevel::classify("110100"), CodeLevel::City);
    /// assert_eq!(CodeLevel::classify("110101"), CodeLevel::Area);
    /// assert_eq!(CodeLevel::classify("000101"), CodeLevel::Unknown);
    /// assert_eq!(CodeLevel::classify("1101"), CodeLevel::Unknown);
    /// ```
    pub fn classify(code: &str) -> Self {
        // Prefixes are cut on byte offsets 2 and 4; both must be char boundaries.
        if code.len() != CODE_LEN || !code.is_char_boundary(2) || !code.is_char_boundary(4) {
            return CodeLevel::Unknown;
        }

        if &code[..2] == "00" {
            CodeLevel::Unknown
        } else if &code[2..] == "0000" {
            CodeLevel::Province
        } else if &code[4..] == "00" {
            CodeLevel::City
        } else {
            CodeLevel::Area
        }
    }

    /// Number of names in the chain of a code at this level (0 for `Unknown`).
    pub fn depth(self) -> usize {
        match self {
            CodeLevel::Unknown => 0,
            CodeLevel::Province => 1,
            CodeLevel::City => 2,
            CodeLevel::Area => 3,
        }
    }

    pub fn is_known(self) -> bool {
        self != CodeLevel::Unknown
    }
}

/// Convenience wrapper around [`CodeLevel::classify`].
#[inline]
pub fn classify(code: &str) -> CodeLevel {
    CodeLevel::classify(code)
}

// The helpers below expect a code that classified as a known level.

/// `PP` of `PPCCAA`.
#[inline]
pub fn province_prefix(code: &str) -> &str {
    &code[..2]
}

/// `PPCC` of `PPCCAA`.
#[inline]
pub fn city_prefix(code: &str) -> &str {
    &code[..4]
}

/// The full code of the province that owns `code` (`PP0000`).
pub fn province_key(code: &str) -> String {
    format!("{}0000", province_prefix(code))
}

/// The full code of the city that owns `code` (`PPCC00`).
pub fn city_key(code: &str) -> String {
    format!("{}00", city_prefix(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_level() {
        assert_eq!(classify("110000"), CodeLevel::Province);
        assert_eq!(classify("110100"), CodeLevel::City);
        assert_eq!(classify("110101"), CodeLevel::Area);
        assert_eq!(classify("999999"), CodeLevel::Area);
        assert_eq!(classify("650010"), CodeLevel::Area);
    }

    #[test]
    fn rejects_wrong_length_and_zero_province() {
        for code in ["", "11", "11000", "1100000", "000000", "000100", "000001"] {
            assert_eq!(classify(code), CodeLevel::Unknown, "{code:?}");
        }
    }

    #[test]
    fn non_ascii_follows_byte_positions() {
        // "é" is two bytes, so each of these is six bytes long.
        assert_eq!("é1234".len(), CODE_LEN);
        assert_eq!(classify("é1234"), CodeLevel::Area);
        assert_eq!(classify("11é00"), CodeLevel::City);
        assert_eq!(classify("é0000"), CodeLevel::Province);
    }

    #[test]
    fn split_inside_a_char_is_unknown() {
        // Byte 2 falls inside "é".
        assert_eq!("1é000".len(), CODE_LEN);
        assert_eq!(classify("1é000"), CodeLevel::Unknown);
        // Byte 4 falls inside "é".
        assert_eq!("111é0".len(), CODE_LEN);
        assert_eq!(classify("111é0"), CodeLevel::Unknown);
    }

    #[test]
    fn non_digit_codes_follow_the_zero_rules() {
        assert_eq!(classify("ab0000"), CodeLevel::Province);
        assert_eq!(classify("abcd00"), CodeLevel::City);
        assert_eq!(classify("abcdef"), CodeLevel::Area);
    }

    #[test]
    fn depth_matches_level() {
        assert_eq!(CodeLevel::Unknown.depth(), 0);
        assert_eq!(classify("110000").depth(), 1);
        assert_eq!(classify("110100").depth(), 2);
        assert_eq!(classify("110101").depth(), 3);
        assert!(!CodeLevel::Unknown.is_known());
    }

    #[test]
    fn parent_keys() {
        assert_eq!(province_prefix("110101"), "11");
        assert_eq!(city_prefix("110101"), "1101");
        assert_eq!(province_key("110101"), "110000");
        assert_eq!(province_key("110100"), "110000");
        assert_eq!(city_key("110101"), "110100");
    }
}
