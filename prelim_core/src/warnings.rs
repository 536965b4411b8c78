//! Warning codes and localized messages
//!
//! Member results carry language-neutral [`WarningCode`] values; the message
//! catalog here renders them for display. English and Bengali texts are
//! provided, matching the locales the product ships in.

use serde::{Deserialize, Serialize};

/// Display locale for warning messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Bengali
    Bn,
}

/// Language-neutral warning identifiers attached to member results.
///
/// Warnings signal that a fallback design is inadequate; they never abort
/// the analysis.
///
/// # Example
/// ```
/// use prelim_core::warnings::{Locale, WarningCode};
///
/// let code = WarningCode::ColumnAxialDeficit;
/// assert_eq!(code.code(), "COLUMN_AXIAL_DEFICIT");
/// assert!(code.message(Locale::En).contains("capacity"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningCode {
    /// Column design capacity phi*Pn is below the required ultimate load Pu
    ColumnAxialDeficit,
    /// Footing bearing pressure exceeds the allowable soil bearing capacity
    FootingBearingExceeded,
}

impl WarningCode {
    /// All warning codes in stable order
    pub const ALL: [WarningCode; 2] = [
        WarningCode::ColumnAxialDeficit,
        WarningCode::FootingBearingExceeded,
    ];

    /// Short stable code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::ColumnAxialDeficit => "COLUMN_AXIAL_DEFICIT",
            WarningCode::FootingBearingExceeded => "FOOTING_BEARING_EXCEEDED",
        }
    }

    /// Human-readable message in the requested locale
    pub fn message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (WarningCode::ColumnAxialDeficit, Locale::En) => {
                "Column axial capacity is less than the required ultimate load"
            }
            (WarningCode::ColumnAxialDeficit, Locale::Bn) => {
                "কলামের ধারণ ক্ষমতা প্রয়োজনীয় Pu থেকে কম"
            }
            (WarningCode::FootingBearingExceeded, Locale::En) => {
                "Footing size must be increased (bearing pressure too high)"
            }
            (WarningCode::FootingBearingExceeded, Locale::Bn) => {
                "ফুটিং আকার বৃদ্ধি প্রয়োজন (বেয়ারিং চাপ বেশি)"
            }
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let codes: Vec<_> = WarningCode::ALL.iter().map(|w| w.code()).collect();
        let mut deduped = codes.clone();
        deduped.dedup();
        assert_eq!(codes, deduped);
    }

    #[test]
    fn test_every_code_has_both_locales() {
        for code in WarningCode::ALL {
            assert!(!code.message(Locale::En).is_empty());
            assert!(!code.message(Locale::Bn).is_empty());
        }
    }

    #[test]
    fn test_serialization() {
        let code = WarningCode::FootingBearingExceeded;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"FootingBearingExceeded\"");
        let roundtrip: WarningCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, roundtrip);
    }
}
