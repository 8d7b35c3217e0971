use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field} value: {value}")]
pub struct ParseEnumError {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ParseEnumError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// Variant order is the scan and summary order.
str_enum!(KeywordCategory {
    Symptom => "symptom",
    Disease => "disease",
    Medication => "medication",
    Test => "test",
    Vital => "vital",
});

// Variant order is the order vitals appear in summaries.
str_enum!(VitalKind {
    BloodPressure => "blood_pressure",
    HeartRate => "heart_rate",
    Temperature => "temperature",
    BloodGlucose => "blood_glucose",
    Weight => "weight",
});

impl VitalKind {
    /// Human-readable label used in summaries ("blood pressure").
    pub fn label(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn keyword_category_round_trip() {
        for cat in [
            KeywordCategory::Symptom,
            KeywordCategory::Disease,
            KeywordCategory::Medication,
            KeywordCategory::Test,
            KeywordCategory::Vital,
        ] {
            assert_eq!(KeywordCategory::from_str(cat.as_str()).unwrap(), cat);
        }
    }

    #[test]
    fn invalid_category_names_field() {
        let err = KeywordCategory::from_str("diagnosis").unwrap_err();
        assert_eq!(err.field, "KeywordCategory");
        assert_eq!(err.value, "diagnosis");
    }

    #[test]
    fn vital_kind_serializes_snake_case() {
        let json = serde_json::to_string(&VitalKind::BloodPressure).unwrap();
        assert_eq!(json, "\"blood_pressure\"");
    }

    #[test]
    fn vital_label_replaces_underscore() {
        assert_eq!(VitalKind::BloodGlucose.label(), "blood glucose");
        assert_eq!(VitalKind::Weight.label(), "weight");
    }
}
