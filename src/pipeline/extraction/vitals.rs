//! Structured vital readings pulled out with targeted patterns.
//!
//! Best-effort: a vital whose pattern does not match is simply absent.

use std::sync::LazyLock;

use regex::Regex;

use super::types::VitalSigns;
use crate::models::VitalKind;

/// "BP: 120/80", "blood pressure 130 / 85"
static BP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:blood pressure|bp)[\s:]*(\d{2,3})\s*/\s*(\d{2,3})")
        .expect("Invalid blood pressure pattern")
});

/// "HR: 72", "pulse 72 bpm"
static HR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:heart rate|pulse|hr)[\s:]*(\d{2,3})")
        .expect("Invalid heart rate pattern")
});

/// "temp: 98.6", "temperature 37C"
static TEMP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:temperature|temp)[\s:]*(\d{2,3}\.?\d*)")
        .expect("Invalid temperature pattern")
});

/// "glucose: 100", "blood sugar 110 mg/dL"
static GLUCOSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:blood sugar|glucose|blood glucose)[\s:]*(\d{2,3})")
        .expect("Invalid glucose pattern")
});

/// "weight: 70 kg", "weight 154.5 lbs". A unit is required.
static WEIGHT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bweight[\s:]*(\d{2,3}\.?\d*)\s*(?:kg|lbs?)")
        .expect("Invalid weight pattern")
});

pub fn extract_vital_signs(text: &str) -> VitalSigns {
    let mut vitals = VitalSigns::new();

    if let Some(caps) = BP_PATTERN.captures(text) {
        vitals.insert(VitalKind::BloodPressure, format!("{}/{}", &caps[1], &caps[2]));
    }

    let single_value = [
        (VitalKind::HeartRate, &*HR_PATTERN),
        (VitalKind::Temperature, &*TEMP_PATTERN),
        (VitalKind::BloodGlucose, &*GLUCOSE_PATTERN),
        (VitalKind::Weight, &*WEIGHT_PATTERN),
    ];
    for (kind, pattern) in single_value {
        if let Some(caps) = pattern.captures(text) {
            vitals.insert(kind, caps[1].to_string());
        }
    }

    vitals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blood_pressure_from_abbreviation() {
        let vitals = extract_vital_signs("Patient has fever and cough, BP 120/80");
        assert_eq!(vitals.get(&VitalKind::BloodPressure).unwrap(), "120/80");
    }

    #[test]
    fn blood_pressure_with_spaces_and_colon() {
        let vitals = extract_vital_signs("Blood pressure: 135 / 90 mmHg");
        assert_eq!(vitals.get(&VitalKind::BloodPressure).unwrap(), "135/90");
    }

    #[test]
    fn full_set_of_vitals() {
        let text = "BP: 118/76. HR: 72 bpm. Temp: 98.6F. Glucose: 105 mg/dL. Weight: 70.5 kg.";
        let vitals = extract_vital_signs(text);
        assert_eq!(vitals.len(), 5);
        assert_eq!(vitals[&VitalKind::HeartRate], "72");
        assert_eq!(vitals[&VitalKind::Temperature], "98.6");
        assert_eq!(vitals[&VitalKind::BloodGlucose], "105");
        assert_eq!(vitals[&VitalKind::Weight], "70.5");
    }

    #[test]
    fn pulse_counts_as_heart_rate() {
        let vitals = extract_vital_signs("pulse 88");
        assert_eq!(vitals[&VitalKind::HeartRate], "88");
    }

    #[test]
    fn weight_requires_unit() {
        assert!(extract_vital_signs("weight 70").is_empty());
        assert_eq!(extract_vital_signs("Weight 154 lbs")[&VitalKind::Weight], "154");
    }

    #[test]
    fn abbreviations_need_word_start() {
        // "hr" inside "thr" must not read as a heart rate.
        assert!(extract_vital_signs("Tachythr 99").get(&VitalKind::HeartRate).is_none());
    }

    #[test]
    fn missing_vitals_are_omitted() {
        let vitals = extract_vital_signs("No measurements were taken today.");
        assert!(vitals.is_empty());
    }

    #[test]
    fn first_reading_wins() {
        let vitals = extract_vital_signs("BP 150/95 on arrival, BP 130/85 at discharge");
        assert_eq!(vitals[&VitalKind::BloodPressure], "150/95");
    }

    #[test]
    fn serialized_keys_are_snake_case() {
        let vitals = extract_vital_signs("BP 120/80, HR 60");
        let json = serde_json::to_value(&vitals).unwrap();
        assert_eq!(json["blood_pressure"], "120/80");
        assert_eq!(json["heart_rate"], "60");
    }
}
