use super::types::VitalSigns;

pub const EMPTY_SUMMARY: &str = "No significant medical information detected in the document.";

/// One-paragraph digest of an analysis. Categories appear in a fixed order
/// (symptoms, diseases, medications, tests, vitals) and empty ones are left
/// out.
pub fn generate_summary(
    symptoms: &[String],
    diseases: &[String],
    medications: &[String],
    tests: &[String],
    vitals: &VitalSigns,
) -> String {
    let mut parts = Vec::new();

    if !symptoms.is_empty() {
        parts.push(format!(
            "Identified {} symptom(s): {}",
            symptoms.len(),
            preview(symptoms, 5)
        ));
    }

    if !diseases.is_empty() {
        parts.push(format!("Mentioned condition(s): {}", diseases.join(", ")));
    }

    if !medications.is_empty() {
        parts.push(format!("Medication(s) found: {}", medications.join(", ")));
    }

    if !tests.is_empty() {
        parts.push(format!("Test(s) mentioned: {}", preview(tests, 3)));
    }

    if !vitals.is_empty() {
        let readings: Vec<String> = vitals
            .iter()
            .map(|(kind, value)| format!("{}: {}", kind.label(), value))
            .collect();
        parts.push(format!("Vital signs: {}", readings.join(", ")));
    }

    if parts.is_empty() {
        EMPTY_SUMMARY.to_string()
    } else {
        parts.join(". ")
    }
}

/// First `limit` items joined, with "..." when more were left out.
fn preview(items: &[String], limit: usize) -> String {
    let shown = items[..items.len().min(limit)].join(", ");
    if items.len() > limit {
        format!("{shown}...")
    } else {
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VitalKind;

    fn s(items: &[&str]) -> Vec<String> {
        items.iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn empty_analysis_has_fallback_text() {
        let summary = generate_summary(&[], &[], &[], &[], &VitalSigns::new());
        assert_eq!(summary, EMPTY_SUMMARY);
    }

    #[test]
    fn categories_in_fixed_order() {
        let mut vitals = VitalSigns::new();
        vitals.insert(VitalKind::HeartRate, "72".into());
        vitals.insert(VitalKind::BloodPressure, "120/80".into());
        let summary = generate_summary(
            &s(&["fever"]),
            &s(&["influenza"]),
            &s(&["ibuprofen"]),
            &s(&["cbc"]),
            &vitals,
        );
        assert_eq!(
            summary,
            "Identified 1 symptom(s): fever. Mentioned condition(s): influenza. \
             Medication(s) found: ibuprofen. Test(s) mentioned: cbc. \
             Vital signs: blood pressure: 120/80, heart rate: 72"
        );
    }

    #[test]
    fn empty_categories_omitted() {
        let summary = generate_summary(&[], &[], &s(&["warfarin"]), &[], &VitalSigns::new());
        assert_eq!(summary, "Medication(s) found: warfarin");
    }

    #[test]
    fn long_symptom_list_truncated_to_five() {
        let symptoms = s(&["fever", "cough", "headache", "pain", "nausea", "rash"]);
        let summary = generate_summary(&symptoms, &[], &[], &[], &VitalSigns::new());
        assert_eq!(
            summary,
            "Identified 6 symptom(s): fever, cough, headache, pain, nausea..."
        );
    }

    #[test]
    fn long_test_list_truncated_to_three() {
        let tests = s(&["cbc", "mri", "ecg", "tsh"]);
        let summary = generate_summary(&[], &[], &[], &tests, &VitalSigns::new());
        assert_eq!(summary, "Test(s) mentioned: cbc, mri, ecg...");
    }
}
