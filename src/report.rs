//! Plain-text assessment report for sharing (messaging apps, clipboard).

use crate::assessment::Assessment;

pub const REPORT_TITLE: &str = "Medical Assessment Report";

pub fn render_share_text(assessment: &Assessment) -> String {
    let mut text = format!("{REPORT_TITLE}\n");
    text.push_str(&format!("Date: {}\n\n", assessment.assessed_on.format("%Y-%m-%d")));

    match assessment.primary() {
        Some(top) => text.push_str(&format!(
            "Primary Condition: {} ({}% confidence)\n\n",
            top.name, top.confidence
        )),
        None => text.push_str("Primary Condition: none identified\n\n"),
    }

    push_section(&mut text, "Symptoms", assessment.symptoms.iter().cloned(), true);
    push_section(&mut text, "Allergies", assessment.allergies.iter().cloned(), false);
    push_section(
        &mut text,
        "Current Medications",
        assessment.current_medications.iter().cloned(),
        false,
    );
    push_section(
        &mut text,
        "Recommended Medications",
        assessment
            .safe_medicines()
            .map(|v| format!("{} - {}", v.medicine, v.category)),
        false,
    );

    text.push_str(&format!("Disclaimer: {}", assessment.disclaimer));
    text
}

/// Titled bullet list followed by a blank line. Empty lists are skipped
/// unless `always` is set.
fn push_section(text: &mut String, title: &str, items: impl Iterator<Item = String>, always: bool) {
    let bullets: Vec<String> = items.map(|i| format!("• {i}")).collect();
    if bullets.is_empty() && !always {
        return;
    }
    text.push_str(&format!("{title}:\n{}\n\n", bullets.join("\n")));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{assess, AssessmentRequest};
    use crate::knowledge::KnowledgeBase;
    use chrono::NaiveDate;

    fn assessment(symptoms: &[&str], allergies: &[&str], current: &[&str]) -> Assessment {
        assess(
            KnowledgeBase::builtin(),
            AssessmentRequest {
                symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
                allergies: allergies.iter().map(|s| s.to_string()).collect(),
                current_medications: current.iter().map(|s| s.to_string()).collect(),
            },
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        )
    }

    #[test]
    fn full_report_layout() {
        let text = render_share_text(&assessment(&["wheezing"], &["budesonide"], &["Vitamin D"]));
        let expected = "Medical Assessment Report\n\
            Date: 2024-05-02\n\n\
            Primary Condition: Asthma (20% confidence)\n\n\
            Symptoms:\n• wheezing\n\n\
            Allergies:\n• budesonide\n\n\
            Current Medications:\n• Vitamin D\n\n\
            Recommended Medications:\n\
            • Salbutamol - Bronchodilator\n\
            • Montelukast - Medication\n\
            • Theophylline - Medication\n\n\
            Disclaimer: This is for educational purposes only. Always consult a healthcare professional.";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_optional_sections_are_omitted() {
        let text = render_share_text(&assessment(&["wheezing"], &[], &[]));
        assert!(!text.contains("Allergies:"));
        assert!(!text.contains("Current Medications:"));
        assert!(text.contains("Recommended Medications:"));
    }

    #[test]
    fn flagged_medicines_are_not_recommended() {
        let text = render_share_text(&assessment(&["wheezing"], &["salbutamol"], &[]));
        assert!(!text.contains("Salbutamol -"));
    }

    #[test]
    fn no_condition_still_renders() {
        let text = render_share_text(&assessment(&["purple elbows"], &[], &[]));
        assert!(text.contains("Primary Condition: none identified"));
        assert!(text.contains("Symptoms:\n• purple elbows"));
        assert!(text.ends_with("Always consult a healthcare professional."));
    }
}
