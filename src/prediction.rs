//! Condition matcher: scores knowledge-base conditions against a symptom set.
//!
//! Confidence is `matching / condition_symptom_count`, so it is relative to
//! each condition's own size. A condition with five symptoms reaches 20%
//! from a single hit while one with six reaches 17%. Scores are not
//! comparable to a probability and are not normalized across conditions.

use std::collections::HashSet;

use crate::knowledge::KnowledgeBase;
use crate::models::{ConditionRecord, Prediction};

/// Rank every condition sharing at least one symptom with the input,
/// highest confidence first. Ties keep table order.
///
/// An input symptom counts toward a condition when it is a case-insensitive
/// substring of one of the condition's canonical symptoms (`"fever"` hits
/// `"high fever"`). The reverse direction is not checked.
pub fn match_conditions<S: AsRef<str>>(kb: &KnowledgeBase, symptoms: &[S]) -> Vec<Prediction> {
    let inputs = normalize_symptoms(symptoms);
    if inputs.is_empty() {
        return Vec::new();
    }

    let mut predictions: Vec<Prediction> = kb
        .conditions()
        .iter()
        .filter_map(|condition| score_condition(condition, &inputs))
        .collect();

    // sort_by is stable: equal scores stay in table order.
    predictions.sort_by(|a, b| b.confidence.cmp(&a.confidence));

    tracing::debug!(
        inputs = inputs.len(),
        matched = predictions.len(),
        top = predictions.first().map(|p| p.name.as_str()),
        "Conditions matched"
    );

    predictions
}

fn score_condition(condition: &ConditionRecord, inputs: &[String]) -> Option<Prediction> {
    let canonical: Vec<String> = condition
        .symptoms
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let matching = inputs
        .iter()
        .filter(|input| canonical.iter().any(|c| c.contains(input.as_str())))
        .count();

    if matching == 0 || canonical.is_empty() {
        return None;
    }

    Some(Prediction {
        name: condition.name.clone(),
        confidence: confidence(matching, canonical.len()),
        symptoms: condition.symptoms.clone(),
        medicines: condition.medicines.clone(),
    })
}

/// Percentage of a condition's symptoms that matched, rounded, capped at 100.
pub fn confidence(matching: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (matching as f64 / total as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Trim, lowercase, drop blanks and repeated entries.
fn normalize_symptoms<S: AsRef<str>>(symptoms: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    symptoms
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> &'static KnowledgeBase {
        KnowledgeBase::builtin()
    }

    fn names(predictions: &[Prediction]) -> Vec<&str> {
        predictions.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let none: [&str; 0] = [];
        assert!(match_conditions(kb(), &none).is_empty());
    }

    #[test]
    fn blank_inputs_match_nothing() {
        assert!(match_conditions(kb(), &["", "   "]).is_empty());
    }

    #[test]
    fn fever_and_cough_rank_cold_and_flu() {
        let predictions = match_conditions(kb(), &["fever", "cough"]);
        let top: Vec<&str> = names(&predictions).into_iter().take(4).collect();
        assert!(top.contains(&"Common Cold"), "got {top:?}");
        assert!(top.contains(&"Influenza"), "got {top:?}");
        for p in &predictions {
            assert!(p.confidence > 0);
        }
    }

    #[test]
    fn fever_and_cough_scores() {
        let predictions = match_conditions(kb(), &["fever", "cough"]);
        let find = |name: &str| predictions.iter().find(|p| p.name == name).unwrap().confidence;
        // "fever" hits "mild fever"/"high fever"/"fever", "cough" hits "cough".
        assert_eq!(find("Common Cold"), 33);
        assert_eq!(find("Influenza"), 33);
        assert_eq!(find("Asthma"), 20);
        assert_eq!(find("Urinary Tract Infection"), 20);
    }

    #[test]
    fn results_sorted_non_increasing() {
        let predictions = match_conditions(kb(), &["fatigue", "headache", "nausea", "cough"]);
        assert!(!predictions.is_empty());
        for pair in predictions.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn only_conditions_with_a_match_are_returned() {
        let predictions = match_conditions(kb(), &["wheezing"]);
        assert_eq!(names(&predictions), vec!["Asthma"]);
        assert_eq!(predictions[0].confidence, 20);
    }

    #[test]
    fn ties_keep_table_order() {
        // Both have five symptoms and one hit each.
        let predictions = match_conditions(kb(), &["blurred vision"]);
        assert_eq!(names(&predictions), vec!["Hypertension", "Diabetes Type 2"]);
    }

    #[test]
    fn matching_is_case_and_whitespace_insensitive() {
        let a = match_conditions(kb(), &["  RUNNY Nose "]);
        let b = match_conditions(kb(), &["runny nose"]);
        assert_eq!(a, b);
        assert_eq!(names(&a), vec!["Allergic Rhinitis", "Common Cold"]);
    }

    #[test]
    fn only_canonical_contains_input_direction() {
        // Input longer than any canonical symptom never matches.
        assert!(match_conditions(kb(), &["persistent dry cough at night"]).is_empty());
        // Input that is a fragment of a canonical symptom does.
        assert!(!match_conditions(kb(), &["urinat"]).is_empty());
    }

    #[test]
    fn unknown_symptoms_contribute_nothing() {
        let with_noise = match_conditions(kb(), &["wheezing", "purple elbows"]);
        let without = match_conditions(kb(), &["wheezing"]);
        assert_eq!(with_noise, without);
    }

    #[test]
    fn repeated_symptom_counts_once() {
        let once = match_conditions(kb(), &["sneezing"]);
        let twice = match_conditions(kb(), &["sneezing", "Sneezing"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn all_symptoms_of_a_condition_reach_100() {
        let migraine = kb().condition("Migraine").unwrap().symptoms.clone();
        let predictions = match_conditions(kb(), &migraine);
        assert_eq!(predictions[0].name, "Migraine");
        assert_eq!(predictions[0].confidence, 100);
    }

    #[test]
    fn prediction_carries_condition_tables() {
        let predictions = match_conditions(kb(), &["chills"]);
        assert_eq!(predictions[0].name, "Influenza");
        assert_eq!(predictions[0].medicines, vec!["Oseltamivir", "Paracetamol", "Ibuprofen"]);
        assert_eq!(predictions[0].symptoms.len(), 6);
    }

    #[test]
    fn confidence_rounds_and_clamps() {
        assert_eq!(confidence(1, 6), 17);
        assert_eq!(confidence(1, 8), 13);
        assert_eq!(confidence(7, 5), 100);
        assert_eq!(confidence(0, 0), 0);
    }

    #[test]
    fn matching_is_idempotent() {
        let input = ["fever", "cough", "headache"];
        assert_eq!(match_conditions(kb(), &input), match_conditions(kb(), &input));
    }
}
