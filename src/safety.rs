//! Medicine safety screen: allergy overlap and known interaction partners.
//!
//! This is a string heuristic, not a clinical check. It knows nothing about
//! dose, severity or drug classes, and an unflagged medicine is only
//! "not known to conflict". Interaction lookup is directional: only the
//! candidate medicine's own partner list is consulted, so a pair listed
//! under just one of the two drugs is caught only when that drug is the
//! candidate.

use crate::knowledge::KnowledgeBase;
use crate::models::{
    SafetyConcern, SafetyStats, SafetyVerdict, DEFAULT_CATEGORY, DEFAULT_UNIT_PRICE,
};

pub const REASON_ALLERGY: &str = "Allergy detected";
pub const REASON_SAFE: &str = "Safe to use";

/// One verdict per candidate medicine, in input order. Allergy beats
/// interaction; the first matching partner (table order) is reported.
pub fn evaluate_safety<M, A, C>(
    kb: &KnowledgeBase,
    medicines: &[M],
    allergies: &[A],
    current_medications: &[C],
) -> Vec<SafetyVerdict>
where
    M: AsRef<str>,
    A: AsRef<str>,
    C: AsRef<str>,
{
    let allergies = lowercase_nonblank(allergies);
    let current = lowercase_nonblank(current_medications);

    let verdicts: Vec<SafetyVerdict> = medicines
        .iter()
        .map(|m| evaluate_one(kb, m.as_ref(), &allergies, &current))
        .collect();

    tracing::debug!(
        medicines = verdicts.len(),
        flagged = verdicts.iter().filter(|v| !v.safe).count(),
        "Safety screen complete"
    );

    verdicts
}

fn evaluate_one(
    kb: &KnowledgeBase,
    medicine: &str,
    allergies: &[(String, String)],
    current: &[(String, String)],
) -> SafetyVerdict {
    let record = kb.medicine(medicine);
    let price = record.map_or(DEFAULT_UNIT_PRICE, |r| r.price());
    let category = record
        .map_or(DEFAULT_CATEGORY, |r| r.category_label())
        .to_string();

    let verdict = |concern: Option<SafetyConcern>, reason: String| SafetyVerdict {
        medicine: medicine.to_string(),
        safe: concern.is_none(),
        reason,
        concern,
        price,
        category: category.clone(),
    };

    let name = medicine.trim().to_lowercase();

    let allergy = allergies.iter().find(|(_, lower)| {
        !name.is_empty() && (name.contains(lower.as_str()) || lower.contains(name.as_str()))
    });
    if let Some((allergen, _)) = allergy {
        return verdict(
            Some(SafetyConcern::Allergy {
                allergen: allergen.clone(),
            }),
            REASON_ALLERGY.to_string(),
        );
    }

    let partners = record.map(|r| r.interacts_with.as_slice()).unwrap_or_default();
    if let Some(partner) = partners.iter().find(|partner| {
        let partner = partner.to_lowercase();
        current.iter().any(|(_, lower)| lower.contains(partner.as_str()))
    }) {
        return verdict(
            Some(SafetyConcern::Interaction {
                partner: partner.clone(),
            }),
            format!("Interacts with {partner}"),
        );
    }

    verdict(None, REASON_SAFE.to_string())
}

/// (original, lowercased) pairs with blank entries removed.
fn lowercase_nonblank<S: AsRef<str>>(items: &[S]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(|s| (s.to_string(), s.to_lowercase()))
        .collect()
}

pub fn calculate_safety_stats(verdicts: &[SafetyVerdict]) -> SafetyStats {
    let safe = verdicts.iter().filter(|v| v.safe).count();
    SafetyStats {
        safe,
        flagged: verdicts.len() - safe,
        total: verdicts.len(),
    }
}
