//! Document analysis: acquire text, scan vocabularies, pull vitals, summarize.

use std::path::Path;

use super::keywords::identify_medical_keywords;
use super::summary::generate_summary;
use super::text_only::extract_text;
use super::types::{DocumentAnalysis, DocumentSource};
use super::vitals::extract_vital_signs;
use super::ExtractionError;
use crate::knowledge::KnowledgeBase;
use crate::models::{ExtractedKeyword, KeywordCategory};
use crate::pipeline::import::{
    check_size, detect_format, detect_format_bytes, sanitize_filename, FormatDetection,
};

/// Analyze text that is already in hand.
pub fn analyze_text(kb: &KnowledgeBase, text: &str) -> DocumentAnalysis {
    let keywords = identify_medical_keywords(kb.vocabulary(), text);

    let identified_symptoms = terms_in(&keywords, KeywordCategory::Symptom);
    let identified_medications = terms_in(&keywords, KeywordCategory::Medication);
    let identified_diseases = terms_in(&keywords, KeywordCategory::Disease);
    let test_results = terms_in(&keywords, KeywordCategory::Test);
    let vital_signs = extract_vital_signs(text);

    let summary = generate_summary(
        &identified_symptoms,
        &identified_diseases,
        &identified_medications,
        &test_results,
        &vital_signs,
    );

    tracing::debug!(
        keywords = keywords.len(),
        symptoms = identified_symptoms.len(),
        vitals = vital_signs.len(),
        "Text analyzed"
    );

    DocumentAnalysis {
        keywords,
        identified_symptoms,
        identified_medications,
        identified_diseases,
        test_results,
        vital_signs,
        summary,
        source: None,
    }
}

/// Analyze an uploaded file held in memory.
pub fn analyze_upload(
    kb: &KnowledgeBase,
    file_name: &str,
    bytes: &[u8],
    max_bytes: u64,
) -> Result<DocumentAnalysis, ExtractionError> {
    check_size(bytes.len() as u64, max_bytes)?;

    let file_name = sanitize_filename(file_name);
    let format = detect_format_bytes(bytes, Some(&file_name));

    tracing::info!(
        file_name = %file_name,
        category = format.category.as_str(),
        size = bytes.len(),
        "Analyzing uploaded document"
    );

    let text = extract_text(bytes, &format)?;
    Ok(with_source(analyze_text(kb, &text), file_name, format, text))
}

/// Analyze a document on disk.
pub fn analyze_document(
    kb: &KnowledgeBase,
    path: &Path,
    max_bytes: u64,
) -> Result<DocumentAnalysis, ExtractionError> {
    let format = detect_format(path)?;
    check_size(format.file_size_bytes, max_bytes)?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(sanitize_filename)
        .unwrap_or_else(|| "document".to_string());

    tracing::info!(
        path = %path.display(),
        category = format.category.as_str(),
        "Analyzing document"
    );

    if !format.category.is_supported() {
        return Err(ExtractionError::UnsupportedFormat {
            category: format.category,
            mime_type: format.mime_type,
        });
    }

    let bytes = std::fs::read(path)?;
    let text = extract_text(&bytes, &format)?;
    Ok(with_source(analyze_text(kb, &text), file_name, format, text))
}

fn with_source(
    mut analysis: DocumentAnalysis,
    file_name: String,
    format: FormatDetection,
    extracted_text: String,
) -> DocumentAnalysis {
    analysis.source = Some(DocumentSource {
        file_name,
        format,
        extracted_text,
    });
    analysis
}

fn terms_in(keywords: &[ExtractedKeyword], category: KeywordCategory) -> Vec<String> {
    keywords
        .iter()
        .filter(|k| k.category == category)
        .map(|k| k.keyword.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VitalKind;
    use crate::pipeline::import::{FileCategory, ImportError};

    const MAX: u64 = 1024 * 1024;

    fn kb() -> &'static KnowledgeBase {
        KnowledgeBase::builtin()
    }

    #[test]
    fn analyze_short_note() {
        let analysis = analyze_text(kb(), "Patient has fever and cough, BP 120/80");
        assert_eq!(analysis.identified_symptoms, vec!["fever", "cough"]);
        assert_eq!(analysis.vital_signs[&VitalKind::BloodPressure], "120/80");
        assert!(analysis.summary.starts_with("Identified 2 symptom(s): fever, cough"));
        assert!(analysis.summary.ends_with("Vital signs: blood pressure: 120/80"));
        assert!(analysis.source.is_none());
    }

    #[test]
    fn lists_partition_keywords_by_category() {
        let text = "Known asthma. On salbutamol and montelukast. Spirometry and CBC ordered. \
                    Wheezing at night. Temp 37.2";
        let analysis = analyze_text(kb(), text);
        assert_eq!(analysis.identified_diseases, vec!["asthma"]);
        assert_eq!(analysis.identified_medications, vec!["salbutamol", "montelukast"]);
        assert_eq!(analysis.test_results, vec!["cbc"]);
        assert_eq!(analysis.identified_symptoms, vec!["wheezing"]);
        assert_eq!(analysis.vital_signs[&VitalKind::Temperature], "37.2");
    }

    #[test]
    fn nothing_found_gives_fallback_summary() {
        let analysis = analyze_text(kb(), "Lorem ipsum dolor sit amet.");
        assert!(analysis.keywords.is_empty());
        assert!(analysis.vital_signs.is_empty());
        assert_eq!(analysis.summary, super::super::summary::EMPTY_SUMMARY);
    }

    #[test]
    fn analysis_is_idempotent() {
        let text = "Headache and nausea. Sumatriptan given. HR 90";
        assert_eq!(analyze_text(kb(), text), analyze_text(kb(), text));
    }

    #[test]
    fn upload_of_text_carries_source() {
        let analysis = analyze_upload(kb(), "../visit.txt", b"dizziness, BP 150/95", MAX).unwrap();
        let source = analysis.source.unwrap();
        assert_eq!(source.file_name, "visit.txt");
        assert_eq!(source.format.category, FileCategory::PlainText);
        assert_eq!(source.extracted_text, "dizziness, BP 150/95");
        assert_eq!(analysis.identified_symptoms, vec!["dizziness"]);
    }

    #[test]
    fn upload_of_pdf_is_unsupported() {
        let err = analyze_upload(kb(), "scan.pdf", b"%PDF-1.5 ...", MAX).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat { .. }));
    }

    #[test]
    fn textual_word_formats_are_not_scanned() {
        let rtf = br"{\rtf1\ansi Patient has fever and cough.\par }";
        for name in ["old.doc", "letter.rtf"] {
            let err = analyze_upload(kb(), name, rtf, MAX).unwrap_err();
            assert!(
                matches!(
                    err,
                    ExtractionError::UnsupportedFormat {
                        category: FileCategory::WordDocument,
                        ..
                    }
                ),
                "{name}"
            );
        }

        let err = analyze_upload(kb(), "note.html", b"<p>fever</p>", MAX).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::UnsupportedFormat {
                category: FileCategory::Unsupported,
                ..
            }
        ));
    }

    #[test]
    fn oversized_upload_rejected() {
        let err = analyze_upload(kb(), "big.txt", &[b'a'; 64], 32).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::Import(ImportError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn document_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labs.txt");
        std::fs::write(&path, "HbA1c 7.2%. Glucose: 160 mg/dL. Continue metformin.").unwrap();

        let analysis = analyze_document(kb(), &path, MAX).unwrap();
        assert_eq!(analysis.test_results, vec!["hba1c"]);
        assert_eq!(analysis.identified_medications, vec!["metformin"]);
        assert_eq!(analysis.vital_signs[&VitalKind::BloodGlucose], "160");
        assert_eq!(analysis.source.unwrap().file_name, "labs.txt");
    }

    #[test]
    fn docx_on_disk_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letter.docx");
        std::fs::write(&path, [0x50, 0x4B, 0x03, 0x04, 0x14, 0x00]).unwrap();

        let err = analyze_document(kb(), &path, MAX).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::UnsupportedFormat {
                category: FileCategory::WordDocument,
                ..
            }
        ));
    }

    #[test]
    fn missing_document_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = analyze_document(kb(), &dir.path().join("nope.txt"), MAX).unwrap_err();
        assert!(matches!(err, ExtractionError::Import(ImportError::Io(_))));
    }
}
