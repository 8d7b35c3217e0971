//! Text acquisition for uploaded documents.
//!
//! Only plain text is read. PDF, Word and image files are recognized and
//! reported as `ExtractionError::UnsupportedFormat` so callers can tell the
//! user to convert the document, rather than scanning binary noise.

use super::ExtractionError;
use crate::pipeline::import::{FileCategory, FormatDetection};

pub fn extract_text(bytes: &[u8], format: &FormatDetection) -> Result<String, ExtractionError> {
    match format.category {
        FileCategory::PlainText => {
            let text = std::str::from_utf8(bytes)
                .map_err(|e| ExtractionError::EncodingError(e.to_string()))?;
            // Strip a UTF-8 byte order mark if an editor added one.
            Ok(text.trim_start_matches('\u{feff}').to_string())
        }
        FileCategory::Pdf
        | FileCategory::WordDocument
        | FileCategory::Image
        | FileCategory::Unsupported => Err(ExtractionError::UnsupportedFormat {
            category: format.category,
            mime_type: format.mime_type.clone(),
        }),
    }
}
