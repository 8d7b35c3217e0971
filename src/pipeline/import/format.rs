use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ImportError;

/// Broad file categories we recognize. Only `PlainText` can be analyzed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    PlainText,
    Pdf,
    WordDocument,
    Image,
    Unsupported,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "plain_text",
            Self::Pdf => "pdf",
            Self::WordDocument => "word_document",
            Self::Image => "image",
            Self::Unsupported => "unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Self::PlainText)
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of format detection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatDetection {
    pub mime_type: String,
    pub category: FileCategory,
    pub file_size_bytes: u64,
}

/// Bytes inspected for magic numbers and the text heuristic.
const SNIFF_LEN: usize = 4096;

/// Detect a file's format from its magic bytes, then its extension, then a
/// UTF-8 heuristic. Only `.txt`, `.text` or an extensionless name reaches
/// the heuristic, so textual formats like RTF or HTML stay unsupported.
pub fn detect_format(path: &Path) -> Result<FormatDetection, ImportError> {
    let file_size = std::fs::metadata(path)?.len();

    let mut head = Vec::with_capacity(SNIFF_LEN);
    std::fs::File::open(path)?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut head)?;

    let name = path.file_name().and_then(|n| n.to_str());
    let mut detection = detect_format_bytes(&head, name);
    detection.file_size_bytes = file_size;
    Ok(detection)
}

/// Same as [`detect_format`] for an in-memory upload.
pub fn detect_format_bytes(bytes: &[u8], file_name: Option<&str>) -> FormatDetection {
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];

    let (mime_type, category) = match head {
        // PDF: starts with %PDF
        [0x25, 0x50, 0x44, 0x46, ..] => ("application/pdf".to_string(), FileCategory::Pdf),
        // OLE compound document (legacy .doc)
        [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, ..] => {
            ("application/msword".to_string(), FileCategory::WordDocument)
        }
        // Zip container: DOCX when the name says so
        [0x50, 0x4B, 0x03, 0x04, ..] if has_extension(file_name, "docx") => (
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document".to_string(),
            FileCategory::WordDocument,
        ),
        // JPEG: starts with FF D8 FF
        [0xFF, 0xD8, 0xFF, ..] => ("image/jpeg".to_string(), FileCategory::Image),
        // PNG: starts with 89 50 4E 47
        [0x89, 0x50, 0x4E, 0x47, ..] => ("image/png".to_string(), FileCategory::Image),
        _ => match classify_extension(file_name) {
            Some(by_extension) => by_extension,
            None if is_likely_text(head) => ("text/plain".to_string(), FileCategory::PlainText),
            None => (guess_mime(file_name), FileCategory::Unsupported),
        },
    };

    FormatDetection {
        mime_type,
        category,
        file_size_bytes: bytes.len() as u64,
    }
}

fn has_extension(file_name: Option<&str>, ext: &str) -> bool {
    file_name
        .and_then(|n| Path::new(n).extension())
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Category implied by a non-text extension. `None` for `.txt`, `.text`
/// and names without an extension.
fn classify_extension(file_name: Option<&str>) -> Option<(String, FileCategory)> {
    let ext = file_name
        .and_then(|n| Path::new(n).extension())
        .and_then(|e| e.to_str())?
        .to_ascii_lowercase();

    let category = match ext.as_str() {
        "txt" | "text" => return None,
        "doc" | "docx" | "rtf" | "odt" => FileCategory::WordDocument,
        "pdf" => FileCategory::Pdf,
        _ if guess_mime(file_name).starts_with("image/") => FileCategory::Image,
        _ => FileCategory::Unsupported,
    };
    Some((guess_mime(file_name), category))
}

fn guess_mime(file_name: Option<&str>) -> String {
    file_name
        .and_then(|n| mime_guess::from_path(n).first_raw())
        .unwrap_or("application/octet-stream")
        .to_string()
}

/// Valid UTF-8 (a multi-byte char cut at the sniff boundary is tolerated)
/// with at least 80% printable characters. Empty input counts as text.
fn is_likely_text(head: &[u8]) -> bool {
    let text = match std::str::from_utf8(head) {
        Ok(t) => t,
        Err(e) if e.error_len().is_none() => {
            // Incomplete sequence at the end only.
            match std::str::from_utf8(&head[..e.valid_up_to()]) {
                Ok(t) => t,
                Err(_) => return false,
            }
        }
        Err(_) => return false,
    };

    if text.is_empty() {
        return true;
    }

    let total = text.chars().count();
    let printable = text
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .count();
    printable as f64 / total as f64 > 0.80
}

/// Sanitize a filename: strip path components, limit length
pub fn sanitize_filename(original: &str) -> String {
    let name = Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document");

    let clean: String = name
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | '\0'))
        .take(255)
        .collect();

    if clean.is_empty() {
        "document".to_string()
    } else {
        clean
    }
}
