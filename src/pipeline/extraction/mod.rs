pub mod keywords;
pub mod orchestrator;
pub mod summary;
pub mod text_only;
pub mod types;
pub mod vitals;

pub use keywords::*;
pub use orchestrator::*;
pub use summary::*;
pub use text_only::*;
pub use types::*;
pub use vitals::*;

use thiserror::Error;

use crate::pipeline::import::{FileCategory, ImportError};

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text encoding error: {0}")]
    EncodingError(String),

    #[error("Text extraction is not supported for {category} files ({mime_type}); upload a plain-text (.txt) copy")]
    UnsupportedFormat {
        category: FileCategory,
        mime_type: String,
    },

    #[error("Import error: {0}")]
    Import(#[from] ImportError),
}
