pub mod format;

pub use format::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File too large: {size_bytes} bytes exceeds {max_bytes} byte limit")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },
}

/// Reject inputs above the configured upload limit.
pub fn check_size(size_bytes: u64, max_bytes: u64) -> Result<(), ImportError> {
    if size_bytes > max_bytes {
        return Err(ImportError::FileTooLarge {
            size_bytes,
            max_bytes,
        });
    }
    Ok(())
}
