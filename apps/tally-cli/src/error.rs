//! # App Error Type
//!
//! Everything that can stop the `tally` binary.
//!
//! ```text
//! CoreError (invalid line) ──┐
//! io::Error (basket file) ───┼──► AppError ──► main: log + stderr + exit 1
//! serde_json::Error ─────────┘
//! ```

use std::path::PathBuf;

use tally_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The basket contains a line the calculator refuses.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The basket file could not be opened or read.
    #[error("Failed to read basket {}: {source}", .path.display())]
    BasketRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The basket file is not a JSON array of line items.
    #[error("Invalid basket JSON: {0}")]
    BasketFormat(#[from] serde_json::Error),

    /// Writing the receipt to stdout failed.
    #[error("Failed to write receipt: {0}")]
    Output(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
