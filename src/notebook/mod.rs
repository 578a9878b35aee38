//! Notebook pipeline: locate candidate notebooks, blank their code cells,
//! and write the codebook copies.

use thiserror::Error;

pub mod doc;
pub mod locator;
pub mod transform;

pub use doc::{Cell, Notebook};
pub use locator::find_candidates;
pub use transform::{codebook_path, process_directory, process_notebook, Outcome};

/// Errors raised by the notebook pipeline.
///
/// Directory-level errors abort the run before any file is touched; the
/// file-level variants are caught per candidate and recorded as
/// [`Outcome::Failed`] so sibling files keep processing.
#[derive(Error, Debug)]
pub enum NotebookError {
    /// Supplied root path is not a directory.
    #[error("'{0}' is not a valid directory")]
    NotADirectory(String),

    /// The candidate directory could not be listed.
    #[error("failed to list directory '{name}'")]
    ListDirectory {
        /// Directory that failed to list.
        name: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The notebook file-name pattern failed to compile.
    #[error("invalid notebook file pattern")]
    Pattern(#[from] globset::Error),

    /// A candidate file could not be read.
    ///
    /// The reporter already names the file in its status line, so the
    /// file-level variants carry only the cause.
    #[error("failed to read notebook: {0}")]
    Read(std::io::Error),

    /// A candidate file is not a well-formed notebook document.
    #[error("failed to parse notebook: {0}")]
    Malformed(serde_json::Error),

    /// The transformed document could not be serialized.
    #[error("failed to serialize notebook: {0}")]
    Serialize(serde_json::Error),

    /// The codebook copy could not be written.
    #[error("failed to write codebook copy: {0}")]
    Write(std::io::Error),
}
