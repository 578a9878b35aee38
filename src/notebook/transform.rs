//! Per-notebook transformation: read, blank, and write the codebook copy.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::doc::Notebook;
use super::locator::{find_candidates, CODEBOOK_SUFFIX};
use super::NotebookError;
use crate::report::RunSummary;

/// Result of handling one candidate notebook.
///
/// File names (not full paths) are carried for reporting; the run summary
/// prints them as status lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Codebook copy was written.
    Created {
        /// Source notebook file name.
        source: String,
        /// Newly written codebook file name.
        target: String,
    },
    /// Codebook copy already existed; nothing was touched.
    Skipped {
        /// Source notebook file name.
        source: String,
        /// Pre-existing codebook file name.
        target: String,
    },
    /// Dry run: a codebook copy would have been written.
    WouldCreate {
        /// Source notebook file name.
        source: String,
        /// Codebook file name that would be written.
        target: String,
    },
    /// Dry run: the codebook copy already exists, so the file would be
    /// skipped.
    WouldSkip {
        /// Source notebook file name.
        source: String,
        /// Pre-existing codebook file name.
        target: String,
    },
    /// The file could not be processed; the run continues with the next one.
    Failed {
        /// Source notebook file name.
        source: String,
        /// Human-readable error detail.
        message: String,
    },
}

impl Outcome {
    /// Source notebook file name this outcome belongs to.
    pub fn source(&self) -> &str {
        match self {
            Self::Created { source, .. }
            | Self::Skipped { source, .. }
            | Self::WouldCreate { source, .. }
            | Self::WouldSkip { source, .. }
            | Self::Failed { source, .. } => source,
        }
    }
}

/// Computes the codebook path for a source notebook by inserting `_cb`
/// before the extension: `lesson1.ipynb` becomes `lesson1_cb.ipynb`.
pub fn codebook_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = source
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{stem}{CODEBOOK_SUFFIX}.{extension}"))
}

/// Handles a single candidate notebook.
///
/// A pre-existing codebook copy is never overwritten. In dry-run mode no
/// filesystem write happens at all; the outcome only reports what a real
/// run would do. File-level errors are captured in the returned outcome
/// rather than propagated.
pub fn process_notebook(source: &Path, dry_run: bool) -> Outcome {
    let target = codebook_path(source);
    let source_name = file_name(source);
    let target_name = file_name(&target);

    if target.exists() {
        return if dry_run {
            Outcome::WouldSkip {
                source: source_name,
                target: target_name,
            }
        } else {
            Outcome::Skipped {
                source: source_name,
                target: target_name,
            }
        };
    }

    if dry_run {
        return Outcome::WouldCreate {
            source: source_name,
            target: target_name,
        };
    }

    match write_codebook(source, &target) {
        Ok(()) => Outcome::Created {
            source: source_name,
            target: target_name,
        },
        Err(e) => Outcome::Failed {
            source: source_name,
            message: e.to_string(),
        },
    }
}

/// Processes every candidate notebook in `dir` and accumulates the
/// per-file outcomes.
///
/// Only directory-level problems (missing directory, unreadable listing)
/// return an error; anything that goes wrong with an individual file is
/// recorded in the summary and does not affect its siblings.
pub fn process_directory(dir: &Path, dry_run: bool) -> Result<RunSummary, NotebookError> {
    let candidates = find_candidates(dir)?;

    let mut summary = RunSummary::default();
    for path in candidates {
        summary.record(process_notebook(&path, dry_run));
    }

    Ok(summary)
}

/// Reads `source`, blanks its code cells, and writes the result to `target`.
///
/// The output document is fully serialized in memory before the single
/// write call, so a failure never leaves a partial file behind.
fn write_codebook(source: &Path, target: &Path) -> Result<(), NotebookError> {
    let text = fs::read_to_string(source).map_err(NotebookError::Read)?;

    let mut notebook = Notebook::from_json(&text).map_err(NotebookError::Malformed)?;

    notebook.blank_code_cells();

    let buf = notebook.to_json_vec().map_err(NotebookError::Serialize)?;

    debug!("writing {}", target.display());
    fs::write(target, buf).map_err(NotebookError::Write)?;

    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
