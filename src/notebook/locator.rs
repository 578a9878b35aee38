//! Candidate discovery: which notebooks in a directory still need a
//! codebook copy.

use std::fs;
use std::path::{Path, PathBuf};

use globset::Glob;
use tracing::debug;

use super::NotebookError;

/// File-name pattern for notebook candidates.
const NOTEBOOK_GLOB: &str = "*.ipynb";

/// Stem suffix marking a file as an already-generated codebook copy.
pub const CODEBOOK_SUFFIX: &str = "_cb";

/// Lists the notebooks in `dir` that are eligible for processing: direct
/// children matching `*.ipynb` whose stem does not already end in `_cb`.
///
/// The result is sorted by file name so runs over the same directory are
/// deterministic. Subdirectories are never entered.
pub fn find_candidates(dir: &Path) -> Result<Vec<PathBuf>, NotebookError> {
    if !dir.is_dir() {
        return Err(NotebookError::NotADirectory(dir.display().to_string()));
    }

    let matcher = Glob::new(NOTEBOOK_GLOB)?.compile_matcher();

    let entries = fs::read_dir(dir).map_err(|source| NotebookError::ListDirectory {
        name: dir.display().to_string(),
        source,
    })?;

    let mut candidates: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && matcher.is_match(path.file_name().unwrap_or_default()))
        .filter(|path| !stem_has_codebook_suffix(path))
        .collect();

    candidates.sort();

    debug!(
        "found {} candidate notebook(s) in {}",
        candidates.len(),
        dir.display()
    );

    Ok(candidates)
}

/// Returns true when the file stem already carries the codebook marker.
fn stem_has_codebook_suffix(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(CODEBOOK_SUFFIX))
}
