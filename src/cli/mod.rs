//! CLI interface for codebook.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::notebook::{self, NotebookError};

/// codebook: create blank codebook copies of Jupyter notebooks.
#[derive(Parser)]
#[command(name = "codebook")]
#[command(about = "Create codebook versions of Jupyter notebooks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing notebooks (default: current directory).
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,

    /// Show what would be done without actually doing it.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Executes one processing run over the configured directory.
    ///
    /// An invalid directory is the only fatal error; it propagates to main,
    /// which prints it and exits with status 1. Per-file problems are
    /// reported in the summary and still exit 0.
    pub fn execute(self) -> Result<()> {
        if !self.directory.is_dir() {
            return Err(
                NotebookError::NotADirectory(self.directory.display().to_string()).into(),
            );
        }

        println!("Processing notebooks in: {}", self.directory.display());
        if self.dry_run {
            println!("(DRY RUN - no changes will be made)");
        }

        debug!("starting run over {}", self.directory.display());
        let summary = notebook::process_directory(&self.directory, self.dry_run)?;

        print!("{summary}");
        Ok(())
    }
}
