use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use codebook::Cli;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Test setup that creates a temporary directory of notebook files
struct TestDirectory {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TestDirectory {
    fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().to_path_buf();
        Ok(TestDirectory {
            _temp_dir: temp_dir,
            path,
        })
    }

    fn add_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let file_path = self.path.join(name);
        fs::write(&file_path, contents)?;
        Ok(file_path)
    }

    fn add_notebook(&self, name: &str) -> Result<PathBuf> {
        self.add_file(name, &notebook_json())
    }

    /// Snapshot of every file in the directory and its contents.
    fn contents(&self) -> Result<BTreeMap<String, Vec<u8>>> {
        let mut files = BTreeMap::new();
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            files.insert(
                entry.file_name().to_string_lossy().into_owned(),
                fs::read(entry.path())?,
            );
        }
        Ok(files)
    }

    fn run(&self, dry_run: bool) -> Result<()> {
        let cli = Cli {
            directory: self.path.clone(),
            dry_run,
        };
        cli.execute()
    }
}

fn notebook_json() -> String {
    json!({
        "cells": [
            {
                "cell_type": "code",
                "execution_count": 3,
                "metadata": {},
                "outputs": [
                    {"name": "stdout", "output_type": "stream", "text": ["1\n"]}
                ],
                "source": ["print(1)"]
            },
            {
                "cell_type": "code",
                "execution_count": 4,
                "metadata": {},
                "outputs": [],
                "source": ["x = 2\n", "x"]
            },
            {"cell_type": "markdown", "metadata": {}, "source": ["# Résumé"]}
        ],
        "metadata": {
            "kernelspec": {"display_name": "Python 3", "language": "python", "name": "python3"}
        },
        "nbformat": 4,
        "nbformat_minor": 5
    })
    .to_string()
}

fn read_json(path: &Path) -> Result<Value> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

#[test]
fn test_run_produces_blanked_codebook_copies() -> Result<()> {
    let dir = TestDirectory::new()?;
    dir.add_notebook("lesson2.ipynb")?;
    let original = dir.contents()?["lesson2.ipynb"].clone();

    dir.run(false)?;

    let copy = read_json(&dir.path.join("lesson2_cb.ipynb"))?;
    let cells = copy["cells"].as_array().expect("cells list");
    assert_eq!(cells.len(), 3);

    for code_cell in &cells[..2] {
        assert_eq!(code_cell["cell_type"], json!("code"));
        assert_eq!(code_cell["source"], json!([]));
        assert_eq!(code_cell["outputs"], json!([]));
        assert_eq!(code_cell["execution_count"], Value::Null);
    }

    // Markdown cell and document metadata are untouched
    assert_eq!(cells[2]["source"], json!(["# Résumé"]));
    assert_eq!(copy["nbformat"], json!(4));
    assert_eq!(
        copy["metadata"]["kernelspec"]["name"],
        json!("python3")
    );

    // The source notebook itself is never mutated
    assert_eq!(dir.contents()?["lesson2.ipynb"], original);
    Ok(())
}

#[test]
fn test_existing_codebook_copy_is_never_overwritten() -> Result<()> {
    let dir = TestDirectory::new()?;
    dir.add_notebook("lesson1.ipynb")?;
    dir.add_file("lesson1_cb.ipynb", "hand-edited teaching copy")?;
    let before = dir.contents()?;

    dir.run(false)?;

    // Zero new files, and the existing copy is byte-identical
    assert_eq!(dir.contents()?, before);
    Ok(())
}

#[test]
fn test_dry_run_changes_nothing_on_disk() -> Result<()> {
    let dir = TestDirectory::new()?;
    dir.add_notebook("lesson1.ipynb")?;
    dir.add_notebook("lesson2.ipynb")?;
    dir.add_file("lesson1_cb.ipynb", "pre-existing")?;
    let before = dir.contents()?;

    dir.run(true)?;

    assert_eq!(dir.contents()?, before);
    Ok(())
}

#[test]
fn test_malformed_notebook_is_isolated_from_siblings() -> Result<()> {
    let dir = TestDirectory::new()?;
    dir.add_notebook("a.ipynb")?;
    dir.add_file("broken.ipynb", "{definitely not json")?;
    dir.add_notebook("c.ipynb")?;

    // Per-file failures never fail the run
    dir.run(false)?;

    assert!(dir.path.join("a_cb.ipynb").exists());
    assert!(dir.path.join("c_cb.ipynb").exists());
    assert!(!dir.path.join("broken_cb.ipynb").exists());
    Ok(())
}

#[test]
fn test_second_run_skips_everything() -> Result<()> {
    let dir = TestDirectory::new()?;
    dir.add_notebook("lesson1.ipynb")?;
    dir.add_notebook("lesson2.ipynb")?;

    dir.run(false)?;
    let after_first = dir.contents()?;
    assert!(after_first.contains_key("lesson1_cb.ipynb"));
    assert!(after_first.contains_key("lesson2_cb.ipynb"));

    dir.run(false)?;

    assert_eq!(dir.contents()?, after_first);
    Ok(())
}

#[test]
fn test_invalid_directory_is_fatal() -> Result<()> {
    let dir = TestDirectory::new()?;
    let missing = dir.path.join("no-such-dir");

    let cli = Cli {
        directory: missing.clone(),
        dry_run: false,
    };
    let err = cli.execute().expect_err("missing directory must fail");

    assert!(err
        .to_string()
        .contains(&format!("'{}' is not a valid directory", missing.display())));
    Ok(())
}
