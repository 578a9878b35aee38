//! # codebook
//!
//! Creates blank "codebook" copies of Jupyter notebooks: for every notebook
//! in a directory, a `<stem>_cb.ipynb` twin is written in which code cells
//! have empty source, empty outputs, and a cleared execution count, while
//! markdown cells and all notebook metadata are preserved verbatim.
//!
//! The crate also ships the settings merge helper used by the companion chat
//! application (see [`config`]).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod notebook;
pub mod report;

pub use crate::cli::Cli;

/// The current version of codebook.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
