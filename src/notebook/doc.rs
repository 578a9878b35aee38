//! Notebook document model.
//!
//! Notebooks are JSON documents with a `cells` list plus document-level
//! metadata (`nbformat`, kernel info). Only the three code-cell fields the
//! blanking pass touches are interpreted; everything else is carried in
//! flattened maps so unknown cell types and future schema fields survive a
//! read/write round trip unchanged.

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

/// Cell type tag of the only cell kind the blanking pass modifies.
const CODE_CELL_TYPE: &str = "code";

/// A parsed notebook document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    /// Notebook cells, in document order.
    pub cells: Vec<Cell>,

    /// Document-level fields (`metadata`, `nbformat`, `nbformat_minor`, and
    /// anything a future schema adds), preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single notebook cell.
///
/// The `cell_type` tag is the only field given a concrete shape; the rest of
/// the cell (`source`, `outputs`, `metadata`, attachments, vendor
/// extensions) lives in [`Cell::fields`]. Keeping unmodeled keys in an
/// explicit map means unrecognized cell types pass through untouched rather
/// than being dropped or guessed at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell type tag: `code`, `markdown`, `raw`, or anything newer schemas
    /// define.
    pub cell_type: String,

    /// All remaining cell fields, preserved verbatim unless blanked.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Cell {
    /// Returns true for code cells.
    pub fn is_code(&self) -> bool {
        self.cell_type == CODE_CELL_TYPE
    }

    /// Blanks a code cell in place: empty `source`, empty `outputs`, and a
    /// null `execution_count` (only when the key is already present).
    ///
    /// Cells of any other type, including unknown future types, are left
    /// untouched.
    pub fn blank(&mut self) {
        if !self.is_code() {
            return;
        }

        self.fields
            .insert("source".to_string(), Value::Array(Vec::new()));
        self.fields
            .insert("outputs".to_string(), Value::Array(Vec::new()));
        if let Some(count) = self.fields.get_mut("execution_count") {
            *count = Value::Null;
        }
    }
}

impl Notebook {
    /// Parses a notebook from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Blanks every code cell, keeping cell count and order intact.
    pub fn blank_code_cells(&mut self) {
        for cell in &mut self.cells {
            cell.blank();
        }
    }

    /// Serializes the notebook with 1-space indentation.
    ///
    /// Non-ASCII characters are written literally rather than escaped, so
    /// markdown prose survives byte-for-byte.
    pub fn to_json_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b" ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }
}
