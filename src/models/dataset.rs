//! Data sets and cross-data-set references

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::model::Model;
use super::value::Value;

/// Reference to another data set within the same response.
///
/// This is a name-based lookup key, never a structural pointer: data sets
/// may reference each other mutually, and name lookup through the owning
/// [`Response`](crate::Response) keeps that graph free of ownership cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSetRef {
    /// JSON path of the referencing cell within the source payload
    #[serde(rename = "$jsonPath")]
    pub json_path: String,
    /// Name of the target data set
    #[serde(rename = "$dataset")]
    pub dataset: String,
}

/// Result data of one named table: typed rows conforming to a [`Model`],
/// plus free-form metadata the SDK passes through uninterpreted.
///
/// Rows are rectangular: every row holds exactly one cell per model field,
/// in model field order. Data sets are built by response parsing and are
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    name: String,
    model: Model,
    metadata: HashMap<String, serde_json::Value>,
    values: Vec<Vec<Value>>,
}

impl DataSet {
    pub(crate) fn new(
        name: String,
        model: Model,
        metadata: HashMap<String, serde_json::Value>,
        values: Vec<Vec<Value>>,
    ) -> Self {
        Self {
            name,
            model,
            metadata,
            values,
        }
    }

    /// Name under which this data set is registered in its response
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The model this data set's rows conform to
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Auxiliary annotations from the payload, not interpreted by the SDK
    pub fn metadata(&self) -> &HashMap<String, serde_json::Value> {
        &self.metadata
    }

    /// All rows, in payload order
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.values
    }

    pub fn row(&self, index: usize) -> Option<&[Value]> {
        self.values.get(index).map(Vec::as_slice)
    }

    /// Cell at (row, column position)
    pub fn cell(&self, row: usize, column: usize) -> Option<&Value> {
        self.values.get(row).and_then(|cells| cells.get(column))
    }

    /// Cell at (row, field alias); first matching alias wins
    pub fn cell_by_alias(&self, row: usize, alias: &str) -> Option<&Value> {
        let column = self.model.field_index(alias)?;
        self.cell(row, column)
    }

    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
