//! Parsed UQL response aggregate

use std::collections::HashMap;

use crate::error::UqlError;
use crate::models::{DataSet, DataSetRef, EngineError, Model};

/// Reserved name under which the main data set of a response is registered
pub const MAIN_DATASET: &str = "d:main";

/// Record of one cell that could not be decoded per its declared type.
///
/// Decode failures are localized: the offending cell is stored as
/// [`Value::Null`](crate::Value::Null) and the rest of the data set keeps
/// populating. The diagnostic is what distinguishes a failed cell from a
/// legitimate null in the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellDiagnostic {
    /// Name of the data set the cell belongs to
    pub dataset: String,
    pub row: usize,
    pub column: usize,
    /// Alias of the field at that column; empty for row-shape mismatches
    pub alias: String,
    pub message: String,
}

/// A parsed UQL response body.
///
/// The response owns all data sets in a flat, name-keyed collection;
/// reference cells resolve through [`Response::data_set`] by name. Built
/// once by [`Response::from_json`] and immutable afterwards, so it can be
/// read concurrently without synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    model: Option<Model>,
    data_sets: HashMap<String, DataSet>,
    errors: Vec<EngineError>,
    diagnostics: Vec<CellDiagnostic>,
}

impl Response {
    /// Parse a raw response payload.
    ///
    /// A payload that is not valid JSON of the expected envelope shape fails
    /// as a whole; engine errors and per-cell decode failures do not, and
    /// surface through [`Response::errors`] and [`Response::diagnostics`]
    /// instead.
    pub fn from_json(payload: &str) -> Result<Self, UqlError> {
        crate::parse::parse_response(payload)
    }

    pub(crate) fn new(
        model: Option<Model>,
        data_sets: HashMap<String, DataSet>,
        errors: Vec<EngineError>,
        diagnostics: Vec<CellDiagnostic>,
    ) -> Self {
        Self {
            model,
            data_sets,
            errors,
            diagnostics,
        }
    }

    /// The primary model; absent for fully failed queries
    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    /// The main data set, if the payload carried one.
    ///
    /// Absence means "no primary result", not an error: a failed query may
    /// legitimately return no `d:main`.
    pub fn main(&self) -> Option<&DataSet> {
        self.data_sets.get(MAIN_DATASET)
    }

    /// Resolve a reference cell to its target data set.
    ///
    /// A missing target indicates a malformed payload or a stale reference
    /// and is a lookup failure at the point of dereference.
    pub fn data_set(&self, reference: &DataSetRef) -> Result<&DataSet, UqlError> {
        self.data_sets
            .get(&reference.dataset)
            .ok_or_else(|| UqlError::DataSetNotFound(reference.dataset.clone()))
    }

    pub fn data_set_by_name(&self, name: &str) -> Option<&DataSet> {
        self.data_sets.get(name)
    }

    /// Names of all data sets in this response, in no particular order
    pub fn data_set_names(&self) -> impl Iterator<Item = &str> {
        self.data_sets.keys().map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Engine-reported errors, in payload order
    pub fn errors(&self) -> &[EngineError] {
        &self.errors
    }

    /// Engine errors folded into one error value, if there are any
    pub fn combined_error(&self) -> Option<UqlError> {
        if self.errors.is_empty() {
            None
        } else {
            Some(UqlError::Engine(EngineError::aggregate(&self.errors)))
        }
    }

    /// Cell-level decode failures recorded while parsing
    pub fn diagnostics(&self) -> &[CellDiagnostic] {
        &self.diagnostics
    }
}
