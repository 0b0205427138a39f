//! Response payload parsing
//!
//! Decodes the UQL response envelope and assembles typed data sets by
//! driving each model's field list against the deserializer registry.
//! Cell decode failures are localized: the cell is stored as null, a
//! diagnostic is recorded on the response, and row assembly continues.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::value::RawValue;
use tracing::{debug, warn};

use crate::deserialize::deserializer_for;
use crate::error::UqlError;
use crate::models::{DataSet, EngineError, Model, ModelField, Value};
use crate::response::{CellDiagnostic, Response};

/// Top-level response envelope as it arrives from the query engine
#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<DataSection>,
    #[serde(default)]
    errors: Vec<EngineError>,
}

#[derive(Deserialize)]
struct DataSection {
    /// Primary model; also the fallback for bodies that omit their own
    #[serde(default)]
    model: Option<Model>,
    #[serde(default, rename = "dataSets")]
    data_sets: HashMap<String, DataSetBody>,
}

#[derive(Deserialize)]
struct DataSetBody {
    #[serde(default)]
    model: Option<Model>,
    #[serde(default)]
    metadata: HashMap<String, serde_json::Value>,
    /// Raw cell matrix; cells stay undecoded until a field drives them
    #[serde(default)]
    values: Vec<Vec<Box<RawValue>>>,
}

/// Parse a raw UQL response payload into a [`Response`].
///
/// Only a payload that fails to decode as the envelope at all is fatal;
/// engine errors and cell decode failures are carried as data.
pub fn parse_response(payload: &str) -> Result<Response, UqlError> {
    let envelope: Envelope =
        serde_json::from_str(payload).map_err(|e| UqlError::MalformedPayload(e.to_string()))?;

    let mut diagnostics = Vec::new();
    let mut data_sets = HashMap::new();
    let mut primary_model = None;

    if let Some(data) = envelope.data {
        primary_model = data.model;
        for (name, body) in data.data_sets {
            let model = body
                .model
                .or_else(|| primary_model.clone())
                .unwrap_or_default();
            let data_set =
                assemble_data_set(&name, model, body.metadata, body.values, &mut diagnostics);
            data_sets.insert(name, data_set);
        }
    }

    debug!(
        "parsed UQL response: {} data set(s), {} engine error(s), {} cell diagnostic(s)",
        data_sets.len(),
        envelope.errors.len(),
        diagnostics.len()
    );

    Ok(Response::new(
        primary_model,
        data_sets,
        envelope.errors,
        diagnostics,
    ))
}

/// Build one data set by decoding its raw cell matrix in model field order.
/// The result is always rectangular: short rows are padded with nulls,
/// extra cells are dropped, and both cases leave a diagnostic behind.
fn assemble_data_set(
    name: &str,
    model: Model,
    metadata: HashMap<String, serde_json::Value>,
    values: Vec<Vec<Box<RawValue>>>,
    diagnostics: &mut Vec<CellDiagnostic>,
) -> DataSet {
    let field_count = model.fields.len();
    let mut rows = Vec::with_capacity(values.len());

    for (row_index, raw_row) in values.into_iter().enumerate() {
        if raw_row.len() != field_count {
            warn!(
                "data set {} row {} has {} cell(s), model has {} field(s)",
                name,
                row_index,
                raw_row.len(),
                field_count
            );
            diagnostics.push(CellDiagnostic {
                dataset: name.to_string(),
                row: row_index,
                column: raw_row.len().min(field_count),
                alias: String::new(),
                message: format!(
                    "row has {} cell(s) but the model describes {} field(s)",
                    raw_row.len(),
                    field_count
                ),
            });
        }

        let mut row = Vec::with_capacity(field_count);
        for (column, field) in model.fields.iter().enumerate() {
            let Some(raw) = raw_row.get(column) else {
                row.push(Value::Null);
                continue;
            };
            match decode_cell(field, raw) {
                Ok(value) => row.push(value),
                Err(error) => {
                    warn!(
                        "failed to decode cell {}[{}][{}] ({}): {}",
                        name, row_index, column, field.alias, error
                    );
                    diagnostics.push(CellDiagnostic {
                        dataset: name.to_string(),
                        row: row_index,
                        column,
                        alias: field.alias.clone(),
                        message: error.to_string(),
                    });
                    row.push(Value::Null);
                }
            }
        }
        rows.push(row);
    }

    DataSet::new(name.to_string(), model, metadata, rows)
}

fn decode_cell(field: &ModelField, raw: &RawValue) -> Result<Value, UqlError> {
    // JSON null is a legitimate absent value for any field type.
    if raw.get() == "null" {
        return Ok(Value::Null);
    }
    // Reference fields carry locator objects whatever their type tag says.
    let tag = if field.is_reference() {
        "reference"
    } else {
        field.field_type.as_str()
    };
    let deserialize = deserializer_for(tag).ok_or_else(|| UqlError::UnknownType(tag.to_string()))?;
    deserialize(raw)
}
