//! Schema model describing the shape of one data set's rows

use serde::{Deserialize, Serialize};

/// Field form marking a reference column. Cells of such a column hold
/// [`DataSetRef`](super::DataSetRef) values pointing at another data set
/// instead of literal scalars.
pub const REFERENCE_FORM: &str = "reference";

/// Schema of one data set: an ordered field list, possibly nested.
///
/// Field order is significant; it defines the column position for every row
/// of any data set built from this model. No validation happens at
/// construction: a model with zero fields or duplicate aliases is
/// representable and consumers must tolerate it.
///
/// # Example
///
/// ```rust
/// use uql_response_sdk::Model;
///
/// let model: Model = serde_json::from_str(
///     r#"{"name": "m:main", "fields": [{"alias": "count", "type": "long"}]}"#,
/// ).unwrap();
/// assert_eq!(model.field_index("count"), Some(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Model name; empty for anonymous/root models
    #[serde(default)]
    pub name: String,
    /// Ordered column descriptions
    #[serde(default)]
    pub fields: Vec<ModelField>,
}

impl Model {
    /// Look up a field by its alias.
    ///
    /// Alias uniqueness is not enforced upstream; with duplicates the first
    /// match wins.
    pub fn field(&self, alias: &str) -> Option<&ModelField> {
        self.fields.iter().find(|field| field.alias == alias)
    }

    /// Column position of the field with the given alias
    pub fn field_index(&self, alias: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.alias == alias)
    }
}

/// Description of one column of one data set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelField {
    /// Display name, unique within the field list by convention
    pub alias: String,
    /// Type tag driving value deserialization (e.g. "long", "timestamp").
    /// The tag set is open; unknown tags surface as cell diagnostics.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Distinguishes plain scalar fields from reference fields
    #[serde(default)]
    pub form: String,
    /// Optional semantic annotation; advisory only, never needed for parsing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hints: Option<Hint>,
    /// Nested model, present when values are structured sub-records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Model>,
}

impl ModelField {
    /// True when this field's cells are references to another data set
    pub fn is_reference(&self) -> bool {
        self.form == REFERENCE_FORM
    }
}

/// Additional information about a field: the MELT kind, field and type of
/// the telemetry concept the column represents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub field: String,
    #[serde(rename = "type", default)]
    pub hint_type: String,
}
