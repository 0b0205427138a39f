//! Typed cell values

use chrono::{DateTime, Utc};

use super::dataset::DataSetRef;

/// One decoded cell of a data set row.
///
/// Cells are heterogeneous but the variant set is closed: every supported
/// scalar tag maps to exactly one variant. `Null` covers JSON null cells;
/// cells whose decode failed are also stored as `Null` but additionally
/// produce a [`CellDiagnostic`](crate::response::CellDiagnostic) on the
/// owning response, so the two cases stay distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Long(i64),
    Double(f64),
    String(String),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
    Ref(DataSetRef),
    Null,
}

impl Value {
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Timestamp(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_data_set_ref(&self) -> Option<&DataSetRef> {
        match self {
            Value::Ref(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}
