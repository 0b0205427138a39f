//! UQL Response SDK - Shared library for parsing UQL query results
//!
//! Turns a raw UQL query-engine response payload into a typed, navigable
//! in-memory model. Provides:
//! - Schema models describing the columns of each data set (possibly nested)
//! - Data sets holding typed rows, with name-based references between them
//! - A tag-keyed registry of scalar value deserializers
//! - Engine-reported error handling and per-cell parse diagnostics
//!
//! The SDK performs no network I/O: callers fetch the payload themselves and
//! hand it to [`Response::from_json`].

pub mod deserialize;
pub mod error;
pub mod models;
pub mod parse;
pub mod response;

// Re-export commonly used types
pub use deserialize::{ValueDeserializer, deserializer_for};
pub use error::UqlError;
pub use models::{DataSet, DataSetRef, EngineError, Hint, Model, ModelField, Value};
pub use response::{CellDiagnostic, MAIN_DATASET, Response};
