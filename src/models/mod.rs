//! Models module for the SDK
//!
//! Defines the core data structures a parsed UQL response is made of:
//! schema models, typed cell values, data sets and engine-reported errors.

pub mod dataset;
pub mod engine_error;
pub mod model;
pub mod value;

pub use dataset::{DataSet, DataSetRef};
pub use engine_error::EngineError;
pub use model::{Hint, Model, ModelField, REFERENCE_FORM};
pub use value::Value;
