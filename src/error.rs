//! Error type for response parsing and navigation

/// Error raised while parsing a UQL response or navigating a parsed one
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UqlError {
    #[error("malformed response payload: {0}")]
    MalformedPayload(String),
    #[error("cannot decode value as {tag}: {reason}")]
    Decode { tag: String, reason: String },
    #[error("unknown field type: {0}")]
    UnknownType(String),
    #[error("data set not found: {0}")]
    DataSetNotFound(String),
    #[error("query failed: {0}")]
    Engine(String),
}
