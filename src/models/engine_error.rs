//! Engine-reported errors

use serde::{Deserialize, Serialize};

/// One failure reported by the query engine in the payload's errors array.
///
/// These are data, not exceptions: a response may carry both errors and
/// partial or complete results, so callers should check errors before
/// rendering data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineError {
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
}

impl EngineError {
    /// Combine engine errors into one diagnostic message.
    ///
    /// Entries render as "title: detail" and are joined with ", ".
    pub fn aggregate(errors: &[EngineError]) -> String {
        let messages: Vec<String> = errors
            .iter()
            .map(|error| format!("{}: {}", error.title, error.detail))
            .collect();
        messages.join(", ")
    }
}
