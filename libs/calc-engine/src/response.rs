//! Shared response model for calculator operations

use serde::{Deserialize, Serialize};

/// Outcome of a calculator operation.
///
/// Serialized with the wire field names of the public API:
/// `{"Sucesso": bool, "Message": ["..."]}`. Exactly one semantic outcome is
/// carried per value — a success with a result message, or a failure with
/// an explanation — and the message list is never empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalcResponse {
    /// Success indicator
    #[serde(rename = "Sucesso")]
    pub sucesso: bool,
    /// Human-readable result or failure messages
    #[serde(rename = "Message")]
    pub message: Vec<String>,
}

impl CalcResponse {
    /// Create a success response with a single message
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            sucesso: true,
            message: vec![message.into()],
        }
    }

    /// Create a failure response with a single message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            sucesso: false,
            message: vec![message.into()],
        }
    }
}
