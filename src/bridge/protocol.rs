//! Wire envelope spoken by the WebSocket transport

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::error::InvokeError;

/// Request sent to the host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeRequest {
    /// Request ID for correlation
    pub id: String,
    /// Namespaced command name (e.g., "FLURX|fs::exists")
    pub command: String,
    /// Argument record for the command
    #[serde(default)]
    pub args: JsonValue,
}

/// Reply from the host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeResponse {
    /// Request ID for correlation
    pub id: String,
    /// Whether the command succeeded
    pub success: bool,
    /// Result value (if successful)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
    /// Failure payload (if failed), any JSON shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonValue>,
}

impl InvokeResponse {
    pub fn success(id: String, data: JsonValue) -> Self {
        Self {
            id,
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(id: String, payload: JsonValue) -> Self {
        Self {
            id,
            success: false,
            data: None,
            error: Some(payload),
        }
    }

    /// Splits the reply into the result handed back to the caller.
    pub fn into_result(self) -> Result<JsonValue, InvokeError> {
        if self.success {
            Ok(self.data.unwrap_or(JsonValue::Null))
        } else {
            Err(InvokeError::Rejected(self.error.unwrap_or(JsonValue::Null)))
        }
    }
}
