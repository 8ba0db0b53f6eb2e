//! Error types for the invocation bridge

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Failure of a single `invoke` call.
///
/// `Rejected` carries whatever the host attached to its failure reply, untouched.
/// Every other variant is raised on this side of the boundary.
#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("Command rejected by host: {0}")]
    Rejected(JsonValue),

    #[error("Transport error: {reason}")]
    Transport { reason: String },

    #[error("Connection closed")]
    Closed,

    #[error("Request timeout")]
    Timeout,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while configuring or connecting a transport.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Invalid bridge URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
