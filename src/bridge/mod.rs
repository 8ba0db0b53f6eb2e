//! Invocation Bridge
//!
//! The single primitive the filesystem facade depends on: send a command name
//! plus an argument record to the host, get back a JSON value or the host's
//! failure payload. Transports implement [`Invoke`].

mod error;
mod mock;
mod protocol;
mod websocket;

pub use error::{BridgeError, InvokeError};
pub use mock::{MockBridge, RecordedRequest};
pub use protocol::{InvokeRequest, InvokeResponse};
pub use websocket::WebSocketBridge;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Command-invocation bridge trait
///
/// Implementations must be thread-safe (Send + Sync) and must not impose any
/// ordering between concurrent calls beyond what the transport provides.
#[async_trait]
pub trait Invoke: Send + Sync {
    /// Issue `command` with `args` and wait for the host's reply.
    async fn invoke(&self, command: &str, args: JsonValue) -> Result<JsonValue, InvokeError>;
}

#[async_trait]
impl<T: Invoke + ?Sized> Invoke for Arc<T> {
    async fn invoke(&self, command: &str, args: JsonValue) -> Result<JsonValue, InvokeError> {
        (**self).invoke(command, args).await
    }
}

#[async_trait]
impl<T: Invoke + ?Sized> Invoke for Box<T> {
    async fn invoke(&self, command: &str, args: JsonValue) -> Result<JsonValue, InvokeError> {
        (**self).invoke(command, args).await
    }
}
