//! In-memory bridge with scripted replies
//!
//! Records every request it receives, in order, and answers through a handler
//! closure. Used by the crate's tests and by embedders that want to exercise
//! front-end code without a host process.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::sync::Mutex;

use super::error::InvokeError;
use super::Invoke;

type Handler = dyn Fn(&str, &JsonValue) -> Result<JsonValue, JsonValue> + Send + Sync;

/// A request as seen by the bridge
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub command: String,
    pub args: JsonValue,
}

pub struct MockBridge {
    requests: Mutex<Vec<RecordedRequest>>,
    handler: Box<Handler>,
}

impl MockBridge {
    /// Answers every request through `handler`. `Err` payloads are delivered
    /// to the caller as host rejections.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&str, &JsonValue) -> Result<JsonValue, JsonValue> + Send + Sync + 'static,
    {
        Self {
            requests: Mutex::new(Vec::new()),
            handler: Box::new(handler),
        }
    }

    /// Answers every request with `value`.
    pub fn replying(value: JsonValue) -> Self {
        Self::new(move |_, _| Ok(value.clone()))
    }

    /// Rejects every request with `payload`.
    pub fn rejecting(payload: JsonValue) -> Self {
        Self::new(move |_, _| Err(payload.clone()))
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        match self.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests().pop()
    }
}

impl Default for MockBridge {
    fn default() -> Self {
        Self::replying(JsonValue::Null)
    }
}

#[async_trait]
impl Invoke for MockBridge {
    async fn invoke(&self, command: &str, args: JsonValue) -> Result<JsonValue, InvokeError> {
        let reply = (self.handler)(command, &args);

        self.requests
            .lock()
            .map_err(|e| InvokeError::Transport {
                reason: format!("Failed to lock request log: {}", e),
            })?
            .push(RecordedRequest {
                command: command.to_string(),
                args,
            });

        reply.map_err(InvokeError::Rejected)
    }
}
