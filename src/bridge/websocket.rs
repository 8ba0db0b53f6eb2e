//! WebSocket transport for the invocation bridge
//!
//! One connection carries every call. Each request gets a fresh id; a reader
//! task routes replies back to the waiting caller, so concurrent calls may be
//! answered in any order.

use async_trait::async_trait;
use futures_util::{Sink, SinkExt, Stream, StreamExt};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::{self, Message};
use uuid::Uuid;

use super::error::{BridgeError, InvokeError};
use super::protocol::{InvokeRequest, InvokeResponse};
use super::Invoke;
use crate::config::BridgeConfig;

/// Type alias for pending response senders
type ResponseSender = oneshot::Sender<Result<JsonValue, InvokeError>>;

/// In-flight requests keyed by id. `None` once the connection is gone.
///
/// Never locked across an await.
type PendingMap = Arc<Mutex<Option<HashMap<String, ResponseSender>>>>;

fn lock_pending(pending: &PendingMap) -> MutexGuard<'_, Option<HashMap<String, ResponseSender>>> {
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Marks the connection gone. Dropping the senders fails every waiting call.
fn close_pending(pending: &PendingMap) {
    lock_pending(pending).take();
}

/// Removes a request from the pending map when its caller stops waiting,
/// whether it got a reply, timed out, or was dropped.
struct PendingEntry {
    id: String,
    pending: PendingMap,
}

impl Drop for PendingEntry {
    fn drop(&mut self) {
        if let Some(map) = lock_pending(&self.pending).as_mut() {
            map.remove(&self.id);
        }
    }
}

pub struct WebSocketBridge {
    outgoing: mpsc::UnboundedSender<Message>,
    pending: PendingMap,
    request_timeout: Option<Duration>,
    reader: JoinHandle<()>,
}

impl WebSocketBridge {
    /// Connect to the host at `config.url()`.
    pub async fn connect(config: &BridgeConfig) -> Result<Self, BridgeError> {
        let (ws_stream, _) = connect_async(config.url()).await?;
        tracing::info!(url = config.url(), "connected to host bridge");

        let (write, read) = ws_stream.split();
        let pending: PendingMap = Arc::new(Mutex::new(Some(HashMap::new())));

        let (outgoing, rx) = mpsc::unbounded_channel::<Message>();
        tokio::spawn(write_loop(write, rx, pending.clone()));
        let reader = tokio::spawn(read_loop(read, pending.clone()));

        Ok(Self {
            outgoing,
            pending,
            request_timeout: config.request_timeout,
            reader,
        })
    }

    /// False once the connection was closed from either side or the socket failed.
    pub fn is_connected(&self) -> bool {
        lock_pending(&self.pending).is_some()
    }

    /// Close the connection. Pending and later calls fail with
    /// [`InvokeError::Closed`].
    pub fn close(&self) {
        close_pending(&self.pending);
        let _ = self.outgoing.send(Message::Close(None));
    }

    #[cfg(test)]
    pub(crate) fn pending_len(&self) -> usize {
        lock_pending(&self.pending).as_ref().map_or(0, HashMap::len)
    }
}

impl Drop for WebSocketBridge {
    fn drop(&mut self) {
        self.reader.abort();
    }
}

#[async_trait]
impl Invoke for WebSocketBridge {
    async fn invoke(&self, command: &str, args: JsonValue) -> Result<JsonValue, InvokeError> {
        let id = Uuid::new_v4().to_string();
        let request = InvokeRequest {
            id: id.clone(),
            command: command.to_string(),
            args,
        };
        let json = serde_json::to_string(&request)?;

        let (tx, rx) = oneshot::channel();
        {
            let mut guard = lock_pending(&self.pending);
            let pending = guard.as_mut().ok_or(InvokeError::Closed)?;
            pending.insert(id.clone(), tx);
        }
        let _entry = PendingEntry {
            id,
            pending: self.pending.clone(),
        };

        if self.outgoing.send(Message::Text(json.into())).is_err() {
            return Err(InvokeError::Closed);
        }

        let reply = match self.request_timeout {
            Some(limit) => match tokio::time::timeout(limit, rx).await {
                Ok(reply) => reply,
                Err(_) => return Err(InvokeError::Timeout),
            },
            None => rx.await,
        };

        // A dropped sender means the connection went away
        reply.map_err(|_| InvokeError::Closed)?
    }
}

async fn write_loop<W>(mut write: W, mut rx: mpsc::UnboundedReceiver<Message>, pending: PendingMap)
where
    W: Sink<Message, Error = tungstenite::Error> + Unpin,
{
    while let Some(msg) = rx.recv().await {
        if let Err(e) = write.send(msg).await {
            tracing::warn!(error = %e, "bridge write failed");
            break;
        }
    }

    close_pending(&pending);
}

async fn read_loop<S>(mut read: S, pending: PendingMap)
where
    S: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
{
    while let Some(msg_result) = read.next().await {
        match msg_result {
            Ok(Message::Text(text)) => route_reply(&text, &pending),
            Ok(Message::Close(_)) => {
                tracing::info!("host closed bridge connection");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "bridge read failed");
                break;
            }
        }
    }

    close_pending(&pending);
}

fn route_reply(text: &str, pending: &PendingMap) {
    let response: InvokeResponse = match serde_json::from_str(text) {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed bridge reply");
            return;
        }
    };

    let sender = lock_pending(pending)
        .as_mut()
        .and_then(|map| map.remove(&response.id));

    match sender {
        Some(tx) => {
            let _ = tx.send(response.into_result());
        }
        None => tracing::warn!(id = %response.id, "reply for unknown request"),
    }
}
