// src/error.rs
//!
//! Facade-level error type
//!

use serde::Serialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::bridge::InvokeError;

/// Failure of a filesystem call.
///
/// The facade never classifies host failures: whatever the host reported is
/// kept verbatim in [`FsError::Remote`].
#[derive(Debug, Error)]
pub enum FsError {
    #[error("{command} failed: {payload}")]
    Remote {
        command: &'static str,
        payload: JsonValue,
    },

    #[error("{command} could not reach the host: {source}")]
    Transport {
        command: &'static str,
        #[source]
        source: InvokeError,
    },

    #[error("Failed to encode arguments for {command}: {source}")]
    Encode {
        command: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected reply to {command}: {source}")]
    Decode {
        command: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FsError {
    pub(crate) fn from_invoke(command: &'static str, error: InvokeError) -> Self {
        match error {
            InvokeError::Rejected(payload) => FsError::Remote { command, payload },
            source => FsError::Transport { command, source },
        }
    }

    /// Command name of the call that failed
    pub fn command(&self) -> &'static str {
        match self {
            FsError::Remote { command, .. }
            | FsError::Transport { command, .. }
            | FsError::Encode { command, .. }
            | FsError::Decode { command, .. } => command,
        }
    }

    /// The host's failure payload, if the host rejected the call
    pub fn payload(&self) -> Option<&JsonValue> {
        match self {
            FsError::Remote { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

// Host rejections pass through as the original payload; local failures as text.
impl Serialize for FsError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            FsError::Remote { payload, .. } => payload.serialize(serializer),
            _ => serializer.serialize_str(&self.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejection_becomes_remote_with_payload() {
        let payload = json!({ "kind": "NotFound", "path": "a.txt" });
        let err = FsError::from_invoke("FLURX|fs::remove_file", InvokeError::Rejected(payload.clone()));

        assert!(matches!(err, FsError::Remote { .. }));
        assert_eq!(err.payload(), Some(&payload));
        assert_eq!(err.command(), "FLURX|fs::remove_file");
    }

    #[test]
    fn test_other_invoke_errors_become_transport() {
        let err = FsError::from_invoke("FLURX|fs::exists", InvokeError::Closed);
        assert!(matches!(
            err,
            FsError::Transport {
                source: InvokeError::Closed,
                ..
            }
        ));
        assert_eq!(err.payload(), None);
    }

    #[test]
    fn test_remote_serializes_as_original_payload() {
        let payload = json!(["permission denied", 13]);
        let err = FsError::from_invoke("FLURX|fs::read_dir", InvokeError::Rejected(payload.clone()));
        assert_eq!(serde_json::to_value(&err).unwrap(), payload);
    }

    #[test]
    fn test_transport_serializes_as_message() {
        let err = FsError::from_invoke("FLURX|fs::read_dir", InvokeError::Timeout);
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!("FLURX|fs::read_dir could not reach the host: Request timeout")
        );
    }
}
