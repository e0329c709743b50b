//! Inbound stream envelope
//!
//! Every text frame pushed by the server is a JSON object with a `type` tag:
//!
//! ```json
//! {"type": "log", "message": "..."}
//! {"type": "directive_update", "directive": {"id": "...", "agent_id": "...", "task": "...", "status": "..."}}
//! {"type": "info", "message": "..."}
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::Directive;

/// Parsed inbound message
#[derive(Debug, Clone, PartialEq)]
pub enum StreamMessage {
    Log { message: String },
    DirectiveUpdate { directive: Directive },
    Info { message: String },
    /// Well-formed envelope with a `type` this client does not handle
    Unknown { kind: String },
}

impl StreamMessage {
    /// The envelope `type` tag
    pub fn kind(&self) -> &str {
        match self {
            StreamMessage::Log { .. } => "log",
            StreamMessage::DirectiveUpdate { .. } => "directive_update",
            StreamMessage::Info { .. } => "info",
            StreamMessage::Unknown { kind } => kind,
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Envelope {
    Log { message: String },
    DirectiveUpdate { directive: Directive },
    Info { message: String },
}

const KNOWN_TYPES: &[&str] = &["log", "directive_update", "info"];

impl From<Envelope> for StreamMessage {
    fn from(envelope: Envelope) -> Self {
        match envelope {
            Envelope::Log { message } => StreamMessage::Log { message },
            Envelope::DirectiveUpdate { directive } => StreamMessage::DirectiveUpdate { directive },
            Envelope::Info { message } => StreamMessage::Info { message },
        }
    }
}

/// Parse one inbound text frame.
///
/// Unrecognized `type` values are not an error; they come back as
/// [`StreamMessage::Unknown`] so the caller can report them.
///
/// # Errors
///
/// Returns [`Error::Protocol`] if the text is not JSON, has no string `type`
/// field, or a known type is missing required fields.
pub fn parse_stream_message(text: &str) -> Result<StreamMessage> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| Error::protocol(format!("not valid JSON ({e})")))?;

    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::protocol("missing \"type\" field"))?
        .to_string();

    if !KNOWN_TYPES.contains(&kind.as_str()) {
        return Ok(StreamMessage::Unknown { kind });
    }

    let envelope: Envelope = serde_json::from_value(value)
        .map_err(|e| Error::protocol(format!("invalid {kind} message ({e})")))?;
    Ok(envelope.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log() {
        let msg = parse_stream_message(r#"{"type":"log","message":"Log Entry 1"}"#).unwrap();
        assert_eq!(
            msg,
            StreamMessage::Log {
                message: "Log Entry 1".into()
            }
        );
        assert_eq!(msg.kind(), "log");
    }

    #[test]
    fn test_parse_info() {
        let msg = parse_stream_message(r#"{"type":"info","message":"agent joined"}"#).unwrap();
        assert!(matches!(msg, StreamMessage::Info { message } if message == "agent joined"));
    }

    #[test]
    fn test_parse_directive_update() {
        let json = r#"{"type":"directive_update","directive":{"id":"d1","agent_id":"a1","task":"t1","status":"pending"}}"#;
        match parse_stream_message(json).unwrap() {
            StreamMessage::DirectiveUpdate { directive } => {
                assert_eq!(directive, Directive::new("d1", "a1", "t1", "pending"));
            }
            other => panic!("expected DirectiveUpdate, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown_type() {
        let msg = parse_stream_message(r#"{"type":"heartbeat"}"#).unwrap();
        assert_eq!(
            msg,
            StreamMessage::Unknown {
                kind: "heartbeat".into()
            }
        );
        assert_eq!(msg.kind(), "heartbeat");
    }

    #[test]
    fn test_parse_non_json_is_protocol_error() {
        let err = parse_stream_message("📝 Log Entry 1: Simulated log message.").unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_parse_missing_type() {
        let err = parse_stream_message(r#"{"message":"no tag"}"#).unwrap_err();
        assert!(err.to_string().contains("type"));
    }

    #[test]
    fn test_parse_directive_update_without_directive() {
        let err = parse_stream_message(r#"{"type":"directive_update"}"#).unwrap_err();
        assert!(err.to_string().contains("directive_update"));
    }

    #[test]
    fn test_parse_log_without_message() {
        assert!(parse_stream_message(r#"{"type":"log"}"#).is_err());
    }
}
