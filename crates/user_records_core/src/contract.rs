use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaque stored document. Only the `id` field is distinguished; every
/// other field is store-defined and untyped.
pub type RecordDocument = Map<String, Value>;

/// Extract the primary key of a document, if present as a string.
pub fn document_id(document: &RecordDocument) -> Option<&str> {
    document.get("id").and_then(Value::as_str)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Alarm state-change payload carried inside an SNS message body. All fields
/// may be absent; missing values render as empty placeholders downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlarmMessage {
    #[serde(rename = "AlarmName", default)]
    pub alarm_name: Option<String>,
    #[serde(rename = "NewStateValue", default)]
    pub new_state_value: Option<String>,
    #[serde(rename = "NewStateReason", default)]
    pub new_state_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnsEventBatch {
    #[serde(rename = "Records", default)]
    pub records: Vec<SnsEnvelope>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnsEnvelope {
    #[serde(rename = "Sns")]
    pub sns: SnsMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnsMessage {
    #[serde(rename = "Message")]
    pub message: String,
}

/// Fixed acknowledgment returned by the alert relay after attempting every
/// envelope in a batch, regardless of individual delivery outcomes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelayAck {
    pub status: String,
}

impl RelayAck {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
