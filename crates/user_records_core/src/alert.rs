use serde_json::{json, Value};

use crate::contract::AlarmMessage;

/// Render the three-line chat message for an alarm state change. Absent
/// fields render as empty strings, never as errors.
pub fn format_alert_text(message: &AlarmMessage) -> String {
    let name = message.alarm_name.as_deref().unwrap_or("");
    let state = message.new_state_value.as_deref().unwrap_or("");
    let reason = message.new_state_reason.as_deref().unwrap_or("");
    format!("ALERT: {name} triggered\nStatus: {state}\nReason: {reason}")
}

/// The JSON body posted to the chat webhook.
pub fn webhook_payload(text: &str) -> Value {
    json!({ "text": text })
}
