use serde_json::{json, Value};

use crate::adapters::webhook::AlertPoster;
use crate::handlers::{log_error, log_info};
use crate::runtime::alert::{format_alert_text, webhook_payload};
use crate::runtime::contract::{AlarmMessage, RelayAck, SnsEventBatch};

/// Forward each alarm envelope in an SNS batch to the chat webhook, one POST
/// per envelope. Envelopes are independent: a delivery failure is logged and
/// counted but never stops the rest of the batch, and the acknowledgment is
/// the same regardless of delivery outcomes.
pub fn handle_alert_batch(event: Value, poster: &impl AlertPoster) -> Result<RelayAck, String> {
    let batch: SnsEventBatch = serde_json::from_value(event)
        .map_err(|error| format!("Malformed SNS event: {error}"))?;

    let mut delivered = 0usize;
    let mut failed = 0usize;

    for envelope in &batch.records {
        // An unparseable inner payload degrades to empty placeholders.
        let alarm: AlarmMessage = serde_json::from_str(&envelope.sns.message).unwrap_or_default();
        let body = webhook_payload(&format_alert_text(&alarm)).to_string();

        match poster.post_alert(body.as_bytes()) {
            Ok(()) => delivered += 1,
            Err(error) => {
                failed += 1;
                log_error(
                    "alert_relay",
                    "alert_post_failed",
                    json!({"alarm_name": alarm.alarm_name, "error": error}),
                );
            }
        }
    }

    log_info(
        "alert_relay",
        "batch_processed",
        json!({
            "records": batch.records.len(),
            "delivered": delivered,
            "failed": failed,
        }),
    );
    Ok(RelayAck::ok())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;

    struct CapturingPoster {
        bodies: Mutex<Vec<String>>,
        fail_on: Option<usize>,
    }

    impl CapturingPoster {
        fn new() -> Self {
            Self {
                bodies: Mutex::new(Vec::new()),
                fail_on: None,
            }
        }

        fn failing_on(call: usize) -> Self {
            Self {
                bodies: Mutex::new(Vec::new()),
                fail_on: Some(call),
            }
        }

        fn bodies(&self) -> Vec<String> {
            self.bodies.lock().expect("poisoned mutex").clone()
        }
    }

    impl AlertPoster for CapturingPoster {
        fn post_alert(&self, body: &[u8]) -> Result<(), String> {
            let mut bodies = self.bodies.lock().expect("poisoned mutex");
            let call = bodies.len();
            bodies.push(String::from_utf8(body.to_vec()).expect("body should be utf-8"));
            if self.fail_on == Some(call) {
                return Err("connection refused".to_string());
            }
            Ok(())
        }
    }

    fn envelope(message: serde_json::Value) -> serde_json::Value {
        json!({"Sns": {"Message": message.to_string()}})
    }

    #[test]
    fn posts_one_message_per_envelope() {
        let poster = CapturingPoster::new();
        let ack = handle_alert_batch(
            json!({"Records": [
                envelope(json!({"AlarmName": "cpu", "NewStateValue": "ALARM", "NewStateReason": "high"})),
                envelope(json!({"AlarmName": "mem", "NewStateValue": "ALARM", "NewStateReason": "low"})),
                envelope(json!({"AlarmName": "disk", "NewStateValue": "OK", "NewStateReason": "ok"})),
            ]}),
            &poster,
        )
        .expect("relay should ack");

        assert_eq!(ack, RelayAck::ok());
        let bodies = poster.bodies();
        assert_eq!(bodies.len(), 3);
        assert!(bodies[0].contains("ALERT: cpu triggered"));
        assert!(bodies[1].contains("ALERT: mem triggered"));
        assert!(bodies[2].contains("ALERT: disk triggered"));
    }

    #[test]
    fn one_failed_post_does_not_stop_the_batch() {
        let poster = CapturingPoster::failing_on(1);
        let ack = handle_alert_batch(
            json!({"Records": [
                envelope(json!({"AlarmName": "a"})),
                envelope(json!({"AlarmName": "b"})),
                envelope(json!({"AlarmName": "c"})),
            ]}),
            &poster,
        )
        .expect("relay should ack despite the failure");

        assert_eq!(ack.status, "ok");
        assert_eq!(poster.bodies().len(), 3);
    }

    #[test]
    fn missing_reason_renders_empty_placeholder() {
        let poster = CapturingPoster::new();
        handle_alert_batch(
            json!({"Records": [
                envelope(json!({"AlarmName": "cpu", "NewStateValue": "ALARM"})),
            ]}),
            &poster,
        )
        .expect("relay should ack");

        let bodies = poster.bodies();
        assert!(bodies[0].contains("Reason: "));
        assert!(!bodies[0].contains("null"));
    }

    #[test]
    fn unparseable_inner_message_degrades_to_placeholders() {
        let poster = CapturingPoster::new();
        handle_alert_batch(
            json!({"Records": [{"Sns": {"Message": "not json"}}]}),
            &poster,
        )
        .expect("relay should ack");

        assert_eq!(poster.bodies().len(), 1);
        assert!(poster.bodies()[0].contains("ALERT:  triggered"));
    }

    #[test]
    fn empty_batch_acks_without_posting() {
        let poster = CapturingPoster::new();
        let ack = handle_alert_batch(json!({"Records": []}), &poster)
            .expect("relay should ack");

        assert_eq!(ack.status, "ok");
        assert!(poster.bodies().is_empty());
    }

    #[test]
    fn rejects_non_batch_event() {
        let poster = CapturingPoster::new();
        let error = handle_alert_batch(json!({"Records": "nope"}), &poster)
            .expect_err("malformed batch should be rejected");

        assert!(error.starts_with("Malformed SNS event"));
    }
}
