use serde_json::{json, Value};

use crate::adapters::record_store::RecordStore;
use crate::handlers::event::parse_body_object;
use crate::handlers::{
    log_error, log_info, store_error_response, success_response, validation_error_response,
};
use crate::runtime::contract::{document_id, ApiGatewayResponse};

/// Insert the full request body as a new record keyed by its `id` field.
/// The put is unconditional: a second create with the same id silently
/// replaces the first.
pub fn handle_create_event(event: Value, store: &impl RecordStore) -> ApiGatewayResponse {
    let document = match parse_body_object(&event) {
        Ok(value) => value,
        Err(message) => return validation_error_response(&message),
    };

    let Some(id) = document_id(&document).map(str::to_string) else {
        return validation_error_response("Record must contain a string id field");
    };

    if let Err(error) = store.put_record(&document) {
        log_error("create_handler", "put_failed", json!({"id": id, "error": error}));
        return store_error_response(error);
    }

    log_info("create_handler", "record_created", json!({"id": id}));
    success_response(201, json!({"message": format!("User {id} created")}))
}
