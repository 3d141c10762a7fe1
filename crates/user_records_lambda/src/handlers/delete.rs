use serde_json::{json, Value};

use crate::adapters::record_store::RecordStore;
use crate::handlers::event::path_id;
use crate::handlers::{
    log_error, log_info, store_error_response, success_response, validation_error_response,
};
use crate::runtime::contract::ApiGatewayResponse;

/// Remove the record named by the path id. Deleting a missing key is a
/// success, not an error; the confirmation does not depend on prior
/// existence.
pub fn handle_delete_event(event: Value, store: &impl RecordStore) -> ApiGatewayResponse {
    let id = match path_id(&event) {
        Ok(value) => value,
        Err(message) => return validation_error_response(&message),
    };

    if let Err(error) = store.delete_record(&id) {
        log_error("delete_handler", "delete_failed", json!({"id": id, "error": error}));
        return store_error_response(error);
    }

    log_info("delete_handler", "record_deleted", json!({"id": id}));
    success_response(200, json!({"message": format!("User {id} deleted")}))
}
