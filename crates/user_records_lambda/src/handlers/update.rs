use serde_json::{json, Value};

use crate::adapters::record_store::RecordStore;
use crate::handlers::event::{parse_body_object, path_id};
use crate::handlers::{
    log_error, log_info, store_error_response, success_response, validation_error_response,
};
use crate::runtime::contract::ApiGatewayResponse;
use crate::runtime::update_plan::plan_update;

/// Apply a field-level merge to the record named by the path id. Fields not
/// present in the body keep their prior values; an id with no record yet
/// follows the store's upsert semantics and gains a partial record.
pub fn handle_update_event(event: Value, store: &impl RecordStore) -> ApiGatewayResponse {
    let id = match path_id(&event) {
        Ok(value) => value,
        Err(message) => return validation_error_response(&message),
    };

    let fields = match parse_body_object(&event) {
        Ok(value) => value,
        Err(message) => return validation_error_response(&message),
    };

    let plan = match plan_update(&fields) {
        Ok(value) => value,
        Err(error) => return validation_error_response(error.message()),
    };

    if let Err(error) = store.update_record(&id, &plan) {
        log_error("update_handler", "update_failed", json!({"id": id, "error": error}));
        return store_error_response(error);
    }

    log_info(
        "update_handler",
        "record_updated",
        json!({"id": id, "fields": plan.values.len()}),
    );
    success_response(200, json!({"message": format!("User {id} updated")}))
}
