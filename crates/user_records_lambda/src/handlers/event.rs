use serde_json::Value;

use crate::runtime::contract::RecordDocument;

/// Pull the JSON-object body out of an API Gateway proxy event. The body
/// arrives as a JSON string on the real wire but tests may pass it inline.
pub(crate) fn parse_body_object(event: &Value) -> Result<RecordDocument, String> {
    let Some(object) = event.as_object() else {
        return Err("Request payload must be a JSON object".to_string());
    };

    let Some(body) = object.get("body") else {
        return Err("Request body is required".to_string());
    };

    let parsed = match body {
        Value::Object(_) => body.clone(),
        Value::String(text) => serde_json::from_str(text)
            .map_err(|error| format!("Malformed JSON body: {error}"))?,
        _ => return Err("Request body must be a JSON object".to_string()),
    };

    match parsed {
        Value::Object(document) => Ok(document),
        _ => Err("Request body must be a JSON object".to_string()),
    }
}

/// Extract the record id from the event's path parameters.
pub(crate) fn path_id(event: &Value) -> Result<String, String> {
    event
        .get("pathParameters")
        .and_then(|parameters| parameters.get("id"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| "Path parameter id is required".to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_stringified_and_inline_bodies() {
        let from_string = parse_body_object(&json!({"body": "{\"id\":\"u1\"}"}))
            .expect("string body should parse");
        let from_object = parse_body_object(&json!({"body": {"id": "u1"}}))
            .expect("inline body should parse");
        assert_eq!(from_string, from_object);
    }

    #[test]
    fn rejects_missing_and_malformed_bodies() {
        assert!(parse_body_object(&json!({})).is_err());
        assert!(parse_body_object(&json!({"body": "not json"})).is_err());
        assert!(parse_body_object(&json!({"body": 7})).is_err());
        assert!(parse_body_object(&json!({"body": "[1,2]"})).is_err());
    }

    #[test]
    fn reads_id_from_path_parameters() {
        let id = path_id(&json!({"pathParameters": {"id": "u1"}})).expect("id should be present");
        assert_eq!(id, "u1");
        assert!(path_id(&json!({"pathParameters": {}})).is_err());
        assert!(path_id(&json!({})).is_err());
    }
}
