use std::collections::BTreeMap;

use serde_json::Value;

use crate::contract::{RecordDocument, ValidationError};

/// A planned partial update: a `SET` expression over the requested fields
/// plus the placeholder-to-value bindings it references.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePlan {
    pub expression: String,
    pub values: BTreeMap<String, Value>,
}

/// Build the update plan for a field set taken from an update request body.
///
/// Each field becomes a `name = :name` clause; existing fields not named in
/// the set are left untouched by the store. An empty field set is rejected
/// rather than producing a degenerate `SET` expression.
pub fn plan_update(fields: &RecordDocument) -> Result<UpdatePlan, ValidationError> {
    if fields.is_empty() {
        return Err(ValidationError::new(
            "Update body must contain at least one field",
        ));
    }

    let mut clauses = Vec::with_capacity(fields.len());
    let mut values = BTreeMap::new();

    for (name, value) in fields {
        clauses.push(format!("{name} = :{name}"));
        values.insert(format!(":{name}"), value.clone());
    }

    Ok(UpdatePlan {
        expression: format!("SET {}", clauses.join(", ")),
        values,
    })
}
