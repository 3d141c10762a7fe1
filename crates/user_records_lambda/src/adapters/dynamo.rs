use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::Value;

use crate::adapters::record_store::RecordStore;
use crate::runtime::contract::RecordDocument;
use crate::runtime::update_plan::UpdatePlan;

/// DynamoDB-backed record store. One client handle is constructed per
/// process and reused across invocations.
#[derive(Debug, Clone)]
pub struct DynamoRecordStore {
    table_name: String,
    dynamodb_client: aws_sdk_dynamodb::Client,
}

impl DynamoRecordStore {
    pub fn new(table_name: String, dynamodb_client: aws_sdk_dynamodb::Client) -> Self {
        Self {
            table_name,
            dynamodb_client,
        }
    }
}

impl RecordStore for DynamoRecordStore {
    fn put_record(&self, document: &RecordDocument) -> Result<(), String> {
        let item: HashMap<String, AttributeValue> = document
            .iter()
            .map(|(name, value)| (name.clone(), to_attribute_value(value)))
            .collect();
        let table_name = self.table_name.clone();
        let client = self.dynamodb_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .set_item(Some(item))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to put record into dynamodb: {error}"))
            })
        })
    }

    fn update_record(&self, id: &str, plan: &UpdatePlan) -> Result<(), String> {
        let values: HashMap<String, AttributeValue> = plan
            .values
            .iter()
            .map(|(placeholder, value)| (placeholder.clone(), to_attribute_value(value)))
            .collect();
        let expression = plan.expression.clone();
        let record_id = id.to_string();
        let table_name = self.table_name.clone();
        let client = self.dynamodb_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .update_item()
                    .table_name(table_name)
                    .key("id", AttributeValue::S(record_id))
                    .update_expression(expression)
                    .set_expression_attribute_values(Some(values))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to update record in dynamodb: {error}"))
            })
        })
    }

    fn delete_record(&self, id: &str) -> Result<(), String> {
        let record_id = id.to_string();
        let table_name = self.table_name.clone();
        let client = self.dynamodb_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .delete_item()
                    .table_name(table_name)
                    .key("id", AttributeValue::S(record_id))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to delete record from dynamodb: {error}"))
            })
        })
    }
}

/// Map an opaque JSON value onto the DynamoDB attribute model. Numbers ride
/// as their decimal string form, which is what the wire format expects.
pub fn to_attribute_value(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(flag) => AttributeValue::Bool(*flag),
        Value::Number(number) => AttributeValue::N(number.to_string()),
        Value::String(text) => AttributeValue::S(text.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(to_attribute_value).collect()),
        Value::Object(entries) => AttributeValue::M(
            entries
                .iter()
                .map(|(name, value)| (name.clone(), to_attribute_value(value)))
                .collect(),
        ),
    }
}
