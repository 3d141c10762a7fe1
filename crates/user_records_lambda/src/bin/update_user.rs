use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use user_records_core::contract::ApiGatewayResponse;
use user_records_lambda::adapters::dynamo::DynamoRecordStore;
use user_records_lambda::handlers::update::handle_update_event;

async fn handle_request(
    store: &DynamoRecordStore,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_update_event(event.payload, store))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let table_name =
        std::env::var("TABLE_NAME").map_err(|_| Error::from("TABLE_NAME must be configured"))?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = DynamoRecordStore::new(table_name, aws_sdk_dynamodb::Client::new(&aws_config));

    lambda_runtime::run(service_fn(|event| handle_request(&store, event))).await
}
